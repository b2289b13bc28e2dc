use crate::modules::activities::use_cases::errors::ApplicationError;
use crate::modules::activities::use_cases::unregister_from_activity::command::UnregisterFromActivity;
use crate::modules::activities::use_cases::unregister_from_activity::decide::decide_unregister;
use crate::shared::infrastructure::activity_store::{ActivityStore, UpdateOutcome};
use std::sync::Arc;

pub struct UnregisterFromActivityHandler<TStore>
where
    TStore: ActivityStore + 'static,
{
    store: Arc<TStore>,
}

impl<TStore> UnregisterFromActivityHandler<TStore>
where
    TStore: ActivityStore + 'static,
{
    pub fn new(store: Arc<TStore>) -> Self {
        Self { store }
    }

    pub async fn handle(&self, command: UnregisterFromActivity) -> Result<(), ApplicationError> {
        let activity_name = command.activity_name.clone();
        let participant = command.participant.clone();

        let outcome = self
            .store
            .update(&activity_name, move |activity| {
                decide_unregister(activity, command)
            })
            .await?;

        match outcome {
            UpdateOutcome::Applied { version, .. } => {
                tracing::info!(activity = %activity_name, %participant, version, "participant unregistered");
                Ok(())
            }
            UpdateOutcome::Rejected { reason } => {
                tracing::debug!(activity = %activity_name, %participant, %reason, "unregister rejected");
                Err(reason.into())
            }
        }
    }
}
