use crate::modules::activities::use_cases::errors::ApplicationError;
use crate::modules::activities::use_cases::sign_up_for_activity::command::SignUpForActivity;
use crate::modules::activities::use_cases::sign_up_for_activity::decide::decide_sign_up;
use crate::shared::infrastructure::activity_store::{ActivityStore, UpdateOutcome};
use std::sync::Arc;

pub struct SignUpForActivityHandler<TStore>
where
    TStore: ActivityStore + 'static,
{
    store: Arc<TStore>,
}

impl<TStore> SignUpForActivityHandler<TStore>
where
    TStore: ActivityStore + 'static,
{
    pub fn new(store: Arc<TStore>) -> Self {
        Self { store }
    }

    pub async fn handle(&self, command: SignUpForActivity) -> Result<(), ApplicationError> {
        let activity_name = command.activity_name.clone();
        let participant = command.participant.clone();

        let outcome = self
            .store
            .update(&activity_name, move |activity| {
                decide_sign_up(activity, command)
            })
            .await?;

        match outcome {
            UpdateOutcome::Applied { activity, version } => {
                if activity.is_over_capacity() {
                    tracing::warn!(
                        activity = %activity_name,
                        participants = activity.participants.len(),
                        max_participants = activity.max_participants,
                        "roster exceeds declared capacity"
                    );
                }
                tracing::info!(activity = %activity_name, %participant, version, "participant signed up");
                Ok(())
            }
            UpdateOutcome::Rejected { reason } => {
                tracing::debug!(activity = %activity_name, %participant, %reason, "sign-up rejected");
                Err(reason.into())
            }
        }
    }
}
