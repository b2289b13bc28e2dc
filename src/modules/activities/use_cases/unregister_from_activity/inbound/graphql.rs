use async_graphql::{Context, ErrorExtensions, Object, Result as GqlResult};

use crate::modules::activities::use_cases::unregister_from_activity::command::UnregisterFromActivity;
use crate::shell::state::AppState;

#[derive(Default)]
pub struct UnregisterMutation;

#[Object]
impl UnregisterMutation {
    async fn unregister_from_activity(
        &self,
        context: &Context<'_>,
        activity_name: String,
        email: String,
    ) -> GqlResult<String> {
        let state = context.data_unchecked::<AppState>();
        let command = UnregisterFromActivity {
            activity_name: activity_name.into(),
            participant: email.into(),
        };
        let message = command.confirmation();

        state
            .unregister_handler
            .handle(command)
            .await
            .map_err(|e| e.extend())?;

        Ok(message)
    }
}
