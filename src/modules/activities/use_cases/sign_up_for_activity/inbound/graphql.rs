use async_graphql::{Context, ErrorExtensions, Object, Result as GqlResult};

use crate::modules::activities::use_cases::sign_up_for_activity::command::SignUpForActivity;
use crate::shell::state::AppState;

#[derive(Default)]
pub struct SignUpMutation;

#[Object]
impl SignUpMutation {
    async fn sign_up_for_activity(
        &self,
        context: &Context<'_>,
        activity_name: String,
        email: String,
    ) -> GqlResult<String> {
        let state = context.data_unchecked::<AppState>();
        let command = SignUpForActivity {
            activity_name: activity_name.into(),
            participant: email.into(),
        };
        let message = command.confirmation();

        state
            .sign_up_handler
            .handle(command)
            .await
            .map_err(|e| e.extend())?;

        Ok(message)
    }
}
