use crate::modules::activities::core::identifiers::{ActivityName, ParticipantId};
use crate::modules::activities::use_cases::unregister_from_activity::command::UnregisterFromActivity;
use crate::tests::fixtures::commands::sign_up_for_activity::SignUpForActivityDto;
use std::fs;

pub struct UnregisterFromActivityBuilder {
    inner: UnregisterFromActivity,
}

#[allow(dead_code)]
impl UnregisterFromActivityBuilder {
    pub fn new() -> Self {
        let json_str =
            fs::read_to_string("./src/tests/fixtures/commands/json/unregister_from_activity.json")
                .unwrap();
        // Same transport shape as a sign-up.
        let dto: SignUpForActivityDto = serde_json::from_str(&json_str).unwrap();

        Self {
            inner: UnregisterFromActivity {
                activity_name: dto.activity_name.into(),
                participant: dto.email.into(),
            },
        }
    }

    pub fn activity_name(mut self, v: impl Into<String>) -> Self {
        self.inner.activity_name = ActivityName::new(v);
        self
    }

    pub fn participant(mut self, v: impl Into<String>) -> Self {
        self.inner.participant = ParticipantId::new(v);
        self
    }

    pub fn build(self) -> UnregisterFromActivity {
        self.inner
    }
}
