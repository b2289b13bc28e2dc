use crate::modules::activities::core::identifiers::{ActivityName, ParticipantId};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnregisterFromActivity {
    pub activity_name: ActivityName,
    pub participant: ParticipantId,
}

impl UnregisterFromActivity {
    pub fn confirmation(&self) -> String {
        format!("Unregistered {} from {}", self.participant, self.activity_name)
    }
}
