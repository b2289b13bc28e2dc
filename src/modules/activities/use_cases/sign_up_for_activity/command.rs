use crate::modules::activities::core::identifiers::{ActivityName, ParticipantId};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignUpForActivity {
    pub activity_name: ActivityName,
    pub participant: ParticipantId,
}

impl SignUpForActivity {
    pub fn confirmation(&self) -> String {
        format!("Signed up {} for {}", self.participant, self.activity_name)
    }
}
