use crate::modules::activities::core::identifiers::{ActivityName, ParticipantId};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActivityEvent {
    ParticipantSignedUp {
        activity_name: ActivityName,
        participant: ParticipantId,
    },
    ParticipantUnregistered {
        activity_name: ActivityName,
        participant: ParticipantId,
    },
}
