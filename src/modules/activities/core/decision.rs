use crate::modules::activities::core::events::ActivityEvent;

#[derive(Debug, thiserror::Error, Clone, PartialEq, Eq)]
pub enum DecideError {
    #[error("Activity not found")]
    ActivityNotFound,

    #[error("Student is already signed up")]
    AlreadySignedUp,

    #[error("Student is not registered for this activity")]
    NotRegistered,
}

#[derive(Debug, PartialEq, Eq)]
pub enum Decision {
    Accepted { events: Vec<ActivityEvent> },
    Rejected { reason: DecideError },
}
