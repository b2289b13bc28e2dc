use crate::modules::activities::core::identifiers::ParticipantId;
use indexmap::IndexMap;
use serde::Serialize;

/// One extracurricular offering and its roster.
///
/// The activity name is not part of the record, it is the key under which the
/// record is stored and listed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Activity {
    pub description: String,
    pub schedule: String,
    pub max_participants: u32,
    pub participants: Vec<ParticipantId>,
}

/// All activities keyed by name, in seed order.
pub type ActivityCatalog = IndexMap<String, Activity>;

impl Activity {
    pub fn has_participant(&self, participant: &ParticipantId) -> bool {
        self.participants.iter().any(|p| p == participant)
    }

    pub fn spots_left(&self) -> u32 {
        let taken = u32::try_from(self.participants.len()).unwrap_or(u32::MAX);
        self.max_participants.saturating_sub(taken)
    }

    pub fn is_over_capacity(&self) -> bool {
        self.participants.len() > self.max_participants as usize
    }
}
