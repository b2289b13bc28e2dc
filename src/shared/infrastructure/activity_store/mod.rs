use crate::modules::activities::core::activity::Activity;
use crate::modules::activities::core::decision::{DecideError, Decision};
use crate::modules::activities::core::identifiers::ActivityName;
use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ActivityStoreError {
    #[error("backend error: {0}")]
    Backend(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadedActivity {
    pub activity: Activity,
    pub version: i64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpdateOutcome {
    Applied { activity: Activity, version: i64 },
    Rejected { reason: DecideError },
}

#[async_trait]
pub trait ActivityStore: Send + Sync {
    async fn load(&self, name: &ActivityName)
    -> Result<Option<LoadedActivity>, ActivityStoreError>;

    /// Decides against the current roster and applies the accepted events as one step.
    ///
    /// No other update on the same store can interleave between `decide` and the write.
    /// An unknown activity is rejected with `DecideError::ActivityNotFound` without calling `decide`.
    async fn update<F>(
        &self,
        name: &ActivityName,
        decide: F,
    ) -> Result<UpdateOutcome, ActivityStoreError>
    where
        F: FnOnce(&Activity) -> Decision + Send + 'static;
}

pub mod in_memory;
