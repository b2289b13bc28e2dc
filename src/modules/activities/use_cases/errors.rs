use crate::modules::activities::core::decision::DecideError;
use crate::shared::infrastructure::activity_store::ActivityStoreError;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ApplicationError {
    #[error(transparent)]
    Store(#[from] ActivityStoreError),

    #[error(transparent)]
    Domain(#[from] DecideError),
}

