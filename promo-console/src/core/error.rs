use thiserror::Error;

use crate::storage::StoreError;

/// Publish errors
#[derive(Debug, Error)]
pub enum PublishError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Storage error: {0}")]
    Store(#[from] StoreError),
}

pub type PublishResult<T> = Result<T, PublishError>;
