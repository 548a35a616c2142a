use thiserror::Error;

use crate::store::StoreError;

#[derive(Error, Debug)]
pub enum MosError {
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Store error: {0}")]
    Store(#[from] StoreError),
}

pub type Result<T> = std::result::Result<T, MosError>;
