use thiserror::Error;

#[derive(Debug, Error)]
pub enum BoardError {
    #[error("unknown job status: {0:?}")]
    UnknownStatus(String),

    #[error("invalid drag-and-drop id: {0:?}")]
    InvalidDndId(String),

    #[error("storage unavailable: {0}")]
    Storage(String),

    #[error("serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),
}
