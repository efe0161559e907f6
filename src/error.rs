//! Error types. Transaction validation failures are not errors; see
//! [`crate::logic::Rejection`].

use thiserror::Error;

/// A tick or transition produced a state the engine refuses to publish.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EngineError {
    #[error("`{field}` is not a finite number")]
    NonFinite { field: &'static str },
}

/// Encoding or decoding a save code failed.
#[derive(Debug, Error)]
pub enum SaveError {
    #[error("save code is not valid base64: {0}")]
    Base64(#[from] base64::DecodeError),
    #[error("save code is not valid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
    #[error("save data is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("save version {found} is older than the oldest supported ({min})")]
    Incompatible { found: u32, min: u32 },
    #[error("save code is empty")]
    Empty,
    #[error("save data does not describe a game")]
    NotASave,
}

/// The key-value store behind persistence failed.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StorageError {
    #[error("storage is unavailable")]
    Unavailable,
    #[error("storage backend error: {0}")]
    Backend(String),
}

/// An explicit save failed at either stage.
#[derive(Debug, Error)]
pub enum PersistError {
    #[error(transparent)]
    Save(#[from] SaveError),
    #[error(transparent)]
    Storage(#[from] StorageError),
}
