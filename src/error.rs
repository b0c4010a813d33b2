use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    /// Wrong argument count or shape. Always raised before any external call.
    #[error("{0}")]
    Usage(String),

    #[error("Failed to encode search query: {0}")]
    Encoding(String),

    #[error("Failed to open Apple Music: {0}")]
    Launch(String),

    #[error("Invalid date/time format: {input:?} (expected YYYY-MM-DD HH:MM)")]
    DateParse { input: String },

    #[error("Invalid date/time: {input:?} does not exist in timezone {timezone}")]
    NonexistentTime { input: String, timezone: String },

    #[error("Invalid time range: end {end} is not after start {start}")]
    InvalidRange { start: String, end: String },

    #[error("Access to calendar not granted")]
    AuthorizationDenied,

    #[error("Failed to save event: {0}")]
    StoreSave(String),

    #[error("Invalid config file {path}: {message}")]
    Config { path: PathBuf, message: String },
}
