//! Crate error type
//!
//! Only construction and configuration can fail; a running match never does.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid arena: {reason}")]
    InvalidArena { reason: String },

    #[error("invalid tuning: {reason}")]
    InvalidTuning { reason: String },

    #[error("malformed tuning document: {0}")]
    Json(#[from] serde_json::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
