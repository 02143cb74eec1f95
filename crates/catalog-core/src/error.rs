//! Core Errors
//!
//! None of these reach the UI directly: callers log them and fall back to
//! an empty or default value.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("duplicate item id {0} in catalog")]
    DuplicateId(u32),
    #[error("catalog parse error: {0}")]
    Parse(#[from] serde_json::Error),
}

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("storage unavailable: {0}")]
    Unavailable(String),
    #[error("storage backend error: {0}")]
    Backend(String),
    #[error("stored value is not valid JSON: {0}")]
    Serialization(#[from] serde_json::Error),
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("config parse error: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid config: {0}")]
    Invalid(String),
}

pub type StoreResult<T> = Result<T, StoreError>;
