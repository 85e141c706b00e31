//! Shop error types.

use shophub_commerce::CommerceError;
use thiserror::Error;

/// Errors produced while starting a shop or driving its navigation.
///
/// Only startup returns these to callers. At runtime `ShopState` logs
/// navigation errors and leaves its state unchanged.
#[derive(Error, Debug)]
pub enum ShopError {
    /// Catalog or commerce data error.
    #[error(transparent)]
    Commerce(#[from] CommerceError),

    /// Config file could not be read.
    #[error("Failed to read config file {path}: {source}")]
    ConfigRead {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Config file could not be parsed.
    #[error("Failed to parse config {path}: {message}")]
    ConfigParse { path: String, message: String },

    /// Config parsed but holds an unusable value.
    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    /// Unknown section name.
    #[error("Unknown section: {0}")]
    UnknownSection(String),

    /// Navigation transition not allowed from the current view.
    #[error("Invalid transition from {from} to {to}")]
    InvalidTransition { from: String, to: String },
}

/// Result alias for shop operations.
pub type ShopResult<T> = Result<T, ShopError>;
