//! Error types for the reading pacer
//!
//! Only construction can fail hard. Playback controls are total and absorb
//! invalid calls as no-ops, so they never surface one of these.

use thiserror::Error;

/// Top-level pacer error type
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PacerError {
    /// The target content container could not be resolved
    #[error("Content container not found: {0}")]
    ContainerNotFound(String),

    /// No global `window` object (not running in a browser)
    #[error("No window available in this environment")]
    NoWindow,

    /// The window has no document attached
    #[error("No document available on window")]
    NoDocument,

    /// Configuration rejected by validation
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// The host selection API refused a directive
    #[error("Selection failed: {0}")]
    Selection(String),
}

pub type PacerResult<T> = Result<T, PacerError>;
