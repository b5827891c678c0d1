//! Error types for the cleaning pipeline.
//!
//! All errors are raised at the point of detection and propagate unmodified
//! to the caller. There is no recovery path inside the pipeline: the caller
//! decides whether to skip, log, or abort.

use thiserror::Error;

/// Errors produced by the pipeline core and the transformation steps.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CleanError {
    /// The input is not a string or list of strings, or a step option has
    /// the wrong shape or type.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// A step descriptor names a function absent from the registry.
    #[error("unknown step \"{0}\"")]
    UnknownStep(String),

    /// The step configuration is neither null, a single descriptor, nor a
    /// sequence of descriptors.
    #[error("invalid step configuration: {0}")]
    InvalidConfig(String),
}

pub type Result<T> = std::result::Result<T, CleanError>;
