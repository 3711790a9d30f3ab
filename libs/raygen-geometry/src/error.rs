//! # Geometry Errors
//!
//! Error types for sampling and ray geometry.

use thiserror::Error;

/// Errors that can occur while generating geometry.
#[derive(Debug, Clone, Error)]
pub enum GeometryError {
    /// Invalid argument.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Invalid range.
    #[error("Invalid range: {0}")]
    InvalidRange(String),
}

// =============================================================================
// TESTS
// =============================================================================
