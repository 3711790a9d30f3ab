//! # Export Errors
//!
//! Error types for deck emission.

use thiserror::Error;

/// Errors that can occur while emitting a deck.
#[derive(Debug, Clone, Error)]
pub enum ExportError {
    /// Geometry error from the sampling layer
    #[error("Geometry error: {0}")]
    Geometry(#[from] raygen_geometry::GeometryError),
}

#[cfg(test)]
mod tests {
    use super::*;
    use raygen_geometry::GeometryError;

    #[test]
    fn test_error_wraps_geometry_layer() {
        let err: ExportError =
            GeometryError::InvalidArgument("sample count must be positive".to_string()).into();
        assert!(err.to_string().contains("Geometry error"));
        assert!(err.to_string().contains("sample count"));
    }
}
