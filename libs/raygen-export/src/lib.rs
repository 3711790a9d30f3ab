//! # Raygen Export
//!
//! Input deck emission for the optical solver.
//!
//! ## Architecture
//!
//! ```text
//! raygen-geometry (points) → raygen-export (deck text)
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use raygen_export::render_source_ring;
//!
//! let deck = render_source_ring(20, 15.0).unwrap();
//! assert!(deck.starts_with('['));
//! assert!(deck.ends_with("];"));
//! ```

pub mod deck;
pub mod error;
pub mod record;

pub use deck::{deck_from_points, write_deck};
pub use error::ExportError;
pub use record::PoseRecord;

/// Renders the source-ring deck for the given configuration.
///
/// This is the main entry point for deck generation: samples `count`
/// points uniformly around a circle of radius `radius` and emits the
/// full text block. The arguments are validated by the sampling layer
/// before anything is rendered, so a deck is never partial.
///
/// # Arguments
///
/// * `count` - Number of source points (must be positive)
/// * `radius` - Ring radius (any finite value)
///
/// # Returns
///
/// The complete deck text, one record line per source point.
///
/// # Example
///
/// ```rust
/// use raygen_export::render_source_ring;
///
/// let deck = render_source_ring(1, 15.0).unwrap();
/// assert_eq!(deck, "[15 0 0 0 0 1;\n];");
/// ```
pub fn render_source_ring(count: u32, radius: f64) -> Result<String, ExportError> {
    let points = raygen_geometry::sample_ring(count, radius)?;
    Ok(write_deck(&deck_from_points(&points)))
}
