//! # Raygen Geometry
//!
//! Sampling and ray geometry for optical-bench input decks.
//!
//! ## Architecture
//!
//! ```text
//! raygen-geometry (points) → raygen-export (deck text)
//! ```
//!
//! ## Example
//!
//! ```rust
//! use raygen_geometry::sample_ring;
//!
//! let points = sample_ring(20, 15.0).unwrap();
//! assert_eq!(points.len(), 20);
//! ```

pub mod dioptre;
pub mod error;
pub mod sampling;

// Re-export public API
pub use dioptre::{angle_between_slopes, ParabolicDioptre, Ray};
pub use error::GeometryError;
pub use sampling::{linspace, sample_ring};
