//! # Config Crate
//!
//! Centralized configuration constants for the raygen pipeline.
//! All magic numbers and reference deck parameters are defined here to
//! ensure consistency across crates and easy configuration management.
//!
//! ## Usage
//!
//! ```rust
//! use config::constants::{EPSILON, DEFAULT_SOURCE_COUNT, DEFAULT_RING_RADIUS};
//!
//! // Use EPSILON for floating-point comparisons
//! let value: f64 = 0.00000000001; // 1e-11, smaller than EPSILON (1e-10)
//! let is_zero = value.abs() < EPSILON;
//! assert!(is_zero);
//!
//! // Reference deck configuration
//! assert_eq!(DEFAULT_SOURCE_COUNT, 20);
//! assert_eq!(DEFAULT_RING_RADIUS, 15.0);
//! ```
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: All constants defined once, used everywhere
//! - **Solver Compatible**: Defaults match the reference input deck
//! - **Well-Documented**: Every constant has clear documentation

pub mod constants;
