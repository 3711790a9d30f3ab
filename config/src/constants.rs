//! # Configuration Constants
//!
//! Centralized constants for the raygen pipeline. Precision tolerances,
//! reference deck parameters, and dioptre bench defaults are defined here.
//!
//! ## Categories
//!
//! - **Precision**: Floating-point comparison tolerances
//! - **Deck**: Source ring and record parameters for the emitted deck
//! - **Dioptre**: Refracting surface and ray tracing defaults

// =============================================================================
// PRECISION CONSTANTS
// =============================================================================

/// Epsilon for floating-point comparisons.
///
/// Used for determining if two floating-point values are "equal" within
/// numerical tolerance. This value is chosen to balance precision with
/// robustness against floating-point errors.
///
/// # Example
///
/// ```rust
/// use config::constants::EPSILON;
///
/// fn approximately_equal(a: f64, b: f64) -> bool {
///     (a - b).abs() < EPSILON
/// }
///
/// assert!(approximately_equal(1.0, 1.0 + 1e-11));
/// ```
pub const EPSILON: f64 = 1e-10;

// =============================================================================
// DECK CONSTANTS
// =============================================================================

/// Default number of source points on the ring.
///
/// The reference deck places 20 points around the circle, inclusive of
/// both sweep endpoints, so the first and last records coincide.
///
/// # Example
///
/// ```rust
/// use config::constants::DEFAULT_SOURCE_COUNT;
///
/// let user_count: Option<u32> = None;
/// let count = user_count.unwrap_or(DEFAULT_SOURCE_COUNT);
/// assert_eq!(count, 20);
/// ```
pub const DEFAULT_SOURCE_COUNT: u32 = 20;

/// Default radius of the source ring.
///
/// Distance from the bench origin to every generated source point, in
/// the solver's length units.
///
/// # Example
///
/// ```rust
/// use config::constants::DEFAULT_RING_RADIUS;
///
/// let circumference = 2.0 * std::f64::consts::PI * DEFAULT_RING_RADIUS;
/// assert!(circumference > 94.0);
/// ```
pub const DEFAULT_RING_RADIUS: f64 = 15.0;

/// Fixed trailing fields of every deck record.
///
/// The solver expects each record as `<x> <y> 0 0 0 1;`. The four
/// trailing fields are placeholders defined by the solver's record
/// shape; raygen emits them verbatim and never interprets them.
///
/// # Example
///
/// ```rust
/// use config::constants::RECORD_PADDING;
///
/// let record = format!("{} {} {};", 15.0, 0.0, RECORD_PADDING);
/// assert_eq!(record, "15 0 0 0 0 1;");
/// ```
pub const RECORD_PADDING: &str = "0 0 0 1";

// =============================================================================
// DIOPTRE CONSTANTS
// =============================================================================

/// Default number of rays traced against the dioptre.
///
/// # Example
///
/// ```rust
/// use config::constants::{DEFAULT_RAY_COUNT, DEFAULT_PROFILE_SAMPLES};
///
/// // Each ray strikes every (samples / rays)-th profile point
/// let stride = DEFAULT_PROFILE_SAMPLES / DEFAULT_RAY_COUNT;
/// assert_eq!(stride, 100);
/// ```
pub const DEFAULT_RAY_COUNT: u32 = 10;

/// Default number of samples along the dioptre profile.
///
/// The profile is sampled densely so impact points can be selected by
/// stride without losing the surface shape.
pub const DEFAULT_PROFILE_SAMPLES: u32 = 1000;

/// Default x position of the ray source.
///
/// The point source sits on the optical axis, upstream of the dioptre.
///
/// # Example
///
/// ```rust
/// use config::constants::DEFAULT_SOURCE_X;
///
/// assert!(DEFAULT_SOURCE_X < 0.0);
/// ```
pub const DEFAULT_SOURCE_X: f64 = -10.0;

/// Default lower bound of the dioptre profile along y.
pub const DEFAULT_DIOPTRE_Y_MIN: f64 = -1.0;

/// Default upper bound of the dioptre profile along y.
pub const DEFAULT_DIOPTRE_Y_MAX: f64 = 1.0;

/// Default quadratic coefficient of the dioptre profile.
///
/// The reference bench uses a concave parabola `x = -0.1 * y^2`.
///
/// # Example
///
/// ```rust
/// use config::constants::DEFAULT_DIOPTRE_CURVATURE;
///
/// let apex_x = DEFAULT_DIOPTRE_CURVATURE * 0.0 * 0.0;
/// assert_eq!(apex_x, 0.0);
/// ```
pub const DEFAULT_DIOPTRE_CURVATURE: f64 = -0.1;

// =============================================================================
// HELPER FUNCTIONS
// =============================================================================

/// Checks if two f64 values are approximately equal within EPSILON.
///
/// # Example
///
/// ```rust
/// use config::constants::approx_equal;
///
/// assert!(approx_equal(1.0, 1.0 + 1e-11));
/// assert!(!approx_equal(1.0, 1.1));
/// ```
#[inline]
pub fn approx_equal(a: f64, b: f64) -> bool {
    (a - b).abs() < EPSILON
}

/// Checks if a f64 value is approximately zero within EPSILON.
///
/// # Example
///
/// ```rust
/// use config::constants::approx_zero;
///
/// assert!(approx_zero(1e-11));
/// assert!(!approx_zero(0.1));
/// ```
#[inline]
pub fn approx_zero(value: f64) -> bool {
    value.abs() < EPSILON
}
