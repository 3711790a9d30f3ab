//! # Uniform Sampling
//!
//! Closed-interval uniform sampling and source ring generation.

use crate::error::GeometryError;
use glam::DVec2;
use std::f64::consts::PI;

/// Samples `count` values uniformly over the closed interval `[start, end]`.
///
/// Both endpoints are included: the step is `(end - start) / (count - 1)`
/// for `count > 1`, and a single sample at `start` is produced for
/// `count == 1`. The final sample is pinned to exactly `end` so the
/// interval is closed regardless of accumulated rounding.
///
/// # Arguments
///
/// * `start` - First sample value
/// * `end` - Last sample value
/// * `count` - Number of samples (must be positive)
///
/// # Returns
///
/// The samples in strictly increasing position order.
///
/// # Example
///
/// ```rust
/// use raygen_geometry::sampling::linspace;
///
/// let values = linspace(0.0, 1.0, 5).unwrap();
/// assert_eq!(values, vec![0.0, 0.25, 0.5, 0.75, 1.0]);
/// ```
pub fn linspace(start: f64, end: f64, count: u32) -> Result<Vec<f64>, GeometryError> {
    if count == 0 {
        return Err(GeometryError::InvalidArgument(
            "sample count must be positive".to_string(),
        ));
    }

    if !start.is_finite() || !end.is_finite() {
        return Err(GeometryError::InvalidArgument(format!(
            "interval endpoints must be finite: [{}, {}]",
            start, end
        )));
    }

    if count == 1 {
        return Ok(vec![start]);
    }

    let step = (end - start) / (count - 1) as f64;
    let mut values = Vec::with_capacity(count as usize);
    for i in 0..count {
        values.push(start + step * i as f64);
    }

    // Close the interval exactly
    values[count as usize - 1] = end;

    Ok(values)
}

/// Samples `count` points uniformly around a circle of radius `radius`.
///
/// Angles run over the closed sweep `[0, 2*PI]` inclusive of both
/// endpoints, so for `count >= 2` the first and last points coincide at
/// `(radius, 0)` up to floating-point error. This matches the solver's
/// reference decks, which carry the duplicate endpoint.
///
/// # Arguments
///
/// * `count` - Number of points (must be positive)
/// * `radius` - Ring radius; any finite value is accepted. Zero collapses
///   every point onto the origin, and a negative radius reflects the
///   ring through the origin.
///
/// # Returns
///
/// The points in strictly increasing angle order.
///
/// # Example
///
/// ```rust
/// use raygen_geometry::sampling::sample_ring;
///
/// let points = sample_ring(20, 15.0).unwrap();
/// assert_eq!(points.len(), 20);
/// assert_eq!(points[0].x, 15.0);
/// assert_eq!(points[0].y, 0.0);
/// ```
pub fn sample_ring(count: u32, radius: f64) -> Result<Vec<DVec2>, GeometryError> {
    if !radius.is_finite() {
        return Err(GeometryError::InvalidArgument(format!(
            "ring radius must be finite: {}",
            radius
        )));
    }

    let angles = linspace(0.0, 2.0 * PI, count)?;

    Ok(angles
        .iter()
        .map(|theta| DVec2::new(radius * theta.cos(), radius * theta.sin()))
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use config::constants::{approx_equal, approx_zero};

    #[test]
    fn test_linspace_includes_both_endpoints() {
        let values = linspace(-1.0, 1.0, 1000).unwrap();
        assert_eq!(values.len(), 1000);
        assert_eq!(values[0], -1.0);
        assert_eq!(values[999], 1.0);
    }

    #[test]
    fn test_linspace_uniform_step() {
        let values = linspace(0.0, 1.0, 5).unwrap();
        assert_eq!(values, vec![0.0, 0.25, 0.5, 0.75, 1.0]);
    }

    #[test]
    fn test_linspace_single_sample() {
        let values = linspace(3.0, 7.0, 1).unwrap();
        assert_eq!(values, vec![3.0]);
    }

    #[test]
    fn test_linspace_two_samples() {
        let values = linspace(0.0, 10.0, 2).unwrap();
        assert_eq!(values, vec![0.0, 10.0]);
    }

    #[test]
    fn test_linspace_zero_count() {
        let result = linspace(0.0, 1.0, 0);
        assert!(result.is_err());
    }

    #[test]
    fn test_linspace_non_finite_endpoint() {
        assert!(linspace(f64::NAN, 1.0, 10).is_err());
        assert!(linspace(0.0, f64::INFINITY, 10).is_err());
    }

    #[test]
    fn test_ring_count() {
        let points = sample_ring(20, 15.0).unwrap();
        assert_eq!(points.len(), 20);
    }

    #[test]
    fn test_ring_starts_at_angle_zero() {
        let points = sample_ring(20, 15.0).unwrap();
        assert_eq!(points[0], DVec2::new(15.0, 0.0));
    }

    #[test]
    fn test_ring_closed_sweep_duplicates_endpoint() {
        // The sweep is inclusive of both 0 and 2*PI, so the last point
        // returns to the first up to floating-point error
        let points = sample_ring(20, 15.0).unwrap();
        let first = points[0];
        let last = points[19];
        assert!(approx_equal(first.x, last.x));
        assert!(approx_equal(first.y, last.y));
    }

    #[test]
    fn test_ring_quarter_turn() {
        // count = 5 puts the second sample at exactly PI / 2
        let points = sample_ring(5, 2.0).unwrap();
        assert!(approx_zero(points[1].x));
        assert!(approx_equal(points[1].y, 2.0));
    }

    #[test]
    fn test_ring_half_turn() {
        // count = 21 puts the middle sample at exactly PI
        let points = sample_ring(21, 15.0).unwrap();
        assert!(approx_equal(points[10].x, -15.0));
        assert!(approx_zero(points[10].y));
    }

    #[test]
    fn test_ring_two_points_coincide() {
        let points = sample_ring(2, 15.0).unwrap();
        assert!(approx_equal(points[0].x, points[1].x));
        assert!(approx_equal(points[0].y, points[1].y));
    }

    #[test]
    fn test_ring_single_point() {
        let points = sample_ring(1, 7.5).unwrap();
        assert_eq!(points, vec![DVec2::new(7.5, 0.0)]);
    }

    #[test]
    fn test_ring_zero_radius_collapses_to_origin() {
        let points = sample_ring(20, 0.0).unwrap();
        for p in points {
            assert_eq!(p.x, 0.0);
            assert_eq!(p.y, 0.0);
        }
    }

    #[test]
    fn test_ring_negative_radius_reflects() {
        let points = sample_ring(5, -2.0).unwrap();
        let mirrored = sample_ring(5, 2.0).unwrap();
        for (p, m) in points.iter().zip(mirrored.iter()) {
            assert!(approx_equal(p.x, -m.x));
            assert!(approx_equal(p.y, -m.y));
        }
    }

    #[test]
    fn test_ring_zero_count() {
        assert!(sample_ring(0, 15.0).is_err());
    }

    #[test]
    fn test_ring_non_finite_radius() {
        assert!(sample_ring(20, f64::NAN).is_err());
        assert!(sample_ring(20, f64::INFINITY).is_err());
        assert!(sample_ring(20, f64::NEG_INFINITY).is_err());
    }
}
