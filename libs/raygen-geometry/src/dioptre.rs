//! # Dioptre Geometry
//!
//! Parabolic refracting surface and the rays striking it.
//!
//! The bench is laid out with the optical axis along x: the surface is
//! the curve `x = a*y^2 + b*y + c`, rays travel from a point source on
//! the incoming side, and incidence is measured between a ray and the
//! surface normal at its impact point.

use crate::error::GeometryError;
use crate::sampling::linspace;
use config::constants::approx_zero;
use glam::DVec2;
use serde::{Deserialize, Serialize};

// =============================================================================
// DIOPTRE
// =============================================================================

/// A parabolic refracting surface `x = a*y^2 + b*y + c`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ParabolicDioptre {
    /// Quadratic coefficient (curvature).
    pub a: f64,
    /// Linear coefficient.
    pub b: f64,
    /// Constant offset along the optical axis.
    pub c: f64,
}

impl ParabolicDioptre {
    /// Creates a dioptre from its polynomial coefficients.
    pub fn new(a: f64, b: f64, c: f64) -> Self {
        Self { a, b, c }
    }

    /// Evaluates the profile at height `y`.
    #[inline]
    pub fn x_at(&self, y: f64) -> f64 {
        self.a * y * y + self.b * y + self.c
    }

    /// Derivative `dx/dy` of the profile at height `y`.
    #[inline]
    pub fn derivative(&self, y: f64) -> f64 {
        2.0 * self.a * y + self.b
    }

    /// Slope `dy/dx` of the tangent line at height `y`.
    ///
    /// At the apex the profile runs vertically in the bench frame, so
    /// the slope form of the tangent is undefined there.
    pub fn tangent_slope(&self, y: f64) -> Result<f64, GeometryError> {
        let dx_dy = self.derivative(y);
        if approx_zero(dx_dy) {
            return Err(GeometryError::InvalidArgument(format!(
                "tangent is vertical at y = {}",
                y
            )));
        }
        Ok(1.0 / dx_dy)
    }

    /// Slope `dy/dx` of the normal line at height `y`.
    ///
    /// For a profile `x = f(y)` the surface direction is `(f'(y), 1)`,
    /// so the normal direction is `(1, -f'(y))` and its slope is always
    /// finite.
    #[inline]
    pub fn normal_slope(&self, y: f64) -> f64 {
        -self.derivative(y)
    }

    /// Samples the profile uniformly over `[y_min, y_max]`.
    ///
    /// # Arguments
    ///
    /// * `y_min` - Lower bound of the profile span
    /// * `y_max` - Upper bound of the profile span
    /// * `samples` - Number of profile points (must be positive)
    ///
    /// # Returns
    ///
    /// Profile points `(x_at(y), y)` in increasing y order.
    ///
    /// # Example
    ///
    /// ```rust
    /// use raygen_geometry::ParabolicDioptre;
    ///
    /// let dioptre = ParabolicDioptre::new(-0.1, 0.0, 0.0);
    /// let profile = dioptre.profile(-1.0, 1.0, 1000).unwrap();
    /// assert_eq!(profile.len(), 1000);
    /// assert_eq!(profile[0].y, -1.0);
    /// ```
    pub fn profile(
        &self,
        y_min: f64,
        y_max: f64,
        samples: u32,
    ) -> Result<Vec<DVec2>, GeometryError> {
        if y_min >= y_max {
            return Err(GeometryError::InvalidRange(format!(
                "profile span must satisfy y_min < y_max: [{}, {}]",
                y_min, y_max
            )));
        }

        let heights = linspace(y_min, y_max, samples)?;

        Ok(heights
            .iter()
            .map(|y| DVec2::new(self.x_at(*y), *y))
            .collect())
    }

    /// Traces `ray_count` rays from `source` to impact points on the profile.
    ///
    /// The profile is sampled with `samples` points over `[y_min, y_max]`
    /// and every `(samples / ray_count)`-th point is selected as an
    /// impact, walking the span from bottom to top. The final stride
    /// lands on the last profile sample.
    ///
    /// # Example
    ///
    /// ```rust
    /// use glam::DVec2;
    /// use raygen_geometry::ParabolicDioptre;
    ///
    /// let dioptre = ParabolicDioptre::new(-0.1, 0.0, 0.0);
    /// let source = DVec2::new(-10.0, 0.0);
    /// let rays = dioptre.trace_impacts(source, 10, -1.0, 1.0, 1000).unwrap();
    /// assert_eq!(rays.len(), 10);
    /// ```
    pub fn trace_impacts(
        &self,
        source: DVec2,
        ray_count: u32,
        y_min: f64,
        y_max: f64,
        samples: u32,
    ) -> Result<Vec<Ray>, GeometryError> {
        if ray_count == 0 {
            return Err(GeometryError::InvalidArgument(
                "ray count must be positive".to_string(),
            ));
        }

        if ray_count > samples {
            return Err(GeometryError::InvalidArgument(format!(
                "ray count {} exceeds profile samples {}",
                ray_count, samples
            )));
        }

        let profile = self.profile(y_min, y_max, samples)?;
        let stride = samples as f64 / ray_count as f64;

        let mut rays = Vec::with_capacity(ray_count as usize);
        for k in 1..=ray_count {
            let sample = (stride * k as f64).round() as usize;
            let index = sample.clamp(1, profile.len()) - 1;
            rays.push(Ray::new(source, profile[index]));
        }

        Ok(rays)
    }
}

// =============================================================================
// RAYS
// =============================================================================

/// A ray from a source point to its impact on the dioptre.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Ray {
    /// Emission point.
    pub source: DVec2,
    /// Impact point on the surface.
    pub impact: DVec2,
}

impl Ray {
    /// Creates a ray between two points.
    pub fn new(source: DVec2, impact: DVec2) -> Self {
        Self { source, impact }
    }

    /// Slope `dy/dx` of the ray.
    ///
    /// A ray travelling parallel to the y axis has no slope in this
    /// form.
    pub fn slope(&self) -> Result<f64, GeometryError> {
        let run = self.impact.x - self.source.x;
        if approx_zero(run) {
            return Err(GeometryError::InvalidArgument(
                "vertical ray has no slope".to_string(),
            ));
        }
        Ok((self.impact.y - self.source.y) / run)
    }

    /// Incidence angle between this ray and the surface normal at the
    /// impact point, in radians.
    pub fn incidence_angle(&self, dioptre: &ParabolicDioptre) -> Result<f64, GeometryError> {
        let ray_slope = self.slope()?;
        let normal_slope = dioptre.normal_slope(self.impact.y);
        Ok(angle_between_slopes(ray_slope, normal_slope))
    }
}

/// Angle between two lines given by their slopes, in radians.
///
/// Computes `atan(|(m1 - m2) / (1 + m1 * m2)|)`, which lies in
/// `[0, PI / 2]`. Perpendicular lines (`1 + m1 * m2 == 0`) yield
/// exactly `PI / 2` through the `atan` limit at infinity.
///
/// # Example
///
/// ```rust
/// use raygen_geometry::angle_between_slopes;
/// use std::f64::consts::PI;
///
/// let angle = angle_between_slopes(0.0, 1.0);
/// assert!((angle - PI / 4.0).abs() < 1e-12);
/// ```
pub fn angle_between_slopes(m1: f64, m2: f64) -> f64 {
    ((m1 - m2) / (1.0 + m1 * m2)).abs().atan()
}
