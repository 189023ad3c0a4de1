//! Complex-plane region and pixel-to-point mapping.

use num::Complex;

use crate::error::{validation_error, Result};

/// Rectangular region of the complex plane sampled by a render.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct PlaneBounds {
    pub x_min: f32,
    pub x_max: f32,
    pub y_min: f32,
    pub y_max: f32,
}

impl PlaneBounds {
    pub const fn new(x_min: f32, x_max: f32, y_min: f32, y_max: f32) -> Self {
        Self {
            x_min,
            x_max,
            y_min,
            y_max,
        }
    }

    /// Checks that the bounds are finite and span a non-empty rectangle.
    pub fn validate(&self) -> Result<()> {
        let Self {
            x_min,
            x_max,
            y_min,
            y_max,
        } = *self;

        if ![x_min, x_max, y_min, y_max].iter().all(|v| v.is_finite()) {
            return Err(validation_error(format!(
                "plane bounds must be finite, got x: [{x_min}, {x_max}], y: [{y_min}, {y_max}]"
            )));
        }

        if x_min >= x_max || y_min >= y_max {
            return Err(validation_error(format!(
                "plane bounds must satisfy min < max, got x: [{x_min}, {x_max}], y: [{y_min}, {y_max}]"
            )));
        }

        Ok(())
    }
}

impl Default for PlaneBounds {
    /// The square `[-2, 2] x [-2, 2]`, which contains the whole set.
    fn default() -> Self {
        Self::new(-2.0, 2.0, -2.0, 2.0)
    }
}

/// Maps pixel coordinates to sample points for a fixed resolution.
///
/// Row 0 is the top of the image and maps to `y_max`; columns grow toward
/// `x_max`. All arithmetic is `f32` so that every kernel sees bit-identical
/// coordinates for the same pixel.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct PlaneMapper {
    x_min: f32,
    y_max: f32,
    dx: f32,
    dy: f32,
}

impl PlaneMapper {
    /// # Panics
    ///
    /// Panics if `width` or `height` is below 2. [`crate::render`] checks this
    /// before building a mapper.
    pub fn new(bounds: &PlaneBounds, width: usize, height: usize) -> Self {
        assert!(width >= 2, "width must be at least 2, got {width}");
        assert!(height >= 2, "height must be at least 2, got {height}");

        Self {
            x_min: bounds.x_min,
            y_max: bounds.y_max,
            dx: (bounds.x_max - bounds.x_min) / (width - 1) as f32,
            dy: (bounds.y_max - bounds.y_min) / (height - 1) as f32,
        }
    }

    #[inline(always)]
    pub fn x(&self, col: usize) -> f32 {
        self.x_min + col as f32 * self.dx
    }

    #[inline(always)]
    pub fn y(&self, row: usize) -> f32 {
        self.y_max - row as f32 * self.dy
    }

    #[inline(always)]
    pub fn point(&self, row: usize, col: usize) -> Complex<f32> {
        Complex::new(self.x(col), self.y(row))
    }

    pub fn spacing(&self) -> (f32, f32) {
        (self.dx, self.dy)
    }
}
