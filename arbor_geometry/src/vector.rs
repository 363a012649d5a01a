// Copyright 2025 the Arbor Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Point, Vec2};

/// Extra operations on [`Vec2`] used by the scene graph.
///
/// Addition, scaling by a scalar, and length are already provided by
/// [`kurbo`]; this trait fills in the rest.
pub trait Vector2Ext: Sized {
    /// Rotate about the origin by `angle` radians.
    fn rotated(self, angle: f64) -> Self;
    /// Component-wise product.
    fn mul_components(self, other: Self) -> Self;
    /// Euclidean distance to `other`.
    fn distance_to(self, other: Self) -> f64;
    /// Linear interpolation towards `other` with `t` clamped to `0..=1`.
    fn lerp_clamped(self, other: Self, t: f64) -> Self;
    /// Smallest component.
    fn min_component(self) -> f64;
}

impl Vector2Ext for Vec2 {
    fn rotated(self, angle: f64) -> Self {
        let (sin, cos) = angle.sin_cos();
        Self::new(self.x * cos - self.y * sin, self.x * sin + self.y * cos)
    }

    fn mul_components(self, other: Self) -> Self {
        Self::new(self.x * other.x, self.y * other.y)
    }

    fn distance_to(self, other: Self) -> f64 {
        (self - other).hypot()
    }

    fn lerp_clamped(self, other: Self, t: f64) -> Self {
        self.lerp(other, t.clamp(0.0, 1.0))
    }

    fn min_component(self) -> f64 {
        self.x.min(self.y)
    }
}

/// Rotate `point` about `center` by `angle` radians.
pub fn rotate_about(point: Point, center: Point, angle: f64) -> Point {
    center + (point - center).rotated(angle)
}
