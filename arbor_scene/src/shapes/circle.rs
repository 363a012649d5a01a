// Copyright 2025 the Arbor Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use arbor_geometry::{BoundingBox, Disk, HitParams, PreciseHitTest};
use kurbo::Vec2;

use super::Paint;
use crate::style::alpha;
use crate::surface::Surface;
use crate::types::AbsoluteTransform;

/// A disk centered on the node position.
///
/// The effective radius follows the x component of the absolute scale.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Circle {
    radius: f64,
}

impl Circle {
    pub(crate) fn new(radius: f64) -> Self {
        Self { radius }
    }

    /// Unscaled radius.
    pub fn radius(&self) -> f64 {
        self.radius
    }

    pub(crate) fn set_radius(&mut self, radius: f64) {
        self.radius = radius;
    }

    /// Radius after applying the absolute scale.
    pub fn real_radius(&self, abs: &AbsoluteTransform) -> f64 {
        self.radius * abs.scale().x
    }

    fn disk(&self, abs: &AbsoluteTransform) -> Disk {
        Disk {
            center: abs.position().to_point(),
            radius: self.real_radius(abs),
        }
    }

    pub(crate) fn bounding_box(&self, abs: &AbsoluteTransform) -> BoundingBox {
        let r = self.real_radius(abs);
        BoundingBox::from_center(abs.position().to_point(), Vec2::new(r, r))
    }

    pub(crate) fn contains(&self, pt: kurbo::Point, abs: &AbsoluteTransform) -> bool {
        self.disk(abs).hit_test(pt, &HitParams::default()).is_some()
    }

    pub(crate) fn draw(&self, surface: &mut dyn Surface, abs: &AbsoluteTransform, paint: Paint) {
        let disk = self.disk(abs);
        let circle = kurbo::Circle::new(disk.center, disk.radius.abs());
        if alpha(paint.fill) > 0.0 {
            surface.fill_circle(circle, paint.fill);
        }
        if paint.line_width > 0.0 {
            surface.stroke_circle(circle, paint.stroke, paint.line_width);
        }
    }
}
