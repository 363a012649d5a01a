// Copyright 2025 the Arbor Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use arbor_geometry::BoundingBox;
use kurbo::{Rect, Vec2};

use super::Paint;
use crate::style::alpha;
use crate::surface::Surface;
use crate::types::AbsoluteTransform;

/// A rectangle centered on the node position, rotated about its center.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rectangle {
    width: f64,
    height: f64,
}

impl Rectangle {
    pub(crate) fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Unscaled width.
    pub fn width(&self) -> f64 {
        self.width
    }

    /// Unscaled height.
    pub fn height(&self) -> f64 {
        self.height
    }

    pub(crate) fn set_size(&mut self, width: f64, height: f64) {
        self.width = width;
        self.height = height;
    }

    fn half_extent(&self, abs: &AbsoluteTransform) -> Vec2 {
        let s = abs.scale();
        Vec2::new(self.width * s.x / 2.0, self.height * s.y / 2.0)
    }

    pub(crate) fn bounding_box(&self, abs: &AbsoluteTransform) -> BoundingBox {
        BoundingBox::from_center(abs.position().to_point(), self.half_extent(abs))
    }

    pub(crate) fn draw(&self, surface: &mut dyn Surface, abs: &AbsoluteTransform, paint: Paint) {
        let half = self.half_extent(abs);
        let rect = Rect::new(-half.x, -half.y, half.x, half.y).abs();
        surface.save();
        surface.translate(abs.position());
        surface.rotate(abs.rotation());
        if alpha(paint.fill) > 0.0 {
            surface.fill_rect(rect, paint.fill);
        }
        if paint.line_width > 0.0 {
            surface.stroke_rect(rect, paint.stroke, paint.line_width);
        }
        surface.restore();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::TRANSPARENT;
    use crate::tests_support::RectRecorder;
    use crate::types::LocalTransform;

    #[test]
    fn scale_is_folded_into_the_drawn_extents() {
        let rect = Rectangle::new(100.0, 10.0);
        let abs = LocalTransform {
            position: Vec2::new(50.0, 50.0),
            scale: Vec2::new(2.0, 3.0),
            ..LocalTransform::default()
        }
        .compose(None);
        let paint = Paint {
            fill: TRANSPARENT,
            stroke: TRANSPARENT,
            line_width: 1.0,
        };

        let mut surface = RectRecorder::default();
        rect.draw(&mut surface, &abs, paint);
        assert_eq!(surface.rects, vec![Rect::new(-100.0, -15.0, 100.0, 15.0)]);
        assert!(!surface.scaled, "the surface itself is never scaled");
        assert_eq!(
            rect.bounding_box(&abs),
            BoundingBox::new(-50.0, 35.0, 150.0, 65.0)
        );
    }
}
