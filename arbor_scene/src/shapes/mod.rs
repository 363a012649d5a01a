// Copyright 2025 the Arbor Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The closed set of node kinds.
//!
//! Each kind supplies its own bounding box, draw routine and reaction to the
//! generic `rotate`/`scale` operations. Kinds without a precise region fall
//! back to [`RotatedBox`] over their cached bounding box, which is resolved
//! by the owning node.

mod circle;
mod path;
mod rectangle;
mod text;

pub use circle::Circle;
pub use path::PathShape;
pub use rectangle::Rectangle;
pub use text::TextShape;

use arbor_geometry::{BoundingBox, RotatedBox};
use kurbo::Vec2;

use crate::style::Color;
use crate::surface::{Surface, TextMeasurer};
use crate::types::AbsoluteTransform;

/// Paint resolved against a node's absolute opacity.
#[derive(Clone, Copy, Debug)]
pub(crate) struct Paint {
    pub(crate) fill: Color,
    pub(crate) stroke: Color,
    pub(crate) line_width: f64,
}

/// Kind-specific state of a node.
#[derive(Clone, Debug)]
pub enum ShapeKind {
    /// A disk.
    Circle(Circle),
    /// An axis-aligned rectangle centered on the node position.
    Rectangle(Rectangle),
    /// A free-form path.
    Path(PathShape),
    /// An editable text run.
    Text(TextShape),
}

impl ShapeKind {
    /// Short kind name for logs.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Circle(_) => "circle",
            Self::Rectangle(_) => "rectangle",
            Self::Path(_) => "path",
            Self::Text(_) => "text",
        }
    }

    pub(crate) fn calculate_bounding_box(
        &mut self,
        abs: &AbsoluteTransform,
        measurer: Option<&dyn TextMeasurer>,
    ) -> Option<BoundingBox> {
        match self {
            Self::Circle(c) => Some(c.bounding_box(abs)),
            Self::Rectangle(r) => Some(r.bounding_box(abs)),
            Self::Path(p) => p.bounding_box(abs),
            Self::Text(t) => t.bounding_box(abs, measurer?),
        }
    }

    /// Precise test for kinds that have one; `None` means "use the box".
    pub(crate) fn precise_hit(
        &mut self,
        pt: kurbo::Point,
        abs: &AbsoluteTransform,
        line_width: f64,
        tolerance: f64,
    ) -> Option<bool> {
        match self {
            Self::Circle(c) => Some(c.contains(pt, abs)),
            Self::Path(p) => Some(p.hit_test(pt, abs, line_width, tolerance)),
            Self::Rectangle(_) | Self::Text(_) => None,
        }
    }

    pub(crate) fn draw(&mut self, surface: &mut dyn Surface, abs: &AbsoluteTransform, paint: Paint) {
        match self {
            Self::Circle(c) => c.draw(surface, abs, paint),
            Self::Rectangle(r) => r.draw(surface, abs, paint),
            Self::Path(p) => p.draw(surface, abs, paint),
            Self::Text(t) => t.draw(surface, abs, paint),
        }
    }

    /// Local rotation after `rotate(degrees)`, or `None` when the kind ignores
    /// rotation.
    pub(crate) fn rotation_for(&self, degrees: f64) -> Option<f64> {
        match self {
            Self::Circle(_) => None,
            _ => Some(degrees.to_radians()),
        }
    }

    /// Local scale after `scale(sx, sy)`.
    pub(crate) fn scale_for(&self, sx: f64, sy: Option<f64>) -> Vec2 {
        match self {
            Self::Path(_) => Vec2::new(sx, sy.unwrap_or(sx)),
            _ => Vec2::new(sx, sx),
        }
    }

    /// Drop derived draw data.
    pub(crate) fn invalidate(&mut self) {
        if let Self::Path(p) = self {
            p.geometry_mut().invalidate();
        }
    }
}

/// Generic hit region for a box-tested node.
pub(crate) fn box_region(bounds: BoundingBox, abs: &AbsoluteTransform) -> RotatedBox {
    RotatedBox {
        bounds,
        rotation: abs.rotation(),
    }
}
