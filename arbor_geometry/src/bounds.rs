// Copyright 2025 the Arbor Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Point, Rect, Vec2};

/// An axis-aligned bounding box in world coordinates.
///
/// Boxes are values: every operation returns a new box rather than mutating
/// an existing one. Containment is inclusive on all four edges; overlap is
/// strict, so boxes that only share an edge do not intersect.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BoundingBox {
    left: f64,
    top: f64,
    right: f64,
    bottom: f64,
}

impl BoundingBox {
    /// Create a box from its edges.
    pub const fn new(left: f64, top: f64, right: f64, bottom: f64) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    /// Create a box centered on `center` with the given half extents.
    pub fn from_center(center: Point, half: Vec2) -> Self {
        Self::new(
            center.x - half.x,
            center.y - half.y,
            center.x + half.x,
            center.y + half.y,
        )
    }

    /// Create a box with top-left corner `origin` and the given size.
    pub fn from_origin_size(origin: Point, width: f64, height: f64) -> Self {
        Self::new(origin.x, origin.y, origin.x + width, origin.y + height)
    }

    /// Smallest box containing every point, or `None` when there are none.
    pub fn from_points(points: impl IntoIterator<Item = Point>) -> Option<Self> {
        let mut points = points.into_iter();
        let first = points.next()?;
        let mut bbox = Self::new(first.x, first.y, first.x, first.y);
        for p in points {
            bbox.left = bbox.left.min(p.x);
            bbox.top = bbox.top.min(p.y);
            bbox.right = bbox.right.max(p.x);
            bbox.bottom = bbox.bottom.max(p.y);
        }
        Some(bbox)
    }

    /// Left edge.
    pub const fn left(&self) -> f64 {
        self.left
    }

    /// Top edge.
    pub const fn top(&self) -> f64 {
        self.top
    }

    /// Right edge.
    pub const fn right(&self) -> f64 {
        self.right
    }

    /// Bottom edge.
    pub const fn bottom(&self) -> f64 {
        self.bottom
    }

    /// Width of the box.
    pub fn width(&self) -> f64 {
        self.right - self.left
    }

    /// Height of the box.
    pub fn height(&self) -> f64 {
        self.bottom - self.top
    }

    /// Center point.
    pub fn center(&self) -> Point {
        Point::new(
            self.left + self.width() / 2.0,
            self.top + self.height() / 2.0,
        )
    }

    /// The four corners in the order top-left, top-right, bottom-right,
    /// bottom-left.
    pub fn corners(&self) -> [Point; 4] {
        [
            Point::new(self.left, self.top),
            Point::new(self.right, self.top),
            Point::new(self.right, self.bottom),
            Point::new(self.left, self.bottom),
        ]
    }

    /// Inclusive point containment.
    pub fn contains(&self, pt: Point) -> bool {
        pt.x >= self.left && pt.x <= self.right && pt.y >= self.top && pt.y <= self.bottom
    }

    /// Strict overlap test.
    pub fn intersects(&self, other: &Self) -> bool {
        self.left < other.right
            && self.right > other.left
            && self.top < other.bottom
            && self.bottom > other.top
    }

    /// Smallest box containing both boxes.
    pub fn union(&self, other: &Self) -> Self {
        Self::new(
            self.left.min(other.left),
            self.top.min(other.top),
            self.right.max(other.right),
            self.bottom.max(other.bottom),
        )
    }

    /// Convert to a [`Rect`].
    pub fn to_rect(&self) -> Rect {
        Rect::new(self.left, self.top, self.right, self.bottom)
    }
}

impl From<Rect> for BoundingBox {
    fn from(rect: Rect) -> Self {
        let rect = rect.abs();
        Self::new(rect.x0, rect.y0, rect.x1, rect.y1)
    }
}
