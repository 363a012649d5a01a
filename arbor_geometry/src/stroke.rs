// Copyright 2025 the Arbor Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Stroke-oriented helpers for precise hit testing.
//!
//! Paths are hit tested as polylines: each straight segment, and each chord
//! of a subdivided curve, is checked with [`StrokedLine`]. Joins and caps are
//! not modeled.

use kurbo::{Line, Point};

use crate::{HitKind, HitParams, HitScore, PreciseHitTest};

/// A stroked line segment (centerline + half-width).
///
/// The hit test projects the query point onto the segment with the
/// projection parameter clamped to the segment, and compares the distance
/// against `|half_width + tolerance|`.
#[derive(Clone, Copy, Debug)]
pub struct StrokedLine {
    /// The centerline segment in world coordinates.
    pub line: Line,
    /// Half of the stroke width in world units.
    pub half_width: f64,
}

impl StrokedLine {
    /// Distance from `pt` to the closest point of the centerline.
    pub fn distance(&self, pt: Point) -> f64 {
        let p0 = self.line.p0;
        let v = self.line.p1 - p0;
        let w = pt - p0;
        let len2 = v.hypot2();
        let t = if len2 > 0.0 { w.dot(v) / len2 } else { 0.0 };
        let proj = p0 + v * t.clamp(0.0, 1.0);
        (pt - proj).hypot()
    }
}

impl PreciseHitTest for StrokedLine {
    fn hit_test(&self, pt: Point, params: &HitParams) -> Option<HitScore> {
        let dist = self.distance(pt);
        let limit = (self.half_width + params.tolerance).abs();
        (dist <= limit).then_some(HitScore {
            distance: dist,
            kind: HitKind::Stroke,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stroked_line_hit_and_miss() {
        let stroked = StrokedLine {
            line: Line::new((0.0, 0.0), (10.0, 0.0)),
            half_width: 1.0,
        };
        let exact = HitParams { tolerance: 0.0 };

        assert!(stroked.hit_test(Point::new(5.0, 0.0), &exact).is_some());
        assert_eq!(
            stroked.hit_test(Point::new(5.0, 0.5), &exact),
            Some(HitScore {
                distance: 0.5,
                kind: HitKind::Stroke,
            })
        );
        assert!(stroked.hit_test(Point::new(5.0, 5.0), &exact).is_none());
        assert!(
            stroked
                .hit_test(Point::new(5.0, 5.0), &HitParams { tolerance: 4.0 })
                .is_some()
        );
    }

    #[test]
    fn projection_clamps_to_endpoints() {
        let stroked = StrokedLine {
            line: Line::new((0.0, 0.0), (10.0, 0.0)),
            half_width: 0.5,
        };
        let params = HitParams { tolerance: 1.0 };
        // Beyond the end but within reach of the endpoint.
        assert!(stroked.hit_test(Point::new(11.0, 0.0), &params).is_some());
        assert!(stroked.hit_test(Point::new(12.0, 0.0), &params).is_none());
        assert_eq!(stroked.distance(Point::new(-3.0, 4.0)), 5.0);
    }

    #[test]
    fn degenerate_segment_measures_to_point() {
        let stroked = StrokedLine {
            line: Line::new((2.0, 2.0), (2.0, 2.0)),
            half_width: 0.0,
        };
        assert_eq!(stroked.distance(Point::new(5.0, 6.0)), 5.0);
    }
}
