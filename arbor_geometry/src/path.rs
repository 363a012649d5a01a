// Copyright 2025 the Arbor Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Line, Point, Vec2};
use smallvec::SmallVec;

use crate::stroke::StrokedLine;
use crate::vector::{Vector2Ext, rotate_about};
use crate::{BoundingBox, HitParams, PreciseHitTest};

/// Distance under which consecutive move/line points are merged.
pub const DEFAULT_SIMPLIFY_TOLERANCE: f64 = 1.0;
/// Number of chords used to approximate a cubic segment when hit testing.
pub const DEFAULT_SUBDIVISIONS: u32 = 3;
/// Stroke hit tolerance used when no explicit tolerance is given.
pub const DEFAULT_HIT_TOLERANCE: f64 = 1.0;

/// A single path command.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PathCommand {
    /// Start a new subpath at a point.
    MoveTo(Point),
    /// Straight line from the current point.
    LineTo(Point),
    /// Cubic Bezier from the current point.
    CubicTo {
        /// First control point.
        c1: Point,
        /// Second control point.
        c2: Point,
        /// End point.
        end: Point,
    },
    /// Close the current subpath.
    Close,
}

impl PathCommand {
    /// Apply `f` to every point the command references.
    pub fn map_points(self, mut f: impl FnMut(Point) -> Point) -> Self {
        match self {
            Self::MoveTo(p) => Self::MoveTo(f(p)),
            Self::LineTo(p) => Self::LineTo(f(p)),
            Self::CubicTo { c1, c2, end } => Self::CubicTo {
                c1: f(c1),
                c2: f(c2),
                end: f(end),
            },
            Self::Close => Self::Close,
        }
    }

    /// Every point the command references, control points included.
    pub fn points(&self) -> SmallVec<[Point; 3]> {
        match *self {
            Self::MoveTo(p) | Self::LineTo(p) => smallvec::smallvec![p],
            Self::CubicTo { c1, c2, end } => smallvec::smallvec![c1, c2, end],
            Self::Close => SmallVec::new(),
        }
    }
}

/// Absolute transform of the node that owns a path.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PathTransform {
    /// Absolute position, added after scaling and rotation.
    pub position: Vec2,
    /// Absolute rotation in radians, applied about the centroid.
    pub rotation: f64,
    /// Absolute scale, applied about the centroid.
    pub scale: Vec2,
}

impl Default for PathTransform {
    fn default() -> Self {
        Self {
            position: Vec2::ZERO,
            rotation: 0.0,
            scale: Vec2::new(1.0, 1.0),
        }
    }
}

/// Evaluate a cubic Bezier at `t` by repeated linear interpolation.
pub fn subdivide_bezier(p0: Point, p1: Point, p2: Point, p3: Point, t: f64) -> Point {
    let (p0, p1, p2, p3) = (p0.to_vec2(), p1.to_vec2(), p2.to_vec2(), p3.to_vec2());
    let q0 = p0.lerp_clamped(p1, t);
    let q1 = p1.lerp_clamped(p2, t);
    let q2 = p2.lerp_clamped(p3, t);
    let r0 = q0.lerp_clamped(q1, t);
    let r1 = q1.lerp_clamped(q2, t);
    r0.lerp_clamped(r1, t).to_point()
}

/// Quadratic Bezier through `(a, b, c)` evaluated at `t = 0.5`.
fn quadratic_midpoint(a: Point, b: Point, c: Point) -> Point {
    (a.to_vec2() * 0.25 + b.to_vec2() * 0.5 + c.to_vec2() * 0.25).to_point()
}

/// Drop move/line points that lie within `tolerance` of the last kept
/// move/line point. Curves and closes are always kept.
pub fn simplify(commands: &[PathCommand], tolerance: f64) -> Vec<PathCommand> {
    let mut out = Vec::with_capacity(commands.len());
    let mut prev: Option<Point> = None;
    for &cmd in commands {
        match cmd {
            PathCommand::MoveTo(p) | PathCommand::LineTo(p) => {
                if prev.is_none_or(|q| p.distance(q) > tolerance) {
                    out.push(cmd);
                    prev = Some(p);
                }
            }
            _ => out.push(cmd),
        }
    }
    out
}

/// Authored path commands plus their lazily derived world-space form.
///
/// The centroid is cached until the command list changes. The calculated
/// commands are cached until [`PathGeometry::invalidate`] is called, which
/// the owning node does whenever it becomes draw-dirty.
#[derive(Clone, Debug)]
pub struct PathGeometry {
    commands: Vec<PathCommand>,
    simplify_tolerance: f64,
    subdivisions: u32,
    centroid: Option<Point>,
    calculated: Option<Vec<PathCommand>>,
}

impl Default for PathGeometry {
    fn default() -> Self {
        Self::new()
    }
}

impl PathGeometry {
    /// Create an empty path with default tunables.
    pub fn new() -> Self {
        Self::with_params(DEFAULT_SIMPLIFY_TOLERANCE, DEFAULT_SUBDIVISIONS)
    }

    /// Create an empty path with a custom simplify tolerance and number of
    /// curve subdivisions (at least one).
    pub fn with_params(simplify_tolerance: f64, subdivisions: u32) -> Self {
        Self {
            commands: Vec::new(),
            simplify_tolerance,
            subdivisions: subdivisions.max(1),
            centroid: None,
            calculated: None,
        }
    }

    /// Append a `MoveTo`.
    pub fn move_to(&mut self, p: impl Into<Point>) -> &mut Self {
        self.push(PathCommand::MoveTo(p.into()))
    }

    /// Append a `LineTo`.
    pub fn line_to(&mut self, p: impl Into<Point>) -> &mut Self {
        self.push(PathCommand::LineTo(p.into()))
    }

    /// Append a cubic Bezier.
    pub fn bezier_curve_to(
        &mut self,
        c1: impl Into<Point>,
        c2: impl Into<Point>,
        end: impl Into<Point>,
    ) -> &mut Self {
        self.push(PathCommand::CubicTo {
            c1: c1.into(),
            c2: c2.into(),
            end: end.into(),
        })
    }

    /// Append a `Close`.
    pub fn close_path(&mut self) -> &mut Self {
        self.push(PathCommand::Close)
    }

    fn push(&mut self, cmd: PathCommand) -> &mut Self {
        self.commands.push(cmd);
        self.after_mutation();
        self
    }

    /// Post-mutation hook: drop every cache derived from the command list.
    fn after_mutation(&mut self) {
        self.centroid = None;
        self.calculated = None;
    }

    /// Drop the calculated commands so the next read recomputes them.
    pub fn invalidate(&mut self) {
        self.calculated = None;
    }

    /// Drop the cached centroid.
    pub fn reset_centroid(&mut self) {
        self.centroid = None;
    }

    /// Whether the calculated commands are currently cached.
    pub fn is_calculated(&self) -> bool {
        self.calculated.is_some()
    }

    /// Authored commands.
    pub fn commands(&self) -> &[PathCommand] {
        &self.commands
    }

    /// Whether no command has been authored.
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Number of curve subdivisions used by the hit test.
    pub fn subdivisions(&self) -> u32 {
        self.subdivisions
    }

    /// Pivot for scale and rotation, in authored coordinates.
    ///
    /// The mean of every move/line point plus one point per cubic: the
    /// quadratic Bezier through its two controls and end point at `t = 0.5`.
    /// The cubic's start point is not part of the approximation.
    pub fn centroid(&mut self) -> Point {
        if let Some(c) = self.centroid {
            return c;
        }
        let mut sum = Vec2::ZERO;
        let mut count = 0_u32;
        for cmd in &self.commands {
            let p = match *cmd {
                PathCommand::MoveTo(p) | PathCommand::LineTo(p) => p,
                PathCommand::CubicTo { c1, c2, end } => quadratic_midpoint(c1, c2, end),
                PathCommand::Close => continue,
            };
            sum += p.to_vec2();
            count += 1;
        }
        if count == 0 {
            return Point::ORIGIN;
        }
        let c = (sum / f64::from(count)).to_point();
        self.centroid = Some(c);
        c
    }

    /// Map an authored point into world space.
    ///
    /// Scales about the centroid by `scale` (or the transform's scale),
    /// rotates about the centroid, then translates by the absolute position.
    pub fn transform_point(
        &mut self,
        point: Point,
        transform: &PathTransform,
        scale: Option<Vec2>,
    ) -> Point {
        let centroid = self.centroid();
        map_point(point, centroid, transform, scale.unwrap_or(transform.scale))
    }

    /// World-space, simplified commands, recomputed when invalidated.
    pub fn calculated_commands(&mut self, transform: &PathTransform) -> &[PathCommand] {
        if self.calculated.is_none() {
            let centroid = self.centroid();
            let transformed: Vec<PathCommand> = self
                .commands
                .iter()
                .map(|cmd| cmd.map_points(|p| map_point(p, centroid, transform, transform.scale)))
                .collect();
            self.calculated = Some(simplify(&transformed, self.simplify_tolerance));
        }
        self.calculated.as_deref().unwrap_or(&[])
    }

    /// Bounds of the calculated commands, control points included.
    pub fn bounding_box(&mut self, transform: &PathTransform) -> Option<BoundingBox> {
        BoundingBox::from_points(
            self.calculated_commands(transform)
                .iter()
                .flat_map(PathCommand::points),
        )
    }

    /// Stroke hit test against the calculated commands.
    ///
    /// Accepts points within `|line_width / 2 * min(scale) + tolerance|` of a
    /// line segment or of a chord of a subdivided curve. Chord `i` of a curve
    /// ends at the curve through the previous chord end, evaluated at
    /// `t = i / subdivisions`.
    pub fn hit_test(
        &mut self,
        pt: Point,
        transform: &PathTransform,
        line_width: f64,
        tolerance: f64,
    ) -> bool {
        let n = self.subdivisions;
        let half_width = line_width * transform.scale.min_component() / 2.0;
        let params = HitParams { tolerance };
        let hits = |a: Point, b: Point| {
            StrokedLine {
                line: Line::new(a, b),
                half_width,
            }
            .hit_test(pt, &params)
            .is_some()
        };

        let mut last: Option<Point> = None;
        for &cmd in self.calculated_commands(transform) {
            match cmd {
                PathCommand::MoveTo(p) => last = Some(p),
                PathCommand::LineTo(p) => {
                    if let Some(a) = last
                        && hits(a, p)
                    {
                        return true;
                    }
                    last = Some(p);
                }
                PathCommand::CubicTo { c1, c2, end } => {
                    if let Some(mut a) = last {
                        for i in 1..=n {
                            let t = f64::from(i) / f64::from(n);
                            let b = subdivide_bezier(a, c1, c2, end, t);
                            if hits(a, b) {
                                return true;
                            }
                            a = b;
                        }
                    }
                    last = Some(end);
                }
                PathCommand::Close => {}
            }
        }
        false
    }
}

fn map_point(point: Point, centroid: Point, transform: &PathTransform, scale: Vec2) -> Point {
    let scaled = centroid + (point - centroid).mul_components(scale);
    rotate_about(scaled, centroid, transform.rotation) + transform.position
}
