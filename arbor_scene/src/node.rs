// Copyright 2025 the Arbor Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scene nodes.

use arbor_events::{EventKind, EventRegistry, EventWithStop, HandlerId, Phase};
use arbor_geometry::{BoundingBox, HitParams, PathGeometry, PreciseHitTest};
use kurbo::{Point, Vec2};
use tracing::warn;

use crate::cursor::CursorIcon;
use crate::error::SceneError;
use crate::graph::SceneGraph;
use crate::options::{CircleOptions, RectangleOptions, ShapeOptions, TextOptions};
use crate::shapes::{self, Circle, Paint, PathShape, Rectangle, ShapeKind, TextShape};
use crate::style::{self, Color, TRANSPARENT};
use crate::surface::{Font, Surface, TextMeasurer};
use crate::types::{AbsoluteTransform, DirtyFlags, LocalTransform, NodeId};

/// Event delivered to node handlers.
pub type NodeEvent<'a> = EventWithStop<'a, NodeId>;

/// A node of the scene.
///
/// Nodes are built detached, from a kind plus [`ShapeOptions`], and handed to
/// [`SceneGraph::add_shape`]. Transform and opacity changes go through the
/// graph so they can propagate; style, geometry and text changes can be made
/// directly through [`SceneGraph::get_shape_mut`] and only mark the node
/// itself dirty.
#[derive(Debug)]
pub struct Node {
    id: NodeId,
    pub(crate) parent: Option<NodeId>,
    pub(crate) children: Vec<NodeId>,
    pub(crate) local: LocalTransform,
    pub(crate) absolute: AbsoluteTransform,
    pub(crate) z_index: i32,
    pub(crate) requested_z: Option<i32>,
    pub(crate) requested_parent: Option<NodeId>,
    fill_color: Color,
    stroke_color: Color,
    line_width: f64,
    active: bool,
    cursor: Option<CursorIcon>,
    dirty: DirtyFlags,
    bounds: Option<BoundingBox>,
    box_computations: u64,
    shape: ShapeKind,
    pub(crate) events: EventRegistry<SceneGraph, NodeId>,
}

impl Node {
    fn new(shape: ShapeKind, opts: ShapeOptions) -> Self {
        let local = LocalTransform {
            position: Vec2::new(opts.x, opts.y),
            rotation: opts.rotation,
            scale: opts.scale.unwrap_or(Vec2::new(1.0, 1.0)),
            fill_opacity: opts.fill_opacity.unwrap_or(1.0).clamp(0.0, 1.0),
            stroke_opacity: opts.stroke_opacity.unwrap_or(1.0).clamp(0.0, 1.0),
        };
        Self {
            id: NodeId::next(),
            parent: None,
            children: Vec::new(),
            local,
            absolute: local.compose(None),
            z_index: opts.z_index.unwrap_or(0),
            requested_z: opts.z_index,
            requested_parent: opts.parent,
            fill_color: opts.fill_color.unwrap_or(TRANSPARENT),
            stroke_color: opts.stroke_color.unwrap_or(TRANSPARENT),
            line_width: opts.line_width.unwrap_or(1.0),
            active: opts.active,
            cursor: opts.cursor,
            dirty: DirtyFlags::all(),
            bounds: None,
            box_computations: 0,
            shape,
            events: EventRegistry::new(),
        }
    }

    /// A circle.
    pub fn circle(circle: CircleOptions, opts: ShapeOptions) -> Self {
        Self::new(ShapeKind::Circle(Circle::new(circle.radius)), opts)
    }

    /// A rectangle.
    pub fn rectangle(rect: RectangleOptions, opts: ShapeOptions) -> Self {
        Self::new(
            ShapeKind::Rectangle(Rectangle::new(rect.width, rect.height)),
            opts,
        )
    }

    /// An empty path with default simplification and subdivision.
    pub fn path(opts: ShapeOptions) -> Self {
        Self::from_path(PathGeometry::new(), opts)
    }

    /// A path around existing geometry.
    pub fn from_path(geometry: PathGeometry, opts: ShapeOptions) -> Self {
        Self::new(ShapeKind::Path(PathShape::new(geometry)), opts)
    }

    /// A text run. Defaults to the text cursor.
    pub fn text(text: TextOptions, mut opts: ShapeOptions) -> Self {
        opts.cursor = opts.cursor.or(Some(CursorIcon::Text));
        let font = Font {
            size: text.font_size,
            family: text.font_family,
            align: text.text_align,
            baseline: text.text_baseline,
            direction: text.direction,
        };
        Self::new(ShapeKind::Text(TextShape::new(text.text, font)), opts)
    }

    /// Register a handler before the node is added to a graph.
    #[must_use]
    pub fn on<F>(mut self, kind: EventKind, phase: Phase, f: F) -> Self
    where
        F: Fn(&mut SceneGraph, &mut NodeEvent<'_>) + 'static,
    {
        self.events.on(kind, phase, f);
        self
    }

    pub(crate) fn add_handler<F>(&mut self, kind: EventKind, phase: Phase, f: F) -> HandlerId
    where
        F: Fn(&mut SceneGraph, &mut NodeEvent<'_>) + 'static,
    {
        self.events.on(kind, phase, f)
    }

    // --- identity and structure ---

    /// Identifier.
    pub fn id(&self) -> NodeId {
        self.id
    }

    /// Parent, or `None` for a top-level or detached node.
    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    /// Children in ascending z order.
    pub fn children(&self) -> &[NodeId] {
        &self.children
    }

    /// Stacking order among siblings.
    pub fn z_index(&self) -> i32 {
        self.z_index
    }

    /// Kind-specific state.
    pub fn shape(&self) -> &ShapeKind {
        &self.shape
    }

    // --- transform ---

    /// Local transform and opacity.
    pub fn local(&self) -> &LocalTransform {
        &self.local
    }

    /// Absolute transform and opacity.
    pub fn absolute(&self) -> &AbsoluteTransform {
        &self.absolute
    }

    /// Local position.
    pub fn position(&self) -> Vec2 {
        self.local.position
    }

    /// Local rotation in radians.
    pub fn rotation(&self) -> f64 {
        self.local.rotation
    }

    /// Local scale.
    pub fn scale(&self) -> Vec2 {
        self.local.scale
    }

    // --- style ---

    /// Fill color as authored.
    pub fn fill_color(&self) -> Color {
        self.fill_color
    }

    /// Stroke color as authored.
    pub fn stroke_color(&self) -> Color {
        self.stroke_color
    }

    /// Fill color with its alpha scaled by the absolute fill opacity.
    pub fn relative_fill_color(&self) -> Color {
        style::with_opacity(self.fill_color, self.absolute.fill_opacity())
    }

    /// Stroke color with its alpha scaled by the absolute stroke opacity.
    pub fn relative_stroke_color(&self) -> Color {
        style::with_opacity(self.stroke_color, self.absolute.stroke_opacity())
    }

    /// Stroke width.
    pub fn line_width(&self) -> f64 {
        self.line_width
    }

    /// Whether clicking shows selection handles.
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Hover cursor hint.
    pub fn cursor(&self) -> Option<CursorIcon> {
        self.cursor
    }

    /// Set the fill color.
    pub fn set_fill_color(&mut self, color: Color) {
        self.fill_color = color;
        self.mark_draw_dirty();
    }

    /// Set the stroke color.
    pub fn set_stroke_color(&mut self, color: Color) {
        self.stroke_color = color;
        self.mark_draw_dirty();
    }

    /// Set the stroke width.
    pub fn set_line_width(&mut self, width: f64) {
        self.line_width = width;
        self.mark_draw_dirty();
    }

    /// Enable or disable selection handles.
    pub fn set_active(&mut self, active: bool) {
        self.active = active;
    }

    /// Set the hover cursor hint.
    pub fn set_cursor(&mut self, cursor: Option<CursorIcon>) {
        self.cursor = cursor;
    }

    // --- dirty state ---

    /// Pending work.
    pub fn dirty(&self) -> DirtyFlags {
        self.dirty
    }

    /// Whether the node must be redrawn.
    pub fn is_draw_dirty(&self) -> bool {
        self.dirty.contains(DirtyFlags::DRAW)
    }

    /// Whether the cached bounding box is stale.
    pub fn is_bounds_dirty(&self) -> bool {
        self.dirty.contains(DirtyFlags::BOUNDS)
    }

    /// How many times the bounding box has been recomputed.
    pub fn box_computations(&self) -> u64 {
        self.box_computations
    }

    /// Bounding box as last computed, without recomputing.
    pub fn cached_bounding_box(&self) -> Option<BoundingBox> {
        self.bounds
    }

    pub(crate) fn mark_dirty(&mut self) {
        self.dirty |= DirtyFlags::BOUNDS | DirtyFlags::DRAW;
        self.shape.invalidate();
    }

    pub(crate) fn mark_draw_dirty(&mut self) {
        self.dirty |= DirtyFlags::DRAW;
        self.shape.invalidate();
    }

    // --- geometry ---

    /// Recompute the bounding box if stale and return it.
    pub(crate) fn bounding_box(&mut self, measurer: Option<&dyn TextMeasurer>) -> Option<BoundingBox> {
        if self.is_bounds_dirty() {
            self.bounds = self.shape.calculate_bounding_box(&self.absolute, measurer);
            self.box_computations += 1;
            self.dirty.remove(DirtyFlags::BOUNDS);
        }
        self.bounds
    }

    pub(crate) fn hit_test(
        &mut self,
        pt: Point,
        tolerance: f64,
        measurer: Option<&dyn TextMeasurer>,
    ) -> bool {
        if let Some(hit) = self
            .shape
            .precise_hit(pt, &self.absolute, self.line_width, tolerance)
        {
            return hit;
        }
        let Some(bounds) = self.bounding_box(measurer) else {
            return false;
        };
        shapes::box_region(bounds, &self.absolute)
            .hit_test(pt, &HitParams { tolerance })
            .is_some()
    }

    pub(crate) fn draw(&mut self, surface: &mut dyn Surface) {
        let paint = Paint {
            fill: self.relative_fill_color(),
            stroke: self.relative_stroke_color(),
            line_width: self.line_width,
        };
        self.shape.draw(surface, &self.absolute, paint);
        self.dirty.remove(DirtyFlags::DRAW);
    }

    // --- circle and rectangle ---

    /// Set a circle's radius. Returns `false` for other kinds.
    pub fn set_radius(&mut self, radius: f64) -> bool {
        let ShapeKind::Circle(c) = &mut self.shape else {
            return false;
        };
        c.set_radius(radius);
        self.mark_dirty();
        true
    }

    /// Set a rectangle's size. Returns `false` for other kinds.
    pub fn set_size(&mut self, width: f64, height: f64) -> bool {
        let ShapeKind::Rectangle(r) = &mut self.shape else {
            return false;
        };
        r.set_size(width, height);
        self.mark_dirty();
        true
    }

    // --- path ---

    fn edit_path(&mut self, f: impl FnOnce(&mut PathGeometry)) -> Result<&mut Self, SceneError> {
        match &mut self.shape {
            ShapeKind::Path(p) => f(p.geometry_mut()),
            other => {
                warn!(node = %self.id, kind = other.name(), "path command on a non-path node");
                return Err(SceneError::NotAPath(self.id));
            }
        }
        self.mark_dirty();
        Ok(self)
    }

    fn override_stroke_width(&mut self, width: Option<f64>) {
        if let Some(w) = width
            && w != 0.0
        {
            self.line_width = w;
        }
    }

    /// Start a subpath. A non-zero `stroke_width` also sets the line width.
    pub fn move_to(
        &mut self,
        p: impl Into<Point>,
        stroke_width: Option<f64>,
    ) -> Result<&mut Self, SceneError> {
        let p = p.into();
        self.edit_path(|g| {
            g.move_to(p);
        })?;
        self.override_stroke_width(stroke_width);
        Ok(self)
    }

    /// Add a line. A non-zero `stroke_width` also sets the line width.
    pub fn line_to(
        &mut self,
        p: impl Into<Point>,
        stroke_width: Option<f64>,
    ) -> Result<&mut Self, SceneError> {
        let p = p.into();
        self.edit_path(|g| {
            g.line_to(p);
        })?;
        self.override_stroke_width(stroke_width);
        Ok(self)
    }

    /// Add a cubic Bezier.
    pub fn bezier_curve_to(
        &mut self,
        c1: impl Into<Point>,
        c2: impl Into<Point>,
        end: impl Into<Point>,
    ) -> Result<&mut Self, SceneError> {
        let (c1, c2, end) = (c1.into(), c2.into(), end.into());
        self.edit_path(|g| {
            g.bezier_curve_to(c1, c2, end);
        })
    }

    /// Close the current subpath.
    pub fn close_path(&mut self) -> Result<&mut Self, SceneError> {
        self.edit_path(|g| {
            g.close_path();
        })
    }

    /// Path centroid offset by the local position. `None` for other kinds.
    pub fn center_point(&mut self) -> Option<Point> {
        let ShapeKind::Path(p) = &mut self.shape else {
            return None;
        };
        Some(p.centroid() + self.local.position)
    }

    // --- text ---

    fn text_shape(&self) -> Result<&TextShape, SceneError> {
        match &self.shape {
            ShapeKind::Text(t) => Ok(t),
            _ => Err(SceneError::NotAText(self.id)),
        }
    }

    fn edit_text<R>(
        &mut self,
        dirty: DirtyFlags,
        f: impl FnOnce(&mut TextShape) -> R,
    ) -> Result<R, SceneError> {
        let ShapeKind::Text(t) = &mut self.shape else {
            return Err(SceneError::NotAText(self.id));
        };
        let out = f(t);
        self.dirty |= dirty;
        Ok(out)
    }

    /// Text content.
    pub fn text_content(&self) -> Result<&str, SceneError> {
        self.text_shape().map(TextShape::text)
    }

    /// Font and layout.
    pub fn font(&self) -> Result<&Font, SceneError> {
        self.text_shape().map(TextShape::font)
    }

    /// Caret position in chars.
    pub fn cursor_position(&self) -> Result<usize, SceneError> {
        self.text_shape().map(TextShape::cursor)
    }

    /// Whether an edit session is active.
    pub fn is_editing(&self) -> bool {
        self.text_shape().is_ok_and(TextShape::is_editing)
    }

    /// Replace the content. The caret is clamped to the new length.
    pub fn set_text(&mut self, text: impl Into<String>) -> Result<(), SceneError> {
        let text = text.into();
        self.edit_text(DirtyFlags::all(), |t| t.set_text(text))
    }

    /// Replace the font.
    pub fn set_font(&mut self, font: Font) -> Result<(), SceneError> {
        self.edit_text(DirtyFlags::all(), |t| t.set_font(font))
    }

    /// Insert at the caret and advance it.
    pub fn insert_text(&mut self, s: &str) -> Result<(), SceneError> {
        self.edit_text(DirtyFlags::all(), |t| t.insert(s))
    }

    /// Delete `count` chars after the caret, or `-count` chars before it.
    pub fn delete_text(&mut self, count: isize) -> Result<(), SceneError> {
        self.edit_text(DirtyFlags::all(), |t| t.delete(count))
    }

    /// Move the caret, clamped to the text length.
    pub fn set_cursor_position(&mut self, position: usize) -> Result<(), SceneError> {
        self.edit_text(DirtyFlags::DRAW, |t| t.set_cursor(position))
    }

    /// Enter editing: caret at the end and visible.
    pub fn start_editing(&mut self) -> Result<(), SceneError> {
        self.edit_text(DirtyFlags::DRAW, TextShape::start_editing)
    }

    /// Leave editing and hide the caret.
    pub fn stop_editing(&mut self) -> Result<(), SceneError> {
        self.edit_text(DirtyFlags::DRAW, TextShape::stop_editing)
    }

    /// Flip caret visibility.
    pub fn toggle_caret(&mut self) -> Result<(), SceneError> {
        self.edit_text(DirtyFlags::DRAW, TextShape::toggle_caret)
    }

    /// Caret index nearest to a scene point.
    pub fn index_from_point(
        &self,
        pt: Point,
        measurer: &dyn TextMeasurer,
    ) -> Result<usize, SceneError> {
        let local = pt - self.absolute.position();
        Ok(self.text_shape()?.index_from_point(local, measurer))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::parse_color;
    use crate::surface::FixedAdvance;

    #[test]
    fn construction_defaults() {
        let n = Node::circle(CircleOptions::default(), ShapeOptions::default());
        assert_eq!(n.line_width(), 1.0);
        assert_eq!(n.fill_color(), TRANSPARENT);
        assert_eq!(n.scale(), Vec2::new(1.0, 1.0));
        assert!(n.is_draw_dirty() && n.is_bounds_dirty());
        assert!(!n.is_active());
        assert_eq!(n.cursor(), None);

        let t = Node::text(TextOptions::new("hi"), ShapeOptions::default());
        assert_eq!(t.cursor(), Some(CursorIcon::Text));
        assert_eq!(t.text_content(), Ok("hi"));
        assert_eq!(t.font().map(|f| f.size), Ok(16.0));
    }

    #[test]
    fn relative_colors_follow_opacity() {
        let n = Node::rectangle(
            RectangleOptions::default(),
            ShapeOptions {
                fill_color: Some(parse_color("red").unwrap()),
                fill_opacity: Some(0.5),
                stroke_opacity: Some(3.0),
                ..ShapeOptions::default()
            },
        );
        assert_eq!(style::alpha(n.relative_fill_color()), 0.5);
        assert_eq!(n.absolute().stroke_opacity(), 1.0);
    }

    #[test]
    fn bounding_box_is_cached_until_dirty() {
        let mut n = Node::rectangle(
            RectangleOptions {
                width: 20.0,
                height: 10.0,
            },
            ShapeOptions {
                x: 50.0,
                y: 50.0,
                ..ShapeOptions::default()
            },
        );
        let bb = n.bounding_box(None).unwrap();
        assert_eq!((bb.left(), bb.top(), bb.right(), bb.bottom()), (40.0, 45.0, 60.0, 55.0));
        n.bounding_box(None);
        assert_eq!(n.box_computations(), 1);
        assert!(n.set_size(40.0, 10.0));
        assert_eq!(n.bounding_box(None).unwrap().width(), 40.0);
        assert_eq!(n.box_computations(), 2);
    }

    #[test]
    fn text_box_needs_a_measurer() {
        let mut t = Node::text(TextOptions::new("abcd"), ShapeOptions::default());
        assert_eq!(t.bounding_box(None), None);
        assert_eq!(t.box_computations(), 1);
        // A `None` box is cached like any other.
        assert_eq!(t.bounding_box(Some(&FixedAdvance::default())), None);
        t.insert_text("e").unwrap();
        let bb = t.bounding_box(Some(&FixedAdvance::default())).unwrap();
        assert_eq!(bb.width(), 40.0);
    }

    #[test]
    fn path_commands_chain_and_override_width() {
        let mut p = Node::path(ShapeOptions::default());
        p.move_to((0.0, 0.0), None)
            .unwrap()
            .line_to((10.0, 0.0), Some(4.0))
            .unwrap()
            .line_to((10.0, 10.0), Some(0.0))
            .unwrap()
            .close_path()
            .unwrap();
        assert_eq!(p.line_width(), 4.0);
        let c = p.center_point().unwrap();
        assert!((c.x - 20.0 / 3.0).abs() < 1e-9);
        assert!((c.y - 10.0 / 3.0).abs() < 1e-9);
    }

    #[test]
    fn kind_mismatch_is_reported() {
        let mut c = Node::circle(CircleOptions::default(), ShapeOptions::default());
        let id = c.id();
        assert_eq!(c.insert_text("x"), Err(SceneError::NotAText(id)));
        assert!(matches!(c.move_to((0.0, 0.0), None), Err(SceneError::NotAPath(_))));
        assert!(!c.set_size(1.0, 1.0));
        assert!(c.set_radius(3.0));
        assert_eq!(c.center_point(), None);
        assert!(!c.is_editing());
    }

    #[test]
    fn circle_hit_uses_scaled_radius() {
        let mut c = Node::circle(
            CircleOptions { radius: 50.0 },
            ShapeOptions {
                scale: Some(Vec2::new(2.0, 2.0)),
                ..ShapeOptions::default()
            },
        );
        assert!(c.hit_test(Point::new(99.0, 0.0), 0.0, None));
        assert!(!c.hit_test(Point::new(101.0, 0.0), 0.0, None));
    }
}
