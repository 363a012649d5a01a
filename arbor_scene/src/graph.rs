// Copyright 2025 the Arbor Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Core scene implementation: structure, propagation, queries, dispatch.

use core::fmt;
use core::ops::ControlFlow;

use arbor_events::{
    DispatchReport, EventKind, EventTree, HandlerId, ListenerCounts, Outcome, Phase, PointerInput,
    Toggles, collect_toggles, dispatch, trigger,
};
use arbor_geometry::BoundingBox;
use hashbrown::HashMap;
use kurbo::{Point, Vec2};
use tracing::{debug, trace, warn};

use crate::error::SceneError;
use crate::node::{Node, NodeEvent};
use crate::surface::{Surface, TextMeasurer};
use crate::types::{AbsoluteTransform, LocalTransform, NodeId};

/// Hit tolerance used when resolving pointer input.
pub const POINTER_TOLERANCE: f64 = 5.0;

/// Retained scene of nodes.
///
/// Every local change (position, rotation, scale, opacity, parent) is
/// propagated to the node's subtree before the setter returns, so absolute
/// transforms are always current. Bounding boxes are recomputed lazily.
///
/// ## Example
///
/// ```rust
/// use arbor_scene::{Node, RectangleOptions, SceneGraph, ShapeOptions};
/// use kurbo::{Point, Vec2};
///
/// let mut scene = SceneGraph::new();
/// let parent = scene.add_shape(
///     Node::rectangle(RectangleOptions::default(), ShapeOptions::default()),
///     None,
/// );
/// let child = scene.add_shape(
///     Node::rectangle(
///         RectangleOptions { width: 10.0, height: 10.0 },
///         ShapeOptions { x: 20.0, ..ShapeOptions::default() },
///     ),
///     Some(parent),
/// );
///
/// scene.set_position(parent, Vec2::new(100.0, 100.0));
/// let abs = scene.get_shape(child).unwrap().absolute().position();
/// assert_eq!(abs, Vec2::new(120.0, 100.0));
///
/// // The child sits on top of its parent.
/// assert_eq!(scene.find_shape_from_point(Point::new(121.0, 101.0)), Some(child));
/// ```
pub struct SceneGraph {
    /// top-level nodes in ascending z order
    roots: Vec<NodeId>,
    nodes: HashMap<NodeId, Node>,
    measurer: Option<Box<dyn TextMeasurer>>,
    listeners: ListenerCounts,
}

impl fmt::Debug for SceneGraph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SceneGraph")
            .field("roots", &self.roots)
            .field("nodes", &self.nodes.len())
            .field("measurer", &self.measurer.is_some())
            .field("listeners", &self.listeners)
            .finish()
    }
}

impl Default for SceneGraph {
    fn default() -> Self {
        Self::new()
    }
}

impl SceneGraph {
    /// Create an empty scene without a text measurer.
    pub fn new() -> Self {
        Self {
            roots: Vec::new(),
            nodes: HashMap::new(),
            measurer: None,
            listeners: ListenerCounts::new(),
        }
    }

    /// Create an empty scene that lays out text with `measurer`.
    pub fn with_text_measurer(measurer: impl TextMeasurer + 'static) -> Self {
        let mut scene = Self::new();
        scene.set_text_measurer(measurer);
        scene
    }

    /// Install the measurer used for text bounds and caret placement.
    ///
    /// Text bounding boxes are marked stale.
    pub fn set_text_measurer(&mut self, measurer: impl TextMeasurer + 'static) {
        self.measurer = Some(Box::new(measurer));
        for node in self.nodes.values_mut() {
            if node.text_content().is_ok() {
                node.mark_dirty();
            }
        }
    }

    /// The installed text measurer.
    pub fn text_measurer(&self) -> Option<&dyn TextMeasurer> {
        self.measurer.as_deref()
    }

    // --- structure ---

    /// Insert `node` and return its id.
    ///
    /// The node is attached under `parent`, or else under the parent named in
    /// its options; unknown parents fall back to the top level. Without an
    /// explicit z-index the node is stacked above its new siblings.
    pub fn add_shape(&mut self, node: Node, parent: Option<NodeId>) -> NodeId {
        let id = node.id();
        let parent = parent
            .or(node.requested_parent)
            .filter(|p| self.nodes.contains_key(p));
        let z = node.requested_z;
        for kind in EventKind::ALL {
            self.listeners.add(kind, node.events.count(kind));
        }
        debug!(node = %id, kind = node.shape().name(), parent = ?parent, "add shape");
        self.nodes.insert(id, node);
        self.attach(id, parent, z);
        id
    }

    /// Remove a node and its subtree.
    ///
    /// With `shallow` only top-level nodes are considered; otherwise a
    /// nested node is removed from its parent too. Returns `false` when
    /// nothing was removed.
    pub fn remove_shape(&mut self, id: NodeId, shallow: bool) -> bool {
        let top_level = self.roots.contains(&id);
        if !top_level && (shallow || !self.nodes.contains_key(&id)) {
            debug!(node = %id, shallow, "remove shape: no match");
            return false;
        }
        self.detach(id);
        let mut stack = vec![id];
        let mut removed = 0_usize;
        while let Some(cur) = stack.pop() {
            let Some(node) = self.nodes.remove(&cur) else {
                continue;
            };
            for kind in EventKind::ALL {
                self.listeners.remove(kind, node.events.count(kind));
            }
            stack.extend_from_slice(node.children());
            removed += 1;
        }
        debug!(node = %id, removed, "remove shape");
        true
    }

    /// Move a node under `parent` (or to the top level).
    ///
    /// The node is restacked above its new siblings. Returns `false` for
    /// unknown ids and for moves that would create a cycle.
    pub fn set_parent(&mut self, id: NodeId, parent: Option<NodeId>) -> bool {
        if !self.nodes.contains_key(&id) {
            return false;
        }
        if let Some(p) = parent
            && (!self.nodes.contains_key(&p) || p == id || self.is_ancestor(id, p))
        {
            warn!(node = %id, parent = %p, "rejected reparent");
            return false;
        }
        self.detach(id);
        self.attach(id, parent, None);
        debug!(node = %id, parent = ?parent, "reparent");
        true
    }

    /// Set the z-index and restack among siblings.
    pub fn set_z_index(&mut self, id: NodeId, z: i32) {
        let Some(node) = self.nodes.get_mut(&id) else {
            return;
        };
        node.z_index = z;
        let parent = node.parent;
        self.sort_siblings(parent);
    }

    // --- transform setters ---

    /// Set the local position.
    pub fn set_position(&mut self, id: NodeId, position: Vec2) {
        self.update_local(id, |l| l.position = position);
    }

    /// Set the local rotation in radians.
    pub fn set_rotation(&mut self, id: NodeId, radians: f64) {
        self.update_local(id, |l| l.rotation = radians);
    }

    /// Set the local scale.
    pub fn set_scale(&mut self, id: NodeId, scale: Vec2) {
        self.update_local(id, |l| l.scale = scale);
    }

    /// Set fill and stroke opacity, clamped to `0..=1`.
    pub fn set_opacity(&mut self, id: NodeId, opacity: f64) {
        let o = opacity.clamp(0.0, 1.0);
        self.update_local(id, |l| {
            l.fill_opacity = o;
            l.stroke_opacity = o;
        });
    }

    /// Set fill opacity, clamped to `0..=1`.
    pub fn set_fill_opacity(&mut self, id: NodeId, opacity: f64) {
        self.update_local(id, |l| l.fill_opacity = opacity.clamp(0.0, 1.0));
    }

    /// Set stroke opacity, clamped to `0..=1`.
    pub fn set_stroke_opacity(&mut self, id: NodeId, opacity: f64) {
        self.update_local(id, |l| l.stroke_opacity = opacity.clamp(0.0, 1.0));
    }

    /// Place the node at `(dx, dy)` relative to its parent.
    pub fn translate(&mut self, id: NodeId, dx: f64, dy: f64) {
        self.set_position(id, Vec2::new(dx, dy));
    }

    /// Rotate to `degrees`. Circles ignore rotation.
    pub fn rotate(&mut self, id: NodeId, degrees: f64) {
        let Some(radians) = self
            .nodes
            .get(&id)
            .and_then(|n| n.shape().rotation_for(degrees))
        else {
            return;
        };
        self.set_rotation(id, radians);
    }

    /// Scale by `sx` (and `sy` for paths; other kinds scale uniformly).
    pub fn scale(&mut self, id: NodeId, sx: f64, sy: Option<f64>) {
        let Some(scale) = self.nodes.get(&id).map(|n| n.shape().scale_for(sx, sy)) else {
            return;
        };
        self.set_scale(id, scale);
    }

    // --- queries ---

    /// Node by id.
    pub fn get_shape(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(&id)
    }

    /// Mutable node by id, for style, geometry and text changes.
    pub fn get_shape_mut(&mut self, id: NodeId) -> Option<&mut Node> {
        self.nodes.get_mut(&id)
    }

    /// `id` if it is a strict descendant of `ancestor`.
    pub fn get_child(&self, ancestor: NodeId, id: NodeId) -> Option<&Node> {
        if ancestor == id || !self.is_ancestor(ancestor, id) {
            return None;
        }
        self.nodes.get(&id)
    }

    /// Whether the scene contains `id`.
    pub fn contains(&self, id: NodeId) -> bool {
        self.nodes.contains_key(&id)
    }

    /// Number of nodes.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether the scene is empty.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Top-level nodes in ascending z order.
    pub fn roots(&self) -> &[NodeId] {
        &self.roots
    }

    /// Children in ascending z order, or an empty slice for unknown ids.
    pub fn children_of(&self, id: NodeId) -> &[NodeId] {
        self.nodes.get(&id).map(Node::children).unwrap_or(&[])
    }

    /// Parent of a node, or `None` for top-level or unknown ids.
    pub fn parent_of(&self, id: NodeId) -> Option<NodeId> {
        self.nodes.get(&id).and_then(Node::parent)
    }

    /// Z-index of a node.
    pub fn z_index(&self, id: NodeId) -> Option<i32> {
        self.nodes.get(&id).map(Node::z_index)
    }

    /// Next node in depth-first order, treating top-level nodes as siblings.
    pub fn next_depth_first(&self, current: NodeId) -> Option<NodeId> {
        let node = self.nodes.get(&current)?;
        if let Some(&first) = node.children().first() {
            return Some(first);
        }
        let mut cur = current;
        loop {
            if let Some(next) = self.next_sibling(cur) {
                return Some(next);
            }
            cur = self.parent_of(cur)?;
        }
    }

    /// Previous node in depth-first order.
    pub fn prev_depth_first(&self, current: NodeId) -> Option<NodeId> {
        if !self.nodes.contains_key(&current) {
            return None;
        }
        if let Some(prev) = self.prev_sibling(current) {
            return Some(self.last_in_subtree(prev));
        }
        self.parent_of(current)
    }

    /// Visit nodes in pre-order (parents before children, ascending z).
    ///
    /// Returning [`ControlFlow::Break`] stops the walk.
    pub fn traverse(&self, mut f: impl FnMut(&Node) -> ControlFlow<()>) -> ControlFlow<()> {
        let mut stack: Vec<NodeId> = self.roots.iter().rev().copied().collect();
        while let Some(id) = stack.pop() {
            let Some(node) = self.nodes.get(&id) else {
                continue;
            };
            f(node)?;
            stack.extend(node.children().iter().rev());
        }
        ControlFlow::Continue(())
    }

    // --- geometry ---

    /// Bounding box, recomputed only when stale.
    pub fn bounding_box(&mut self, id: NodeId) -> Option<BoundingBox> {
        let measurer = self.measurer.as_deref();
        self.nodes.get_mut(&id)?.bounding_box(measurer)
    }

    /// Whether `pt` hits the node.
    ///
    /// Circles test their disk and paths their stroke within `tolerance`;
    /// other kinds test their bounding box, rotated about its center.
    pub fn is_point_in_shape(&mut self, id: NodeId, pt: Point, tolerance: f64) -> bool {
        let measurer = self.measurer.as_deref();
        self.nodes
            .get_mut(&id)
            .is_some_and(|n| n.hit_test(pt, tolerance, measurer))
    }

    /// Topmost node under `pt`, using [`POINTER_TOLERANCE`].
    pub fn find_shape_from_point(&mut self, pt: Point) -> Option<NodeId> {
        self.find_shape_from_point_with_tolerance(pt, POINTER_TOLERANCE)
    }

    /// Topmost node under `pt`.
    ///
    /// Children are tested before their parent and higher z before lower z,
    /// so the first hit is the frontmost.
    pub fn find_shape_from_point_with_tolerance(
        &mut self,
        pt: Point,
        tolerance: f64,
    ) -> Option<NodeId> {
        enum Visit {
            Enter(NodeId),
            Exit(NodeId),
        }
        let mut stack: Vec<Visit> = self.roots.iter().copied().map(Visit::Enter).collect();
        while let Some(visit) = stack.pop() {
            match visit {
                Visit::Enter(id) => {
                    stack.push(Visit::Exit(id));
                    stack.extend(self.children_of(id).iter().copied().map(Visit::Enter));
                }
                Visit::Exit(id) => {
                    if self.is_point_in_shape(id, pt, tolerance) {
                        trace!(node = %id, x = pt.x, y = pt.y, "hit");
                        return Some(id);
                    }
                }
            }
        }
        None
    }

    /// Caret index nearest to a scene point inside a text node.
    pub fn text_index_from_point(&self, id: NodeId, pt: Point) -> Result<usize, SceneError> {
        let node = self.nodes.get(&id).ok_or(SceneError::NodeNotFound(id))?;
        let measurer = self.measurer.as_deref().ok_or(SceneError::NoTextMeasurer)?;
        node.index_from_point(pt, measurer)
    }

    // --- events ---

    /// Register a handler on a node. Returns `None` for unknown ids.
    pub fn add_event_listener<F>(
        &mut self,
        id: NodeId,
        kind: EventKind,
        phase: Phase,
        f: F,
    ) -> Option<HandlerId>
    where
        F: Fn(&mut Self, &mut NodeEvent<'_>) + 'static,
    {
        let handler = self.nodes.get_mut(&id)?.add_handler(kind, phase, f);
        self.listeners.add(kind, 1);
        Some(handler)
    }

    /// Unregister a handler.
    pub fn remove_event_listener(
        &mut self,
        id: NodeId,
        kind: EventKind,
        phase: Phase,
        handler: HandlerId,
    ) -> bool {
        let removed = self
            .nodes
            .get_mut(&id)
            .is_some_and(|n| n.events.remove(kind, phase, handler));
        if removed {
            self.listeners.remove(kind, 1);
        }
        removed
    }

    /// Handler counts across the whole scene.
    pub fn listener_counts(&self) -> &ListenerCounts {
        &self.listeners
    }

    /// Bubble and capture lists for an event resolved to `target`.
    pub fn get_toggle_events(&self, target: NodeId, kind: EventKind) -> Toggles<NodeId> {
        collect_toggles(self, target, kind)
    }

    /// Run one node's handlers for `(kind, phase)`.
    ///
    /// Returns whether a handler stopped propagation.
    pub fn trigger_event(
        &mut self,
        node: NodeId,
        kind: EventKind,
        phase: Phase,
        input: &PointerInput,
        target: NodeId,
    ) -> bool {
        let Some(handlers) = self.nodes.get(&node).map(|n| n.events.handlers(kind, phase)) else {
            return false;
        };
        if handlers.is_empty() {
            return false;
        }
        trace!(node = %node, target = %target, %kind, ?phase, "trigger");
        trigger(&handlers, self, input, target, node) == Outcome::Stop
    }

    /// Deliver an event resolved to `target` through its ancestry.
    ///
    /// With `phase == None` the bubble list runs, then the capture list;
    /// each stops independently.
    pub fn dispatch_event(
        &mut self,
        target: NodeId,
        kind: EventKind,
        input: &PointerInput,
        phase: Option<Phase>,
    ) -> DispatchReport<NodeId> {
        let toggles = self.get_toggle_events(target, kind);
        dispatch(&toggles, phase, |node, phase| {
            Outcome::from_stopped(self.trigger_event(node, kind, phase, input, target))
        })
    }

    // --- drawing ---

    /// Draw every node in pre-order. Clears each node's draw flag.
    pub fn draw(&mut self, surface: &mut dyn Surface) {
        let roots = self.roots.clone();
        for id in roots {
            self.draw_subtree(id, surface);
        }
    }

    /// Draw a node and its descendants.
    pub fn draw_subtree(&mut self, id: NodeId, surface: &mut dyn Surface) {
        let mut stack = vec![id];
        while let Some(cur) = stack.pop() {
            let Some(node) = self.nodes.get_mut(&cur) else {
                continue;
            };
            node.draw(surface);
            stack.extend(node.children().iter().rev());
        }
    }

    // --- internals ---

    fn is_ancestor(&self, ancestor: NodeId, id: NodeId) -> bool {
        let mut cur = self.parent_of(id);
        while let Some(p) = cur {
            if p == ancestor {
                return true;
            }
            cur = self.parent_of(p);
        }
        false
    }

    fn siblings(&self, parent: Option<NodeId>) -> &[NodeId] {
        match parent {
            Some(p) => self.children_of(p),
            None => &self.roots,
        }
    }

    fn next_sibling(&self, node: NodeId) -> Option<NodeId> {
        let siblings = self.siblings(self.parent_of(node));
        let pos = siblings.iter().position(|&id| id == node)?;
        siblings.get(pos + 1).copied()
    }

    fn prev_sibling(&self, node: NodeId) -> Option<NodeId> {
        let siblings = self.siblings(self.parent_of(node));
        let pos = siblings.iter().position(|&id| id == node)?;
        pos.checked_sub(1).and_then(|p| siblings.get(p).copied())
    }

    fn last_in_subtree(&self, mut node: NodeId) -> NodeId {
        while let Some(&last) = self.children_of(node).last() {
            node = last;
        }
        node
    }

    fn attach(&mut self, id: NodeId, parent: Option<NodeId>, z: Option<i32>) {
        let z = z.unwrap_or_else(|| {
            self.siblings(parent)
                .iter()
                .filter_map(|s| self.z_index(*s))
                .max()
                .map_or(1, |top| top + 1)
        });
        if let Some(node) = self.nodes.get_mut(&id) {
            node.parent = parent;
            node.z_index = z;
        }
        match parent {
            Some(p) => {
                if let Some(pn) = self.nodes.get_mut(&p) {
                    pn.children.push(id);
                }
            }
            None => self.roots.push(id),
        }
        self.sort_siblings(parent);
        self.propagate(id);
    }

    fn detach(&mut self, id: NodeId) {
        match self.parent_of(id) {
            Some(p) => {
                if let Some(pn) = self.nodes.get_mut(&p) {
                    pn.children.retain(|c| *c != id);
                }
            }
            None => self.roots.retain(|c| *c != id),
        }
        if let Some(node) = self.nodes.get_mut(&id) {
            node.parent = None;
        }
    }

    /// Stable sort of a sibling list by z-index.
    fn sort_siblings(&mut self, parent: Option<NodeId>) {
        let mut list = match parent {
            Some(p) => match self.nodes.get_mut(&p) {
                Some(n) => core::mem::take(&mut n.children),
                None => return,
            },
            None => core::mem::take(&mut self.roots),
        };
        list.sort_by_key(|id| self.nodes.get(id).map_or(0, Node::z_index));
        match parent {
            Some(p) => {
                if let Some(n) = self.nodes.get_mut(&p) {
                    n.children = list;
                }
            }
            None => self.roots = list,
        }
    }

    fn update_local(&mut self, id: NodeId, f: impl FnOnce(&mut LocalTransform)) {
        let Some(node) = self.nodes.get_mut(&id) else {
            debug!(node = %id, "update on unknown node");
            return;
        };
        f(&mut node.local);
        self.propagate(id);
    }

    /// Recompute absolute transforms for `id` and its subtree.
    ///
    /// Nodes whose absolute transform changed are marked dirty; the walk
    /// always continues into children.
    fn propagate(&mut self, id: NodeId) {
        let parent_abs: Option<AbsoluteTransform> = self
            .parent_of(id)
            .and_then(|p| self.nodes.get(&p))
            .map(|n| *n.absolute());
        let mut stack = vec![(id, parent_abs)];
        while let Some((cur, parent_abs)) = stack.pop() {
            let Some(node) = self.nodes.get_mut(&cur) else {
                continue;
            };
            let next = node.local.compose(parent_abs.as_ref());
            if next != node.absolute {
                node.absolute = next;
                node.mark_dirty();
            }
            for &child in node.children.iter().rev() {
                stack.push((child, Some(next)));
            }
        }
    }
}

impl EventTree<NodeId> for SceneGraph {
    fn parent_of(&self, node: NodeId) -> Option<NodeId> {
        Self::parent_of(self, node)
    }

    fn has_handlers(&self, node: NodeId, kind: EventKind, phase: Phase) -> bool {
        self.nodes
            .get(&node)
            .is_some_and(|n| n.events.has(kind, phase))
    }
}
