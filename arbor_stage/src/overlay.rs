// Copyright 2025 the Arbor Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Selection handles.
//!
//! Clicking an active node shows four square handles at the corners of its
//! bounding box. Handles are ordinary top-level rectangles: they rotate with
//! the node about the box center, scale with it within a clamp, and carry
//! diagonal resize cursors.

use arbor_geometry::rotate_about;
use arbor_scene::{
    CursorIcon, Node, NodeId, RectangleOptions, SceneGraph, ShapeOptions, style::with_opacity,
};
use kurbo::Vec2;
use smallvec::SmallVec;
use tracing::debug;

use crate::config::StageConfig;

/// Handles belonging to one node.
pub type Handles = SmallVec<[NodeId; 4]>;

/// Cursor per corner, in [`BoundingBox::corners`](arbor_geometry::BoundingBox::corners)
/// order.
const CORNER_CURSORS: [CursorIcon; 4] = [
    CursorIcon::NwseResize,
    CursorIcon::NeswResize,
    CursorIcon::NwseResize,
    CursorIcon::NeswResize,
];

/// Nodes that currently show selection handles.
#[derive(Clone, Debug, Default)]
pub struct SelectionOverlay {
    entries: Vec<(NodeId, Handles)>,
}

impl SelectionOverlay {
    /// No selection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether `owner` shows handles.
    pub fn is_tracked(&self, owner: NodeId) -> bool {
        self.entries.iter().any(|(o, _)| *o == owner)
    }

    /// Nodes showing handles.
    pub fn owners(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.entries.iter().map(|(o, _)| *o)
    }

    /// Handle ids of `owner`.
    pub fn handles(&self, owner: NodeId) -> &[NodeId] {
        self.entries
            .iter()
            .find(|(o, _)| *o == owner)
            .map(|(_, h)| h.as_slice())
            .unwrap_or(&[])
    }

    /// Whether any node shows handles.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Replace the selection with `owner`.
    pub fn select(&mut self, graph: &mut SceneGraph, owner: NodeId, config: &StageConfig) {
        self.clear(graph);
        let handles = build_handles(graph, owner, config);
        debug!(node = %owner, handles = handles.len(), "select");
        self.entries.push((owner, handles));
    }

    /// Remove every handle and forget the selection.
    pub fn clear(&mut self, graph: &mut SceneGraph) {
        for (_, handles) in self.entries.drain(..) {
            remove_handles(graph, &handles);
        }
    }

    /// Rebuild the handles of owners that must be redrawn, and drop owners
    /// that left the scene. Must run before the scene is drawn.
    pub fn refresh(&mut self, graph: &mut SceneGraph, config: &StageConfig) {
        let mut i = 0;
        while i < self.entries.len() {
            let owner = self.entries[i].0;
            match graph.get_shape(owner).map(Node::is_draw_dirty) {
                None => {
                    let (_, handles) = self.entries.remove(i);
                    remove_handles(graph, &handles);
                    continue;
                }
                Some(true) => {
                    let old = core::mem::take(&mut self.entries[i].1);
                    remove_handles(graph, &old);
                    self.entries[i].1 = build_handles(graph, owner, config);
                }
                Some(false) => {}
            }
            i += 1;
        }
    }
}

fn remove_handles(graph: &mut SceneGraph, handles: &[NodeId]) {
    for &h in handles {
        graph.remove_shape(h, true);
    }
}

/// Add four corner handles for `owner` as top-level nodes.
///
/// Nodes without a bounding box get no handles.
pub fn build_handles(graph: &mut SceneGraph, owner: NodeId, config: &StageConfig) -> Handles {
    let mut out = Handles::new();
    let Some(bounds) = graph.bounding_box(owner) else {
        return out;
    };
    let Some(node) = graph.get_shape(owner) else {
        return out;
    };
    let abs = *node.absolute();
    let stroke = with_opacity(color::palette::css::RED, abs.stroke_opacity());
    let scale = Vec2::new(
        config.clamp_handle_scale(abs.scale().x),
        config.clamp_handle_scale(abs.scale().y),
    );
    let center = bounds.center();
    for (corner, cursor) in bounds.corners().into_iter().zip(CORNER_CURSORS) {
        let at = rotate_about(corner, center, abs.rotation());
        let handle = Node::rectangle(
            RectangleOptions {
                width: config.handle_size,
                height: config.handle_size,
            },
            ShapeOptions {
                x: at.x,
                y: at.y,
                stroke_color: Some(stroke),
                scale: Some(scale),
                rotation: abs.rotation(),
                cursor: Some(cursor),
                ..ShapeOptions::default()
            },
        );
        out.push(graph.add_shape(handle, None));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::TestCanvas;
    use core::f64::consts::FRAC_PI_2;
    use kurbo::Point;

    fn scene_with_box(scale: f64) -> (SceneGraph, NodeId) {
        let mut graph = SceneGraph::new();
        let id = graph.add_shape(
            Node::rectangle(
                RectangleOptions {
                    width: 100.0,
                    height: 50.0,
                },
                ShapeOptions {
                    x: 200.0,
                    y: 100.0,
                    scale: Some(Vec2::new(scale, scale)),
                    active: true,
                    ..ShapeOptions::default()
                },
            ),
            None,
        );
        (graph, id)
    }

    fn position(graph: &SceneGraph, id: NodeId) -> Point {
        graph.get_shape(id).unwrap().absolute().position().to_point()
    }

    #[test]
    fn handles_sit_on_the_corners() {
        let (mut graph, id) = scene_with_box(1.0);
        let handles = build_handles(&mut graph, id, &StageConfig::default());
        let corners: Vec<Point> = handles.iter().map(|&h| position(&graph, h)).collect();
        assert_eq!(
            corners,
            vec![
                Point::new(150.0, 75.0),
                Point::new(250.0, 75.0),
                Point::new(250.0, 125.0),
                Point::new(150.0, 125.0),
            ]
        );
        let cursors: Vec<_> = handles
            .iter()
            .map(|&h| graph.get_shape(h).unwrap().cursor())
            .collect();
        assert_eq!(cursors[0], Some(CursorIcon::NwseResize));
        assert_eq!(cursors[1], Some(CursorIcon::NeswResize));
        assert!(graph.roots().ends_with(&handles));
    }

    #[test]
    fn handle_scale_is_clamped_and_rotation_follows() {
        let (mut graph, id) = scene_with_box(3.0);
        graph.set_rotation(id, FRAC_PI_2);
        let handles = build_handles(&mut graph, id, &StageConfig::default());
        let h = graph.get_shape(handles[0]).unwrap();
        assert_eq!(h.scale(), Vec2::new(1.5, 1.5));
        assert_eq!(h.rotation(), FRAC_PI_2);
        // Top-left corner (50, 25) rotated a quarter turn about (200, 100).
        let p = position(&graph, handles[0]);
        assert!((p.x - 275.0).abs() < 1e-9 && (p.y + 50.0).abs() < 1e-9, "{p:?}");
    }

    #[test]
    fn select_replaces_and_clear_removes() {
        let (mut graph, a) = scene_with_box(1.0);
        let config = StageConfig::default();
        let mut overlay = SelectionOverlay::new();
        overlay.select(&mut graph, a, &config);
        assert_eq!(graph.len(), 5);
        overlay.select(&mut graph, a, &config);
        assert_eq!(graph.len(), 5);
        assert!(overlay.is_tracked(a));
        overlay.clear(&mut graph);
        assert_eq!(graph.len(), 1);
        assert!(overlay.is_empty());
    }

    #[test]
    fn refresh_rebuilds_dirty_owners() {
        let (mut graph, a) = scene_with_box(1.0);
        let config = StageConfig::default();
        let mut overlay = SelectionOverlay::new();
        overlay.select(&mut graph, a, &config);
        graph.draw(&mut TestCanvas::default());
        let before = overlay.handles(a).to_vec();

        overlay.refresh(&mut graph, &config);
        assert_eq!(overlay.handles(a), before.as_slice());

        graph.set_position(a, Vec2::new(0.0, 0.0));
        overlay.refresh(&mut graph, &config);
        assert_ne!(overlay.handles(a), before.as_slice());
        assert!(overlay.is_tracked(a));
        assert_eq!(position(&graph, overlay.handles(a)[0]), Point::new(-50.0, -25.0));

        graph.remove_shape(a, false);
        overlay.refresh(&mut graph, &config);
        assert!(overlay.is_empty());
        assert!(graph.is_empty());
    }
}
