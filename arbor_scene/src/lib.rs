// Copyright 2025 the Arbor Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Arbor Scene: a retained-mode 2D scene graph.
//!
//! ## Overview
//!
//! A [`SceneGraph`] owns a forest of [`Node`]s. Each node is one of a closed
//! set of kinds ([`ShapeKind`]: circle, rectangle, path, text) plus shared
//! state: a local transform relative to its parent, colors, stroke width,
//! opacity, z-index, a cursor hint and per-node event handlers.
//!
//! - Transforms propagate eagerly. Every setter on the graph recomputes the
//!   absolute transform of the node and its subtree and marks changed nodes
//!   with [`DirtyFlags::BOUNDS`] and [`DirtyFlags::DRAW`].
//! - Bounding boxes are computed lazily and cached until the node becomes
//!   bounds-dirty again.
//! - [`SceneGraph::find_shape_from_point`] returns the frontmost node under a
//!   point: children before parents, higher z before lower z.
//! - Events are routed with `arbor_events`: the graph collects bubble and
//!   capture lists for a target and runs the handlers of each node with
//!   mutable access to the graph.
//! - Drawing goes through the [`Surface`] trait; text layout asks a
//!   [`TextMeasurer`].
//!
//! ## Composition rules
//!
//! A child's absolute position is its parent's absolute position plus its own
//! local position. Parent rotation and scale do not move the child; they are
//! accumulated separately (rotation adds, scale and opacity multiply) and
//! applied by each kind around its own anchor.
//!
//! ## Example
//!
//! ```rust
//! use arbor_events::{EventKind, Phase, PointerInput};
//! use arbor_scene::{CircleOptions, Node, SceneGraph, ShapeOptions, parse_color};
//! use kurbo::Point;
//!
//! let mut scene = SceneGraph::new();
//! let dot = scene.add_shape(
//!     Node::circle(
//!         CircleOptions { radius: 10.0 },
//!         ShapeOptions {
//!             x: 50.0,
//!             y: 50.0,
//!             fill_color: Some(parse_color("tomato").unwrap()),
//!             ..ShapeOptions::default()
//!         },
//!     )
//!     .on(EventKind::Click, Phase::Bubble, |scene, ev| {
//!         scene.set_opacity(ev.target(), 0.5);
//!     }),
//!     None,
//! );
//!
//! let click = PointerInput::new(EventKind::Click, (52.0, 48.0), 0);
//! let hit = scene.find_shape_from_point(click.position).unwrap();
//! assert_eq!(hit, dot);
//! scene.dispatch_event(hit, EventKind::Click, &click, None);
//! assert_eq!(scene.get_shape(dot).unwrap().absolute().fill_opacity(), 0.5);
//! ```

mod cursor;
mod error;
mod graph;
mod node;
mod options;
pub mod shapes;
pub mod style;
pub mod surface;
pub mod types;

#[cfg(test)]
mod tests_support;

pub use cursor::CursorIcon;
pub use error::SceneError;
pub use graph::{POINTER_TOLERANCE, SceneGraph};
pub use node::{Node, NodeEvent};
pub use options::{CircleOptions, RectangleOptions, ShapeOptions, TextOptions};
pub use shapes::ShapeKind;
pub use style::{Color, parse_color};
pub use surface::{Direction, FixedAdvance, Font, Surface, TextAlign, TextBaseline, TextMeasurer};
pub use types::{AbsoluteTransform, DirtyFlags, LocalTransform, NodeId};
