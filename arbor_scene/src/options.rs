// Copyright 2025 the Arbor Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Construction options for nodes.

use kurbo::Vec2;

use crate::cursor::CursorIcon;
use crate::style::Color;
use crate::surface::{Direction, TextAlign, TextBaseline};
use crate::types::NodeId;

/// Options shared by every node kind.
///
/// Unset colors are transparent, unset opacities and line width are 1, and
/// unset scale is `(1, 1)`. Use struct update syntax:
///
/// ```
/// use arbor_scene::{ShapeOptions, parse_color};
///
/// let opts = ShapeOptions {
///     x: 10.0,
///     y: 20.0,
///     fill_color: Some(parse_color("steelblue").unwrap()),
///     ..ShapeOptions::default()
/// };
/// assert_eq!(opts.line_width, None);
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ShapeOptions {
    /// Local x position.
    pub x: f64,
    /// Local y position.
    pub y: f64,
    /// Fill color.
    pub fill_color: Option<Color>,
    /// Stroke color.
    pub stroke_color: Option<Color>,
    /// Stroke width. `Some(0.0)` disables stroking.
    pub line_width: Option<f64>,
    /// Stroke opacity in `0..=1`.
    pub stroke_opacity: Option<f64>,
    /// Fill opacity in `0..=1`.
    pub fill_opacity: Option<f64>,
    /// Explicit z-index. When unset the node is stacked above its siblings.
    pub z_index: Option<i32>,
    /// Parent to attach to when the node is added without one.
    pub parent: Option<NodeId>,
    /// Per-axis scale.
    pub scale: Option<Vec2>,
    /// Rotation in radians.
    pub rotation: f64,
    /// Cursor shown while hovering the node.
    pub cursor: Option<CursorIcon>,
    /// Whether clicking the node shows selection handles.
    pub active: bool,
}

/// Circle parameters.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CircleOptions {
    /// Unscaled radius.
    pub radius: f64,
}

impl Default for CircleOptions {
    fn default() -> Self {
        Self { radius: 1.0 }
    }
}

/// Rectangle parameters.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RectangleOptions {
    /// Unscaled width.
    pub width: f64,
    /// Unscaled height.
    pub height: f64,
}

impl Default for RectangleOptions {
    fn default() -> Self {
        Self {
            width: 100.0,
            height: 100.0,
        }
    }
}

/// Text parameters.
#[derive(Clone, Debug, PartialEq)]
pub struct TextOptions {
    /// Initial content.
    pub text: String,
    /// Font size in scene units.
    pub font_size: f64,
    /// Font family.
    pub font_family: String,
    /// Horizontal anchor.
    pub text_align: TextAlign,
    /// Vertical anchor.
    pub text_baseline: TextBaseline,
    /// Writing direction.
    pub direction: Direction,
}

impl Default for TextOptions {
    fn default() -> Self {
        Self {
            text: String::new(),
            font_size: 16.0,
            font_family: "Arial".to_owned(),
            text_align: TextAlign::Left,
            text_baseline: TextBaseline::Middle,
            direction: Direction::Inherit,
        }
    }
}

impl TextOptions {
    /// Default options with the given content.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Self::default()
        }
    }
}
