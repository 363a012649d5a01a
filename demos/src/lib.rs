// Copyright 2025 the Arbor Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Shared pieces for the Arbor demos: logging setup and a headless canvas.
//!
//! Run a demo with `ARBOR_LOG=debug` (or `trace`) to see the scene's own
//! tracing output next to the demo's.

use arbor_geometry::PathCommand;
use arbor_scene::{Color, CursorIcon, FixedAdvance, Font, Surface, TextMeasurer};
use arbor_stage::{Canvas, TextInputCapture};
use kurbo::{Circle, Line, Point, Rect, Vec2};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Install a formatting subscriber filtered by the `ARBOR_LOG` variable.
pub fn init_tracing() {
    tracing_subscriber::registry()
        .with(tracing_subscriber::filter::EnvFilter::from_env("ARBOR_LOG"))
        .with(tracing_subscriber::fmt::layer().with_target(true))
        .init();
}

/// One recorded drawing call.
#[derive(Clone, Debug, PartialEq)]
pub enum DrawOp {
    /// A filled path.
    FillPath(usize, Color),
    /// A stroked path.
    StrokePath(usize, Color, f64),
    /// A filled rectangle, in the current local frame.
    FillRect(Rect, Color),
    /// A stroked rectangle, in the current local frame.
    StrokeRect(Rect, Color, f64),
    /// A filled circle.
    FillCircle(Circle, Color),
    /// A stroked circle.
    StrokeCircle(Circle, Color, f64),
    /// A line, used for the text caret.
    Line(Line, Color, f64),
    /// A filled run of text.
    FillText(String, Point),
    /// A stroked run of text.
    StrokeText(String, Point),
}

/// A canvas that records draw calls instead of rasterizing them.
///
/// State changes (save, restore, transforms) are not recorded.
#[derive(Debug, Default)]
pub struct RecordingCanvas {
    /// Calls since the last clear.
    pub ops: Vec<DrawOp>,
    /// Offset of the canvas in client coordinates.
    pub offset: Vec2,
    /// Cursor shown over the canvas.
    pub cursor: CursorIcon,
    measurer: FixedAdvance,
}

impl RecordingCanvas {
    /// An empty canvas at `offset`.
    pub fn new(offset: Vec2) -> Self {
        Self {
            offset,
            ..Self::default()
        }
    }

    /// Text runs drawn since the last clear.
    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.ops.iter().filter_map(|op| match op {
            DrawOp::FillText(text, _) | DrawOp::StrokeText(text, _) => Some(text.as_str()),
            _ => None,
        })
    }
}

impl TextMeasurer for RecordingCanvas {
    fn measure_text(&self, text: &str, font: &Font) -> f64 {
        self.measurer.measure_text(text, font)
    }
}

impl Surface for RecordingCanvas {
    fn clear(&mut self) {
        self.ops.clear();
    }
    fn save(&mut self) {}
    fn restore(&mut self) {}
    fn translate(&mut self, _offset: Vec2) {}
    fn rotate(&mut self, _radians: f64) {}
    fn scale(&mut self, _factor: Vec2) {}
    fn fill_path(&mut self, commands: &[PathCommand], color: Color) {
        self.ops.push(DrawOp::FillPath(commands.len(), color));
    }
    fn stroke_path(&mut self, commands: &[PathCommand], color: Color, width: f64) {
        self.ops
            .push(DrawOp::StrokePath(commands.len(), color, width));
    }
    fn fill_rect(&mut self, rect: Rect, color: Color) {
        self.ops.push(DrawOp::FillRect(rect, color));
    }
    fn stroke_rect(&mut self, rect: Rect, color: Color, width: f64) {
        self.ops.push(DrawOp::StrokeRect(rect, color, width));
    }
    fn fill_circle(&mut self, circle: Circle, color: Color) {
        self.ops.push(DrawOp::FillCircle(circle, color));
    }
    fn stroke_circle(&mut self, circle: Circle, color: Color, width: f64) {
        self.ops.push(DrawOp::StrokeCircle(circle, color, width));
    }
    fn stroke_line(&mut self, line: Line, color: Color, width: f64) {
        self.ops.push(DrawOp::Line(line, color, width));
    }
    fn fill_text(&mut self, text: &str, _font: &Font, origin: Point, _color: Color) {
        self.ops.push(DrawOp::FillText(text.to_owned(), origin));
    }
    fn stroke_text(&mut self, text: &str, _font: &Font, origin: Point, _color: Color, _width: f64) {
        self.ops.push(DrawOp::StrokeText(text.to_owned(), origin));
    }
}

impl Canvas for RecordingCanvas {
    fn offset(&self) -> Vec2 {
        self.offset
    }
    fn cursor(&self) -> CursorIcon {
        self.cursor
    }
    fn set_cursor(&mut self, cursor: CursorIcon) {
        self.cursor = cursor;
    }
}

/// A text field held in memory.
///
/// Demos edit `value` and `caret` directly to play the part of the user
/// typing, then call [`arbor_stage::Stage::handle_text_input`].
#[derive(Debug, Default)]
pub struct MemoryInput {
    /// Field content.
    pub value: String,
    /// Caret position, in chars.
    pub caret: usize,
    /// Whether the field has focus.
    pub focused: bool,
}

impl TextInputCapture for MemoryInput {
    fn focus(&mut self) {
        self.focused = true;
    }
    fn blur(&mut self) {
        self.focused = false;
    }
    fn value(&self) -> String {
        self.value.clone()
    }
    fn set_value(&mut self, value: &str) {
        self.value = value.to_owned();
    }
    fn selection_start(&self) -> usize {
        self.caret
    }
    fn set_selection(&mut self, start: usize, _end: usize) {
        self.caret = start;
    }
}
