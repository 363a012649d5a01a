// Copyright 2025 the Arbor Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use arbor_geometry::PathCommand;
use arbor_scene::{Color, CursorIcon, FixedAdvance, Font, Surface, TextMeasurer};
use kurbo::{Circle, Line, Point, Rect, Vec2};

use crate::canvas::{Canvas, TextInputCapture};

/// Canvas that counts draw calls and remembers the cursor.
#[derive(Debug, Default)]
pub(crate) struct TestCanvas {
    pub(crate) offset: Vec2,
    pub(crate) cursor: CursorIcon,
    pub(crate) clears: usize,
    pub(crate) rects: usize,
    pub(crate) texts: Vec<String>,
    pub(crate) carets: usize,
}

impl TextMeasurer for TestCanvas {
    fn measure_text(&self, text: &str, font: &Font) -> f64 {
        FixedAdvance::default().measure_text(text, font)
    }
}

impl Surface for TestCanvas {
    fn clear(&mut self) {
        self.clears += 1;
        self.rects = 0;
        self.texts.clear();
        self.carets = 0;
    }
    fn save(&mut self) {}
    fn restore(&mut self) {}
    fn translate(&mut self, _offset: Vec2) {}
    fn rotate(&mut self, _radians: f64) {}
    fn scale(&mut self, _factor: Vec2) {}
    fn fill_path(&mut self, _commands: &[PathCommand], _color: Color) {}
    fn stroke_path(&mut self, _commands: &[PathCommand], _color: Color, _width: f64) {}
    fn fill_rect(&mut self, _rect: Rect, _color: Color) {}
    fn stroke_rect(&mut self, _rect: Rect, _color: Color, _width: f64) {
        self.rects += 1;
    }
    fn fill_circle(&mut self, _circle: Circle, _color: Color) {}
    fn stroke_circle(&mut self, _circle: Circle, _color: Color, _width: f64) {}
    fn stroke_line(&mut self, _line: Line, _color: Color, _width: f64) {
        self.carets += 1;
    }
    fn fill_text(&mut self, text: &str, _font: &Font, _origin: Point, _color: Color) {
        self.texts.push(text.to_owned());
    }
    fn stroke_text(&mut self, _text: &str, _font: &Font, _origin: Point, _color: Color, _width: f64) {
    }
}

impl Canvas for TestCanvas {
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

/// In-memory text field.
#[derive(Debug, Default)]
pub(crate) struct TestInput {
    pub(crate) value: String,
    pub(crate) selection: (usize, usize),
    pub(crate) focused: bool,
}

impl TextInputCapture for TestInput {
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
        self.selection.0
    }
    fn set_selection(&mut self, start: usize, end: usize) {
        self.selection = (start, end);
    }
}
