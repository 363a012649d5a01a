// Copyright 2025 the Arbor Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use arbor_geometry::PathCommand;
use kurbo::{Circle, Line, Point, Rect, Vec2};

use crate::style::Color;
use crate::surface::{Font, Surface, TextMeasurer};

/// Accepts and discards every call.
pub(crate) struct NullSurface;

impl TextMeasurer for NullSurface {
    fn measure_text(&self, _text: &str, _font: &Font) -> f64 {
        0.0
    }
}

impl Surface for NullSurface {
    fn clear(&mut self) {}
    fn save(&mut self) {}
    fn restore(&mut self) {}
    fn translate(&mut self, _offset: Vec2) {}
    fn rotate(&mut self, _radians: f64) {}
    fn scale(&mut self, _factor: Vec2) {}
    fn fill_path(&mut self, _commands: &[PathCommand], _color: Color) {}
    fn stroke_path(&mut self, _commands: &[PathCommand], _color: Color, _width: f64) {}
    fn fill_rect(&mut self, _rect: Rect, _color: Color) {}
    fn stroke_rect(&mut self, _rect: Rect, _color: Color, _width: f64) {}
    fn fill_circle(&mut self, _circle: Circle, _color: Color) {}
    fn stroke_circle(&mut self, _circle: Circle, _color: Color, _width: f64) {}
    fn stroke_line(&mut self, _line: Line, _color: Color, _width: f64) {}
    fn fill_text(&mut self, _text: &str, _font: &Font, _origin: Point, _color: Color) {}
    fn stroke_text(&mut self, _text: &str, _font: &Font, _origin: Point, _color: Color, _width: f64) {
    }
}

/// Records stroked rectangles and whether the surface was ever scaled.
#[derive(Debug, Default)]
pub(crate) struct RectRecorder {
    pub(crate) rects: Vec<Rect>,
    pub(crate) scaled: bool,
}

impl TextMeasurer for RectRecorder {
    fn measure_text(&self, _text: &str, _font: &Font) -> f64 {
        0.0
    }
}

impl Surface for RectRecorder {
    fn clear(&mut self) {}
    fn save(&mut self) {}
    fn restore(&mut self) {}
    fn translate(&mut self, _offset: Vec2) {}
    fn rotate(&mut self, _radians: f64) {}
    fn scale(&mut self, _factor: Vec2) {
        self.scaled = true;
    }
    fn fill_path(&mut self, _commands: &[PathCommand], _color: Color) {}
    fn stroke_path(&mut self, _commands: &[PathCommand], _color: Color, _width: f64) {}
    fn fill_rect(&mut self, _rect: Rect, _color: Color) {}
    fn stroke_rect(&mut self, rect: Rect, _color: Color, _width: f64) {
        self.rects.push(rect);
    }
    fn fill_circle(&mut self, _circle: Circle, _color: Color) {}
    fn stroke_circle(&mut self, _circle: Circle, _color: Color, _width: f64) {}
    fn stroke_line(&mut self, _line: Line, _color: Color, _width: f64) {}
    fn fill_text(&mut self, _text: &str, _font: &Font, _origin: Point, _color: Color) {}
    fn stroke_text(&mut self, _text: &str, _font: &Font, _origin: Point, _color: Color, _width: f64) {
    }
}
