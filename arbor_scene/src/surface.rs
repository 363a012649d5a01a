// Copyright 2025 the Arbor Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Drawing and text-measurement seams.
//!
//! The scene never rasterizes anything itself. Nodes issue immediate-mode
//! calls against a [`Surface`], in the same vocabulary as an HTML canvas 2D
//! context, and text layout asks a [`TextMeasurer`] for advance widths.

use arbor_geometry::PathCommand;
use kurbo::{Circle, Line, Point, Rect, Vec2};
use strum::{Display, EnumString, IntoStaticStr};

use crate::style::Color;

/// Horizontal anchor of a text run relative to its position.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Display, EnumString, IntoStaticStr)]
#[strum(serialize_all = "lowercase")]
pub enum TextAlign {
    /// Run starts at the position.
    #[default]
    Left,
    /// Run ends at the position.
    Right,
    /// Run is centered on the position.
    Center,
    /// Direction-relative start. Laid out like `Left` for bounds and caret
    /// placement.
    Start,
    /// Direction-relative end. Laid out like `Left` for bounds and caret
    /// placement.
    End,
}

/// Vertical anchor of a text run relative to its position.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Display, EnumString, IntoStaticStr)]
#[strum(serialize_all = "lowercase")]
pub enum TextBaseline {
    /// Top of the em box.
    Top,
    /// Hanging baseline.
    Hanging,
    /// Middle of the em box.
    #[default]
    Middle,
    /// Alphabetic baseline.
    Alphabetic,
    /// Ideographic baseline.
    Ideographic,
    /// Bottom of the em box.
    Bottom,
}

/// Writing direction.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Display, EnumString, IntoStaticStr)]
#[strum(serialize_all = "lowercase")]
pub enum Direction {
    /// Left to right.
    Ltr,
    /// Right to left.
    Rtl,
    /// Whatever the surface uses.
    #[default]
    Inherit,
}

/// Font and layout settings of a text node.
#[derive(Clone, Debug, PartialEq)]
pub struct Font {
    /// Size in scene units. Also used as the line box height.
    pub size: f64,
    /// Family name.
    pub family: String,
    /// Horizontal anchor.
    pub align: TextAlign,
    /// Vertical anchor.
    pub baseline: TextBaseline,
    /// Writing direction.
    pub direction: Direction,
}

impl Default for Font {
    fn default() -> Self {
        Self {
            size: 16.0,
            family: "Arial".to_owned(),
            align: TextAlign::Left,
            baseline: TextBaseline::Middle,
            direction: Direction::Inherit,
        }
    }
}

impl Font {
    /// CSS shorthand, e.g. `"16px Arial"`.
    pub fn css(&self) -> String {
        format!("{}px {}", self.size, self.family)
    }
}

/// Measures the advance width of a text run.
pub trait TextMeasurer {
    /// Width of `text` set in `font`, in scene units.
    fn measure_text(&self, text: &str, font: &Font) -> f64;
}

/// Every character advances by `ratio * font.size`.
///
/// Useful when no shaping engine is available, and in tests.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FixedAdvance {
    /// Advance per character as a fraction of the font size.
    pub ratio: f64,
}

impl Default for FixedAdvance {
    fn default() -> Self {
        Self { ratio: 0.5 }
    }
}

impl TextMeasurer for FixedAdvance {
    fn measure_text(&self, text: &str, font: &Font) -> f64 {
        let chars = text.chars().count() as f64;
        chars * font.size * self.ratio
    }
}

/// Immediate-mode drawing target.
///
/// Calls between [`Surface::save`] and [`Surface::restore`] may change the
/// current transform with [`Surface::translate`], [`Surface::rotate`] and
/// [`Surface::scale`]; geometry is given in the current transform's space.
pub trait Surface: TextMeasurer {
    /// Clear the whole surface.
    fn clear(&mut self);
    /// Push the current transform.
    fn save(&mut self);
    /// Pop to the last saved transform.
    fn restore(&mut self);
    /// Translate the current transform.
    fn translate(&mut self, offset: Vec2);
    /// Rotate the current transform by `radians`.
    fn rotate(&mut self, radians: f64);
    /// Scale the current transform.
    fn scale(&mut self, factor: Vec2);

    /// Fill a path.
    fn fill_path(&mut self, commands: &[PathCommand], color: Color);
    /// Stroke a path.
    fn stroke_path(&mut self, commands: &[PathCommand], color: Color, width: f64);
    /// Fill a rectangle.
    fn fill_rect(&mut self, rect: Rect, color: Color);
    /// Stroke a rectangle outline.
    fn stroke_rect(&mut self, rect: Rect, color: Color, width: f64);
    /// Fill a circle.
    fn fill_circle(&mut self, circle: Circle, color: Color);
    /// Stroke a circle outline.
    fn stroke_circle(&mut self, circle: Circle, color: Color, width: f64);
    /// Stroke a single segment.
    fn stroke_line(&mut self, line: Line, color: Color, width: f64);
    /// Fill a text run anchored at `origin`.
    fn fill_text(&mut self, text: &str, font: &Font, origin: Point, color: Color);
    /// Stroke a text run anchored at `origin`.
    fn stroke_text(&mut self, text: &str, font: &Font, origin: Point, color: Color, width: f64);
}
