// Copyright 2025 the Arbor Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use arbor_geometry::BoundingBox;
use kurbo::{Line, Point};

use super::Paint;
use crate::style::alpha;
use crate::surface::{Direction, Font, Surface, TextAlign, TextBaseline, TextMeasurer};
use crate::types::AbsoluteTransform;

/// Line advance as a multiple of the font size.
const LINE_HEIGHT: f64 = 1.2;

/// Byte offset of the `index`-th char, or the end of `s`.
fn byte_index(s: &str, index: usize) -> usize {
    s.char_indices().nth(index).map_or(s.len(), |(b, _)| b)
}

/// An editable text run anchored at the node position.
///
/// Caret positions count `char`s, not bytes.
#[derive(Clone, Debug, PartialEq)]
pub struct TextShape {
    text: String,
    font: Font,
    cursor: usize,
    editing: bool,
    caret_visible: bool,
}

impl TextShape {
    pub(crate) fn new(text: String, font: Font) -> Self {
        Self {
            text,
            font,
            cursor: 0,
            editing: false,
            caret_visible: false,
        }
    }

    /// Current content.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Font and layout.
    pub fn font(&self) -> &Font {
        &self.font
    }

    /// Caret position.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Number of chars.
    pub fn char_len(&self) -> usize {
        self.text.chars().count()
    }

    /// Whether an edit session is active.
    pub fn is_editing(&self) -> bool {
        self.editing
    }

    /// Whether the caret is in the visible half of its blink.
    pub fn is_caret_visible(&self) -> bool {
        self.caret_visible
    }

    pub(crate) fn set_text(&mut self, text: String) {
        self.text = text;
        self.cursor = self.cursor.min(self.char_len());
    }

    pub(crate) fn set_font(&mut self, font: Font) {
        self.font = font;
    }

    pub(crate) fn insert(&mut self, s: &str) {
        let at = byte_index(&self.text, self.cursor);
        self.text.insert_str(at, s);
        self.cursor += s.chars().count();
    }

    /// Positive counts delete after the caret, negative counts before it.
    pub(crate) fn delete(&mut self, count: isize) {
        let len = self.char_len();
        let (start, end) = if count >= 0 {
            (self.cursor, (self.cursor + count.unsigned_abs()).min(len))
        } else {
            let k = count.unsigned_abs().min(self.cursor);
            (self.cursor - k, self.cursor)
        };
        let (a, b) = (byte_index(&self.text, start), byte_index(&self.text, end));
        self.text.replace_range(a..b, "");
        self.cursor = start;
    }

    pub(crate) fn set_cursor(&mut self, position: usize) {
        self.cursor = position.min(self.char_len());
    }

    pub(crate) fn start_editing(&mut self) {
        self.editing = true;
        self.cursor = self.char_len();
        self.caret_visible = true;
    }

    pub(crate) fn stop_editing(&mut self) {
        self.editing = false;
        self.caret_visible = false;
    }

    pub(crate) fn toggle_caret(&mut self) {
        self.caret_visible = !self.caret_visible;
    }

    fn align_offset(&self, width: f64) -> f64 {
        match self.font.align {
            TextAlign::Center => -width / 2.0,
            TextAlign::Right => -width,
            TextAlign::Left | TextAlign::Start | TextAlign::End => 0.0,
        }
    }

    pub(crate) fn bounding_box(
        &self,
        abs: &AbsoluteTransform,
        measurer: &dyn TextMeasurer,
    ) -> Option<BoundingBox> {
        let w = measurer.measure_text(&self.text, &self.font);
        let h = self.font.size;
        let mut dx = self.align_offset(w);
        let dy = match self.font.baseline {
            TextBaseline::Middle => -h / 2.0,
            TextBaseline::Bottom => -h,
            TextBaseline::Top => 0.0,
            TextBaseline::Hanging | TextBaseline::Alphabetic | TextBaseline::Ideographic => {
                -0.75 * h
            }
        };
        if self.font.direction == Direction::Rtl {
            dx = -dx - w;
        }
        let (p, s) = (abs.position(), abs.scale());
        let origin = Point::new(p.x + dx * s.x, p.y + dy * s.y);
        Some(BoundingBox::from_origin_size(origin, w * s.x, h * s.y))
    }

    /// Caret index nearest to `local`, a point relative to the node's
    /// absolute position.
    ///
    /// Lines are `1.2 * font size` apart. Points below the last line map to
    /// the end of the text; points left of a line map to its start.
    pub fn index_from_point(&self, local: Point, measurer: &dyn TextMeasurer) -> usize {
        let fs = self.font.size;
        let mut top = 0.0;
        let mut line_start = 0;
        let mut hit_line = None;
        for line in self.text.split('\n') {
            if top + fs > local.y {
                hit_line = Some(line);
                break;
            }
            top += fs * LINE_HEIGHT;
            line_start += line.chars().count() + 1;
        }
        let Some(line) = hit_line else {
            return self.char_len();
        };

        let line_width = measurer.measure_text(line, &self.font);
        let start_x = self.align_offset(line_width);
        if local.x < start_x {
            return line_start;
        }
        let mut buf = [0_u8; 4];
        let mut advance = |ch: char| measurer.measure_text(ch.encode_utf8(&mut buf), &self.font);

        let char_index = if self.font.direction == Direction::Rtl {
            let chars: Vec<char> = line.chars().collect();
            let mut total = 0.0;
            let mut found = 0;
            for (i, &ch) in chars.iter().enumerate().rev() {
                total += advance(ch);
                if start_x + line_width - total <= local.x {
                    found = i;
                    break;
                }
            }
            found
        } else {
            let mut total = 0.0;
            let mut found = line.chars().count();
            for (i, ch) in line.chars().enumerate() {
                let w = advance(ch);
                total += w;
                let right = start_x + total;
                if right >= local.x {
                    let left = right - w;
                    found = if local.x - left < right - local.x { i } else { i + 1 };
                    break;
                }
            }
            found
        };
        line_start + char_index
    }

    pub(crate) fn draw(&self, surface: &mut dyn Surface, abs: &AbsoluteTransform, paint: Paint) {
        surface.save();
        surface.translate(abs.position());
        surface.rotate(abs.rotation());
        surface.scale(abs.scale());
        if alpha(paint.fill) > 0.0 {
            surface.fill_text(&self.text, &self.font, Point::ORIGIN, paint.fill);
        }
        if paint.line_width > 0.0 {
            surface.stroke_text(
                &self.text,
                &self.font,
                Point::ORIGIN,
                paint.stroke,
                paint.line_width,
            );
        }
        if self.editing && self.caret_visible {
            let prefix = &self.text[..byte_index(&self.text, self.cursor)];
            let width = surface.measure_text(&self.text, &self.font);
            let x = self.align_offset(width) + surface.measure_text(prefix, &self.font);
            let half = self.font.size / 2.0;
            surface.stroke_line(Line::new((x, -half), (x, half)), paint.fill, 1.0);
        }
        surface.restore();
    }
}
