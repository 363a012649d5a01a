// Copyright 2025 the Arbor Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Host seams: the drawing canvas and the hidden text field.

use arbor_scene::{CursorIcon, Surface};
use kurbo::Vec2;

/// The surface a stage draws on, plus the host state around it.
pub trait Canvas: Surface {
    /// Offset of the canvas in client coordinates. Pointer inputs are
    /// translated by its negation before hit testing.
    fn offset(&self) -> Vec2;
    /// Cursor currently shown over the canvas.
    fn cursor(&self) -> CursorIcon;
    /// Change the cursor shown over the canvas.
    fn set_cursor(&mut self, cursor: CursorIcon);
}

/// An off-screen text field that captures keyboard and IME input while a
/// text node is being edited.
///
/// Positions count `char`s.
pub trait TextInputCapture {
    /// Give the field keyboard focus.
    fn focus(&mut self);
    /// Remove keyboard focus.
    fn blur(&mut self);
    /// Current content.
    fn value(&self) -> String;
    /// Replace the content.
    fn set_value(&mut self, value: &str);
    /// Start of the selection.
    fn selection_start(&self) -> usize;
    /// Select `start..end`. Equal bounds place a caret.
    fn set_selection(&mut self, start: usize, end: usize);
}
