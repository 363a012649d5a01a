// Copyright 2025 the Arbor Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::ops::RangeInclusive;

/// Tunables for a [`Stage`](crate::Stage).
#[derive(Clone, Debug, PartialEq)]
pub struct StageConfig {
    /// Quiet window before a click is acted upon (milliseconds).
    pub click_debounce_ms: u64,
    /// Distance within which a pointer hits a path stroke.
    pub pointer_tolerance: f64,
    /// Caret blink half-period (milliseconds).
    pub caret_blink_ms: u64,
    /// Side length of a selection handle before scaling.
    pub handle_size: f64,
    /// Range the selected node's scale is clamped to when sizing handles.
    pub handle_scale: RangeInclusive<f64>,
}

impl Default for StageConfig {
    fn default() -> Self {
        Self {
            click_debounce_ms: 16,
            pointer_tolerance: arbor_scene::POINTER_TOLERANCE,
            caret_blink_ms: 500,
            handle_size: 10.0,
            handle_scale: 0.5..=1.5,
        }
    }
}

impl StageConfig {
    /// Clamp one scale component into [`StageConfig::handle_scale`].
    pub fn clamp_handle_scale(&self, s: f64) -> f64 {
        s.clamp(*self.handle_scale.start(), *self.handle_scale.end())
    }
}
