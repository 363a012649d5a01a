// Copyright 2025 the Arbor Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Trailing-edge click debouncing.
//!
//! Hosts can deliver several click events for what the user meant as one
//! (double clicks, synthetic clicks after touch). The debouncer keeps only the
//! most recent click and releases it once no other click arrived for a quiet
//! window.
//!
//! ```
//! use arbor_events::{EventKind, PointerInput};
//! use arbor_stage::click::ClickDebouncer;
//!
//! let mut clicks: ClickDebouncer<u32> = ClickDebouncer::with_window(16);
//! clicks.schedule(PointerInput::new(EventKind::Click, (1.0, 1.0), 100), Some(7));
//! clicks.schedule(PointerInput::new(EventKind::Click, (2.0, 2.0), 110), Some(8));
//!
//! // Not yet quiet for 16ms after the last click.
//! assert!(clicks.poll(120).is_none());
//! let click = clicks.poll(126).unwrap();
//! assert_eq!(click.target, Some(8));
//! assert!(clicks.poll(200).is_none());
//! ```

use arbor_events::PointerInput;

/// Default quiet window in milliseconds.
pub const DEFAULT_WINDOW_MS: u64 = 16;

/// A click waiting for its quiet window to pass.
#[derive(Clone, Debug, PartialEq)]
pub struct PendingClick<K> {
    /// The host input, with its scene position resolved.
    pub input: PointerInput,
    /// Node under the pointer when the click arrived
    pub target: Option<K>,
    /// Time at which the click is released (milliseconds)
    pub due_ms: u64,
}

/// Trailing debouncer for click events.
#[derive(Clone, Debug)]
pub struct ClickDebouncer<K> {
    /// Quiet period after the last click before it is released (milliseconds)
    pub window_ms: u64,
    pending: Option<PendingClick<K>>,
}

impl<K> Default for ClickDebouncer<K> {
    fn default() -> Self {
        Self::with_window(DEFAULT_WINDOW_MS)
    }
}

impl<K> ClickDebouncer<K> {
    /// Create a debouncer with the default 16ms window.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a debouncer with a custom window.
    pub fn with_window(window_ms: u64) -> Self {
        Self {
            window_ms,
            pending: None,
        }
    }

    /// Record a click, replacing any click still waiting.
    ///
    /// Returns `true` if an earlier click was coalesced away.
    pub fn schedule(&mut self, input: PointerInput, target: Option<K>) -> bool {
        let due_ms = input.timestamp_ms.saturating_add(self.window_ms);
        self.pending
            .replace(PendingClick {
                input,
                target,
                due_ms,
            })
            .is_some()
    }

    /// Release the waiting click if its window has passed at `now_ms`.
    pub fn poll(&mut self, now_ms: u64) -> Option<PendingClick<K>> {
        if self.pending.as_ref()?.due_ms <= now_ms {
            self.pending.take()
        } else {
            None
        }
    }

    /// The click still waiting, if any.
    pub fn pending(&self) -> Option<&PendingClick<K>> {
        self.pending.as_ref()
    }

    /// When the waiting click will be released.
    pub fn deadline(&self) -> Option<u64> {
        self.pending.as_ref().map(|p| p.due_ms)
    }

    /// Drop the waiting click.
    pub fn cancel(&mut self) -> Option<PendingClick<K>> {
        self.pending.take()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use arbor_events::EventKind;

    fn click(ts: u64) -> PointerInput {
        PointerInput::new(EventKind::Click, (0.0, 0.0), ts)
    }

    #[test]
    fn releases_after_the_window() {
        let mut d: ClickDebouncer<u32> = ClickDebouncer::new();
        assert!(!d.schedule(click(1000), Some(1)));
        assert_eq!(d.deadline(), Some(1016));
        assert!(d.poll(1015).is_none());
        let p = d.poll(1016).unwrap();
        assert_eq!(p.target, Some(1));
        assert!(d.pending().is_none());
    }

    #[test]
    fn later_clicks_replace_earlier_ones() {
        let mut d: ClickDebouncer<u32> = ClickDebouncer::new();
        d.schedule(click(1000), Some(1));
        assert!(d.schedule(click(1010), None));
        assert!(d.poll(1020).is_none());
        let p = d.poll(1026).unwrap();
        assert_eq!(p.target, None);
        assert_eq!(p.input.timestamp_ms, 1010);
    }

    #[test]
    fn cancel_drops_the_pending_click() {
        let mut d: ClickDebouncer<u32> = ClickDebouncer::with_window(0);
        d.schedule(click(5), Some(3));
        assert_eq!(d.cancel().map(|p| p.target), Some(Some(3)));
        assert!(d.poll(100).is_none());
    }
}
