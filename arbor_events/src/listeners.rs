// Copyright 2025 the Arbor Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use crate::types::EventKind;

/// Number of registered handlers per event kind across a whole tree.
///
/// The owner increments and decrements these as handlers come and go, so
/// hot paths such as pointer-move dispatch can be skipped when nobody
/// listens.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ListenerCounts {
    counts: [usize; EventKind::ALL.len()],
}

impl ListenerCounts {
    /// All counts at zero.
    pub const fn new() -> Self {
        Self {
            counts: [0; EventKind::ALL.len()],
        }
    }

    /// Record `n` new handlers for `kind`.
    pub fn add(&mut self, kind: EventKind, n: usize) {
        self.counts[kind.index()] += n;
    }

    /// Record `n` removed handlers for `kind`, saturating at zero.
    pub fn remove(&mut self, kind: EventKind, n: usize) {
        let slot = &mut self.counts[kind.index()];
        *slot = slot.saturating_sub(n);
    }

    /// Handlers currently registered for `kind`.
    pub fn count(&self, kind: EventKind) -> usize {
        self.counts[kind.index()]
    }

    /// Whether anybody listens for `kind`.
    pub fn has_listeners(&self, kind: EventKind) -> bool {
        self.count(kind) > 0
    }
}
