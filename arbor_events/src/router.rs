// Copyright 2025 the Arbor Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Toggle-list collection.
//!
//! Given a resolved target, walk once from the target to its root and keep
//! every node that has handlers for the event kind. The bubble list comes out
//! target → root and the capture list root → target.

use smallvec::SmallVec;

use crate::types::{EventKind, EventTree, Phase};

/// Per-phase lists of nodes that listen for one event kind.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toggles<K> {
    /// Target → root.
    pub bubble: SmallVec<[K; 8]>,
    /// Root → target.
    pub capture: SmallVec<[K; 8]>,
}

impl<K> Default for Toggles<K> {
    fn default() -> Self {
        Self {
            bubble: SmallVec::new(),
            capture: SmallVec::new(),
        }
    }
}

impl<K> Toggles<K> {
    /// The list for one phase.
    pub fn list(&self, phase: Phase) -> &[K] {
        match phase {
            Phase::Bubble => &self.bubble,
            Phase::Capture => &self.capture,
        }
    }

    /// Whether neither phase has a listener.
    pub fn is_empty(&self) -> bool {
        self.bubble.is_empty() && self.capture.is_empty()
    }
}

/// Collect the bubble and capture lists for `kind`, starting at `target`.
pub fn collect_toggles<K: Copy>(tree: &impl EventTree<K>, target: K, kind: EventKind) -> Toggles<K> {
    let mut out = Toggles::default();
    let mut cur = Some(target);
    // Caller guarantees acyclic ancestry.
    while let Some(node) = cur {
        if tree.has_handlers(node, kind, Phase::Bubble) {
            out.bubble.push(node);
        }
        if tree.has_handlers(node, kind, Phase::Capture) {
            out.capture.push(node);
        }
        cur = tree.parent_of(node);
    }
    out.capture.reverse();
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Chain 1 → 2 → 3 (3 is the leaf), with handler masks per node.
    struct Chain {
        bubble: &'static [u32],
        capture: &'static [u32],
    }

    impl EventTree<u32> for Chain {
        fn parent_of(&self, node: u32) -> Option<u32> {
            (node > 1).then(|| node - 1)
        }

        fn has_handlers(&self, node: u32, kind: EventKind, phase: Phase) -> bool {
            kind == EventKind::Click
                && match phase {
                    Phase::Bubble => self.bubble.contains(&node),
                    Phase::Capture => self.capture.contains(&node),
                }
        }
    }

    #[test]
    fn bubble_is_leaf_first_capture_is_root_first() {
        let tree = Chain {
            bubble: &[1, 2, 3],
            capture: &[1, 3],
        };
        let t = collect_toggles(&tree, 3, EventKind::Click);
        assert_eq!(t.bubble.as_slice(), &[3, 2, 1]);
        assert_eq!(t.capture.as_slice(), &[1, 3]);
        assert_eq!(t.list(Phase::Capture), &[1, 3]);
    }

    #[test]
    fn nodes_without_handlers_are_skipped() {
        let tree = Chain {
            bubble: &[2],
            capture: &[],
        };
        let t = collect_toggles(&tree, 3, EventKind::Click);
        assert_eq!(t.bubble.as_slice(), &[2]);
        assert!(t.capture.is_empty());
        assert!(collect_toggles(&tree, 3, EventKind::PointerMove).is_empty());
    }
}
