// Copyright 2025 the Arbor Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Dispatcher helper: walk toggle lists and honor stop outcomes.
//!
//! - [`run`] walks one list in order and stops at the first
//!   [`Outcome::Stop`].
//! - [`dispatch`] applies the phase policy: with no explicit phase, the bubble
//!   list runs first and the capture list runs after it, each stopping on its
//!   own; with an explicit phase only that list runs.
//!
//! ## Minimal example
//!
//! ```
//! use arbor_events::dispatcher;
//! use arbor_events::router::Toggles;
//! use arbor_events::types::{Outcome, Phase};
//! use smallvec::smallvec;
//!
//! // Leaf 2 under root 1, both listening in both phases.
//! let toggles = Toggles {
//!     bubble: smallvec![2, 1],
//!     capture: smallvec![1, 2],
//! };
//!
//! let mut seen = Vec::new();
//! let report = dispatcher::dispatch(&toggles, None, |node, phase| {
//!     seen.push((phase, node));
//!     // The leaf stops bubbling; capture is unaffected.
//!     if phase == Phase::Bubble && node == 2 { Outcome::Stop } else { Outcome::Continue }
//! });
//!
//! assert_eq!(report.bubble_stopped_at, Some(2));
//! assert_eq!(report.capture_stopped_at, None);
//! assert_eq!(seen, vec![
//!     (Phase::Bubble, 2),
//!     (Phase::Capture, 1), (Phase::Capture, 2),
//! ]);
//! ```

use crate::router::Toggles;
use crate::types::{Outcome, Phase};

/// Where each phase stopped, if it stopped early.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DispatchReport<K> {
    /// Node whose bubble handlers stopped propagation.
    pub bubble_stopped_at: Option<K>,
    /// Node whose capture handlers stopped propagation.
    pub capture_stopped_at: Option<K>,
}

impl<K> Default for DispatchReport<K> {
    fn default() -> Self {
        Self {
            bubble_stopped_at: None,
            capture_stopped_at: None,
        }
    }
}

/// Run `handler` over `seq` in order.
///
/// Returns `None` if every entry was visited, or the entry whose handler
/// returned [`Outcome::Stop`].
pub fn run<K: Copy>(seq: &[K], mut handler: impl FnMut(K) -> Outcome) -> Option<K> {
    for &node in seq {
        match handler(node) {
            Outcome::Continue => {}
            Outcome::Stop => return Some(node),
        }
    }
    None
}

/// Dispatch across toggle lists.
///
/// `phase == None` runs the bubble list and then the capture list; a stop in
/// one never prevents the other. `Some(phase)` runs only that list.
pub fn dispatch<K: Copy>(
    toggles: &Toggles<K>,
    phase: Option<Phase>,
    mut handler: impl FnMut(K, Phase) -> Outcome,
) -> DispatchReport<K> {
    let mut report = DispatchReport::default();
    let run_bubble = matches!(phase, None | Some(Phase::Bubble));
    let run_capture = matches!(phase, None | Some(Phase::Capture));
    if run_bubble {
        report.bubble_stopped_at = run(&toggles.bubble, |k| handler(k, Phase::Bubble));
    }
    if run_capture {
        report.capture_stopped_at = run(&toggles.capture, |k| handler(k, Phase::Capture));
    }
    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use smallvec::smallvec;

    fn toggles() -> Toggles<u32> {
        Toggles {
            bubble: smallvec![3, 2, 1],
            capture: smallvec![1, 2, 3],
        }
    }

    #[test]
    fn continue_through_all() {
        let mut seen = Vec::new();
        let stopped = run(&[1, 2, 3], |n| {
            seen.push(n);
            Outcome::Continue
        });
        assert!(stopped.is_none());
        assert_eq!(seen, vec![1, 2, 3]);
    }

    #[test]
    fn stop_aborts_the_rest_of_the_list() {
        let mut seen = Vec::new();
        let stopped = run(&[1, 2, 3], |n| {
            seen.push(n);
            Outcome::from_stopped(n == 2)
        });
        assert_eq!(stopped, Some(2));
        assert_eq!(seen, vec![1, 2]);
    }

    #[test]
    fn unspecified_phase_runs_bubble_then_capture() {
        let mut seen = Vec::new();
        let report = dispatch(&toggles(), None, |n, p| {
            seen.push((p, n));
            Outcome::Continue
        });
        assert_eq!(report, DispatchReport::default());
        assert_eq!(
            seen,
            vec![
                (Phase::Bubble, 3),
                (Phase::Bubble, 2),
                (Phase::Bubble, 1),
                (Phase::Capture, 1),
                (Phase::Capture, 2),
                (Phase::Capture, 3),
            ]
        );
    }

    #[test]
    fn capture_stop_does_not_affect_bubble() {
        let mut seen = Vec::new();
        let report = dispatch(&toggles(), None, |n, p| {
            seen.push((p, n));
            Outcome::from_stopped(p == Phase::Capture && n == 1)
        });
        assert_eq!(report.capture_stopped_at, Some(1));
        assert_eq!(report.bubble_stopped_at, None);
        assert_eq!(seen.len(), 4);
    }

    #[test]
    fn explicit_phase_runs_one_list() {
        let mut seen = Vec::new();
        dispatch(&toggles(), Some(Phase::Capture), |n, p| {
            seen.push((p, n));
            Outcome::Continue
        });
        assert_eq!(
            seen,
            vec![(Phase::Capture, 1), (Phase::Capture, 2), (Phase::Capture, 3)]
        );
    }
}
