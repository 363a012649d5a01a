// Copyright 2025 the Arbor Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Per-node handler registry.
//!
//! Handlers are stored per `(EventKind, Phase)` in insertion order, which is
//! also invocation order. Each handler is a reference-counted closure so the
//! owner can clone a handler list out of the registry before invoking it with
//! mutable access to the structure that owns the registry.

use core::fmt;
use core::sync::atomic::{AtomicU64, Ordering};
use std::rc::Rc;

use hashbrown::HashMap;
use smallvec::SmallVec;

use crate::types::{EventKind, Outcome, Phase, PointerInput};

/// Identifies a registered handler for later removal.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct HandlerId(u64);

impl HandlerId {
    fn next() -> Self {
        static NEXT: AtomicU64 = AtomicU64::new(1);
        Self(NEXT.fetch_add(1, Ordering::Relaxed))
    }
}

/// The event handed to each handler.
///
/// `target` is the node the event was resolved to; `current` is the node
/// whose handler is running. Calling [`EventWithStop::stop_propagation`]
/// stops the list walk after the current node's handlers finish.
#[derive(Debug)]
pub struct EventWithStop<'a, K> {
    input: &'a PointerInput,
    target: K,
    current: K,
    stopped: bool,
}

impl<'a, K: Copy> EventWithStop<'a, K> {
    /// Create a fresh event for one node's handlers.
    pub fn new(input: &'a PointerInput, target: K, current: K) -> Self {
        Self {
            input,
            target,
            current,
            stopped: false,
        }
    }

    /// The original host input.
    pub fn input(&self) -> &'a PointerInput {
        self.input
    }

    /// Node the event was resolved to.
    pub fn target(&self) -> K {
        self.target
    }

    /// Node whose handler is running.
    pub fn current_target(&self) -> K {
        self.current
    }

    /// Stop propagation to the remaining nodes of this phase.
    pub fn stop_propagation(&mut self) {
        self.stopped = true;
    }

    /// Whether a handler asked to stop propagation.
    pub fn is_propagation_stopped(&self) -> bool {
        self.stopped
    }
}

/// A registered handler.
pub type Handler<C, K> = Rc<dyn Fn(&mut C, &mut EventWithStop<'_, K>)>;

/// Wrap a closure as a [`Handler`].
pub fn handler<C, K, F>(f: F) -> Handler<C, K>
where
    F: Fn(&mut C, &mut EventWithStop<'_, K>) + 'static,
{
    Rc::new(f)
}

type Entries<C, K> = SmallVec<[(HandlerId, Handler<C, K>); 2]>;

/// Ordered handlers per `(EventKind, Phase)`.
pub struct EventRegistry<C, K> {
    handlers: HashMap<(EventKind, Phase), Entries<C, K>>,
}

impl<C, K> Default for EventRegistry<C, K> {
    fn default() -> Self {
        Self {
            handlers: HashMap::new(),
        }
    }
}

impl<C, K> fmt::Debug for EventRegistry<C, K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut keys: Vec<_> = self
            .handlers
            .iter()
            .map(|(key, list)| (*key, list.len()))
            .collect();
        keys.sort_by_key(|((kind, phase), _)| (*kind, *phase == Phase::Capture));
        f.debug_struct("EventRegistry")
            .field("handlers", &keys)
            .finish()
    }
}

impl<C, K> EventRegistry<C, K> {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a handler for `(kind, phase)`.
    pub fn add(&mut self, kind: EventKind, phase: Phase, handler: Handler<C, K>) -> HandlerId {
        let id = HandlerId::next();
        self.handlers
            .entry((kind, phase))
            .or_default()
            .push((id, handler));
        id
    }

    /// Remove a handler. Returns `false` when it was not registered under
    /// `(kind, phase)`.
    pub fn remove(&mut self, kind: EventKind, phase: Phase, id: HandlerId) -> bool {
        let Some(list) = self.handlers.get_mut(&(kind, phase)) else {
            return false;
        };
        let Some(pos) = list.iter().position(|(h, _)| *h == id) else {
            return false;
        };
        list.remove(pos);
        if list.is_empty() {
            self.handlers.remove(&(kind, phase));
        }
        true
    }

    /// Append a closure for `(kind, phase)`.
    pub fn on<F>(&mut self, kind: EventKind, phase: Phase, f: F) -> HandlerId
    where
        F: Fn(&mut C, &mut EventWithStop<'_, K>) + 'static,
    {
        self.add(kind, phase, handler(f))
    }

    /// Whether any handler is registered for `(kind, phase)`.
    pub fn has(&self, kind: EventKind, phase: Phase) -> bool {
        self.handlers
            .get(&(kind, phase))
            .is_some_and(|list| !list.is_empty())
    }

    /// Number of handlers registered for `kind` across both phases.
    pub fn count(&self, kind: EventKind) -> usize {
        [Phase::Bubble, Phase::Capture]
            .into_iter()
            .filter_map(|phase| self.handlers.get(&(kind, phase)))
            .map(SmallVec::len)
            .sum()
    }

    /// Total number of handlers.
    pub fn len(&self) -> usize {
        self.handlers.values().map(SmallVec::len).sum()
    }

    /// Whether no handler is registered.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Clone the handler list for `(kind, phase)` in invocation order.
    pub fn handlers(&self, kind: EventKind, phase: Phase) -> SmallVec<[Handler<C, K>; 2]> {
        self.handlers
            .get(&(kind, phase))
            .map(|list| list.iter().map(|(_, h)| Rc::clone(h)).collect())
            .unwrap_or_default()
    }
}

/// Run `handlers` in order against one node and report whether any of them
/// stopped propagation.
///
/// Every handler of the node runs; stopping only affects later nodes.
pub fn trigger<C, K: Copy>(
    handlers: &[Handler<C, K>],
    ctx: &mut C,
    input: &PointerInput,
    target: K,
    current: K,
) -> Outcome {
    let mut event = EventWithStop::new(input, target, current);
    for handler in handlers {
        handler(ctx, &mut event);
    }
    Outcome::from_stopped(event.is_propagation_stopped())
}

#[cfg(test)]
mod tests {
    use super::*;
    use kurbo::Point;

    fn input() -> PointerInput {
        PointerInput::new(EventKind::Click, Point::new(0.0, 0.0), 0)
    }

    #[test]
    fn handlers_run_in_insertion_order() {
        let mut reg: EventRegistry<Vec<u32>, u32> = EventRegistry::new();
        reg.on(EventKind::Click, Phase::Bubble, |log, _| log.push(1));
        reg.on(EventKind::Click, Phase::Bubble, |log, _| log.push(2));
        reg.on(EventKind::Click, Phase::Capture, |log, _| log.push(3));

        let mut log = Vec::new();
        let handlers = reg.handlers(EventKind::Click, Phase::Bubble);
        let outcome = trigger(&handlers, &mut log, &input(), 7, 7);
        assert_eq!(outcome, Outcome::Continue);
        assert_eq!(log, vec![1, 2]);
    }

    #[test]
    fn stop_lets_sibling_handlers_finish() {
        let mut reg: EventRegistry<Vec<u32>, u32> = EventRegistry::new();
        reg.on(EventKind::Click, Phase::Bubble, |log, ev| {
            log.push(ev.current_target());
            ev.stop_propagation();
        });
        reg.add(
            EventKind::Click,
            Phase::Bubble,
            handler(|log: &mut Vec<u32>, ev| log.push(ev.target())),
        );
        let mut log = Vec::new();
        let handlers = reg.handlers(EventKind::Click, Phase::Bubble);
        let outcome = trigger(&handlers, &mut log, &input(), 1, 2);
        assert_eq!(outcome, Outcome::Stop);
        assert_eq!(log, vec![2, 1]);
    }

    #[test]
    fn remove_by_id() {
        let mut reg: EventRegistry<(), u32> = EventRegistry::new();
        let a = reg.on(EventKind::PointerMove, Phase::Capture, |_, _| {});
        let b = reg.on(EventKind::PointerMove, Phase::Capture, |_, _| {});
        assert_eq!(reg.count(EventKind::PointerMove), 2);
        assert!(!reg.remove(EventKind::PointerMove, Phase::Bubble, a));
        assert!(reg.remove(EventKind::PointerMove, Phase::Capture, a));
        assert!(!reg.remove(EventKind::PointerMove, Phase::Capture, a));
        assert!(reg.has(EventKind::PointerMove, Phase::Capture));
        assert!(reg.remove(EventKind::PointerMove, Phase::Capture, b));
        assert!(!reg.has(EventKind::PointerMove, Phase::Capture));
        assert!(reg.is_empty());
    }

    #[test]
    fn empty_list_continues() {
        let reg: EventRegistry<(), u32> = EventRegistry::new();
        let handlers = reg.handlers(EventKind::Click, Phase::Capture);
        assert!(handlers.is_empty());
        assert_eq!(trigger(&handlers, &mut (), &input(), 0, 0), Outcome::Continue);
    }
}
