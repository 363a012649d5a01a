// Copyright 2025 the Arbor Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Core event types shared by the registry, router and dispatcher.

use core::fmt;

use kurbo::Point;

/// Pointer event kinds a node can listen for.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum EventKind {
    /// Debounced click.
    Click,
    /// The pointer started hovering a node.
    PointerEnter,
    /// The pointer stopped hovering a node.
    PointerLeave,
    /// The pointer moved over a node.
    PointerMove,
    /// A button was pressed over a node.
    PointerDown,
    /// A button was released over a node.
    PointerUp,
}

impl EventKind {
    /// Every kind, in declaration order.
    pub const ALL: [Self; 6] = [
        Self::Click,
        Self::PointerEnter,
        Self::PointerLeave,
        Self::PointerMove,
        Self::PointerDown,
        Self::PointerUp,
    ];

    /// Dense index into [`EventKind::ALL`].
    pub const fn index(self) -> usize {
        match self {
            Self::Click => 0,
            Self::PointerEnter => 1,
            Self::PointerLeave => 2,
            Self::PointerMove => 3,
            Self::PointerDown => 4,
            Self::PointerUp => 5,
        }
    }

    /// Host-facing event name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Click => "click",
            Self::PointerEnter => "mouseenter",
            Self::PointerLeave => "mouseleave",
            Self::PointerMove => "mousemove",
            Self::PointerDown => "mousedown",
            Self::PointerUp => "mouseup",
        }
    }
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Propagation phase.
///
/// Capture runs root → target; bubble runs target → root.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Phase {
    /// Target → root.
    Bubble,
    /// Root → target.
    Capture,
}

/// Control whether propagation continues after a handler.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// Keep going.
    Continue,
    /// Stop propagation for the rest of this list.
    Stop,
}

impl Outcome {
    /// `Stop` when `stopped` is true.
    pub const fn from_stopped(stopped: bool) -> Self {
        if stopped { Self::Stop } else { Self::Continue }
    }
}

/// A pointer event as delivered by the host.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerInput {
    /// What happened.
    pub kind: EventKind,
    /// Position in host client coordinates.
    pub client: Point,
    /// Position in scene coordinates (client minus the surface offset).
    pub position: Point,
    /// Host timestamp in milliseconds.
    pub timestamp_ms: u64,
}

impl PointerInput {
    /// Create an input whose scene position equals its client position.
    pub fn new(kind: EventKind, client: impl Into<Point>, timestamp_ms: u64) -> Self {
        let client = client.into();
        Self {
            kind,
            client,
            position: client,
            timestamp_ms,
        }
    }

    /// The same input with a different scene position.
    #[must_use]
    pub fn at(self, position: Point) -> Self {
        Self { position, ..self }
    }
}

/// Keys the scene reacts to.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Key {
    /// Delete the character before the caret.
    Backspace,
    /// Delete the character after the caret.
    Delete,
    /// Move the caret left.
    ArrowLeft,
    /// Move the caret right.
    ArrowRight,
    /// Up arrow.
    ArrowUp,
    /// Down arrow.
    ArrowDown,
    /// Escape.
    Escape,
    /// Any other named key.
    Named(String),
}

impl Key {
    /// Map a host key name (`"ArrowLeft"`, `"Delete"`, ...) to a [`Key`].
    pub fn from_name(name: &str) -> Self {
        match name {
            "Backspace" => Self::Backspace,
            "Delete" => Self::Delete,
            "ArrowLeft" => Self::ArrowLeft,
            "ArrowRight" => Self::ArrowRight,
            "ArrowUp" => Self::ArrowUp,
            "ArrowDown" => Self::ArrowDown,
            "Escape" => Self::Escape,
            other => Self::Named(other.to_owned()),
        }
    }
}

/// A keyboard event as delivered by the host.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct KeyInput {
    /// Which key.
    pub key: Key,
    /// Host timestamp in milliseconds.
    pub timestamp_ms: u64,
}

/// Lookup from a node to its parent and its registered handlers.
///
/// The scene graph implements this so the router can walk from a target to
/// the root without knowing how nodes are stored.
pub trait EventTree<K> {
    /// Parent of `node`, or `None` for a top-level node.
    fn parent_of(&self, node: K) -> Option<K>;
    /// Whether `node` has at least one handler for `(kind, phase)`.
    fn has_handlers(&self, node: K, kind: EventKind, phase: Phase) -> bool;
}
