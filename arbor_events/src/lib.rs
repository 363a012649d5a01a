// Copyright 2025 the Arbor Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Arbor Events: capture and bubble routing for a retained scene graph.
//!
//! ## Overview
//!
//! This crate does not hit test and does not own a tree. It provides the
//! pieces a tree needs to deliver pointer events to registered handlers:
//!
//! - [`EventRegistry`](registry::EventRegistry): per-node handler lists keyed
//!   by [`EventKind`](types::EventKind) and [`Phase`](types::Phase), invoked
//!   in insertion order.
//! - [`collect_toggles`](router::collect_toggles): one walk from the target
//!   to the root that yields the bubble list (target → root) and the capture
//!   list (root → target) of nodes that actually listen.
//! - [`dispatcher::dispatch`]: walks those lists and honors
//!   [`Outcome::Stop`](types::Outcome::Stop) per list.
//! - [`ListenerCounts`](listeners::ListenerCounts): per-kind handler counts
//!   that let the host skip work nobody listens for.
//!
//! ## Phase policy
//!
//! With no explicit phase the bubble list runs first and the capture list
//! runs second. Each list stops on its own: stopping during bubble never
//! suppresses capture, and vice versa. With an explicit phase only that list
//! runs.
//!
//! ## Handlers and context
//!
//! Handlers have the shape `Fn(&mut C, &mut EventWithStop<'_, K>)`, where `C`
//! is whatever owns the registries (usually the scene graph) and `K` is the
//! node key. Because the registry lives inside `C`, callers clone the
//! handler list out with [`EventRegistry::handlers`](registry::EventRegistry::handlers)
//! before running it with [`trigger`](registry::trigger).

pub mod dispatcher;
/// Per-kind handler counts.
pub mod listeners;
pub mod registry;
pub mod router;
pub mod types;

pub use dispatcher::{DispatchReport, dispatch};
pub use listeners::ListenerCounts;
pub use registry::{EventRegistry, EventWithStop, Handler, HandlerId, handler, trigger};
pub use router::{Toggles, collect_toggles};
pub use types::{EventKind, EventTree, Key, KeyInput, Outcome, Phase, PointerInput};
