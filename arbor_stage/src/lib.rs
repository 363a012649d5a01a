// Copyright 2025 the Arbor Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Arbor Stage: the host-facing event loop for an Arbor scene.
//!
//! ## Overview
//!
//! A [`Stage`] owns a [`SceneGraph`](arbor_scene::SceneGraph), a [`Canvas`]
//! to draw on and a [`TextInputCapture`] field for keyboard input. The host
//! feeds it raw input and time:
//!
//! - [`Stage::handle_pointer`] for pointer events in client coordinates.
//!   The stage subtracts the canvas offset, resolves the frontmost node and
//!   dispatches a capture pass and then a bubble pass. Moves also drive hover
//!   tracking (`PointerEnter`/`PointerLeave` and cursor changes).
//! - [`Stage::tick`] with the current time in milliseconds. Clicks are
//!   debounced ([`click`]) before they start, move or end a text-edit
//!   session, and the caret of the edited text blinks on a
//!   [`RepeatingTask`](timer::RepeatingTask).
//! - [`Stage::handle_key`] and [`Stage::handle_text_input`] while a text node
//!   is being edited.
//!
//! Each entry point that changes what is on screen redraws the whole scene
//! and returns a [`FrameRequest`]; `NextFrame` means an edit session is live
//! and the host should keep ticking.
//!
//! Clicking a node created with `active: true` shows corner handles from
//! [`overlay`], which follow the node whenever it is redrawn.

pub mod click;
pub mod overlay;
pub mod timer;

mod canvas;
mod config;
mod edit;
mod stage;

#[cfg(test)]
mod testing;

pub use canvas::{Canvas, TextInputCapture};
pub use config::StageConfig;
pub use edit::EditSession;
pub use overlay::SelectionOverlay;
pub use stage::{FrameRequest, Stage};
