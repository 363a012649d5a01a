// Copyright 2025 the Arbor Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use strum::{Display, EnumIter, EnumString, IntoStaticStr};

/// Pointer cursor hint, named after the CSS `cursor` keywords.
///
/// `Display` and `FromStr` use the CSS spelling (`"nwse-resize"`).
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Display, EnumIter, EnumString, IntoStaticStr,
)]
#[strum(serialize_all = "kebab-case")]
pub enum CursorIcon {
    /// Whatever the host picks for the context.
    #[default]
    Auto,
    /// The platform default arrow.
    Default,
    /// No cursor.
    None,
    /// A context menu is available.
    ContextMenu,
    /// Help is available.
    Help,
    /// A link or clickable item.
    Pointer,
    /// Busy, but still interactive.
    Progress,
    /// Busy.
    Wait,
    /// A table cell.
    Cell,
    /// Precise selection.
    Crosshair,
    /// Selectable text.
    Text,
    /// Selectable vertical text.
    VerticalText,
    /// An alias or shortcut will be created.
    Alias,
    /// Something will be copied.
    Copy,
    /// Something will be moved.
    Move,
    /// Dropping is not allowed here.
    NoDrop,
    /// The action is not allowed.
    NotAllowed,
    /// Something can be grabbed.
    Grab,
    /// Something is being grabbed.
    Grabbing,
    /// Scrolling in any direction.
    AllScroll,
    /// A column can be resized.
    ColResize,
    /// A row can be resized.
    RowResize,
    /// North edge resize.
    NResize,
    /// East edge resize.
    EResize,
    /// South edge resize.
    SResize,
    /// West edge resize.
    WResize,
    /// North-east corner resize.
    NeResize,
    /// North-west corner resize.
    NwResize,
    /// South-east corner resize.
    SeResize,
    /// South-west corner resize.
    SwResize,
    /// Horizontal resize.
    EwResize,
    /// Vertical resize.
    NsResize,
    /// Diagonal resize, north-east to south-west.
    NeswResize,
    /// Diagonal resize, north-west to south-east.
    NwseResize,
    /// Zoom in.
    ZoomIn,
    /// Zoom out.
    ZoomOut,
}

impl CursorIcon {
    /// CSS keyword.
    pub fn name(self) -> &'static str {
        self.into()
    }
}
