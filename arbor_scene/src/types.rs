// Copyright 2025 the Arbor Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Public types for the scene: node identifiers, dirty flags and transforms.

use core::fmt;
use core::num::NonZeroU64;
use core::sync::atomic::{AtomicU64, Ordering};

use kurbo::Vec2;

/// Identifier for a node.
///
/// Ids come from a process-wide counter, so they are unique across scenes and
/// never reused.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, PartialOrd, Ord)]
pub struct NodeId(NonZeroU64);

impl NodeId {
    pub(crate) fn next() -> Self {
        static NEXT: AtomicU64 = AtomicU64::new(1);
        let raw = NEXT.fetch_add(1, Ordering::Relaxed);
        Self(NonZeroU64::new(raw).unwrap_or(NonZeroU64::MIN))
    }

    /// Raw counter value.
    pub const fn get(self) -> u64 {
        self.0.get()
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

bitflags::bitflags! {
    /// Pending work for a node.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct DirtyFlags: u8 {
        /// The cached bounding box is stale.
        const BOUNDS = 0b0000_0001;
        /// The node must be redrawn.
        const DRAW   = 0b0000_0010;
    }
}

/// Local placement and opacity of a node, relative to its parent.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LocalTransform {
    /// Offset from the parent's absolute position.
    pub position: Vec2,
    /// Rotation in radians, added to the parent's.
    pub rotation: f64,
    /// Per-axis scale, multiplied with the parent's.
    pub scale: Vec2,
    /// Fill opacity in `0..=1`.
    pub fill_opacity: f64,
    /// Stroke opacity in `0..=1`.
    pub stroke_opacity: f64,
}

impl Default for LocalTransform {
    fn default() -> Self {
        Self {
            position: Vec2::ZERO,
            rotation: 0.0,
            scale: Vec2::new(1.0, 1.0),
            fill_opacity: 1.0,
            stroke_opacity: 1.0,
        }
    }
}

impl LocalTransform {
    /// Compose with the parent's absolute transform.
    ///
    /// Positions and rotations add, scales and opacities multiply. Positions
    /// are not rotated or scaled by the parent.
    pub fn compose(&self, parent: Option<&AbsoluteTransform>) -> AbsoluteTransform {
        let Some(p) = parent else {
            return AbsoluteTransform(*self);
        };
        AbsoluteTransform(Self {
            position: p.0.position + self.position,
            rotation: p.0.rotation + self.rotation,
            scale: Vec2::new(p.0.scale.x * self.scale.x, p.0.scale.y * self.scale.y),
            fill_opacity: p.0.fill_opacity * self.fill_opacity,
            stroke_opacity: p.0.stroke_opacity * self.stroke_opacity,
        })
    }
}

/// Effective scene-space placement and opacity of a node.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct AbsoluteTransform(LocalTransform);

impl AbsoluteTransform {
    /// Scene-space position.
    pub fn position(&self) -> Vec2 {
        self.0.position
    }

    /// Accumulated rotation in radians.
    pub fn rotation(&self) -> f64 {
        self.0.rotation
    }

    /// Accumulated scale.
    pub fn scale(&self) -> Vec2 {
        self.0.scale
    }

    /// Effective fill opacity.
    pub fn fill_opacity(&self) -> f64 {
        self.0.fill_opacity
    }

    /// Effective stroke opacity.
    pub fn stroke_opacity(&self) -> f64 {
        self.0.stroke_opacity
    }
}
