// Copyright 2025 the Arbor Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use thiserror::Error;

use crate::types::NodeId;

/// Errors surfaced by scene construction and node operations.
///
/// Structural misses (unknown ids on removal or lookup) are not errors; those
/// calls return `None` or `false` instead.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SceneError {
    /// A color string could not be parsed.
    #[error("unsupported color `{token}`: {reason}")]
    InvalidColor {
        /// The offending input.
        token: String,
        /// Parser message.
        reason: String,
    },
    /// A text operation was applied to a node of another kind.
    #[error("node {0} is not a text node")]
    NotAText(NodeId),
    /// A path operation was applied to a node of another kind.
    #[error("node {0} is not a path node")]
    NotAPath(NodeId),
    /// Text layout was needed but no measurer is installed.
    #[error("no text measurer installed")]
    NoTextMeasurer,
    /// The node is not part of the scene.
    #[error("node {0} is not in the scene")]
    NodeNotFound(NodeId),
}
