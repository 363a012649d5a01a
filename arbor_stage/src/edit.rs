// Copyright 2025 the Arbor Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use arbor_scene::NodeId;

use crate::timer::RepeatingTask;

/// An active text-edit session.
///
/// The session owns the caret blink task, so replacing or dropping the
/// session cancels the blink.
#[derive(Clone, Debug)]
pub struct EditSession {
    target: NodeId,
    pub(crate) blink: RepeatingTask,
}

impl EditSession {
    pub(crate) fn new(target: NodeId, blink_ms: u64, now_ms: u64) -> Self {
        Self {
            target,
            blink: RepeatingTask::new(blink_ms, now_ms),
        }
    }

    /// The text node being edited.
    pub fn target(&self) -> NodeId {
        self.target
    }

    /// The caret blink task.
    pub fn blink(&self) -> &RepeatingTask {
        &self.blink
    }
}
