// Copyright 2025 the Arbor Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The stage: host input in, scene events and frames out.

use arbor_events::{EventKind, Key, KeyInput, Phase, PointerInput};
use arbor_scene::{CursorIcon, Node, NodeId, SceneGraph};
use tracing::{debug, trace, warn};

use crate::canvas::{Canvas, TextInputCapture};
use crate::click::{ClickDebouncer, PendingClick};
use crate::config::StageConfig;
use crate::edit::EditSession;
use crate::overlay::SelectionOverlay;

/// What the host should do about the next animation frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FrameRequest {
    /// Nothing to animate.
    Idle,
    /// Call [`Stage::render`] again on the next frame.
    NextFrame,
}

/// Owns a scene and drives it from host input.
///
/// Per pointer event the stage runs a capture pass and then a bubble pass.
/// Each pass resolves the target again from the client position minus the
/// canvas offset. The capture pass also tracks hover (enter, leave and
/// cursor changes), queues debounced clicks for text editing, and shows
/// selection handles on active nodes.
///
/// Time comes from the host: pass millisecond timestamps to
/// [`Stage::tick`] so debounced clicks and the caret blink can fire.
#[derive(Debug)]
pub struct Stage<C, T> {
    graph: SceneGraph,
    canvas: C,
    input: T,
    config: StageConfig,
    hovered: Option<NodeId>,
    last_cursor: CursorIcon,
    clicks: ClickDebouncer<NodeId>,
    overlay: SelectionOverlay,
    edit: Option<EditSession>,
}

impl<C: Canvas, T: TextInputCapture> Stage<C, T> {
    /// Create a stage with an empty scene.
    ///
    /// Install a text measurer on [`Stage::graph_mut`] before adding text.
    pub fn new(canvas: C, input: T, config: StageConfig) -> Self {
        Self::with_graph(SceneGraph::new(), canvas, input, config)
    }

    /// Create a stage around an existing scene.
    pub fn with_graph(graph: SceneGraph, canvas: C, input: T, config: StageConfig) -> Self {
        let last_cursor = canvas.cursor();
        let clicks = ClickDebouncer::with_window(config.click_debounce_ms);
        Self {
            graph,
            canvas,
            input,
            config,
            hovered: None,
            last_cursor,
            clicks,
            overlay: SelectionOverlay::new(),
            edit: None,
        }
    }

    /// The scene.
    pub fn graph(&self) -> &SceneGraph {
        &self.graph
    }

    /// The scene, mutably.
    pub fn graph_mut(&mut self) -> &mut SceneGraph {
        &mut self.graph
    }

    /// The canvas.
    pub fn canvas(&self) -> &C {
        &self.canvas
    }

    /// The canvas, mutably.
    pub fn canvas_mut(&mut self) -> &mut C {
        &mut self.canvas
    }

    /// The hidden text field.
    pub fn text_input(&self) -> &T {
        &self.input
    }

    /// The hidden text field, mutably.
    pub fn text_input_mut(&mut self) -> &mut T {
        &mut self.input
    }

    /// Tunables.
    pub fn config(&self) -> &StageConfig {
        &self.config
    }

    /// Node under the pointer after the last move.
    pub fn hovered(&self) -> Option<NodeId> {
        self.hovered
    }

    /// Cursor restored when the pointer leaves a node.
    pub fn last_cursor(&self) -> CursorIcon {
        self.last_cursor
    }

    /// Text node being edited.
    pub fn editing_target(&self) -> Option<NodeId> {
        self.edit.as_ref().map(EditSession::target)
    }

    /// The active edit session.
    pub fn edit_session(&self) -> Option<&EditSession> {
        self.edit.as_ref()
    }

    /// Selection handles.
    pub fn overlay(&self) -> &SelectionOverlay {
        &self.overlay
    }

    /// Click waiting for its debounce window.
    pub fn pending_click(&self) -> Option<&PendingClick<NodeId>> {
        self.clicks.pending()
    }

    /// Set the canvas cursor and remember it as the one to restore.
    pub fn set_cursor(&mut self, cursor: CursorIcon) {
        self.last_cursor = cursor;
        self.canvas.set_cursor(cursor);
    }

    /// Add a node and draw its subtree.
    pub fn add_shape(&mut self, node: Node, parent: Option<NodeId>) -> NodeId {
        let id = self.graph.add_shape(node, parent);
        self.graph.draw_subtree(id, &mut self.canvas);
        id
    }

    /// Remove a node and redraw.
    pub fn remove_shape(&mut self, id: NodeId, shallow: bool) -> bool {
        if !self.graph.remove_shape(id, shallow) {
            return false;
        }
        if let Some(target) = self.editing_target()
            && !self.graph.contains(target)
        {
            self.edit = None;
            self.input.blur();
        }
        if self.hovered.is_some_and(|h| !self.graph.contains(h)) {
            self.hovered = None;
        }
        self.render();
        true
    }

    // --- pointer ---

    /// Handle one host pointer event: capture pass, then bubble pass.
    pub fn handle_pointer(&mut self, input: PointerInput) {
        self.handle_pointer_phase(input, Phase::Capture);
        self.handle_pointer_phase(input, Phase::Bubble);
    }

    /// Handle one pass of a host pointer event.
    pub fn handle_pointer_phase(&mut self, input: PointerInput, phase: Phase) {
        let input = input.at(input.client - self.canvas.offset());
        let hit = self
            .graph
            .find_shape_from_point_with_tolerance(input.position, self.config.pointer_tolerance);

        if phase == Phase::Capture {
            match input.kind {
                EventKind::PointerMove => self.update_hover(hit, &input),
                EventKind::Click => {
                    if self.clicks.schedule(input, hit) {
                        trace!("coalesced click");
                    }
                }
                _ => {}
            }
        }

        let Some(target) = hit else {
            return;
        };
        if input.kind == EventKind::PointerMove
            && !self.graph.listener_counts().has_listeners(EventKind::PointerMove)
        {
            return;
        }
        if phase == Phase::Capture
            && input.kind == EventKind::Click
            && self.graph.get_shape(target).is_some_and(Node::is_active)
            && !self.overlay.is_tracked(target)
        {
            self.overlay.select(&mut self.graph, target, &self.config);
            self.render();
        }
        self.graph
            .dispatch_event(target, input.kind, &input, Some(phase));
    }

    fn update_hover(&mut self, hit: Option<NodeId>, input: &PointerInput) {
        if hit == self.hovered {
            return;
        }
        if let Some(old) = self.hovered.take() {
            self.canvas.set_cursor(self.last_cursor);
            let leave = PointerInput {
                kind: EventKind::PointerLeave,
                ..*input
            };
            self.graph
                .dispatch_event(old, EventKind::PointerLeave, &leave, None);
        }
        if let Some(new) = hit {
            if let Some(cursor) = self.graph.get_shape(new).and_then(Node::cursor) {
                self.canvas.set_cursor(cursor);
            }
            let enter = PointerInput {
                kind: EventKind::PointerEnter,
                ..*input
            };
            self.graph
                .dispatch_event(new, EventKind::PointerEnter, &enter, None);
        }
        trace!(hovered = ?hit, "hover");
        self.hovered = hit;
    }

    // --- time ---

    /// Advance host time: release a debounced click and blink the caret.
    pub fn tick(&mut self, now_ms: u64) -> FrameRequest {
        let mut changed = false;
        if let Some(click) = self.clicks.poll(now_ms) {
            self.on_click(&click, now_ms);
            changed = true;
        }
        if let Some(session) = self.edit.as_mut()
            && session.blink.poll(now_ms)
        {
            let target = session.target();
            if let Some(node) = self.graph.get_shape_mut(target)
                && node.toggle_caret().is_ok()
            {
                changed = true;
            }
        }
        if changed {
            self.render()
        } else {
            self.frame_request()
        }
    }

    fn on_click(&mut self, click: &PendingClick<NodeId>, now_ms: u64) {
        let target = click
            .target
            .filter(|&t| self.graph.get_shape(t).is_some_and(|n| n.text_content().is_ok()));
        let Some(target) = target else {
            self.stop_editing();
            self.input.blur();
            self.input.set_value("");
            return;
        };

        if self.editing_target() != Some(target) {
            self.stop_editing();
            let text = self
                .graph
                .get_shape(target)
                .and_then(|n| n.text_content().ok())
                .unwrap_or_default()
                .to_owned();
            self.input.set_value(&text);
            self.input.focus();
            if let Some(node) = self.graph.get_shape_mut(target)
                && let Err(err) = node.start_editing()
            {
                warn!(%err, "cannot edit");
                return;
            }
            self.edit = Some(EditSession::new(
                target,
                self.config.caret_blink_ms,
                now_ms,
            ));
            debug!(node = %target, "start editing");
        }

        self.input.focus();
        let caret = match self.graph.text_index_from_point(target, click.input.position) {
            Ok(caret) => caret,
            Err(err) => {
                warn!(%err, "caret placement fell back to the end");
                usize::MAX
            }
        };
        if let Some(node) = self.graph.get_shape_mut(target) {
            let caret = node
                .set_cursor_position(caret)
                .and_then(|()| node.cursor_position())
                .unwrap_or_default();
            self.input.set_selection(caret, caret);
        }
    }

    /// End the edit session, if any, and cancel its caret blink.
    pub fn stop_editing(&mut self) {
        let Some(session) = self.edit.take() else {
            return;
        };
        if let Some(node) = self.graph.get_shape_mut(session.target())
            && let Err(err) = node.stop_editing()
        {
            warn!(%err, node = %session.target(), "cannot stop editing");
        }
        debug!(node = %session.target(), "stop editing");
    }

    // --- keyboard and text input ---

    /// Handle a key press while editing.
    ///
    /// `Delete` removes the char after the caret; the horizontal arrows move
    /// the caret. Other keys are left to the text field.
    pub fn handle_key(&mut self, key: &KeyInput) -> FrameRequest {
        enum Edit {
            DeleteForward,
            MoveTo(usize),
        }
        let Some(target) = self.editing_target() else {
            return self.frame_request();
        };
        let Some(node) = self.graph.get_shape(target) else {
            return self.frame_request();
        };
        let (Ok(caret), Ok(text)) = (node.cursor_position(), node.text_content()) else {
            return self.frame_request();
        };
        let len = text.chars().count();
        let edit = match key.key {
            Key::Delete if caret < len => Edit::DeleteForward,
            Key::ArrowLeft if caret > 0 => Edit::MoveTo(caret - 1),
            Key::ArrowRight if caret < len => Edit::MoveTo(caret + 1),
            _ => return self.frame_request(),
        };

        let Some(node) = self.graph.get_shape_mut(target) else {
            return self.frame_request();
        };
        let applied = match edit {
            Edit::DeleteForward => node.delete_text(1),
            Edit::MoveTo(pos) => node.set_cursor_position(pos),
        };
        if let Err(err) = applied {
            warn!(%err, "key ignored");
        }
        if let (Ok(text), Ok(caret)) = (node.text_content(), node.cursor_position()) {
            self.input.set_value(text);
            self.input.set_selection(caret, caret);
        }
        self.render()
    }

    /// Handle an input event from the text field.
    ///
    /// `Some(data)` inserts the typed text at the caret. `None` means the
    /// field lost content; the same number of chars is deleted before the
    /// caret. The caret then follows the field's selection start.
    pub fn handle_text_input(&mut self, data: Option<&str>) -> FrameRequest {
        let Some(target) = self.editing_target() else {
            return self.frame_request();
        };
        let field_len = self.input.value().chars().count();
        let field_caret = self.input.selection_start();
        let Some(node) = self.graph.get_shape_mut(target) else {
            return self.frame_request();
        };
        let applied = match data {
            Some(data) => node.insert_text(data),
            None => {
                let len = node.text_content().map_or(0, |t| t.chars().count());
                let removed = isize::try_from(len.saturating_sub(field_len)).unwrap_or(isize::MAX);
                node.delete_text(-removed)
            }
        }
        .and_then(|()| node.set_cursor_position(field_caret));
        if let Err(err) = applied {
            warn!(%err, "text input ignored");
        }
        self.render()
    }

    // --- frames ---

    /// Clear the canvas, refresh selection handles and draw the scene.
    pub fn render(&mut self) -> FrameRequest {
        self.canvas.clear();
        self.overlay.refresh(&mut self.graph, &self.config);
        self.graph.draw(&mut self.canvas);
        self.frame_request()
    }

    fn frame_request(&self) -> FrameRequest {
        if self.edit.is_some() {
            FrameRequest::NextFrame
        } else {
            FrameRequest::Idle
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{TestCanvas, TestInput};
    use arbor_scene::{FixedAdvance, RectangleOptions, ShapeOptions, TextOptions};
    use kurbo::{Point, Vec2};
    use std::cell::RefCell;
    use std::rc::Rc;

    type TestStage = Stage<TestCanvas, TestInput>;

    fn stage() -> TestStage {
        let mut stage = Stage::new(
            TestCanvas::default(),
            TestInput::default(),
            StageConfig::default(),
        );
        stage.graph_mut().set_text_measurer(FixedAdvance::default());
        stage
    }

    fn rect(x: f64, y: f64, opts: ShapeOptions) -> Node {
        Node::rectangle(
            RectangleOptions {
                width: 20.0,
                height: 20.0,
            },
            ShapeOptions { x, y, ..opts },
        )
    }

    fn pointer(kind: EventKind, x: f64, y: f64, ts: u64) -> PointerInput {
        PointerInput::new(kind, Point::new(x, y), ts)
    }

    fn text_node(stage: &mut TestStage, text: &str, x: f64, y: f64) -> NodeId {
        stage.add_shape(
            Node::text(
                TextOptions::new(text),
                ShapeOptions {
                    x,
                    y,
                    fill_color: Some(arbor_scene::parse_color("black").unwrap()),
                    ..ShapeOptions::default()
                },
            ),
            None,
        )
    }

    fn click(stage: &mut TestStage, x: f64, y: f64, ts: u64) -> FrameRequest {
        stage.handle_pointer(pointer(EventKind::Click, x, y, ts));
        stage.tick(ts + stage.config().click_debounce_ms)
    }

    #[test]
    fn hover_applies_and_restores_cursors() {
        let mut s = stage();
        let log: Rc<RefCell<Vec<EventKind>>> = Rc::default();
        let id = s.add_shape(
            rect(
                50.0,
                50.0,
                ShapeOptions {
                    cursor: Some(CursorIcon::Pointer),
                    ..ShapeOptions::default()
                },
            ),
            None,
        );
        for kind in [EventKind::PointerEnter, EventKind::PointerLeave] {
            let log = Rc::clone(&log);
            s.graph_mut()
                .add_event_listener(id, kind, Phase::Bubble, move |_, ev| {
                    log.borrow_mut().push(ev.input().kind);
                });
        }
        s.set_cursor(CursorIcon::Crosshair);

        s.handle_pointer(pointer(EventKind::PointerMove, 50.0, 50.0, 0));
        assert_eq!(s.hovered(), Some(id));
        assert_eq!(s.canvas().cursor, CursorIcon::Pointer);

        s.handle_pointer(pointer(EventKind::PointerMove, 52.0, 52.0, 1));
        s.handle_pointer(pointer(EventKind::PointerMove, 500.0, 500.0, 2));
        assert_eq!(s.hovered(), None);
        assert_eq!(s.canvas().cursor, CursorIcon::Crosshair);
        assert_eq!(
            *log.borrow(),
            vec![EventKind::PointerEnter, EventKind::PointerLeave]
        );
    }

    #[test]
    fn canvas_offset_is_applied_before_hit_testing() {
        let mut s = stage();
        s.canvas_mut().offset = Vec2::new(100.0, 100.0);
        let id = s.add_shape(rect(0.0, 0.0, ShapeOptions::default()), None);
        s.handle_pointer(pointer(EventKind::PointerMove, 105.0, 95.0, 0));
        assert_eq!(s.hovered(), Some(id));
        s.handle_pointer(pointer(EventKind::PointerMove, 5.0, 5.0, 1));
        assert_eq!(s.hovered(), None);
    }

    #[test]
    fn pointer_move_reaches_handlers_in_both_passes() {
        let mut s = stage();
        let id = s.add_shape(rect(0.0, 0.0, ShapeOptions::default()), None);
        let seen: Rc<RefCell<Vec<Phase>>> = Rc::default();
        for phase in [Phase::Capture, Phase::Bubble] {
            let seen = Rc::clone(&seen);
            s.graph_mut()
                .add_event_listener(id, EventKind::PointerMove, phase, move |_, _| {
                    seen.borrow_mut().push(phase);
                });
        }
        assert!(s.graph().listener_counts().has_listeners(EventKind::PointerMove));
        s.handle_pointer(pointer(EventKind::PointerMove, 1.0, 1.0, 0));
        assert_eq!(*seen.borrow(), vec![Phase::Capture, Phase::Bubble]);
    }

    #[test]
    fn clicks_dispatch_immediately_and_debounce_for_editing() {
        let mut s = stage();
        let t = text_node(&mut s, "hello", 100.0, 100.0);
        let clicks = Rc::new(RefCell::new(0));
        let c = Rc::clone(&clicks);
        s.graph_mut()
            .add_event_listener(t, EventKind::Click, Phase::Bubble, move |_, _| {
                *c.borrow_mut() += 1;
            });

        s.handle_pointer(pointer(EventKind::Click, 101.0, 100.0, 1000));
        s.handle_pointer(pointer(EventKind::Click, 117.0, 100.0, 1008));
        assert_eq!(*clicks.borrow(), 2);
        assert_eq!(s.pending_click().unwrap().input.timestamp_ms, 1008);

        assert_eq!(s.tick(1020), FrameRequest::Idle);
        assert_eq!(s.editing_target(), None);
        assert_eq!(s.tick(1024), FrameRequest::NextFrame);
        assert_eq!(s.editing_target(), Some(t));
        // x = 17 relative to the text start falls between 'e' and 'l'.
        assert_eq!(s.graph().get_shape(t).unwrap().cursor_position(), Ok(2));
        assert_eq!(s.text_input().selection, (2, 2));
        assert!(s.pending_click().is_none());
    }

    #[test]
    fn edit_session_lifecycle() {
        let mut s = stage();
        let t = text_node(&mut s, "hello", 100.0, 100.0);
        assert_eq!(click(&mut s, 117.0, 100.0, 0), FrameRequest::NextFrame);
        assert!(s.text_input().focused);
        assert_eq!(s.text_input().value, "hello");
        assert!(s.graph().get_shape(t).unwrap().is_editing());
        assert_eq!(s.canvas().carets, 1);

        let blink_at = s.edit_session().unwrap().blink().next_due_ms();
        s.tick(blink_at);
        assert_eq!(s.canvas().carets, 0, "caret hidden on first blink");
        s.tick(blink_at + s.config().caret_blink_ms);
        assert_eq!(s.canvas().carets, 1);

        assert_eq!(click(&mut s, 400.0, 400.0, 5000), FrameRequest::Idle);
        assert_eq!(s.editing_target(), None);
        assert!(!s.text_input().focused);
        assert_eq!(s.text_input().value, "");
        assert!(!s.graph().get_shape(t).unwrap().is_editing());
        assert_eq!(s.canvas().carets, 0);
    }

    #[test]
    fn stop_editing_ends_the_node_session_once() {
        let mut s = stage();
        let t = text_node(&mut s, "hello", 100.0, 100.0);
        click(&mut s, 117.0, 100.0, 0);
        assert!(s.graph().get_shape(t).unwrap().is_editing());

        s.stop_editing();
        assert!(s.edit_session().is_none());
        assert!(!s.graph().get_shape(t).unwrap().is_editing());
        s.stop_editing();
        assert!(s.edit_session().is_none());
        assert_eq!(s.render(), FrameRequest::Idle);
    }

    #[test]
    fn switching_targets_replaces_the_session() {
        let mut s = stage();
        let a = text_node(&mut s, "first", 100.0, 100.0);
        let b = text_node(&mut s, "second", 100.0, 200.0);
        click(&mut s, 101.0, 100.0, 0);
        assert_eq!(s.editing_target(), Some(a));
        click(&mut s, 101.0, 200.0, 100);
        assert_eq!(s.editing_target(), Some(b));
        assert!(!s.graph().get_shape(a).unwrap().is_editing());
        assert_eq!(s.text_input().value, "second");
        assert_eq!(s.edit_session().unwrap().blink().next_due_ms(), 116 + 500);
    }

    #[test]
    fn keys_edit_and_move_the_caret() {
        let mut s = stage();
        let t = text_node(&mut s, "abc", 0.0, 0.0);
        click(&mut s, 9.0, 0.0, 0);
        let caret = |s: &TestStage| s.graph().get_shape(t).unwrap().cursor_position().unwrap();
        assert_eq!(caret(&s), 1);

        let key = |k| KeyInput {
            key: k,
            timestamp_ms: 0,
        };
        s.handle_key(&key(Key::ArrowLeft));
        s.handle_key(&key(Key::ArrowLeft));
        assert_eq!(caret(&s), 0);
        s.handle_key(&key(Key::Delete));
        assert_eq!(s.graph().get_shape(t).unwrap().text_content(), Ok("bc"));
        s.handle_key(&key(Key::ArrowRight));
        s.handle_key(&key(Key::ArrowRight));
        s.handle_key(&key(Key::ArrowRight));
        assert_eq!(caret(&s), 2);
        s.handle_key(&key(Key::Delete));
        s.handle_key(&key(Key::Named("Tab".into())));
        assert_eq!(s.graph().get_shape(t).unwrap().text_content(), Ok("bc"));
        assert_eq!(s.text_input().value, "bc");
        assert_eq!(s.text_input().selection, (2, 2));
    }

    #[test]
    fn text_input_inserts_and_deletes() {
        let mut s = stage();
        let t = text_node(&mut s, "ab", 0.0, 0.0);
        click(&mut s, 15.0, 0.0, 0);
        assert_eq!(s.graph().get_shape(t).unwrap().cursor_position(), Ok(2));

        // The field already holds the typed char and its caret moved past it.
        s.input.value = "abX".into();
        s.input.selection = (3, 3);
        s.handle_text_input(Some("X"));
        let node = s.graph().get_shape(t).unwrap();
        assert_eq!(node.text_content(), Ok("abX"));
        assert_eq!(node.cursor_position(), Ok(3));

        s.input.value = "a".into();
        s.input.selection = (1, 1);
        s.handle_text_input(None);
        let node = s.graph().get_shape(t).unwrap();
        assert_eq!(node.text_content(), Ok("a"));
        assert_eq!(node.cursor_position(), Ok(1));
        assert_eq!(s.canvas().texts, vec!["a".to_owned()]);
    }

    #[test]
    fn text_input_without_session_is_ignored() {
        let mut s = stage();
        let t = text_node(&mut s, "ab", 0.0, 0.0);
        assert_eq!(s.handle_text_input(Some("x")), FrameRequest::Idle);
        assert_eq!(
            s.handle_key(&KeyInput {
                key: Key::Delete,
                timestamp_ms: 0
            }),
            FrameRequest::Idle
        );
        assert_eq!(s.graph().get_shape(t).unwrap().text_content(), Ok("ab"));
    }

    #[test]
    fn active_nodes_get_handles_that_follow_them() {
        let mut s = stage();
        let a = s.add_shape(
            rect(
                100.0,
                100.0,
                ShapeOptions {
                    active: true,
                    ..ShapeOptions::default()
                },
            ),
            None,
        );
        let b = s.add_shape(
            rect(
                300.0,
                100.0,
                ShapeOptions {
                    active: true,
                    ..ShapeOptions::default()
                },
            ),
            None,
        );
        s.handle_pointer(pointer(EventKind::Click, 100.0, 100.0, 0));
        assert!(s.overlay().is_tracked(a));
        assert_eq!(s.overlay().handles(a).len(), 4);
        assert_eq!(s.graph().len(), 6);

        s.handle_pointer(pointer(EventKind::Click, 100.0, 100.0, 50));
        assert_eq!(s.graph().len(), 6);

        s.graph_mut().set_position(a, Vec2::new(0.0, 0.0));
        s.render();
        assert_eq!(s.canvas().rects, 6, "two boxes and four handles");
        let first = s.overlay().handles(a)[0];
        assert_eq!(
            s.graph().get_shape(first).unwrap().absolute().position(),
            Vec2::new(-10.0, -10.0)
        );

        s.handle_pointer(pointer(EventKind::Click, 300.0, 100.0, 100));
        assert!(!s.overlay().is_tracked(a));
        assert!(s.overlay().is_tracked(b));
        assert_eq!(s.graph().len(), 6);
    }

    #[test]
    fn removing_the_edited_node_ends_the_session() {
        let mut s = stage();
        let t = text_node(&mut s, "bye", 0.0, 0.0);
        click(&mut s, 1.0, 0.0, 0);
        assert_eq!(s.editing_target(), Some(t));
        let clears = s.canvas().clears;
        assert!(s.remove_shape(t, true));
        assert_eq!(s.canvas().clears, clears + 1);
        assert_eq!(s.editing_target(), None);
        assert_eq!(s.render(), FrameRequest::Idle);
        assert!(!s.remove_shape(t, true));
    }
}
