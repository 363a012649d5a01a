// Copyright 2025 the Arbor Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Shapes, hit testing and event routing on a headless stage.
//!
//! Builds a small scene (a card with a badge, a path arrow, an active box),
//! then replays pointer input and prints what the handlers saw.
//!
//! Run:
//! - `cargo run -p arbor_demos --example shapes`
//! - `ARBOR_LOG=arbor_scene=trace cargo run -p arbor_demos --example shapes`

use std::cell::RefCell;
use std::error::Error;
use std::rc::Rc;

use arbor_demos::{DrawOp, MemoryInput, RecordingCanvas, init_tracing};
use arbor_events::{EventKind, Phase, PointerInput};
use arbor_scene::{
    CircleOptions, CursorIcon, FixedAdvance, Node, RectangleOptions, ShapeOptions, parse_color,
};
use arbor_stage::{Stage, StageConfig};
use kurbo::Vec2;
use tracing::info;

fn main() -> Result<(), Box<dyn Error>> {
    init_tracing();

    let log: Rc<RefCell<Vec<String>>> = Rc::default();
    let mut stage = Stage::new(
        RecordingCanvas::new(Vec2::new(8.0, 8.0)),
        MemoryInput::default(),
        StageConfig::default(),
    );
    stage.graph_mut().set_text_measurer(FixedAdvance::default());
    stage.set_cursor(CursorIcon::Default);

    // A card with a badge. The badge bubbles clicks up to the card.
    let card = stage.add_shape(
        Node::rectangle(
            RectangleOptions {
                width: 200.0,
                height: 120.0,
            },
            ShapeOptions {
                x: 150.0,
                y: 100.0,
                fill_color: Some(parse_color("#f4f1de")?),
                stroke_color: Some(parse_color("#3d405b")?),
                line_width: Some(2.0),
                ..ShapeOptions::default()
            },
        ),
        None,
    );
    let badge_log = Rc::clone(&log);
    let badge = stage.add_shape(
        Node::circle(
            CircleOptions { radius: 16.0 },
            ShapeOptions {
                x: 80.0,
                y: -40.0,
                fill_color: Some(parse_color("tomato")?),
                cursor: Some(CursorIcon::Pointer),
                ..ShapeOptions::default()
            },
        )
        .on(EventKind::Click, Phase::Bubble, move |scene, ev| {
            badge_log
                .borrow_mut()
                .push(format!("badge {} clicked", ev.current_target()));
            scene.set_opacity(ev.target(), 0.5);
        }),
        Some(card),
    );
    for kind in [EventKind::PointerEnter, EventKind::PointerLeave] {
        let log = Rc::clone(&log);
        stage
            .graph_mut()
            .add_event_listener(badge, kind, Phase::Bubble, move |_, ev| {
                log.borrow_mut().push(format!("{kind} on {}", ev.target()));
            });
    }
    let card_log = Rc::clone(&log);
    stage
        .graph_mut()
        .add_event_listener(card, EventKind::Click, Phase::Capture, move |_, ev| {
            card_log
                .borrow_mut()
                .push(format!("card saw a click on {} first", ev.target()));
        });

    // An open path, hit only near its stroke.
    let mut arrow = Node::path(ShapeOptions {
        stroke_color: Some(parse_color("#81b29a")?),
        ..ShapeOptions::default()
    });
    arrow
        .move_to((20.0, 300.0), Some(4.0))?
        .line_to((220.0, 300.0), None)?
        .line_to((200.0, 285.0), None)?
        .move_to((220.0, 300.0), None)?
        .line_to((200.0, 315.0), None)?;
    let arrow = stage.add_shape(arrow, None);

    // An active box shows selection handles when clicked.
    let boxed = stage.add_shape(
        Node::rectangle(
            RectangleOptions {
                width: 60.0,
                height: 40.0,
            },
            ShapeOptions {
                x: 400.0,
                y: 300.0,
                rotation: 30.0_f64.to_radians(),
                stroke_color: Some(parse_color("#e07a5f")?),
                active: true,
                ..ShapeOptions::default()
            },
        ),
        None,
    );

    // Client coordinates include the canvas offset of (8, 8).
    let input = [
        PointerInput::new(EventKind::PointerMove, (238.0, 68.0), 0),
        PointerInput::new(EventKind::Click, (238.0, 68.0), 10),
        PointerInput::new(EventKind::PointerMove, (120.0, 308.0), 40),
        PointerInput::new(EventKind::Click, (120.0, 308.0), 50),
        PointerInput::new(EventKind::Click, (408.0, 308.0), 90),
    ];
    for event in input {
        stage.handle_pointer(event);
        stage.tick(event.timestamp_ms + stage.config().click_debounce_ms);
        info!(hovered = ?stage.hovered(), cursor = %stage.canvas().cursor, "after {}", event.kind);
    }

    for line in log.borrow().iter() {
        println!("{line}");
    }
    println!(
        "arrow hit at its shaft: {}",
        stage
            .graph_mut()
            .find_shape_from_point((120.0, 301.0).into())
            == Some(arrow)
    );
    println!(
        "badge opacity after click: {}",
        stage
            .graph()
            .get_shape(badge)
            .map(|n| n.absolute().fill_opacity())
            .unwrap_or_default()
    );
    println!(
        "handles around the active box: {}",
        stage.overlay().handles(boxed).len()
    );

    stage.render();
    let strokes = stage
        .canvas()
        .ops
        .iter()
        .filter(|op| matches!(op, DrawOp::StrokeRect(..) | DrawOp::StrokePath(..)))
        .count();
    println!(
        "{} draw calls, {strokes} of them strokes",
        stage.canvas().ops.len()
    );
    Ok(())
}
