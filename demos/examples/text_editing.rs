// Copyright 2025 the Arbor Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Editing a text node through a stage.
//!
//! Clicks start an edit session after the debounce window; typing goes
//! through the hidden text field; arrow keys move the caret on the node.
//!
//! Run:
//! - `cargo run -p arbor_demos --example text_editing`

use std::error::Error;

use arbor_demos::{MemoryInput, RecordingCanvas, init_tracing};
use arbor_events::{EventKind, Key, KeyInput, PointerInput};
use arbor_scene::{FixedAdvance, Node, ShapeOptions, TextAlign, TextOptions, parse_color};
use arbor_stage::{FrameRequest, Stage, StageConfig};
use kurbo::Vec2;

fn key(key: Key) -> KeyInput {
    KeyInput {
        key,
        timestamp_ms: 0,
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    init_tracing();

    let mut stage = Stage::new(
        RecordingCanvas::new(Vec2::ZERO),
        MemoryInput::default(),
        StageConfig::default(),
    );
    stage.graph_mut().set_text_measurer(FixedAdvance::default());

    let title = stage.add_shape(
        Node::text(
            TextOptions {
                text_align: TextAlign::Center,
                font_size: 20.0,
                ..TextOptions::new("Hello scene")
            },
            ShapeOptions {
                x: 200.0,
                y: 40.0,
                fill_color: Some(parse_color("rebeccapurple")?),
                ..ShapeOptions::default()
            },
        ),
        None,
    );

    // The text is centred on x = 200 and 110 wide: click right after "Hello".
    stage.handle_pointer(PointerInput::new(EventKind::Click, (196.0, 40.0), 0));
    let mut now = stage.config().click_debounce_ms;
    assert_eq!(stage.tick(now), FrameRequest::NextFrame);
    let node = stage.graph().get_shape(title).ok_or("title vanished")?;
    println!("editing at {}", node.cursor_position()?);

    // The user types a comma: the field updates first, then reports it.
    {
        let field = stage.text_input_mut();
        field.value.insert(5, ',');
        field.caret = 6;
    }
    stage.handle_text_input(Some(","));

    // Backspace is handled by the field; the stage only sees the content shrink.
    {
        let field = stage.text_input_mut();
        field.value.remove(5);
        field.caret = 5;
    }
    stage.handle_text_input(None);

    // Step over the space and type a word.
    stage.handle_key(&key(Key::ArrowRight));
    {
        let field = stage.text_input_mut();
        field.value.insert_str(6, "big ");
        field.caret = 10;
    }
    stage.handle_text_input(Some("big "));

    // Let the caret blink a few times.
    for _ in 0..3 {
        now += stage.config().caret_blink_ms;
        stage.tick(now);
        let caret_drawn = stage
            .canvas()
            .ops
            .iter()
            .any(|op| matches!(op, arbor_demos::DrawOp::Line(..)));
        println!("t={now}ms caret visible: {caret_drawn}");
    }

    // Clicking empty space ends the session.
    stage.handle_pointer(PointerInput::new(EventKind::Click, (5.0, 300.0), now));
    now += stage.config().click_debounce_ms;
    assert_eq!(stage.tick(now), FrameRequest::Idle);

    let node = stage.graph().get_shape(title).ok_or("title vanished")?;
    println!("final text: {:?}", node.text_content()?);
    println!(
        "drawn: {:?}",
        stage.canvas().texts().collect::<Vec<_>>()
    );
    Ok(())
}
