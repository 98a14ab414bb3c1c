mod hands;

use common::{Channel, Controller, ControllerView, GestureLabel, HandFrame, ModeToken};
use glam::Vec2;

const STEP_MS: f32 = 100.0;

/// Feed the same frame for `ms` of simulated time and return the last view.
fn hold(controller: &mut Controller, frame: &HandFrame, ms: f32) -> ControllerView {
    let steps = (ms / STEP_MS) as usize;
    let mut view = controller.tick(Some(frame), STEP_MS);
    for _ in 1..steps {
        view = controller.tick(Some(frame), STEP_MS);
    }
    view
}

fn controller() -> Controller {
    Controller::new(640.0, false)
}

#[test]
fn confirmed_fist_queues_the_default_token() {
    let mut c = controller();
    let view = hold(&mut c, &hands::fist(), 1200.0);

    assert_eq!(view.confirmed, GestureLabel::Default);
    assert_eq!(c.pending_token(), Some(ModeToken::Default));
}

#[test]
fn building_the_line_consumes_the_token() {
    let mut c = controller();
    hold(&mut c, &hands::fist(), 1200.0);

    assert_eq!(c.build_command_line(), "2000,500,2000,Default\n");
    assert_eq!(c.pending_token(), None);
    assert_eq!(c.build_command_line(), "2000,500,2000\n");
}

#[test]
fn a_new_confirmation_overwrites_an_unsent_token() {
    let mut c = controller();
    hold(&mut c, &hands::fist(), 1200.0);
    hold(&mut c, &hands::three_finger(), 1200.0);

    assert_eq!(c.pending_token(), Some(ModeToken::Pcint1));
}

#[test]
fn palette_toggle_roundtrip() {
    let mut c = controller();

    let view = hold(&mut c, &hands::open_palm(), 1200.0);
    assert!(view.palette_active);
    // Palette mode never queues a token.
    assert_eq!(c.pending_token(), None);

    // Hand loss, then the same gesture held again toggles back off.
    c.tick(None, STEP_MS);
    let view = hold(&mut c, &hands::open_palm(), 1200.0);
    assert!(!view.palette_active);
}

#[test]
fn gestures_are_suppressed_while_palette_is_active() {
    let mut c = controller();
    hold(&mut c, &hands::open_palm(), 1200.0);
    c.tick(None, STEP_MS);

    let view = hold(&mut c, &hands::thumbs_up(), 1200.0);
    // Still tracked and confirmed, but no command comes out of it.
    assert_eq!(view.confirmed, GestureLabel::ThumbsUp);
    assert_eq!(c.pending_token(), None);

    // Leave palette mode; the same gesture now queues its token.
    c.tick(None, STEP_MS);
    hold(&mut c, &hands::open_palm(), 1200.0);
    c.tick(None, STEP_MS);
    hold(&mut c, &hands::thumbs_up(), 1200.0);
    assert_eq!(c.pending_token(), Some(ModeToken::Pcint2));
}

#[test]
fn pinch_calibrates_the_selected_channel() {
    let mut c = controller();
    hold(&mut c, &hands::open_palm(), 1200.0);
    c.tick(None, STEP_MS);

    // Pinch inside the yellow circle, separation 48 → 2060.
    let frame = hands::pinch_at(Vec2::new(320.0, 100.0), 48.0);
    let view = hold(&mut c, &frame, 900.0);

    assert!(view.palette_active);
    assert_eq!(c.channels().get(Channel::Yellow), 2060);
    // Red and green untouched.
    assert_eq!(c.channels().get(Channel::Red), 2000);
    assert_eq!(c.channels().get(Channel::Green), 2000);
}

#[test]
fn hand_loss_restarts_a_calibration_hold() {
    let mut c = controller();
    hold(&mut c, &hands::open_palm(), 1200.0);
    c.tick(None, STEP_MS);

    let frame = hands::pinch_at(Vec2::new(320.0, 100.0), 48.0);
    hold(&mut c, &frame, 500.0);
    c.tick(None, STEP_MS);
    hold(&mut c, &frame, 500.0);

    assert_eq!(c.channels().get(Channel::Yellow), 500);
}

#[test]
fn mirrored_frames_flip_the_selected_region() {
    let mut c = Controller::new(640.0, true);
    hold(&mut c, &hands::open_palm(), 1200.0);
    c.tick(None, STEP_MS);

    // A pinch over the red circle lands on green once x is mirrored.
    let frame = hands::pinch_at(Vec2::new(160.0, 100.0), 48.0);
    hold(&mut c, &frame, 900.0);

    assert_eq!(c.channels().get(Channel::Green), 2060);
    assert_eq!(c.channels().get(Channel::Red), 2000);
}

#[test]
fn external_channel_writes_clamp() {
    let mut c = controller();
    c.set_channel(Channel::Red, 7);
    c.set_channel(Channel::Green, 60000);

    assert_eq!(c.channels().get(Channel::Red), 100);
    assert_eq!(c.channels().get(Channel::Green), 5000);
}
