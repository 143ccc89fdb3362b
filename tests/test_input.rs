use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use sky_dodge::events::GameEvent;
use sky_dodge::input::*;

fn key(code: KeyCode, kind: KeyEventKind) -> Event {
    Event::Key(KeyEvent::new_with_kind(code, KeyModifiers::NONE, kind))
}

// ── translate ─────────────────────────────────────────────────────────────────

#[test]
fn escape_is_cancel() {
    assert_eq!(translate(&key(KeyCode::Esc, KeyEventKind::Press)), InputAction::Event(GameEvent::Cancel));
    assert_eq!(translate(&key(KeyCode::Esc, KeyEventKind::Release)), InputAction::Ignore);
}

#[test]
fn ctrl_c_is_quit() {
    let ev = Event::Key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
    assert_eq!(translate(&ev), InputAction::Event(GameEvent::Quit));
    assert_eq!(translate(&key(KeyCode::Char('c'), KeyEventKind::Press)), InputAction::Ignore);
}

#[test]
fn arrows_press_repeat_release() {
    assert_eq!(translate(&key(KeyCode::Up, KeyEventKind::Press)), InputAction::Press(Direction::Up));
    assert_eq!(translate(&key(KeyCode::Left, KeyEventKind::Repeat)), InputAction::Press(Direction::Left));
    assert_eq!(translate(&key(KeyCode::Right, KeyEventKind::Release)), InputAction::Release(Direction::Right));
    assert_eq!(translate(&key(KeyCode::Down, KeyEventKind::Press)), InputAction::Press(Direction::Down));
}

#[test]
fn unrecognized_events_are_ignored() {
    assert_eq!(translate(&key(KeyCode::Char('w'), KeyEventKind::Press)), InputAction::Ignore);
    assert_eq!(translate(&Event::Resize(80, 24)), InputAction::Ignore);
    assert_eq!(translate(&Event::FocusLost), InputAction::Ignore);
}

// ── Directions ────────────────────────────────────────────────────────────────

#[test]
fn delta_sums_and_cancels() {
    assert_eq!(Directions::none().delta(5), (0, 0));
    assert_eq!(Directions::from_slice(&[Direction::Up]).delta(5), (0, -5));
    assert_eq!(Directions::from_slice(&[Direction::Down, Direction::Right]).delta(5), (5, 5));
    assert_eq!(Directions::from_slice(&[Direction::Left, Direction::Right]).delta(5), (0, 0));
    assert_eq!(Directions::from_slice(&[Direction::Up, Direction::Down, Direction::Left]).delta(5), (-5, 0));
}

#[test]
fn contains_reflects_with() {
    let d = Directions::none().with(Direction::Left);
    assert!(d.contains(Direction::Left));
    assert!(!d.contains(Direction::Right));
}

// ── KeyTracker ────────────────────────────────────────────────────────────────

#[test]
fn held_within_window_then_expires() {
    let mut keys = KeyTracker::new(14, false);
    keys.press(Direction::Up, 10);
    assert!(keys.held(10).up);
    assert!(keys.held(24).up);
    assert!(!keys.held(25).up);
}

#[test]
fn repeat_refreshes_hold() {
    let mut keys = KeyTracker::new(14, false);
    keys.press(Direction::Right, 0);
    keys.press(Direction::Right, 12);
    assert!(keys.held(20).right);
}

#[test]
fn release_drops_immediately() {
    let mut keys = KeyTracker::new(14, false);
    keys.press(Direction::Left, 5);
    keys.press(Direction::Down, 5);
    keys.release(Direction::Left);
    let held = keys.held(5);
    assert!(!held.left);
    assert!(held.down);
}

#[test]
fn nothing_pressed_is_empty() {
    assert_eq!(KeyTracker::new(14, false).held(100), Directions::none());
}

#[test]
fn release_reporting_holds_until_release() {
    let mut keys = KeyTracker::new(14, true);
    keys.press(Direction::Up, 0);
    assert!(keys.held(100).up);
    assert!(keys.held(10_000).up);
    keys.release(Direction::Up);
    assert!(!keys.held(100).up);
}
