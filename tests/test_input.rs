use std::sync::Arc;
use std::thread;

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use maze_chase::entities::Direction;
use maze_chase::input::*;

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

// ── command_for ───────────────────────────────────────────────────────────────

#[test]
fn arrows_and_wasd_turn() {
    assert_eq!(command_for(&key(KeyCode::Up)), Command::Turn(Direction::Up));
    assert_eq!(command_for(&key(KeyCode::Down)), Command::Turn(Direction::Down));
    assert_eq!(command_for(&key(KeyCode::Left)), Command::Turn(Direction::Left));
    assert_eq!(command_for(&key(KeyCode::Right)), Command::Turn(Direction::Right));
    assert_eq!(command_for(&key(KeyCode::Char('w'))), Command::Turn(Direction::Up));
    assert_eq!(command_for(&key(KeyCode::Char('S'))), Command::Turn(Direction::Down));
    assert_eq!(command_for(&key(KeyCode::Char('a'))), Command::Turn(Direction::Left));
    assert_eq!(command_for(&key(KeyCode::Char('D'))), Command::Turn(Direction::Right));
}

#[test]
fn quit_keys() {
    assert_eq!(command_for(&key(KeyCode::Char('q'))), Command::Quit);
    assert_eq!(command_for(&key(KeyCode::Esc)), Command::Quit);
    let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
    assert_eq!(command_for(&ctrl_c), Command::Quit);
    assert_eq!(command_for(&key(KeyCode::Char('c'))), Command::Other);
}

#[test]
fn anything_else_is_other() {
    assert_eq!(command_for(&key(KeyCode::Enter)), Command::Other);
    assert_eq!(command_for(&key(KeyCode::Char(' '))), Command::Other);
}

// ── triggers_restart ──────────────────────────────────────────────────────────

#[test]
fn restart_on_release_when_reported() {
    assert!(triggers_restart(KeyEventKind::Release, true));
    assert!(!triggers_restart(KeyEventKind::Press, true));
    assert!(!triggers_restart(KeyEventKind::Repeat, true));
}

#[test]
fn restart_on_press_otherwise() {
    assert!(triggers_restart(KeyEventKind::Press, false));
    assert!(!triggers_restart(KeyEventKind::Repeat, false));
}

// ── DirectionSlot ─────────────────────────────────────────────────────────────

#[test]
fn slot_starts_empty() {
    assert_eq!(DirectionSlot::new().take(), None);
}

#[test]
fn slot_last_writer_wins() {
    let slot = DirectionSlot::new();
    slot.set(Direction::Up);
    slot.set(Direction::Left);
    slot.set(Direction::Down);
    assert_eq!(slot.take(), Some(Direction::Down));
}

#[test]
fn slot_take_empties() {
    let slot = DirectionSlot::new();
    slot.set(Direction::Right);
    assert_eq!(slot.take(), Some(Direction::Right));
    assert_eq!(slot.take(), None);
}

#[test]
fn slot_shared_across_threads() {
    let slot = Arc::new(DirectionSlot::new());
    let writer = Arc::clone(&slot);
    thread::spawn(move || writer.set(Direction::Left))
        .join()
        .unwrap();
    assert_eq!(slot.take(), Some(Direction::Left));
}
