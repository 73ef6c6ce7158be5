//! Keyboard plumbing: key → command mapping and the pending-direction
//! register shared between the reader thread and the tick loop.

use std::sync::{Mutex, PoisonError};

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::entities::Direction;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    Turn(Direction),
    Quit,
    /// Any other key. Still counts as "a key" for restarting.
    Other,
}

pub fn command_for(key: &KeyEvent) -> Command {
    match key.code {
        KeyCode::Up | KeyCode::Char('w') | KeyCode::Char('W') => Command::Turn(Direction::Up),
        KeyCode::Down | KeyCode::Char('s') | KeyCode::Char('S') => Command::Turn(Direction::Down),
        KeyCode::Left | KeyCode::Char('a') | KeyCode::Char('A') => Command::Turn(Direction::Left),
        KeyCode::Right | KeyCode::Char('d') | KeyCode::Char('D') => {
            Command::Turn(Direction::Right)
        }
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => Command::Quit,
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => Command::Quit,
        _ => Command::Other,
    }
}

/// Whether this key event restarts a finished game.
///
/// Terminals that report key releases restart on release. Classic terminals
/// only ever send presses, so there the press does it.
pub fn triggers_restart(kind: KeyEventKind, releases_reported: bool) -> bool {
    if releases_reported {
        kind == KeyEventKind::Release
    } else {
        kind == KeyEventKind::Press
    }
}

// ── Pending direction ─────────────────────────────────────────────────────────

/// A single-slot register holding the most recent direction request.
///
/// Writers overwrite, the tick loop empties it with `take`. Several presses
/// between two ticks collapse into the last one.
#[derive(Debug, Default)]
pub struct DirectionSlot {
    pending: Mutex<Option<Direction>>,
}

impl DirectionSlot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&self, direction: Direction) {
        *self.pending.lock().unwrap_or_else(PoisonError::into_inner) = Some(direction);
    }

    pub fn take(&self) -> Option<Direction> {
        self.pending
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .take()
    }
}
