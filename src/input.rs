//! Keyboard handling: translating terminal events and tracking which
//! directions are currently held.
//!
//! Two classes of terminal are supported:
//! * **Keyboard-enhancement capable** (kitty protocol): proper `Press` /
//!   `Repeat` / `Release` events, so keys are dropped on release.
//! * **Classic terminals**: only presses, with OS auto-repeat showing up as
//!   more presses.  Keys expire after `hold_window` ticks of silence.

use std::collections::HashMap;

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::events::GameEvent;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [Direction::Up, Direction::Down, Direction::Left, Direction::Right];
}

/// The set of directions pressed during one tick.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Directions {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
}

impl Directions {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn from_slice(dirs: &[Direction]) -> Self {
        dirs.iter().fold(Self::none(), |set, d| set.with(*d))
    }

    pub fn with(mut self, dir: Direction) -> Self {
        match dir {
            Direction::Up => self.up = true,
            Direction::Down => self.down = true,
            Direction::Left => self.left = true,
            Direction::Right => self.right = true,
        }
        self
    }

    pub fn contains(&self, dir: Direction) -> bool {
        match dir {
            Direction::Up => self.up,
            Direction::Down => self.down,
            Direction::Left => self.left,
            Direction::Right => self.right,
        }
    }

    /// Summed displacement for a per-direction `step`; opposite keys cancel.
    pub fn delta(&self, step: i32) -> (i32, i32) {
        let axis = |neg: bool, pos: bool| (pos as i32 - neg as i32) * step;
        (axis(self.left, self.right), axis(self.up, self.down))
    }
}

// ── Event translation ─────────────────────────────────────────────────────────

/// What a raw terminal event means to the game.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InputAction {
    Event(GameEvent),
    Press(Direction),
    Release(Direction),
    Ignore,
}

pub fn direction_for(code: KeyCode) -> Option<Direction> {
    match code {
        KeyCode::Up => Some(Direction::Up),
        KeyCode::Down => Some(Direction::Down),
        KeyCode::Left => Some(Direction::Left),
        KeyCode::Right => Some(Direction::Right),
        _ => None,
    }
}

pub fn translate(event: &Event) -> InputAction {
    let Event::Key(KeyEvent { code, kind, modifiers, .. }) = event else {
        return InputAction::Ignore;
    };
    match (kind, code) {
        (KeyEventKind::Press, KeyCode::Esc) => InputAction::Event(GameEvent::Cancel),
        (KeyEventKind::Press, KeyCode::Char('c')) if modifiers.contains(KeyModifiers::CONTROL) => {
            InputAction::Event(GameEvent::Quit)
        }
        (KeyEventKind::Press | KeyEventKind::Repeat, code) => {
            direction_for(*code).map_or(InputAction::Ignore, InputAction::Press)
        }
        (KeyEventKind::Release, code) => {
            direction_for(*code).map_or(InputAction::Ignore, InputAction::Release)
        }
    }
}

// ── Held-key tracking ─────────────────────────────────────────────────────────

/// Maps each held direction to the tick it was last seen (press or repeat).
#[derive(Clone, Debug)]
pub struct KeyTracker {
    last_seen: HashMap<Direction, u64>,
    hold_window: u64,
    /// The terminal sends `Release` events, so presses never go stale.
    reports_releases: bool,
}

impl KeyTracker {
    pub fn new(hold_window: u64, reports_releases: bool) -> Self {
        KeyTracker { last_seen: HashMap::new(), hold_window, reports_releases }
    }

    pub fn press(&mut self, dir: Direction, tick: u64) {
        self.last_seen.insert(dir, tick);
    }

    pub fn release(&mut self, dir: Direction) {
        self.last_seen.remove(&dir);
    }

    /// Directions currently held.  Without release reporting a direction
    /// only counts while its last press/repeat is within the hold window.
    pub fn held(&self, tick: u64) -> Directions {
        Direction::ALL
            .into_iter()
            .filter(|d| {
                self.last_seen
                    .get(d)
                    .map(|&last| {
                        self.reports_releases || tick.saturating_sub(last) <= self.hold_window
                    })
                    .unwrap_or(false)
            })
            .fold(Directions::none(), Directions::with)
    }
}
