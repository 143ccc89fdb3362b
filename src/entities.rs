//! All game entity types: pure data, no logic.

use crate::geometry::{Rect, Size};

/// Which loaded sprite an entity is drawn with.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SpriteKey {
    Jet,
    Missile,
    Cloud,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DrifterKind {
    /// Ends the run on contact with the mover.
    Obstacle,
    /// Background scenery, no gameplay effect.
    Decoration,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TerminationCause {
    Quit,
    Cancel,
    Collision,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RunStatus {
    Running,
    Terminated(TerminationCause),
}

// ── Entities ──────────────────────────────────────────────────────────────────

/// Shape shared by everything that moves and gets drawn.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Entity {
    pub rect: Rect,
    pub sprite: SpriteKey,
}

/// The player craft.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Mover {
    pub entity: Entity,
}

/// An obstacle or decoration: spawned off the right edge, drifts left at a
/// constant speed until it has fully left the playfield.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Drifter {
    /// Spawn sequence number, shared by both kinds; doubles as draw order.
    pub id: u64,
    pub kind: DrifterKind,
    pub entity: Entity,
    /// Leftward displacement per tick.
    pub speed: i32,
}

/// Logical sprite sizes the world needs to build rectangles.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SpriteSizes {
    pub mover: Size,
    pub obstacle: Size,
    pub decoration: Size,
}

/// Borrowed view of one entry in draw order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Renderable<'a> {
    Mover(&'a Mover),
    Drifter(&'a Drifter),
}

impl<'a> Renderable<'a> {
    pub fn entity(&self) -> &'a Entity {
        match self {
            Renderable::Mover(m) => &m.entity,
            Renderable::Drifter(d) => &d.entity,
        }
    }
}

// ── World ─────────────────────────────────────────────────────────────────────

/// The entire run state.  Cloneable so the per-tick update can return a
/// fresh copy without mutating the original.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct World {
    /// `None` once a collision has taken the mover out of play.
    pub mover: Option<Mover>,
    /// Live obstacles in spawn order; tested for collision and updated.
    pub obstacles: Vec<Drifter>,
    /// Live decorations in spawn order; updated only.
    pub decorations: Vec<Drifter>,
    pub status: RunStatus,
    pub tick: u64,
    /// Id handed to the next spawned drifter.
    pub next_id: u64,
    pub sizes: SpriteSizes,
    pub width: i32,
    pub height: i32,
}
