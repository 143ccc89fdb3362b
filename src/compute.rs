//! Pure game-logic functions.
//!
//! Every public function takes an immutable reference to the current state
//! (and, where needed, an RNG handle) and returns a brand-new value.  Side
//! effects are limited to the injected RNG and log output.

use log::{debug, info, trace};
use rand::Rng;

use crate::config::GameConfig;
use crate::entities::{
    Drifter, DrifterKind, Entity, Mover, Renderable, RunStatus, SpriteKey, SpriteSizes,
    TerminationCause, World,
};
use crate::events::GameEvent;
use crate::geometry::{Rect, Size};
use crate::input::Directions;

// ── Constructors ─────────────────────────────────────────────────────────────

/// Build the world at the start of a run: the mover centred on the
/// playfield, nothing else alive.
pub fn init_world(config: &GameConfig, sizes: SpriteSizes) -> World {
    let rect = Rect::centered_at(
        config.width / 2,
        config.height / 2,
        sizes.mover.width,
        sizes.mover.height,
    );
    World {
        mover: Some(Mover { entity: Entity { rect, sprite: SpriteKey::Jet } }),
        obstacles: Vec::new(),
        decorations: Vec::new(),
        status: RunStatus::Running,
        tick: 0,
        next_id: 0,
        sizes,
        width: config.width,
        height: config.height,
    }
}

/// Create a drifter just past the right edge: centre x uniform in
/// `[width + margin_min, width + margin_max]`, centre y uniform in
/// `[0, height]`.
pub fn spawn_drifter(
    kind: DrifterKind,
    id: u64,
    size: Size,
    config: &GameConfig,
    rng: &mut impl Rng,
) -> Drifter {
    let cx = rng.gen_range(config.width + config.spawn_margin_min..=config.width + config.spawn_margin_max);
    let cy = rng.gen_range(0..=config.height);
    let (sprite, speed) = match kind {
        DrifterKind::Obstacle => (SpriteKey::Missile, config.obstacle_speed),
        DrifterKind::Decoration => (SpriteKey::Cloud, config.decoration_speed),
    };
    Drifter {
        id,
        kind,
        entity: Entity { rect: Rect::centered_at(cx, cy, size.width, size.height), sprite },
        speed,
    }
}

// ── Per-entity updates ───────────────────────────────────────────────────────

/// Apply one step per held direction, then clamp to the playfield.
pub fn move_mover(mover: &Mover, keys: Directions, config: &GameConfig) -> Mover {
    let (dx, dy) = keys.delta(config.mover_step);
    let rect = mover
        .entity
        .rect
        .translated(dx, dy)
        .clamped_to(config.width, config.height);
    Mover { entity: Entity { rect, ..mover.entity } }
}

/// Move a drifter left by its speed.  `None` once its right edge has passed
/// x < 0; the owning collection drops it.
pub fn advance_drifter(drifter: &Drifter) -> Option<Drifter> {
    let rect = drifter.entity.rect.translated(-drifter.speed, 0);
    if rect.right() < 0 {
        trace!("{:?} #{} left the playfield", drifter.kind, drifter.id);
        return None;
    }
    Some(Drifter {
        entity: Entity { rect, ..drifter.entity },
        ..drifter.clone()
    })
}

fn advance_all(drifters: &[Drifter]) -> Vec<Drifter> {
    drifters.iter().filter_map(advance_drifter).collect()
}

// ── Collision ────────────────────────────────────────────────────────────────

/// True if the mover overlaps any live obstacle.  Decorations never count.
pub fn mover_hit(world: &World) -> bool {
    let Some(mover) = &world.mover else {
        return false;
    };
    world
        .obstacles
        .iter()
        .any(|o| mover.entity.rect.intersects(&o.entity.rect))
}

fn terminate(world: World, cause: TerminationCause) -> World {
    info!("run terminated at tick {}: {:?}", world.tick, cause);
    let mover = match cause {
        TerminationCause::Collision => None,
        _ => world.mover,
    };
    World {
        mover,
        status: RunStatus::Terminated(cause),
        ..world
    }
}

// ── Event dispatch ───────────────────────────────────────────────────────────

/// Apply a single drained event.  Quit and Cancel terminate; timer firings
/// spawn exactly one drifter of the matching kind.
pub fn dispatch(
    world: &World,
    event: GameEvent,
    config: &GameConfig,
    rng: &mut impl Rng,
) -> World {
    let world = world.clone();
    if world.status != RunStatus::Running {
        return world;
    }
    match event {
        GameEvent::Quit => terminate(world, TerminationCause::Quit),
        GameEvent::Cancel => terminate(world, TerminationCause::Cancel),
        GameEvent::ObstacleTimerFired => {
            let drifter = spawn_drifter(
                DrifterKind::Obstacle,
                world.next_id,
                world.sizes.obstacle,
                config,
                rng,
            );
            debug!("spawned obstacle #{} at {:?}", drifter.id, drifter.entity.rect);
            let mut obstacles = world.obstacles;
            obstacles.push(drifter);
            World { obstacles, next_id: world.next_id + 1, ..world }
        }
        GameEvent::DecorationTimerFired => {
            let drifter = spawn_drifter(
                DrifterKind::Decoration,
                world.next_id,
                world.sizes.decoration,
                config,
                rng,
            );
            debug!("spawned decoration #{} at {:?}", drifter.id, drifter.entity.rect);
            let mut decorations = world.decorations;
            decorations.push(drifter);
            World { decorations, next_id: world.next_id + 1, ..world }
        }
    }
}

// ── Per-tick update ──────────────────────────────────────────────────────────

/// Advance the run by one tick.
///
/// 1. Apply the drained `events` in arrival order.
/// 2. If that already produced a collision, stop here.
/// 3. Move the mover by `keys`, then every obstacle and decoration; drop
///    drifters that have left the playfield.
/// 4. Check for a collision again.
///
/// A terminated world is returned unchanged.  All randomness comes through
/// `rng` so tests can drive it with a seeded RNG.
pub fn tick(
    world: &World,
    events: &[GameEvent],
    keys: Directions,
    config: &GameConfig,
    rng: &mut impl Rng,
) -> World {
    if world.status != RunStatus::Running {
        return world.clone();
    }

    let mut next = events
        .iter()
        .fold(world.clone(), |w, event| dispatch(&w, *event, config, &mut *rng));
    next.tick += 1;

    if next.status != RunStatus::Running {
        return next;
    }
    if mover_hit(&next) {
        return terminate(next, TerminationCause::Collision);
    }

    let next = World {
        mover: next.mover.as_ref().map(|m| move_mover(m, keys, config)),
        obstacles: advance_all(&next.obstacles),
        decorations: advance_all(&next.decorations),
        ..next
    };

    if mover_hit(&next) {
        return terminate(next, TerminationCause::Collision);
    }
    next
}

// ── Draw order ───────────────────────────────────────────────────────────────

/// Everything to draw this frame, back to front: drifters in spawn order
/// (both kinds interleaved), then the mover on top.
pub fn render_order(world: &World) -> Vec<Renderable<'_>> {
    let mut drifters: Vec<&Drifter> = world
        .obstacles
        .iter()
        .chain(world.decorations.iter())
        .collect();
    drifters.sort_by_key(|d| d.id);

    drifters
        .into_iter()
        .map(Renderable::Drifter)
        .chain(world.mover.as_ref().map(Renderable::Mover))
        .collect()
}
