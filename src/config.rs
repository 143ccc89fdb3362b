//! Fixed game constants.
//!
//! Nothing here is read from disk or the environment; `GameConfig` exists so
//! the world and the tests can share one value instead of reaching for the
//! constants directly (tests shrink the playfield to keep numbers small).

use std::path::PathBuf;
use std::time::Duration;

// ── Playfield ─────────────────────────────────────────────────────────────────

pub const PLAYFIELD_WIDTH: i32 = 1000;
pub const PLAYFIELD_HEIGHT: i32 = 500;

/// Logical size of one sprite glyph.
pub const CELL_WIDTH: i32 = 5;
pub const CELL_HEIGHT: i32 = 10;

// ── Movement ──────────────────────────────────────────────────────────────────

pub const MOVER_STEP: i32 = 5;
pub const OBSTACLE_SPEED: i32 = 2;
pub const DECORATION_SPEED: i32 = 5;

/// Spawn centres land in `[width + MIN, width + MAX]` horizontally.
pub const SPAWN_MARGIN_MIN: i32 = 20;
pub const SPAWN_MARGIN_MAX: i32 = 100;

// ── Timing ────────────────────────────────────────────────────────────────────

pub const OBSTACLE_PERIOD: Duration = Duration::from_millis(250);
pub const DECORATION_PERIOD: Duration = Duration::from_millis(1000);
pub const TICK_RATE: u32 = 100;

/// A key with no press/repeat for this many ticks is treated as released on
/// terminals that never report releases (≈140 ms at 100 Hz, longer than
/// the OS auto-repeat interval).
pub const HOLD_WINDOW_TICKS: u64 = 14;

// ── Assets ────────────────────────────────────────────────────────────────────

pub const ASSET_DIR: &str = "assets";
pub const MOVER_SPRITE: &str = "jet.txt";
pub const OBSTACLE_SPRITE: &str = "missile.txt";
pub const DECORATION_SPRITE: &str = "cloud.txt";
pub const MUSIC_TRACK: &str = "airplane.wav";

#[derive(Clone, Debug, PartialEq)]
pub struct GameConfig {
    pub width: i32,
    pub height: i32,
    pub mover_step: i32,
    pub obstacle_speed: i32,
    pub decoration_speed: i32,
    pub spawn_margin_min: i32,
    pub spawn_margin_max: i32,
    pub obstacle_period: Duration,
    pub decoration_period: Duration,
    pub tick_rate: u32,
    pub hold_window_ticks: u64,
    pub asset_dir: PathBuf,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            width: PLAYFIELD_WIDTH,
            height: PLAYFIELD_HEIGHT,
            mover_step: MOVER_STEP,
            obstacle_speed: OBSTACLE_SPEED,
            decoration_speed: DECORATION_SPEED,
            spawn_margin_min: SPAWN_MARGIN_MIN,
            spawn_margin_max: SPAWN_MARGIN_MAX,
            obstacle_period: OBSTACLE_PERIOD,
            decoration_period: DECORATION_PERIOD,
            tick_rate: TICK_RATE,
            hold_window_ticks: HOLD_WINDOW_TICKS,
            asset_dir: PathBuf::from(ASSET_DIR),
        }
    }
}

impl GameConfig {
    /// Wall-clock budget of one tick.
    pub fn frame_budget(&self) -> Duration {
        Duration::from_secs(1) / self.tick_rate.max(1)
    }
}
