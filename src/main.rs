mod audio;
mod display;

use std::io::{stdout, BufWriter, Write};
use std::time::{Duration, Instant};

use crossterm::{
    cursor,
    event::{self, KeyboardEnhancementFlags, PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags},
    terminal, ExecutableCommand,
};
use log::{debug, info};
use rand::thread_rng;

use sky_dodge::assets::Assets;
use sky_dodge::compute::{init_world, tick};
use sky_dodge::config::GameConfig;
use sky_dodge::entities::{RunStatus, TerminationCause};
use sky_dodge::error::Result;
use sky_dodge::events::{EventQueue, Spawner};
use sky_dodge::input::{translate, InputAction, KeyTracker};

use audio::Music;

// ── Game loop ─────────────────────────────────────────────────────────────────

/// Run until the world terminates; returns why it did.
///
/// Each iteration drains terminal input and due timer firings into one
/// ordered queue, hands the batch plus the currently held directions to
/// `tick`, renders the result and sleeps off whatever is left of the frame
/// budget.  A terminated world is never rendered.
fn game_loop<W: Write>(
    out: &mut W,
    config: &GameConfig,
    assets: &Assets,
    keyboard_enhanced: bool,
) -> Result<TerminationCause> {
    let mut rng = thread_rng();
    let mut world = init_world(config, assets.sizes());
    let mut spawner = Spawner::new(config);
    let mut queue = EventQueue::new();
    let mut keys = KeyTracker::new(config.hold_window_ticks, keyboard_enhanced);
    let frame_budget = config.frame_budget();
    let started = Instant::now();

    loop {
        let frame_start = Instant::now();

        // ── Drain all pending input events (non-blocking) ─────────────────────
        while event::poll(Duration::ZERO)? {
            match translate(&event::read()?) {
                InputAction::Event(e) => queue.push(e),
                InputAction::Press(dir) => keys.press(dir, world.tick),
                InputAction::Release(dir) => keys.release(dir),
                InputAction::Ignore => {}
            }
        }
        spawner.poll(started.elapsed(), &mut queue);

        world = tick(&world, &queue.drain(), keys.held(world.tick), config, &mut rng);
        if let RunStatus::Terminated(cause) = world.status {
            return Ok(cause);
        }

        display::render(out, &world, assets, display::current_viewport(&world)?)?;

        let elapsed = frame_start.elapsed();
        if elapsed < frame_budget {
            std::thread::sleep(frame_budget - elapsed);
        }
    }
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("off")).init();

    let config = GameConfig::default();

    // Anything missing here aborts before the terminal is touched.
    let assets = Assets::load(&config)?;
    let music = Music::start(&assets.music)?;

    let raw_out = stdout();
    let mut out = BufWriter::new(raw_out);

    terminal::enable_raw_mode()?;
    out.execute(terminal::EnterAlternateScreen)?;
    out.execute(cursor::Hide)?;

    // Request key-release (and key-repeat) events from the terminal.
    // Kitty-protocol terminals support this; others fall back to the hold window.
    let keyboard_enhanced = matches!(terminal::supports_keyboard_enhancement(), Ok(true))
        && out
            .execute(PushKeyboardEnhancementFlags(
                KeyboardEnhancementFlags::REPORT_EVENT_TYPES,
            ))
            .is_ok();
    debug!("keyboard enhancement: {}", keyboard_enhanced);

    let result = game_loop(&mut out, &config, &assets, keyboard_enhanced);

    // Always restore the terminal
    if keyboard_enhanced {
        let _ = out.execute(PopKeyboardEnhancementFlags);
    }
    let _ = out.execute(cursor::Show);
    let _ = out.execute(terminal::LeaveAlternateScreen);
    let _ = terminal::disable_raw_mode();

    music.stop();

    let cause = result?;
    info!("exiting after {:?}", cause);
    Ok(())
}
