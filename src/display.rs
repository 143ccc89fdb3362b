//! Rendering layer. All terminal drawing lives here.
//!
//! Each function receives a mutable writer and an immutable view of the
//! world.  No game logic is performed; this module only translates logical
//! playfield coordinates into terminal cells.

use std::io::Write;

use crossterm::{
    cursor,
    style::{self, Color, Print},
    terminal,
    QueueableCommand,
};
use sky_dodge::assets::Assets;
use sky_dodge::compute::render_order;
use sky_dodge::entities::{Entity, SpriteKey, World};
use sky_dodge::viewport::Viewport;

// ── Colour palette ────────────────────────────────────────────────────────────

const C_SKY: Color = Color::Rgb { r: 135, g: 206, b: 250 };
const C_JET: Color = Color::Rgb { r: 40, g: 40, b: 60 };
const C_MISSILE: Color = Color::Rgb { r: 90, g: 90, b: 90 };
const C_CLOUD: Color = Color::White;

fn color_for(key: SpriteKey) -> Color {
    match key {
        SpriteKey::Jet => C_JET,
        SpriteKey::Missile => C_MISSILE,
        SpriteKey::Cloud => C_CLOUD,
    }
}

/// Viewport for the terminal's current size.
pub fn current_viewport(world: &World) -> std::io::Result<Viewport> {
    let (cols, rows) = terminal::size()?;
    Ok(Viewport::new(cols, rows, world.width, world.height))
}

// ── Public entry point ────────────────────────────────────────────────────────

/// Render one complete frame.
pub fn render<W: Write>(
    out: &mut W,
    world: &World,
    assets: &Assets,
    viewport: Viewport,
) -> std::io::Result<()> {
    out.queue(style::SetBackgroundColor(C_SKY))?;
    out.queue(terminal::Clear(terminal::ClearType::All))?;

    // Mover comes last, on top of everything else.
    for renderable in render_order(world) {
        draw_entity(out, renderable.entity(), assets, viewport)?;
    }

    out.queue(style::ResetColor)?;
    out.queue(cursor::MoveTo(0, 0))?;
    out.flush()?;
    Ok(())
}

// ── Entities ──────────────────────────────────────────────────────────────────

fn draw_entity<W: Write>(
    out: &mut W,
    entity: &Entity,
    assets: &Assets,
    viewport: Viewport,
) -> std::io::Result<()> {
    out.queue(style::SetForegroundColor(color_for(entity.sprite)))?;

    // Spaces were dropped at load time, so the sky shows through.  Glyphs
    // that land in the same terminal cell overwrite each other.
    for (col, row, glyph) in assets.sprite(entity.sprite).glyphs() {
        let (c, r) = viewport.glyph_cell(&entity.rect, col, row);
        if !viewport.contains(c, r) {
            continue;
        }
        out.queue(cursor::MoveTo(c as u16, r as u16))?;
        out.queue(Print(glyph))?;
    }
    Ok(())
}
