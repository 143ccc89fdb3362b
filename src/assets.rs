//! Sprite loading.
//!
//! A sprite file is plain text, one line per glyph row.  Spaces are
//! transparent.  Each glyph covers one `CELL_WIDTH` x `CELL_HEIGHT` logical
//! cell, which is what ties sprite art to collision rectangles.

use std::fs;
use std::path::{Path, PathBuf};

use log::info;

use crate::config::{
    GameConfig, CELL_HEIGHT, CELL_WIDTH, DECORATION_SPRITE, MOVER_SPRITE, MUSIC_TRACK,
    OBSTACLE_SPRITE,
};
use crate::entities::{SpriteKey, SpriteSizes};
use crate::error::{GameError, Result};
use crate::geometry::Size;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Sprite {
    rows: Vec<Vec<char>>,
    columns: usize,
}

impl Sprite {
    /// Parse sprite art.  Trailing blanks on each line and trailing empty
    /// lines are dropped; `None` if nothing visible remains.
    pub fn parse(text: &str) -> Option<Sprite> {
        let mut rows: Vec<Vec<char>> = text
            .lines()
            .map(|line| line.trim_end().chars().collect())
            .collect();
        while rows.last().is_some_and(|r| r.is_empty()) {
            rows.pop();
        }
        let columns = rows.iter().map(Vec::len).max().unwrap_or(0);
        let visible = rows.iter().flatten().any(|c| !c.is_whitespace());
        visible.then_some(Sprite { rows, columns })
    }

    pub fn load(path: &Path) -> Result<Sprite> {
        let text = fs::read_to_string(path).map_err(|source| GameError::AssetIo {
            path: path.to_path_buf(),
            source,
        })?;
        Sprite::parse(&text).ok_or_else(|| GameError::EmptySprite(path.to_path_buf()))
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Footprint in logical units.
    pub fn size(&self) -> Size {
        Size::new(
            self.columns as i32 * CELL_WIDTH,
            self.rows.len() as i32 * CELL_HEIGHT,
        )
    }

    /// Visible glyphs as `(column, row, glyph)`, skipping transparent cells.
    pub fn glyphs(&self) -> impl Iterator<Item = (usize, usize, char)> + '_ {
        self.rows.iter().enumerate().flat_map(|(row, line)| {
            line.iter()
                .enumerate()
                .filter(|(_, c)| !c.is_whitespace())
                .map(move |(col, c)| (col, row, *c))
        })
    }
}

/// Everything loaded from disk before the loop starts.
#[derive(Clone, Debug)]
pub struct Assets {
    pub jet: Sprite,
    pub missile: Sprite,
    pub cloud: Sprite,
    pub music: PathBuf,
}

impl Assets {
    /// Load and validate all sprites.  The music path is resolved here but
    /// opened by the audio layer.
    pub fn load(config: &GameConfig) -> Result<Assets> {
        let dir = &config.asset_dir;
        let jet = load_checked(&dir.join(MOVER_SPRITE), |path, size| {
            if size.width > config.width || size.height > config.height {
                return Err(GameError::SpriteTooLarge {
                    path: path.to_path_buf(),
                    width: size.width,
                    height: size.height,
                });
            }
            Ok(())
        })?;

        // A drifter's left edge sits at least `margin_min - width / 2` past
        // the right edge, so anything this wide or wider could spawn visible.
        let limit = 2 * config.spawn_margin_min;
        let narrow = |path: &Path, size: Size| {
            if size.width >= limit {
                return Err(GameError::SpriteTooWide {
                    path: path.to_path_buf(),
                    width: size.width,
                    limit,
                });
            }
            Ok(())
        };
        let missile = load_checked(&dir.join(OBSTACLE_SPRITE), narrow)?;
        let cloud = load_checked(&dir.join(DECORATION_SPRITE), narrow)?;

        Ok(Assets { jet, missile, cloud, music: dir.join(MUSIC_TRACK) })
    }

    pub fn sprite(&self, key: SpriteKey) -> &Sprite {
        match key {
            SpriteKey::Jet => &self.jet,
            SpriteKey::Missile => &self.missile,
            SpriteKey::Cloud => &self.cloud,
        }
    }

    pub fn sizes(&self) -> SpriteSizes {
        SpriteSizes {
            mover: self.jet.size(),
            obstacle: self.missile.size(),
            decoration: self.cloud.size(),
        }
    }
}

fn load_checked(path: &Path, check: impl Fn(&Path, Size) -> Result<()>) -> Result<Sprite> {
    let sprite = Sprite::load(path)?;
    check(path, sprite.size())?;
    info!(
        "loaded sprite {} ({}x{} glyphs)",
        path.display(),
        sprite.columns(),
        sprite.row_count()
    );
    Ok(sprite)
}
