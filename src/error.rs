//! Errors that can abort a run.
//!
//! Every variant is a startup or terminal failure; the game loop itself has
//! no recoverable error path.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum GameError {
    /// An asset file could not be opened or read.
    #[error("cannot read asset {}: {source}", .path.display())]
    AssetIo {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A sprite file contained no visible glyph.
    #[error("sprite {} has no visible glyphs", .0.display())]
    EmptySprite(PathBuf),

    /// A drifter sprite is wide enough to be visible the instant it spawns.
    #[error("sprite {} is {width} units wide, drifters must be narrower than {limit}", .path.display())]
    SpriteTooWide { path: PathBuf, width: i32, limit: i32 },

    /// The player sprite does not fit inside the playfield.
    #[error("sprite {} ({width}x{height}) does not fit the playfield", .path.display())]
    SpriteTooLarge { path: PathBuf, width: i32, height: i32 },

    #[error("no audio output device: {0}")]
    AudioStream(#[from] rodio::StreamError),

    #[error("cannot decode music track: {0}")]
    AudioDecode(#[from] rodio::decoder::DecoderError),

    #[error("cannot start playback: {0}")]
    AudioPlay(#[from] rodio::PlayError),

    #[error("terminal i/o failed: {0}")]
    Terminal(#[from] io::Error),
}

pub type Result<T> = std::result::Result<T, GameError>;
