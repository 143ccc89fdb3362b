pub mod assets;
pub mod compute;
pub mod config;
pub mod entities;
pub mod error;
pub mod events;
pub mod geometry;
pub mod input;
pub mod viewport;
