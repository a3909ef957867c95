//! Arcade shooter simulation core.
//!
//! - `session`: the Idle/Running/GameOver state machine and per-frame tick
//! - `compute`: player, enemy, bullet and fire steps
//! - `registry`: live entity sets
//! - `progression`: score, level, lives
//! - `spawn`: enemy spawn cadence
//! - `movement`: per-level enemy movement policies
//! - `geometry`: bounding-box overlap
//! - `config`: configuration and TOML loading
//! - `display`, `audio`: terminal presentation collaborators

pub mod audio;
pub mod compute;
pub mod config;
pub mod display;
pub mod entities;
pub mod events;
pub mod geometry;
pub mod movement;
pub mod progression;
pub mod registry;
pub mod session;
pub mod spawn;

pub use config::{ConfigError, GameConfig};
pub use entities::{GameStatus, Intents, SessionId};
pub use events::{AudioCue, GameEvent, GameOverReport};
pub use session::{Session, Snapshot};
