/// Events emitted by the simulation.
/// The presentation layer consumes these for sound and game-over screens.

use crate::entities::{BulletId, EnemyId, SessionId};

/// Final tally of a session, delivered once when it ends.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GameOverReport {
    pub session: SessionId,
    pub final_score: u32,
    pub final_level: u32,
}

#[derive(Clone, Debug, PartialEq)]
pub enum GameEvent {
    SessionStarted { session: SessionId },
    Fired { bullet: BulletId },
    EnemySpawned { enemy: EnemyId, level: u32 },
    EnemyDestroyed { enemy: EnemyId, bullet: BulletId },
    EnemyEscaped { enemy: EnemyId },
    PlayerHit { enemy: EnemyId, lives: u32 },
    LevelUp { level: u32 },
    GameOver(GameOverReport),
}

/// Discrete sound triggers.  The core never plays anything itself.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AudioCue {
    Fire,
    EnemyDestroyed,
    PlayerHit,
    GameOver,
}

impl GameEvent {
    pub fn cue(&self) -> Option<AudioCue> {
        match self {
            GameEvent::Fired { .. } => Some(AudioCue::Fire),
            GameEvent::EnemyDestroyed { .. } => Some(AudioCue::EnemyDestroyed),
            GameEvent::PlayerHit { .. } => Some(AudioCue::PlayerHit),
            GameEvent::GameOver(_) => Some(AudioCue::GameOver),
            _ => None,
        }
    }
}
