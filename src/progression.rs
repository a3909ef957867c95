/// Score, level and lives.
///
/// Level is derived from score (`1 + score / kills_per_level`) and only
/// recomputed on a kill.  Lives are clamped to `0..=MAX_LIVES`.

use log::info;

pub const MAX_LIVES: u32 = 3;
pub const DEFAULT_KILLS_PER_LEVEL: u32 = 10;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Progression {
    score: u32,
    level: u32,
    lives: u32,
    kills_per_level: u32,
}

/// Result of recording a hit on the player.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HitOutcome {
    Survived { lives: u32 },
    /// This hit took the last life.
    Exhausted,
    /// Lives were already zero; nothing changed.
    AlreadyExhausted,
}

impl Default for Progression {
    fn default() -> Self {
        Progression::new(MAX_LIVES, DEFAULT_KILLS_PER_LEVEL)
    }
}

impl Progression {
    pub fn new(starting_lives: u32, kills_per_level: u32) -> Self {
        Progression {
            score: 0,
            level: 1,
            lives: starting_lives.min(MAX_LIVES),
            kills_per_level: kills_per_level.max(1),
        }
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn lives(&self) -> u32 {
        self.lives
    }

    pub fn is_exhausted(&self) -> bool {
        self.lives == 0
    }

    /// Count one kill.  Returns the new level when this kill crossed a
    /// level boundary.
    pub fn record_kill(&mut self) -> Option<u32> {
        self.score = self.score.saturating_add(1);
        let level = level_for_score(self.score, self.kills_per_level);
        if level > self.level {
            self.level = level;
            info!("level up: {} (score {})", level, self.score);
            Some(level)
        } else {
            None
        }
    }

    pub fn record_hit(&mut self) -> HitOutcome {
        match self.lives {
            0 => HitOutcome::AlreadyExhausted,
            1 => {
                self.lives = 0;
                HitOutcome::Exhausted
            }
            n => {
                self.lives = n - 1;
                HitOutcome::Survived { lives: self.lives }
            }
        }
    }
}

/// `1 + floor(score / kills_per_level)`.
pub fn level_for_score(score: u32, kills_per_level: u32) -> u32 {
    1 + score / kills_per_level.max(1)
}
