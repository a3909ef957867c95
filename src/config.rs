/// Session configuration and its TOML loader.
///
/// Reads `shooter.toml` from an explicit path or the working directory.
/// Every key is optional; missing keys fall back to the defaults below.

use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use crate::progression::{DEFAULT_KILLS_PER_LEVEL, MAX_LIVES};
use crate::spawn::SpawnTiming;

pub const CONFIG_FILE_NAME: &str = "shooter.toml";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("could not read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("config parse error: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("invalid config value for `{field}`: {reason}")]
    Invalid { field: &'static str, reason: String },
}

// ── Public Config Struct ──────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq)]
pub struct GameConfig {
    pub playfield: PlayfieldConfig,
    pub player: PlayerConfig,
    pub enemy: EnemyConfig,
    pub bullet: BulletConfig,
    pub spawn: SpawnTiming,
    pub frame_rate_hz: u32,
    pub kills_per_level: u32,
    pub starting_lives: u32,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlayfieldConfig {
    pub width: f64,
    pub height: f64,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlayerConfig {
    pub width: f64,
    pub height: f64,
    /// Distance moved per frame for each held direction.
    pub speed: f64,
    /// Gap between the player's top edge and the playfield bottom at spawn.
    pub bottom_margin: f64,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EnemyConfig {
    pub width: f64,
    pub height: f64,
    /// Fall speed is `fall_speed_base + spawn level` per enemy step.
    pub fall_speed_base: f64,
    pub step_ms: u32,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BulletConfig {
    pub width: f64,
    pub height: f64,
    pub speed: f64,
    pub step_ms: u32,
    pub fire_cooldown_ms: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig::from_schema(TomlConfig::default())
    }
}

impl GameConfig {
    /// Length of one simulation frame.
    pub fn frame_ms(&self) -> f64 {
        1000.0 / self.frame_rate_hz as f64
    }

    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let schema: TomlConfig = toml::from_str(text)?;
        let cfg = GameConfig::from_schema(schema);
        cfg.validate()?;
        Ok(cfg)
    }

    /// Load from `path`, or from `shooter.toml` in the working directory
    /// when no path is given.  Only the implicit file may be absent.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let (path, required) = match path {
            Some(p) => (p.to_path_buf(), true),
            None => (PathBuf::from(CONFIG_FILE_NAME), false),
        };

        if !required && !path.exists() {
            log::warn!("{} not found, using default settings", path.display());
            return Ok(GameConfig::default());
        }

        let text = std::fs::read_to_string(&path).map_err(|source| ConfigError::Io {
            path: path.clone(),
            source,
        })?;
        let cfg = GameConfig::from_toml_str(&text)?;
        log::info!("loaded config from {}", path.display());
        Ok(cfg)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        positive("playfield.width", self.playfield.width)?;
        positive("playfield.height", self.playfield.height)?;
        positive("player.width", self.player.width)?;
        positive("player.height", self.player.height)?;
        positive("enemy.width", self.enemy.width)?;
        positive("enemy.height", self.enemy.height)?;
        positive("bullet.width", self.bullet.width)?;
        positive("bullet.height", self.bullet.height)?;
        positive("bullet.speed", self.bullet.speed)?;

        if self.player.speed < 0.0 || !self.player.speed.is_finite() {
            return Err(invalid("player.speed", "must be a non-negative number"));
        }
        if self.enemy.fall_speed_base < 0.0 || !self.enemy.fall_speed_base.is_finite() {
            return Err(invalid("enemy.fall_speed_base", "must be a non-negative number"));
        }
        if self.player.width > self.playfield.width || self.player.height > self.playfield.height {
            return Err(invalid("player", "player does not fit inside the playfield"));
        }
        if self.player.bottom_margin < self.player.height
            || self.player.bottom_margin > self.playfield.height
        {
            return Err(invalid(
                "player.bottom_margin",
                "must lie between player.height and playfield.height",
            ));
        }
        if self.enemy.step_ms == 0 {
            return Err(invalid("enemy.step_ms", "must be at least 1"));
        }
        if self.bullet.step_ms == 0 {
            return Err(invalid("bullet.step_ms", "must be at least 1"));
        }
        if self.frame_rate_hz == 0 {
            return Err(invalid("timing.frame_rate_hz", "must be at least 1"));
        }
        if self.kills_per_level == 0 {
            return Err(invalid("progression.kills_per_level", "must be at least 1"));
        }
        if self.starting_lives == 0 || self.starting_lives > MAX_LIVES {
            return Err(invalid(
                "progression.starting_lives",
                format!("must be between 1 and {MAX_LIVES}"),
            ));
        }
        Ok(())
    }

    fn from_schema(t: TomlConfig) -> Self {
        GameConfig {
            playfield: PlayfieldConfig {
                width: t.playfield.width,
                height: t.playfield.height,
            },
            player: PlayerConfig {
                width: t.player.width,
                height: t.player.height,
                speed: t.player.speed,
                bottom_margin: t.player.bottom_margin,
            },
            enemy: EnemyConfig {
                width: t.enemy.width,
                height: t.enemy.height,
                fall_speed_base: t.enemy.fall_speed_base,
                step_ms: t.enemy.step_ms,
            },
            bullet: BulletConfig {
                width: t.bullet.width,
                height: t.bullet.height,
                speed: t.bullet.speed,
                step_ms: t.bullet.step_ms,
                fire_cooldown_ms: t.bullet.fire_cooldown_ms,
            },
            spawn: SpawnTiming {
                base_delay_ms: t.spawn.base_delay_ms,
                delay_step_ms: t.spawn.delay_step_ms,
                floor_ms: t.spawn.floor_ms,
            },
            frame_rate_hz: t.timing.frame_rate_hz,
            kills_per_level: t.progression.kills_per_level,
            starting_lives: t.progression.starting_lives,
        }
    }
}

fn positive(field: &'static str, value: f64) -> Result<(), ConfigError> {
    if value > 0.0 && value.is_finite() {
        Ok(())
    } else {
        Err(invalid(field, "must be a positive number"))
    }
}

fn invalid(field: &'static str, reason: impl Into<String>) -> ConfigError {
    ConfigError::Invalid { field, reason: reason.into() }
}

// ── TOML Schema (with serde defaults) ─────────────────────────────────────────

#[derive(Deserialize, Debug, Default)]
#[serde(deny_unknown_fields)]
struct TomlConfig {
    #[serde(default)]
    playfield: TomlPlayfield,
    #[serde(default)]
    player: TomlPlayer,
    #[serde(default)]
    enemy: TomlEnemy,
    #[serde(default)]
    bullet: TomlBullet,
    #[serde(default)]
    spawn: TomlSpawn,
    #[serde(default)]
    timing: TomlTiming,
    #[serde(default)]
    progression: TomlProgression,
}

#[derive(Deserialize, Debug)]
struct TomlPlayfield {
    #[serde(default = "default_playfield_width")]
    width: f64,
    #[serde(default = "default_playfield_height")]
    height: f64,
}

#[derive(Deserialize, Debug)]
struct TomlPlayer {
    #[serde(default = "default_player_width")]
    width: f64,
    #[serde(default = "default_player_height")]
    height: f64,
    #[serde(default = "default_player_speed")]
    speed: f64,
    #[serde(default = "default_player_bottom_margin")]
    bottom_margin: f64,
}

#[derive(Deserialize, Debug)]
struct TomlEnemy {
    #[serde(default = "default_enemy_size")]
    width: f64,
    #[serde(default = "default_enemy_size")]
    height: f64,
    #[serde(default = "default_fall_speed_base")]
    fall_speed_base: f64,
    #[serde(default = "default_enemy_step")]
    step_ms: u32,
}

#[derive(Deserialize, Debug)]
struct TomlBullet {
    #[serde(default = "default_bullet_width")]
    width: f64,
    #[serde(default = "default_bullet_height")]
    height: f64,
    #[serde(default = "default_bullet_speed")]
    speed: f64,
    #[serde(default = "default_bullet_step")]
    step_ms: u32,
    #[serde(default = "default_fire_cooldown")]
    fire_cooldown_ms: u32,
}

#[derive(Deserialize, Debug)]
struct TomlSpawn {
    #[serde(default = "default_spawn_base")]
    base_delay_ms: u32,
    #[serde(default = "default_spawn_step")]
    delay_step_ms: u32,
    #[serde(default = "default_spawn_floor")]
    floor_ms: u32,
}

#[derive(Deserialize, Debug)]
struct TomlTiming {
    #[serde(default = "default_frame_rate")]
    frame_rate_hz: u32,
}

#[derive(Deserialize, Debug)]
struct TomlProgression {
    #[serde(default = "default_kills_per_level")]
    kills_per_level: u32,
    #[serde(default = "default_starting_lives")]
    starting_lives: u32,
}

// ── Defaults ──────────────────────────────────────────────────────────────────

fn default_playfield_width() -> f64 { 1200.0 }
fn default_playfield_height() -> f64 { 700.0 }
fn default_player_width() -> f64 { 54.0 }
fn default_player_height() -> f64 { 60.0 }
fn default_player_speed() -> f64 { 2.0 }
fn default_player_bottom_margin() -> f64 { 80.0 }
fn default_enemy_size() -> f64 { 50.0 }
fn default_fall_speed_base() -> f64 { 3.0 }
fn default_enemy_step() -> u32 { 50 }     // 20 Hz
fn default_bullet_width() -> f64 { 6.0 }
fn default_bullet_height() -> f64 { 16.0 }
fn default_bullet_speed() -> f64 { 10.0 }
fn default_bullet_step() -> u32 { 30 }    // ~33 Hz
fn default_fire_cooldown() -> u32 { 300 }
fn default_spawn_base() -> u32 { 1000 }
fn default_spawn_step() -> u32 { 100 }
fn default_spawn_floor() -> u32 { 300 }
fn default_frame_rate() -> u32 { 60 }
fn default_kills_per_level() -> u32 { DEFAULT_KILLS_PER_LEVEL }
fn default_starting_lives() -> u32 { MAX_LIVES }

impl Default for TomlPlayfield {
    fn default() -> Self {
        TomlPlayfield {
            width: default_playfield_width(),
            height: default_playfield_height(),
        }
    }
}

impl Default for TomlPlayer {
    fn default() -> Self {
        TomlPlayer {
            width: default_player_width(),
            height: default_player_height(),
            speed: default_player_speed(),
            bottom_margin: default_player_bottom_margin(),
        }
    }
}

impl Default for TomlEnemy {
    fn default() -> Self {
        TomlEnemy {
            width: default_enemy_size(),
            height: default_enemy_size(),
            fall_speed_base: default_fall_speed_base(),
            step_ms: default_enemy_step(),
        }
    }
}

impl Default for TomlBullet {
    fn default() -> Self {
        TomlBullet {
            width: default_bullet_width(),
            height: default_bullet_height(),
            speed: default_bullet_speed(),
            step_ms: default_bullet_step(),
            fire_cooldown_ms: default_fire_cooldown(),
        }
    }
}

impl Default for TomlSpawn {
    fn default() -> Self {
        TomlSpawn {
            base_delay_ms: default_spawn_base(),
            delay_step_ms: default_spawn_step(),
            floor_ms: default_spawn_floor(),
        }
    }
}

impl Default for TomlTiming {
    fn default() -> Self {
        TomlTiming { frame_rate_hz: default_frame_rate() }
    }
}

impl Default for TomlProgression {
    fn default() -> Self {
        TomlProgression {
            kills_per_level: default_kills_per_level(),
            starting_lives: default_starting_lives(),
        }
    }
}
