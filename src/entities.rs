/// All game entity types — plain data plus bounding-box accessors.

use crate::geometry::Rect;
use crate::movement::MovementPolicy;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameStatus {
    Idle,
    Running,
    GameOver,
}

// ── Identifiers ───────────────────────────────────────────────────────────────

/// Monotonic per-`Session` generation.  Work stamped with an older id
/// belongs to a superseded session and is discarded.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SessionId(pub u64);

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EnemyId(pub u32);

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct BulletId(pub u32);

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

// ── Input ─────────────────────────────────────────────────────────────────────

/// Normalized per-frame input.  `fire` is the edge of the fire key; the
/// fire cooldown decides whether it produces a bullet.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Intents {
    pub move_left: bool,
    pub move_right: bool,
    pub move_up: bool,
    pub move_down: bool,
    pub fire: bool,
}

// ── Player ────────────────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq)]
pub struct Player {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Player {
    pub fn bounds(&self) -> Rect {
        Rect::from_origin(self.x, self.y, self.width, self.height)
    }

    pub fn position(&self) -> Position {
        Position { x: self.x, y: self.y }
    }
}

// ── Enemy ─────────────────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq)]
pub struct Enemy {
    pub id: EnemyId,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    /// Level in effect when this enemy spawned; fixes its policy and fall speed.
    pub spawn_level: u32,
    pub policy: MovementPolicy,
    /// Accumulator for periodic policies.
    pub phase: f64,
}

impl Enemy {
    pub fn bounds(&self) -> Rect {
        Rect::from_origin(self.x, self.y, self.width, self.height)
    }

    pub fn position(&self) -> Position {
        Position { x: self.x, y: self.y }
    }
}

// ── Bullet ────────────────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq)]
pub struct Bullet {
    pub id: BulletId,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    /// Upward distance travelled per bullet step.
    pub speed: f64,
}

impl Bullet {
    pub fn bounds(&self) -> Rect {
        Rect::from_origin(self.x, self.y, self.width, self.height)
    }

    pub fn position(&self) -> Position {
        Position { x: self.x, y: self.y }
    }
}
