/// Per-frame simulation steps.
///
/// Each function advances one concern of a running session against the
/// entity registry and progression it is handed.  Nothing here knows about
/// session status; `Session::tick` decides which steps run and in what
/// order.  Randomness only enters through the injected RNG.

use log::debug;
use rand::Rng;

use crate::config::GameConfig;
use crate::entities::{BulletId, EnemyId, Intents, Player};
use crate::events::GameEvent;
use crate::geometry::overlaps;
use crate::movement::fall_speed;
use crate::progression::{HitOutcome, Progression};
use crate::registry::EntityRegistry;

// ── Constructors ──────────────────────────────────────────────────────────────

/// Player centred horizontally, `bottom_margin` above the playfield floor.
pub fn initial_player(config: &GameConfig) -> Player {
    let p = &config.player;
    Player {
        x: (config.playfield.width - p.width) / 2.0,
        y: config.playfield.height - p.bottom_margin,
        width: p.width,
        height: p.height,
    }
}

// ── Player ────────────────────────────────────────────────────────────────────

/// Apply held directions.  Each axis direction is gated on its own so the
/// player's box stays inside `[0, width] x [0, height]`.
pub fn move_player(registry: &mut EntityRegistry, intents: &Intents, config: &GameConfig) {
    let Some(player) = registry.player_mut() else {
        return;
    };
    let speed = config.player.speed;
    let max_x = config.playfield.width - player.width;
    let max_y = config.playfield.height - player.height;

    if intents.move_left && player.x > 0.0 {
        player.x = (player.x - speed).max(0.0);
    }
    if intents.move_right && player.x < max_x {
        player.x = (player.x + speed).min(max_x);
    }
    if intents.move_up && player.y > 0.0 {
        player.y = (player.y - speed).max(0.0);
    }
    if intents.move_down && player.y < max_y {
        player.y = (player.y + speed).min(max_y);
    }
}

// ── Spawning ──────────────────────────────────────────────────────────────────

/// Drop a new enemy at a random column along the top edge.
pub fn spawn_enemy(
    registry: &mut EntityRegistry,
    config: &GameConfig,
    level: u32,
    rng: &mut impl Rng,
) -> EnemyId {
    let x = rng.gen_range(0.0..config.playfield.width);
    let id = registry.spawn_enemy(x, 0.0, config.enemy.width, config.enemy.height, level);
    debug!("enemy {:?} spawned at x={:.1} (level {})", id, x, level);
    id
}

// ── Enemies ───────────────────────────────────────────────────────────────────

/// Outcome of one enemy step.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EnemyStep {
    Continue,
    /// A collision took the player's last life.
    LivesExhausted,
}

/// Advance every enemy by one enemy step: policy drift, then fall.  Enemies
/// past the bottom edge escape; enemies touching the player cost a life.
/// Stops at the collision that exhausts the lives.
pub fn step_enemies(
    registry: &mut EntityRegistry,
    progression: &mut Progression,
    config: &GameConfig,
    events: &mut Vec<GameEvent>,
) -> EnemyStep {
    let player_box = registry.player().map(|p| p.bounds());
    let target_x = registry.player().map(|p| p.x);
    let floor = config.playfield.height;

    let mut escaped: Vec<EnemyId> = Vec::new();
    let mut collided: Vec<EnemyId> = Vec::new();

    for enemy in registry.enemies_mut() {
        let dx = enemy.policy.displacement(&mut enemy.phase, enemy.x, target_x);
        enemy.x += dx;
        enemy.y += fall_speed(config.enemy.fall_speed_base, enemy.spawn_level);

        if enemy.y > floor {
            escaped.push(enemy.id);
        } else if let Some(pb) = &player_box {
            if overlaps(pb, &enemy.bounds()) {
                collided.push(enemy.id);
            }
        }
    }

    for id in escaped {
        registry.remove_enemy(id);
        events.push(GameEvent::EnemyEscaped { enemy: id });
    }

    for id in collided {
        registry.remove_enemy(id);
        match progression.record_hit() {
            HitOutcome::Survived { lives } => {
                events.push(GameEvent::PlayerHit { enemy: id, lives });
            }
            HitOutcome::Exhausted => {
                events.push(GameEvent::PlayerHit { enemy: id, lives: 0 });
                return EnemyStep::LivesExhausted;
            }
            HitOutcome::AlreadyExhausted => return EnemyStep::LivesExhausted,
        }
    }

    EnemyStep::Continue
}

// ── Bullets ───────────────────────────────────────────────────────────────────

/// Advance every bullet by one bullet step in creation order.  A bullet
/// leaving the top edge is dropped; otherwise the first enemy it overlaps
/// is destroyed along with it.  Destroyed enemies are removed before the
/// next bullet is tested, so no enemy is counted twice.
pub fn step_bullets(
    registry: &mut EntityRegistry,
    progression: &mut Progression,
    events: &mut Vec<GameEvent>,
) {
    let ids: Vec<BulletId> = registry.bullets().iter().map(|b| b.id).collect();

    for id in ids {
        let Some(bullet) = registry.bullet_mut(id) else {
            continue;
        };
        bullet.y -= bullet.speed;
        if bullet.y < 0.0 {
            registry.remove_bullet(id);
            continue;
        }

        let bounds = bullet.bounds();
        let target = registry
            .enemies()
            .iter()
            .find(|e| overlaps(&bounds, &e.bounds()))
            .map(|e| e.id);

        if let Some(enemy) = target {
            registry.remove_bullet(id);
            registry.remove_enemy(enemy);
            events.push(GameEvent::EnemyDestroyed { enemy, bullet: id });
            if let Some(level) = progression.record_kill() {
                events.push(GameEvent::LevelUp { level });
            }
            debug!("bullet {:?} destroyed enemy {:?}", id, enemy);
        }
    }
}

// ── Firing ────────────────────────────────────────────────────────────────────

/// Minimum spacing between successful shots.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FireCooldown {
    cooldown_ms: f64,
    ready_at_ms: f64,
}

impl FireCooldown {
    pub fn new(cooldown_ms: u32, now_ms: f64) -> Self {
        FireCooldown {
            cooldown_ms: cooldown_ms as f64,
            ready_at_ms: now_ms,
        }
    }

    pub fn is_ready(&self, now_ms: f64) -> bool {
        now_ms >= self.ready_at_ms
    }

    /// Consume the cooldown if it has elapsed.
    pub fn try_trigger(&mut self, now_ms: f64) -> bool {
        if !self.is_ready(now_ms) {
            return false;
        }
        self.ready_at_ms = now_ms + self.cooldown_ms;
        true
    }
}

/// Fire if there is a player and the cooldown has elapsed.  The cooldown is
/// only spent when a bullet is created.
pub fn try_fire(
    registry: &mut EntityRegistry,
    cooldown: &mut FireCooldown,
    now_ms: f64,
    config: &GameConfig,
) -> Option<BulletId> {
    if registry.player().is_none() || !cooldown.try_trigger(now_ms) {
        return None;
    }
    fire_bullet(registry, config)
}

/// Fire from the player's horizontal centre and top edge.  No player, no shot.
pub fn fire_bullet(registry: &mut EntityRegistry, config: &GameConfig) -> Option<BulletId> {
    let player = registry.player()?;
    let b = &config.bullet;
    let x = player.bounds().center_x() - b.width / 2.0;
    let y = player.y;
    Some(registry.spawn_bullet(x, y, b.width, b.height, b.speed))
}
