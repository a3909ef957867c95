/// The game session state machine.
///
/// `Idle -> Running -> GameOver -> Running ...`.  Entering Running always
/// starts from empty entity sets and a fresh progression under a new
/// `SessionId`.  Leaving Running cancels the spawn chain and destroys every
/// entity.  Ticks outside Running do nothing.
///
/// Within a frame the order is fixed: player movement, spawn poll, enemy
/// steps, bullet steps, then the fire intent.  Enemy and bullet steps run
/// from their own accumulators, so their cadence is independent of the
/// frame rate.

use log::info;
use rand::Rng;

use crate::compute::{self, EnemyStep, FireCooldown};
use crate::config::{ConfigError, GameConfig};
use crate::entities::{BulletId, EnemyId, GameStatus, Intents, Position, SessionId};
use crate::events::{GameEvent, GameOverReport};
use crate::progression::Progression;
use crate::registry::EntityRegistry;
use crate::spawn::SpawnScheduler;

/// What the presentation layer draws after a tick.
#[derive(Clone, Debug, PartialEq)]
pub struct Snapshot {
    pub session: SessionId,
    pub status: GameStatus,
    pub player: Option<Position>,
    /// Each enemy with the level it spawned at.
    pub enemies: Vec<(EnemyId, Position, u32)>,
    pub bullets: Vec<(BulletId, Position)>,
    pub score: u32,
    pub level: u32,
    pub lives: u32,
}

#[derive(Clone, Debug)]
pub struct Session {
    config: GameConfig,
    status: GameStatus,
    id: SessionId,
    clock_ms: f64,
    registry: EntityRegistry,
    progression: Progression,
    spawner: SpawnScheduler,
    fire: FireCooldown,
    enemy_acc_ms: f64,
    bullet_acc_ms: f64,
    report: Option<GameOverReport>,
}

impl Session {
    /// Rejects configs that `GameConfig::validate` refuses; an empty
    /// playfield or a zero step would otherwise panic or never finish a tick.
    pub fn new(config: GameConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let progression = Progression::new(config.starting_lives, config.kills_per_level);
        let spawner = SpawnScheduler::new(config.spawn);
        let fire = FireCooldown::new(config.bullet.fire_cooldown_ms, 0.0);
        Ok(Session {
            config,
            status: GameStatus::Idle,
            id: SessionId::default(),
            clock_ms: 0.0,
            registry: EntityRegistry::new(),
            progression,
            spawner,
            fire,
            enemy_acc_ms: 0.0,
            bullet_acc_ms: 0.0,
            report: None,
        })
    }

    // ── Accessors ─────────────────────────────────────────────────────────────

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn id(&self) -> SessionId {
        self.id
    }

    pub fn clock_ms(&self) -> f64 {
        self.clock_ms
    }

    pub fn progression(&self) -> &Progression {
        &self.progression
    }

    pub fn registry(&self) -> &EntityRegistry {
        &self.registry
    }

    pub fn spawner(&self) -> &SpawnScheduler {
        &self.spawner
    }

    /// Final tally of the last finished session, while in GameOver.
    pub fn report(&self) -> Option<GameOverReport> {
        self.report
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            session: self.id,
            status: self.status,
            player: self.registry.player().map(|p| p.position()),
            enemies: self
                .registry
                .enemies()
                .iter()
                .map(|e| (e.id, e.position(), e.spawn_level))
                .collect(),
            bullets: self
                .registry
                .bullets()
                .iter()
                .map(|b| (b.id, b.position()))
                .collect(),
            score: self.progression.score(),
            level: self.progression.level(),
            lives: self.progression.lives(),
        }
    }

    // ── Commands ──────────────────────────────────────────────────────────────

    pub fn start(&mut self) -> Vec<GameEvent> {
        self.enter_running()
    }

    pub fn restart(&mut self) -> Vec<GameEvent> {
        self.enter_running()
    }

    /// Place an enemy directly, as if the spawn scheduler had fired with
    /// the current level.  Ignored unless Running.
    pub fn spawn_enemy_at(&mut self, x: f64, y: f64) -> Option<EnemyId> {
        if self.status != GameStatus::Running {
            return None;
        }
        let e = &self.config.enemy;
        Some(self.registry.spawn_enemy(x, y, e.width, e.height, self.progression.level()))
    }

    // ── Simulation ────────────────────────────────────────────────────────────

    /// Advance one frame.  Returns the events produced, in order.
    pub fn tick(&mut self, intents: Intents, rng: &mut impl Rng) -> Vec<GameEvent> {
        let mut events = Vec::new();
        if self.status != GameStatus::Running {
            return events;
        }

        let dt = self.config.frame_ms();
        self.clock_ms += dt;

        // 1. Player
        compute::move_player(&mut self.registry, &intents, &self.config);

        // 2. Spawns
        if self.spawner.poll(self.clock_ms, self.id, self.progression.level()) {
            let level = self.progression.level();
            let enemy = compute::spawn_enemy(&mut self.registry, &self.config, level, rng);
            events.push(GameEvent::EnemySpawned { enemy, level });
        }

        // 3. Enemies
        let enemy_step = self.config.enemy.step_ms as f64;
        self.enemy_acc_ms += dt;
        while self.enemy_acc_ms >= enemy_step {
            self.enemy_acc_ms -= enemy_step;
            let outcome = compute::step_enemies(
                &mut self.registry,
                &mut self.progression,
                &self.config,
                &mut events,
            );
            if outcome == EnemyStep::LivesExhausted {
                self.enter_game_over(&mut events);
                return events;
            }
        }

        // 4. Bullets
        let bullet_step = self.config.bullet.step_ms as f64;
        self.bullet_acc_ms += dt;
        while self.bullet_acc_ms >= bullet_step {
            self.bullet_acc_ms -= bullet_step;
            compute::step_bullets(&mut self.registry, &mut self.progression, &mut events);
        }

        // 5. Fire
        if intents.fire {
            let now = self.clock_ms;
            if let Some(bullet) =
                compute::try_fire(&mut self.registry, &mut self.fire, now, &self.config)
            {
                events.push(GameEvent::Fired { bullet });
            }
        }

        events
    }

    // ── Transitions ───────────────────────────────────────────────────────────

    fn enter_running(&mut self) -> Vec<GameEvent> {
        self.id = SessionId(self.id.0 + 1);
        self.status = GameStatus::Running;
        self.registry.clear();
        self.registry.set_player(compute::initial_player(&self.config));
        self.progression = Progression::new(self.config.starting_lives, self.config.kills_per_level);
        self.spawner.cancel();
        self.spawner.start(self.id, self.clock_ms);
        self.fire = FireCooldown::new(self.config.bullet.fire_cooldown_ms, self.clock_ms);
        self.enemy_acc_ms = 0.0;
        self.bullet_acc_ms = 0.0;
        self.report = None;

        info!("session {:?} started", self.id);
        vec![GameEvent::SessionStarted { session: self.id }]
    }

    fn enter_game_over(&mut self, events: &mut Vec<GameEvent>) {
        self.status = GameStatus::GameOver;
        self.spawner.cancel();
        self.registry.clear();

        let report = GameOverReport {
            session: self.id,
            final_score: self.progression.score(),
            final_level: self.progression.level(),
        };
        self.report = Some(report);
        info!(
            "session {:?} over: score {} at level {}",
            self.id, report.final_score, report.final_level
        );
        events.push(GameEvent::GameOver(report));
    }
}
