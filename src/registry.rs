/// Owner of the live player, enemy and bullet sets.
///
/// Entities live in creation-ordered vectors and are addressed by ids drawn
/// from one counter, so iteration order is deterministic for a fixed
/// sequence of spawns.  Removing an entity is the only way it dies.

use crate::entities::{Bullet, BulletId, Enemy, EnemyId, Player};
use crate::movement::MovementPolicy;

#[derive(Clone, Debug, Default)]
pub struct EntityRegistry {
    player: Option<Player>,
    enemies: Vec<Enemy>,
    bullets: Vec<Bullet>,
    next_id: u32,
}

impl EntityRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    // ── Player ────────────────────────────────────────────────────────────────

    pub fn set_player(&mut self, player: Player) {
        self.player = Some(player);
    }

    pub fn player(&self) -> Option<&Player> {
        self.player.as_ref()
    }

    pub fn player_mut(&mut self) -> Option<&mut Player> {
        self.player.as_mut()
    }

    // ── Enemies ───────────────────────────────────────────────────────────────

    pub fn spawn_enemy(&mut self, x: f64, y: f64, width: f64, height: f64, level: u32) -> EnemyId {
        let id = EnemyId(self.allocate_id());
        self.enemies.push(Enemy {
            id,
            x,
            y,
            width,
            height,
            spawn_level: level,
            policy: MovementPolicy::for_level(level),
            phase: 0.0,
        });
        id
    }

    pub fn enemies(&self) -> &[Enemy] {
        &self.enemies
    }

    pub fn enemies_mut(&mut self) -> &mut [Enemy] {
        &mut self.enemies
    }

    pub fn enemy(&self, id: EnemyId) -> Option<&Enemy> {
        self.enemies.iter().find(|e| e.id == id)
    }

    pub fn remove_enemy(&mut self, id: EnemyId) -> Option<Enemy> {
        let index = self.enemies.iter().position(|e| e.id == id)?;
        Some(self.enemies.remove(index))
    }

    // ── Bullets ───────────────────────────────────────────────────────────────

    pub fn spawn_bullet(&mut self, x: f64, y: f64, width: f64, height: f64, speed: f64) -> BulletId {
        let id = BulletId(self.allocate_id());
        self.bullets.push(Bullet { id, x, y, width, height, speed });
        id
    }

    pub fn bullets(&self) -> &[Bullet] {
        &self.bullets
    }

    pub fn bullet_mut(&mut self, id: BulletId) -> Option<&mut Bullet> {
        self.bullets.iter_mut().find(|b| b.id == id)
    }

    pub fn remove_bullet(&mut self, id: BulletId) -> Option<Bullet> {
        let index = self.bullets.iter().position(|b| b.id == id)?;
        Some(self.bullets.remove(index))
    }

    // ── Lifecycle ─────────────────────────────────────────────────────────────

    /// Destroy every enemy and bullet, keeping the player.
    pub fn clear_enemies_and_bullets(&mut self) {
        self.enemies.clear();
        self.bullets.clear();
    }

    /// Destroy everything, the player included.  Ids keep counting up.
    pub fn clear(&mut self) {
        self.player = None;
        self.clear_enemies_and_bullets();
    }

    fn allocate_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id = self.next_id.wrapping_add(1);
        id
    }
}
