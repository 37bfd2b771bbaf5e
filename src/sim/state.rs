//! Game state and core simulation types
//!
//! Everything a run needs lives in `GameState`; there is no global state.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::collision::Aabb;
use crate::consts::*;
use crate::settings::{Settings, SpriteSize};

/// Current phase of play
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GamePhase {
    /// Active gameplay
    #[default]
    Running,
    /// A monster was hit; the frame is frozen until restart
    GameOver,
}

/// What a falling entity is
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    /// Worth one point when caught
    Coin,
    /// Ends the run when caught
    Hazard,
}

/// The player's avatar at the bottom of the screen
#[derive(Debug, Clone, PartialEq)]
pub struct Player {
    /// Top-left corner; `y` never changes
    pub pos: Vec2,
    pub size: SpriteSize,
    /// Horizontal step per move
    pub speed: f32,
    /// Rightmost allowed `pos.x`
    max_x: f32,
}

impl Player {
    /// Centre the player horizontally, resting on the bottom edge
    pub fn new(settings: &Settings) -> Self {
        let size = settings.player_size;
        let max_x = (settings.screen_width - size.width).max(0.0);
        Self {
            pos: Vec2::new(
                (settings.screen_width / 2.0 - size.width / 2.0).clamp(0.0, max_x),
                settings.screen_height - size.height,
            ),
            size,
            speed: settings.player_speed,
            max_x,
        }
    }

    /// Move by `direction * speed`, clamped to the screen
    pub fn move_by(&mut self, direction: f32) {
        self.pos.x = (self.pos.x + direction * self.speed).clamp(0.0, self.max_x);
    }

    /// Place the player at `x`, clamped to the screen
    pub fn set_x(&mut self, x: f32) {
        self.pos.x = x.clamp(0.0, self.max_x);
    }

    #[inline]
    pub fn max_x(&self) -> f32 {
        self.max_x
    }

    pub fn bounds(&self) -> Aabb {
        Aabb::new(self.pos, self.size)
    }
}

/// A coin or monster falling at constant speed
#[derive(Debug, Clone, PartialEq)]
pub struct FallingEntity {
    pub id: u64,
    pub kind: EntityKind,
    /// Top-left corner
    pub pos: Vec2,
    pub size: SpriteSize,
    /// Pixels per frame, fixed at spawn
    pub fall_speed: f64,
}

impl FallingEntity {
    /// Advance one frame
    pub fn fall(&mut self) {
        self.pos.y += self.fall_speed as f32;
    }

    /// True once the entity has dropped past the bottom edge
    pub fn is_off_screen(&self, screen_height: f32) -> bool {
        self.pos.y > screen_height
    }

    pub fn bounds(&self) -> Aabb {
        Aabb::new(self.pos, self.size)
    }
}

/// Complete state of one game session
#[derive(Debug, Clone)]
pub struct GameState {
    /// Seed the RNG was created from
    pub seed: u64,
    rng: Pcg32,
    pub phase: GamePhase,
    /// Coins caught this run
    pub total_money: u64,
    /// Time played this run
    pub elapsed_seconds: f64,
    /// Fall speed handed to newly spawned entities
    pub fall_speed: f64,
    pub player: Player,
    /// Live entities (sorted by id)
    pub entities: Vec<FallingEntity>,
    pub screen_width: f32,
    pub screen_height: f32,
    /// Seconds added per running tick
    pub frame_seconds: f64,
    coin_size: SpriteSize,
    hazard_size: SpriteSize,
    /// Next entity ID
    next_id: u64,
}

impl GameState {
    /// Create a new session with the given seed
    pub fn new(settings: &Settings, seed: u64) -> Self {
        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            phase: GamePhase::Running,
            total_money: 0,
            elapsed_seconds: 0.0,
            fall_speed: START_FALL_SPEED,
            player: Player::new(settings),
            entities: Vec::new(),
            screen_width: settings.screen_width,
            screen_height: settings.screen_height,
            frame_seconds: settings.frame_seconds(),
            coin_size: settings.coin_size,
            hazard_size: settings.hazard_size,
            next_id: 1,
        }
    }

    #[inline]
    pub fn is_running(&self) -> bool {
        self.phase == GamePhase::Running
    }

    /// Start a new run. The player keeps its position.
    pub fn reset(&mut self) {
        self.total_money = 0;
        self.entities.clear();
        self.phase = GamePhase::Running;
        self.fall_speed = START_FALL_SPEED;
        self.elapsed_seconds = 0.0;
    }

    /// Allocate a new entity ID
    pub fn next_entity_id(&mut self) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Sprite size for an entity kind
    pub fn entity_size(&self, kind: EntityKind) -> SpriteSize {
        match kind {
            EntityKind::Coin => self.coin_size,
            EntityKind::Hazard => self.hazard_size,
        }
    }

    /// Draw the per-frame spawn roll in `[0, SPAWN_ROLL_RANGE)`
    pub fn roll_spawn(&mut self) -> f64 {
        self.rng.random_range(0.0..SPAWN_ROLL_RANGE)
    }

    /// Spawn an entity of random kind at a random column, just above the screen
    pub fn spawn_random(&mut self) -> u64 {
        let kind = if self.rng.random_bool(0.5) {
            EntityKind::Coin
        } else {
            EntityKind::Hazard
        };
        let size = self.entity_size(kind);
        let max_x = (self.screen_width - size.width).max(0.0) as u32;
        let x = self.rng.random_range(0..=max_x) as f32;
        self.spawn_at(kind, Vec2::new(x, -size.height))
    }

    /// Spawn an entity at an exact position, snapshotting the current fall speed
    pub fn spawn_at(&mut self, kind: EntityKind, pos: Vec2) -> u64 {
        let id = self.next_entity_id();
        self.entities.push(FallingEntity {
            id,
            kind,
            pos,
            size: self.entity_size(kind),
            fall_speed: self.fall_speed,
        });
        id
    }

    /// Look up a live entity
    pub fn entity(&self, id: u64) -> Option<&FallingEntity> {
        self.entities.iter().find(|e| e.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_player_starts_centered_on_bottom() {
        let settings = Settings::default();
        let player = Player::new(&settings);
        assert_eq!(player.pos.x, 640.0 / 2.0 - 64.0 / 2.0);
        assert_eq!(player.pos.y, 480.0 - 64.0);
        assert_eq!(player.max_x(), 640.0 - 64.0);
    }

    #[test]
    fn test_player_clamps() {
        let settings = Settings::default();
        let mut player = Player::new(&settings);
        for _ in 0..1000 {
            player.move_by(-1.0);
        }
        assert_eq!(player.pos.x, 0.0);
        for _ in 0..1000 {
            player.move_by(1.0);
        }
        assert_eq!(player.pos.x, 576.0);
    }

    #[test]
    fn test_spawn_random_within_columns() {
        let settings = Settings::default();
        let mut state = GameState::new(&settings, 7);
        for _ in 0..500 {
            let id = state.spawn_random();
            let e = state.entity(id).unwrap();
            assert!(e.pos.x >= 0.0);
            assert!(e.pos.x <= settings.screen_width - e.size.width);
            assert_eq!(e.pos.y, -e.size.height);
            let expected = match e.kind {
                EntityKind::Coin => settings.coin_size,
                EntityKind::Hazard => settings.hazard_size,
            };
            assert_eq!(e.size, expected);
        }
    }

    #[test]
    fn test_spawn_draws_both_kinds() {
        let mut state = GameState::new(&Settings::default(), 11);
        for _ in 0..200 {
            state.spawn_random();
        }
        let coins = state
            .entities
            .iter()
            .filter(|e| e.kind == EntityKind::Coin)
            .count();
        assert!(coins > 0 && coins < 200);
    }

    #[test]
    fn test_spawn_snapshots_fall_speed() {
        let mut state = GameState::new(&Settings::default(), 1);
        state.fall_speed = 4.5;
        let id = state.spawn_at(EntityKind::Coin, Vec2::ZERO);
        state.fall_speed = 9.0;
        assert_eq!(state.entity(id).unwrap().fall_speed, 4.5);
    }

    #[test]
    fn test_roll_range() {
        let mut state = GameState::new(&Settings::default(), 3);
        for _ in 0..1000 {
            let roll = state.roll_spawn();
            assert!((0.0..SPAWN_ROLL_RANGE).contains(&roll));
        }
    }

    #[test]
    fn test_entity_ids_past_u32() {
        let mut state = GameState::new(&Settings::default(), 5);
        state.next_id = u32::MAX as u64;
        let a = state.spawn_random();
        let b = state.spawn_random();
        assert_eq!(a, u32::MAX as u64);
        assert_eq!(b, u32::MAX as u64 + 1);
        assert!(state.entity(a).is_some() && state.entity(b).is_some());
    }

    #[test]
    fn test_entity_ids_unique() {
        let mut state = GameState::new(&Settings::default(), 5);
        let a = state.spawn_random();
        let b = state.spawn_random();
        assert_ne!(a, b);
    }
}
