//! Fixed timestep simulation tick
//!
//! One call advances the session by exactly one frame.

use super::collision::is_caught;
use super::state::{EntityKind, GamePhase, GameState};
use crate::consts::*;

/// Input for a single tick (held-key state)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickInput {
    /// Move left
    pub left: bool,
    /// Move right
    pub right: bool,
    /// Start a new run (F2)
    pub restart: bool,
    /// Close the game (Esc or window close)
    pub quit: bool,
}

/// Where the spawn roll for a tick comes from
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SpawnRoll {
    /// Draw from the session RNG
    Random,
    /// Use this value instead (must lie in `[0, SPAWN_ROLL_RANGE)` to be meaningful)
    Fixed(f64),
}

/// Something that happened during a tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    /// Quit was requested; nothing else was simulated
    QuitRequested,
    /// The session was reset by the restart key
    Restarted,
    Spawned { id: u64, kind: EntityKind },
    /// Dropped past the bottom edge
    LeftScreen { id: u64 },
    CoinCollected { id: u64 },
    /// A monster reached the player; the run is over
    HazardHit { id: u64 },
}

/// Advance the game state by one frame
pub fn tick(state: &mut GameState, input: &TickInput) -> Vec<GameEvent> {
    tick_with_roll(state, input, SpawnRoll::Random)
}

/// Advance the game state by one frame with a chosen spawn roll
pub fn tick_with_roll(state: &mut GameState, input: &TickInput, roll: SpawnRoll) -> Vec<GameEvent> {
    let mut events = Vec::new();

    // Movement applies in every phase, both directions may be held at once
    if input.left {
        state.player.move_by(-1.0);
    }
    if input.right {
        state.player.move_by(1.0);
    }

    if input.quit {
        events.push(GameEvent::QuitRequested);
        return events;
    }

    if input.restart {
        log::info!(
            "New game (previous run: {} coins in {})",
            state.total_money,
            crate::format_clock(state.elapsed_seconds)
        );
        state.reset();
        events.push(GameEvent::Restarted);
    }

    // Frozen until restart
    if !state.is_running() {
        return events;
    }

    state.fall_speed += FALL_SPEED_STEP;
    state.elapsed_seconds += state.frame_seconds;

    let roll = match roll {
        SpawnRoll::Random => state.roll_spawn(),
        SpawnRoll::Fixed(value) => value,
    };
    if roll < state.fall_speed {
        let id = state.spawn_random();
        if let Some(entity) = state.entity(id) {
            log::debug!("Spawned {:?} #{} at x={}", entity.kind, id, entity.pos.x);
            events.push(GameEvent::Spawned {
                id,
                kind: entity.kind,
            });
        }
    }

    for entity in &mut state.entities {
        entity.fall();
    }

    remove_off_screen(state, &mut events);
    resolve_catches(state, &mut events);

    events
}

/// Drop every entity that has fallen past the bottom edge
fn remove_off_screen(state: &mut GameState, events: &mut Vec<GameEvent>) {
    let screen_height = state.screen_height;
    let gone: Vec<u64> = state
        .entities
        .iter()
        .filter(|e| e.is_off_screen(screen_height))
        .map(|e| e.id)
        .collect();

    if gone.is_empty() {
        return;
    }

    state.entities.retain(|e| !gone.contains(&e.id));
    events.extend(gone.into_iter().map(|id| GameEvent::LeftScreen { id }));
}

/// Collect coins touching the player; a monster ends the run on the spot
fn resolve_catches(state: &mut GameState, events: &mut Vec<GameEvent>) {
    let player = state.player.bounds();
    let screen_height = state.screen_height;
    let mut collected = Vec::new();

    for entity in &state.entities {
        if !is_caught(&entity.bounds(), &player, screen_height) {
            continue;
        }
        match entity.kind {
            EntityKind::Coin => {
                state.total_money += 1;
                collected.push(entity.id);
                events.push(GameEvent::CoinCollected { id: entity.id });
                log::debug!("Coin #{} collected, total {}", entity.id, state.total_money);
            }
            EntityKind::Hazard => {
                state.phase = GamePhase::GameOver;
                events.push(GameEvent::HazardHit { id: entity.id });
                log::info!(
                    "Game over: {} coins in {}",
                    state.total_money,
                    crate::format_clock(state.elapsed_seconds)
                );
                break;
            }
        }
    }

    if !collected.is_empty() {
        state.entities.retain(|e| !collected.contains(&e.id));
    }
}
