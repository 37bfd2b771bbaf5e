//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One tick per frame
//! - Seeded RNG only
//! - Stable iteration order (by entity ID)
//! - No rendering or platform dependencies

pub mod collision;
pub mod state;
pub mod tick;

pub use collision::{Aabb, in_catch_band, is_caught, overlaps_horizontally};
pub use state::{EntityKind, FallingEntity, GamePhase, GameState, Player};
pub use tick::{GameEvent, SpawnRoll, TickInput, tick, tick_with_roll};
