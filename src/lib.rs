//! Moneyrain - catch the falling coins, dodge the falling monsters
//!
//! Core modules:
//! - `sim`: Deterministic simulation (entities, spawning, collisions, game state)
//! - `renderer`: Per-frame draw list handed to the platform
//! - `platform`: Input/display/pacing abstraction plus a headless backend
//! - `game`: Fixed-rate loop driving the simulation against a platform
//! - `settings`: Configuration loaded from JSON

pub mod game;
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use game::Game;
pub use settings::{Settings, SettingsError};

/// Game configuration constants
pub mod consts {
    /// Window title
    pub const WINDOW_TITLE: &str = "Moneyrain";

    /// Default resolution
    pub const SCREEN_WIDTH: f32 = 640.0;
    pub const SCREEN_HEIGHT: f32 = 480.0;

    /// Target frame rate; one simulation tick per frame
    pub const FPS: u32 = 60;

    /// Horizontal step per frame while a move key is held
    pub const PLAYER_SPEED: f32 = 5.0;

    /// Sprite sizes (width, height)
    pub const PLAYER_SIZE: (f32, f32) = (64.0, 64.0);
    pub const COIN_SIZE: (f32, f32) = (32.0, 32.0);
    pub const HAZARD_SIZE: (f32, f32) = (48.0, 48.0);

    /// Fall speed at the start of every run (pixels per frame)
    pub const START_FALL_SPEED: f64 = 3.0;
    /// Fall speed gained per running frame
    pub const FALL_SPEED_STEP: f64 = 0.001;
    /// Upper bound of the spawn roll; a spawn happens when roll < fall speed
    pub const SPAWN_ROLL_RANGE: f64 = 300.0;

    /// Background fill
    pub const BACKGROUND_COLOR: (u8, u8, u8) = (75, 0, 130);
    /// HUD and banner text
    pub const TEXT_COLOR: (u8, u8, u8) = (255, 0, 0);
}

/// Format elapsed seconds as `M:SS`
pub fn format_clock(seconds: f64) -> String {
    let seconds = seconds.max(0.0);
    let minutes = (seconds / 60.0).floor() as u64;
    let secs = (seconds % 60.0).floor() as u64;
    format!("{}:{:02}", minutes, secs)
}
