//! Game settings
//!
//! Loaded from a JSON file named by `MONEYRAIN_SETTINGS`; anything missing
//! falls back to the defaults in `consts`.

use std::fmt;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Environment variable holding the settings file path
pub const SETTINGS_ENV: &str = "MONEYRAIN_SETTINGS";

/// Sprite dimensions in pixels
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpriteSize {
    pub width: f32,
    pub height: f32,
}

impl SpriteSize {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

impl From<(f32, f32)> for SpriteSize {
    fn from((width, height): (f32, f32)) -> Self {
        Self::new(width, height)
    }
}

/// Why settings could not be loaded or used
#[derive(Debug)]
pub enum SettingsError {
    Io(std::io::Error),
    Parse(serde_json::Error),
    /// A sprite does not fit on the screen
    SpriteTooLarge { sprite: &'static str, size: SpriteSize },
    /// Frame rate of zero
    ZeroFps,
}

impl fmt::Display for SettingsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SettingsError::Io(e) => write!(f, "failed to read settings: {}", e),
            SettingsError::Parse(e) => write!(f, "failed to parse settings: {}", e),
            SettingsError::SpriteTooLarge { sprite, size } => write!(
                f,
                "{} sprite ({}x{}) does not fit on the screen",
                sprite, size.width, size.height
            ),
            SettingsError::ZeroFps => write!(f, "fps must be greater than zero"),
        }
    }
}

impl std::error::Error for SettingsError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SettingsError::Io(e) => Some(e),
            SettingsError::Parse(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for SettingsError {
    fn from(e: std::io::Error) -> Self {
        SettingsError::Io(e)
    }
}

impl From<serde_json::Error> for SettingsError {
    fn from(e: serde_json::Error) -> Self {
        SettingsError::Parse(e)
    }
}

/// Game settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Screen ===
    pub screen_width: f32,
    pub screen_height: f32,
    /// Frames (and simulation ticks) per second
    pub fps: u32,

    // === Sprites ===
    pub player_size: SpriteSize,
    pub coin_size: SpriteSize,
    pub hazard_size: SpriteSize,

    // === Gameplay ===
    /// Horizontal step per frame while a move key is held
    pub player_speed: f32,
    /// RNG seed (random when absent)
    pub seed: Option<u64>,

    // === Headless backend ===
    /// Frames to run before the headless platform requests quit
    pub headless_frames: u64,
    /// Sleep between frames to hold the target frame rate
    pub realtime: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            screen_width: SCREEN_WIDTH,
            screen_height: SCREEN_HEIGHT,
            fps: FPS,

            player_size: PLAYER_SIZE.into(),
            coin_size: COIN_SIZE.into(),
            hazard_size: HAZARD_SIZE.into(),

            player_speed: PLAYER_SPEED,
            seed: None,

            headless_frames: 60 * 60,
            realtime: false,
        }
    }
}

impl Settings {
    /// Parse settings from JSON; missing fields take their defaults
    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        let settings: Settings = serde_json::from_str(json)?;
        Ok(settings)
    }

    /// Read and validate settings from a file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
        let json = std::fs::read_to_string(path)?;
        let settings = Self::from_json(&json)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Load settings from the file named by `MONEYRAIN_SETTINGS`
    ///
    /// A missing variable, unreadable file or malformed JSON falls back to
    /// the defaults.
    pub fn load() -> Self {
        if let Ok(path) = std::env::var(SETTINGS_ENV) {
            match Self::from_file(&path) {
                Ok(settings) => {
                    log::info!("Loaded settings from {}", path);
                    return settings;
                }
                Err(e) => log::warn!("Ignoring settings file {}: {}", path, e),
            }
        }

        log::info!("Using default settings");
        Self::default()
    }

    /// Check that every sprite fits on the screen
    pub fn validate(&self) -> Result<(), SettingsError> {
        if self.fps == 0 {
            return Err(SettingsError::ZeroFps);
        }
        let sprites = [
            ("player", self.player_size),
            ("coin", self.coin_size),
            ("hazard", self.hazard_size),
        ];
        for (sprite, size) in sprites {
            if size.width > self.screen_width || size.height > self.screen_height {
                return Err(SettingsError::SpriteTooLarge { sprite, size });
            }
        }
        Ok(())
    }

    /// Seconds covered by one tick
    pub fn frame_seconds(&self) -> f64 {
        1.0 / self.fps as f64
    }
}
