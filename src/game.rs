//! Game loop
//!
//! One iteration per frame: input, simulation, draw, pace.

use crate::consts::WINDOW_TITLE;
use crate::platform::Platform;
use crate::renderer::build_frame;
use crate::settings::Settings;
use crate::sim::{GameEvent, GameState, tick};

/// Game instance holding the session and its settings
pub struct Game {
    state: GameState,
    settings: Settings,
    frames: u64,
}

impl Game {
    /// Start a session, seeding from settings or at random
    pub fn new(settings: Settings) -> Self {
        let seed = settings.seed.unwrap_or_else(rand::random);
        log::info!(
            "{} {}x{} @ {} fps, seed {}",
            WINDOW_TITLE,
            settings.screen_width,
            settings.screen_height,
            settings.fps,
            seed
        );
        Self {
            state: GameState::new(&settings, seed),
            settings,
            frames: 0,
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut GameState {
        &mut self.state
    }

    /// Frames simulated so far
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Run one frame. Returns false once quit was requested.
    pub fn step<P: Platform>(&mut self, platform: &mut P) -> bool {
        let input = platform.poll_input();
        let events = tick(&mut self.state, &input);
        if events.contains(&GameEvent::QuitRequested) {
            log::info!(
                "Quit after {} frames with {} coins",
                self.frames,
                self.state.total_money
            );
            return false;
        }

        self.frames += 1;
        platform.present(&build_frame(&self.state));
        platform.wait_for_next_frame(self.settings.fps);
        true
    }

    /// Loop until the platform asks to quit
    pub fn run<P: Platform>(&mut self, platform: &mut P) {
        while self.step(platform) {}
    }
}
