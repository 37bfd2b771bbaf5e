//! Windowless platform
//!
//! Plays a fixed input script: sweep the player back and forth, start a new
//! game a second after each game over, and quit after a frame budget. Used by
//! the native binary and by tests.

use std::time::{Duration, Instant};

use super::Platform;
use crate::renderer::Frame;
use crate::settings::Settings;
use crate::sim::TickInput;

/// Frames spent moving in one direction before turning around
pub const SWEEP_FRAMES: u64 = 90;
/// Frames the game-over banner stays up before restarting
pub const RESTART_DELAY_FRAMES: u64 = 60;

pub struct HeadlessPlatform {
    /// Frames to play before requesting quit
    max_frames: u64,
    realtime: bool,
    /// Frames polled so far
    frame: u64,
    /// Consecutive frames that showed the game-over banner
    banner_frames: u64,
    next_deadline: Option<Instant>,
    last_frame: Option<Frame>,
    frames_presented: u64,
    game_overs: u32,
}

impl HeadlessPlatform {
    pub fn new(max_frames: u64, realtime: bool) -> Self {
        Self {
            max_frames,
            realtime,
            frame: 0,
            banner_frames: 0,
            next_deadline: None,
            last_frame: None,
            frames_presented: 0,
            game_overs: 0,
        }
    }

    pub fn from_settings(settings: &Settings) -> Self {
        Self::new(settings.headless_frames, settings.realtime)
    }

    /// Most recently presented frame
    pub fn last_frame(&self) -> Option<&Frame> {
        self.last_frame.as_ref()
    }

    pub fn frames_presented(&self) -> u64 {
        self.frames_presented
    }

    /// Number of runs that ended on a monster
    pub fn game_overs(&self) -> u32 {
        self.game_overs
    }
}

impl Platform for HeadlessPlatform {
    fn poll_input(&mut self) -> TickInput {
        let frame = self.frame;
        self.frame += 1;

        if frame >= self.max_frames {
            return TickInput {
                quit: true,
                ..Default::default()
            };
        }

        let moving_left = (frame / SWEEP_FRAMES) % 2 == 0;
        TickInput {
            left: moving_left,
            right: !moving_left,
            restart: self.banner_frames >= RESTART_DELAY_FRAMES,
            quit: false,
        }
    }

    fn present(&mut self, frame: &Frame) {
        match &frame.banner {
            Some(banner) => {
                if self.banner_frames == 0 {
                    self.game_overs += 1;
                    log::info!("{}", banner.text);
                }
                self.banner_frames += 1;
            }
            None => self.banner_frames = 0,
        }
        self.frames_presented += 1;
        self.last_frame = Some(frame.clone());
    }

    fn wait_for_next_frame(&mut self, fps: u32) {
        if !self.realtime || fps == 0 {
            return;
        }
        let step = Duration::from_secs_f64(1.0 / fps as f64);
        let now = Instant::now();
        let deadline = self.next_deadline.unwrap_or(now) + step;
        if deadline > now {
            std::thread::sleep(deadline - now);
            self.next_deadline = Some(deadline);
        } else {
            // Fell behind; don't try to catch up
            self.next_deadline = Some(now);
        }
    }
}
