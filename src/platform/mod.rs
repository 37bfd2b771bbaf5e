//! Platform abstraction layer
//!
//! Handles everything outside the simulation:
//! - Input (held keys, window close)
//! - Display (painting a `Frame`)
//! - Frame pacing

pub mod headless;

pub use headless::HeadlessPlatform;

use crate::renderer::Frame;
use crate::sim::TickInput;

/// A window, terminal or test harness the game runs against
pub trait Platform {
    /// Current key state. Window close maps to `quit`.
    fn poll_input(&mut self) -> TickInput;

    /// Paint a finished frame
    fn present(&mut self, frame: &Frame);

    /// Block until the next tick boundary at `fps`
    fn wait_for_next_frame(&mut self, fps: u32);
}
