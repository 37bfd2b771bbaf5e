//! Moneyrain entry point
//!
//! Loads settings and runs the game against the headless platform.

use std::process::ExitCode;

use moneyrain::platform::HeadlessPlatform;
use moneyrain::{Game, Settings};

fn main() -> ExitCode {
    env_logger::init();
    log::info!("Moneyrain (native) starting...");

    let settings = Settings::load();
    if let Err(e) = settings.validate() {
        log::error!("Invalid settings: {}", e);
        return ExitCode::FAILURE;
    }

    let mut platform = HeadlessPlatform::from_settings(&settings);
    let mut game = Game::new(settings);
    game.run(&mut platform);

    log::info!(
        "Played {} frames, {} game over(s), final money {}",
        game.frames(),
        platform.game_overs(),
        game.state().total_money
    );
    ExitCode::SUCCESS
}
