//! Property tests over arbitrary input sequences

use glam::Vec2;
use proptest::prelude::*;

use moneyrain::Settings;
use moneyrain::consts::{FALL_SPEED_STEP, START_FALL_SPEED};
use moneyrain::sim::{EntityKind, GameEvent, GameState, SpawnRoll, TickInput, tick_with_roll};

fn input_strategy() -> impl Strategy<Value = TickInput> {
    (any::<bool>(), any::<bool>(), prop::bool::weighted(0.02)).prop_map(|(left, right, restart)| {
        TickInput {
            left,
            right,
            restart,
            quit: false,
        }
    })
}

fn roll_strategy() -> impl Strategy<Value = SpawnRoll> {
    prop_oneof![
        Just(SpawnRoll::Random),
        (0.0f64..300.0).prop_map(SpawnRoll::Fixed),
    ]
}

proptest! {
    #[test]
    fn player_stays_on_screen(
        seed in any::<u64>(),
        inputs in prop::collection::vec(input_strategy(), 1..400),
    ) {
        let settings = Settings::default();
        let max_x = settings.screen_width - settings.player_size.width;
        let mut state = GameState::new(&settings, seed);
        for input in &inputs {
            tick_with_roll(&mut state, input, SpawnRoll::Random);
            prop_assert!(state.player.pos.x >= 0.0);
            prop_assert!(state.player.pos.x <= max_x);
            prop_assert_eq!(state.player.pos.y, settings.screen_height - settings.player_size.height);
        }
    }

    #[test]
    fn fall_speed_steps_while_running(
        seed in any::<u64>(),
        steps in prop::collection::vec((input_strategy(), roll_strategy()), 1..300),
    ) {
        let mut state = GameState::new(&Settings::default(), seed);
        for (input, roll) in &steps {
            let before = state.fall_speed;
            let was_running = state.is_running();
            let events = tick_with_roll(&mut state, input, *roll);
            if events.contains(&GameEvent::Restarted) {
                prop_assert!((state.fall_speed - START_FALL_SPEED - FALL_SPEED_STEP).abs() < 1e-6);
            } else if was_running {
                prop_assert!(state.fall_speed > before);
                prop_assert!((state.fall_speed - before - FALL_SPEED_STEP).abs() < 1e-12);
            } else {
                prop_assert_eq!(state.fall_speed, before);
            }
        }
    }

    #[test]
    fn frozen_after_game_over(
        seed in any::<u64>(),
        inputs in prop::collection::vec(input_strategy(), 1..100),
    ) {
        let mut state = GameState::new(&Settings::default(), seed);
        let pos = state.player.pos;
        state.spawn_at(EntityKind::Hazard, pos);
        tick_with_roll(&mut state, &TickInput::default(), SpawnRoll::Fixed(300.0));
        prop_assert!(!state.is_running());

        let speed = state.fall_speed;
        let money = state.total_money;
        for input in inputs.iter().filter(|i| !i.restart) {
            tick_with_roll(&mut state, input, SpawnRoll::Random);
            prop_assert!(!state.is_running());
            prop_assert_eq!(state.fall_speed, speed);
            prop_assert_eq!(state.total_money, money);
        }
    }

    #[test]
    fn removal_only_by_leaving_catch_or_reset(
        seed in any::<u64>(),
        inputs in prop::collection::vec(input_strategy(), 1..300),
    ) {
        let mut state = GameState::new(&Settings::default(), seed);
        state.spawn_at(EntityKind::Coin, Vec2::new(0.0, -32.0));
        for input in &inputs {
            let before: Vec<u64> = state.entities.iter().map(|e| e.id).collect();
            let events = tick_with_roll(&mut state, input, SpawnRoll::Random);
            let restarted = events.contains(&GameEvent::Restarted);
            for id in before {
                if state.entity(id).is_some() {
                    continue;
                }
                let explained = restarted
                    || events.contains(&GameEvent::LeftScreen { id })
                    || events.contains(&GameEvent::CoinCollected { id });
                prop_assert!(explained, "entity {} vanished without cause", id);
            }
            for entity in &state.entities {
                prop_assert!(entity.pos.y <= state.screen_height);
            }
        }
    }
}
