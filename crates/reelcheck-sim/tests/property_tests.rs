use proptest::prelude::*;

use reelcheck_sim::core::config::{FishParams, MinigameTunables, Modifiers};
use reelcheck_sim::core::enums::SessionPhase;
use reelcheck_sim::core::state::MinigameSnapshot;
use reelcheck_sim::{Minigame, SimConfig};

const EPS: f64 = 1e-12;

proptest! {
    #[test]
    fn markers_progress_and_speed_stay_bounded(
        seed in any::<u64>(),
        inputs in prop::collection::vec(any::<bool>(), 1..400),
        dt in 0.001f64..0.1,
        speed in 0.2f64..3.0,
        jumpiness in 0.0f64..3.0,
    ) {
        let tunables = MinigameTunables::default();
        let mut game = Minigame::new(SimConfig { seed, tunables: tunables.clone() });
        let fish = FishParams { speed, jumpiness, ..Default::default() };
        game.start(fish, Modifiers::default()).unwrap();

        for reel in inputs {
            let s = game.step(dt, reel).unwrap();
            prop_assert!((0.0..=1.0).contains(&s.fish_position));
            prop_assert!((0.0..=1.0).contains(&s.hook_position));
            prop_assert!(s.fish_velocity.abs() <= tunables.fish_max_velocity + EPS);
            prop_assert!(s.hook_velocity.abs() <= tunables.hook_max_velocity + EPS);
            prop_assert!((-1.0..=1.0).contains(&s.progress));
        }
    }

    #[test]
    fn catch_window_stays_on_track(
        seed in any::<u64>(),
        catch_area in 0.1f64..3.0,
        inputs in prop::collection::vec(any::<bool>(), 1..200),
    ) {
        let mut game = Minigame::new(SimConfig::with_seed(seed));
        let modifiers = Modifiers { catch_area, ..Default::default() };
        game.start(FishParams::default(), modifiers).unwrap();

        for reel in inputs {
            let s = game.step(1.0 / 60.0, reel).unwrap();
            prop_assert!(s.hook_position - s.half_catch_window >= -EPS);
            prop_assert!(s.hook_position + s.half_catch_window <= 1.0 + EPS);
        }
    }

    #[test]
    fn terminal_sessions_never_change(
        seed in any::<u64>(),
        inputs in prop::collection::vec(any::<bool>(), 1..200),
    ) {
        // Fast rates so most runs finish inside the input sequence
        let tunables = MinigameTunables {
            catch_rate: 2.0,
            escape_rate: 2.0,
            ..Default::default()
        };
        let mut game = Minigame::new(SimConfig { seed, tunables });
        game.start(FishParams::default(), Modifiers::default()).unwrap();

        let mut finished: Option<MinigameSnapshot> = None;
        let mut events = 0;
        for reel in inputs {
            let s = game.step(0.05, reel).unwrap();
            events += game.drain_events().len();
            if let Some(last) = &finished {
                prop_assert_eq!(&s, last);
            } else if s.phase.is_finished() {
                prop_assert!(s.progress == 1.0 || s.progress == -1.0);
                prop_assert!(s.fish_state.is_terminal());
                finished = Some(s);
            } else {
                prop_assert_eq!(s.phase, SessionPhase::Active);
            }
        }
        prop_assert_eq!(events, usize::from(finished.is_some()));
    }
}
