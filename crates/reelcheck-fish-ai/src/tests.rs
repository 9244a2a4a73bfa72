#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    use reelcheck_core::config::{FishMultipliers, FishParams, MinigameTunables};
    use reelcheck_core::enums::FishState;

    use crate::fsm::*;
    use crate::profiles::{get_profile, FishBehaviorProfile};

    fn profile() -> FishBehaviorProfile {
        get_profile(&FishParams::default(), &FishMultipliers::default())
    }

    fn make_context(state: FishState, position: f64, elapsed: f64, duration: f64) -> FishContext {
        FishContext {
            state,
            position,
            time_in_state: elapsed,
            state_duration: duration,
            distance_traveled: 0.0,
            max_move_distance: 0.3,
        }
    }

    // ---- Profiles ----

    #[test]
    fn test_profile_applies_multipliers() {
        let fish = FishParams {
            speed: 0.8,
            jumpiness: 0.5,
            stubbornness: 0.25,
            size: 2.0,
            ..Default::default()
        };
        let multipliers = FishMultipliers {
            speed: 1.5,
            jumpiness: 2.0,
            stubbornness: 4.0,
            size: 0.5,
        };
        let p = get_profile(&fish, &multipliers);
        assert!((p.speed - 1.2).abs() < 1e-12);
        assert!((p.jumpiness - 1.0).abs() < 1e-12);
        assert!((p.stubbornness - 1.0).abs() < 1e-12);
        assert!((p.size - 1.0).abs() < 1e-12);
        // speed / (1 + size)
        assert!((p.struggle_deceleration() - 0.6).abs() < 1e-12);
        assert!((p.duration_scale() - 2.0).abs() < 1e-12);
    }

    #[test]
    fn test_heavier_fish_decelerate_slower() {
        let light = FishBehaviorProfile {
            size: 0.0,
            ..profile()
        };
        let heavy = FishBehaviorProfile {
            size: 3.0,
            ..profile()
        };
        assert!(heavy.struggle_deceleration() < light.struggle_deceleration());
    }

    // ---- Weighted selection ----

    #[test]
    fn test_state_weights_bias_away_from_boundary() {
        assert_eq!(state_weights(0.0), (1.0, 0.0, 1.0));
        assert_eq!(state_weights(1.0), (0.0, 1.0, 1.0));
        assert_eq!(state_weights(0.5), (0.5, 0.5, 1.0));
    }

    #[test]
    fn test_select_state_cumulative() {
        // up = 0.7, down = 0.3, struggle = 1.0
        assert_eq!(select_state(0.3, 0.0), FishState::Up);
        assert_eq!(select_state(0.3, 0.69), FishState::Up);
        assert_eq!(select_state(0.3, 0.7), FishState::Down);
        assert_eq!(select_state(0.3, 0.99), FishState::Down);
        assert_eq!(select_state(0.3, 1.0), FishState::Struggling);
        assert_eq!(select_state(0.3, 2.0), FishState::Struggling);
    }

    #[test]
    fn test_fish_at_top_never_chooses_up() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        for _ in 0..1000 {
            assert_ne!(choose_state(1.0, &mut rng), FishState::Up);
        }
    }

    #[test]
    fn test_fish_at_bottom_never_chooses_down() {
        let mut rng = ChaCha8Rng::seed_from_u64(8);
        for _ in 0..1000 {
            assert_ne!(choose_state(0.0, &mut rng), FishState::Down);
        }
    }

    #[test]
    fn test_choice_frequencies_follow_weights() {
        let mut rng = ChaCha8Rng::seed_from_u64(99);
        let mut struggles = 0;
        let trials = 10_000;
        for _ in 0..trials {
            if choose_state(0.5, &mut rng) == FishState::Struggling {
                struggles += 1;
            }
        }
        // Struggle holds half the total weight everywhere on the track
        let ratio = struggles as f64 / trials as f64;
        assert!((ratio - 0.5).abs() < 0.05, "struggle ratio was {ratio}");
    }

    // ---- Duration-based transition ----

    #[test]
    fn test_no_transition_before_budget() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let ctx = make_context(FishState::Up, 0.5, 0.5, 2.0);
        let update = evaluate_transition(&ctx, &profile(), &MinigameTunables::default(), &mut rng);
        assert!(update.is_none());
    }

    #[test]
    fn test_terminal_states_never_transition() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        for state in [FishState::Caught, FishState::Escaped] {
            let ctx = make_context(state, 0.5, 100.0, 0.0);
            let update =
                evaluate_transition(&ctx, &profile(), &MinigameTunables::default(), &mut rng);
            assert!(update.is_none());
        }
    }

    #[test]
    fn test_transition_draws_budgets_in_range() {
        let tunables = MinigameTunables::default();
        let p = profile();
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let mut changes = 0;
        for _ in 0..200 {
            let ctx = make_context(FishState::Struggling, 0.4, 3.0, 3.0);
            if let Some(entry) = evaluate_transition(&ctx, &p, &tunables, &mut rng) {
                changes += 1;
                assert_ne!(entry.state, FishState::Struggling);
                assert!(!entry.forced);
                // uniform(1, 3) * (1 + stubbornness)
                assert!(entry.duration >= 2.0 && entry.duration <= 6.0);
                assert!(tunables.move_distance().contains(entry.max_move_distance));
            }
        }
        assert!(changes > 0, "some draws should leave Struggling");
    }

    // ---- Travel cap ----

    #[test]
    fn test_travel_cap_forces_struggle() {
        let tunables = MinigameTunables::default();
        let mut rng = ChaCha8Rng::seed_from_u64(5);
        let mut ctx = make_context(FishState::Up, 0.8, 0.1, 10.0);
        ctx.distance_traveled = 0.3;
        let entry = evaluate_travel_cap(&ctx, &profile(), &tunables, &mut rng).unwrap();
        assert_eq!(entry.state, FishState::Struggling);
        assert!(entry.forced);
        // uniform(0.5, 1.5) * (1 + stubbornness)
        assert!(entry.duration >= 1.0 && entry.duration <= 3.0);
    }

    #[test]
    fn test_travel_cap_not_reached() {
        let mut rng = ChaCha8Rng::seed_from_u64(5);
        let mut ctx = make_context(FishState::Down, 0.5, 0.1, 10.0);
        ctx.distance_traveled = 0.29;
        assert!(
            evaluate_travel_cap(&ctx, &profile(), &MinigameTunables::default(), &mut rng)
                .is_none()
        );
    }

    #[test]
    fn test_travel_cap_ignores_struggling() {
        let mut rng = ChaCha8Rng::seed_from_u64(5);
        let mut ctx = make_context(FishState::Struggling, 0.5, 0.1, 10.0);
        ctx.distance_traveled = 5.0;
        assert!(
            evaluate_travel_cap(&ctx, &profile(), &MinigameTunables::default(), &mut rng)
                .is_none()
        );
    }

    // ---- Wriggle ----

    #[test]
    fn test_wriggle_impulse_bounded() {
        let tunables = MinigameTunables::default();
        let p = profile();
        let bound = tunables.fish_max_velocity * tunables.wriggle_strength * p.jumpiness;
        let mut rng = ChaCha8Rng::seed_from_u64(11);
        for _ in 0..1000 {
            let impulse = wriggle_impulse(&p, &tunables, &mut rng);
            assert!(impulse.abs() <= bound);
        }
    }

    #[test]
    fn test_calm_fish_never_wriggles() {
        let p = FishBehaviorProfile {
            jumpiness: 0.0,
            ..profile()
        };
        let mut rng = ChaCha8Rng::seed_from_u64(11);
        assert_eq!(wriggle_impulse(&p, &MinigameTunables::default(), &mut rng), 0.0);
    }

    #[test]
    fn test_wriggle_interval_in_range() {
        let tunables = MinigameTunables::default();
        let mut rng = ChaCha8Rng::seed_from_u64(12);
        for _ in 0..1000 {
            let interval = draw_wriggle_interval(&tunables, &mut rng);
            assert!(tunables.wriggle_interval.contains(interval));
        }
    }

    #[test]
    fn test_sample_degenerate_span() {
        let mut rng = ChaCha8Rng::seed_from_u64(0);
        let span = reelcheck_core::types::Span::new(0.3, 0.3);
        assert_eq!(sample_span(span, &mut rng), 0.3);
    }
}
