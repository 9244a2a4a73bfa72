use reelcheck_sim::core::config::{FishParams, MinigameTunables, Modifiers};
use reelcheck_sim::core::enums::{FishState, Outcome, SessionPhase};
use reelcheck_sim::core::events::MinigameEvent;
use reelcheck_sim::{Minigame, SimConfig};

/// Tunables that pin both markers in place: the fish can barely move and the
/// hook has neither thrust nor gravity.
fn frozen_tunables(hook_start: f64) -> MinigameTunables {
    MinigameTunables {
        fish_max_velocity: 1e-9,
        hook_acceleration: 0.0,
        hook_gravity: 0.0,
        hook_start,
        fish_start: 0.5,
        ..Default::default()
    }
}

fn calm_fish() -> FishParams {
    FishParams {
        jumpiness: 0.0,
        ..Default::default()
    }
}

#[test]
fn test_hook_sinks_to_bottom_without_reeling() {
    let tunables = MinigameTunables {
        hook_gravity: 1.0,
        hook_max_velocity: 2.0,
        hook_start: 0.8,
        catch_rate: 0.0,
        escape_rate: 0.0,
        ..Default::default()
    };
    let mut game = Minigame::new(SimConfig { seed: 3, tunables });
    game.start(FishParams::default(), Modifiers::default())
        .unwrap();

    let mut snapshot = game.snapshot();
    for _ in 0..300 {
        snapshot = game.step(1.0 / 60.0, false).unwrap();
    }
    assert_eq!(snapshot.phase, SessionPhase::Active);
    assert!((snapshot.hook_position - 0.135).abs() < 0.01);
    assert!(snapshot.hook_velocity.abs() < 0.05);
}

#[test]
fn test_overlap_catches_fish() {
    let tunables = MinigameTunables {
        catch_rate: 0.5,
        ..frozen_tunables(0.5)
    };
    let mut game = Minigame::new(SimConfig { seed: 11, tunables });
    game.start(calm_fish(), Modifiers::default()).unwrap();

    for step in 1..=16 {
        let snapshot = game.step(0.125, false).unwrap();
        assert!(snapshot.is_catching);
        assert_eq!(snapshot.hook_position, 0.5);
        if step < 16 {
            assert_eq!(snapshot.phase, SessionPhase::Active);
        }
    }

    let snapshot = game.snapshot();
    assert_eq!(snapshot.phase, SessionPhase::Caught);
    assert_eq!(snapshot.progress, 1.0);
    assert_eq!(snapshot.fish_state, FishState::Caught);
    assert_eq!(snapshot.success_fraction(), 1.0);
    assert_eq!(game.outcome(), Some(Outcome::Caught));

    let events = game.drain_events();
    assert_eq!(events.len(), 1);
    match &events[0] {
        MinigameEvent::FishCaught { items } => {
            assert_eq!(items.len(), 1);
            assert_eq!(items[0].fish_id, "default_fish");
            assert!((1.0..=2.0).contains(&items[0].weight));
        }
        other => panic!("expected FishCaught, got {other:?}"),
    }

    // Further steps are no-ops
    for _ in 0..60 {
        assert_eq!(game.step(0.125, true).unwrap(), snapshot);
    }
    assert!(game.drain_events().is_empty());
}

#[test]
fn test_distance_lets_fish_escape() {
    let tunables = MinigameTunables {
        escape_rate: 0.5,
        ..frozen_tunables(0.0)
    };
    let mut game = Minigame::new(SimConfig { seed: 12, tunables });
    game.start(calm_fish(), Modifiers::default()).unwrap();
    assert!((game.snapshot().hook_position - 0.135).abs() < 1e-12);

    let mut snapshot = game.snapshot();
    for _ in 0..8 {
        snapshot = game.step(0.25, false).unwrap();
        assert!(!snapshot.is_catching);
    }
    assert_eq!(snapshot.phase, SessionPhase::Escaped);
    assert_eq!(snapshot.progress, -1.0);
    assert_eq!(snapshot.elapsed_secs, 2.0);
    assert_eq!(snapshot.fish_state, FishState::Escaped);
    assert_eq!(game.drain_events(), vec![MinigameEvent::FishEscaped]);

    for _ in 0..20 {
        let later = game.step(0.25, true).unwrap();
        assert_eq!(later.fish_position, snapshot.fish_position);
        assert_eq!(later.hook_position, snapshot.hook_position);
        assert_eq!(later.progress, -1.0);
    }
    assert!(game.drain_events().is_empty());
    assert_eq!(game.stats().escaped, 1);
}

#[test]
fn test_cancel_mid_session() {
    let mut game = Minigame::new(SimConfig::with_seed(99));
    game.start(FishParams::default(), Modifiers::default())
        .unwrap();
    for i in 0..90 {
        game.step(1.0 / 60.0, i % 3 == 0).unwrap();
    }
    let before = game.snapshot();
    game.cancel();

    let after = game.step(1.0 / 60.0, true).unwrap();
    assert_eq!(after.phase, SessionPhase::Cancelled);
    assert_eq!(after.progress, before.progress);
    assert_eq!(after.fish_position, before.fish_position);
    assert_eq!(after.step, before.step);
    assert!(game.drain_events().is_empty());
    assert_eq!(game.outcome(), Some(Outcome::Cancelled));
}

#[test]
fn test_catch_lands_extra_fish() {
    let tunables = MinigameTunables {
        catch_rate: 0.5,
        ..frozen_tunables(0.5)
    };
    let fish = FishParams {
        id: "sardine".to_string(),
        min_amount: 2,
        max_amount: 3,
        ..calm_fish()
    };
    let mut game = Minigame::new(SimConfig { seed: 8, tunables });
    game.start(fish, Modifiers::default()).unwrap();
    let expected = game.session().unwrap().catch_yield.amount;

    for _ in 0..16 {
        game.step(0.125, false).unwrap();
    }
    let events = game.drain_events();
    let MinigameEvent::FishCaught { items } = &events[0] else {
        panic!("expected FishCaught, got {events:?}");
    };
    assert_eq!(items.len(), expected as usize);
    assert!((2..=3).contains(&items.len()));
    assert!(items.iter().all(|item| item.fish_id == "sardine"));
    assert_eq!(game.stats().items_landed, expected);
}

#[test]
fn test_wider_catch_area_narrows_hook_range() {
    let tunables = frozen_tunables(0.0);
    let modifiers = Modifiers {
        catch_area: 1.5,
        ..Default::default()
    };
    let mut game = Minigame::new(SimConfig { seed: 1, tunables });
    game.start(calm_fish(), modifiers).unwrap();
    let snapshot = game.snapshot();
    assert!((snapshot.half_catch_window - 0.1875).abs() < 1e-12);
    assert!((snapshot.hook_position - 0.1975).abs() < 1e-12);
}
