//! Rule-level integration tests driven through the facade crate.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use tui_runner::core::{GameConfig, GameState, ObstacleConfig, TickEvent};
use tui_runner::types::{CellKind, MAX_OBSTACLE_HEIGHT, MIN_OBSTACLE_HEIGHT};

/// Jump whenever an obstacle sits five columns ahead on the base row, so the
/// head is at the top of its arc when the obstacle reaches the player column.
fn obstacle_ahead(state: &GameState) -> bool {
    let cfg = state.config();
    state.grid().get(cfg.base_row(), cfg.player_col + 5) == Some(CellKind::Obstacle)
}

fn obstacles_not_yet_passed(state: &GameState) -> u32 {
    let cfg = state.config();
    state.grid().row(cfg.base_row())[cfg.player_col as usize..]
        .iter()
        .filter(|k| **k == CellKind::Obstacle)
        .count() as u32
}

#[test]
fn timed_jumps_clear_every_obstacle() {
    let mut state = GameState::new(GameConfig::default()).unwrap();
    let mut rng = ChaCha8Rng::seed_from_u64(2024);
    let mut spawned = 0u32;

    for _ in 0..5000 {
        let jump = obstacle_ahead(&state);
        for event in state.tick(jump, &mut rng) {
            match event {
                TickEvent::ObstacleSpawned { .. } => spawned += 1,
                TickEvent::Collided | TickEvent::GameOver => {
                    panic!("collision at tick {}", state.ticks())
                }
                _ => {}
            }
        }
    }

    assert!(spawned > 10, "only {} obstacles in 5000 ticks", spawned);
    assert_eq!(state.score(), spawned - obstacles_not_yet_passed(&state));
}

#[test]
fn idle_player_dies_on_first_obstacle() {
    let mut state = GameState::new(GameConfig::default()).unwrap();
    let mut rng = ChaCha8Rng::seed_from_u64(5);

    let cfg = *state.config();
    let travel = u64::from(cfg.cols - 1 - cfg.player_col);
    let mut collided_at = None;
    for _ in 0..200 {
        let events = state.tick(false, &mut rng);
        if events.contains(&TickEvent::Collided) {
            collided_at = Some(state.ticks());
        }
        if state.is_stopped() {
            break;
        }
    }

    // The forced first obstacle spawns on tick 1 in the last column.
    assert_eq!(collided_at, Some(1 + travel));
    assert!(state.is_stopped());
    assert_eq!(state.score(), 0);
}

#[test]
fn spawned_heights_stay_in_range() {
    let cfg = GameConfig::default().with_obstacles(ObstacleConfig {
        min_gap: 0,
        max_gap: 0,
        ..GameConfig::default().obstacles
    });
    let mut state = GameState::new(cfg).unwrap();
    let mut rng = ChaCha8Rng::seed_from_u64(11);

    let mut heights = Vec::new();
    for _ in 0..40 {
        for event in state.tick(false, &mut rng) {
            if let TickEvent::ObstacleSpawned { height } = event {
                heights.push(height);
            }
        }
    }

    assert!(!heights.is_empty());
    assert!(heights
        .iter()
        .all(|h| (MIN_OBSTACLE_HEIGHT..=MAX_OBSTACLE_HEIGHT).contains(h)));
    assert!(heights.iter().all(|h| *h < cfg.jump.height));
}

#[test]
fn grid_invariants_hold_while_playing() {
    let mut state = GameState::new(GameConfig::default()).unwrap();
    let mut rng = ChaCha8Rng::seed_from_u64(99);
    let cfg = *state.config();
    let floor = state.grid().floor_row();
    let mut last_score = 0;

    while !state.is_stopped() && state.ticks() < 3000 {
        let jump = obstacle_ahead(&state);
        state.tick(jump, &mut rng);

        assert!(state.score() >= last_score);
        last_score = state.score();
        assert!(state.grid().row(floor).iter().all(|k| *k == CellKind::Wall));
        assert_eq!(state.grid().player_cells_in_column(cfg.player_col), 1);
        assert_eq!(
            state.grid().get(state.head_row(), cfg.player_col),
            Some(CellKind::PlayerHead)
        );
    }
}

#[test]
fn invalid_config_is_rejected() {
    assert!(GameState::new(GameConfig::default().with_jump(10, 5)).is_err());
    assert!(GameState::new(GameConfig::default().with_grid(5, 80, 20)).is_err());
}
