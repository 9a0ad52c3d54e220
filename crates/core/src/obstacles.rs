//! Obstacle generator - gap-and-height randomized spawner
//!
//! Runs once per tick after the grid scrolls. A new obstacle column is placed
//! in the rightmost column when either
//! - the gap since the last obstacle exceeds `max_gap` (forced spawn), or
//! - the gap exceeds `min_gap` and a percentile draw in `[0, 100)` falls under
//!   `spawn_chance`.
//!
//! The random draw only happens on eligible ticks, so a seeded RNG replays the
//! same obstacle course for the same inputs.

use rand::Rng;

use crate::config::ObstacleConfig;
use crate::grid::TileGrid;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObstacleGenerator {
    /// Ticks since the last spawn (saturating)
    distance: u32,
}

impl Default for ObstacleGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl ObstacleGenerator {
    /// A fresh generator. The gap starts saturated, so the first tick spawns.
    pub fn new() -> Self {
        Self::with_distance(u32::MAX)
    }

    pub fn with_distance(distance: u32) -> Self {
        Self { distance }
    }

    pub fn distance(&self) -> u32 {
        self.distance
    }

    /// Decide whether this tick spawns an obstacle.
    pub fn should_spawn<R: Rng>(&self, config: &ObstacleConfig, rng: &mut R) -> bool {
        if self.distance > config.max_gap {
            return true;
        }
        self.distance > config.min_gap && rng.gen_range(0..100) < config.spawn_chance
    }

    /// Run one tick of the generator against `grid`.
    ///
    /// Returns the height of the spawned obstacle, if any.
    pub fn update<R: Rng>(
        &mut self,
        config: &ObstacleConfig,
        grid: &mut TileGrid,
        rng: &mut R,
    ) -> Option<u32> {
        if !self.should_spawn(config, rng) {
            self.distance = self.distance.saturating_add(1);
            return None;
        }

        let height = rng.gen_range(config.min_height..=config.max_height);
        grid.place_obstacle(height as u16);
        self.distance = 0;
        Some(height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::CellKind;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn never_random() -> ObstacleConfig {
        ObstacleConfig {
            min_gap: 11,
            max_gap: 80,
            spawn_chance: 0,
            ..ObstacleConfig::default()
        }
    }

    #[test]
    fn first_tick_spawns() {
        let mut spawner = ObstacleGenerator::new();
        let mut grid = TileGrid::new(10, 20);
        let mut rng = ChaCha8Rng::seed_from_u64(1);

        let height = spawner.update(&ObstacleConfig::default(), &mut grid, &mut rng);
        assert!(height.is_some());
        assert_eq!(spawner.distance(), 0);
        assert_eq!(grid.get(8, 19), Some(CellKind::Obstacle));
    }

    #[test]
    fn gap_past_max_forces_spawn_regardless_of_draw() {
        let config = never_random();
        let mut rng = ChaCha8Rng::seed_from_u64(7);

        let spawner = ObstacleGenerator::with_distance(80);
        assert!(!spawner.should_spawn(&config, &mut rng));

        let mut spawner = ObstacleGenerator::with_distance(81);
        let mut grid = TileGrid::new(10, 20);
        assert!(spawner.update(&config, &mut grid, &mut rng).is_some());
        assert_eq!(spawner.distance(), 0);
    }

    #[test]
    fn no_spawn_below_min_gap_even_at_full_chance() {
        let config = ObstacleConfig {
            spawn_chance: 100,
            ..never_random()
        };
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        for d in 0..=11 {
            assert!(!ObstacleGenerator::with_distance(d).should_spawn(&config, &mut rng));
        }
        assert!(ObstacleGenerator::with_distance(12).should_spawn(&config, &mut rng));
    }

    #[test]
    fn counter_increments_without_spawn() {
        let config = never_random();
        let mut spawner = ObstacleGenerator::with_distance(0);
        let mut grid = TileGrid::new(10, 20);
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        for expected in 1..=5 {
            assert_eq!(spawner.update(&config, &mut grid, &mut rng), None);
            assert_eq!(spawner.distance(), expected);
        }
    }

    #[test]
    fn gap_never_exceeds_max_by_more_than_one() {
        let config = never_random();
        let mut spawner = ObstacleGenerator::new();
        let mut grid = TileGrid::new(10, 20);
        let mut rng = ChaCha8Rng::seed_from_u64(11);

        spawner.update(&config, &mut grid, &mut rng);
        for _ in 0..500 {
            spawner.update(&config, &mut grid, &mut rng);
            assert!(spawner.distance() <= config.max_gap + 1);
        }
    }

    #[test]
    fn heights_stay_in_configured_range() {
        let config = ObstacleConfig {
            min_gap: 0,
            max_gap: 0,
            ..ObstacleConfig::default()
        };
        let mut spawner = ObstacleGenerator::new();
        let mut grid = TileGrid::new(10, 20);
        let mut rng = ChaCha8Rng::seed_from_u64(42);

        let mut seen = [false; 5];
        for _ in 0..400 {
            let h = spawner.update(&config, &mut grid, &mut rng);
            if let Some(h) = h {
                assert!((config.min_height..=config.max_height).contains(&h));
                seen[h as usize] = true;
            }
        }
        assert!(seen[1..=4].iter().all(|s| *s), "all heights drawn: {:?}", seen);
    }
}
