//! Property tests for the algebraic contracts of the grid, the pheromone
//! field, and food harvesting.

use formicarium_lib::model::config::AppConfig;
use formicarium_lib::model::state::food::{FoodField, FoodKind};
use formicarium_lib::model::state::grid::WorldGrid;
use formicarium_lib::model::state::pheromone::{PheromoneField, PheromoneKind};
use proptest::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    #[test]
    fn prop_out_of_bounds_dig_never_changes_grid(x in -50i32..70, y in -50i32..70) {
        let mut grid = WorldGrid::new(20, 10);
        let before = grid.occupancy();
        if !grid.in_bounds(x, y) {
            grid.dig(x, y);
            prop_assert_eq!(grid.occupancy(), before);
        }
    }

    #[test]
    fn prop_dig_twice_equals_dig_once(x in 0i32..20, y in 0i32..10) {
        let mut once = WorldGrid::new(20, 10);
        once.dig(x, y);
        let mut twice = WorldGrid::new(20, 10);
        twice.dig(x, y);
        twice.dig(x, y);
        prop_assert_eq!(once.occupancy(), twice.occupancy());
    }

    #[test]
    fn prop_decay_is_monotone_and_culls_below_threshold(
        strength in 0.11f32..1.0,
        dt in 0.01f32..0.5,
        steps in 1usize..200,
    ) {
        let config = AppConfig::default().pheromone;
        let mut field = PheromoneField::new();
        field.deposit(0, 0, PheromoneKind::Food, strength, &config);

        let mut last = strength;
        for _ in 0..steps {
            field.decay_step(dt, &config);
            match field.markers().first() {
                Some(m) => {
                    prop_assert!(m.strength < last);
                    prop_assert!(m.strength > config.cull_threshold);
                    last = m.strength;
                }
                None => break,
            }
        }
    }

    #[test]
    fn prop_harvest_before_maturity_yields_zero(
        requested in 0.0f32..100.0,
        grow_seconds in 0.0f32..11.9,
    ) {
        let config = AppConfig::default().food;
        let mut rng = ChaCha8Rng::seed_from_u64(0);
        let mut field = FoodField::new();
        let id = field.spawn(0.0, 0.0, Some(FoodKind::Leaf), &config, &mut rng);

        // Strictly less than max_stage * growth_time of growth.
        let mut remaining = grow_seconds;
        while remaining > 0.0 {
            let step = remaining.min(0.05);
            field.update(step, &config);
            remaining -= step;
        }
        if field.sources()[0].growth_stage < config.max_stage {
            let before = field.sources()[0].amount;
            prop_assert_eq!(field.harvest(id, requested, &config), 0.0);
            prop_assert_eq!(field.sources()[0].amount, before);
        }
    }

    #[test]
    fn prop_neighbors_are_permutation_of_cardinals(
        x in 0i32..20,
        y in 0i32..10,
        seed in 0u64..1000,
    ) {
        let grid = WorldGrid::new(20, 10);
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let mut neighbors = grid.neighbors4(x, y, &mut rng);
        neighbors.sort_unstable();
        let mut expected: Vec<(i32, i32)> = [(0, -1), (0, 1), (-1, 0), (1, 0)]
            .iter()
            .map(|(dx, dy)| (x + dx, y + dy))
            .filter(|&(nx, ny)| grid.in_bounds(nx, ny))
            .collect();
        expected.sort_unstable();
        prop_assert_eq!(neighbors, expected);
    }
}
