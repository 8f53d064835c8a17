use proptest::prelude::*;
use rand::{rngs::SmallRng, SeedableRng};
use std::collections::HashSet;
use trellis_console::{Cell, Fleet, ShotOutcome, NUM_SHIPS, SHIPS, TOTAL_SHIP_CELLS};

fn random_fleet(seed: u64) -> Fleet {
    let mut rng = SmallRng::seed_from_u64(seed);
    Fleet::random(&mut rng).unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn placement_invariants(seed in any::<u64>()) {
        let fleet = random_fleet(seed);
        let mut seen = HashSet::new();
        prop_assert_eq!(fleet.ships().count(), NUM_SHIPS);
        for (ship, class) in fleet.ships().zip(SHIPS) {
            prop_assert_eq!(ship.class(), class);
            let cells: Vec<Cell> = ship.cells().collect();
            prop_assert_eq!(cells.len(), class.length());
            for cell in &cells {
                prop_assert!(cell.in_interior(), "{} outside playfield", cell);
                prop_assert!(seen.insert(*cell), "{} shared by two ships", cell);
            }
            // Straight and contiguous: every step is the same unit move.
            let steps: HashSet<(i32, i32)> = cells
                .windows(2)
                .map(|w| (w[1].x - w[0].x, w[1].y - w[0].y))
                .collect();
            prop_assert!(steps.len() <= 1);
            for (dx, dy) in steps {
                prop_assert_eq!(dx.abs() + dy.abs(), 1);
            }
        }
        prop_assert_eq!(seen.len(), TOTAL_SHIP_CELLS);
        prop_assert_eq!(fleet.occupied_cells(), TOTAL_SHIP_CELLS);
    }

    #[test]
    fn raster_fire_sinks_everything(seed in any::<u64>()) {
        let mut fleet = random_fleet(seed);
        let (mut misses, mut hits, mut sunk) = (0, 0, 0);
        for y in 1..=10 {
            for x in 1..=10 {
                match fleet.take_shot(Cell::new(x, y)) {
                    ShotOutcome::Miss => misses += 1,
                    ShotOutcome::Hit => hits += 1,
                    ShotOutcome::Sunk(_) => sunk += 1,
                }
            }
        }
        prop_assert_eq!(sunk, NUM_SHIPS);
        prop_assert_eq!(hits + sunk, TOTAL_SHIP_CELLS);
        prop_assert_eq!(misses, 100 - TOTAL_SHIP_CELLS);
        prop_assert!(fleet.all_sunk());
    }

    #[test]
    fn same_seed_same_fleet(seed in any::<u64>()) {
        let a: Vec<Vec<Cell>> = random_fleet(seed).ships().map(|s| s.cells().collect()).collect();
        let b: Vec<Vec<Cell>> = random_fleet(seed).ships().map(|s| s.cells().collect()).collect();
        prop_assert_eq!(a, b);
    }
}
