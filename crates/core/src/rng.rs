//! RNG module - seeded randomness for tile spawns
//!
//! Every session owns exactly one [`TileRng`]. It answers the two questions a
//! spawn asks: which empty cell, and whether the new tile is a 2 or a 4.
//! Seeding it makes a whole game reproducible from the seed plus the inputs.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::types::{Cell, SPAWN_FOUR_PROBABILITY, SPAWN_FOUR_VALUE, SPAWN_TWO_VALUE};

/// Seeded generator used for cell selection and tile values
#[derive(Debug, Clone)]
pub struct TileRng {
    seed: u64,
    rng: StdRng,
}

impl TileRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Seed this generator was created with
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Uniform index in `[0, len)`; `None` when `len == 0`
    pub fn pick_index(&mut self, len: usize) -> Option<usize> {
        (len > 0).then(|| self.rng.gen_range(0..len))
    }

    /// 2 with probability 0.9, otherwise 4
    pub fn tile_value(&mut self) -> Cell {
        if self.rng.gen_bool(SPAWN_FOUR_PROBABILITY) {
            SPAWN_FOUR_VALUE
        } else {
            SPAWN_TWO_VALUE
        }
    }
}

impl Default for TileRng {
    fn default() -> Self {
        Self::new(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rng_deterministic() {
        let mut rng1 = TileRng::new(12345);
        let mut rng2 = TileRng::new(12345);

        for _ in 0..100 {
            assert_eq!(rng1.pick_index(16), rng2.pick_index(16));
            assert_eq!(rng1.tile_value(), rng2.tile_value());
        }
    }

    #[test]
    fn test_pick_index_in_range() {
        let mut rng = TileRng::new(7);
        assert_eq!(rng.pick_index(0), None);
        for len in 1..=16 {
            let idx = rng.pick_index(len).unwrap();
            assert!(idx < len);
        }
    }

    #[test]
    fn test_pick_index_is_uniform() {
        let mut rng = TileRng::new(2048);
        let mut counts = [0u32; 16];
        for _ in 0..16_000 {
            counts[rng.pick_index(16).unwrap()] += 1;
        }
        // ~1000 per cell, standard deviation ~31.
        for (cell, &n) in counts.iter().enumerate() {
            assert!((800..1200).contains(&n), "cell {cell} drawn {n} times");
        }

        let mut counts = [0u32; 3];
        for _ in 0..3_000 {
            counts[rng.pick_index(3).unwrap()] += 1;
        }
        assert!(counts.iter().all(|n| (800..1200).contains(n)), "{counts:?}");
    }

    #[test]
    fn test_tile_values_are_two_or_four() {
        let mut rng = TileRng::new(99);
        let mut fours = 0;
        for _ in 0..10_000 {
            match rng.tile_value() {
                2 => {}
                4 => fours += 1,
                other => panic!("unexpected tile {other}"),
            }
        }
        // Expect ~1000; wide bounds keep this stable across rand versions.
        assert!((600..1400).contains(&fours), "fours = {fours}");
    }

    #[test]
    fn test_seed_is_reported() {
        assert_eq!(TileRng::new(42).seed(), 42);
        assert_eq!(TileRng::default().seed(), 1);
    }
}
