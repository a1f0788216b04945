//! Random scramble generation.

use log::debug;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::algorithm::Algorithm;
use crate::moves::{Move, ALL_MOVES, NUM_MOVES};

/// Scramble length used when the caller does not ask for one.
pub const DEFAULT_SCRAMBLE_LENGTH: usize = 25;

/// Parameters to deterministically generate a scramble.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScrambleParams {
    /// Number of moves.
    pub length: usize,
    /// Seed for the move generator.
    pub seed: u64,
    /// Redraw any move that turns the same face as the move before it.
    ///
    /// Off by default, so scrambles may contain runs like `R R'`. Turning it
    /// on rules out adjacent moves that cancel or merge.
    pub avoid_same_face: bool,
}

impl ScrambleParams {
    /// Parameters for a scramble of `length` moves with a fresh random seed.
    pub fn new(length: usize) -> Self {
        Self {
            length,
            seed: rand::rng().random(),
            avoid_same_face: false,
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    pub fn avoiding_same_face(mut self, avoid_same_face: bool) -> Self {
        self.avoid_same_face = avoid_same_face;
        self
    }
}

impl Default for ScrambleParams {
    fn default() -> Self {
        Self::new(DEFAULT_SCRAMBLE_LENGTH)
    }
}

/// Generates `length` moves drawn independently and uniformly from the full
/// 18-move alphabet. Repeats are allowed.
pub fn generate_scramble(length: usize) -> Algorithm {
    scramble_with_rng(&mut rand::rng(), length, false)
}

/// Generates the scramble described by `params`. The same parameters always
/// produce the same scramble.
pub fn generate_seeded(params: &ScrambleParams) -> Algorithm {
    let mut rng = StdRng::seed_from_u64(params.seed);
    let scramble = scramble_with_rng(&mut rng, params.length, params.avoid_same_face);
    debug!("generated scramble from seed {}: {scramble}", params.seed);
    scramble
}

/// Generates a scramble from a caller-supplied random source.
pub fn scramble_with_rng<R: Rng + ?Sized>(
    rng: &mut R,
    length: usize,
    avoid_same_face: bool,
) -> Algorithm {
    let mut scramble = Algorithm::new();
    let mut previous: Option<Move> = None;

    for _ in 0..length {
        // rejection keeps the draw uniform over the allowed moves
        let mv = loop {
            let candidate = ALL_MOVES[rng.random_range(0..NUM_MOVES)];
            let repeats_face = previous.is_some_and(|prev| prev.face == candidate.face);
            if !(avoid_same_face && repeats_face) {
                break candidate;
            }
        };
        scramble.push(mv);
        previous = Some(mv);
    }

    scramble
}

#[cfg(test)]
mod tests {
    use rustc_hash::FxHashSet;

    use super::*;
    use crate::algorithm::apply_algorithm;
    use crate::cube::solved_cube;

    #[test]
    fn test_zero_length_is_empty() {
        assert!(generate_scramble(0).is_empty());
        assert!(generate_seeded(&ScrambleParams::new(0)).is_empty());
    }

    #[test]
    fn test_requested_length() {
        assert_eq!(generate_scramble(DEFAULT_SCRAMBLE_LENGTH).len(), 25);
        assert_eq!(ScrambleParams::default().length, DEFAULT_SCRAMBLE_LENGTH);
        assert_eq!(generate_scramble(7).len(), 7);
    }

    #[test]
    fn test_seeded_scrambles_are_reproducible() {
        let params = ScrambleParams::new(40).with_seed(0x5eed);
        assert_eq!(generate_seeded(&params), generate_seeded(&params));
        let other = params.with_seed(0x5eee);
        assert_ne!(generate_seeded(&params), generate_seeded(&other));
    }

    #[test]
    fn test_scramble_then_inverse_is_solved() {
        for seed in 0..20 {
            let scramble = generate_seeded(&ScrambleParams::new(25).with_seed(seed));
            let scrambled = apply_algorithm(&solved_cube(), &scramble);
            assert!(scrambled.has_consistent_color_counts());
            let restored = apply_algorithm(&scrambled, &scramble.inverse());
            assert_eq!(restored, solved_cube(), "seed {seed}: {scramble}");
        }
    }

    #[test]
    fn test_draws_cover_the_alphabet() {
        let params = ScrambleParams::new(2000).with_seed(7);
        let seen: FxHashSet<Move> = generate_seeded(&params).iter().copied().collect();
        assert_eq!(seen.len(), NUM_MOVES);
    }

    #[test]
    fn test_avoid_same_face() {
        let params = ScrambleParams::new(500)
            .with_seed(11)
            .avoiding_same_face(true);
        let scramble = generate_seeded(&params);
        assert_eq!(scramble.len(), 500);
        for pair in scramble.moves().windows(2) {
            assert_ne!(pair[0].face, pair[1].face, "{} {}", pair[0], pair[1]);
        }
    }
}
