//! 7-bag randomizer for piece generation
//!
//! All 7 pieces are shuffled, then dealt out before reshuffling, so every
//! stretch of 7 draws starting at a bag boundary holds one of each piece.

use crate::geometry::Shape;
use crate::tetromino::TetrominoType;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Return all 7 canonical shapes in a uniformly random order
pub fn shuffled_bag<R: Rng + ?Sized>(rng: &mut R) -> Vec<Shape> {
    let mut kinds = TetrominoType::all();
    kinds.shuffle(rng);
    kinds.iter().map(TetrominoType::shape).collect()
}

/// The 7-bag piece randomizer
#[derive(Debug, Clone)]
pub struct Bag {
    /// Remaining pieces of the current bag, dealt from the back
    pieces: Vec<Shape>,
    rng: ChaCha8Rng,
}

impl Default for Bag {
    fn default() -> Self {
        Self::new()
    }
}

impl Bag {
    /// Create a bag seeded from entropy
    pub fn new() -> Self {
        Self::with_seed(rand::random())
    }

    /// Create a bag with a fixed seed for a reproducible sequence
    pub fn with_seed(seed: u64) -> Self {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let pieces = shuffled_bag(&mut rng);
        Self { pieces, rng }
    }

    /// Take the next piece, reshuffling a full bag first when empty
    pub fn draw(&mut self) -> Shape {
        loop {
            if let Some(shape) = self.pieces.pop() {
                return shape;
            }
            self.pieces = shuffled_bag(&mut self.rng);
        }
    }

    /// Discard what is left and deal a freshly shuffled bag
    pub fn reset(&mut self) {
        self.pieces = shuffled_bag(&mut self.rng);
    }

    /// Pieces left before the next reshuffle
    pub fn remaining(&self) -> usize {
        self.pieces.len()
    }
}
