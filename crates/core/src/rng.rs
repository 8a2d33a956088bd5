//! RNG module - uniform random piece generation
//!
//! Each draw picks one catalog shape with equal probability, independent of
//! history (no bag). The generator is seeded so games are reproducible.

use log::warn;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::pieces::{catalog, fallback_shape, Piece, Shape};

/// Spawns pieces for a board of a given width
#[derive(Debug, Clone)]
pub struct PieceGenerator {
    catalog: Vec<Shape>,
    board_width: usize,
    seed: u64,
    rng: StdRng,
}

impl PieceGenerator {
    /// Generator over the standard seven-piece catalog
    pub fn new(seed: u64, board_width: usize) -> Self {
        Self::with_catalog(catalog(), seed, board_width)
    }

    /// Generator over an arbitrary catalog
    pub fn with_catalog(catalog: Vec<Shape>, seed: u64, board_width: usize) -> Self {
        Self {
            catalog,
            board_width,
            seed,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Draw a new piece at its spawn position.
    ///
    /// Never fails: an empty catalog, or a chosen shape with no blocks, yields
    /// the single-block fallback at (0, 0).
    pub fn draw(&mut self) -> Piece {
        if self.catalog.is_empty() {
            warn!("piece catalog is empty, using fallback piece");
            return fallback_piece();
        }

        let index = self.rng.gen_range(0..self.catalog.len());
        let shape = &self.catalog[index];
        let Some(color) = shape.color_tag() else {
            warn!("catalog shape {} has no blocks, using fallback piece", index);
            return fallback_piece();
        };

        Piece::new(spawn_x(self.board_width, shape), 0, shape.clone(), color)
    }
}

/// Column where a shape spawns: centred, rounding toward the left
pub fn spawn_x(board_width: usize, shape: &Shape) -> i32 {
    (board_width / 2) as i32 - (shape.width() / 2) as i32
}

/// Single-block piece at the top-left corner
pub fn fallback_piece() -> Piece {
    Piece::new(0, 0, fallback_shape(), 1)
}
