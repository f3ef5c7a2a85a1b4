use std::sync::Arc;

use rand::{rngs::StdRng, seq::SliceRandom, SeedableRng};

use crate::{models::Tile, utils::letters::LetterDistribution};

/// The bag of undrawn tiles.
///
/// Order is randomised with a uniform Fisher-Yates shuffle on every fill
/// and every return, so draws never correlate with earlier history.
#[derive(Debug, Clone)]
pub struct TileSupply {
    distribution: Arc<LetterDistribution>,
    bag: Vec<Tile>,
    rng: StdRng,
}

impl TileSupply {
    /// A full, shuffled bag seeded from the operating system.
    pub fn new(distribution: Arc<LetterDistribution>) -> Self {
        Self::with_rng(distribution, StdRng::from_os_rng())
    }

    /// A full bag whose shuffles are reproducible.
    pub fn with_seed(distribution: Arc<LetterDistribution>, seed: u64) -> Self {
        Self::with_rng(distribution, StdRng::seed_from_u64(seed))
    }

    fn with_rng(distribution: Arc<LetterDistribution>, rng: StdRng) -> Self {
        let mut supply = Self {
            distribution,
            bag: Vec::new(),
            rng,
        };
        supply.initialize();
        supply
    }

    /// Refill the bag with the whole distribution and shuffle it.
    pub fn initialize(&mut self) {
        self.bag = self.distribution.tiles();
        self.bag.shuffle(&mut self.rng);
        tracing::debug!("Tile bag filled with {} tiles", self.bag.len());
    }

    /// Take up to `count` tiles off the front of the bag. Asking for more
    /// than remain hands back whatever is left.
    pub fn draw(&mut self, count: usize) -> Vec<Tile> {
        let count = count.min(self.bag.len());
        let drawn: Vec<Tile> = self.bag.drain(..count).collect();
        tracing::debug!("Drew {} tiles, {} left in bag", drawn.len(), self.bag.len());
        drawn
    }

    /// Put tiles back and reshuffle. An exchange draws its replacements
    /// before calling this, so returned tiles cannot come straight back.
    pub fn return_tiles(&mut self, tiles: Vec<Tile>) {
        let returned = tiles.len();
        self.bag.extend(tiles);
        self.bag.shuffle(&mut self.rng);
        tracing::debug!("Returned {} tiles, {} in bag", returned, self.bag.len());
    }

    pub fn remaining(&self) -> usize {
        self.bag.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bag.is_empty()
    }

    /// Undrawn tiles in draw order.
    pub fn tiles(&self) -> &[Tile] {
        &self.bag
    }

    pub fn distribution(&self) -> &LetterDistribution {
        &self.distribution
    }
}
