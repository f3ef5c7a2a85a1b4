use crate::{
    error::EngineError,
    models::{PlacedTile, Position, Tile},
};

/// A tile put down this turn but not yet confirmed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PendingTile {
    pub position: Position,
    pub tile: Tile,
    /// Letter shown on the board; differs from `tile.letter` for blanks.
    pub letter: char,
}

impl PendingTile {
    pub fn placed(&self) -> PlacedTile {
        PlacedTile {
            letter: self.letter,
            tile: self.tile,
        }
    }
}

/// Tentative placements of the current turn, in the order they were made.
#[derive(Debug, Clone, Default)]
pub struct PendingMove {
    tiles: Vec<PendingTile>,
}

impl PendingMove {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, position: Position, tile: Tile, letter: char) -> Result<(), EngineError> {
        if !position.in_bounds() {
            return Err(EngineError::OutOfBounds(position));
        }
        if self.contains(position) {
            return Err(EngineError::DuplicatePending(position));
        }
        self.tiles.push(PendingTile {
            position,
            tile,
            letter,
        });
        Ok(())
    }

    pub fn get(&self, position: Position) -> Option<&PendingTile> {
        self.tiles.iter().find(|pending| pending.position == position)
    }

    pub fn contains(&self, position: Position) -> bool {
        self.get(position).is_some()
    }

    pub fn tiles(&self) -> &[PendingTile] {
        &self.tiles
    }

    pub fn positions(&self) -> impl Iterator<Item = Position> + '_ {
        self.tiles.iter().map(|pending| pending.position)
    }

    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// Remove every pending tile, returning them in placement order.
    pub fn take(&mut self) -> Vec<PendingTile> {
        std::mem::take(&mut self.tiles)
    }
}
