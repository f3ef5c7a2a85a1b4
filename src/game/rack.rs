use std::collections::BTreeSet;

use crate::{error::EngineError, models::Tile};

/// Number of slots on a rack.
pub const RACK_SIZE: usize = 7;

/// A player's tiles plus the ephemeral selection state the presentation
/// layer drives: one slot picked for placement, or a set picked for
/// exchange while exchange mode is on. The two never coexist.
#[derive(Debug, Clone, Default)]
pub struct Rack {
    slots: [Option<Tile>; RACK_SIZE],
    selected: Option<usize>,
    exchange_mode: bool,
    exchange_selection: BTreeSet<usize>,
}

impl Rack {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn slots(&self) -> &[Option<Tile>] {
        &self.slots
    }

    pub fn tiles(&self) -> Vec<Tile> {
        self.slots.iter().flatten().copied().collect()
    }

    /// Number of tiles held.
    pub fn len(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_some()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn free_slots(&self) -> usize {
        RACK_SIZE - self.len()
    }

    /// Fill empty slots left to right.
    pub fn add_tiles(&mut self, tiles: Vec<Tile>) -> Result<(), EngineError> {
        let free = self.free_slots();
        if tiles.len() > free {
            return Err(EngineError::RackOverflow {
                free,
                incoming: tiles.len(),
            });
        }

        let mut incoming = tiles.into_iter();
        for slot in self.slots.iter_mut().filter(|slot| slot.is_none()) {
            match incoming.next() {
                Some(tile) => *slot = Some(tile),
                None => break,
            }
        }
        Ok(())
    }

    /// Put a single tile back in the first empty slot, returning its index.
    pub fn return_tile(&mut self, tile: Tile) -> Result<usize, EngineError> {
        let index = self
            .slots
            .iter()
            .position(Option::is_none)
            .ok_or(EngineError::RackOverflow {
                free: 0,
                incoming: 1,
            })?;
        self.slots[index] = Some(tile);
        Ok(index)
    }

    /// Empty one slot and hand its tile to the caller.
    pub fn remove_at(&mut self, index: usize) -> Result<Tile, EngineError> {
        let tile = self
            .slots
            .get_mut(index)
            .ok_or(EngineError::SlotOutOfRange(index))?
            .take()
            .ok_or(EngineError::EmptySlot(index))?;
        self.forget(index);
        Ok(tile)
    }

    /// Pick a slot for placement. Not allowed in exchange mode.
    pub fn select(&mut self, index: usize) -> Result<(), EngineError> {
        self.check_placement_mode()?;
        self.check_occupied(index)?;
        self.selected = Some(index);
        Ok(())
    }

    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    pub fn selected_tile(&self) -> Option<&Tile> {
        self.selected.and_then(|index| self.slots[index].as_ref())
    }

    /// Take the tile picked for placement. `None` when nothing is picked.
    pub fn remove_selected_for_placement(&mut self) -> Result<Option<Tile>, EngineError> {
        self.check_placement_mode()?;
        match self.selected {
            Some(index) => self.remove_at(index).map(Some),
            None => Ok(None),
        }
    }

    pub fn is_exchange_mode(&self) -> bool {
        self.exchange_mode
    }

    /// Switching on drops the placement selection, switching off drops the
    /// exchange selection.
    pub fn set_exchange_mode(&mut self, enabled: bool) {
        self.exchange_mode = enabled;
        if enabled {
            self.selected = None;
        } else {
            self.exchange_selection.clear();
        }
    }

    /// Flip a slot in or out of the exchange selection. Returns whether it is
    /// now selected.
    pub fn toggle_exchange(&mut self, index: usize) -> Result<bool, EngineError> {
        if !self.exchange_mode {
            return Err(EngineError::ExchangeModeOff);
        }
        self.check_occupied(index)?;
        if self.exchange_selection.remove(&index) {
            Ok(false)
        } else {
            self.exchange_selection.insert(index);
            Ok(true)
        }
    }

    pub fn exchange_selection(&self) -> Vec<usize> {
        self.exchange_selection.iter().copied().collect()
    }

    /// Swap the exchange selection for `new_tiles`, returning the tiles
    /// that left the rack. The replacement count must match the selection;
    /// the rack is untouched otherwise.
    pub fn exchange(&mut self, new_tiles: Vec<Tile>) -> Result<Vec<Tile>, EngineError> {
        let selected = self.exchange_selection.len();
        if new_tiles.len() != selected {
            return Err(EngineError::ExchangeCountMismatch {
                selected,
                supplied: new_tiles.len(),
            });
        }

        let indices = std::mem::take(&mut self.exchange_selection);
        let removed: Vec<Tile> = indices
            .iter()
            .filter_map(|&index| self.slots[index].take())
            .collect();
        for (index, tile) in indices.into_iter().zip(new_tiles) {
            self.slots[index] = Some(tile);
        }
        Ok(removed)
    }

    /// Sum of the values of every tile still held.
    pub fn value_of_remaining(&self) -> i32 {
        self.slots.iter().flatten().map(|tile| tile.value as i32).sum()
    }

    /// Drop all tiles and selections.
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn clear_selection(&mut self) {
        self.selected = None;
        self.exchange_selection.clear();
    }

    fn check_placement_mode(&self) -> Result<(), EngineError> {
        if self.exchange_mode {
            Err(EngineError::ExchangeModeOn)
        } else {
            Ok(())
        }
    }

    fn check_occupied(&self, index: usize) -> Result<(), EngineError> {
        match self.slots.get(index) {
            None => Err(EngineError::SlotOutOfRange(index)),
            Some(None) => Err(EngineError::EmptySlot(index)),
            Some(Some(_)) => Ok(()),
        }
    }

    fn forget(&mut self, index: usize) {
        if self.selected == Some(index) {
            self.selected = None;
        }
        self.exchange_selection.remove(&index);
    }
}
