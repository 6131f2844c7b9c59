use itertools::Itertools;
use rand::Rng;

use crate::basic::GridPoint;
use crate::board::{Grid, Occupant};

/// Hard cap on simultaneous apples, the oldest apple is evicted past it.
pub const MAX_APPLES: usize = 20;

/// Apple positions in insertion order, oldest first. Unordered set
/// semantics otherwise: no two apples share a cell.
#[derive(Default)]
pub struct Apples {
    positions: Vec<GridPoint>,
}

impl Apples {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    pub fn positions(&self) -> &[GridPoint] {
        &self.positions
    }

    /// Register an apple at `pos`, evicting the oldest apple once the cap is
    /// exceeded. The caller picks the cell, free or not, duplicates are not
    /// checked against externally constructed positions.
    pub fn insert(&mut self, pos: GridPoint, grid: &mut Grid) {
        grid.set(pos, Occupant::Apple, true);
        self.positions.push(pos);
        debug_assert!(self.positions.iter().all_unique());

        if self.positions.len() > MAX_APPLES {
            // order-preserving left shift, FIFO by insertion
            let oldest = self.positions.remove(0);
            grid.set(oldest, Occupant::Apple, false);
        }
    }

    /// Spawn an apple on a uniformly random free cell. Returns `false` and
    /// leaves the board untouched when no cell is free.
    pub fn spawn(&mut self, grid: &mut Grid, rng: &mut impl Rng) -> bool {
        match grid.random_free_cell(rng) {
            Some(pos) => {
                self.insert(pos, grid);
                true
            }
            None => {
                log::warn!("board saturated, skipping apple spawn");
                false
            }
        }
    }

    /// Remove the apple at `pos` if there is one. Swaps with the last entry,
    /// insertion order of the remainder is irrelevant to removal.
    pub fn remove_at(&mut self, pos: GridPoint, grid: &mut Grid) -> bool {
        match self.positions.iter().position(|&apple| apple == pos) {
            Some(index) => {
                self.positions.swap_remove(index);
                grid.set(pos, Occupant::Apple, false);
                true
            }
            None => false,
        }
    }
}
