use rand::distributions::uniform::SampleRange;
use rand::Rng;

use crate::basic::{GridDim, GridPoint};

/// One occupancy layer of a cell.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Occupant {
    Apple,
    Body,
    Head,
}

#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub struct Cell {
    pub has_apple: bool,
    pub has_body: bool,
    pub has_head: bool,
}

impl Cell {
    pub fn is_free(self) -> bool {
        !(self.has_apple || self.has_body || self.has_head)
    }
}

/// Dense occupancy map over the board, the authoritative record of which
/// cell holds what. The position lists in `Snake` and `Apples` are secondary
/// indices, every mutation updates both within the same operation.
pub struct Grid {
    dim: GridDim,
    // row-major, index = y * width + x
    cells: Vec<Cell>,
}

impl Grid {
    pub fn new(dim: GridDim) -> Self {
        assert!(dim.x > 0 && dim.y > 0, "degenerate board dimensions {:?}", dim);
        Self {
            dim,
            cells: vec![Cell::default(); (dim.x * dim.y) as usize],
        }
    }

    pub fn dim(&self) -> GridDim {
        self.dim
    }

    // out-of-range access is a caller bug, wrapping happens before lookup
    fn index(&self, pos: GridPoint) -> usize {
        assert!(self.dim.contains(pos), "{:?} outside board {:?}", pos, self.dim);
        (pos.y * self.dim.x + pos.x) as usize
    }

    fn point_at(&self, index: usize) -> GridPoint {
        GridPoint {
            x: index as isize % self.dim.x,
            y: index as isize / self.dim.x,
        }
    }

    pub fn cell(&self, pos: GridPoint) -> Cell {
        self.cells[self.index(pos)]
    }

    /// Row-major occupancy, for renderers.
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub fn get(&self, pos: GridPoint, occupant: Occupant) -> bool {
        let cell = self.cell(pos);
        match occupant {
            Occupant::Apple => cell.has_apple,
            Occupant::Body => cell.has_body,
            Occupant::Head => cell.has_head,
        }
    }

    pub fn set(&mut self, pos: GridPoint, occupant: Occupant, value: bool) {
        let index = self.index(pos);
        let cell = &mut self.cells[index];
        match occupant {
            Occupant::Apple => cell.has_apple = value,
            Occupant::Body => cell.has_body = value,
            Occupant::Head => cell.has_head = value,
        }
    }

    pub fn clear(&mut self) {
        self.cells.fill(Cell::default());
    }

    /// Uniformly random fully-unoccupied cell, `None` when the board is
    /// saturated. Samples a rank among the free cells directly instead of
    /// rejection-sampling, so a nearly-full board costs the same as an
    /// empty one.
    pub fn random_free_cell(&self, rng: &mut impl Rng) -> Option<GridPoint> {
        let free_cells = self.cells.iter().filter(|cell| cell.is_free()).count();
        if free_cells == 0 {
            return None;
        }

        let nth = (0..free_cells).sample_single(rng);
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| cell.is_free())
            .nth(nth)
            .map(|(index, _)| self.point_at(index))
    }
}
