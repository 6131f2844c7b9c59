use std::collections::VecDeque;

use crate::basic::{Dir, GridPoint};
use crate::board::{Grid, Occupant};

pub struct Snake {
    pub head: GridPoint,
    /// Heading the next grid step will follow
    pub dir: Dir,
    /// Segments from neck to tail, the head is stored separately
    pub body: VecDeque<GridPoint>,
}

impl Snake {
    pub fn new(head: GridPoint, dir: Dir) -> Self {
        Self {
            head,
            dir,
            body: VecDeque::new(),
        }
    }

    /// Body length plus the head
    pub fn full_len(&self) -> usize {
        self.body.len() + 1
    }

    /// One grid step in the current heading. The head wraps across board
    /// edges, every body segment follows the one in front of it, the vacated
    /// tail cell is released.
    pub fn advance(&mut self, grid: &mut Grid) {
        let old_head = self.head;
        grid.set(old_head, Occupant::Head, false);
        self.head = old_head.wrapping_translate(self.dir, 1, grid.dim());
        grid.set(self.head, Occupant::Head, true);

        if !self.body.is_empty() {
            self.body.push_front(old_head);
            grid.set(old_head, Occupant::Body, true);
            if let Some(tail) = self.body.pop_back() {
                // right after growing, the last two segments share a cell,
                // the flag must outlive the popped duplicate
                if self.body.back() != Some(&tail) {
                    grid.set(tail, Occupant::Body, false);
                }
            }
        }
    }

    /// Append one segment: a copy of the current tail, or for a body-less
    /// snake the cell one step behind the head, opposite the heading.
    pub fn grow(&mut self, grid: &mut Grid) {
        let new_tail = match self.body.back() {
            Some(&tail) => tail,
            None => self.head.wrapping_translate(-self.dir, 1, grid.dim()),
        };
        self.body.push_back(new_tail);
        grid.set(new_tail, Occupant::Body, true);
    }
}
