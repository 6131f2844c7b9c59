use std::fmt::{Debug, Error, Formatter};

use rand::Rng;

use super::dir::Dir;

// INVARIANT: wrapped points always satisfy 0 <= x < dim.x and 0 <= y < dim.y
#[derive(Eq, PartialEq, Copy, Clone, Add, Hash)]
pub struct GridPoint {
    pub x: isize,
    pub y: isize,
}

/// Board dimensions reuse the point representation: width = x, height = y
pub type GridDim = GridPoint;

impl Debug for GridPoint {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), Error> {
        write!(f, "<{}, {}>", self.x, self.y)
    }
}

impl GridPoint {
    #[must_use]
    pub fn translate(self, dir: Dir, dist: isize) -> Self {
        let GridPoint { x: dx, y: dy } = dir.vector();
        self + Self { x: dx * dist, y: dy * dist }
    }

    // mod width, mod height: each axis wraps independently on the torus
    #[must_use]
    pub fn wrap_around(self, board_dim: GridDim) -> Self {
        Self {
            x: self.x.rem_euclid(board_dim.x),
            y: self.y.rem_euclid(board_dim.y),
        }
    }

    /// Translate, re-entering from the opposite edge when leaving the board
    #[must_use]
    pub fn wrapping_translate(self, dir: Dir, dist: isize, board_dim: GridDim) -> Self {
        self.translate(dir, dist).wrap_around(board_dim)
    }

    pub fn contains(self, pos: Self) -> bool {
        (0..self.x).contains(&pos.x) && (0..self.y).contains(&pos.y)
    }

    pub fn random(board_dim: GridDim, rng: &mut impl Rng) -> Self {
        Self {
            x: rng.gen_range(0..board_dim.x),
            y: rng.gen_range(0..board_dim.y),
        }
    }
}

#[test]
fn test_wrapping_translate() {
    use Dir::*;

    let dim = GridPoint { x: 40, y: 30 };

    [
        // off one edge, back in on the opposite edge
        ((39, 10), Right, (0, 10)),
        ((0, 10), Left, (39, 10)),
        ((5, 0), Up, (5, 29)),
        ((5, 29), Down, (5, 0)),
        // interior moves are plain translations
        ((10, 10), Right, (11, 10)),
        ((10, 10), Left, (9, 10)),
        ((10, 10), Up, (10, 9)),
        ((10, 10), Down, (10, 11)),
        // corner, both axes at their limits
        ((39, 29), Down, (39, 0)),
        ((0, 0), Up, (0, 29)),
    ]
    .iter()
    .for_each(|&((x, y), dir, (ex, ey))| {
        let pos = GridPoint { x, y };
        assert_eq!(
            pos.wrapping_translate(dir, 1, dim),
            GridPoint { x: ex, y: ey },
            "{:?} going {:?}",
            pos,
            dir
        );
    });
}

#[test]
fn test_wrap_around_long_distance() {
    let dim = GridPoint { x: 40, y: 30 };
    // a full lap lands back on the starting cell
    let pos = GridPoint { x: 7, y: 21 };
    assert_eq!(pos.wrapping_translate(Dir::Right, 40, dim), pos);
    assert_eq!(pos.wrapping_translate(Dir::Up, 30, dim), pos);
}

#[test]
fn test_contains() {
    let dim = GridPoint { x: 4, y: 3 };
    assert!(dim.contains(GridPoint { x: 0, y: 0 }));
    assert!(dim.contains(GridPoint { x: 3, y: 2 }));
    assert!(!dim.contains(GridPoint { x: 4, y: 0 }));
    assert!(!dim.contains(GridPoint { x: 0, y: 3 }));
    assert!(!dim.contains(GridPoint { x: -1, y: 1 }));
}
