use std::ops::Neg;

use rand::Rng;

use crate::basic::GridPoint;
use Dir::*;

// matches the command encoding used by hosts: Right, Left, Up, Down
#[repr(u8)]
#[derive(Copy, Clone, Eq, PartialEq, Debug, Hash)]
pub enum Dir {
    Right = 0,
    Left = 1,
    Up = 2,
    Down = 3,
}

impl Neg for Dir {
    type Output = Self;

    fn neg(self) -> Self::Output {
        match self {
            Right => Left,
            Left => Right,
            Up => Down,
            Down => Up,
        }
    }
}

impl Dir {
    /// Canonical unit velocity vector, y grows downwards
    pub const fn vector(self) -> GridPoint {
        match self {
            Right => GridPoint { x: 1, y: 0 },
            Left => GridPoint { x: -1, y: 0 },
            Up => GridPoint { x: 0, y: -1 },
            Down => GridPoint { x: 0, y: 1 },
        }
    }

    pub fn iter() -> impl Iterator<Item = Self> {
        [Right, Left, Up, Down].iter().copied()
    }

    pub fn random(rng: &mut impl Rng) -> Self {
        match rng.gen_range(0..4) {
            0 => Right,
            1 => Left,
            2 => Up,
            _ => Down,
        }
    }
}

#[test]
fn test_vectors() {
    let expected = [(Right, 1, 0), (Left, -1, 0), (Up, 0, -1), (Down, 0, 1)];

    for &(dir, x, y) in &expected {
        assert_eq!(dir.vector(), GridPoint { x, y });
    }
}

#[test]
fn test_neg() {
    for dir in Dir::iter() {
        assert_ne!(-dir, dir);
        assert_eq!(-(-dir), dir);
        // opposite headings cancel out
        assert_eq!(dir.vector() + (-dir).vector(), GridPoint { x: 0, y: 0 });
    }
}
