//! Simulation core of a snake arcade game on a toroidal grid.
//!
//! The host (window, input, renderer) is external: it calls
//! [`GameState::tick`] once per frame with the elapsed time and the most
//! recent directional command, and reads back a [`Snapshot`] to draw.

#[macro_use]
extern crate derive_more;

pub use crate::basic::{Dir, GridDim, GridPoint, Seconds};
pub use crate::game::{GameState, Snapshot};

pub mod apple;
pub mod basic;
pub mod board;
pub mod difficulty;
pub mod game;
pub mod snake;
