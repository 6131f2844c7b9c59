pub use dir::Dir;
pub use grid_point::{GridDim, GridPoint};

mod dir;
mod grid_point;

/// Real time in seconds, as handed over by the host each frame.
pub type Seconds = f32;
