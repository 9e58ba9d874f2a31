//! **backrooms_maze** generates perfect mazes with the recursive backtracker and renders them
//! as wall grids, PNG rasters or text.

pub mod cells;
pub mod errors;
pub mod generators;
pub mod grid;
pub mod grid_dimensions;
pub mod grid_displays;
pub mod renderers;
pub mod units;

pub use crate::generators::{generate, generate_seeded, recursive_backtracker};
pub use crate::grid::Grid;
pub use crate::grid_dimensions::GridDimensions;
