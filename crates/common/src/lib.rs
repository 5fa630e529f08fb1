//! Shared vocabulary for the cubespace workspace: faces, directions, grid
//! coordinates, and sticker colors.

pub mod types;

pub use types::{Color, Direction, Face, GridCoord};
