//! Carrier module: cell coordinates, move directions and the room snapshot.

pub mod coord;
pub mod direction;
pub mod grid;
