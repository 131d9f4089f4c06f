pub mod types;
pub mod grid;
pub mod state;
pub mod tests;

pub mod entities;
pub mod systems;
