//! Game entities module.
//!
//! This module organizes snake and apple entity logic.

pub mod snake;
pub mod apple;

pub use snake::*;
pub use apple::*;
