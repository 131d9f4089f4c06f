pub mod input;
pub mod clock;
pub mod movement;
pub mod rules;
pub mod render;

pub use input::*;
pub use clock::*;
pub use movement::*;
pub use rules::*;
pub use render::*;
