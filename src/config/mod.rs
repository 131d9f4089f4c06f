/// Main configuration module.
/// 
/// Re-exports submodules for window and game configuration.
pub mod window;
pub mod game;
