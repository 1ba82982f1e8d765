//! Sky Flap - a tap-to-flap arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, pipes, clouds, game state)
//! - `renderer`: Draw order against an abstract 2D surface
//! - `game`: Frame-scheduling driver shared by every host
//! - `platform`: Browser canvas, sprites and page configuration
//! - `tuning`: Data-driven game balance

pub mod game;
#[cfg(target_arch = "wasm32")]
pub mod platform;
pub mod renderer;
pub mod sim;
pub mod tuning;

pub use game::Game;
pub use tuning::Tuning;
