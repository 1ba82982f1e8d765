//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One fixed step per tick (frame-coupled)
//! - Seeded RNG only
//! - Stable iteration order (spawn order)
//! - No rendering or platform dependencies

pub mod collision;
pub mod decorations;
pub mod obstacles;
pub mod physics;
pub mod state;
pub mod tick;

pub use collision::Rect;
pub use obstacles::PipeReport;
pub use state::{Bird, Cloud, GamePhase, GameState, PipePair};
pub use tick::{Activation, TickOutcome, activate, reset, tick};
