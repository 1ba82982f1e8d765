//! Game state and core simulation types
//!
//! Everything a session needs lives in [`GameState`]; there are no globals, so
//! any number of sessions can run side by side.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;

use super::collision::Rect;
use crate::tuning::Tuning;

/// Current phase of the session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    /// Ticks advance the simulation
    Running,
    /// Bird hit a pipe or the ground; waiting for a tap to restart
    Ended,
}

/// The player-controlled bird
#[derive(Debug, Clone, PartialEq)]
pub struct Bird {
    /// Top-left corner. `x` never changes during a session.
    pub pos: Vec2,
    /// Vertical velocity in pixels/tick (positive = downward)
    pub vel_y: f32,
    pub size: Vec2,
}

impl Bird {
    pub fn new(tuning: &Tuning) -> Self {
        Self {
            pos: Vec2::new(tuning.bird_x, tuning.bird_start_y),
            vel_y: 0.0,
            size: Vec2::new(tuning.bird_width, tuning.bird_height),
        }
    }

    /// Collision box at the current position
    pub fn bounds(&self) -> Rect {
        Rect {
            pos: self.pos,
            size: self.size,
        }
    }
}

/// A top/bottom pipe pair with a passable gap between them
#[derive(Debug, Clone, PartialEq)]
pub struct PipePair {
    /// Left edge
    pub x: f32,
    /// Y of the top of the gap
    pub gap_offset: f32,
    /// Set once the bird has cleared this pair
    pub scored: bool,
}

impl PipePair {
    /// Pipe hanging from the ceiling down to the gap
    pub fn upper(&self, tuning: &Tuning) -> Rect {
        Rect::from_span(self.x, tuning.pipe_width, 0.0, self.gap_offset)
    }

    /// Pipe standing on the ground up to the gap
    pub fn lower(&self, tuning: &Tuning) -> Rect {
        Rect::from_span(
            self.x,
            tuning.pipe_width,
            self.gap_offset + tuning.pipe_gap,
            tuning.ground_line(),
        )
    }

    /// Right edge of the pair
    #[inline]
    pub fn trailing_edge(&self, tuning: &Tuning) -> f32 {
        self.x + tuning.pipe_width
    }
}

/// A background cloud. Purely cosmetic.
#[derive(Debug, Clone, PartialEq)]
pub struct Cloud {
    pub pos: Vec2,
}

/// Complete session state
#[derive(Debug, Clone)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    /// Constants this session was started with
    pub tuning: Tuning,
    /// Session RNG (pipe gaps, cloud placement)
    pub rng: Pcg32,
    /// Pipes passed this run
    pub score: u64,
    /// Score frozen at game over, cleared on restart
    pub final_score: Option<u64>,
    /// Simulation tick counter
    pub time_ticks: u64,
    pub phase: GamePhase,
    pub bird: Bird,
    /// Active pipes in spawn order
    pub pipes: Vec<PipePair>,
    /// Background clouds, fixed count for the session
    pub clouds: Vec<Cloud>,
}

impl GameState {
    /// Create a running session. The bird already has one flap applied.
    ///
    /// Fails when the tuning breaks the geometry the simulation relies on,
    /// e.g. a pipe gap that leaves no room above the ground.
    pub fn new(seed: u64, tuning: Tuning) -> anyhow::Result<Self> {
        tuning.check()?;
        let mut state = Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            score: 0,
            final_score: None,
            time_ticks: 0,
            phase: GamePhase::Running,
            bird: Bird::new(&tuning),
            pipes: Vec::new(),
            clouds: Vec::with_capacity(tuning.cloud_count),
            tuning,
        };
        super::tick::reset(&mut state);
        Ok(state)
    }

    #[inline]
    pub fn is_over(&self) -> bool {
        self.phase == GamePhase::Ended
    }
}
