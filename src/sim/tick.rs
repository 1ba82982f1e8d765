//! Simulation clock
//!
//! One call to [`tick`] per displayed frame. The host owns scheduling: it
//! requests another frame while ticks report [`TickOutcome::Continue`] and
//! stops once the session ends.

use super::state::{Bird, GamePhase, GameState};
use super::{decorations, obstacles, physics};

/// Result of a single tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Still running; schedule the next frame
    Continue,
    /// This tick ended the session
    Ended,
    /// Session was already over; nothing changed
    Halted,
}

impl TickOutcome {
    /// Whether the host should request another frame
    #[inline]
    pub fn wants_next_frame(self) -> bool {
        self == TickOutcome::Continue
    }
}

/// Result of an activation (tap/click/key)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Activation {
    /// Running session: the bird flapped
    Flapped,
    /// Ended session: a fresh run started and the clock must resume
    Restarted,
}

/// Advance the game state by one frame
pub fn tick(state: &mut GameState) -> TickOutcome {
    if state.phase == GamePhase::Ended {
        return TickOutcome::Halted;
    }

    decorations::advance(&mut state.clouds, &mut state.rng, &state.tuning);

    let grounded = physics::advance(&mut state.bird, &state.tuning);

    let bird = state.bird.bounds();
    let report = obstacles::advance_and_collide(&mut state.pipes, &bird, &state.tuning);
    state.score += u64::from(report.passed);

    state.time_ticks += 1;
    if state.time_ticks.is_multiple_of(state.tuning.spawn_interval) {
        obstacles::spawn(&mut state.pipes, &mut state.rng, &state.tuning);
    }

    if grounded || report.collided {
        end_session(state);
        return TickOutcome::Ended;
    }

    TickOutcome::Continue
}

/// Handle a tap. Restarts an ended session, otherwise flaps.
pub fn activate(state: &mut GameState) -> Activation {
    match state.phase {
        GamePhase::Ended => {
            reset(state);
            log::info!("Game restarted");
            Activation::Restarted
        }
        GamePhase::Running => {
            physics::flap(&mut state.bird, &state.tuning);
            Activation::Flapped
        }
    }
}

/// Start a fresh run: new bird, no pipes, new clouds, zeroed counters, one flap.
///
/// Safe to call in any phase; calling it twice in a row leaves the session in
/// the same shape as calling it once (apart from cloud placement).
pub fn reset(state: &mut GameState) {
    state.bird = Bird::new(&state.tuning);
    state.pipes.clear();
    decorations::spawn_batch(&mut state.clouds, &mut state.rng, &state.tuning);
    state.score = 0;
    state.final_score = None;
    state.time_ticks = 0;
    state.phase = GamePhase::Running;
    physics::flap(&mut state.bird, &state.tuning);
}

fn end_session(state: &mut GameState) {
    state.phase = GamePhase::Ended;
    state.bird.vel_y = 0.0;
    state.final_score = Some(state.score);
    log::info!(
        "Game over: score {} after {} ticks (seed {})",
        state.score,
        state.time_ticks,
        state.seed
    );
}
