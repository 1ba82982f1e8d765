//! Pipe spawning, scrolling, scoring and collision

use rand::Rng;

use super::collision::Rect;
use super::state::PipePair;
use crate::tuning::Tuning;

/// What happened to the pipes during one tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PipeReport {
    /// Pairs the bird cleared for the first time this tick
    pub passed: u32,
    /// Bird overlaps a pipe
    pub collided: bool,
}

/// Append a pair at the right edge with a random gap above the ground.
///
/// The gap offset is an integer drawn from `[0, ground_line - pipe_gap)`, so
/// the gap can never reach into the ground.
pub fn spawn<R: Rng>(pipes: &mut Vec<PipePair>, rng: &mut R, tuning: &Tuning) {
    let gap_offset = rng.random_range(0..tuning.max_gap_offset());
    log::debug!("Spawning pipe pair, gap at {}", gap_offset);
    pipes.push(PipePair {
        x: tuning.screen_width,
        gap_offset: gap_offset as f32,
        scored: false,
    });
}

/// Scroll every pair left and evaluate it against the bird.
///
/// Scoring, collision and off-screen pruning are independent checks applied
/// to every pair, in spawn order, on every tick. A pair pruned this tick has
/// still been scored and collision-tested at its new position.
pub fn advance_and_collide(
    pipes: &mut Vec<PipePair>,
    bird: &Rect,
    tuning: &Tuning,
) -> PipeReport {
    let mut report = PipeReport::default();

    pipes.retain_mut(|pair| {
        pair.x -= tuning.pipe_speed;

        if !pair.scored && pair.trailing_edge(tuning) < bird.left() {
            pair.scored = true;
            report.passed += 1;
        }

        if hits(pair, bird, tuning) {
            report.collided = true;
        }

        pair.trailing_edge(tuning) >= 0.0
    });

    report
}

/// Bird box against both pipes of a pair at their current position
pub fn hits(pair: &PipePair, bird: &Rect, tuning: &Tuning) -> bool {
    bird.intersects(&pair.upper(tuning)) || bird.intersects(&pair.lower(tuning))
}
