//! Host-facing game driver
//!
//! Wraps a [`GameState`] with the bookkeeping a frame-scheduled host needs:
//! whether a frame request is already in flight, so a restart never starts a
//! second loop alongside the first.

use crate::renderer::{DrawSurface, Sprites, render_frame};
use crate::sim::{self, Activation, GameState};
use crate::tuning::Tuning;

pub struct Game {
    pub state: GameState,
    frame_pending: bool,
}

impl Game {
    pub fn new(seed: u64, tuning: Tuning) -> anyhow::Result<Self> {
        Ok(Self {
            state: GameState::new(seed, tuning)?,
            frame_pending: false,
        })
    }

    /// Whether a frame request is outstanding
    pub fn frame_pending(&self) -> bool {
        self.frame_pending
    }

    /// Begin the loop. Returns true when the host must request a frame.
    pub fn start(&mut self) -> bool {
        if self.state.is_over() {
            return false;
        }
        self.claim_frame()
    }

    /// Tap/click/key. Returns true when the host must request a frame.
    pub fn activate(&mut self) -> bool {
        match sim::activate(&mut self.state) {
            Activation::Flapped => false,
            Activation::Restarted => self.claim_frame(),
        }
    }

    /// Run one scheduled frame: tick, then draw. Returns true when the host
    /// must request the next frame.
    pub fn frame<S: DrawSurface>(&mut self, surface: &mut S, sprites: &Sprites<S::Image>) -> bool {
        self.frame_pending = false;
        let outcome = sim::tick(&mut self.state);
        render_frame(&self.state, sprites, surface);
        if outcome.wants_next_frame() {
            self.claim_frame()
        } else {
            false
        }
    }

    fn claim_frame(&mut self) -> bool {
        if self.frame_pending {
            return false;
        }
        self.frame_pending = true;
        true
    }
}

/// Simple demo pilot: flap when the bird sinks toward the bottom of the next gap
pub fn autopilot_wants_flap(state: &GameState) -> bool {
    let t = &state.tuning;
    let bird = &state.bird;
    let bird_bottom = bird.pos.y + bird.size.y;

    let target_bottom = state
        .pipes
        .iter()
        .find(|p| p.trailing_edge(t) >= bird.pos.x)
        .map(|p| p.gap_offset + t.pipe_gap - t.pipe_gap * 0.25)
        .unwrap_or(t.ground_line() * 0.6);

    bird.vel_y >= 0.0 && bird_bottom + bird.vel_y >= target_bottom
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::{RecordingSurface, StaticImage};
    use crate::renderer::frame::GAME_OVER_TEXT;

    fn sprites() -> Sprites<StaticImage> {
        Sprites {
            bird: StaticImage::pending("bird"),
            ground: StaticImage::pending("ground"),
            cloud: StaticImage::pending("cloud"),
        }
    }

    #[test]
    fn test_start_requests_one_frame() {
        let mut game = Game::new(1, Tuning::default()).unwrap();
        assert!(game.start());
        assert!(!game.start());
        assert!(game.frame_pending());
    }

    #[test]
    fn test_invalid_tuning_never_reaches_the_loop() {
        let tuning = Tuning {
            pipe_gap: 410.0,
            spawn_interval: 1,
            ..Default::default()
        };
        assert!(Game::new(1, tuning).is_err());
    }

    #[test]
    fn test_loop_stops_on_game_over() {
        let mut game = Game::new(1, Tuning::default()).unwrap();
        let mut surface = RecordingSurface::default();
        game.start();
        let mut frames = 0;
        while game.frame(&mut surface, &sprites()) {
            frames += 1;
            assert!(frames < 1000);
        }
        assert!(game.state.is_over());
        assert!(!game.frame_pending());
        assert!(surface.texts().any(|t| t == GAME_OVER_TEXT));
    }

    #[test]
    fn test_flap_never_schedules_extra_frame() {
        let mut game = Game::new(1, Tuning::default()).unwrap();
        assert!(game.start());
        assert!(!game.activate());
        assert!(!game.activate());
    }

    #[test]
    fn test_restart_schedules_single_loop() {
        let mut game = Game::new(1, Tuning::default()).unwrap();
        let mut surface = RecordingSurface::default();
        game.start();
        while game.frame(&mut surface, &sprites()) {}

        // First tap restarts and resumes the loop, the rest only flap
        assert!(game.activate());
        assert!(!game.activate());
        assert!(!game.activate());
        assert!(!game.state.is_over());
        assert!(game.frame(&mut surface, &sprites()));
    }

    #[test]
    fn test_autopilot_scores() {
        let mut game = Game::new(2024, Tuning::default()).unwrap();
        let mut surface = RecordingSurface::default();
        game.start();
        for _ in 0..1500 {
            if autopilot_wants_flap(&game.state) {
                game.activate();
            }
            surface.reset();
            if !game.frame(&mut surface, &sprites()) {
                break;
            }
        }
        // The first pair has a full screen width of runway to line up with
        assert!(game.state.score >= 1);
    }
}
