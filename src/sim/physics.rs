//! Bird physics
//!
//! Explicit Euler, one step per tick with no sub-stepping. Gravity and jump
//! values are per-tick quantities, so the feel follows the display refresh
//! rate exactly like the tuning assumes (~60 Hz).

use super::state::Bird;
use crate::tuning::Tuning;

/// Overwrite the bird's vertical velocity with the jump value
#[inline]
pub fn flap(bird: &mut Bird, tuning: &Tuning) {
    bird.vel_y = tuning.jump_velocity;
}

/// Advance the bird one tick. Returns true when it rests on the ground.
pub fn advance(bird: &mut Bird, tuning: &Tuning) -> bool {
    bird.vel_y += tuning.gravity;
    bird.pos.y += bird.vel_y;

    let floor = tuning.bird_floor();
    if bird.pos.y < 0.0 {
        bird.pos.y = 0.0;
        bird.vel_y = 0.0;
    }
    if bird.pos.y > floor {
        bird.pos.y = floor;
        bird.vel_y = 0.0;
    }

    on_ground(bird, tuning)
}

/// Ground contact: the bird's bottom edge is at or below the ground line
#[inline]
pub fn on_ground(bird: &Bird, tuning: &Tuning) -> bool {
    bird.pos.y + bird.size.y >= tuning.ground_line()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_gravity_pulls_bird_down() {
        let tuning = Tuning::default();
        let mut bird = Bird::new(&tuning);
        assert!(!advance(&mut bird, &tuning));
        assert_eq!(bird.vel_y, 0.25);
        assert_eq!(bird.pos.y, 150.25);
    }

    #[test]
    fn test_flap_overwrites_velocity() {
        let tuning = Tuning::default();
        let mut bird = Bird::new(&tuning);
        bird.vel_y = 9.0;
        flap(&mut bird, &tuning);
        assert_eq!(bird.vel_y, tuning.jump_velocity);
        flap(&mut bird, &tuning);
        assert_eq!(bird.vel_y, tuning.jump_velocity);
    }

    #[test]
    fn test_ceiling_clamp_zeroes_velocity() {
        let tuning = Tuning::default();
        let mut bird = Bird::new(&tuning);
        bird.pos.y = 2.0;
        bird.vel_y = -10.0;
        assert!(!advance(&mut bird, &tuning));
        assert_eq!(bird.pos.y, 0.0);
        assert_eq!(bird.vel_y, 0.0);
    }

    #[test]
    fn test_floor_clamp_reports_ground() {
        let tuning = Tuning::default();
        let mut bird = Bird::new(&tuning);
        bird.pos.y = tuning.bird_floor() - 1.0;
        bird.vel_y = 5.0;
        assert!(advance(&mut bird, &tuning));
        assert_eq!(bird.pos.y, tuning.bird_floor());
        assert_eq!(bird.vel_y, 0.0);
        assert!(on_ground(&bird, &tuning));
    }

    #[test]
    fn test_no_clamp_keeps_velocity() {
        let tuning = Tuning::default();
        let mut bird = Bird::new(&tuning);
        flap(&mut bird, &tuning);
        advance(&mut bird, &tuning);
        assert!((bird.vel_y - (tuning.jump_velocity + tuning.gravity)).abs() < 1e-6);
    }

    proptest! {
        #[test]
        fn prop_bird_stays_in_bounds(
            start_y in 0.0f32..380.0,
            start_vel in -30.0f32..30.0,
            flaps in prop::collection::vec(any::<bool>(), 1..200),
        ) {
            let tuning = Tuning::default();
            let mut bird = Bird::new(&tuning);
            bird.pos.y = start_y;
            bird.vel_y = start_vel;
            for flap_now in flaps {
                if flap_now {
                    flap(&mut bird, &tuning);
                }
                let before = bird.vel_y + tuning.gravity;
                let raw_y = bird.pos.y + before;
                let grounded = advance(&mut bird, &tuning);
                prop_assert!(bird.pos.y >= 0.0);
                prop_assert!(bird.pos.y <= tuning.bird_floor());
                prop_assert_eq!(grounded, bird.pos.y >= tuning.bird_floor());
                if raw_y < 0.0 || raw_y > tuning.bird_floor() {
                    prop_assert_eq!(bird.vel_y, 0.0);
                } else {
                    prop_assert_eq!(bird.vel_y, before);
                }
            }
        }
    }
}
