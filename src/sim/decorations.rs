//! Background clouds
//!
//! Clouds never interact with the bird or the pipes. The batch is created on
//! reset and recycled forever: a cloud that drifts off the left edge reappears
//! at the right edge at a fresh height.

use glam::Vec2;
use rand::Rng;

use super::state::Cloud;
use crate::tuning::Tuning;

/// Replace the batch with `tuning.cloud_count` clouds staggered past the right edge
pub fn spawn_batch<R: Rng>(clouds: &mut Vec<Cloud>, rng: &mut R, tuning: &Tuning) {
    clouds.clear();
    for _ in 0..tuning.cloud_count {
        let x = tuning.screen_width + rng.random::<f32>() * tuning.screen_width;
        clouds.push(Cloud {
            pos: Vec2::new(x, random_height(rng, tuning)),
        });
    }
}

/// Drift every cloud left, wrapping the ones that left the screen.
///
/// A cloud wraps once its trailing edge (`x + cloud_width`) passes the left
/// edge, so `x` itself stays negative while the cloud is still partly visible.
pub fn advance<R: Rng>(clouds: &mut [Cloud], rng: &mut R, tuning: &Tuning) {
    for cloud in clouds.iter_mut() {
        cloud.pos.x -= tuning.cloud_speed;
        if cloud.pos.x + tuning.cloud_width < 0.0 {
            cloud.pos = Vec2::new(tuning.screen_width, random_height(rng, tuning));
        }
    }
}

/// Somewhere in the top half of the sky
fn random_height<R: Rng>(rng: &mut R, tuning: &Tuning) -> f32 {
    rng.random::<f32>() * (tuning.screen_height / 2.0)
}
