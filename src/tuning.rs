//! Data-driven game tuning
//!
//! Every gameplay constant lives here. Values are per-tick (the simulation is
//! frame-coupled and tuned for a ~60 Hz display), distances are canvas pixels.

use anyhow::{Context, ensure};
use serde::{Deserialize, Serialize};

/// Complete tuning set. Missing JSON fields fall back to the defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    /// Canvas width
    pub screen_width: f32,
    /// Canvas height
    pub screen_height: f32,
    /// Height of the ground strip at the bottom of the canvas
    pub ground_height: f32,

    /// Fixed bird column
    pub bird_x: f32,
    /// Bird spawn height
    pub bird_start_y: f32,
    pub bird_width: f32,
    pub bird_height: f32,
    /// Downward acceleration added to the bird's velocity every tick
    pub gravity: f32,
    /// Velocity set (not added) on every flap; negative is up
    pub jump_velocity: f32,

    pub pipe_width: f32,
    /// Vertical size of the passable gap
    pub pipe_gap: f32,
    /// Leftward pipe movement per tick
    pub pipe_speed: f32,
    /// A new pipe pair spawns every this many ticks
    pub spawn_interval: u64,

    pub cloud_count: usize,
    pub cloud_width: f32,
    pub cloud_height: f32,
    /// Leftward cloud movement per tick
    pub cloud_speed: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            screen_width: 320.0,
            screen_height: 480.0,
            ground_height: 70.0,

            bird_x: 50.0,
            bird_start_y: 150.0,
            bird_width: 30.0,
            bird_height: 30.0,
            gravity: 0.25,
            jump_velocity: -4.6,

            pipe_width: 50.0,
            pipe_gap: 150.0,
            pipe_speed: 2.0,
            spawn_interval: 100,

            cloud_count: 3,
            cloud_width: 60.0,
            cloud_height: 40.0,
            cloud_speed: 1.0,
        }
    }
}

impl Tuning {
    /// Y coordinate of the top of the ground strip
    #[inline]
    pub fn ground_line(&self) -> f32 {
        self.screen_height - self.ground_height
    }

    /// Lowest y the bird's top edge may reach
    #[inline]
    pub fn bird_floor(&self) -> f32 {
        self.ground_line() - self.bird_height
    }

    /// Exclusive upper bound for a pipe's gap offset
    #[inline]
    pub fn max_gap_offset(&self) -> u32 {
        (self.ground_line() - self.pipe_gap).floor() as u32
    }

    /// Parse a JSON override on top of the defaults and check geometry.
    pub fn from_json(json: &str) -> anyhow::Result<Self> {
        let tuning: Tuning = serde_json::from_str(json).context("invalid tuning JSON")?;
        tuning.check()?;
        Ok(tuning)
    }

    /// Reject values that would break simulation invariants.
    ///
    /// A tuning that passes this check can never produce a pipe gap reaching
    /// into the ground or a bird that does not fit between ceiling and ground.
    pub fn check(&self) -> anyhow::Result<()> {
        ensure!(
            self.screen_width > 0.0 && self.screen_height > 0.0,
            "screen must have a positive size, got {}x{}",
            self.screen_width,
            self.screen_height
        );
        ensure!(
            self.ground_height >= 0.0 && self.ground_height < self.screen_height,
            "ground height {} must be in [0, {})",
            self.ground_height,
            self.screen_height
        );
        ensure!(
            self.bird_width > 0.0 && self.bird_height > 0.0,
            "bird must have a positive size"
        );
        ensure!(
            self.bird_height < self.ground_line(),
            "bird height {} does not fit above the ground line {}",
            self.bird_height,
            self.ground_line()
        );
        ensure!(
            (0.0..=self.bird_floor()).contains(&self.bird_start_y),
            "bird start y {} outside [0, {}]",
            self.bird_start_y,
            self.bird_floor()
        );
        ensure!(
            self.pipe_width > 0.0 && self.pipe_gap > 0.0,
            "pipes need a positive width and gap"
        );
        ensure!(
            self.max_gap_offset() >= 1,
            "pipe gap {} leaves no room above the ground line {}",
            self.pipe_gap,
            self.ground_line()
        );
        ensure!(self.spawn_interval > 0, "spawn interval must be at least 1 tick");
        ensure!(
            self.cloud_width > 0.0 && self.cloud_height > 0.0,
            "clouds must have a positive size"
        );
        Ok(())
    }

    /// Produce validation warnings (non-fatal) for suspicious values.
    pub fn validate(&self) -> Vec<String> {
        let mut w = Vec::new();
        if self.gravity <= 0.0 {
            w.push(format!("gravity {} is not positive; the bird will not fall", self.gravity));
        }
        if self.jump_velocity >= 0.0 {
            w.push(format!(
                "jump velocity {} is not negative; flapping will not lift the bird",
                self.jump_velocity
            ));
        }
        if self.pipe_speed <= 0.0 {
            w.push(format!("pipe speed {} never brings pipes on screen", self.pipe_speed));
        }
        if self.pipe_speed > self.pipe_width {
            w.push(format!(
                "pipe speed {} exceeds pipe width {}; pipes can skip over the bird",
                self.pipe_speed, self.pipe_width
            ));
        }
        if self.pipe_gap < self.bird_height {
            w.push(format!(
                "pipe gap {} is smaller than the bird ({}); no pipe is passable",
                self.pipe_gap, self.bird_height
            ));
        }
        if self.cloud_speed <= 0.0 {
            w.push(format!("cloud speed {} leaves clouds parked off-screen", self.cloud_speed));
        }
        w
    }
}
