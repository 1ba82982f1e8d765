//! Canvas-style 2D rendering
//!
//! The simulation never draws. Each frame [`render_frame`] walks the state
//! and issues calls against a [`DrawSurface`]: the browser Canvas 2D context
//! in production, a [`RecordingSurface`] in tests and the headless runner.

pub mod frame;
pub mod recording;

pub use frame::render_frame;
pub use recording::{DrawCommand, RecordingSurface, StaticImage};

use glam::Vec2;

use crate::sim::Rect;

/// An image that may still be loading (or may have failed to load)
pub trait ImageResource {
    /// Loading finished, successfully or not
    fn is_complete(&self) -> bool;

    /// Intrinsic pixel size; zero for broken or pending images
    fn natural_size(&self) -> Vec2;

    /// Safe to draw
    fn is_ready(&self) -> bool {
        self.is_complete() && self.natural_size().y > 0.0
    }
}

/// Drawing capabilities the game needs from its host
pub trait DrawSurface {
    type Image: ImageResource;

    fn clear(&mut self, width: f32, height: f32);
    fn fill_rect(&mut self, rect: Rect, color: &'static str);
    /// Draw `image` stretched to `rect`
    fn draw_image(&mut self, image: &Self::Image, rect: Rect);
    fn fill_text(&mut self, text: &str, pos: Vec2, font: &'static str, color: &'static str);
}

/// The three sprites the game draws
#[derive(Debug, Clone)]
pub struct Sprites<I> {
    pub bird: I,
    pub ground: I,
    pub cloud: I,
}

impl<I: ImageResource> Sprites<I> {
    /// Every sprite can be drawn
    pub fn all_ready(&self) -> bool {
        self.bird.is_ready() && self.ground.is_ready() && self.cloud.is_ready()
    }
}

/// Colors for game elements (CSS)
pub mod colors {
    pub const SKY: &str = "#70c5ce";
    pub const PIPE: &str = "#00cc66";
    /// Drawn in place of the bird sprite until it loads
    pub const BIRD_FALLBACK: &str = "#ff0";
    /// Drawn in place of the ground sprite until it loads
    pub const GROUND_FALLBACK: &str = "#ded895";
    pub const TEXT: &str = "#000";
}

/// HUD font
pub const FONT: &str = "20px Arial";
