//! In-memory draw surface
//!
//! Records draw calls instead of painting them. Used by tests and by the
//! native headless runner.

use glam::Vec2;

use super::{DrawSurface, ImageResource};
use crate::sim::Rect;

/// A fixed image description with no pixel data
#[derive(Debug, Clone, PartialEq)]
pub struct StaticImage {
    pub name: &'static str,
    pub complete: bool,
    pub size: Vec2,
}

impl StaticImage {
    pub fn loaded(name: &'static str, width: f32, height: f32) -> Self {
        Self {
            name,
            complete: true,
            size: Vec2::new(width, height),
        }
    }

    /// Still downloading
    pub fn pending(name: &'static str) -> Self {
        Self {
            name,
            complete: false,
            size: Vec2::ZERO,
        }
    }

    /// Finished loading but has no pixels (404, decode failure)
    pub fn broken(name: &'static str) -> Self {
        Self {
            name,
            complete: true,
            size: Vec2::ZERO,
        }
    }
}

impl ImageResource for StaticImage {
    fn is_complete(&self) -> bool {
        self.complete
    }

    fn natural_size(&self) -> Vec2 {
        self.size
    }
}

/// One recorded draw call
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Clear { width: f32, height: f32 },
    FillRect { rect: Rect, color: &'static str },
    Image { name: &'static str, rect: Rect },
    Text { text: String, pos: Vec2 },
}

#[derive(Debug, Default)]
pub struct RecordingSurface {
    pub commands: Vec<DrawCommand>,
}

impl RecordingSurface {
    /// Forget everything recorded so far
    pub fn reset(&mut self) {
        self.commands.clear();
    }

    /// Names of the images drawn, in order
    pub fn images(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.commands.iter().filter_map(|c| match c {
            DrawCommand::Image { name, .. } => Some(*name),
            _ => None,
        })
    }

    /// Text drawn, in order
    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.commands.iter().filter_map(|c| match c {
            DrawCommand::Text { text, .. } => Some(text.as_str()),
            _ => None,
        })
    }
}

impl DrawSurface for RecordingSurface {
    type Image = StaticImage;

    fn clear(&mut self, width: f32, height: f32) {
        self.commands.push(DrawCommand::Clear { width, height });
    }

    fn fill_rect(&mut self, rect: Rect, color: &'static str) {
        self.commands.push(DrawCommand::FillRect { rect, color });
    }

    fn draw_image(&mut self, image: &StaticImage, rect: Rect) {
        self.commands.push(DrawCommand::Image {
            name: image.name,
            rect,
        });
    }

    fn fill_text(&mut self, text: &str, pos: Vec2, _font: &'static str, _color: &'static str) {
        self.commands.push(DrawCommand::Text {
            text: text.to_string(),
            pos,
        });
    }
}
