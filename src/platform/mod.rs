//! Browser platform layer
//!
//! Canvas 2D drawing, sprite loading and tuning overrides from the page.
//! Everything here only exists on `wasm32`.

use glam::Vec2;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{CanvasRenderingContext2d, Document, HtmlCanvasElement, HtmlImageElement};

use crate::renderer::{DrawSurface, ImageResource, Sprites};
use crate::sim::Rect;
use crate::tuning::Tuning;

impl ImageResource for HtmlImageElement {
    fn is_complete(&self) -> bool {
        self.complete()
    }

    fn natural_size(&self) -> Vec2 {
        Vec2::new(self.natural_width() as f32, self.natural_height() as f32)
    }
}

/// Draws straight into a canvas' 2D context
pub struct CanvasSurface {
    ctx: CanvasRenderingContext2d,
}

impl CanvasSurface {
    /// Size the canvas from the tuning and grab its 2D context
    pub fn new(canvas: &HtmlCanvasElement, tuning: &Tuning) -> Option<Self> {
        canvas.set_width(tuning.screen_width as u32);
        canvas.set_height(tuning.screen_height as u32);
        let ctx = canvas
            .get_context("2d")
            .ok()
            .flatten()?
            .dyn_into::<CanvasRenderingContext2d>()
            .ok()?;
        Some(Self { ctx })
    }
}

impl DrawSurface for CanvasSurface {
    type Image = HtmlImageElement;

    fn clear(&mut self, width: f32, height: f32) {
        self.ctx.clear_rect(0.0, 0.0, width as f64, height as f64);
    }

    fn fill_rect(&mut self, rect: Rect, color: &'static str) {
        self.ctx.set_fill_style_str(color);
        self.ctx.fill_rect(
            rect.left() as f64,
            rect.top() as f64,
            rect.size.x as f64,
            rect.size.y as f64,
        );
    }

    fn draw_image(&mut self, image: &HtmlImageElement, rect: Rect) {
        if let Err(e) = self.ctx.draw_image_with_html_image_element_and_dw_and_dh(
            image,
            rect.left() as f64,
            rect.top() as f64,
            rect.size.x as f64,
            rect.size.y as f64,
        ) {
            log::warn!("drawImage failed: {:?}", e);
        }
    }

    fn fill_text(&mut self, text: &str, pos: Vec2, font: &'static str, color: &'static str) {
        self.ctx.set_fill_style_str(color);
        self.ctx.set_font(font);
        if let Err(e) = self.ctx.fill_text(text, pos.x as f64, pos.y as f64) {
            log::warn!("fillText failed: {:?}", e);
        }
    }
}

/// Start loading every sprite, then wait until each one has either decoded or failed.
///
/// A sprite that fails stays in the set; the renderer sees it is not ready and
/// draws its fallback instead.
pub async fn load_sprites() -> Sprites<HtmlImageElement> {
    let sprites = Sprites {
        bird: start_image("bird.png"),
        ground: start_image("ground.png"),
        cloud: start_image("cloud.png"),
    };

    for (name, img) in [
        ("bird", &sprites.bird),
        ("ground", &sprites.ground),
        ("cloud", &sprites.cloud),
    ] {
        match JsFuture::from(img.decode()).await {
            Ok(_) => log::info!(
                "Loaded {} sprite ({}x{})",
                name,
                img.natural_width(),
                img.natural_height()
            ),
            Err(e) => log::warn!("Failed to load {} sprite, using fallback: {:?}", name, e),
        }
    }

    sprites
}

fn start_image(src: &str) -> HtmlImageElement {
    let img = HtmlImageElement::new().expect("failed to create image element");
    img.set_src(src);
    img
}

/// Tuning from an optional `<script id="tuning" type="application/json">` block.
///
/// Invalid overrides are logged and ignored.
pub fn load_tuning(document: &Document) -> Tuning {
    let Some(json) = document
        .get_element_by_id("tuning")
        .and_then(|el| el.text_content())
    else {
        log::info!("Using default tuning");
        return Tuning::default();
    };

    match Tuning::from_json(&json) {
        Ok(tuning) => {
            log::info!("Loaded tuning overrides");
            tuning
        }
        Err(e) => {
            log::error!("Ignoring tuning overrides: {:#}", e);
            Tuning::default()
        }
    }
}
