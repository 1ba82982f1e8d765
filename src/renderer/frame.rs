//! Per-frame draw order

use glam::Vec2;

use super::{DrawSurface, FONT, ImageResource, Sprites, colors};
use crate::sim::{GameState, Rect};

/// Shown over the frozen playfield once the session ends
pub const GAME_OVER_TEXT: &str = "Game Over! Tap to Restart";

/// Draw one frame: sky, clouds, ground, bird, pipes, score, game over.
pub fn render_frame<S: DrawSurface>(
    state: &GameState,
    sprites: &Sprites<S::Image>,
    surface: &mut S,
) {
    let t = &state.tuning;

    surface.clear(t.screen_width, t.screen_height);
    surface.fill_rect(Rect::new(0.0, 0.0, t.screen_width, t.screen_height), colors::SKY);

    // Clouds are decoration only; skip them entirely until the sprite loads
    if sprites.cloud.is_ready() {
        for cloud in &state.clouds {
            let rect = Rect {
                pos: cloud.pos,
                size: Vec2::new(t.cloud_width, t.cloud_height),
            };
            surface.draw_image(&sprites.cloud, rect);
        }
    }

    let ground = Rect::new(0.0, t.ground_line(), t.screen_width, t.ground_height);
    if sprites.ground.is_ready() {
        surface.draw_image(&sprites.ground, ground);
    } else {
        surface.fill_rect(ground, colors::GROUND_FALLBACK);
    }

    let bird = state.bird.bounds();
    if sprites.bird.is_ready() {
        surface.draw_image(&sprites.bird, bird);
    } else {
        surface.fill_rect(bird, colors::BIRD_FALLBACK);
    }

    for pair in &state.pipes {
        surface.fill_rect(pair.upper(t), colors::PIPE);
        surface.fill_rect(pair.lower(t), colors::PIPE);
    }

    surface.fill_text(
        &format!("Score: {}", state.score),
        Vec2::new(20.0, 30.0),
        FONT,
        colors::TEXT,
    );

    if state.is_over() {
        surface.fill_text(
            GAME_OVER_TEXT,
            Vec2::new(50.0, t.screen_height / 2.0),
            FONT,
            colors::TEXT,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::{DrawCommand, RecordingSurface, StaticImage};
    use crate::sim::{GamePhase, PipePair};
    use crate::tuning::Tuning;

    fn loaded() -> Sprites<StaticImage> {
        Sprites {
            bird: StaticImage::loaded("bird", 34.0, 24.0),
            ground: StaticImage::loaded("ground", 336.0, 112.0),
            cloud: StaticImage::loaded("cloud", 120.0, 80.0),
        }
    }

    fn missing() -> Sprites<StaticImage> {
        Sprites {
            bird: StaticImage::broken("bird"),
            ground: StaticImage::pending("ground"),
            cloud: StaticImage::broken("cloud"),
        }
    }

    #[test]
    fn test_draw_order_with_sprites() {
        let mut state = GameState::new(8, Tuning::default()).unwrap();
        state.pipes.push(PipePair {
            x: 200.0,
            gap_offset: 100.0,
            scored: false,
        });
        let mut surface = RecordingSurface::default();
        render_frame(&state, &loaded(), &mut surface);

        let cmds = &surface.commands;
        assert_eq!(cmds.len(), 1 + 1 + 3 + 1 + 1 + 2 + 1);
        assert!(matches!(cmds[0], DrawCommand::Clear { .. }));
        assert!(matches!(cmds[1], DrawCommand::FillRect { color: colors::SKY, .. }));
        for cmd in &cmds[2..5] {
            assert!(matches!(cmd, DrawCommand::Image { name: "cloud", .. }));
        }
        assert!(matches!(cmds[5], DrawCommand::Image { name: "ground", .. }));
        assert!(matches!(cmds[6], DrawCommand::Image { name: "bird", .. }));
        assert!(matches!(cmds[7], DrawCommand::FillRect { color: colors::PIPE, .. }));
        assert!(matches!(cmds[8], DrawCommand::FillRect { color: colors::PIPE, .. }));
        match &cmds[9] {
            DrawCommand::Text { text, .. } => assert_eq!(text, "Score: 0"),
            other => panic!("expected score text, got {other:?}"),
        }
    }

    #[test]
    fn test_missing_sprites_fall_back() {
        let state = GameState::new(8, Tuning::default()).unwrap();
        let mut surface = RecordingSurface::default();
        render_frame(&state, &missing(), &mut surface);

        assert!(surface.images().next().is_none());
        assert!(surface.commands.iter().any(|c| matches!(
            c,
            DrawCommand::FillRect { color: colors::BIRD_FALLBACK, rect } if *rect == state.bird.bounds()
        )));
        assert!(
            surface
                .commands
                .iter()
                .any(|c| matches!(c, DrawCommand::FillRect { color: colors::GROUND_FALLBACK, .. }))
        );
    }

    #[test]
    fn test_game_over_text_only_when_ended() {
        let mut state = GameState::new(8, Tuning::default()).unwrap();
        let mut surface = RecordingSurface::default();
        render_frame(&state, &loaded(), &mut surface);
        assert!(!surface.texts().any(|t| t == GAME_OVER_TEXT));

        state.phase = GamePhase::Ended;
        state.score = 3;
        let mut surface = RecordingSurface::default();
        render_frame(&state, &loaded(), &mut surface);
        let texts: Vec<_> = surface.texts().collect();
        assert_eq!(texts, vec!["Score: 3", GAME_OVER_TEXT]);
    }
}
