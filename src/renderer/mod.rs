//! Drawing module
//!
//! Reads a [`GameState`] and issues primitive calls on a [`Surface`]. Never
//! mutates the game and never presents; flushing is the loop's job.

pub mod screens;
pub mod seven_segment;
pub mod shapes;

pub use seven_segment::SevenSegment;

use crate::color::Color;
use crate::sim::{GamePhase, GameState};
use crate::surface::Surface;

/// Draw one full frame for the current phase
pub fn draw(state: &GameState, surface: &mut dyn Surface) {
    surface.fill_all(Color::BLACK);

    match state.phase {
        GamePhase::Welcome => screens::welcome(surface, state.welcome.offset),
        GamePhase::Playing => table(state, surface),
        GamePhase::Goal => {
            if let Some(goal) = &state.goal {
                screens::goal(surface, goal);
            }
            table(state, surface);
        }
        GamePhase::Paused => screens::pause_menu(surface, state),
    }

    state.particles.render(surface);

    if state.phase == GamePhase::Playing {
        screens::scores(surface, state);
    }
    screens::power_up_labels(surface, state);

    if state.debug {
        screens::debug_overlay(surface, state);
    }
}

/// Paddles, balls and collectibles
fn table(state: &GameState, surface: &mut dyn Surface) {
    for paddle in &state.paddles {
        shapes::paddle(surface, paddle);
    }
    for ball in &state.balls {
        shapes::ball(surface, ball);
    }
    for power_up in &state.power_ups {
        shapes::power_up(surface, power_up);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::InputEvent;
    use crate::settings::Settings;
    use crate::sim::tick;
    use crate::surface::testing::{DrawCall, RecordingSurface};

    fn frame(state: &GameState) -> RecordingSurface {
        let mut surface = RecordingSurface::default();
        draw(state, &mut surface);
        surface
    }

    #[test]
    fn test_welcome_frame() {
        let state = GameState::new(&Settings::default());
        let surface = frame(&state);
        assert_eq!(surface.calls[0], DrawCall::FillAll(Color::BLACK));
        assert!(surface.texts().contains(&"Welcome to Pong!"));
        assert_eq!(surface.count(|c| matches!(c, DrawCall::FilledCircle { .. })), 0);
        assert_eq!(surface.presented, 0);
    }

    #[test]
    fn test_playing_frame_has_table_and_scores() {
        let mut state = GameState::new(&Settings::default());
        tick(&mut state, InputEvent::A);
        state.particles.clear();
        let surface = frame(&state);
        // 2 paddles x 3 rects + "000000" twice
        assert_eq!(
            surface.count(|c| matches!(c, DrawCall::FillRect { .. })),
            6 + 2 * 6 * 6
        );
        assert_eq!(
            surface.count(|c| matches!(c, DrawCall::FilledCircle { .. })),
            1
        );
    }

    #[test]
    fn test_paused_frame_shows_difficulty() {
        let mut state = GameState::new(&Settings::default());
        tick(&mut state, InputEvent::A);
        tick(&mut state, InputEvent::Center);
        tick(&mut state, InputEvent::Down);
        let surface = frame(&state);
        assert!(surface.texts().contains(&"PAUSED"));
        assert!(surface.texts().contains(&"AI: easy"));
    }

    #[test]
    fn test_debug_overlay_and_labels() {
        let mut state = GameState::new(&Settings {
            debug: true,
            ..Default::default()
        });
        let mut rng = <rand_pcg::Pcg32 as rand::SeedableRng>::seed_from_u64(0);
        state.paddles[1].apply_power_up(crate::sim::PowerUpKind::Multiball, &mut rng);
        state.fps = 99.5;
        let surface = frame(&state);
        assert!(surface.texts().contains(&"FPS: 99.5"));
        assert!(surface.texts().contains(&"MULTIBALL"));
    }
}
