//! Full-screen overlays: instructions, goal celebration, pause menu, HUD

use super::seven_segment::SevenSegment;
use crate::color::Color;
use crate::consts::{SCREEN_HEIGHT, SCREEN_WIDTH};
use crate::framebuffer::GLYPH_WIDTH;
use crate::sim::{GameState, GoalAnimation, Side};
use crate::surface::Surface;

/// Welcome screen text, one entry per 20px row
pub const INSTRUCTIONS: &[&str] = &[
    "Welcome to Pong!",
    "",
    "Game Controls:",
    "Player 1: Joy Up/Down",
    "Player 2/AI: A/B buttons",
    "",
    "Game Elements:",
    "- Paddles: Control with",
    "  the above buttons",
    "- Ball: Bounces between",
    "  paddles",
    "- Power-ups: Collect to",
    "  grow, shrink, magnet,",
    "  catch, speed up, or",
    "  add multiple balls",
    "",
    "Scoring:",
    "- Score increases with",
    "  paddle movement and",
    "  ball hits",
    "- Goals are worth 10000",
    "",
    "Special Controls:",
    "- Hold A+B: Toggle debug",
    "- Joy Center: Pause game",
    "- In pause menu:",
    "  - A: Resume",
    "  - B: Return to main menu",
    "  - Up/Down: Change AI",
    "    difficulty",
    "",
    "Press any button to start",
    "Scroll with Joy Up/Down",
];

const INSTRUCTION_X: i32 = 10;
const INSTRUCTION_TOP: i32 = 10;
const INSTRUCTION_SPACING: i32 = 20;

pub const LEFT_SCORE: SevenSegment = SevenSegment::new(10, 5, 16);
pub const RIGHT_SCORE: SevenSegment = SevenSegment::new(140, 5, 16);
const SCORE_COLOR: Color = Color::CYAN;

/// Scrolled instruction text; only rows fully inside the screen band are drawn
pub fn welcome(surface: &mut dyn Surface, scroll: f32) {
    let offset = scroll as i32;
    for (i, line) in INSTRUCTIONS.iter().enumerate() {
        let y = INSTRUCTION_TOP + i as i32 * INSTRUCTION_SPACING - offset;
        if (0..SCREEN_HEIGHT).contains(&y) {
            surface.draw_text(line, INSTRUCTION_X, y, Color::WHITE);
        }
    }
}

/// Rainbow "GOAL!" and an expanding, fading ring
pub fn goal(surface: &mut dyn Surface, goal: &GoalAnimation) {
    const TEXT: &str = "GOAL!";
    let x = (SCREEN_WIDTH - TEXT.len() as i32 * GLYPH_WIDTH) / 2;
    let shift = (goal.frame / 5) as usize;
    for (i, ch) in TEXT.char_indices() {
        let color = Color::RAINBOW[(i + shift) % Color::RAINBOW.len()];
        let mut buf = [0u8; 4];
        surface.draw_text(ch.encode_utf8(&mut buf), x + i as i32 * GLYPH_WIDTH, 50, color);
    }

    let radius = (goal.frame * 2).min(100) as i32;
    let fade = Color::WHITE.scale(1.0 - radius as f32 / 100.0);
    surface.draw_circle(120, 67, radius, fade);
}

pub fn pause_menu(surface: &mut dyn Surface, state: &GameState) {
    surface.fill_rect(60, 30, 120, 75, Color::BLUE);
    surface.draw_rect(60, 30, 120, 75, Color::WHITE);
    surface.draw_text("PAUSED", 95, 40, Color::WHITE);
    surface.draw_text("A: Resume", 70, 60, Color::WHITE);
    surface.draw_text("B: Main Menu", 70, 75, Color::WHITE);
    let difficulty = format!("AI: {}", state.ai_difficulty.as_str());
    surface.draw_text(&difficulty, 70, 90, Color::WHITE);
}

pub fn scores(surface: &mut dyn Surface, state: &GameState) {
    LEFT_SCORE.draw_number(surface, state.score(Side::Left), SCORE_COLOR);
    RIGHT_SCORE.draw_number(surface, state.score(Side::Right), SCORE_COLOR);
}

/// Active power-up names in the bottom corners
pub fn power_up_labels(surface: &mut dyn Surface, state: &GameState) {
    if let Some(kind) = state.paddle(Side::Left).power_up_kind() {
        surface.draw_text(kind.name(), 5, 125, Color::WHITE);
    }
    if let Some(kind) = state.paddle(Side::Right).power_up_kind() {
        surface.draw_text(kind.name(), 185, 125, Color::WHITE);
    }
}

pub fn debug_overlay(surface: &mut dyn Surface, state: &GameState) {
    let lines = [
        format!("FPS: {:.1}", state.fps),
        format!(
            "PTS: {}/{}",
            state.particles.len(),
            state.particles.capacity()
        ),
        format!(
            "SND: {}/{}",
            state.mixer.active_voices(),
            state.mixer.polyphony()
        ),
        format!("TICK: {}", state.ticks),
    ];
    for (i, line) in lines.iter().enumerate() {
        surface.draw_text(line, 5, 20 + i as i32 * 10, Color::YELLOW);
    }
}
