//! Table objects: paddles, balls and collectibles

use crate::color::Color;
use crate::framebuffer::{GLYPH_HEIGHT, GLYPH_WIDTH};
use crate::sim::{Ball, Paddle, PowerUp};
use crate::surface::Surface;

/// Paddle color: tinted while a shape-changing power-up is active
pub fn paddle_color(paddle: &Paddle) -> Color {
    paddle
        .power_up_kind()
        .and_then(|kind| kind.paddle_tint())
        .unwrap_or(Color::WHITE)
}

/// Rounded rectangle built from three overlapping fills
pub fn paddle(surface: &mut dyn Surface, paddle: &Paddle) {
    let color = paddle_color(paddle);
    let (x, y) = (paddle.x as i32, paddle.y as i32);
    let (w, h) = (paddle.width as i32, paddle.height as i32);
    surface.fill_rect(x, y + 2, w, h - 4, color);
    surface.fill_rect(x + 1, y + 1, w - 2, h - 2, color);
    surface.fill_rect(x + 2, y, w - 4, h, color);
}

pub fn ball(surface: &mut dyn Surface, ball: &Ball) {
    surface.fill_circle(
        ball.pos.x as i32,
        ball.pos.y as i32,
        ball.radius as i32,
        Color::WHITE,
    );
}

/// Colored disc with the kind's initial on top
pub fn power_up(surface: &mut dyn Surface, power_up: &PowerUp) {
    let (x, y) = (power_up.pos.x as i32, power_up.pos.y as i32);
    surface.fill_circle(x, y, power_up.radius as i32, power_up.kind.color());
    surface.draw_text(
        power_up.kind.letter(),
        x - GLYPH_WIDTH / 2,
        y - GLYPH_HEIGHT / 2,
        Color::WHITE,
    );
}
