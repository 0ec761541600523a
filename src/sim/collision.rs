//! Contact tests between balls, paddles, walls and collectibles
//!
//! Everything is axis-aligned, so these are plain interval checks. Contacts
//! only count while the ball is moving into the surface; a ball that has
//! already been turned around is never resolved a second time.

use super::state::{Ball, Paddle, PowerUp, Side};
use crate::consts::{PLAYFIELD_HEIGHT, PLAYFIELD_WIDTH, POWER_UP_PICKUP_REACH};

/// Top or bottom edge of the table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Wall {
    Top,
    Bottom,
}

/// Wall the ball is pushing into, if any
pub fn wall_contact(ball: &Ball) -> Option<Wall> {
    if ball.pos.y - ball.radius <= 0.0 && ball.vel.y < 0.0 {
        Some(Wall::Top)
    } else if ball.pos.y + ball.radius >= PLAYFIELD_HEIGHT && ball.vel.y > 0.0 {
        Some(Wall::Bottom)
    } else {
        None
    }
}

/// Keep the ball on the table vertically and reflect it off a wall it is
/// pushing into; returns the wall that was hit
pub fn resolve_wall(ball: &mut Ball) -> Option<Wall> {
    let hit = wall_contact(ball);
    if hit.is_some() {
        ball.vel.y = -ball.vel.y;
    }
    ball.pos.y = ball.pos.y.clamp(ball.radius, PLAYFIELD_HEIGHT - ball.radius);
    hit
}

/// Whether a free ball reached `paddle` while heading toward it
///
/// The ball's centre must lie on the paddle's vertical span and its leading
/// edge must have reached the paddle face. Sweeping from `prev_x` (the
/// centre before this tick's move) catches a fast ball that jumped clean
/// over the paddle; a ball that was already fully behind the paddle is on
/// its way out for a goal.
pub fn paddle_contact(ball: &Ball, prev_x: f32, paddle: &Paddle) -> bool {
    if ball.is_controlled() || !paddle.spans(ball.pos.y) {
        return false;
    }
    let r = ball.radius;
    let back = paddle.x + paddle.width;
    match paddle.side {
        Side::Left => {
            let face = back;
            ball.vel.x < 0.0
                && ball.pos.x - r <= face
                && (ball.pos.x + r >= paddle.x || prev_x - r >= face)
        }
        Side::Right => {
            let face = paddle.x;
            ball.vel.x > 0.0
                && ball.pos.x + r >= face
                && (ball.pos.x - r <= back || prev_x + r <= face)
        }
    }
}

/// Whether `paddle` can pick up `power_up`
pub fn within_pickup_reach(power_up: &PowerUp, paddle: &Paddle) -> bool {
    (power_up.pos.x - paddle.x).abs() < POWER_UP_PICKUP_REACH && paddle.spans(power_up.pos.y)
}

/// Side whose goal the ball has crossed, if it left the table
pub fn goal_crossed(ball: &Ball) -> Option<Side> {
    if ball.pos.x < 0.0 {
        Some(Side::Left)
    } else if ball.pos.x > PLAYFIELD_WIDTH {
        Some(Side::Right)
    } else {
        None
    }
}
