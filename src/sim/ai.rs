//! Computer opponent for the right-hand paddle

use serde::{Deserialize, Serialize};

use super::state::{Ball, Direction, Paddle};

/// AI difficulty tier, chosen from the pause menu
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AiDifficulty {
    Easy,
    #[default]
    Medium,
    Hard,
}

impl AiDifficulty {
    /// Multiplier applied to the paddle velocity after each AI move
    pub fn speed_factor(self) -> f32 {
        match self {
            AiDifficulty::Easy => 0.5,
            AiDifficulty::Medium => 0.75,
            AiDifficulty::Hard => 1.0,
        }
    }

    /// Joystick up in the pause menu: medium goes to hard, anything else back to medium
    pub fn raised(self) -> Self {
        match self {
            AiDifficulty::Medium => AiDifficulty::Hard,
            _ => AiDifficulty::Medium,
        }
    }

    /// Joystick down in the pause menu: medium goes to easy, anything else back to medium
    pub fn lowered(self) -> Self {
        match self {
            AiDifficulty::Medium => AiDifficulty::Easy,
            _ => AiDifficulty::Medium,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            AiDifficulty::Easy => "easy",
            AiDifficulty::Medium => "medium",
            AiDifficulty::Hard => "hard",
        }
    }
}

/// Move `paddle` one step toward the ball closest to its centre
///
/// The velocity is scaled after the move, so slower tiers both accelerate
/// and coast less.
pub fn drive(paddle: &mut Paddle, balls: &[Ball], difficulty: AiDifficulty) {
    let center = paddle.center_y();
    // min_by keeps the first of equal candidates
    let Some(target) = balls.iter().min_by(|a, b| {
        (a.pos.y - center)
            .abs()
            .partial_cmp(&(b.pos.y - center).abs())
            .unwrap_or(std::cmp::Ordering::Equal)
    }) else {
        return;
    };

    let target_y = target.pos.y - paddle.height / 2.0;
    let direction = if paddle.y < target_y {
        Direction::Down
    } else if paddle.y > target_y {
        Direction::Up
    } else {
        return;
    };

    paddle.step(direction);
    paddle.velocity *= difficulty.speed_factor();
}
