//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must stay hardware-free:
//! - One step per input event
//! - Seeded RNG only
//! - No drawing; the renderer reads the state afterwards
//! - Sound leaves through the mixer's injected output

pub mod ai;
pub mod collision;
pub mod particles;
pub mod state;
pub mod tick;

pub use ai::AiDifficulty;
pub use collision::{Wall, goal_crossed, paddle_contact, resolve_wall, within_pickup_reach};
pub use particles::{Particle, ParticleSystem};
pub use state::{
    ActivePowerUp, Ball, Direction, GamePhase, GameState, GoalAnimation, Paddle, PowerUp,
    PowerUpKind, Side, WelcomeScroll,
};
pub use tick::tick;
