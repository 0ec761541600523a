//! Pico Pong - a handheld Pong variant for a 240x135 SPI display
//!
//! Core modules:
//! - `sim`: Simulation (physics, collisions, state machine, particles)
//! - `audio`: ADSR voices and the fixed-slot mixer
//! - `renderer`: Draws a game state onto a [`Surface`]
//! - `platform`: Cooperative fixed-interval loop and injected devices
//! - `settings`: JSON configuration

pub mod audio;
pub mod color;
pub mod framebuffer;
pub mod input;
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;
pub mod surface;

pub use color::Color;
pub use framebuffer::FrameBuffer;
pub use input::{InputEvent, InputFrame, InputSource};
pub use settings::{PlayerTwo, Settings};
pub use surface::Surface;

/// Game configuration constants
pub mod consts {
    /// Playfield (and display) dimensions in logical pixels
    pub const SCREEN_WIDTH: i32 = 240;
    pub const SCREEN_HEIGHT: i32 = 135;
    pub const PLAYFIELD_WIDTH: f32 = SCREEN_WIDTH as f32;
    pub const PLAYFIELD_HEIGHT: f32 = SCREEN_HEIGHT as f32;

    /// Nominal tick interval of the scheduling loop
    pub const TICK_INTERVAL_MS: u64 = 10;
    /// Fixed audio step per tick, decoupled from the observed frame time
    pub const AUDIO_DT: f32 = 0.01;

    /// Paddle defaults
    pub const PADDLE_LEFT_X: f32 = 10.0;
    pub const PADDLE_RIGHT_X: f32 = 225.0;
    pub const PADDLE_START_Y: f32 = 60.0;
    pub const PADDLE_WIDTH: f32 = 5.0;
    pub const PADDLE_HEIGHT: f32 = 20.0;
    pub const PADDLE_MIN_HEIGHT: f32 = 10.0;
    pub const PADDLE_MAX_HEIGHT: f32 = 40.0;
    pub const PADDLE_ACCELERATION: f32 = 0.5;
    pub const PADDLE_MAX_SPEED: f32 = 8.0;
    pub const PADDLE_FRICTION: f32 = 0.9;

    /// Ball defaults
    pub const BALL_RADIUS: f32 = 3.0;
    pub const BALL_SERVE_X: f32 = 120.0;
    pub const BALL_SERVE_Y: f32 = 67.0;
    pub const BALL_SERVE_SPEED: f32 = 2.0;
    pub const BALL_MAX_SPEED: f32 = 6.0;
    /// Upper bound for the speed power-up compounding
    pub const BALL_SPEED_CAP: f32 = 12.0;
    /// Post-bounce speed floor
    pub const BALL_MIN_BOUNCE_SPEED: f32 = 2.0;
    /// Post-bounce horizontal speed floor
    pub const BALL_MIN_HORIZONTAL_SPEED: f32 = 1.0;
    /// Speed gained on every paddle bounce
    pub const BOUNCE_SPEEDUP: f32 = 0.2;
    /// Fraction of the paddle velocity transferred into the ball on bounce
    pub const SPIN_TRANSFER: f32 = 0.5;

    /// Magnet power-up
    pub const MAGNET_RANGE: f32 = 50.0;
    pub const MAGNET_STRENGTH: f32 = 0.5;

    /// Power-ups
    pub const POWER_UP_RADIUS: f32 = 5.0;
    pub const POWER_UP_TICKS: u32 = 300;
    pub const POWER_UP_PICKUP_REACH: f32 = 10.0;
    pub const MAX_POWER_UPS: usize = 8;
    pub const SPEED_POWER_UP_FACTOR: f32 = 1.5;

    /// Scoring
    pub const SCORE_MAX: u32 = 999_999;
    pub const SCORE_DIGITS: usize = 6;
    pub const SCORE_MOVE: u32 = 10;
    pub const SCORE_HIT: u32 = 100;
    pub const SCORE_POWER_UP: u32 = 1_000;
    pub const SCORE_GOAL: u32 = 10_000;

    /// Goal celebration length in ticks
    pub const GOAL_ANIMATION_TICKS: u32 = 30;
    /// Ticks the welcome screen ignores start presses after leaving a match
    pub const WELCOME_COOLDOWN_TICKS: u32 = 30;
    pub const WELCOME_SCROLL_MAX: f32 = 300.0;
    pub const WELCOME_SCROLL_SPEED_MAX: f32 = 5.0;

    /// Particle pool default
    pub const MAX_PARTICLES: usize = 100;
    /// Voice pool default
    pub const MAX_VOICES: usize = 8;
}
