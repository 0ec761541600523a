//! Game state and core simulation types
//!
//! Everything the orchestrator mutates during a tick lives here.

use glam::Vec2;
use rand::seq::IndexedRandom;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::ai::AiDifficulty;
use super::particles::ParticleSystem;
use crate::audio::{Mixer, SilentOutput, ToneOutput};
use crate::color::Color;
use crate::consts::*;
use crate::settings::{PlayerTwo, Settings};

/// Which end of the table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    /// Index into per-side arrays (paddles, scores)
    pub fn index(self) -> usize {
        match self {
            Side::Left => 0,
            Side::Right => 1,
        }
    }

    pub fn opponent(self) -> Side {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }

    /// Sign of a horizontal velocity heading away from this side's paddle
    pub fn away(self) -> f32 {
        match self {
            Side::Left => 1.0,
            Side::Right => -1.0,
        }
    }
}

/// Paddle steering input for one step
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    #[default]
    None,
    Up,
    Down,
}

/// Power-up types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PowerUpKind {
    Grow,
    Shrink,
    Magnet,
    Control,
    Speed,
    Multiball,
}

impl PowerUpKind {
    pub const ALL: [PowerUpKind; 6] = [
        PowerUpKind::Grow,
        PowerUpKind::Shrink,
        PowerUpKind::Magnet,
        PowerUpKind::Control,
        PowerUpKind::Speed,
        PowerUpKind::Multiball,
    ];

    pub fn random(rng: &mut impl Rng) -> Self {
        *Self::ALL.choose(rng).unwrap_or(&PowerUpKind::Grow)
    }

    /// Color of the collectible on the table
    pub fn color(self) -> Color {
        match self {
            PowerUpKind::Grow => Color::GREEN,
            PowerUpKind::Shrink => Color::RED,
            PowerUpKind::Magnet => Color::BLUE,
            PowerUpKind::Control => Color::YELLOW,
            PowerUpKind::Speed => Color::MAGENTA,
            PowerUpKind::Multiball => Color::CYAN,
        }
    }

    /// Tint of a paddle holding this power-up, if it changes the paddle at all
    pub fn paddle_tint(self) -> Option<Color> {
        match self {
            PowerUpKind::Grow => Some(Color::GREEN),
            PowerUpKind::Shrink => Some(Color::RED),
            PowerUpKind::Magnet => Some(Color::BLUE),
            PowerUpKind::Control => Some(Color::YELLOW),
            PowerUpKind::Speed | PowerUpKind::Multiball => None,
        }
    }

    /// Single glyph drawn on the collectible
    pub fn letter(self) -> &'static str {
        match self {
            PowerUpKind::Grow => "G",
            PowerUpKind::Shrink => "S",
            PowerUpKind::Magnet => "M",
            PowerUpKind::Control => "C",
            PowerUpKind::Speed => "S",
            PowerUpKind::Multiball => "M",
        }
    }

    /// HUD label
    pub fn name(self) -> &'static str {
        match self {
            PowerUpKind::Grow => "GROW",
            PowerUpKind::Shrink => "SHRINK",
            PowerUpKind::Magnet => "MAGNET",
            PowerUpKind::Control => "CONTROL",
            PowerUpKind::Speed => "SPEED",
            PowerUpKind::Multiball => "MULTIBALL",
        }
    }
}

/// A power-up held by a paddle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivePowerUp {
    pub kind: PowerUpKind,
    pub ticks_left: u32,
}

/// A player's paddle
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Paddle {
    pub side: Side,
    /// Left edge (fixed per side)
    pub x: f32,
    /// Top edge
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub velocity: f32,
    pub power_up: Option<ActivePowerUp>,
    /// Positive attracts, negative repels
    pub magnet_strength: f32,
}

impl Paddle {
    pub fn new(side: Side) -> Self {
        Self {
            side,
            x: match side {
                Side::Left => PADDLE_LEFT_X,
                Side::Right => PADDLE_RIGHT_X,
            },
            y: PADDLE_START_Y,
            width: PADDLE_WIDTH,
            height: PADDLE_HEIGHT,
            velocity: 0.0,
            power_up: None,
            magnet_strength: 0.0,
        }
    }

    pub fn center_y(&self) -> f32 {
        self.y + self.height / 2.0
    }

    pub fn power_up_kind(&self) -> Option<PowerUpKind> {
        self.power_up.map(|p| p.kind)
    }

    pub fn has_power_up(&self, kind: PowerUpKind) -> bool {
        self.power_up_kind() == Some(kind)
    }

    /// Accelerate, integrate and apply friction
    ///
    /// Friction runs on every call, so a `Direction::None` step coasts the
    /// paddle to a stop.
    pub fn step(&mut self, direction: Direction) {
        match direction {
            Direction::Up => self.velocity -= PADDLE_ACCELERATION,
            Direction::Down => self.velocity += PADDLE_ACCELERATION,
            Direction::None => {}
        }
        self.velocity = self.velocity.clamp(-PADDLE_MAX_SPEED, PADDLE_MAX_SPEED);
        self.y = (self.y + self.velocity).clamp(0.0, PLAYFIELD_HEIGHT - self.height);
        self.velocity *= PADDLE_FRICTION;
    }

    /// Take a collected power-up; every kind runs for the same duration
    pub fn apply_power_up(&mut self, kind: PowerUpKind, rng: &mut impl Rng) {
        match kind {
            PowerUpKind::Grow => self.height = (self.height + 10.0).min(PADDLE_MAX_HEIGHT),
            PowerUpKind::Shrink => self.height = (self.height - 5.0).max(PADDLE_MIN_HEIGHT),
            PowerUpKind::Magnet => {
                self.magnet_strength = if rng.random_bool(0.5) {
                    MAGNET_STRENGTH
                } else {
                    -MAGNET_STRENGTH
                };
            }
            PowerUpKind::Control | PowerUpKind::Speed | PowerUpKind::Multiball => {}
        }
        // A taller paddle may now poke out of the table
        self.y = self.y.clamp(0.0, PLAYFIELD_HEIGHT - self.height);
        self.power_up = Some(ActivePowerUp {
            kind,
            ticks_left: POWER_UP_TICKS,
        });
    }

    /// Count the power-up down; returns the kind that just expired
    pub fn update_power_up(&mut self) -> Option<PowerUpKind> {
        let active = self.power_up.as_mut()?;
        active.ticks_left = active.ticks_left.saturating_sub(1);
        if active.ticks_left > 0 {
            return None;
        }
        let kind = active.kind;
        self.power_up = None;
        self.height = PADDLE_HEIGHT;
        self.magnet_strength = 0.0;
        self.y = self.y.clamp(0.0, PLAYFIELD_HEIGHT - self.height);
        Some(kind)
    }

    /// Whether `y` lies on the paddle's vertical span (edges inclusive)
    pub fn spans(&self, y: f32) -> bool {
        (self.y..=self.y + self.height).contains(&y)
    }
}

/// A ball entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ball {
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
    pub max_speed: f32,
    /// Paddle currently holding this ball
    pub controlled_by: Option<Side>,
}

impl Ball {
    /// Serve from the centre with each velocity component at random ±2
    pub fn new(rng: &mut impl Rng) -> Self {
        let mut component = || {
            if rng.random_bool(0.5) {
                BALL_SERVE_SPEED
            } else {
                -BALL_SERVE_SPEED
            }
        };
        let vel = Vec2::new(component(), component());
        Self::served(vel)
    }

    /// Serve from the centre with a fixed velocity
    pub fn served(vel: Vec2) -> Self {
        Self {
            pos: Vec2::new(BALL_SERVE_X, BALL_SERVE_Y),
            vel,
            radius: BALL_RADIUS,
            max_speed: BALL_MAX_SPEED,
            controlled_by: None,
        }
    }

    pub fn speed(&self) -> f32 {
        self.vel.length()
    }

    pub fn is_controlled(&self) -> bool {
        self.controlled_by.is_some()
    }

    /// Advance one tick: held balls ride on their paddle's face, free balls
    /// integrate; then magnet paddles pull or push
    pub fn step(&mut self, paddles: &[Paddle; 2]) {
        match self.controlled_by {
            Some(side) => {
                let paddle = &paddles[side.index()];
                self.pos.y = paddle.center_y();
                self.pos.x = match side {
                    Side::Left => paddle.x + paddle.width + self.radius,
                    Side::Right => paddle.x - self.radius,
                };
            }
            None => self.pos += self.vel,
        }

        for paddle in paddles {
            if !paddle.has_power_up(PowerUpKind::Magnet) {
                continue;
            }
            let to_paddle = Vec2::new(paddle.x, paddle.center_y()) - self.pos;
            let distance = to_paddle.length();
            // Below 1px the inverse square blows up
            if !(1.0..MAGNET_RANGE).contains(&distance) {
                continue;
            }
            let force = paddle.magnet_strength / (distance * distance);
            self.vel += to_paddle / distance * force;
        }

        let speed = self.speed();
        if speed > self.max_speed {
            self.vel *= self.max_speed / speed;
        }
    }

    /// Reflect off a paddle moving at `paddle_velocity`
    ///
    /// The ball leaves a little faster than it arrived, never slower than
    /// the bounce floor and never faster than its own cap. The horizontal
    /// component is kept above a floor so rallies cannot stall.
    pub fn bounce(&mut self, paddle_velocity: f32) {
        self.vel.x = -self.vel.x;
        self.vel.y += paddle_velocity * SPIN_TRANSFER;

        let speed = (self.speed() + BOUNCE_SPEEDUP)
            .min(self.max_speed)
            .max(BALL_MIN_BOUNCE_SPEED);
        let mut vel = self.vel.try_normalize().unwrap_or(Vec2::X) * speed;

        if vel.x.abs() < BALL_MIN_HORIZONTAL_SPEED {
            let vx = BALL_MIN_HORIZONTAL_SPEED.copysign(vel.x);
            let vy = (speed * speed - vx * vx).max(0.0).sqrt().copysign(vel.y);
            vel = Vec2::new(vx, vy);
        }
        self.vel = vel;
    }

    /// Let go of a held ball, sending it away from `paddle`
    pub fn release(&mut self, paddle: &Paddle) {
        self.controlled_by = None;
        self.bounce(paddle.velocity);
        self.vel.x = self.vel.x.abs() * paddle.side.away();
    }
}

/// A collectible drifting across the table
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PowerUp {
    pub pos: Vec2,
    pub vel: Vec2,
    pub kind: PowerUpKind,
    pub radius: f32,
}

impl PowerUp {
    pub fn new(pos: Vec2, rng: &mut impl Rng) -> Self {
        Self {
            pos,
            vel: Vec2::new(rng.random_range(-1.0..=1.0), rng.random_range(-1.0..=1.0)),
            kind: PowerUpKind::random(rng),
            radius: POWER_UP_RADIUS,
        }
    }

    /// Integrate and reflect off the table edges
    pub fn step(&mut self) {
        self.pos += self.vel;
        if self.pos.x < 0.0 || self.pos.x > PLAYFIELD_WIDTH {
            self.vel.x = -self.vel.x;
            self.pos.x = self.pos.x.clamp(0.0, PLAYFIELD_WIDTH);
        }
        if self.pos.y < 0.0 || self.pos.y > PLAYFIELD_HEIGHT {
            self.vel.y = -self.vel.y;
            self.pos.y = self.pos.y.clamp(0.0, PLAYFIELD_HEIGHT);
        }
    }
}

/// Current phase of the match
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Scrolling instructions, waiting for a start press
    Welcome,
    Playing,
    /// Celebration after a ball left the table
    Goal,
    Paused,
}

/// Goal celebration bookkeeping
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GoalAnimation {
    pub frame: u32,
    /// Ball left through the left edge (right player scored)
    pub is_left_goal: bool,
}

/// Instruction screen scroll
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct WelcomeScroll {
    pub offset: f32,
    pub velocity: f32,
}

/// Complete match state, owned by the orchestrator
#[derive(Debug)]
pub struct GameState {
    pub rng: Pcg32,
    pub phase: GamePhase,
    pub paddles: [Paddle; 2],
    pub balls: Vec<Ball>,
    pub power_ups: Vec<PowerUp>,
    /// Visual particles (not gameplay-affecting)
    pub particles: ParticleSystem,
    pub mixer: Mixer,
    /// Left, right
    pub scores: [u32; 2],
    pub ai_difficulty: AiDifficulty,
    pub player_two: PlayerTwo,
    pub goal: Option<GoalAnimation>,
    pub welcome: WelcomeScroll,
    /// Ticks during which the welcome screen ignores start presses
    pub cooldown: u32,
    pub debug: bool,
    /// Measured by the loop, display only
    pub fps: f32,
    /// Simulation tick counter
    pub ticks: u64,
    pub power_up_chance: f32,
}

impl GameState {
    /// New session on the welcome screen with a silent sound output
    pub fn new(settings: &Settings) -> Self {
        Self::with_output(settings, Box::new(SilentOutput))
    }

    pub fn with_output(settings: &Settings, output: Box<dyn ToneOutput>) -> Self {
        let settings = settings.sanitized();
        let mut rng = Pcg32::seed_from_u64(settings.seed);
        let balls = vec![Ball::new(&mut rng)];

        let mut mixer = Mixer::new(settings.polyphony, output);
        mixer.set_gain(settings.effective_volume());

        Self {
            rng,
            phase: GamePhase::Welcome,
            paddles: [Paddle::new(Side::Left), Paddle::new(Side::Right)],
            balls,
            power_ups: Vec::new(),
            particles: ParticleSystem::new(settings.max_particles),
            mixer,
            scores: [0; 2],
            ai_difficulty: settings.ai_difficulty,
            player_two: settings.player_two,
            goal: None,
            welcome: WelcomeScroll::default(),
            cooldown: 0,
            debug: settings.debug,
            fps: 0.0,
            ticks: 0,
            power_up_chance: settings.power_up_chance,
        }
    }

    pub fn paddle(&self, side: Side) -> &Paddle {
        &self.paddles[side.index()]
    }

    pub fn score(&self, side: Side) -> u32 {
        self.scores[side.index()]
    }

    /// Add to a score; clamping to the display maximum happens at end of tick
    pub fn award(&mut self, side: Side, points: u32) {
        let score = &mut self.scores[side.index()];
        *score = score.saturating_add(points);
    }

    pub fn clamp_scores(&mut self) {
        for score in &mut self.scores {
            *score = (*score).min(SCORE_MAX);
        }
    }

    /// Fresh match: zero scores, one served ball, default paddles, empty table
    pub fn reset_game(&mut self) {
        self.scores = [0; 2];
        self.reset_paddles();
        self.reset_ball();
        self.power_ups.clear();
        self.goal = None;
    }

    /// Replace every ball with a single fresh serve
    pub fn reset_ball(&mut self) {
        self.balls = vec![Ball::new(&mut self.rng)];
    }

    pub fn reset_paddles(&mut self) {
        self.paddles = [Paddle::new(Side::Left), Paddle::new(Side::Right)];
    }

    pub fn toggle_debug(&mut self) {
        self.debug = !self.debug;
        log::debug!("Debug overlay {}", if self.debug { "on" } else { "off" });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn rng() -> Pcg32 {
        Pcg32::seed_from_u64(11)
    }

    fn paddles() -> [Paddle; 2] {
        [Paddle::new(Side::Left), Paddle::new(Side::Right)]
    }

    #[test]
    fn test_paddle_friction_applies_without_input() {
        let mut paddle = Paddle::new(Side::Left);
        paddle.step(Direction::Down);
        assert_eq!(paddle.y, PADDLE_START_Y + 0.5);
        assert!((paddle.velocity - 0.45).abs() < 1e-6);
        paddle.step(Direction::None);
        assert!((paddle.velocity - 0.405).abs() < 1e-6);
    }

    #[test]
    fn test_paddle_velocity_capped() {
        let mut paddle = Paddle::new(Side::Left);
        paddle.velocity = -100.0;
        paddle.y = 100.0;
        paddle.step(Direction::Up);
        assert_eq!(paddle.y, 100.0 - PADDLE_MAX_SPEED);
    }

    #[test]
    fn test_grow_and_shrink_limits() {
        let mut rng = rng();
        let mut paddle = Paddle::new(Side::Left);
        for _ in 0..5 {
            paddle.apply_power_up(PowerUpKind::Grow, &mut rng);
        }
        assert_eq!(paddle.height, PADDLE_MAX_HEIGHT);
        for _ in 0..10 {
            paddle.apply_power_up(PowerUpKind::Shrink, &mut rng);
        }
        assert_eq!(paddle.height, PADDLE_MIN_HEIGHT);
        assert_eq!(paddle.power_up_kind(), Some(PowerUpKind::Shrink));
    }

    #[test]
    fn test_power_up_expires_after_duration() {
        let mut rng = rng();
        let mut paddle = Paddle::new(Side::Right);
        paddle.apply_power_up(PowerUpKind::Magnet, &mut rng);
        assert_eq!(paddle.magnet_strength.abs(), MAGNET_STRENGTH);
        for _ in 0..POWER_UP_TICKS - 1 {
            assert_eq!(paddle.update_power_up(), None);
        }
        assert_eq!(paddle.update_power_up(), Some(PowerUpKind::Magnet));
        assert_eq!(paddle.power_up, None);
        assert_eq!(paddle.magnet_strength, 0.0);
        assert_eq!(paddle.height, PADDLE_HEIGHT);
        assert_eq!(paddle.update_power_up(), None);
    }

    #[test]
    fn test_expiry_restores_height_inside_table() {
        let mut rng = rng();
        let mut paddle = Paddle::new(Side::Left);
        paddle.apply_power_up(PowerUpKind::Shrink, &mut rng);
        paddle.y = PLAYFIELD_HEIGHT - paddle.height;
        for _ in 0..POWER_UP_TICKS {
            paddle.update_power_up();
        }
        assert_eq!(paddle.y, PLAYFIELD_HEIGHT - PADDLE_HEIGHT);
    }

    #[test]
    fn test_serve_velocity_components() {
        let mut rng = rng();
        for _ in 0..20 {
            let ball = Ball::new(&mut rng);
            assert_eq!(ball.pos, Vec2::new(BALL_SERVE_X, BALL_SERVE_Y));
            assert_eq!(ball.vel.x.abs(), BALL_SERVE_SPEED);
            assert_eq!(ball.vel.y.abs(), BALL_SERVE_SPEED);
        }
    }

    #[test]
    fn test_bounce_off_left_paddle_scenario() {
        let mut ball = Ball::served(Vec2::new(-2.0, 2.0));
        ball.bounce(3.0);
        assert!(ball.vel.x > 0.0);
        assert!(ball.vel.y > 2.0);
        assert!(ball.speed() <= ball.max_speed);
    }

    #[test]
    fn test_bounce_keeps_horizontal_floor() {
        let mut ball = Ball::served(Vec2::new(-0.1, 0.0));
        ball.bounce(8.0);
        assert!(ball.vel.x >= BALL_MIN_HORIZONTAL_SPEED - 1e-5);
        assert!(ball.speed() >= BALL_MIN_BOUNCE_SPEED - 1e-5);
    }

    #[test]
    fn test_bounce_from_rest_still_moves() {
        let mut ball = Ball::served(Vec2::ZERO);
        ball.bounce(0.0);
        assert!((ball.speed() - BALL_MIN_BOUNCE_SPEED).abs() < 1e-5);
    }

    #[test]
    fn test_controlled_ball_rides_paddle_face() {
        let mut paddles = paddles();
        paddles[1].y = 30.0;
        let mut ball = Ball::served(Vec2::new(3.0, 1.0));
        ball.controlled_by = Some(Side::Right);
        ball.step(&paddles);
        assert_eq!(ball.pos, Vec2::new(PADDLE_RIGHT_X - BALL_RADIUS, 40.0));

        ball.controlled_by = Some(Side::Left);
        ball.step(&paddles);
        assert_eq!(
            ball.pos.x,
            PADDLE_LEFT_X + PADDLE_WIDTH + BALL_RADIUS
        );
    }

    #[test]
    fn test_release_sends_ball_away() {
        let paddle = Paddle::new(Side::Right);
        let mut ball = Ball::served(Vec2::new(-3.0, 1.0));
        ball.controlled_by = Some(Side::Right);
        ball.release(&paddle);
        assert!(!ball.is_controlled());
        assert!(ball.vel.x < 0.0);
    }

    #[test]
    fn test_magnet_attracts_and_repels() {
        let mut paddles = paddles();
        paddles[0].power_up = Some(ActivePowerUp {
            kind: PowerUpKind::Magnet,
            ticks_left: 10,
        });
        paddles[0].magnet_strength = MAGNET_STRENGTH;

        let start = Vec2::new(PADDLE_LEFT_X + 20.0, paddles[0].center_y());
        let mut ball = Ball::served(Vec2::ZERO);
        ball.pos = start;
        ball.step(&paddles);
        assert!(ball.vel.x < 0.0);

        paddles[0].magnet_strength = -MAGNET_STRENGTH;
        let mut ball = Ball::served(Vec2::ZERO);
        ball.pos = start;
        ball.step(&paddles);
        assert!(ball.vel.x > 0.0);

        // Out of range
        let mut ball = Ball::served(Vec2::ZERO);
        ball.pos = Vec2::new(PADDLE_LEFT_X + MAGNET_RANGE + 5.0, paddles[0].center_y());
        ball.step(&paddles);
        assert_eq!(ball.vel, Vec2::ZERO);
    }

    #[test]
    fn test_power_up_reflects_off_edges() {
        let mut rng = rng();
        let mut pu = PowerUp::new(Vec2::new(0.5, 134.5), &mut rng);
        pu.vel = Vec2::new(-1.0, 1.0);
        pu.step();
        assert_eq!(pu.vel, Vec2::new(1.0, -1.0));
        assert_eq!(pu.pos, Vec2::new(0.0, PLAYFIELD_HEIGHT));
    }

    #[test]
    fn test_reset_game() {
        let mut state = GameState::new(&Settings::default());
        state.scores = [5, 7];
        state.balls.push(Ball::served(Vec2::X));
        state.paddles[0].y = 0.0;
        state.power_ups.push(PowerUp::new(Vec2::ONE, &mut rng()));
        state.reset_game();
        assert_eq!(state.scores, [0, 0]);
        assert_eq!(state.balls.len(), 1);
        assert_eq!(state.paddles[0].y, PADDLE_START_Y);
        assert!(state.power_ups.is_empty());
    }

    proptest! {
        #[test]
        fn prop_paddle_stays_on_table(
            moves in prop::collection::vec(0u8..3, 1..200),
            grow in any::<bool>(),
        ) {
            let mut rng = rng();
            let mut paddle = Paddle::new(Side::Left);
            if grow {
                paddle.apply_power_up(PowerUpKind::Grow, &mut rng);
            }
            for m in moves {
                let dir = match m {
                    0 => Direction::Up,
                    1 => Direction::Down,
                    _ => Direction::None,
                };
                paddle.step(dir);
                paddle.update_power_up();
                prop_assert!(paddle.y >= 0.0);
                prop_assert!(paddle.y <= PLAYFIELD_HEIGHT - paddle.height);
            }
        }

        #[test]
        fn prop_bounce_speed_in_range(
            vx in -12.0f32..12.0,
            vy in -12.0f32..12.0,
            paddle_velocity in -8.0f32..8.0,
            speed_ups in 0u32..3,
        ) {
            let mut ball = Ball::served(Vec2::new(vx, vy));
            for _ in 0..speed_ups {
                ball.max_speed = (ball.max_speed * SPEED_POWER_UP_FACTOR).min(BALL_SPEED_CAP);
            }
            ball.bounce(paddle_velocity);
            let speed = ball.speed();
            prop_assert!(speed >= BALL_MIN_BOUNCE_SPEED - 1e-4);
            prop_assert!(speed <= ball.max_speed + 1e-4);
            prop_assert!(ball.vel.x.abs() >= BALL_MIN_HORIZONTAL_SPEED - 1e-4);
        }
    }
}
