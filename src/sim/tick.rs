//! One simulation step per input event
//!
//! `tick` is the whole state machine: it dispatches on the current phase,
//! then runs the housekeeping every phase shares (particles, cooldown,
//! audio).

use glam::Vec2;
use rand::Rng;

use super::ai;
use super::collision::{goal_crossed, paddle_contact, resolve_wall, within_pickup_reach};
use super::state::{
    Ball, Direction, GameState, GamePhase, GoalAnimation, PowerUp, PowerUpKind, Side,
    WelcomeScroll,
};
use crate::consts::*;
use crate::input::InputEvent;
use crate::settings::PlayerTwo;

/// Chance per welcome tick of one ambient particle
const AMBIENT_PARTICLE_CHANCE: f64 = 0.1;

/// Advance the game by one tick
pub fn tick(state: &mut GameState, event: InputEvent) {
    match state.phase {
        GamePhase::Welcome => update_welcome(state, event),
        GamePhase::Playing => update_playing(state, event),
        GamePhase::Goal => update_goal(state),
        GamePhase::Paused => update_paused(state, event),
    }

    state.particles.tick();
    state.cooldown = state.cooldown.saturating_sub(1);
    state.mixer.tick(AUDIO_DT);
    state.mixer.reap();
    state.ticks += 1;
}

fn update_welcome(state: &mut GameState, event: InputEvent) {
    let scroll = &mut state.welcome;
    match event {
        InputEvent::Up => scroll.velocity -= 0.5,
        InputEvent::Down => scroll.velocity += 0.5,
        _ => scroll.velocity *= 0.9,
    }
    scroll.velocity = scroll
        .velocity
        .clamp(-WELCOME_SCROLL_SPEED_MAX, WELCOME_SCROLL_SPEED_MAX);
    scroll.offset = (scroll.offset + scroll.velocity).clamp(0.0, WELCOME_SCROLL_MAX);

    if state.rng.random_bool(AMBIENT_PARTICLE_CHANCE) {
        state.particles.ambient_rise(&mut state.rng);
    }

    if !event.is_none() && !event.is_vertical() && state.cooldown == 0 {
        state.reset_game();
        state.phase = GamePhase::Playing;
        log::info!("Match started");
    }
}

fn update_paused(state: &mut GameState, event: InputEvent) {
    match event {
        InputEvent::A => {
            state.phase = GamePhase::Playing;
            log::info!("Resumed");
        }
        InputEvent::B => {
            state.phase = GamePhase::Welcome;
            state.welcome = WelcomeScroll::default();
            state.cooldown = WELCOME_COOLDOWN_TICKS;
            log::info!("Back to main menu");
        }
        InputEvent::Up | InputEvent::Down => {
            state.ai_difficulty = if event == InputEvent::Up {
                state.ai_difficulty.raised()
            } else {
                state.ai_difficulty.lowered()
            };
            log::debug!("AI difficulty: {}", state.ai_difficulty.as_str());
        }
        _ => {}
    }
}

fn update_goal(state: &mut GameState) {
    let Some(goal) = state.goal.as_mut() else {
        state.phase = GamePhase::Playing;
        return;
    };

    goal.frame += 1;
    if goal.frame >= GOAL_ANIMATION_TICKS {
        state.goal = None;
        state.phase = GamePhase::Playing;
        state.mixer.release_all();
        state.reset_ball();
        state.reset_paddles();
    }
}

fn update_playing(state: &mut GameState, event: InputEvent) {
    let human_p2 = state.player_two == PlayerTwo::Human;
    match event {
        InputEvent::Up | InputEvent::Down => {
            let dir = if event == InputEvent::Up {
                Direction::Up
            } else {
                Direction::Down
            };
            state.paddles[Side::Left.index()].step(dir);
            state.award(Side::Left, SCORE_MOVE);
        }
        InputEvent::A | InputEvent::B if human_p2 => {
            let dir = if event == InputEvent::A {
                Direction::Up
            } else {
                Direction::Down
            };
            state.paddles[Side::Right.index()].step(dir);
            state.award(Side::Right, SCORE_MOVE);
        }
        _ => {}
    }

    for paddle in &mut state.paddles {
        paddle.step(Direction::None);
    }
    for paddle in &mut state.paddles {
        if let Some(kind) = paddle.update_power_up() {
            log::debug!("{:?} paddle lost {}", paddle.side, kind.name());
        }
    }

    if !human_p2 {
        ai::drive(
            &mut state.paddles[Side::Right.index()],
            &state.balls,
            state.ai_difficulty,
        );
    }

    update_balls(state);
    score_goals(state);
    if state.balls.is_empty() {
        state.reset_ball();
    }
    update_power_ups(state);

    state.clamp_scores();

    // The pausing tick still plays out; a goal on the same tick wins
    if event == InputEvent::Center && state.phase == GamePhase::Playing {
        state.phase = GamePhase::Paused;
        log::info!("Paused");
    }
}

fn update_balls(state: &mut GameState) {
    let mut hits: Vec<(Side, Vec2)> = Vec::new();

    for ball in &mut state.balls {
        // Holder no longer has control (expired or replaced)
        if let Some(side) = ball.controlled_by {
            let paddle = &state.paddles[side.index()];
            if !paddle.has_power_up(PowerUpKind::Control) {
                ball.release(paddle);
            }
        }

        let prev_x = ball.pos.x;
        ball.step(&state.paddles);

        if resolve_wall(ball).is_some() {
            state.mixer.wall_bounce();
        }

        if let Some(paddle) = state.paddles.iter().find(|p| paddle_contact(ball, prev_x, p)) {
            if paddle.has_power_up(PowerUpKind::Control) {
                ball.controlled_by = Some(paddle.side);
            } else {
                ball.bounce(paddle.velocity);
            }
            hits.push((paddle.side, ball.pos));
        }
    }

    for (side, at) in hits {
        state.award(side, SCORE_HIT);
        state.particles.hit_burst(&mut state.rng, at);
        state.mixer.paddle_hit();
    }
}

/// Remove every ball that left the table, crediting the opposing side
fn score_goals(state: &mut GameState) {
    let mut kept = Vec::with_capacity(state.balls.len());
    for ball in std::mem::take(&mut state.balls) {
        match goal_crossed(&ball) {
            Some(side) => start_goal(state, side),
            None => kept.push(ball),
        }
    }
    state.balls = kept;
}

fn start_goal(state: &mut GameState, conceded: Side) {
    let scorer = conceded.opponent();
    state.award(scorer, SCORE_GOAL);
    state.phase = GamePhase::Goal;
    state.goal = Some(GoalAnimation {
        frame: 0,
        is_left_goal: conceded == Side::Left,
    });
    state.particles.goal_celebration(&mut state.rng);
    state.mixer.goal();
    log::info!(
        "Goal for {:?}: {} - {}",
        scorer,
        state.score(Side::Left),
        state.score(Side::Right)
    );
}

fn update_power_ups(state: &mut GameState) {
    if state.power_ups.len() < MAX_POWER_UPS && state.rng.random::<f32>() < state.power_up_chance
    {
        let pos = Vec2::new(
            state.rng.random_range(20..=220) as f32,
            state.rng.random_range(20..=115) as f32,
        );
        let power_up = PowerUp::new(pos, &mut state.rng);
        state.power_ups.push(power_up);
    }

    for power_up in &mut state.power_ups {
        power_up.step();
    }

    let mut kept = Vec::with_capacity(state.power_ups.len());
    for power_up in std::mem::take(&mut state.power_ups) {
        let collector = [Side::Left, Side::Right]
            .into_iter()
            .find(|&side| within_pickup_reach(&power_up, state.paddle(side)));
        match collector {
            Some(side) => collect_power_up(state, side, power_up.kind),
            None => kept.push(power_up),
        }
    }
    state.power_ups = kept;
}

fn collect_power_up(state: &mut GameState, side: Side, kind: PowerUpKind) {
    state.paddles[side.index()].apply_power_up(kind, &mut state.rng);
    state.award(side, SCORE_POWER_UP);
    state.mixer.power_up_collect();
    log::debug!("{:?} paddle collected {}", side, kind.name());

    match kind {
        PowerUpKind::Speed => {
            for ball in &mut state.balls {
                ball.max_speed = (ball.max_speed * SPEED_POWER_UP_FACTOR).min(BALL_SPEED_CAP);
            }
        }
        PowerUpKind::Multiball => {
            let ball = match state.balls.first() {
                Some(first) => Ball::served(-first.vel),
                None => Ball::new(&mut state.rng),
            };
            state.balls.push(ball);
        }
        PowerUpKind::Grow | PowerUpKind::Shrink | PowerUpKind::Magnet | PowerUpKind::Control => {}
    }
}
