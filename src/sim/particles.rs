//! Bounded pool of decaying visual particles
//!
//! Purely cosmetic; never feeds back into gameplay.

use std::collections::VecDeque;

use glam::Vec2;
use rand::Rng;
use rand::seq::IndexedRandom;

use crate::color::Color;
use crate::consts::{PLAYFIELD_HEIGHT, SCREEN_HEIGHT, SCREEN_WIDTH};
use crate::surface::Surface;

/// A particle for visual effects
#[derive(Debug, Clone, PartialEq)]
pub struct Particle {
    pub pos: Vec2,
    pub vel: Vec2,
    pub color: Color,
    /// Remaining ticks
    pub lifetime: u32,
}

/// FIFO pool: when full, the oldest particle makes room for the newest
#[derive(Debug, Clone)]
pub struct ParticleSystem {
    particles: VecDeque<Particle>,
    capacity: usize,
}

impl ParticleSystem {
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            particles: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    /// Oldest first
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &Particle> {
        self.particles.iter()
    }

    pub fn clear(&mut self) {
        self.particles.clear();
    }

    pub fn spawn(&mut self, x: f32, y: f32, vx: f32, vy: f32, color: Color, lifetime: u32) {
        if self.particles.len() >= self.capacity {
            self.particles.pop_front();
        }
        self.particles.push_back(Particle {
            pos: Vec2::new(x, y),
            vel: Vec2::new(vx, vy),
            color,
            lifetime,
        });
    }

    /// Move every particle one step and drop the expired ones
    pub fn tick(&mut self) {
        for p in self.particles.iter_mut() {
            p.pos += p.vel;
            p.lifetime = p.lifetime.saturating_sub(1);
        }
        self.particles.retain(|p| p.lifetime > 0);
    }

    pub fn render(&self, surface: &mut dyn Surface) {
        for p in &self.particles {
            surface.set_pixel(p.pos.x as i32, p.pos.y as i32, p.color);
        }
    }

    /// Spark burst where a ball met a paddle
    pub fn hit_burst(&mut self, rng: &mut impl Rng, at: Vec2) {
        const COLORS: [Color; 3] = [Color::WHITE, Color::CYAN, Color::YELLOW];
        for _ in 0..10 {
            let color = *COLORS.choose(rng).unwrap_or(&Color::WHITE);
            self.spawn(
                at.x,
                at.y,
                rng.random_range(-2.0..=2.0),
                rng.random_range(-2.0..=2.0),
                color,
                rng.random_range(15..=30),
            );
        }
    }

    /// Confetti over the whole screen for a goal
    pub fn goal_celebration(&mut self, rng: &mut impl Rng) {
        for _ in 0..50 {
            let color = *Color::RAINBOW.choose(rng).unwrap_or(&Color::WHITE);
            self.spawn(
                rng.random_range(0..=SCREEN_WIDTH) as f32,
                rng.random_range(0..=SCREEN_HEIGHT) as f32,
                rng.random_range(-2.0..=2.0),
                rng.random_range(-2.0..=2.0),
                color,
                rng.random_range(30..=90),
            );
        }
    }

    /// One particle rising from the bottom edge
    pub fn ambient_rise(&mut self, rng: &mut impl Rng) {
        let color = *Color::RAINBOW.choose(rng).unwrap_or(&Color::WHITE);
        self.spawn(
            rng.random_range(0..=SCREEN_WIDTH) as f32,
            PLAYFIELD_HEIGHT,
            rng.random_range(-1.0..=1.0),
            rng.random_range(-3.0..=-1.0),
            color,
            rng.random_range(30..=90),
        );
    }
}
