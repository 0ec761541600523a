//! Platform abstraction layer
//!
//! The cooperative loop that owns the injected devices:
//! - Input source (one frame per tick)
//! - Drawing surface (acquired once, held for the whole run)
//! - Wall-clock pacing and FPS measurement

use std::time::{Duration, Instant};

use crate::input::InputSource;
use crate::renderer;
use crate::sim::{GameState, tick};
use crate::surface::Surface;

/// Frames per FPS sample
pub const FPS_WINDOW: u32 = 30;

/// Frame-rate estimate refreshed every [`FPS_WINDOW`] frames
#[derive(Debug, Clone, Copy)]
pub struct FpsCounter {
    frames: u32,
    window_start: Instant,
}

impl FpsCounter {
    pub fn new(now: Instant) -> Self {
        Self {
            frames: 0,
            window_start: now,
        }
    }

    /// Count a frame; returns a fresh estimate when a window completes
    pub fn frame(&mut self, now: Instant) -> Option<f32> {
        self.frames += 1;
        if self.frames < FPS_WINDOW {
            return None;
        }
        let secs = now.saturating_duration_since(self.window_start).as_secs_f32();
        self.frames = 0;
        self.window_start = now;
        (secs > 0.0).then(|| FPS_WINDOW as f32 / secs)
    }
}

/// A running machine: game state plus its surface and input
pub struct Arcade<S: Surface, I: InputSource> {
    state: GameState,
    surface: S,
    input: I,
    fps: FpsCounter,
}

impl<S: Surface, I: InputSource> Arcade<S, I> {
    pub fn new(state: GameState, surface: S, input: I) -> Self {
        Self {
            state,
            surface,
            input,
            fps: FpsCounter::new(Instant::now()),
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut GameState {
        &mut self.state
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// Run exactly one tick: poll, update, draw, present
    ///
    /// Returns false once the input source is exhausted.
    pub fn step(&mut self) -> bool {
        let Some(frame) = self.input.poll() else {
            return false;
        };

        if frame.toggle_debug {
            self.state.toggle_debug();
        }
        tick(&mut self.state, frame.event);

        renderer::draw(&self.state, &mut self.surface);
        self.surface.present();

        if let Some(fps) = self.fps.frame(Instant::now()) {
            self.state.fps = fps;
        }
        true
    }

    /// Step until the input runs dry, sleeping out the rest of each slot;
    /// returns the number of ticks run
    pub fn run(&mut self, interval: Duration) -> u64 {
        log::info!("Loop starting ({} ms per tick)", interval.as_millis());
        let mut ticks = 0;
        loop {
            let started = Instant::now();
            if !self.step() {
                break;
            }
            ticks += 1;
            if let Some(rest) = interval.checked_sub(started.elapsed()) {
                std::thread::sleep(rest);
            }
        }
        log::info!("Loop finished after {} ticks", ticks);
        ticks
    }

    pub fn into_parts(self) -> (GameState, S, I) {
        (self.state, self.surface, self.input)
    }
}
