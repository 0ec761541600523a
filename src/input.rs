//! Discrete input events
//!
//! Switch sampling and debouncing happen outside the core; what arrives here
//! is exactly one already-debounced symbol per tick.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

/// One input symbol per tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum InputEvent {
    #[default]
    None,
    Up,
    Down,
    A,
    B,
    Left,
    Right,
    Center,
}

impl InputEvent {
    pub fn is_none(self) -> bool {
        self == InputEvent::None
    }

    pub fn is_vertical(self) -> bool {
        matches!(self, InputEvent::Up | InputEvent::Down)
    }
}

/// What the input collaborator hands over for a single tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct InputFrame {
    pub event: InputEvent,
    /// Both action buttons held: flip the debug overlay
    pub toggle_debug: bool,
}

impl From<InputEvent> for InputFrame {
    fn from(event: InputEvent) -> Self {
        Self {
            event,
            toggle_debug: false,
        }
    }
}

/// Source of per-tick input frames
pub trait InputSource {
    /// Next frame, or None when the source is exhausted (ends the loop)
    fn poll(&mut self) -> Option<InputFrame>;
}

/// Replays a fixed list of frames
#[derive(Debug, Clone, Default)]
pub struct ScriptedInput {
    frames: std::collections::VecDeque<InputFrame>,
}

impl ScriptedInput {
    pub fn new(frames: impl IntoIterator<Item = InputFrame>) -> Self {
        Self {
            frames: frames.into_iter().collect(),
        }
    }

    /// Script from bare events, no debug toggles
    pub fn from_events(events: impl IntoIterator<Item = InputEvent>) -> Self {
        Self::new(events.into_iter().map(InputFrame::from))
    }

    pub fn remaining(&self) -> usize {
        self.frames.len()
    }
}

impl InputSource for ScriptedInput {
    fn poll(&mut self) -> Option<InputFrame> {
        self.frames.pop_front()
    }
}

/// Attract-mode input: starts a match, then wiggles player one at random
pub struct DemoInput {
    rng: Pcg32,
    ticks_left: u64,
    held: InputEvent,
    hold_ticks: u32,
}

impl DemoInput {
    pub fn new(seed: u64, ticks: u64) -> Self {
        Self {
            rng: Pcg32::seed_from_u64(seed),
            ticks_left: ticks,
            held: InputEvent::None,
            hold_ticks: 0,
        }
    }
}

impl InputSource for DemoInput {
    fn poll(&mut self) -> Option<InputFrame> {
        if self.ticks_left == 0 {
            return None;
        }
        self.ticks_left -= 1;

        if self.hold_ticks == 0 {
            // Pick a new stick position and hold it for a while
            self.held = match self.rng.random_range(0..10) {
                0..=2 => InputEvent::Up,
                3..=5 => InputEvent::Down,
                6 => InputEvent::A,
                _ => InputEvent::None,
            };
            self.hold_ticks = self.rng.random_range(4..24);
        }
        self.hold_ticks -= 1;

        Some(self.held.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scripted_input_drains_in_order() {
        let mut input = ScriptedInput::from_events([InputEvent::Up, InputEvent::A]);
        assert_eq!(input.poll().map(|f| f.event), Some(InputEvent::Up));
        assert_eq!(input.poll().map(|f| f.event), Some(InputEvent::A));
        assert_eq!(input.poll(), None);
    }

    #[test]
    fn test_demo_input_is_bounded_and_deterministic() {
        let a: Vec<_> = std::iter::from_fn({
            let mut input = DemoInput::new(7, 50);
            move || input.poll()
        })
        .collect();
        let b: Vec<_> = std::iter::from_fn({
            let mut input = DemoInput::new(7, 50);
            move || input.poll()
        })
        .collect();
        assert_eq!(a.len(), 50);
        assert_eq!(a, b);
        assert!(a.iter().all(|f| !f.toggle_debug));
    }
}
