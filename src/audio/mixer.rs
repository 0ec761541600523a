//! Fixed-slot voice pool
//!
//! Gameplay never builds voices itself; it fires one of the named sound
//! events and the mixer picks the preset.

use super::envelope::{Adsr, EnvelopeStage, Tone, Voice, Waveform};

/// Sound effect types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundEffect {
    /// Ball hits paddle
    PaddleHit,
    /// Ball hits top or bottom wall
    WallBounce,
    /// Power-up picked up by a paddle
    PowerUpCollect,
    /// Ball left the table
    Goal,
}

impl SoundEffect {
    /// Preset voice and auto-off timeout (seconds) for this effect
    fn preset(self) -> (Voice, f32) {
        match self {
            // E5
            SoundEffect::PaddleHit => (
                Voice::new(
                    Waveform::Square { duty_cycle: 0.5 },
                    660.0,
                    Adsr::new(0.01, 0.05, 0.2, 0.1),
                ),
                0.2,
            ),
            // A4
            SoundEffect::WallBounce => (
                Voice::new(Waveform::Sine, 440.0, Adsr::new(0.01, 0.05, 0.1, 0.1)),
                0.15,
            ),
            // A5
            SoundEffect::PowerUpCollect => (
                Voice::new(Waveform::Sawtooth, 880.0, Adsr::new(0.01, 0.1, 0.3, 0.2)),
                0.3,
            ),
            // A3
            SoundEffect::Goal => (
                Voice::new(Waveform::Noise, 220.0, Adsr::new(0.01, 0.3, 0.5, 0.5)),
                1.0,
            ),
        }
    }
}

/// Where voice output ends up (PWM pins on the handheld)
pub trait ToneOutput {
    fn set_tone(&mut self, channel: usize, tone: &Tone);

    fn silence(&mut self, channel: usize);
}

/// Discards all output
#[derive(Debug, Default, Clone, Copy)]
pub struct SilentOutput;

impl ToneOutput for SilentOutput {
    fn set_tone(&mut self, _channel: usize, _tone: &Tone) {}

    fn silence(&mut self, _channel: usize) {}
}

/// Logs every tone change at trace level
#[derive(Debug, Default, Clone, Copy)]
pub struct TraceOutput;

impl ToneOutput for TraceOutput {
    fn set_tone(&mut self, channel: usize, tone: &Tone) {
        log::trace!(
            "ch{} {} {:.0}Hz amp={:.3} duty={}",
            channel,
            tone.waveform.name(),
            tone.frequency,
            tone.amplitude,
            tone.duty
        );
    }

    fn silence(&mut self, channel: usize) {
        log::trace!("ch{} silent", channel);
    }
}

/// Bounded pool of active voices; a voice's slot index is its output channel
pub struct Mixer {
    slots: Vec<Option<Voice>>,
    output: Box<dyn ToneOutput>,
    /// Applied to every duty value (0 mutes)
    gain: f32,
}

impl std::fmt::Debug for Mixer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Mixer")
            .field("slots", &self.slots)
            .field("gain", &self.gain)
            .finish_non_exhaustive()
    }
}

impl Mixer {
    pub fn new(polyphony: usize, output: Box<dyn ToneOutput>) -> Self {
        Self {
            slots: (0..polyphony.max(1)).map(|_| None).collect(),
            output,
            gain: 1.0,
        }
    }

    pub fn set_gain(&mut self, gain: f32) {
        self.gain = gain.clamp(0.0, 1.0);
    }

    pub fn polyphony(&self) -> usize {
        self.slots.len()
    }

    /// Number of occupied slots
    pub fn active_voices(&self) -> usize {
        self.slots.iter().filter(|s| s.is_some()).count()
    }

    pub fn voices(&self) -> impl Iterator<Item = &Voice> {
        self.slots.iter().flatten()
    }

    /// Insert a voice into a free slot; returns the channel, or None if the
    /// pool is still full after reaping (the new voice is dropped)
    pub fn add_voice(&mut self, voice: Voice) -> Option<usize> {
        self.reap();
        match self.slots.iter().position(|s| s.is_none()) {
            Some(channel) => {
                self.slots[channel] = Some(voice);
                Some(channel)
            }
            None => {
                log::debug!("All {} voices busy, dropping sound", self.slots.len());
                None
            }
        }
    }

    /// Build the preset voice for `effect`, insert it and start it
    pub fn play(&mut self, effect: SoundEffect) {
        let (mut voice, timeout) = effect.preset();
        voice.trigger(timeout);
        self.add_voice(voice);
    }

    pub fn paddle_hit(&mut self) {
        self.play(SoundEffect::PaddleHit);
    }

    pub fn wall_bounce(&mut self) {
        self.play(SoundEffect::WallBounce);
    }

    pub fn power_up_collect(&mut self) {
        self.play(SoundEffect::PowerUpCollect);
    }

    pub fn goal(&mut self) {
        self.play(SoundEffect::Goal);
    }

    /// Advance every voice and push its tone to its channel
    pub fn tick(&mut self, dt: f32) {
        let gain = self.gain;
        for (channel, slot) in self.slots.iter_mut().enumerate() {
            if let Some(voice) = slot {
                let mut tone = voice.advance(dt);
                tone.duty = (tone.duty as f32 * gain) as u16;
                self.output.set_tone(channel, &tone);
            }
        }
    }

    /// Free every slot whose voice has gone silent
    pub fn reap(&mut self) {
        for (channel, slot) in self.slots.iter_mut().enumerate() {
            if slot
                .as_ref()
                .is_some_and(|v| v.stage() == EnvelopeStage::Off)
            {
                *slot = None;
                self.output.silence(channel);
            }
        }
    }

    /// Move every voice into its release ramp
    pub fn release_all(&mut self) {
        for voice in self.slots.iter_mut().flatten() {
            voice.release();
        }
    }
}
