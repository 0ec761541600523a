//! ADSR envelope and the single voice type
//!
//! Every sound is one [`Voice`]: a frequency, a waveform tag and an
//! [`Envelope`]. The waveform only matters to the output stage; the envelope
//! logic is shared.

use serde::{Deserialize, Serialize};

/// Timer and stage remainders below this count as expired (absorbs f32 step drift)
const TIMEOUT_EPSILON: f32 = 1e-5;

/// Envelope stage, advancing one way per trigger
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EnvelopeStage {
    Attack,
    Decay,
    Sustain,
    Release,
    Off,
}

/// ADSR timing constants (seconds, sustain is a level)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Adsr {
    pub attack: f32,
    pub decay: f32,
    pub sustain: f32,
    pub release: f32,
}

impl Default for Adsr {
    fn default() -> Self {
        Self {
            attack: 0.01,
            decay: 0.1,
            sustain: 0.7,
            release: 0.3,
        }
    }
}

impl Adsr {
    pub const fn new(attack: f32, decay: f32, sustain: f32, release: f32) -> Self {
        Self {
            attack,
            decay,
            sustain,
            release,
        }
    }
}

/// Amplitude contour of one voice
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Envelope {
    pub adsr: Adsr,
    stage: EnvelopeStage,
    /// Time spent in the current stage
    elapsed: f32,
    /// Level the release ramp starts from
    release_from: f32,
    /// Remaining auto-off time (<= 0 means no timer)
    timeout: f32,
}

impl Envelope {
    pub fn new(adsr: Adsr) -> Self {
        Self {
            adsr: Adsr {
                sustain: adsr.sustain.clamp(0.0, 1.0),
                ..adsr
            },
            stage: EnvelopeStage::Off,
            elapsed: 0.0,
            release_from: 0.0,
            timeout: 0.0,
        }
    }

    pub fn stage(&self) -> EnvelopeStage {
        self.stage
    }

    pub fn is_off(&self) -> bool {
        self.stage == EnvelopeStage::Off
    }

    /// Start the note; `timeout` > 0 releases it automatically after that long
    pub fn trigger(&mut self, timeout: f32) {
        self.stage = EnvelopeStage::Attack;
        self.elapsed = 0.0;
        self.release_from = 0.0;
        self.timeout = timeout.max(0.0);
        self.settle();
    }

    /// Enter the release ramp from wherever the level currently is
    pub fn release(&mut self) {
        match self.stage {
            EnvelopeStage::Release | EnvelopeStage::Off => {}
            _ => {
                self.release_from = self.level();
                self.stage = EnvelopeStage::Release;
                self.elapsed = 0.0;
                self.timeout = 0.0;
                self.settle();
            }
        }
    }

    /// Current level
    pub fn level(&self) -> f32 {
        let Adsr {
            attack,
            decay,
            sustain,
            release,
        } = self.adsr;

        match self.stage {
            EnvelopeStage::Attack if attack > 0.0 => (self.elapsed / attack).clamp(0.0, 1.0),
            EnvelopeStage::Attack => 1.0,
            EnvelopeStage::Decay if decay > 0.0 => {
                let t = (self.elapsed / decay).clamp(0.0, 1.0);
                1.0 - (1.0 - sustain) * t
            }
            EnvelopeStage::Decay | EnvelopeStage::Sustain => sustain,
            EnvelopeStage::Release if release > 0.0 => {
                let t = (self.elapsed / release).clamp(0.0, 1.0);
                self.release_from * (1.0 - t)
            }
            EnvelopeStage::Release | EnvelopeStage::Off => 0.0,
        }
    }

    /// Move past every stage boundary the elapsed time has reached
    fn settle(&mut self) {
        loop {
            let length = match self.stage {
                EnvelopeStage::Attack => self.adsr.attack,
                EnvelopeStage::Decay => self.adsr.decay,
                EnvelopeStage::Release => self.adsr.release,
                EnvelopeStage::Sustain | EnvelopeStage::Off => return,
            };
            if length > 0.0 && self.elapsed + TIMEOUT_EPSILON < length {
                return;
            }
            self.elapsed = (self.elapsed - length.max(0.0)).max(0.0);
            self.stage = match self.stage {
                EnvelopeStage::Attack => EnvelopeStage::Decay,
                EnvelopeStage::Decay => EnvelopeStage::Sustain,
                _ => {
                    self.elapsed = 0.0;
                    EnvelopeStage::Off
                }
            };
        }
    }

    /// Sample the level, then move time forward by `dt`
    pub fn advance(&mut self, dt: f32) -> f32 {
        let level = self.level();
        if self.stage == EnvelopeStage::Off {
            return level;
        }

        self.elapsed += dt;
        self.settle();

        if self.timeout > 0.0 {
            self.timeout -= dt;
            if self.timeout <= TIMEOUT_EPSILON {
                self.release();
            }
        }

        level
    }
}

/// Waveform tag, consumed only by the output stage
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Waveform {
    Square { duty_cycle: f32 },
    Sawtooth,
    Sine,
    Noise,
}

impl Waveform {
    pub fn name(&self) -> &'static str {
        match self {
            Waveform::Square { .. } => "square",
            Waveform::Sawtooth => "sawtooth",
            Waveform::Sine => "sine",
            Waveform::Noise => "noise",
        }
    }
}

/// Instantaneous output of one voice
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tone {
    pub waveform: Waveform,
    pub frequency: f32,
    /// Envelope level, 0..=1
    pub amplitude: f32,
    /// PWM duty for a 16-bit output (level x volume)
    pub duty: u16,
}

/// One sound generator
#[derive(Debug, Clone)]
pub struct Voice {
    pub waveform: Waveform,
    pub frequency: f32,
    /// 0..=100
    pub volume: f32,
    pub envelope: Envelope,
}

impl Voice {
    pub fn new(waveform: Waveform, frequency: f32, adsr: Adsr) -> Self {
        Self {
            waveform,
            frequency,
            volume: 50.0,
            envelope: Envelope::new(adsr),
        }
    }

    pub fn with_volume(mut self, volume: f32) -> Self {
        self.volume = volume.clamp(0.0, 100.0);
        self
    }

    pub fn trigger(&mut self, timeout: f32) {
        self.envelope.trigger(timeout);
    }

    pub fn release(&mut self) {
        self.envelope.release();
    }

    pub fn stage(&self) -> EnvelopeStage {
        self.envelope.stage()
    }

    pub fn is_off(&self) -> bool {
        self.envelope.is_off()
    }

    /// Advance the envelope and produce what the transducer should play
    pub fn advance(&mut self, dt: f32) -> Tone {
        let amplitude = self.envelope.advance(dt);
        // level 1.0 at volume 100 maps to full scale
        let duty = (amplitude * self.volume / 100.0 * u16::MAX as f32).clamp(0.0, u16::MAX as f32);
        let duty = duty as u16;
        Tone {
            waveform: self.waveform,
            frequency: self.frequency,
            amplitude,
            duty,
        }
    }
}
