//! Procedural sound
//!
//! ADSR voices rendered to a PWM duty/frequency pair, mixed in a fixed-slot
//! pool. Advanced synchronously once per tick with a fixed time step.

pub mod envelope;
pub mod mixer;

pub use envelope::{Adsr, Envelope, EnvelopeStage, Tone, Voice, Waveform};
pub use mixer::{Mixer, SilentOutput, SoundEffect, ToneOutput, TraceOutput};
