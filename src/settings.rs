//! Game settings and preferences
//!
//! Loaded from a JSON file next to the binary; missing fields take defaults.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::{MAX_PARTICLES, MAX_VOICES, TICK_INTERVAL_MS};
use crate::sim::AiDifficulty;

/// Who drives the right-hand paddle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum PlayerTwo {
    #[default]
    Ai,
    Human,
}

impl PlayerTwo {
    pub fn as_str(&self) -> &'static str {
        match self {
            PlayerTwo::Ai => "AI",
            PlayerTwo::Human => "Human",
        }
    }
}

/// Game settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Seed for every random decision in a session
    pub seed: u64,
    /// Starting AI difficulty (changeable from the pause menu)
    pub ai_difficulty: AiDifficulty,
    pub player_two: PlayerTwo,

    // === Pools ===
    /// Particle pool capacity
    pub max_particles: usize,
    /// Simultaneous sound voices
    pub polyphony: usize,

    // === Audio ===
    /// Master volume (0.0 - 1.0)
    pub master_volume: f32,
    pub muted: bool,

    // === Gameplay ===
    /// Chance per playing tick that a power-up spawns
    pub power_up_chance: f32,

    // === Loop / HUD ===
    /// Nominal tick interval
    pub tick_interval_ms: u64,
    /// Start with the debug overlay visible
    pub debug: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            seed: 0x5EED_2024,
            ai_difficulty: AiDifficulty::Medium,
            player_two: PlayerTwo::Ai,

            max_particles: MAX_PARTICLES,
            polyphony: MAX_VOICES,

            master_volume: 1.0,
            muted: false,

            power_up_chance: 0.02,

            tick_interval_ms: TICK_INTERVAL_MS,
            debug: false,
        }
    }
}

impl Settings {
    /// Copy with every field clamped into its usable range
    pub fn sanitized(&self) -> Self {
        Self {
            max_particles: self.max_particles.clamp(1, 1024),
            polyphony: self.polyphony.clamp(1, 16),
            master_volume: self.master_volume.clamp(0.0, 1.0),
            power_up_chance: self.power_up_chance.clamp(0.0, 1.0),
            tick_interval_ms: self.tick_interval_ms.clamp(1, 1000),
            ..self.clone()
        }
    }

    /// Effective output gain (0 when muted)
    pub fn effective_volume(&self) -> f32 {
        if self.muted { 0.0 } else { self.master_volume }
    }

    /// Load settings from a JSON file, falling back to defaults
    pub fn load_from(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        match std::fs::read_to_string(path) {
            Ok(json) => match serde_json::from_str::<Settings>(&json) {
                Ok(settings) => {
                    log::info!("Loaded settings from {}", path.display());
                    return settings.sanitized();
                }
                Err(e) => log::warn!("Ignoring malformed settings {}: {}", path.display(), e),
            },
            Err(e) => log::warn!("Could not read settings {}: {}", path.display(), e),
        }

        log::info!("Using default settings");
        Self::default()
    }

    /// Save settings as pretty JSON
    pub fn save_to(&self, path: impl AsRef<Path>) {
        let path = path.as_ref();
        match serde_json::to_string_pretty(self) {
            Ok(json) => match std::fs::write(path, json) {
                Ok(()) => log::info!("Settings saved to {}", path.display()),
                Err(e) => log::warn!("Could not write settings {}: {}", path.display(), e),
            },
            Err(e) => log::warn!("Could not serialize settings: {}", e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_fields_take_defaults() {
        let settings: Settings =
            serde_json::from_str(r#"{ "seed": 42, "player_two": "human" }"#).unwrap();
        assert_eq!(settings.seed, 42);
        assert_eq!(settings.player_two, PlayerTwo::Human);
        assert_eq!(settings.max_particles, MAX_PARTICLES);
        assert_eq!(settings.ai_difficulty, AiDifficulty::Medium);
    }

    #[test]
    fn test_sanitized_clamps() {
        let settings = Settings {
            polyphony: 0,
            master_volume: 3.0,
            power_up_chance: -1.0,
            ..Default::default()
        }
        .sanitized();
        assert_eq!(settings.polyphony, 1);
        assert_eq!(settings.master_volume, 1.0);
        assert_eq!(settings.power_up_chance, 0.0);
    }

    #[test]
    fn test_effective_volume_respects_mute() {
        let mut settings = Settings::default();
        assert_eq!(settings.effective_volume(), 1.0);
        settings.muted = true;
        assert_eq!(settings.effective_volume(), 0.0);
    }

    #[test]
    fn test_save_and_load_round_trip() {
        let path = std::env::temp_dir().join(format!("pico-pong-settings-{}.json", std::process::id()));
        let settings = Settings {
            seed: 9,
            ai_difficulty: AiDifficulty::Hard,
            debug: true,
            ..Default::default()
        };
        settings.save_to(&path);
        let loaded = Settings::load_from(&path);
        std::fs::remove_file(&path).ok();
        assert_eq!(loaded, settings);
    }

    #[test]
    fn test_load_missing_file_uses_defaults() {
        let loaded = Settings::load_from("/nonexistent/pico-pong.json");
        assert_eq!(loaded, Settings::default());
    }
}
