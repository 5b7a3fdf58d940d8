//! Scene tuning and preferences
//!
//! Persisted in LocalStorage so the animation can be retuned without a rebuild.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::{ChaseError, Result};

/// Chase scene tuning
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChaseSettings {
    /// Run the animation at all
    pub enabled: bool,

    // === Motion ===
    /// Pac-Man speed per frame (fraction of surface width)
    pub pacman_speed: f32,
    /// Ghost speeds per frame (fraction of surface width): Blinky, Inky, Pinky
    pub ghost_speeds: [f32; 3],
    /// Gap kept behind the lead ghost after the power cube is eaten
    pub trailing_gap: f32,
    /// Ghost float bob per frame
    pub float_step: f32,
    /// Mouth phase change per frame
    pub mouth_step: f32,

    // === Sizing ===
    pub base_size_divisor: f32,
    pub base_size_height_fraction: f32,
    /// Upper bound on Pac-Man's radius (classic arcade look)
    pub base_size_cap: f32,

    // === Timing ===
    /// Seconds between a finished scene and the next one
    pub restart_delay_secs: f32,
}

impl Default for ChaseSettings {
    fn default() -> Self {
        Self {
            enabled: true,

            pacman_speed: PACMAN_SPEED,
            ghost_speeds: GHOST_SPEEDS,
            trailing_gap: TRAILING_GAP,
            float_step: FLOAT_STEP,
            mouth_step: MOUTH_STEP,

            base_size_divisor: BASE_SIZE_DIVISOR,
            base_size_height_fraction: BASE_SIZE_HEIGHT_FRACTION,
            base_size_cap: BASE_SIZE_CAP,

            restart_delay_secs: RESTART_DELAY_SECS,
        }
    }
}

/// Longest restart pause a stored setting may ask for (one day)
pub const MAX_RESTART_DELAY_SECS: f32 = 86_400.0;

impl ChaseSettings {
    /// LocalStorage key
    #[cfg(target_arch = "wasm32")]
    const STORAGE_KEY: &'static str = "pacman_chase_settings";

    /// Parse and validate settings from JSON (missing fields take defaults)
    pub fn from_json(json: &str) -> Result<Self> {
        let settings: Self = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Reject values the scene cannot be laid out with
    pub fn validate(&self) -> Result<()> {
        let positive = [
            ("pacman_speed", self.pacman_speed),
            ("base_size_divisor", self.base_size_divisor),
            ("base_size_height_fraction", self.base_size_height_fraction),
            ("base_size_cap", self.base_size_cap),
            ("float_step", self.float_step),
            ("mouth_step", self.mouth_step),
        ];
        for (name, value) in positive {
            if !value.is_finite() || value <= 0.0 {
                return Err(ChaseError::InvalidSettings(format!(
                    "{} must be positive, got {}",
                    name, value
                )));
            }
        }

        if let Some(speed) = self.ghost_speeds.iter().find(|s| !s.is_finite() || **s < 0.0) {
            return Err(ChaseError::InvalidSettings(format!(
                "ghost speeds must be non-negative, got {}",
                speed
            )));
        }

        if !self.trailing_gap.is_finite() || self.trailing_gap < 0.0 {
            return Err(ChaseError::InvalidSettings(format!(
                "trailing_gap must be non-negative, got {}",
                self.trailing_gap
            )));
        }

        if !(0.0..=MAX_RESTART_DELAY_SECS).contains(&self.restart_delay_secs) {
            return Err(ChaseError::InvalidSettings(format!(
                "restart_delay_secs must be within 0..={}, got {}",
                MAX_RESTART_DELAY_SECS, self.restart_delay_secs
            )));
        }

        Ok(())
    }

    /// Restart delay as a duration
    ///
    /// Unvalidated values that don't fit a `Duration` fall back to the default.
    pub fn restart_delay(&self) -> Duration {
        Duration::try_from_secs_f32(self.restart_delay_secs).unwrap_or_else(|e| {
            log::warn!(
                "restart_delay_secs {} unusable ({}), using {}s",
                self.restart_delay_secs,
                e,
                RESTART_DELAY_SECS
            );
            Duration::from_secs_f32(RESTART_DELAY_SECS)
        })
    }

    /// Load settings from LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(Some(json)) = storage.get_item(Self::STORAGE_KEY) {
                match Self::from_json(&json) {
                    Ok(settings) => {
                        log::info!("Loaded chase settings from LocalStorage");
                        return settings;
                    }
                    Err(e) => log::warn!("Ignoring stored chase settings: {}", e),
                }
            }
        }

        log::info!("Using default chase settings");
        Self::default()
    }

    /// Native stub
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_json_fills_defaults() {
        let settings = ChaseSettings::from_json(r#"{ "restart_delay_secs": 3.5 }"#).unwrap();
        assert_eq!(settings.restart_delay_secs, 3.5);
        assert_eq!(settings.pacman_speed, PACMAN_SPEED);
        assert_eq!(settings.ghost_speeds, GHOST_SPEEDS);
        assert!(settings.enabled);
    }

    #[test]
    fn test_rejects_non_positive_sizes() {
        let err = ChaseSettings::from_json(r#"{ "base_size_cap": 0 }"#).unwrap_err();
        assert!(matches!(err, ChaseError::InvalidSettings(_)));

        let err = ChaseSettings::from_json(r#"{ "ghost_speeds": [0.004, -1.0, 0.004] }"#)
            .unwrap_err();
        assert!(matches!(err, ChaseError::InvalidSettings(_)));
    }

    #[test]
    fn test_malformed_json_is_a_parse_error() {
        let err = ChaseSettings::from_json("{ not json").unwrap_err();
        assert!(matches!(err, ChaseError::Settings(_)));
    }

    #[test]
    fn test_default_restart_delay_is_fifteen_seconds() {
        assert_eq!(
            ChaseSettings::default().restart_delay(),
            Duration::from_secs(15)
        );
    }

    #[test]
    fn test_rejects_restart_delay_beyond_duration_range() {
        let err = ChaseSettings::from_json(r#"{ "restart_delay_secs": 1e20 }"#).unwrap_err();
        assert!(matches!(err, ChaseError::InvalidSettings(_)));

        let err = ChaseSettings::from_json(r#"{ "restart_delay_secs": -1 }"#).unwrap_err();
        assert!(matches!(err, ChaseError::InvalidSettings(_)));

        let max = format!(r#"{{ "restart_delay_secs": {} }}"#, MAX_RESTART_DELAY_SECS);
        assert!(ChaseSettings::from_json(&max).is_ok());
    }

    #[test]
    fn test_unvalidated_huge_delay_falls_back_to_default() {
        let settings = ChaseSettings {
            restart_delay_secs: 1e20,
            ..Default::default()
        };
        assert_eq!(settings.restart_delay(), Duration::from_secs(15));

        let settings = ChaseSettings {
            restart_delay_secs: f32::NAN,
            ..Default::default()
        };
        assert_eq!(settings.restart_delay(), Duration::from_secs(15));
    }
}
