//! Host settings
//!
//! Game rules are compile-time constants; these options only affect how the
//! host runs the loop. Loaded from the JSON file named by `PONG_SETTINGS`.

use serde::{Deserialize, Serialize};

/// Host options
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// RNG seed for serve directions (random when unset)
    pub seed: Option<u64>,
    /// Stop after this many frames
    pub frame_limit: Option<u64>,
    /// Log every presented frame
    pub trace_frames: bool,
}

impl Settings {
    /// Environment variable holding the settings file path
    pub const ENV_VAR: &'static str = "PONG_SETTINGS";

    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    /// Load settings from the file named by `PONG_SETTINGS`.
    /// Falls back to defaults when unset, unreadable or malformed.
    pub fn load() -> Self {
        let Ok(path) = std::env::var(Self::ENV_VAR) else {
            log::info!("Using default settings");
            return Self::default();
        };
        Self::load_from(&path)
    }

    pub fn load_from(path: &str) -> Self {
        let json = match std::fs::read_to_string(path) {
            Ok(json) => json,
            Err(e) => {
                log::warn!("Could not read settings from {}: {}", path, e);
                return Self::default();
            }
        };

        match Self::from_json(&json) {
            Ok(settings) => {
                log::info!("Loaded settings from {}", path);
                settings
            }
            Err(e) => {
                log::warn!("Ignoring malformed settings in {}: {}", path, e);
                Self::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_json_uses_defaults() {
        let settings = Settings::from_json(r#"{ "seed": 42 }"#).unwrap();
        assert_eq!(settings.seed, Some(42));
        assert_eq!(settings.frame_limit, None);
        assert!(!settings.trace_frames);
    }

    #[test]
    fn test_malformed_json_is_an_error() {
        assert!(Settings::from_json("{ seed: }").is_err());
    }

    #[test]
    fn test_json_round_trip() {
        let settings = Settings {
            seed: Some(7),
            frame_limit: Some(600),
            trace_frames: true,
        };
        let json = settings.to_json().unwrap();
        assert_eq!(Settings::from_json(&json).unwrap(), settings);
    }

    #[test]
    fn test_missing_file_falls_back_to_defaults() {
        let settings = Settings::load_from("/nonexistent/pong-settings.json");
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_load_from_file() {
        let path = std::env::temp_dir()
            .join(format!("pong-settings-test-{}.json", std::process::id()));
        std::fs::write(&path, r#"{ "frame_limit": 120, "trace_frames": true }"#).unwrap();
        let settings = Settings::load_from(path.to_str().unwrap());
        let _ = std::fs::remove_file(&path);

        assert_eq!(settings.frame_limit, Some(120));
        assert!(settings.trace_frames);
    }
}
