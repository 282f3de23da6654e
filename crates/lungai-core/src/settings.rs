//! Optional JSON settings file.
//!
//! Every field has a default, so a partial file (or none at all) is valid.
//!
//! ```json
//! { "dark_mode": false, "profile": "drop_zone", "random_seed": 7 }
//! ```
use crate::analysis::{AnalysisProfile, RandomSource, SeededRandom, ThreadRandom};
use crate::error::SettingsError;

use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;
use tracing::{debug, info, warn};

/// File name looked up in the working directory at startup.
pub const SETTINGS_FILE_NAME: &str = "lungai.json";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// `true` = dark theme (default), `false` = light.
    pub dark_mode: bool,
    /// Which analysis flow the detail view uses.
    pub profile: AnalysisProfile,
    /// Replaces the profile's simulated delay, in milliseconds.
    pub delay_override_ms: Option<u64>,
    /// Seed for reproducible mock results.
    pub random_seed: Option<u64>,
    /// Show the "demonstration only" banner above results.
    pub show_mock_banner: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            dark_mode: true,
            profile: AnalysisProfile::default(),
            delay_override_ms: None,
            random_seed: None,
            show_mock_banner: true,
        }
    }
}

impl Settings {
    /// Read and parse a settings file.
    pub fn load(path: &Path) -> Result<Self, SettingsError> {
        let text = std::fs::read_to_string(path).map_err(|source| SettingsError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&text).map_err(|source| SettingsError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Load `path` if it exists, falling back to defaults on any error.
    pub fn load_or_default(path: &Path) -> Self {
        if !path.exists() {
            debug!("No settings file at {}, using defaults", path.display());
            return Self::default();
        }
        match Self::load(path) {
            Ok(settings) => {
                info!("Loaded settings from {}", path.display());
                settings
            }
            Err(e) => {
                warn!("{e} -- using defaults");
                Self::default()
            }
        }
    }

    /// Simulated processing time, honouring the override.
    pub fn analysis_delay(&self) -> Duration {
        self.delay_override_ms
            .map(Duration::from_millis)
            .unwrap_or_else(|| self.profile.delay())
    }

    /// Seeded generator when a seed is configured, thread RNG otherwise.
    pub fn random_source(&self) -> Box<dyn RandomSource> {
        match self.random_seed {
            Some(seed) => Box::new(SeededRandom::new(seed)),
            None => Box::new(ThreadRandom),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn defaults() {
        let s = Settings::default();
        assert!(s.dark_mode);
        assert_eq!(s.profile, AnalysisProfile::Guided);
        assert_eq!(s.analysis_delay(), Duration::from_secs(3));
        assert!(s.show_mock_banner);
    }

    #[test]
    fn partial_file_fills_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(SETTINGS_FILE_NAME);
        fs::write(&path, r#"{ "profile": "drop_zone", "random_seed": 11 }"#).unwrap();

        let s = Settings::load(&path).unwrap();
        assert_eq!(s.profile, AnalysisProfile::DropZone);
        assert_eq!(s.random_seed, Some(11));
        assert!(s.dark_mode);
        assert_eq!(s.analysis_delay(), Duration::from_secs(2));
    }

    #[test]
    fn delay_override_wins() {
        let s = Settings {
            delay_override_ms: Some(250),
            ..Settings::default()
        };
        assert_eq!(s.analysis_delay(), Duration::from_millis(250));
    }

    #[test]
    fn seeded_source_is_reproducible() {
        let s = Settings {
            random_seed: Some(99),
            ..Settings::default()
        };
        let mut a = s.random_source();
        let mut b = s.random_source();
        assert_eq!(a.next_unit(), b.next_unit());
    }

    #[test]
    fn invalid_json_is_a_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(SETTINGS_FILE_NAME);
        fs::write(&path, "{ not json").unwrap();

        assert!(matches!(
            Settings::load(&path),
            Err(SettingsError::Parse { .. })
        ));
        assert_eq!(Settings::load_or_default(&path), Settings::default());
    }

    #[test]
    fn missing_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.json");
        assert!(matches!(
            Settings::load(&path),
            Err(SettingsError::Read { .. })
        ));
        assert_eq!(Settings::load_or_default(&path), Settings::default());
    }

    #[test]
    fn unknown_profile_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(SETTINGS_FILE_NAME);
        fs::write(&path, r#"{ "profile": "turbo" }"#).unwrap();
        assert!(Settings::load(&path).is_err());
    }
}
