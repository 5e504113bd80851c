#[cfg(not(target_arch = "wasm32"))]
use anyhow::Context;
#[cfg(not(target_arch = "wasm32"))]
use directories_next::ProjectDirs;
use serde::Deserialize;
#[cfg(not(target_arch = "wasm32"))]
use std::fs;
#[cfg(not(target_arch = "wasm32"))]
use std::path::Path;

use crate::mode::TripMode;

/// Element ids the toggle binds to. They have to match the markup of the form.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ElementIds {
    pub one_way: String,
    pub round_trip: String,
    pub return_date: String,
}

impl Default for ElementIds {
    fn default() -> Self {
        Self {
            one_way: "oneway-btn".to_owned(),
            round_trip: "roundtrip-btn".to_owned(),
            return_date: "return".to_owned(),
        }
    }
}

impl ElementIds {
    pub fn selector_id(&self, mode: TripMode) -> &str {
        match mode {
            TripMode::OneWay => &self.one_way,
            TripMode::RoundTrip => &self.round_trip,
        }
    }
}

/// Class names used as visual markers.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct MarkerClasses {
    pub active: String,
    pub hidden: String,
}

impl Default for MarkerClasses {
    fn default() -> Self {
        Self {
            active: "active".to_owned(),
            hidden: "hidden".to_owned(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    pub elements: ElementIds,
    pub markers: MarkerClasses,
    pub language: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            elements: ElementIds::default(),
            markers: MarkerClasses::default(),
            language: "en".to_owned(),
        }
    }
}

// the browser build has no config file, the page markup is written against the defaults
#[cfg(not(target_arch = "wasm32"))]
impl Config {
    pub fn from_yaml_str(text: &str) -> anyhow::Result<Self> {
        serde_yaml::from_str(text).context("Failed to parse the configuration")
    }

    pub fn load_from(path: &Path) -> anyhow::Result<Self> {
        let text =
            fs::read_to_string(path).with_context(|| format!("Failed to read {path:?}"))?;
        Self::from_yaml_str(&text).with_context(|| format!("Invalid configuration in {path:?}"))
    }

    /// Read the user configuration from the platform config directory.
    /// A missing file is normal and yields the defaults, a broken one is
    /// reported and ignored.
    pub fn load() -> Self {
        let Some(path) = config_path() else {
            log::debug!("no config directory on this platform, using defaults");
            return Self::default();
        };
        Self::load_or_default(&path)
    }

    fn load_or_default(path: &Path) -> Self {
        if !path.is_file() {
            log::debug!("no configuration at {path:?}, using defaults");
            return Self::default();
        }
        match Self::load_from(path) {
            Ok(config) => {
                log::info!("loaded configuration from {path:?}");
                config
            }
            Err(err) => {
                log::warn!("{err:#}, using defaults");
                Self::default()
            }
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn config_path() -> Option<std::path::PathBuf> {
    ProjectDirs::from("", "", "TripToggle").map(|dir| dir.config_dir().join("config.yaml"))
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::{Config, ElementIds, MarkerClasses};
    use crate::mode::TripMode;

    #[test]
    fn defaults_match_the_form_markup() {
        let config = Config::default();
        assert_eq!(config.elements.one_way, "oneway-btn");
        assert_eq!(config.elements.round_trip, "roundtrip-btn");
        assert_eq!(config.elements.return_date, "return");
        assert_eq!(config.markers.active, "active");
        assert_eq!(config.markers.hidden, "hidden");
        assert_eq!(config.language, "en");
    }

    #[test]
    fn partial_yaml_keeps_the_other_defaults() {
        let config = Config::from_yaml_str("markers:\n  hidden: is-hidden\nlanguage: de\n").unwrap();
        assert_eq!(config.elements, ElementIds::default());
        assert_eq!(
            config.markers,
            MarkerClasses {
                active: "active".to_owned(),
                hidden: "is-hidden".to_owned(),
            }
        );
        assert_eq!(config.language, "de");
    }

    #[test]
    fn invalid_yaml_is_an_error() {
        assert!(Config::from_yaml_str("elements: [1, 2").is_err());
    }

    #[test]
    fn selector_id_follows_the_mode() {
        let ids = ElementIds::default();
        assert_eq!(ids.selector_id(TripMode::OneWay), "oneway-btn");
        assert_eq!(ids.selector_id(TripMode::RoundTrip), "roundtrip-btn");
    }

    #[test]
    fn load_from_reads_the_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "elements:\n  return_date: return-date").unwrap();
        let config = Config::load_from(file.path()).unwrap();
        assert_eq!(config.elements.return_date, "return-date");
        assert_eq!(config.elements.one_way, "oneway-btn");
    }

    #[test]
    fn missing_or_broken_files_fall_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("config.yaml");
        assert_eq!(Config::load_or_default(&missing), Config::default());

        std::fs::write(&missing, "language: [").unwrap();
        assert_eq!(Config::load_or_default(&missing), Config::default());
    }
}
