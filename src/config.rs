use std::{ops::Not, path::PathBuf};

use eframe::egui;
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, Default, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Not for Theme {
    type Output = Self;

    fn not(self) -> Self::Output {
        match self {
            Self::Dark => Self::Light,
            Self::Light => Self::Dark,
        }
    }
}

impl From<Theme> for egui::Visuals {
    fn from(theme: Theme) -> Self {
        match theme {
            Theme::Dark => Self::dark(),
            Theme::Light => Self::light(),
        }
    }
}

#[inline]
#[must_use]
pub const fn full_volume() -> f32 {
    100.0
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Config {
    #[serde(default)]
    pub(crate) theme: Theme,
    /// alarm volume in percent
    #[serde(default = "full_volume")]
    pub(crate) volume: f32,
    /// sound file to ring with instead of the built in alarm
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub(crate) alarm_sound: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            theme: Theme::Dark,
            volume: full_volume(),
            alarm_sound: None,
        }
    }
}

impl Config {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// reads the config file, falling back to the defaults when it is
    /// missing or doesn't parse
    #[must_use]
    pub fn load(path: PathBuf) -> Self {
        match std::fs::read_to_string(path) {
            Ok(config) => toml::from_str(&config).unwrap_or_else(|e| {
                log::warn!("couldn't parse config file, using defaults: {e}");
                Self::default()
            }),
            Err(_) => Self::default(),
        }
    }

    pub fn save(&self, path: PathBuf) {
        let config = toml::to_string(self).expect("couldn't serialize config");
        std::fs::create_dir_all(path.parent().unwrap()).expect("couldn't create config dir");
        std::fs::write(path, config).expect("couldn't write config file");
    }

    #[must_use]
    pub fn config_path() -> PathBuf {
        let mut path = directories::ProjectDirs::from("", "", "kitchen_timer")
            .expect("couldn't get config path")
            .config_dir()
            .to_path_buf();
        path.push("config.toml");
        path
    }

    #[must_use]
    pub fn sounds_path() -> PathBuf {
        let mut path = directories::ProjectDirs::from("", "", "kitchen_timer")
            .expect("couldn't get sounds directory path")
            .data_dir()
            .to_path_buf();
        path.push("sounds");
        path
    }

    #[must_use]
    pub fn is_config_present() -> bool {
        Self::config_path().exists()
    }
}
