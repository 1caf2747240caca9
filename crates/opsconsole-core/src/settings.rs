//! Console appearance settings, kept in memory for the session.

use std::sync::Arc;

use parking_lot::RwLock;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeLayout {
    #[default]
    Vertical,
    Mini,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeColorPresets {
    #[default]
    Default,
    Cyan,
    Purple,
    Blue,
    Orange,
    Red,
}

/// User-adjustable layout and theme options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    pub theme_color_presets: ThemeColorPresets,
    pub theme_mode: ThemeMode,
    pub theme_layout: ThemeLayout,
    pub theme_stretch: bool,
    /// Whether the layout shows the breadcrumb trail at all
    pub bread_crumb: bool,
    pub dark_sidebar: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            theme_color_presets: ThemeColorPresets::Default,
            theme_mode: ThemeMode::Light,
            theme_layout: ThemeLayout::Vertical,
            theme_stretch: false,
            bread_crumb: true,
            dark_sidebar: false,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct SettingsStore {
    settings: Arc<RwLock<Settings>>,
}

impl SettingsStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self) -> Settings {
        *self.settings.read()
    }

    pub fn set(&self, settings: Settings) {
        *self.settings.write() = settings;
    }

    /// Apply a change to the current settings
    pub fn update(&self, change: impl FnOnce(&mut Settings)) {
        change(&mut self.settings.write());
    }

    /// Restore defaults
    pub fn clear(&self) {
        self.set(Settings::default());
    }
}
