//! Startup configuration for the console state layer.

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::ConsoleResult;
use crate::fonts::{default_fonts, FontFace};
use crate::icons::all_icons;
use crate::locale::Locale;
use crate::user::USER_INFO_STALE_TIME;

/// Where assets live and what to warm up at startup
///
/// # Example
///
/// ```
/// use opsconsole_core::{ConsoleConfig, Locale};
///
/// let config = ConsoleConfig::new("/opt/opsconsole/assets")
///     .with_locale(Locale::EnUs)
///     .with_icons(vec!["logos:ubuntu".to_string()]);
/// assert_eq!(config.icons.len(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConsoleConfig {
    /// Root of the asset tree (`icons/`, `fonts/`)
    pub assets_dir: PathBuf,
    /// Active locale
    #[serde(default = "default_locale")]
    pub locale: Locale,
    /// Icon ids preloaded at startup
    #[serde(default = "default_icons")]
    pub icons: Vec<String>,
    /// Fonts preloaded at startup
    #[serde(default = "default_fonts")]
    pub fonts: Vec<FontFace>,
    /// Freshness window for the user profile; `None` keeps it until invalidated
    #[serde(default = "default_user_stale_secs")]
    pub user_stale_secs: Option<u64>,
    /// JSON file holding the signed-in user's profile
    #[serde(default)]
    pub profile_path: Option<PathBuf>,
}

fn default_locale() -> Locale {
    Locale::DEFAULT
}

fn default_icons() -> Vec<String> {
    all_icons().into_iter().map(String::from).collect()
}

fn default_user_stale_secs() -> Option<u64> {
    Some(USER_INFO_STALE_TIME.as_secs())
}

impl ConsoleConfig {
    pub fn new(assets_dir: impl Into<PathBuf>) -> Self {
        Self {
            assets_dir: assets_dir.into(),
            locale: default_locale(),
            icons: default_icons(),
            fonts: default_fonts(),
            user_stale_secs: default_user_stale_secs(),
            profile_path: None,
        }
    }

    /// Load a JSON config file; missing fields take their defaults
    pub fn from_file(path: impl AsRef<Path>) -> ConsoleResult<Self> {
        let raw = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&raw)?)
    }

    pub fn with_locale(mut self, locale: Locale) -> Self {
        self.locale = locale;
        self
    }

    pub fn with_icons(mut self, icons: Vec<String>) -> Self {
        self.icons = icons;
        self
    }

    pub fn with_fonts(mut self, fonts: Vec<FontFace>) -> Self {
        self.fonts = fonts;
        self
    }

    pub fn with_user_stale_time(mut self, stale_time: Option<Duration>) -> Self {
        self.user_stale_secs = stale_time.map(|d| d.as_secs());
        self
    }

    pub fn with_profile_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.profile_path = Some(path.into());
        self
    }

    pub fn icons_dir(&self) -> PathBuf {
        self.assets_dir.join("icons")
    }

    pub fn user_stale_time(&self) -> Option<Duration> {
        self.user_stale_secs.map(Duration::from_secs)
    }

    /// Profile file, defaulting to `<assets>/profile.json`
    pub fn profile_path(&self) -> PathBuf {
        self.profile_path
            .clone()
            .unwrap_or_else(|| self.assets_dir.join("profile.json"))
    }
}
