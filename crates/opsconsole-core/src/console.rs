//! The console's shared client state.
//!
//! [`ConsoleState`] owns every store the views read from. It is built once at
//! startup, handed to the view tree, and lives for the rest of the process.
//! Cloning is cheap; clones share the same stores.
//!
//! ```text
//! ConsoleState
//! ├── locales      immutable, built in new()
//! ├── icons        process-wide cache, warmed by start()
//! ├── fonts        registry, filled by start()
//! ├── users        "userInfo" query, fetched on first read
//! ├── breadcrumbs  override slot
//! └── settings     appearance options
//! ```

use std::sync::Arc;

use parking_lot::RwLock;
use tokio::task::JoinHandle;

use crate::breadcrumb::BreadcrumbStore;
use crate::config::ConsoleConfig;
use crate::error::ConsoleResult;
use crate::fonts::{self, AssetFontLoader, FontBook, FontLoader};
use crate::icons::{DirIconLoader, IconCache, IconLoader, PreloadReport};
use crate::locale::{Locale, LocaleTables};
use crate::settings::SettingsStore;
use crate::user::{FileUserService, UserInfoCache, UserService};

/// Handles for the background work started by [`ConsoleState::start`]
pub struct StartupTasks {
    pub icons: JoinHandle<PreloadReport>,
    pub fonts: JoinHandle<ConsoleResult<Vec<String>>>,
}

#[derive(Clone)]
pub struct ConsoleState {
    config: Arc<ConsoleConfig>,
    locale: Arc<RwLock<Locale>>,
    locales: Arc<LocaleTables>,
    icons: IconCache,
    fonts: FontBook,
    font_loader: Arc<dyn FontLoader>,
    users: UserInfoCache,
    breadcrumbs: BreadcrumbStore,
    settings: SettingsStore,
}

impl ConsoleState {
    /// Build the state with explicit collaborators
    pub fn new(
        config: ConsoleConfig,
        icon_loader: Arc<dyn IconLoader>,
        font_loader: Arc<dyn FontLoader>,
        user_service: Arc<dyn UserService>,
    ) -> ConsoleResult<Self> {
        let locales = LocaleTables::builtin()?;
        let users = UserInfoCache::new(user_service, config.user_stale_time());
        Ok(Self {
            locale: Arc::new(RwLock::new(config.locale)),
            locales: Arc::new(locales),
            icons: IconCache::new(icon_loader),
            fonts: FontBook::new(),
            font_loader,
            users,
            breadcrumbs: BreadcrumbStore::new(),
            settings: SettingsStore::new(),
            config: Arc::new(config),
        })
    }

    /// Build the state with the asset-directory loaders
    pub fn from_config(config: ConsoleConfig) -> ConsoleResult<Self> {
        let icon_loader = Arc::new(DirIconLoader::new(config.icons_dir()));
        let font_loader = Arc::new(AssetFontLoader::new(config.assets_dir.clone()));
        let user_service = Arc::new(FileUserService::new(config.profile_path()));
        Self::new(config, icon_loader, font_loader, user_service)
    }

    /// Kick off icon and font preloading in the background.
    ///
    /// Must be called from within a tokio runtime.
    pub fn start(&self) -> StartupTasks {
        tracing::info!(
            icons = self.config.icons.len(),
            fonts = self.config.fonts.len(),
            locale = %self.locale(),
            "Starting console preload"
        );
        let icons = self.icons.preload(self.config.icons.clone());
        let state = self.clone();
        let fonts = tokio::spawn(async move { state.preload_fonts().await });
        StartupTasks { icons, fonts }
    }

    /// Load every configured font; fails if any one fails
    pub async fn preload_fonts(&self) -> ConsoleResult<Vec<String>> {
        fonts::preload_fonts(self.font_loader.as_ref(), &self.fonts, &self.config.fonts).await
    }

    pub fn config(&self) -> &ConsoleConfig {
        &self.config
    }

    pub fn locale(&self) -> Locale {
        *self.locale.read()
    }

    pub fn set_locale(&self, locale: Locale) {
        tracing::debug!(%locale, "Locale changed");
        *self.locale.write() = locale;
    }

    pub fn locales(&self) -> &LocaleTables {
        &self.locales
    }

    /// Translate a key in the active locale
    pub fn translate(&self, key: &str) -> String {
        self.locales.translate(self.locale(), key).to_string()
    }

    pub fn icons(&self) -> &IconCache {
        &self.icons
    }

    pub fn fonts(&self) -> &FontBook {
        &self.fonts
    }

    pub fn users(&self) -> &UserInfoCache {
        &self.users
    }

    pub fn breadcrumbs(&self) -> &BreadcrumbStore {
        &self.breadcrumbs
    }

    pub fn settings(&self) -> &SettingsStore {
        &self.settings
    }
}
