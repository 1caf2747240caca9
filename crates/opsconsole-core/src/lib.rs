//! OpsConsole Core Library
//!
//! Shared client-side state for the OpsConsole administration UI.
//!
//! ## Overview
//!
//! The console's views read a handful of independent stores that are
//! computed once and read many times:
//!
//! - **Locales**: one flat dictionary per language, merged from ordered JSON
//!   fragments at startup
//! - **Icons**: a process-wide icon cache, warmed at startup and extended on
//!   demand
//! - **Fonts**: web fonts loaded concurrently into a registry, all-or-nothing
//! - **User info**: the current user's profile behind a coalescing query cache
//! - **Breadcrumbs**: a last-writer-wins override for the layout's trail
//!
//! ## Quick Start
//!
//! ```ignore
//! use opsconsole_core::{ConsoleConfig, ConsoleState};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let state = ConsoleState::from_config(ConsoleConfig::new("./assets"))?;
//!     let startup = state.start();
//!
//!     let user = state.users().get().await;
//!     println!("Signed in as {}", opsconsole_core::display_name(&user));
//!
//!     startup.fonts.await??;
//!     Ok(())
//! }
//! ```

pub mod breadcrumb;
pub mod config;
pub mod console;
pub mod error;
pub mod fonts;
pub mod icons;
pub mod locale;
pub mod query;
pub mod settings;
pub mod sysconfig;
pub mod user;

// Re-exports
pub use breadcrumb::{BreadcrumbItem, BreadcrumbStore};
pub use config::ConsoleConfig;
pub use console::{ConsoleState, StartupTasks};
pub use error::{ConsoleError, ConsoleResult};
pub use fonts::{
    preload_fonts, AssetFontLoader, FontBook, FontFace, FontFormat, FontLoader, FontRegistry,
    LoadedFont,
};
pub use icons::{DirIconLoader, IconCache, IconHandle, IconLoader, PreloadReport};
pub use locale::{merge, resolve_locale, Fragment, Locale, LocaleDictionary, LocaleTables};
pub use query::{QueryCache, QueryState};
pub use settings::{Settings, SettingsStore};
pub use sysconfig::{transform_config, ConfigFieldType, ConfigGroup, ConfigItem};
pub use user::{display_name, FileUserService, UserInfo, UserInfoCache, UserService};
