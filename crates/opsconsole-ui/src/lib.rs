//! OpsConsole UI Components
//!
//! Presentational Dioxus components for the console layout. They take
//! already-resolved data (breadcrumb items, icon handles, user state) as
//! props; reading the shared stores is left to the application's hooks.

pub mod components;

pub use components::*;
