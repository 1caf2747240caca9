//! Console context for the desktop app.
//!
//! The [`ConsoleState`] is handed to the launcher and read by every view
//! through these hooks. The hooks bridge the state layer's stores into
//! Dioxus signals so that components re-render when a store changes.
//!
//! ## Usage
//!
//! ```ignore
//! let console = use_console();
//! let user = use_user_info();
//! let crumbs = use_breadcrumbs();
//! ```

use std::cell::RefCell;
use std::rc::Rc;

use dioxus::prelude::*;
use opsconsole_core::{BreadcrumbItem, ConsoleState, IconHandle, Locale, QueryState, UserInfo};

/// Outcome of the startup font preload
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FontStatus {
    Loading,
    Ready(Vec<String>),
    /// At least one font failed; the UI uses fallback fonts
    Failed,
}

/// Hook to access the console state from context.
pub fn use_console() -> ConsoleState {
    use_context::<ConsoleState>()
}

/// Hook for the active locale signal.
///
/// Writing the signal alone does not change the console's locale; use
/// [`switch_locale`] to update both.
pub fn use_locale() -> Signal<Locale> {
    use_context::<Signal<Locale>>()
}

/// Hook for the startup font status.
pub fn use_font_status() -> Signal<FontStatus> {
    use_context::<Signal<FontStatus>>()
}

/// Translator bound to the active locale.
///
/// Reading the locale subscribes the calling component, so it re-renders
/// with new strings after a locale switch.
pub fn use_translator() -> impl Fn(&str) -> String {
    let console = use_console();
    let locale = use_locale()();
    move |key: &str| console.locales().translate(locale, key).to_string()
}

/// Switch the console and the locale signal together.
pub fn switch_locale(console: &ConsoleState, mut locale: Signal<Locale>, next: Locale) {
    console.set_locale(next);
    locale.set(next);
}

/// Hook for the current user's profile.
///
/// Every caller goes through the shared `userInfo` query, so a page full of
/// components reading the profile still triggers a single fetch.
pub fn use_user_info() -> Signal<QueryState<UserInfo>> {
    let console = use_console();
    let mut state = use_signal(|| match console.users().state() {
        QueryState::Idle => QueryState::Loading,
        other => other,
    });

    use_hook(move || {
        spawn(async move {
            let next = console.users().get().await;
            state.set(next);
        });
    });

    state
}

/// Hook for the breadcrumb override.
///
/// `None` means the layout should show its default trail.
pub fn use_breadcrumbs() -> Signal<Option<Vec<BreadcrumbItem>>> {
    let console = use_console();
    let mut crumbs = use_signal(|| console.breadcrumbs().get());

    use_hook(move || {
        let mut changes = console.breadcrumbs().subscribe();
        spawn(async move {
            while changes.changed().await.is_ok() {
                let next = changes.borrow_and_update().clone();
                crumbs.set(next);
            }
        });
    });

    crumbs
}

/// Set a breadcrumb override for as long as the calling page is mounted.
///
/// The override is rewritten whenever `items` changes between renders. On
/// unmount it is cleared only if it still holds this page's trail.
pub fn use_breadcrumb_override(items: Vec<BreadcrumbItem>) {
    let store = use_console().breadcrumbs().clone();
    let written = use_hook(|| Rc::new(RefCell::new(Vec::new())));

    if store.get().as_ref() != Some(&items) {
        store.set(Some(items.clone()));
    }
    *written.borrow_mut() = items;

    use_drop(move || {
        store.clear_if_current(&written.borrow());
    });
}

/// Hook resolving an icon through the shared icon cache.
///
/// Returns `None` while loading, for the empty id, and when the icon could
/// not be loaded.
pub fn use_icon(id: ReadOnlySignal<String>) -> Option<IconHandle> {
    let console = use_console();
    let icon = use_resource(move || {
        let console = console.clone();
        // Reading the signal here re-runs the lookup when the id changes
        let id = id();
        async move {
            match console.icons().resolve(&id).await {
                Ok(handle) => handle,
                Err(e) => {
                    tracing::warn!(icon = %id, error = %e, "Icon unavailable");
                    None
                }
            }
        }
    });

    icon.cloned().flatten()
}
