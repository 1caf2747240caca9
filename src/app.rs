use dioxus::prelude::*;

use crate::context::{use_console, FontStatus};
use crate::layout::ConsoleLayout;
use crate::pages::{Dashboard, HostDetail};
use crate::theme::GLOBAL_STYLES;

/// Application routes.
///
/// - `/` - Dashboard with the hosts the user may access
/// - `/host/:id` - Detail view of a single host
#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(ConsoleLayout)]
        #[route("/")]
        Dashboard {},
        #[route("/host/:id")]
        HostDetail { id: u64 },
}

/// Root application component.
///
/// Provides global styles, locale and font context, starts the background
/// preloads and mounts the router.
#[component]
pub fn App() -> Element {
    let console = use_console();
    let locale = console.locale();

    use_context_provider(|| Signal::new(locale));
    let mut font_status = use_context_provider(|| Signal::new(FontStatus::Loading));

    // Warm icons and fonts once on mount
    use_effect(move || {
        let console = console.clone();
        spawn(async move {
            let startup = console.start();

            if let Err(e) = startup.icons.await {
                tracing::error!("Icon preload task failed: {}", e);
            }

            match startup.fonts.await {
                Ok(Ok(families)) => font_status.set(FontStatus::Ready(families)),
                Ok(Err(e)) => {
                    tracing::warn!("Falling back to system fonts: {}", e);
                    font_status.set(FontStatus::Failed);
                }
                Err(e) => {
                    tracing::error!("Font preload task failed: {}", e);
                    font_status.set(FontStatus::Failed);
                }
            }
        });
    });

    rsx! {
        style { {GLOBAL_STYLES} }
        Router::<Route> {}
    }
}
