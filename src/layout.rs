//! Console layout: header with locale switch and account badge, the
//! breadcrumb trail, and the routed page.

use dioxus::prelude::*;
use opsconsole_core::{BreadcrumbItem, Locale};
use opsconsole_ui::{AccountBadge, BadgeView, Breadcrumbs};

use crate::app::Route;
use crate::context::{
    switch_locale, use_breadcrumbs, use_console, use_font_status, use_locale, use_translator,
    use_user_info, FontStatus,
};

/// Trail shown when no page has set an override
fn default_trail(route: &Route, t: &impl Fn(&str) -> String) -> Vec<BreadcrumbItem> {
    let dashboard = BreadcrumbItem::new("/", t("sys.menu.dashboard"));
    match route {
        Route::Dashboard {} => vec![dashboard],
        Route::HostDetail { id } => vec![
            dashboard,
            BreadcrumbItem::new(format!("/host/{}", id), t("sys.menu.host")),
        ],
    }
}

/// Font stack for the page body, depending on what was preloaded
fn font_stack(status: &FontStatus) -> &'static str {
    match status {
        FontStatus::Ready(families) if families.iter().any(|f| f == "Cascadia Code") => {
            "'Cascadia Code', ui-monospace, monospace"
        }
        _ => "ui-monospace, monospace",
    }
}

#[component]
pub fn ConsoleLayout() -> Element {
    let console = use_console();
    let route = use_route::<Route>();
    let t = use_translator();
    let locale = use_locale();
    let overrides = use_breadcrumbs();
    let user = use_user_info();
    let fonts = use_font_status();

    let show_trail = console.settings().get().bread_crumb;
    let items = overrides().unwrap_or_else(|| default_trail(&route, &t));
    let badge = BadgeView::from_state(&user.read());
    let body_style = format!("font-family: {};", font_stack(&fonts.read()));

    rsx! {
        div { class: "console", style: "{body_style}",
            header { class: "console-header",
                span { class: "console-title", "OpsConsole" }
                div { class: "console-locales",
                    for option in Locale::ALL {
                        button {
                            class: if locale() == option { "locale-option active" } else { "locale-option" },
                            onclick: {
                                let console = console.clone();
                                move |_| switch_locale(&console, locale, option)
                            },
                            {option.label()}
                        }
                    }
                }
                AccountBadge { view: badge }
            }
            if show_trail {
                Breadcrumbs { items }
            }
            main { class: "console-main",
                Outlet::<Route> {}
            }
        }
    }
}
