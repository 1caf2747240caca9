use dioxus::prelude::*;
use opsconsole_core::icons::action_icon;

use super::CachedIcon;
use crate::app::Route;
use crate::context::{use_translator, use_user_info};

/// Menu entries: locale key and action icon name
const MENU: &[(&str, &str)] = &[
    ("sys.menu.host", "host"),
    ("sys.menu.terminal", "terminal"),
    ("sys.menu.file", "file"),
    ("sys.menu.quickCommand", "replay"),
];

#[component]
pub fn Dashboard() -> Element {
    let t = use_translator();
    let user = use_user_info();
    let hosts: Vec<u64> = user
        .read()
        .data()
        .map(|u| u.permissions.host_ids.clone())
        .unwrap_or_default();

    rsx! {
        section { class: "dashboard",
            h1 { {t("sys.menu.dashboard")} }
            ul { class: "dashboard-menu",
                for (key, action) in MENU.iter().copied() {
                    li { key: "{key}",
                        CachedIcon { id: action_icon(action).unwrap_or_default().to_string() }
                        span { {t(key)} }
                    }
                }
            }
            h2 { {t("sys.menu.host")} }
            ul { class: "dashboard-hosts",
                for id in hosts {
                    li { key: "{id}",
                        Link { to: Route::HostDetail { id }, "host-{id}" }
                    }
                }
            }
        }
    }
}
