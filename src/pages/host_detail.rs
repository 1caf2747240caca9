//! Host detail page.
//!
//! Replaces the layout's default trail with one naming the host, and lists
//! the user's other hosts as siblings of the last crumb.

use dioxus::prelude::*;
use opsconsole_core::icons::{action_icon, DEFAULT_OS_ICON};
use opsconsole_core::BreadcrumbItem;

use super::CachedIcon;
use crate::context::{use_breadcrumb_override, use_translator, use_user_info};

fn host_crumb(id: u64) -> BreadcrumbItem {
    BreadcrumbItem::new(format!("/host/{}", id), format!("host-{}", id))
}

/// Trail for a host page: dashboard, host list, this host with siblings
fn host_trail(id: u64, siblings: &[u64], t: &impl Fn(&str) -> String) -> Vec<BreadcrumbItem> {
    let menu = siblings
        .iter()
        .filter(|other| **other != id)
        .map(|other| host_crumb(*other))
        .collect();
    vec![
        BreadcrumbItem::new("/", t("sys.menu.dashboard")),
        BreadcrumbItem::new("/", t("sys.menu.host")),
        host_crumb(id).with_menu(menu),
    ]
}

#[component]
pub fn HostDetail(id: u64) -> Element {
    let t = use_translator();
    let user = use_user_info();
    let siblings: Vec<u64> = user
        .read()
        .data()
        .map(|u| u.permissions.host_ids.clone())
        .unwrap_or_default();

    use_breadcrumb_override(host_trail(id, &siblings, &t));

    rsx! {
        section { class: "host-detail",
            h1 {
                CachedIcon { id: DEFAULT_OS_ICON.to_string(), size: "1.5em" }
                " host-{id}"
            }
            div { class: "host-actions",
                for action in ["terminal", "file", "edit"] {
                    button { key: "{action}",
                        CachedIcon { id: action_icon(action).unwrap_or_default().to_string() }
                    }
                }
            }
        }
    }
}
