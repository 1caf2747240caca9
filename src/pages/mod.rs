//! Routed pages of the console.

mod dashboard;
mod host_detail;

pub use dashboard::Dashboard;
pub use host_detail::HostDetail;

use dioxus::prelude::*;
use opsconsole_ui::Iconify;

use crate::context::use_icon;

/// Icon looked up through the shared cache, for use inside lists
#[component]
fn CachedIcon(
    id: ReadOnlySignal<String>,
    #[props(default = "1.25em".to_string())] size: String,
) -> Element {
    let handle = use_icon(id);
    rsx! {
        Iconify { handle, size }
    }
}
