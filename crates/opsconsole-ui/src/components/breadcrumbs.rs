//! Breadcrumb Trail Component
//!
//! Renders the layout's breadcrumb trail. The last item is the current page
//! and is not a link; items with sibling routes show them as a dropdown.

use dioxus::prelude::*;
use opsconsole_core::BreadcrumbItem;

/// Separator drawn between items when none is given
pub const DEFAULT_SEPARATOR: &str = "•";

/// How a single trail entry is drawn
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum CrumbKind {
    /// Earlier entry, rendered as a link
    Link,
    /// Final entry, rendered as plain text
    Current,
}

impl CrumbKind {
    pub fn for_position(index: usize, len: usize) -> Self {
        if index + 1 == len {
            CrumbKind::Current
        } else {
            CrumbKind::Link
        }
    }

    pub fn class(&self) -> &'static str {
        match self {
            CrumbKind::Link => "breadcrumb-link",
            CrumbKind::Current => "breadcrumb-current",
        }
    }
}

/// Properties for the Breadcrumbs component
#[derive(Clone, PartialEq, Props)]
pub struct BreadcrumbsProps {
    /// Trail to render, first to last
    pub items: Vec<BreadcrumbItem>,
    /// Text between items
    #[props(default = DEFAULT_SEPARATOR.to_string())]
    pub separator: String,
}

/// Horizontal breadcrumb trail
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     Breadcrumbs {
///         items: vec![
///             BreadcrumbItem::new("/host", "Host Management"),
///             BreadcrumbItem::new("/host/7", "web-01"),
///         ],
///     }
/// }
/// ```
#[component]
pub fn Breadcrumbs(props: BreadcrumbsProps) -> Element {
    let len = props.items.len();

    rsx! {
        nav { class: "breadcrumbs", "aria-label": "Breadcrumb",
            for (index, item) in props.items.iter().enumerate() {
                if index > 0 {
                    span { class: "breadcrumb-separator", "{props.separator}" }
                }
                if CrumbKind::for_position(index, len) == CrumbKind::Current {
                    span { class: CrumbKind::Current.class(), "aria-current": "page", "{item.title}" }
                } else {
                    a { class: CrumbKind::Link.class(), href: item.target().to_string(), "{item.title}" }
                }
                if !item.menu.is_empty() {
                    ul { class: "breadcrumb-menu",
                        for sibling in item.menu.iter() {
                            li { key: "{sibling.key}",
                                a { href: sibling.target().to_string(), "{sibling.title}" }
                            }
                        }
                    }
                }
            }
        }
    }
}
