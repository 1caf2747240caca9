//! Icon Component
//!
//! Draws an icon resolved through the shared icon cache. While the icon is
//! still loading (or failed to load) a same-sized placeholder keeps the
//! layout from jumping.

use dioxus::prelude::*;
use opsconsole_core::IconHandle;

/// Default edge length, matching the surrounding text
pub const DEFAULT_ICON_SIZE: &str = "1em";

/// Inline style that sizes the icon box
pub fn icon_box_style(size: &str) -> String {
    format!(
        "display: inline-flex; vertical-align: middle; width: {size}; height: {size};",
        size = size
    )
}

/// Properties for the Iconify component
#[derive(Clone, PartialEq, Props)]
pub struct IconifyProps {
    /// Resolved icon, or `None` while loading
    pub handle: Option<IconHandle>,
    /// CSS length for width and height
    #[props(default = DEFAULT_ICON_SIZE.to_string())]
    pub size: String,
    #[props(default)]
    pub class: Option<String>,
}

/// Inline SVG icon
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     Iconify { handle: icons.get("logos:ubuntu"), size: "20px" }
/// }
/// ```
#[component]
pub fn Iconify(props: IconifyProps) -> Element {
    let style = icon_box_style(&props.size);
    let class = match props.class.as_deref() {
        Some(extra) => format!("anticon {}", extra),
        None => "anticon".to_string(),
    };

    match props.handle {
        Some(handle) => rsx! {
            span {
                class: "{class}",
                style: "{style}",
                "data-icon": "{handle.id}",
                dangerous_inner_html: "{handle.svg}",
            }
        },
        None => rsx! {
            span { class: "{class} icon-placeholder", style: "{style}", "aria-hidden": "true" }
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn box_style_uses_size_twice() {
        let style = icon_box_style("20px");
        assert!(style.contains("width: 20px"));
        assert!(style.contains("height: 20px"));
    }
}
