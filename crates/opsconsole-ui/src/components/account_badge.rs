//! Account Badge Component
//!
//! Shows the signed-in user in the header. When the profile is still loading
//! or could not be fetched the badge shows the anonymous name instead.

use dioxus::prelude::*;
use opsconsole_core::{display_name, QueryState, UserInfo};

/// What the badge should show for a profile state
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct BadgeView {
    pub name: String,
    pub initials: String,
    pub avatar: Option<String>,
    pub loading: bool,
}

impl BadgeView {
    pub fn from_state(state: &QueryState<UserInfo>) -> Self {
        let name = display_name(state).to_string();
        Self {
            initials: initials(&name),
            avatar: state.data().and_then(|user| user.avatar.clone()),
            loading: state.is_loading(),
            name,
        }
    }
}

/// Up to two leading letters of the name's words, upper-cased
pub fn initials(name: &str) -> String {
    name.split(|c: char| c.is_whitespace() || c == '.' || c == '_')
        .filter_map(|word| word.chars().next())
        .take(2)
        .flat_map(char::to_uppercase)
        .collect()
}

/// Properties for the AccountBadge component
#[derive(Clone, PartialEq, Props)]
pub struct AccountBadgeProps {
    pub view: BadgeView,
}

/// Header badge with avatar (or initials) and name
#[component]
pub fn AccountBadge(props: AccountBadgeProps) -> Element {
    let view = props.view;

    rsx! {
        div { class: if view.loading { "account-badge loading" } else { "account-badge" },
            if let Some(src) = view.avatar.clone() {
                img { class: "account-avatar", src: "{src}", alt: "{view.name}" }
            } else {
                span { class: "account-initials", "{view.initials}" }
            }
            span { class: "account-name", "{view.name}" }
        }
    }
}
