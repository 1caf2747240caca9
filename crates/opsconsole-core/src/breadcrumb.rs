//! Breadcrumb override slot.
//!
//! Detail pages (a single host, a software publish config) replace the
//! route-derived breadcrumb trail with their own. The slot holds at most one
//! override; the last writer wins and `None` restores the computed default.
//! Nothing is persisted.

use serde::{Deserialize, Serialize};
use tokio::sync::watch;

/// One entry in the breadcrumb trail
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BreadcrumbItem {
    /// Route key, also used as the link target when `href` is absent
    pub key: String,
    /// Display title (already translated)
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,
    /// Sibling routes offered as a dropdown
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub menu: Vec<BreadcrumbItem>,
}

impl BreadcrumbItem {
    pub fn new(key: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            title: title.into(),
            href: None,
            menu: Vec::new(),
        }
    }

    pub fn with_href(mut self, href: impl Into<String>) -> Self {
        self.href = Some(href.into());
        self
    }

    pub fn with_menu(mut self, menu: Vec<BreadcrumbItem>) -> Self {
        self.menu = menu;
        self
    }

    /// Link target for this item
    pub fn target(&self) -> &str {
        self.href.as_deref().unwrap_or(&self.key)
    }
}

/// Single last-writer-wins breadcrumb override
#[derive(Debug, Clone)]
pub struct BreadcrumbStore {
    slot: watch::Sender<Option<Vec<BreadcrumbItem>>>,
}

impl Default for BreadcrumbStore {
    fn default() -> Self {
        Self::new()
    }
}

impl BreadcrumbStore {
    pub fn new() -> Self {
        let (slot, _) = watch::channel(None);
        Self { slot }
    }

    /// Replace the override; `None` clears it
    pub fn set(&self, items: Option<Vec<BreadcrumbItem>>) {
        tracing::trace!(items = items.as_ref().map(Vec::len), "Breadcrumb override set");
        self.slot.send_replace(items);
    }

    pub fn clear(&self) {
        self.set(None);
    }

    /// Clear the override only while it still holds `items`.
    ///
    /// Returns whether it was cleared. A page leaving after the next page
    /// has written its own trail leaves that trail in place.
    pub fn clear_if_current(&self, items: &[BreadcrumbItem]) -> bool {
        self.slot.send_if_modified(|slot| {
            if slot.as_deref() == Some(items) {
                *slot = None;
                true
            } else {
                false
            }
        })
    }

    /// Current override, if any
    pub fn get(&self) -> Option<Vec<BreadcrumbItem>> {
        self.slot.borrow().clone()
    }

    /// The override if one is set, otherwise the computed default
    pub fn resolve(&self, default: impl FnOnce() -> Vec<BreadcrumbItem>) -> Vec<BreadcrumbItem> {
        self.get().unwrap_or_else(default)
    }

    /// Receiver notified on every write
    pub fn subscribe(&self) -> watch::Receiver<Option<Vec<BreadcrumbItem>>> {
        self.slot.subscribe()
    }
}
