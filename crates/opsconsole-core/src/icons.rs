//! Icon catalog and process-wide icon cache.
//!
//! Icons are addressed by `prefix:name` ids (e.g. `logos:ubuntu`). The
//! [`IconCache`] resolves each id once through an [`IconLoader`] and keeps
//! the result for the lifetime of the process. Startup preloading and
//! on-demand resolution share the same cache, and concurrent requests for one
//! id share one load.
//!
//! Failed loads are logged and not cached, so a later request may try again.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use async_trait::async_trait;
use futures::future::{join_all, BoxFuture, FutureExt, Shared};
use parking_lot::Mutex;

use crate::error::{ConsoleError, ConsoleResult};

/// File extension → file icon
pub const FILE_ICONS: &[(&str, &str)] = &[
    ("md", "catppuccin:markdown"),
    ("py", "catppuccin:python"),
    ("js", "catppuccin:javascript"),
    ("sh", "catppuccin:powershell"),
    ("json", "catppuccin:json"),
    ("yaml", "catppuccin:yaml"),
    ("yml", "catppuccin:yaml"),
    ("xml", "catppuccin:xml"),
    ("txt", "catppuccin:text"),
    ("sql", "catppuccin:database"),
];

pub const DEFAULT_FILE_ICON: &str = "catppuccin:file";

/// OS name fragment → OS icon
pub const OS_ICONS: &[(&str, &str)] = &[
    ("ubuntu", "logos:ubuntu"),
    ("centos", "logos:centos-icon"),
    ("debian", "logos:debian"),
    ("fedora", "logos:fedora"),
    ("arch", "logos:archlinux"),
    ("win", "logos:microsoft-windows-icon"),
    ("mac", "logos:apple"),
    ("linux", "logos:linux-tux"),
    ("redhat", "logos:redhat-icon"),
    ("suse", "logos:suse"),
    ("mint", "logos:linux-mint"),
    ("manjaro", "logos:manjaro"),
];

pub const DEFAULT_OS_ICON: &str = "logos:linux-tux";

/// Table/toolbar action → action icon
pub const ACTION_ICONS: &[(&str, &str)] = &[
    ("view", "flowbite:eye-outline"),
    ("edit", "flowbite:edit-outline"),
    ("download", "flowbite:download-outline"),
    ("upload", "flowbite:upload-outline"),
    ("delete", "flowbite:trash-bin-outline"),
    ("tag", "flowbite:tag-outline"),
    ("cancel", "flowbite:x-outline"),
    ("save", "flowbite:file-check-outline"),
    ("terminal", "flowbite:terminal-outline"),
    ("unlock", "flowbite:link-break-outline"),
    ("active", "flowbite:bell-ring-solid"),
    ("inactive", "flowbite:bell-outline"),
    ("diff", "codicon:diff"),
    ("file", "flowbite:file-lines-outline"),
    ("replay", "material-symbols:replay-rounded"),
    ("host", "material-symbols:host-outline"),
];

/// Every catalog icon in declaration order, without duplicates.
///
/// This is the startup preload list.
pub fn all_icons() -> Vec<&'static str> {
    let mut seen = Vec::new();
    let catalog = FILE_ICONS
        .iter()
        .map(|(_, id)| *id)
        .chain(std::iter::once(DEFAULT_FILE_ICON))
        .chain(OS_ICONS.iter().map(|(_, id)| *id))
        .chain(ACTION_ICONS.iter().map(|(_, id)| *id));
    for id in catalog {
        if !seen.contains(&id) {
            seen.push(id);
        }
    }
    seen
}

/// Icon for a file name, by extension
pub fn file_icon(file_name: &str) -> &'static str {
    let ext = match file_name.rsplit_once('.') {
        Some((_, ext)) => ext.to_ascii_lowercase(),
        None => return DEFAULT_FILE_ICON,
    };
    FILE_ICONS
        .iter()
        .find(|(known, _)| *known == ext)
        .map(|(_, id)| *id)
        .unwrap_or(DEFAULT_FILE_ICON)
}

/// Icon for an OS description such as `Ubuntu 22.04.3 LTS`
pub fn os_icon(os_name: &str) -> &'static str {
    let os_name = os_name.to_ascii_lowercase();
    OS_ICONS
        .iter()
        .find(|(fragment, _)| os_name.contains(fragment))
        .map(|(_, id)| *id)
        .unwrap_or(DEFAULT_OS_ICON)
}

/// Icon for a named action, if one is defined
pub fn action_icon(action: &str) -> Option<&'static str> {
    ACTION_ICONS
        .iter()
        .find(|(known, _)| *known == action)
        .map(|(_, id)| *id)
}

/// A resolved, renderable icon
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IconHandle {
    /// Icon id (`prefix:name`)
    pub id: String,
    /// SVG markup
    pub svg: Arc<str>,
}

/// Something that can turn an icon id into a renderable icon
#[async_trait]
pub trait IconLoader: Send + Sync {
    async fn load_icon(&self, id: &str) -> ConsoleResult<IconHandle>;
}

/// Split `prefix:name` into its parts
pub fn parse_icon_id(id: &str) -> ConsoleResult<(&str, &str)> {
    match id.split_once(':') {
        Some((prefix, name)) if !prefix.is_empty() && !name.is_empty() && !name.contains(':') => {
            Ok((prefix, name))
        }
        _ => Err(ConsoleError::IconLoad {
            id: id.to_string(),
            reason: "expected prefix:name".to_string(),
        }),
    }
}

/// Loads icons from `<root>/<prefix>/<name>.svg`
#[derive(Debug, Clone)]
pub struct DirIconLoader {
    root: PathBuf,
}

impl DirIconLoader {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Where an icon id is expected on disk
    pub fn path_for(&self, id: &str) -> ConsoleResult<PathBuf> {
        let (prefix, name) = parse_icon_id(id)?;
        if [prefix, name]
            .iter()
            .any(|part| part.contains(['/', '\\']) || part.starts_with('.'))
        {
            return Err(ConsoleError::IconLoad {
                id: id.to_string(),
                reason: "invalid characters in icon id".to_string(),
            });
        }
        Ok(self.root.join(prefix).join(format!("{}.svg", name)))
    }
}

#[async_trait]
impl IconLoader for DirIconLoader {
    async fn load_icon(&self, id: &str) -> ConsoleResult<IconHandle> {
        let path = self.path_for(id)?;
        let svg = tokio::fs::read_to_string(&path)
            .await
            .map_err(|e| ConsoleError::IconLoad {
                id: id.to_string(),
                reason: format!("{}: {}", path.display(), e),
            })?;
        if !svg.trim_start().starts_with("<svg") && !svg.trim_start().starts_with("<?xml") {
            return Err(ConsoleError::IconLoad {
                id: id.to_string(),
                reason: "not an SVG document".to_string(),
            });
        }
        Ok(IconHandle {
            id: id.to_string(),
            svg: svg.into(),
        })
    }
}

type IconFetch = Shared<BoxFuture<'static, Result<IconHandle, Arc<ConsoleError>>>>;

enum Slot {
    Pending(IconFetch),
    Ready(IconHandle),
}

/// Outcome of a preload sweep
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PreloadReport {
    /// Ids that are now cached
    pub loaded: Vec<String>,
    /// Ids that failed, with the reason
    pub failed: Vec<(String, String)>,
}

/// Process-wide icon cache
#[derive(Clone)]
pub struct IconCache {
    loader: Arc<dyn IconLoader>,
    slots: Arc<Mutex<HashMap<String, Slot>>>,
}

impl IconCache {
    pub fn new(loader: Arc<dyn IconLoader>) -> Self {
        Self {
            loader,
            slots: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    /// Already-resolved icon, without loading
    pub fn get(&self, id: &str) -> Option<IconHandle> {
        match self.slots.lock().get(id) {
            Some(Slot::Ready(handle)) => Some(handle.clone()),
            _ => None,
        }
    }

    /// Number of resolved icons
    pub fn len(&self) -> usize {
        self.slots
            .lock()
            .values()
            .filter(|slot| matches!(slot, Slot::Ready(_)))
            .count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Resolve an icon, loading it at most once.
    ///
    /// An empty id resolves to `Ok(None)` without touching the loader.
    pub async fn resolve(&self, id: &str) -> ConsoleResult<Option<IconHandle>> {
        if id.is_empty() {
            return Ok(None);
        }

        let pending = {
            let mut slots = self.slots.lock();
            match slots.get(id) {
                Some(Slot::Ready(handle)) => return Ok(Some(handle.clone())),
                Some(Slot::Pending(fetch)) => fetch.clone(),
                None => {
                    let loader = Arc::clone(&self.loader);
                    let owned_id = id.to_string();
                    let fetch = async move { loader.load_icon(&owned_id).await.map_err(Arc::new) }
                        .boxed()
                        .shared();
                    slots.insert(id.to_string(), Slot::Pending(fetch.clone()));
                    fetch
                }
            }
        };

        let result = pending.clone().await;
        let mut slots = self.slots.lock();
        // Only the load this call awaited may settle the slot; a newer
        // load started after a failure belongs to other callers.
        let owns_slot = matches!(
            slots.get(id),
            Some(Slot::Pending(current)) if current.ptr_eq(&pending)
        );
        match result {
            Ok(handle) => {
                if owns_slot {
                    slots.insert(id.to_string(), Slot::Ready(handle.clone()));
                }
                Ok(Some(handle))
            }
            Err(err) => {
                if owns_slot {
                    slots.remove(id);
                }
                let reason = match err.as_ref() {
                    ConsoleError::IconLoad { reason, .. } => reason.clone(),
                    other => other.to_string(),
                };
                Err(ConsoleError::IconLoad {
                    id: id.to_string(),
                    reason,
                })
            }
        }
    }

    /// Resolve every id independently; one failure does not stop the rest.
    pub async fn preload_all<I, S>(&self, ids: I) -> PreloadReport
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let ids: Vec<String> = ids.into_iter().map(Into::into).collect();
        let results = join_all(ids.iter().map(|id| self.resolve(id))).await;

        let mut report = PreloadReport::default();
        for (id, result) in ids.into_iter().zip(results) {
            match result {
                Ok(Some(_)) => report.loaded.push(id),
                Ok(None) => {}
                Err(e) => {
                    tracing::warn!(icon = %id, error = %e, "Failed to preload icon");
                    report.failed.push((id, e.to_string()));
                }
            }
        }
        tracing::info!(
            loaded = report.loaded.len(),
            failed = report.failed.len(),
            "Icon preload finished"
        );
        report
    }

    /// Fire-and-forget preload on the current runtime
    pub fn preload<I, S>(&self, ids: I) -> tokio::task::JoinHandle<PreloadReport>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let cache = self.clone();
        let ids: Vec<String> = ids.into_iter().map(Into::into).collect();
        tokio::spawn(async move { cache.preload_all(ids).await })
    }
}
