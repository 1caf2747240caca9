//! Web font preloading.
//!
//! [`preload_fonts`] loads every configured [`FontFace`] concurrently and
//! registers each one as soon as it is ready. The aggregate succeeds only if
//! every font loads; the first failure fails the whole preload and no partial
//! family list is returned. Fonts that did load before the failure stay
//! registered.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use async_trait::async_trait;
use futures::future::try_join_all;
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};

use crate::error::{ConsoleError, ConsoleResult};

/// A font family and where to load it from
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FontFace {
    pub family: String,
    pub url: String,
}

impl FontFace {
    pub fn new(family: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            family: family.into(),
            url: url.into(),
        }
    }
}

/// Fonts preloaded at startup
pub fn default_fonts() -> Vec<FontFace> {
    vec![FontFace::new("Cascadia Code", "/fonts/CascadiaCode.woff2")]
}

/// Font container formats recognised by their leading bytes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FontFormat {
    Woff2,
    Woff,
    TrueType,
    OpenType,
}

impl FontFormat {
    /// Detect the format from the file signature
    pub fn sniff(bytes: &[u8]) -> Option<FontFormat> {
        match bytes.get(..4)? {
            b"wOF2" => Some(FontFormat::Woff2),
            b"wOFF" => Some(FontFormat::Woff),
            [0x00, 0x01, 0x00, 0x00] | b"true" => Some(FontFormat::TrueType),
            b"OTTO" => Some(FontFormat::OpenType),
            _ => None,
        }
    }
}

/// A font that finished loading
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadedFont {
    pub family: String,
    pub format: FontFormat,
    pub data: Arc<[u8]>,
}

/// Something that can fetch font data for a descriptor
#[async_trait]
pub trait FontLoader: Send + Sync {
    async fn load(&self, face: &FontFace) -> ConsoleResult<LoadedFont>;
}

/// The set of fonts available to the renderer
pub trait FontRegistry: Send + Sync {
    fn add(&self, font: LoadedFont);
}

/// In-memory font registry
#[derive(Debug, Clone, Default)]
pub struct FontBook {
    fonts: Arc<RwLock<BTreeMap<String, LoadedFont>>>,
}

impl FontBook {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, family: &str) -> bool {
        self.fonts.read().contains_key(family)
    }

    pub fn get(&self, family: &str) -> Option<LoadedFont> {
        self.fonts.read().get(family).cloned()
    }

    /// Registered families in name order
    pub fn families(&self) -> Vec<String> {
        self.fonts.read().keys().cloned().collect()
    }
}

impl FontRegistry for FontBook {
    fn add(&self, font: LoadedFont) {
        tracing::debug!(family = %font.family, bytes = font.data.len(), "Font registered");
        self.fonts.write().insert(font.family.clone(), font);
    }
}

/// Loads fonts from an asset directory; URLs are resolved relative to it
#[derive(Debug, Clone)]
pub struct AssetFontLoader {
    root: PathBuf,
}

impl AssetFontLoader {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// File backing a font URL such as `/fonts/CascadiaCode.woff2`
    pub fn path_for(&self, face: &FontFace) -> ConsoleResult<PathBuf> {
        let relative = face.url.trim_start_matches('/');
        if relative.is_empty() || relative.split('/').any(|part| part == "..") {
            return Err(ConsoleError::FontLoad {
                family: face.family.clone(),
                reason: format!("invalid font url {}", face.url),
            });
        }
        Ok(self.root.join(relative))
    }
}

#[async_trait]
impl FontLoader for AssetFontLoader {
    async fn load(&self, face: &FontFace) -> ConsoleResult<LoadedFont> {
        let path = self.path_for(face)?;
        let data = tokio::fs::read(&path)
            .await
            .map_err(|e| ConsoleError::FontLoad {
                family: face.family.clone(),
                reason: format!("{}: {}", path.display(), e),
            })?;
        let format = FontFormat::sniff(&data).ok_or_else(|| ConsoleError::FontLoad {
            family: face.family.clone(),
            reason: "unrecognised font format".to_string(),
        })?;
        Ok(LoadedFont {
            family: face.family.clone(),
            format,
            data: data.into(),
        })
    }
}

/// Load one font and register it; yields the family name
pub async fn load_font(
    loader: &dyn FontLoader,
    registry: &dyn FontRegistry,
    face: &FontFace,
) -> ConsoleResult<String> {
    let font = loader.load(face).await?;
    let family = font.family.clone();
    registry.add(font);
    Ok(family)
}

/// Load all fonts concurrently; all must succeed.
///
/// Returns the family names in descriptor order.
pub async fn preload_fonts(
    loader: &dyn FontLoader,
    registry: &dyn FontRegistry,
    fonts: &[FontFace],
) -> ConsoleResult<Vec<String>> {
    let result = try_join_all(fonts.iter().map(|face| load_font(loader, registry, face))).await;
    match &result {
        Ok(families) => tracing::info!(count = families.len(), "Fonts preloaded"),
        Err(e) => tracing::error!(error = %e, "Font preload failed, falling back to system fonts"),
    }
    result
}

/// Terminal font choices, grouped by platform
pub const TERMINAL_FONT_GROUPS: &[(&str, &[&str])] = &[
    ("Windows", &["Cascadia Code", "Consolas", "Courier New"]),
    ("macOS", &["Menlo", "Monaco", "Courier"]),
];

/// Font used when nothing better is available
pub const FALLBACK_TERMINAL_FONT: &str = "Cascadia Code";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    Windows,
    MacOs,
    Other,
}

impl Platform {
    /// Platform of the running process
    pub fn current() -> Self {
        if cfg!(target_os = "windows") {
            Platform::Windows
        } else if cfg!(target_os = "macos") {
            Platform::MacOs
        } else {
            Platform::Other
        }
    }
}

/// Pick the first available terminal font for the platform
pub fn default_terminal_font(platform: Platform, is_available: impl Fn(&str) -> bool) -> &'static str {
    let candidates: &[&'static str] = match platform {
        Platform::MacOs => &["Menlo", "Monaco", "Courier"],
        Platform::Windows => &["Cascadia Code", "Consolas"],
        Platform::Other => &[],
    };
    candidates
        .iter()
        .copied()
        .find(|font| is_available(font))
        .unwrap_or(FALLBACK_TERMINAL_FONT)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::time::Duration;

    /// Loader serving fixed results per URL after a per-URL delay
    struct ScriptedLoader {
        responses: HashMap<String, (u64, bool)>,
    }

    #[async_trait]
    impl FontLoader for ScriptedLoader {
        async fn load(&self, face: &FontFace) -> ConsoleResult<LoadedFont> {
            let (delay_ms, ok) = self.responses.get(&face.url).copied().unwrap_or((0, false));
            tokio::time::sleep(Duration::from_millis(delay_ms)).await;
            if !ok {
                return Err(ConsoleError::FontLoad {
                    family: face.family.clone(),
                    reason: "404".to_string(),
                });
            }
            Ok(LoadedFont {
                family: face.family.clone(),
                format: FontFormat::Woff2,
                data: Arc::from(&b"wOF2"[..]),
            })
        }
    }

    fn loader(entries: &[(&str, u64, bool)]) -> ScriptedLoader {
        ScriptedLoader {
            responses: entries
                .iter()
                .map(|(url, delay, ok)| (url.to_string(), (*delay, *ok)))
                .collect(),
        }
    }

    fn faces() -> Vec<FontFace> {
        vec![FontFace::new("F1", "u1"), FontFace::new("F2", "u2")]
    }

    #[tokio::test(start_paused = true)]
    async fn all_fonts_load_in_descriptor_order() {
        // F2 finishes first; order still follows the input
        let loader = loader(&[("u1", 30, true), ("u2", 10, true)]);
        let book = FontBook::new();

        let families = preload_fonts(&loader, &book, &faces()).await.unwrap();
        assert_eq!(families, vec!["F1", "F2"]);
        assert_eq!(book.families(), vec!["F1", "F2"]);
    }

    #[tokio::test(start_paused = true)]
    async fn loads_run_concurrently() {
        let loader = loader(&[("u1", 100, true), ("u2", 100, true)]);
        let book = FontBook::new();

        let start = tokio::time::Instant::now();
        preload_fonts(&loader, &book, &faces()).await.unwrap();
        assert!(start.elapsed() < Duration::from_millis(150));
    }

    #[tokio::test(start_paused = true)]
    async fn one_failure_fails_the_aggregate() {
        let loader = loader(&[("u1", 5, true), ("u2", 20, false)]);
        let book = FontBook::new();

        let err = preload_fonts(&loader, &book, &faces()).await.unwrap_err();
        assert!(matches!(err, ConsoleError::FontLoad { ref family, .. } if family == "F2"));
        // F1 finished before the failure and stays registered
        assert!(book.contains("F1"));
        assert!(!book.contains("F2"));
    }

    #[tokio::test]
    async fn empty_list_resolves_empty() {
        let loader = loader(&[]);
        let book = FontBook::new();
        assert!(preload_fonts(&loader, &book, &[]).await.unwrap().is_empty());
    }

    #[test]
    fn sniff_font_signatures() {
        assert_eq!(FontFormat::sniff(b"wOF2rest"), Some(FontFormat::Woff2));
        assert_eq!(FontFormat::sniff(b"wOFFrest"), Some(FontFormat::Woff));
        assert_eq!(FontFormat::sniff(&[0, 1, 0, 0, 9]), Some(FontFormat::TrueType));
        assert_eq!(FontFormat::sniff(b"OTTO"), Some(FontFormat::OpenType));
        assert_eq!(FontFormat::sniff(b"GIF89a"), None);
        assert_eq!(FontFormat::sniff(b"wO"), None);
    }

    #[test]
    fn asset_paths_stay_inside_root() {
        let loader = AssetFontLoader::new("/assets");
        assert_eq!(
            loader.path_for(&FontFace::new("C", "/fonts/CascadiaCode.woff2")).unwrap(),
            PathBuf::from("/assets/fonts/CascadiaCode.woff2")
        );
        assert!(loader.path_for(&FontFace::new("C", "/../secret")).is_err());
        assert!(loader.path_for(&FontFace::new("C", "/")).is_err());
    }

    #[tokio::test]
    async fn asset_loader_reads_and_validates() {
        let dir = tempfile::TempDir::new().unwrap();
        std::fs::create_dir_all(dir.path().join("fonts")).unwrap();
        std::fs::write(dir.path().join("fonts/good.woff2"), b"wOF2\0\0\0\0").unwrap();
        std::fs::write(dir.path().join("fonts/bad.woff2"), b"<html>").unwrap();

        let loader = AssetFontLoader::new(dir.path());
        let font = loader.load(&FontFace::new("Good", "/fonts/good.woff2")).await.unwrap();
        assert_eq!(font.format, FontFormat::Woff2);
        assert!(loader.load(&FontFace::new("Bad", "/fonts/bad.woff2")).await.is_err());
        assert!(loader.load(&FontFace::new("Gone", "/fonts/gone.woff2")).await.is_err());
    }

    #[test]
    fn terminal_font_selection() {
        assert_eq!(default_terminal_font(Platform::MacOs, |f| f == "Monaco"), "Monaco");
        assert_eq!(default_terminal_font(Platform::MacOs, |_| true), "Menlo");
        assert_eq!(default_terminal_font(Platform::Windows, |f| f == "Consolas"), "Consolas");
        assert_eq!(default_terminal_font(Platform::Windows, |_| false), FALLBACK_TERMINAL_FONT);
        assert_eq!(default_terminal_font(Platform::Other, |_| true), FALLBACK_TERMINAL_FONT);
    }
}
