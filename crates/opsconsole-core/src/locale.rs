//! Locale dictionaries built from ordered JSON fragments.
//!
//! Each supported locale ships a fixed list of fragments (one per console
//! area). The fragments are merged in declaration order into a single flat
//! key → string table:
//!
//! ```text
//! common ─┐
//! sys ────┤
//! quick ──┼──▶ merge (later wins) ──▶ LocaleDictionary
//! ...  ───┘
//! ```
//!
//! Tables are built once at startup and never mutated afterwards.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{ConsoleError, ConsoleResult};

/// Supported console locales
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Locale {
    /// Simplified Chinese (the console default)
    #[serde(rename = "zh_CN")]
    ZhCn,
    /// US English
    #[serde(rename = "en_US")]
    EnUs,
}

impl Locale {
    /// All supported locales in display order
    pub const ALL: [Locale; 2] = [Locale::ZhCn, Locale::EnUs];

    /// Locale used when nothing valid was saved
    pub const DEFAULT: Locale = Locale::ZhCn;

    /// Locale code as stored in settings (`zh_CN`, `en_US`)
    pub fn code(&self) -> &'static str {
        match self {
            Locale::ZhCn => "zh_CN",
            Locale::EnUs => "en_US",
        }
    }

    /// Human-readable language name
    pub fn label(&self) -> &'static str {
        match self {
            Locale::ZhCn => "Chinese",
            Locale::EnUs => "English",
        }
    }

    /// Icon id shown next to the language in the picker
    pub fn icon(&self) -> &'static str {
        match self {
            Locale::ZhCn => "ic-locale_zh_CN",
            Locale::EnUs => "ic-locale_en_US",
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Locale {
    type Err = ConsoleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Locale::ALL
            .into_iter()
            .find(|locale| locale.code() == s)
            .ok_or_else(|| ConsoleError::UnsupportedLocale(s.to_string()))
    }
}

/// Pick the active locale from a previously saved code.
///
/// Unknown or missing codes fall back to [`Locale::DEFAULT`].
pub fn resolve_locale(saved: Option<&str>) -> Locale {
    match saved {
        Some(code) => match code.parse::<Locale>() {
            Ok(locale) => locale,
            Err(_) => {
                tracing::debug!(code, "Saved locale is not supported, using default");
                Locale::DEFAULT
            }
        },
        None => Locale::DEFAULT,
    }
}

/// One named source of locale key/value pairs
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Fragment {
    /// Fragment name (e.g. `common`, `sys`)
    pub name: String,
    /// Flat key → text entries
    pub entries: BTreeMap<String, String>,
}

impl Fragment {
    /// Create a fragment from already-parsed entries
    pub fn new<K, V>(name: impl Into<String>, entries: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            name: name.into(),
            entries: entries
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    /// Parse a fragment from a flat JSON object of string values
    pub fn from_json(name: impl Into<String>, json: &str) -> ConsoleResult<Self> {
        let name = name.into();
        let entries: BTreeMap<String, String> =
            serde_json::from_str(json).map_err(|e| ConsoleError::Locale {
                fragment: name.clone(),
                reason: e.to_string(),
            })?;
        Ok(Self { name, entries })
    }
}

/// Flat, immutable key → text table for one locale
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LocaleDictionary {
    entries: BTreeMap<String, String>,
}

impl LocaleDictionary {
    /// Look up a key
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    /// Look up a key, falling back to the key itself
    pub fn translate<'a>(&'a self, key: &'a str) -> &'a str {
        self.get(key).unwrap_or(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in key order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

/// Merge fragments in order; a later fragment overrides an earlier one on
/// key collision. Values are replaced whole, never deep-merged.
pub fn merge<'a>(fragments: impl IntoIterator<Item = &'a Fragment>) -> LocaleDictionary {
    let mut entries = BTreeMap::new();
    for fragment in fragments {
        for (key, value) in &fragment.entries {
            if let Some(previous) = entries.insert(key.clone(), value.clone()) {
                tracing::trace!(
                    key = %key,
                    fragment = %fragment.name,
                    previous = %previous,
                    "Locale key overridden"
                );
            }
        }
    }
    LocaleDictionary { entries }
}

const ZH_CN_FRAGMENTS: &[(&str, &str)] = &[
    ("common", include_str!("../locales/zh_CN/common.json")),
    ("sys", include_str!("../locales/zh_CN/sys.json")),
    ("quick-command", include_str!("../locales/zh_CN/quick-command.json")),
    ("sys-config", include_str!("../locales/zh_CN/sys-config.json")),
    ("components", include_str!("../locales/zh_CN/components.json")),
];

const EN_US_FRAGMENTS: &[(&str, &str)] = &[
    ("common", include_str!("../locales/en_US/common.json")),
    ("sys", include_str!("../locales/en_US/sys.json")),
    ("quick-command", include_str!("../locales/en_US/quick-command.json")),
    ("admin-setting", include_str!("../locales/en_US/admin-setting.json")),
    ("components", include_str!("../locales/en_US/components.json")),
];

/// Built-in fragments for a locale, parsed in bundle order
pub fn builtin_fragments(locale: Locale) -> ConsoleResult<Vec<Fragment>> {
    let sources = match locale {
        Locale::ZhCn => ZH_CN_FRAGMENTS,
        Locale::EnUs => EN_US_FRAGMENTS,
    };
    sources
        .iter()
        .map(|(name, json)| Fragment::from_json(*name, json))
        .collect()
}

/// One merged dictionary per supported locale
#[derive(Debug, Clone, Default)]
pub struct LocaleTables {
    zh_cn: LocaleDictionary,
    en_us: LocaleDictionary,
}

impl LocaleTables {
    /// Build both dictionaries from the embedded fragments
    pub fn builtin() -> ConsoleResult<Self> {
        let tables = Self {
            zh_cn: merge(&builtin_fragments(Locale::ZhCn)?),
            en_us: merge(&builtin_fragments(Locale::EnUs)?),
        };
        tracing::debug!(
            zh_cn = tables.zh_cn.len(),
            en_us = tables.en_us.len(),
            "Locale tables built"
        );
        Ok(tables)
    }

    /// Build tables from explicit fragment lists
    pub fn from_fragments(zh_cn: &[Fragment], en_us: &[Fragment]) -> Self {
        Self {
            zh_cn: merge(zh_cn),
            en_us: merge(en_us),
        }
    }

    pub fn dictionary(&self, locale: Locale) -> &LocaleDictionary {
        match locale {
            Locale::ZhCn => &self.zh_cn,
            Locale::EnUs => &self.en_us,
        }
    }

    /// Translate a key, falling back to the key itself when missing
    pub fn translate<'a>(&'a self, locale: Locale, key: &'a str) -> &'a str {
        self.dictionary(locale).translate(key)
    }
}
