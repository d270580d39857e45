//! Translation lookup for diagnostics.
//!
//! A [`MessageCatalog`] maps an English template (the key) to its translation. Catalogs
//! are read from Java-style `.properties` bundles, one per locale. A bundle for `fr_BE`
//! is backed by the bundles for `fr` and the base bundle: keys missing from the most
//! specific bundle are looked up in its parents. Bundles are decoded as UTF-8, or as
//! ISO-8859-1 when they are not valid UTF-8.
//!
//! The process-wide catalog is loaded at most once, either explicitly through
//! [`install`] or lazily with the default [`CatalogConfig`] on first use.
//!
//! Loading never fails: without any readable bundle the catalog is empty, and every key
//! then translates to itself.
//!
//! # Examples
//!
//! ```rust
//! use memberscope::i18n::MessageCatalog;
//!
//! let catalog = MessageCatalog::parse("fr", "Hello\\ {0} = Bonjour {0}\n");
//! assert_eq!(catalog.translate("Hello {0}"), "Bonjour {0}");
//! assert_eq!(catalog.translate("Goodbye"), "Goodbye");
//! ```

use std::{collections::HashMap, fs, io::ErrorKind, path::Path, sync::OnceLock};

use log::{debug, info, warn};

use crate::{i18n::CatalogConfig, Error, Result};

static CATALOG: OnceLock<MessageCatalog> = OnceLock::new();

/// Translations for one locale and its parents
#[derive(Debug, Clone, Default)]
pub struct MessageCatalog {
    language: String,
    /// One map per bundle, most specific first
    bundles: Vec<HashMap<String, String>>,
}

impl MessageCatalog {
    /// A catalog without entries, every key translates to itself
    #[must_use]
    pub fn empty(language: &str) -> Self {
        MessageCatalog {
            language: language.to_string(),
            bundles: Vec::new(),
        }
    }

    /// Parse the content of a single properties bundle
    #[must_use]
    pub fn parse(language: &str, text: &str) -> Self {
        let mut entries = HashMap::new();
        for line in logical_lines(text) {
            let (key, value) = split_entry(&line);
            entries.insert(key, value);
        }

        MessageCatalog {
            language: language.to_string(),
            bundles: vec![entries],
        }
    }

    /// Read a single properties bundle from `path`
    ///
    /// # Errors
    /// Returns [`crate::Error::FileError`] if the file cannot be read.
    pub fn from_file(path: impl AsRef<Path>, language: &str) -> Result<Self> {
        let bytes = fs::read(path)?;
        Ok(Self::parse(language, &decode(bytes)))
    }

    /// Use `parent` for every key this catalog does not translate
    #[must_use]
    pub fn with_parent(mut self, parent: MessageCatalog) -> Self {
        self.bundles.extend(parent.bundles);
        self
    }

    /// Load the catalog described by `config`.
    ///
    /// Every bundle of the locale chain that exists is loaded, from the most specific
    /// one (`MessagesBundle_fr_BE`) down to the base bundle (`MessagesBundle`).
    #[must_use]
    pub fn load(config: &CatalogConfig) -> Self {
        let language = resolve_language(config);
        let mut catalog = Self::empty(&language);

        for path in config.candidate_paths(&language) {
            match Self::from_file(&path, &language) {
                Ok(bundle) => {
                    info!("loaded {} message(s) from {}", bundle.len(), path.display());
                    catalog = catalog.with_parent(bundle);
                }
                Err(Error::FileError(error)) if error.kind() == ErrorKind::NotFound => {
                    debug!("no message bundle at {}", path.display());
                }
                Err(error) => {
                    warn!("cannot read message bundle {}: {}", path.display(), error);
                }
            }
        }

        if catalog.bundles.is_empty() {
            warn!(
                "no message bundle for language '{}' under {}",
                language,
                config.bundle_location.display()
            );
        }
        catalog
    }

    /// Language of this catalog
    #[must_use]
    pub fn language(&self) -> &str {
        &self.language
    }

    /// Number of entries over all loaded bundles
    #[must_use]
    pub fn len(&self) -> usize {
        self.bundles.iter().map(HashMap::len).sum()
    }

    /// True if the catalog holds no entries
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bundles.iter().all(HashMap::is_empty)
    }

    /// The translation of `key` from the most specific bundle defining it, or `key`
    /// itself when there is none
    #[must_use]
    pub fn translate<'a>(&'a self, key: &'a str) -> &'a str {
        self.bundles
            .iter()
            .find_map(|bundle| bundle.get(key))
            .map_or(key, String::as_str)
    }
}

/// UTF-8 if valid, otherwise ISO-8859-1 where every byte is one character
fn decode(bytes: Vec<u8>) -> String {
    match String::from_utf8(bytes) {
        Ok(text) => text,
        Err(error) => error.into_bytes().into_iter().map(char::from).collect(),
    }
}

/// Determine the language named by the language file of `config`.
///
/// Only the first line counts, with all whitespace removed. A missing, unreadable or
/// empty file selects the fallback language.
#[must_use]
pub fn resolve_language(config: &CatalogConfig) -> String {
    match fs::read_to_string(&config.lang_file) {
        Ok(content) => {
            let language: String = content
                .lines()
                .next()
                .unwrap_or_default()
                .chars()
                .filter(|c| !c.is_whitespace())
                .collect();
            if language.is_empty() {
                debug!(
                    "language file {} is empty, using '{}'",
                    config.lang_file.display(),
                    config.fallback_language
                );
                config.fallback_language.clone()
            } else {
                language
            }
        }
        Err(error) => {
            debug!(
                "cannot read language file {} ({}), using '{}'",
                config.lang_file.display(),
                error,
                config.fallback_language
            );
            config.fallback_language.clone()
        }
    }
}

/// Load the process-wide catalog from `config`.
///
/// Returns `false` if a catalog was already loaded, in which case `config` is ignored.
pub fn install(config: &CatalogConfig) -> bool {
    let mut installed = false;
    CATALOG.get_or_init(|| {
        installed = true;
        MessageCatalog::load(config)
    });
    installed
}

/// The process-wide catalog, loaded with the default configuration if needed
pub fn global() -> &'static MessageCatalog {
    CATALOG.get_or_init(|| MessageCatalog::load(&CatalogConfig::default()))
}

/// Translate `key` through the process-wide catalog
pub fn tr(key: &str) -> &str {
    global().translate(key)
}

/// Join physical lines into logical lines, dropping comments and blanks
fn logical_lines(text: &str) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();
    let mut continuing = false;

    for raw in text.lines() {
        let line = raw.trim_start();
        if !continuing && (line.is_empty() || line.starts_with('#') || line.starts_with('!')) {
            continue;
        }

        // An odd number of trailing backslashes continues the line
        let trailing = line.chars().rev().take_while(|&c| c == '\\').count();
        if trailing % 2 == 1 {
            current.push_str(&line[..line.len() - 1]);
            continuing = true;
        } else {
            current.push_str(line);
            lines.push(std::mem::take(&mut current));
            continuing = false;
        }
    }

    if continuing && !current.is_empty() {
        lines.push(current);
    }
    lines
}

/// Split a logical line into its unescaped key and value
fn split_entry(line: &str) -> (String, String) {
    let chars: Vec<char> = line.chars().collect();
    let mut key_end = chars.len();
    let mut i = 0;
    while i < chars.len() {
        match chars[i] {
            '\\' => i += 2,
            '=' | ':' | ' ' | '\t' | '\u{c}' => {
                key_end = i;
                break;
            }
            _ => i += 1,
        }
    }
    let key_end = key_end.min(chars.len());

    // The separator is optional whitespace, at most one '=' or ':', optional whitespace
    let mut value_start = key_end;
    while value_start < chars.len() && matches!(chars[value_start], ' ' | '\t' | '\u{c}') {
        value_start += 1;
    }
    if value_start < chars.len() && matches!(chars[value_start], '=' | ':') {
        value_start += 1;
        while value_start < chars.len() && matches!(chars[value_start], ' ' | '\t' | '\u{c}') {
            value_start += 1;
        }
    }

    let key: String = chars[..key_end].iter().collect();
    let value: String = chars[value_start..].iter().collect();
    (unescape(&key), unescape(&value))
}

fn unescape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars();

    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }

        match chars.next() {
            Some('n') => out.push('\n'),
            Some('t') => out.push('\t'),
            Some('r') => out.push('\r'),
            Some('f') => out.push('\u{c}'),
            Some('u') => {
                let hex: String = chars.by_ref().take(4).collect();
                match u32::from_str_radix(&hex, 16).ok().and_then(char::from_u32) {
                    Some(decoded) if hex.len() == 4 => out.push(decoded),
                    _ => {
                        out.push_str("\\u");
                        out.push_str(&hex);
                    }
                }
            }
            Some(other) => out.push(other),
            None => {}
        }
    }

    out
}
