//! Message catalog configuration
//!
//! Controls where the catalog for the current language is looked up. The defaults
//! mirror the layout a grading container is expected to provide: a `./lang` file written
//! by the run script, holding a language code such as `en` or `fr_BE`, and one
//! properties bundle per language next to it.

use std::path::PathBuf;

/// Default base path of the properties bundles, the language suffix is appended
pub const DEFAULT_BUNDLE_LOCATION: &str = "Translations/translations_rust/MessagesBundle";
/// Default path of the file naming the language
pub const DEFAULT_LANG_FILE: &str = "./lang";
/// Language used when the language file is missing or unreadable
pub const DEFAULT_FALLBACK_LANGUAGE: &str = "fr";

/// Where and how the message catalog is loaded
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogConfig {
    /// Base path of the bundles, `{bundle_location}_{lang}.properties` is read
    pub bundle_location: PathBuf,
    /// File whose first line names the language
    pub lang_file: PathBuf,
    /// Language used when `lang_file` cannot be read or is empty
    pub fallback_language: String,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            bundle_location: PathBuf::from(DEFAULT_BUNDLE_LOCATION),
            lang_file: PathBuf::from(DEFAULT_LANG_FILE),
            fallback_language: DEFAULT_FALLBACK_LANGUAGE.to_string(),
        }
    }
}

impl CatalogConfig {
    /// Use a different bundle location
    #[must_use]
    pub fn with_bundle_location(mut self, location: impl Into<PathBuf>) -> Self {
        self.bundle_location = location.into();
        self
    }

    /// Use a different language file
    #[must_use]
    pub fn with_lang_file(mut self, lang_file: impl Into<PathBuf>) -> Self {
        self.lang_file = lang_file.into();
        self
    }

    /// Use a different fallback language
    #[must_use]
    pub fn with_fallback_language(mut self, language: impl Into<String>) -> Self {
        self.fallback_language = language.into();
        self
    }

    /// The bundle file holding the translations for `language`
    #[must_use]
    pub fn bundle_path(&self, language: &str) -> PathBuf {
        let mut path = self.bundle_location.clone().into_os_string();
        path.push(format!("_{language}.properties"));
        PathBuf::from(path)
    }

    /// The bundle used when no locale specific bundle defines a key
    #[must_use]
    pub fn base_bundle_path(&self) -> PathBuf {
        let mut path = self.bundle_location.clone().into_os_string();
        path.push(".properties");
        PathBuf::from(path)
    }

    /// Bundles backing `language`, most specific first: `fr_BE` yields the `fr_BE`,
    /// `fr` and base bundles
    #[must_use]
    pub fn candidate_paths(&self, language: &str) -> Vec<PathBuf> {
        let mut paths = Vec::new();
        let mut tag = language.trim_end_matches('_');
        while !tag.is_empty() {
            paths.push(self.bundle_path(tag));
            tag = tag.rsplit_once('_').map_or("", |(parent, _)| parent.trim_end_matches('_'));
        }
        paths.push(self.base_bundle_path());
        paths
    }
}
