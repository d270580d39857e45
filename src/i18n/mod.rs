//! Localization of diagnostics.
//!
//! Diagnostics are built from English templates. Before placeholders are filled in, the
//! template is looked up in the process-wide [`MessageCatalog`], which replaces it with
//! the translation for the configured language when one exists.
//!
//! # Examples
//!
//! ```rust
//! use memberscope::i18n::{format_message, MessageCatalog};
//!
//! let catalog = MessageCatalog::parse("fr", "Missing\\ {0} = {0} introuvable\n");
//! let text = format_message(catalog.translate("Missing {0}"), &["getName"]);
//! assert_eq!(text, "getName introuvable");
//! ```

pub mod catalog;
mod config;
mod format;

pub use catalog::{global, install, tr, MessageCatalog};
pub use config::{
    CatalogConfig, DEFAULT_BUNDLE_LOCATION, DEFAULT_FALLBACK_LANGUAGE, DEFAULT_LANG_FILE,
};
pub use format::format_message;
