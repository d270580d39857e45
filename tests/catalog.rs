//! Integration tests for localized diagnostics.
//!
//! The process-wide catalog can only be installed once, so every test in this file
//! installs the same French bundle through `install_french`.

use std::fs;

use memberscope::{
    i18n::{self, CatalogConfig},
    inspect::{CONSTRUCTOR_PARAMS, METHOD_VISIBILITY},
    prelude::*,
};

fn install_french() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("lang"), "fr\n").unwrap();

    let bundle = format!(
        "# Traductions\n{} = Le constructeur avec comme types d''arguments {{0}} n''a pas \\\n    \u{e9}t\u{e9} trouv\u{e9} !\n",
        escape_key(CONSTRUCTOR_PARAMS)
    );
    fs::write(dir.path().join("MessagesBundle_fr.properties"), bundle).unwrap();

    i18n::install(
        &CatalogConfig::default()
            .with_bundle_location(dir.path().join("MessagesBundle"))
            .with_lang_file(dir.path().join("lang")),
    );
}

fn escape_key(key: &str) -> String {
    key.replace(' ', "\\ ").replace('=', "\\=").replace(':', "\\:")
}

#[test]
fn translated_template_is_used() {
    install_french();
    assert_eq!(i18n::global().language(), "fr");

    let foo = ClassBuilder::new("Foo")
        .constructor(Modifiers::PUBLIC, &["int"])
        .build();
    let diagnostic = MemberMatcher::match_constructor(&*foo, &ConstructorSpec::new(&["long"]));

    assert_eq!(
        diagnostic.as_deref(),
        Some("Le constructeur avec comme types d'arguments [long] n'a pas \u{e9}t\u{e9} trouv\u{e9} !")
    );
}

#[test]
fn untranslated_template_falls_back() {
    install_french();

    let foo = ClassBuilder::new("Foo").build();
    let spec = MethodSpec::new("int", "size", &[]).with_visibility(Visibility::Public);
    let diagnostic = MemberMatcher::match_method(&*foo, &spec).unwrap();

    assert_eq!(i18n::tr(METHOD_VISIBILITY), METHOD_VISIBILITY);
    assert_eq!(
        diagnostic,
        "The method with modifier [public], return type int, name size and argument types [] was not found!"
    );
}

#[test]
fn second_install_is_ignored() {
    install_french();
    let other = CatalogConfig::default().with_fallback_language("en");
    assert!(!i18n::install(&other));
    assert_eq!(i18n::global().language(), "fr");
}
