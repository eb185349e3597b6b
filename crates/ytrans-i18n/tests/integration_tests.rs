//! Integration tests for loading translation trees from disk

use tempfile::TempDir;
use ytrans_common::test_utils::{fixtures, init_test_logging, TranslationTree};
use ytrans_i18n::{
    format_values, rewrap, ExtensionSet, GroupRegistry, I18nError, LanguageTable, Mapping, Value,
};

fn text(value: &str) -> Value {
    Value::String(value.to_string())
}

fn load(tree: &TranslationTree) -> GroupRegistry {
    init_test_logging();
    GroupRegistry::load(tree.root(), &ExtensionSet::default()).unwrap()
}

#[test]
fn test_site_scenario() {
    let tree = TranslationTree::new();
    tree.file("site", "en.yaml", r#"{"home": {"title": "Welcome"}}"#)
        .file("site", "fr.yaml", r#"{"home": {"title": "Bienvenue"}}"#);
    let registry = load(&tree);

    let site = registry.get("site").unwrap();
    assert_eq!(site.get("home:title", "en", None).unwrap(), Some(text("Welcome")));
    assert_eq!(
        site.get_all("home:title", None).unwrap(),
        vec![
            ("en".to_string(), Some(text("Welcome"))),
            ("fr".to_string(), Some(text("Bienvenue"))),
        ]
    );
    assert_eq!(
        site.get_or("home:missing", "en", text("N/A"), None).unwrap(),
        text("N/A")
    );
    assert!(matches!(
        site.resolve("home:title:extra", "en"),
        Err(I18nError::PathTooDeep {
            segments: 3,
            max_depth: 2,
            ..
        })
    ));
}

#[test]
fn test_nonexistent_group() {
    let registry = load(&TranslationTree::site());
    match registry.get("nonexistent") {
        Err(I18nError::GroupNotFound { group }) => assert_eq!(group, "nonexistent"),
        other => panic!("expected GroupNotFound, got {other:?}"),
    }
}

#[test]
fn test_formatting_through_the_registry() {
    let registry = load(&TranslationTree::site());
    let args = format_values!["name" => "Alice", "year" => 2024];

    assert_eq!(
        registry
            .translate("site", "home:greeting", "en", args.as_ref())
            .unwrap(),
        Some(text("Hello, Alice!"))
    );
    assert_eq!(
        registry
            .translate("site", "home:greeting", "fr", args.as_ref())
            .unwrap(),
        Some(text("Bonjour, Alice !"))
    );
    assert_eq!(
        registry.translate("site", "footer", "en", args.as_ref()).unwrap(),
        Some(text("(c) 2024"))
    );
}

#[test]
fn test_formatting_a_subtree_keeps_non_string_leaves() {
    let tree = TranslationTree::new();
    tree.file("errors", "en.yaml", fixtures::ERRORS_EN);
    let registry = load(&tree);

    let args = format_values!["page" => "/about"];
    let not_found = registry
        .translate("errors", "http:not_found", "en", args.as_ref())
        .unwrap()
        .unwrap();
    assert_eq!(not_found["code"], Value::Number(404.into()));
    assert_eq!(not_found["message"], text("Page /about was not found"));
    assert_eq!(not_found["retry"], Value::Bool(false));
}

#[test]
fn test_missing_format_key_propagates() {
    let registry = load(&TranslationTree::site());
    let err = registry
        .translate("site", "home:greeting", "en", format_values!["other" => 1].as_ref())
        .unwrap_err();
    assert!(matches!(err, I18nError::MissingFormatKey { key } if key == "name"));
}

#[test]
fn test_numeric_placeholders_take_numeric_specs() {
    let tree = TranslationTree::new();
    tree.file(
        "shop",
        "en.yaml",
        "cart: {summary: 'Order #{order:0>5}: {count} items, {total:.2} EUR'}",
    );
    let registry = load(&tree);

    let args = format_values!["order" => 42, "count" => 3_u32, "total" => 19.5];
    assert_eq!(
        registry
            .translate("shop", "cart:summary", "en", args.as_ref())
            .unwrap(),
        Some(text("Order #00042: 3 items, 19.50 EUR"))
    );

    let wide = format_values!["order" => 42, "count" => 3, "total" => 1.0];
    let tree = TranslationTree::new();
    tree.file("shop", "en.yaml", "cart: {summary: '{order:99999999}'}");
    let err = load(&tree)
        .translate("shop", "cart:summary", "en", wide.as_ref())
        .unwrap_err();
    assert!(matches!(err, I18nError::InvalidTemplate { .. }));
}

#[test]
fn test_groups_and_languages_are_sorted_by_file_name() {
    let tree = TranslationTree::new();
    tree.file("zeta", "fr.yaml", "a: 1")
        .file("zeta", "de.yaml", "a: 1")
        .file("alpha", "en.yml", "a: 1");
    let registry = load(&tree);

    assert_eq!(registry.groups(), vec!["alpha", "zeta"]);
    assert_eq!(registry.get("zeta").unwrap().languages(), vec!["de", "fr"]);
    assert_eq!(registry.root(), tree.root());
}

#[test]
fn test_unrecognized_entries_are_ignored() {
    let tree = TranslationTree::site();
    tree.file("site", "notes.txt", "not a translation")
        .file("site", "de.json", r#"{"home": {"title": "Willkommen"}}"#)
        .root_file("README.md", "# translations");
    tree.file("site/drafts", "es.yaml", "home: {title: Hola}");

    let registry = load(&tree);
    assert_eq!(registry.groups(), vec!["site"]);
    assert_eq!(registry.get("site").unwrap().languages(), vec!["en", "fr"]);
}

#[test]
fn test_configured_extensions_select_parsers() {
    let tree = TranslationTree::new();
    tree.file("site", "de.json", r#"{"home": {"title": "Willkommen"}}"#)
        .file("site", "en.yaml", "home: {title: Welcome}")
        .file("site", "it.toml", "[home]\ntitle = \"Benvenuto\"\n");

    let extensions = ExtensionSet::new(["json", "toml"]).unwrap();
    let registry = GroupRegistry::load(tree.root(), &extensions).unwrap();
    let site = registry.get("site").unwrap();

    assert_eq!(site.languages(), vec!["de", "it"]);
    assert_eq!(site.get("home:title", "it", None).unwrap(), Some(text("Benvenuto")));
}

#[test]
fn test_malformed_file_fails_the_group() {
    let tree = TranslationTree::site();
    tree.file("site", "de.yaml", fixtures::MALFORMED);

    let err = GroupRegistry::load(tree.root(), &ExtensionSet::default()).unwrap_err();
    match err {
        I18nError::Parse { path, .. } => assert!(path.ends_with("site/de.yaml")),
        other => panic!("expected Parse, got {other:?}"),
    }
}

#[test]
fn test_duplicate_stems_last_file_wins() {
    let tree = TranslationTree::new();
    tree.file("site", "en.yaml", "home: {title: from yaml}")
        .file("site", "en.yml", "home: {title: from yml}")
        .file("site", "fr.yaml", "home: {title: Bienvenue}");

    let site = LanguageTable::load(tree.group("site"), &ExtensionSet::default()).unwrap();
    assert_eq!(site.languages(), vec!["en", "fr"]);
    assert_eq!(
        site.get("home:title", "en", None).unwrap(),
        Some(text("from yml"))
    );
}

#[test]
fn test_empty_files_and_groups() {
    let tree = TranslationTree::new();
    tree.file("site", "en.yaml", "");
    tree.group("empty");
    let registry = load(&tree);

    assert_eq!(registry.groups(), vec!["empty", "site"]);
    assert!(registry.get("empty").unwrap().is_empty());
    let site = registry.get("site").unwrap();
    assert_eq!(site.document("en").unwrap().depth(), 0);
    assert_eq!(site.get("anything", "en", None).unwrap(), None);
}

#[test]
fn test_empty_root() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let registry = GroupRegistry::load(dir.path(), &ExtensionSet::default()).unwrap();
    assert!(registry.is_empty());
    assert!(registry.groups().is_empty());
}

#[test]
fn test_get_all_rewrapped_by_key() {
    let registry = load(&TranslationTree::site());
    let all = registry
        .get("site")
        .unwrap()
        .get_all("home:menu", None)
        .unwrap();

    let by_language: Mapping = all
        .into_iter()
        .map(|(language, value)| (Value::String(language), value.unwrap_or(Value::Null)))
        .collect();
    let by_key = Value::Mapping(rewrap(&by_language));

    assert_eq!(by_key["open"]["en"], text("Open"));
    assert_eq!(by_key["open"]["fr"], text("Ouvrir"));
    assert_eq!(by_key["close"]["fr"], text("Fermer"));
}

#[test]
fn test_registries_are_independent() {
    let first = TranslationTree::site();
    let second = TranslationTree::new();
    second.file("mail", "en.yaml", "subject: Hi");

    let a = load(&first);
    let b = load(&second);
    assert_eq!(a.groups(), vec!["site"]);
    assert_eq!(b.groups(), vec!["mail"]);
}
