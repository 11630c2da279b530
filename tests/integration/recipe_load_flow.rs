use std::fs;
use std::path::Path;

use recipe_tester::domain::recipe::Recipe;
use recipe_tester::io::{Format, IoError, reader, resolve_format};
use serde_json::json;
use tempfile::tempdir;

#[test]
fn binary_plist_loads_like_xml() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("Foo.download.recipe");

    let mut author = plist::Dictionary::new();
    author.insert("Name".to_string(), plist::Value::from("Jane Doe"));
    let mut attribution = plist::Dictionary::new();
    attribution.insert("Author".to_string(), plist::Value::Dictionary(author));
    let mut root = plist::Dictionary::new();
    root.insert(
        "Attribution".to_string(),
        plist::Value::Dictionary(attribution),
    );
    plist::Value::Dictionary(root)
        .to_file_binary(&path)
        .expect("write binary plist");

    let recipe = Recipe::load(&path);
    assert!(recipe.load_error().is_none());
    assert_eq!(
        recipe.contents()["Attribution"]["Author"]["Name"],
        json!("Jane Doe")
    );
}

#[test]
fn top_level_array_is_a_load_failure() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("List.download.recipe");
    fs::write(
        &path,
        r#"<?xml version="1.0" encoding="UTF-8"?>
<plist version="1.0">
<array><string>not a recipe</string></array>
</plist>"#,
    )
    .expect("write recipe");

    match reader::read_document(&path) {
        Err(IoError::NotADictionary { found }) => assert_eq!(found, "array"),
        other => panic!("unexpected result: {other:?}"),
    }
    let recipe = Recipe::load(&path);
    assert_eq!(recipe.contents(), &json!({}));
}

#[test]
fn format_follows_final_extension() {
    assert_eq!(resolve_format(Path::new("a/Foo.munki.recipe")), Format::Plist);
    assert_eq!(resolve_format(Path::new("a/Foo.munki.recipe.yml")), Format::Yaml);
}
