use std::fs;
use std::path::{Path, PathBuf};

use recipe_tester::domain::recipe::Recipe;
use recipe_tester::domain::report::{Outcome, RunStatus};
use recipe_tester::engine::rules::RecipeVariant;
use tempfile::tempdir;

fn fixture(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures")
        .join(name)
}

fn run_fixture(name: &str) -> (recipe_tester::domain::report::RunReport, String) {
    let path = fixture(name);
    let tester = RecipeVariant::from_path(&path).tester(Recipe::load(&path));
    let mut out = Vec::new();
    let report = tester.run(&mut out).expect("run tester");
    (report, String::from_utf8(out).expect("utf8 report"))
}

#[test]
fn missing_attribution_fails_every_attribution_check() {
    let (report, text) = run_fixture("NoAttribution.pkg.recipe");

    assert_eq!(
        report
            .entry("test_filename_ends_with_recipe")
            .map(|entry| entry.outcome),
        Some(Outcome::Pass)
    );
    assert_eq!(
        report.entry("test_recipe_is_loaded").map(|entry| entry.outcome),
        Some(Outcome::Pass)
    );
    let failed: Vec<_> = report.fails().iter().map(|entry| entry.name.as_str()).collect();
    assert_eq!(
        failed,
        vec![
            "test_attribution_copyright_not_blank",
            "test_attribution_author_name_not_blank",
            "test_attribution_author_email_not_blank",
            "test_attribution_author_github_not_blank",
        ]
    );
    assert!(text.ends_with("FAILED (failures=4)\n"));
}

#[test]
fn complete_munki_recipe_is_ok() {
    let (report, text) = run_fixture("Firefox.munki.recipe");

    assert_eq!(report.entries.len(), 15);
    assert_eq!(report.passes().len(), 15);
    assert_eq!(report.status(), RunStatus::Ok);
    let mut lines = text.lines();
    assert!(lines.next().is_some_and(|line| line.starts_with("Testing recipe file ")));
    assert_eq!(lines.next(), Some("..............."));
    assert!(text.ends_with("\n\nOK\n"));
    assert!(!text.contains(&"=".repeat(70)));
}

#[test]
fn production_catalog_is_only_a_warning() {
    let (report, text) = run_fixture("Production.munki.recipe");

    let warns = report.warns();
    assert_eq!(warns.len(), 1);
    assert_eq!(warns[0].name, "test_input_pkginfo_catalogs_has_expected_value");
    assert!(warns[0].message.contains(r#"expected value ["testing"]"#));
    assert!(!report.has_failures());
    assert!(text.contains("WARN: test_input_pkginfo_catalogs_has_expected_value\n-- Reason: "));
    assert!(text.ends_with("OK (warnings=1)\n"));
}

#[test]
fn wrong_file_suffix_fails_only_the_suffix_check() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("Firefox.munki.plist");
    fs::copy(fixture("Firefox.munki.recipe"), &path).expect("copy fixture");

    let report = RecipeVariant::from_path(&path)
        .tester(Recipe::load(&path))
        .evaluate();
    assert_eq!(report.entries.len(), 15);
    let fails = report.fails();
    assert_eq!(fails.len(), 1);
    assert_eq!(fails[0].name, "test_filename_ends_with_recipe");
    assert_eq!(report.passes().len(), 14);
}

#[test]
fn malformed_recipe_fails_loaded_check_without_aborting() {
    let (report, text) = run_fixture("Broken.download.recipe");

    assert_eq!(report.entries.len(), 7);
    let loaded = report.entry("test_recipe_is_loaded").expect("loaded entry");
    assert_eq!(loaded.outcome, Outcome::Fail);
    assert!(loaded.message.starts_with("recipe could not be loaded: "));
    assert_eq!(
        report
            .entry("test_recipe_has_download_extension")
            .map(|entry| entry.outcome),
        Some(Outcome::Pass)
    );
    assert!(report.errors().is_empty());
    assert!(text.contains("FAIL: test_recipe_is_loaded\n"));
}

#[test]
fn yaml_recipe_runs_the_munki_rules() {
    let (report, _) = run_fixture("Firefox.munki.recipe.yaml");
    assert_eq!(report.entries.len(), 15);
    assert_eq!(report.status(), RunStatus::Ok);
}

#[test]
fn glyph_line_reconciles_with_counts() {
    let (report, text) = run_fixture("Production.munki.recipe");
    let glyphs = text.lines().nth(1).expect("progress line");
    let counts = report.counts();

    assert_eq!(glyphs.chars().count(), counts.total());
    assert_eq!(glyphs.matches('.').count(), counts.passes);
    assert_eq!(glyphs.matches('F').count(), counts.fails);
    assert_eq!(glyphs.matches('W').count(), counts.warns);
    assert_eq!(glyphs.matches('E').count(), counts.errors);
    assert!(text.contains(&format!("Ran {} tests in ", counts.total())));
}

#[test]
fn blank_yaml_attribution_fields_fail() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("Foo.pkg.recipe.yaml");
    fs::write(
        &path,
        "Attribution:\n  Copyright:\n  Author: {Name: Jane, Email: jane@example.com, Github: []}\n",
    )
    .expect("write recipe");

    let report = RecipeVariant::from_path(&path)
        .tester(Recipe::load(&path))
        .evaluate();
    let failed: Vec<_> = report.fails().iter().map(|entry| entry.name.as_str()).collect();
    assert_eq!(
        failed,
        vec![
            "test_attribution_copyright_not_blank",
            "test_attribution_author_github_not_blank",
        ]
    );
    let copyright = report
        .entry("test_attribution_copyright_not_blank")
        .expect("copyright entry");
    assert!(copyright.message.contains("does not match expected value [^()]"));
}

#[test]
fn complete_download_recipe_is_ok() {
    let (report, text) = run_fixture("Firefox.download.recipe");

    assert_eq!(report.entries.len(), 7);
    assert_eq!(report.status(), RunStatus::Ok);
    let mut lines = text.lines();
    lines.next();
    assert_eq!(lines.next(), Some("......."));
    assert!(text.ends_with("\n\nOK\n"));
}
