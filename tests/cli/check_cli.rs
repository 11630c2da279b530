use std::path::{Path, PathBuf};

use predicates::prelude::predicate;
use serde_json::Value;

fn fixture(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures")
        .join(name)
}

#[test]
fn help_is_available() {
    assert_cmd::cargo::cargo_bin_cmd!("recipe-tester")
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--variant"))
        .stdout(predicate::str::contains("--report"));
}

#[test]
fn version_is_available() {
    assert_cmd::cargo::cargo_bin_cmd!("recipe-tester")
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn missing_recipe_argument_is_usage_error() {
    let output = assert_cmd::cargo::cargo_bin_cmd!("recipe-tester")
        .output()
        .expect("run binary");
    assert_eq!(output.status.code(), Some(3));

    let stderr = String::from_utf8(output.stderr).expect("utf8 stderr");
    let payload: Value = serde_json::from_str(stderr.trim()).expect("stderr json");
    assert_eq!(payload["error"], "input_usage_error");
    assert_eq!(payload["code"], 3);
}

#[test]
fn valid_munki_recipe_exits_zero() {
    assert_cmd::cargo::cargo_bin_cmd!("recipe-tester")
        .arg(fixture("Firefox.munki.recipe"))
        .assert()
        .code(0)
        .stdout(predicate::str::contains("Testing recipe file "))
        .stdout(predicate::str::contains("Ran 15 tests in "))
        .stdout(predicate::str::ends_with("\nOK\n"));
}

#[test]
fn valid_download_recipe_exits_zero() {
    assert_cmd::cargo::cargo_bin_cmd!("recipe-tester")
        .arg(fixture("Firefox.download.recipe"))
        .assert()
        .code(0)
        .stdout(predicate::str::contains("Ran 7 tests in "))
        .stdout(predicate::str::ends_with("\nOK\n"));
}

#[test]
fn warnings_do_not_fail_the_run() {
    assert_cmd::cargo::cargo_bin_cmd!("recipe-tester")
        .arg(fixture("Production.munki.recipe"))
        .assert()
        .code(0)
        .stdout(predicate::str::contains(
            "WARN: test_input_pkginfo_catalogs_has_expected_value",
        ))
        .stdout(predicate::str::ends_with("OK (warnings=1)\n"));
}

#[test]
fn any_failing_recipe_exits_one() {
    assert_cmd::cargo::cargo_bin_cmd!("recipe-tester")
        .arg(fixture("Firefox.munki.recipe"))
        .arg(fixture("NoAttribution.pkg.recipe"))
        .assert()
        .code(1)
        .stdout(predicate::str::contains("\nOK\n"))
        .stdout(predicate::str::contains(
            "FAIL: test_attribution_copyright_not_blank",
        ))
        .stdout(predicate::str::ends_with("FAILED (failures=4)\n"));
}

#[test]
fn unreadable_recipe_is_reported_not_raised() {
    assert_cmd::cargo::cargo_bin_cmd!("recipe-tester")
        .arg(fixture("DoesNotExist.download.recipe"))
        .assert()
        .code(1)
        .stdout(predicate::str::contains("FAIL: test_recipe_is_loaded"))
        .stdout(predicate::str::contains("recipe could not be loaded: io error"));
}

#[test]
fn forced_variant_applies_download_rules() {
    assert_cmd::cargo::cargo_bin_cmd!("recipe-tester")
        .args(["--variant", "download"])
        .arg(fixture("Firefox.munki.recipe"))
        .assert()
        .code(1)
        .stdout(predicate::str::contains(
            "FAIL: test_recipe_has_download_extension",
        ))
        .stdout(predicate::str::contains("Ran 7 tests in "));
}

#[test]
fn json_report_lists_every_result() {
    let output = assert_cmd::cargo::cargo_bin_cmd!("recipe-tester")
        .args(["--report", "json"])
        .arg(fixture("Production.munki.recipe"))
        .output()
        .expect("run binary");
    assert_eq!(output.status.code(), Some(0));

    let stdout = String::from_utf8(output.stdout).expect("utf8 stdout");
    let payload: Value = serde_json::from_str(stdout.trim()).expect("stdout json");
    assert_eq!(payload["variant"], "munki");
    assert_eq!(payload["status"], "OK (warnings=1)");
    assert_eq!(payload["counts"]["warns"], 1);
    assert_eq!(payload["results"].as_array().map(Vec::len), Some(15));
}

#[test]
fn unknown_variant_is_rejected() {
    assert_cmd::cargo::cargo_bin_cmd!("recipe-tester")
        .args(["--variant", "pkg"])
        .arg(fixture("Firefox.munki.recipe"))
        .assert()
        .code(3)
        .stdout(predicate::str::is_empty());
}
