use serde_json::json;

use crate::domain::recipe::Recipe;
use crate::domain::report::Severity;
use crate::engine::r#assert::{Expected, assert_true};
use crate::engine::harness::CheckResult;

use super::{RecipeCheck, require_not_blank, require_value};

pub const RECIPE_TYPE: &str = ".munki";

/// Repository subdirectory every munki recipe must import into.
pub const REPO_SUBDIR_PATTERN: &str = r"^%NAME%$";

pub const EXPECTED_CATALOG: &str = "testing";

/// Checks munki import recipes add on top of the base rules.
///
/// The catalog and unattended-install checks are advisory and only warn.
pub const CHECKS: &[RecipeCheck] = &[
    ("test_recipe_has_munki_extension", recipe_has_munki_extension),
    ("test_input_pkginfo_category_not_blank", input_pkginfo_category_not_blank),
    ("test_input_pkginfo_description_not_blank", input_pkginfo_description_not_blank),
    ("test_input_pkginfo_developer_not_blank", input_pkginfo_developer_not_blank),
    ("test_input_pkginfo_name_not_blank", input_pkginfo_name_not_blank),
    ("test_input_pkginfo_display_name_not_blank", input_pkginfo_display_name_not_blank),
    (
        "test_input_munki_repo_subdir_has_expected_value",
        input_munki_repo_subdir_has_expected_value,
    ),
    (
        "test_input_pkginfo_catalogs_has_expected_value",
        input_pkginfo_catalogs_has_expected_value,
    ),
    (
        "test_input_pkginfo_unattended_install_has_expected_value",
        input_pkginfo_unattended_install_has_expected_value,
    ),
];

fn recipe_has_munki_extension(recipe: &Recipe) -> CheckResult {
    Ok(assert_true(
        &(recipe.recipe_type() == RECIPE_TYPE),
        Severity::Fail,
    ))
}

fn input_pkginfo_category_not_blank(recipe: &Recipe) -> CheckResult {
    require_not_blank(recipe, ["Input", "pkginfo", "category"])
}

fn input_pkginfo_description_not_blank(recipe: &Recipe) -> CheckResult {
    require_not_blank(recipe, ["Input", "pkginfo", "description"])
}

fn input_pkginfo_developer_not_blank(recipe: &Recipe) -> CheckResult {
    require_not_blank(recipe, ["Input", "pkginfo", "developer"])
}

fn input_pkginfo_name_not_blank(recipe: &Recipe) -> CheckResult {
    require_not_blank(recipe, ["Input", "pkginfo", "name"])
}

fn input_pkginfo_display_name_not_blank(recipe: &Recipe) -> CheckResult {
    require_not_blank(recipe, ["Input", "pkginfo", "display_name"])
}

fn input_munki_repo_subdir_has_expected_value(recipe: &Recipe) -> CheckResult {
    require_value(
        recipe,
        ["Input", "MUNKI_REPO_SUBDIR"],
        Expected::pattern(REPO_SUBDIR_PATTERN),
        Severity::Fail,
    )
}

fn input_pkginfo_catalogs_has_expected_value(recipe: &Recipe) -> CheckResult {
    require_value(
        recipe,
        ["Input", "pkginfo", "catalogs"],
        Expected::exact(json!([EXPECTED_CATALOG])),
        Severity::Warn,
    )
}

fn input_pkginfo_unattended_install_has_expected_value(recipe: &Recipe) -> CheckResult {
    require_value(
        recipe,
        ["Input", "pkginfo", "unattended_install"],
        Expected::exact(true),
        Severity::Warn,
    )
}
