use crate::domain::recipe::Recipe;
use crate::domain::report::{Severity, Verdict};
use crate::engine::r#assert::assert_true;
use crate::engine::harness::CheckResult;

use super::{RecipeCheck, require_not_blank};

pub const RECIPE_EXTENSION: &str = ".recipe";

/// Rules every recipe must satisfy, whatever its type.
pub const CHECKS: &[RecipeCheck] = &[
    ("test_filename_ends_with_recipe", filename_ends_with_recipe),
    ("test_recipe_is_loaded", recipe_is_loaded),
    ("test_attribution_copyright_not_blank", attribution_copyright_not_blank),
    ("test_attribution_author_name_not_blank", attribution_author_name_not_blank),
    ("test_attribution_author_email_not_blank", attribution_author_email_not_blank),
    ("test_attribution_author_github_not_blank", attribution_author_github_not_blank),
];

fn filename_ends_with_recipe(recipe: &Recipe) -> CheckResult {
    Ok(assert_true(
        &(recipe.extension() == RECIPE_EXTENSION),
        Severity::Fail,
    ))
}

fn recipe_is_loaded(recipe: &Recipe) -> CheckResult {
    if let Some(error) = recipe.load_error() {
        return Ok(Verdict::evaluate(
            false,
            Severity::Fail,
            format!("recipe could not be loaded: {error}"),
        ));
    }
    Ok(assert_true(recipe.contents(), Severity::Fail))
}

fn attribution_copyright_not_blank(recipe: &Recipe) -> CheckResult {
    require_not_blank(recipe, ["Attribution", "Copyright"])
}

fn attribution_author_name_not_blank(recipe: &Recipe) -> CheckResult {
    require_not_blank(recipe, ["Attribution", "Author", "Name"])
}

fn attribution_author_email_not_blank(recipe: &Recipe) -> CheckResult {
    require_not_blank(recipe, ["Attribution", "Author", "Email"])
}

fn attribution_author_github_not_blank(recipe: &Recipe) -> CheckResult {
    require_not_blank(recipe, ["Attribution", "Author", "Github"])
}
