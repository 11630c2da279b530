use crate::domain::recipe::Recipe;
use crate::domain::report::Severity;
use crate::engine::r#assert::assert_true;
use crate::engine::harness::CheckResult;

use super::RecipeCheck;

pub const RECIPE_TYPE: &str = ".download";

pub const CHECKS: &[RecipeCheck] = &[(
    "test_recipe_has_download_extension",
    recipe_has_download_extension,
)];

fn recipe_has_download_extension(recipe: &Recipe) -> CheckResult {
    Ok(assert_true(
        &(recipe.recipe_type() == RECIPE_TYPE),
        Severity::Fail,
    ))
}
