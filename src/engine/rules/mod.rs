pub mod base;
pub mod download;
pub mod munki;

use std::fmt;
use std::path::Path;

use crate::domain::key_path::KeyPath;
use crate::domain::recipe::{self, Recipe};
use crate::domain::report::Severity;
use crate::engine::r#assert::{Expected, assert_dict_contains};
use crate::engine::harness::{Check, CheckResult, Harness, Subject};

/// Harness bound to one recipe.
pub type RecipeTester = Harness<Recipe>;

/// Check name paired with the rule it runs.
pub type RecipeCheck = (&'static str, fn(&Recipe) -> CheckResult);

impl Subject for Recipe {
    fn name(&self) -> String {
        self.path().display().to_string()
    }

    fn heading(&self) -> String {
        format!("Testing recipe file {}:", self.name())
    }
}

/// Rule set applied to a recipe, chosen from its secondary extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecipeVariant {
    Generic,
    Download,
    Munki,
}

impl RecipeVariant {
    pub fn from_path(path: &Path) -> Self {
        match recipe::recipe_type(path).as_str() {
            munki::RECIPE_TYPE => Self::Munki,
            download::RECIPE_TYPE => Self::Download,
            _ => Self::Generic,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Generic => "generic",
            Self::Download => "download",
            Self::Munki => "munki",
        }
    }

    /// Base checks followed by the checks this variant adds.
    pub fn checks(self) -> Vec<Check<Recipe>> {
        let extension: &[RecipeCheck] = match self {
            Self::Generic => &[],
            Self::Download => download::CHECKS,
            Self::Munki => munki::CHECKS,
        };
        base::CHECKS
            .iter()
            .chain(extension)
            .map(|&(name, run)| Check::new(name, run))
            .collect()
    }

    pub fn tester(self, recipe: Recipe) -> RecipeTester {
        Harness::new(recipe, self.checks())
    }
}

impl fmt::Display for RecipeVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

fn require_not_blank<const N: usize>(recipe: &Recipe, keys: [&str; N]) -> CheckResult {
    assert_dict_contains(
        recipe.contents(),
        &KeyPath::from(keys),
        Some(&Expected::not_blank()),
        Severity::Fail,
    )
}

fn require_value<const N: usize>(
    recipe: &Recipe,
    keys: [&str; N],
    expected: Expected,
    severity: Severity,
) -> CheckResult {
    assert_dict_contains(
        recipe.contents(),
        &KeyPath::from(keys),
        Some(&expected),
        severity,
    )
}
