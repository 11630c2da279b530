use std::io::Write;
use std::path::PathBuf;

use serde_json::{Value, json};
use thiserror::Error;
use tracing::info;

use crate::domain::recipe::Recipe;
use crate::domain::report::RunReport;
use crate::engine::rules::RecipeVariant;

/// How each recipe's report is written.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ReportFormat {
    /// Progress glyphs followed by details and a status line.
    #[default]
    Text,
    /// One JSON object per recipe, one per line.
    Json,
}

/// Input arguments for check command execution API.
#[derive(Debug, Clone)]
pub struct CheckCommandArgs {
    pub recipes: Vec<PathBuf>,
    /// Forces one rule set for every recipe instead of picking it per file.
    pub variant: Option<RecipeVariant>,
    pub report: ReportFormat,
}

/// Outcome of checking every requested recipe.
#[derive(Debug, Clone, PartialEq)]
pub struct CheckCommandResponse {
    pub exit_code: i32,
    /// Recipes with at least one `fail` result.
    pub failed_recipes: usize,
    pub reports: Vec<RunReport>,
}

#[derive(Debug, Error)]
pub enum CommandError {
    #[error("at least one recipe path is required")]
    NoRecipes,

    #[error("failed to write report: {0}")]
    WriteReport(#[from] std::io::Error),

    #[error("failed to serialize report: {0}")]
    SerializeReport(#[from] serde_json::Error),
}

/// Checks each recipe in turn, writing its report to `out`.
///
/// The exit code is 1 when any recipe has a failing check and 0 otherwise.
/// Warnings and errors alone leave it at 0.
pub fn run<W: Write>(
    args: &CheckCommandArgs,
    out: &mut W,
) -> Result<CheckCommandResponse, CommandError> {
    if args.recipes.is_empty() {
        return Err(CommandError::NoRecipes);
    }

    let mut failed_recipes = 0;
    let mut reports = Vec::with_capacity(args.recipes.len());
    for path in &args.recipes {
        let variant = args
            .variant
            .unwrap_or_else(|| RecipeVariant::from_path(path));
        info!(recipe = %path.display(), %variant, "checking recipe");
        let tester = variant.tester(Recipe::load(path));

        let report = match args.report {
            ReportFormat::Text => tester.run(&mut *out)?,
            ReportFormat::Json => {
                let report = tester.evaluate();
                serde_json::to_writer(&mut *out, &report_payload(variant, &report))?;
                writeln!(out)?;
                report
            }
        };
        if report.has_failures() {
            failed_recipes += 1;
        }
        reports.push(report);
    }

    Ok(CheckCommandResponse {
        exit_code: if failed_recipes > 0 { 1 } else { 0 },
        failed_recipes,
        reports,
    })
}

/// Machine-readable form of one recipe report.
pub fn report_payload(variant: RecipeVariant, report: &RunReport) -> Value {
    json!({
        "recipe": report.subject,
        "variant": variant.as_str(),
        "status": report.status().to_string(),
        "counts": report.counts(),
        "elapsed_seconds": report.elapsed_seconds,
        "results": report.entries,
    })
}
