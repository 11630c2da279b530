use std::io;
use std::path::PathBuf;
use std::process;

use clap::error::ErrorKind;
use clap::{Parser, ValueEnum};
use recipe_tester::cmd::check::{self, CheckCommandArgs, CommandError, ReportFormat};
use recipe_tester::engine::rules::RecipeVariant;
use recipe_tester::util::logging;
use serde::Serialize;
use serde_json::{Value, json};

#[derive(Debug, Parser)]
#[command(
    name = "recipe-tester",
    version,
    about = "Check AutoPkg recipes against required-field rules"
)]
struct Cli {
    /// Rule set to apply; `auto` picks it from each recipe's file name.
    #[arg(long, value_enum, default_value_t = CliVariant::Auto)]
    variant: CliVariant,

    /// Report format written to stdout.
    #[arg(long, value_enum, default_value_t = CliReportFormat::Text)]
    report: CliReportFormat,

    /// At least one AutoPkg recipe file.
    #[arg(required = true, num_args = 1..)]
    recipes: Vec<PathBuf>,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum CliVariant {
    Auto,
    Generic,
    Download,
    Munki,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum CliReportFormat {
    Text,
    Json,
}

impl From<CliVariant> for Option<RecipeVariant> {
    fn from(value: CliVariant) -> Self {
        match value {
            CliVariant::Auto => None,
            CliVariant::Generic => Some(RecipeVariant::Generic),
            CliVariant::Download => Some(RecipeVariant::Download),
            CliVariant::Munki => Some(RecipeVariant::Munki),
        }
    }
}

impl From<CliReportFormat> for ReportFormat {
    fn from(value: CliReportFormat) -> Self {
        match value {
            CliReportFormat::Text => Self::Text,
            CliReportFormat::Json => Self::Json,
        }
    }
}

#[derive(Serialize)]
struct CliError<'a> {
    error: &'a str,
    message: String,
    code: i32,
    details: Value,
}

fn main() {
    process::exit(run());
}

fn run() -> i32 {
    logging::init_tracing();
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(error) => return handle_parse_error(error),
    };

    let args = CheckCommandArgs {
        recipes: cli.recipes,
        variant: cli.variant.into(),
        report: cli.report.into(),
    };

    let stdout = io::stdout();
    let mut output = stdout.lock();
    match check::run(&args, &mut output) {
        Ok(response) => response.exit_code,
        Err(error) => {
            let (exit_code, error_kind) = map_command_error(&error);
            emit_error(
                error_kind,
                error.to_string(),
                json!({"command": "check"}),
                exit_code,
            );
            exit_code
        }
    }
}

fn handle_parse_error(error: clap::Error) -> i32 {
    match error.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
            print!("{error}");
            0
        }
        _ => {
            emit_error(
                "input_usage_error",
                error.to_string(),
                json!({"kind": "cli_parse_error"}),
                3,
            );
            3
        }
    }
}

fn map_command_error(error: &CommandError) -> (i32, &'static str) {
    match error {
        CommandError::NoRecipes => (3, "input_usage_error"),
        CommandError::WriteReport(_) | CommandError::SerializeReport(_) => (1, "internal_error"),
    }
}

fn emit_error(error: &'static str, message: String, details: Value, code: i32) {
    let payload = CliError {
        error,
        message,
        code,
        details,
    };
    match serde_json::to_string(&payload) {
        Ok(serialized) => eprintln!("{serialized}"),
        Err(_) => eprintln!(
            "{{\"error\":\"internal_error\",\"message\":\"failed to serialize error\",\"code\":1}}"
        ),
    }
}
