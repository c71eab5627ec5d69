mod fixtures;
mod logging;
mod preview;

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Args, Parser, Subcommand, ValueEnum};
use fieldseed_core::ValueCategory;
use fieldseed_plan::{PlanError, ValidatedPlan, ValidationReport, load_plan, plan_json_schema};
use fieldseed_populate::{FieldPopulator, PopulateError, PopulationPolicies};
use thiserror::Error;

use fixtures::{Customer, Order};
use logging::init_logging;
use preview::preview;

#[derive(Debug, Error)]
enum CliError {
    #[error("plan error: {0}")]
    Plan(#[from] PlanError),
    #[error("population error: {0}")]
    Populate(#[from] PopulateError),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("logging error: {0}")]
    Logging(String),
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

#[derive(Parser, Debug)]
#[command(name = "fieldseed", version, about = "Deterministic field population")]
struct Cli {
    /// Emit logs as JSON lines.
    #[arg(long, global = true, default_value_t = false)]
    log_json: bool,
    /// Append logs to this file instead of stderr.
    #[arg(long, global = true, value_name = "PATH")]
    log_file: Option<PathBuf>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Populate a sample fixture and print every field.
    Preview(PreviewArgs),
    /// List the value categories in dispatch order.
    Categories,
    /// Print the plan JSON Schema.
    Schema,
    /// Validate a plan file.
    Validate(ValidateArgs),
}

#[derive(Args, Debug)]
struct PreviewArgs {
    /// Seed for the population call. Defaults to the plan's seed.
    #[arg(long)]
    seed: Option<i64>,
    /// Plan file (.toml or .json).
    #[arg(long)]
    plan: Option<PathBuf>,
    #[arg(long, value_enum, default_value_t = Fixture::Order)]
    fixture: Fixture,
    #[arg(long, value_enum, default_value_t = Format::Text)]
    format: Format,
}

#[derive(Args, Debug)]
struct ValidateArgs {
    /// Plan file (.toml or .json).
    #[arg(long)]
    plan: PathBuf,
    #[arg(long, value_enum, default_value_t = Format::Text)]
    format: Format,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum Fixture {
    Order,
    Customer,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum Format {
    Text,
    Json,
}

fn main() -> Result<ExitCode, CliError> {
    let cli = Cli::parse();
    init_logging(cli.log_json, cli.log_file.as_deref())?;

    match cli.command {
        Command::Preview(args) => run_preview(args),
        Command::Categories => run_categories(),
        Command::Schema => run_schema(),
        Command::Validate(args) => run_validate(args),
    }
}

fn run_preview(args: PreviewArgs) -> Result<ExitCode, CliError> {
    let plan = args.plan.as_deref().map(load_checked_plan).transpose()?;
    let seed = args
        .seed
        .or_else(|| plan.as_ref().and_then(|validated| validated.plan.seed))
        .ok_or_else(|| {
            CliError::InvalidConfig("a seed is required: pass --seed or set it in the plan".into())
        })?;
    let policies = plan
        .as_ref()
        .map(|validated| PopulationPolicies::from_plan(&validated.plan))
        .unwrap_or_default();
    let populator = FieldPopulator::new(policies);

    tracing::info!(event = "preview_started", fixture = ?args.fixture, seed);
    let preview = match args.fixture {
        Fixture::Order => preview::<Order>("order", seed, &populator)?,
        Fixture::Customer => preview::<Customer>("customer", seed, &populator)?,
    };
    tracing::info!(
        event = "preview_finished",
        fields = preview.fields.len(),
        seed
    );

    match args.format {
        Format::Text => print!("{}", preview.render_text()),
        Format::Json => println!("{}", serde_json::to_string_pretty(&preview)?),
    }
    Ok(ExitCode::SUCCESS)
}

fn run_categories() -> Result<ExitCode, CliError> {
    for (idx, category) in ValueCategory::DISPATCH_ORDER.iter().enumerate() {
        let mut notes = Vec::new();
        if category.is_ambiguous_temporal() {
            notes.push("temporal resolver");
        }
        if category.uses_length_or_scale() {
            notes.push("length or scale");
        }
        if notes.is_empty() {
            println!("{idx:>2}  {category}");
        } else {
            println!("{idx:>2}  {category}  ({})", notes.join(", "));
        }
    }
    Ok(ExitCode::SUCCESS)
}

fn run_schema() -> Result<ExitCode, CliError> {
    println!("{}", serde_json::to_string_pretty(&plan_json_schema())?);
    Ok(ExitCode::SUCCESS)
}

fn run_validate(args: ValidateArgs) -> Result<ExitCode, CliError> {
    let report = match load_plan(&args.plan) {
        Ok(validated) => ValidationReport {
            errors: Vec::new(),
            warnings: validated.warnings,
        },
        Err(PlanError::Invalid(report)) => report,
        Err(err) => return Err(err.into()),
    };
    tracing::info!(
        event = "plan_validated",
        path = %args.plan.display(),
        errors = report.errors.len(),
        warnings = report.warnings.len()
    );

    match args.format {
        Format::Json => println!("{}", serde_json::to_string_pretty(&report)?),
        Format::Text => {
            for issue in report.issues() {
                println!("{issue}");
                if let Some(hint) = &issue.hint {
                    println!("  hint: {hint}");
                }
            }
            if report.is_ok() {
                println!("plan is valid");
            }
        }
    }

    Ok(if report.is_ok() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

/// Loads a plan and logs its warnings; errors abort the command.
fn load_checked_plan(path: &Path) -> Result<ValidatedPlan, CliError> {
    let validated = load_plan(path)?;
    for warning in &validated.warnings {
        tracing::warn!(
            event = "plan_warning",
            code = %warning.code,
            path = %warning.path,
            message = %warning.message
        );
    }
    Ok(validated)
}
