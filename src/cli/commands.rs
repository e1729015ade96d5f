//! Command implementations for the vehicle CSV importer CLI
//!
//! The validate command parses each input file with the marketplace rules
//! and prints a report per file.

use crate::app::services::vehicle_csv_parser::{ParseResult, VehicleCsvParser};
use crate::cli::args::{Args, Commands, OutputFormat, ValidateArgs};
use crate::config::ImportConfig;
use crate::{ImportError, Result};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use serde::Serialize;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};
use tracing::{debug, info, warn};

/// Totals across every file in one validate run
#[derive(Debug, Clone, Default)]
pub struct ValidationSummary {
    pub files_checked: usize,
    /// Files that could not be read or parsed with `success == false`
    pub files_failed: usize,
    pub vehicles: usize,
    pub errors: usize,
    pub warnings: usize,
    pub processing_time: Duration,
}

impl ValidationSummary {
    pub fn all_passed(&self) -> bool {
        self.files_failed == 0
    }

    fn record(&mut self, outcome: &FileOutcome) {
        self.files_checked += 1;
        match &outcome.result {
            Ok(result) => {
                if !result.success {
                    self.files_failed += 1;
                }
                self.vehicles += result.vehicles.len();
                self.errors += result.errors.len();
                self.warnings += result.warnings.len();
            }
            Err(_) => self.files_failed += 1,
        }
    }
}

/// Parse outcome for one input file
#[derive(Debug)]
pub struct FileOutcome {
    pub path: PathBuf,
    pub result: Result<ParseResult>,
}

#[derive(Serialize)]
struct JsonReport<'a> {
    file: String,
    #[serde(flatten)]
    result: &'a ParseResult,
}

/// Run the command selected on the command line
pub async fn run(args: Args) -> Result<ValidationSummary> {
    match args.command {
        Some(Commands::Validate(validate_args)) => run_validate(validate_args).await,
        None => Err(ImportError::configuration("No command given")),
    }
}

/// Validate command runner
pub async fn run_validate(args: ValidateArgs) -> Result<ValidationSummary> {
    let start_time = Instant::now();

    setup_logging(&args)?;
    debug!("Validate arguments: {:?}", args);

    let config = load_configuration(&args)?;
    let files = args.resolve_files()?;
    info!("Validating {} file(s)", files.len());

    let parser = VehicleCsvParser::new(config);
    let outcomes = parse_files(&parser, &files, args.show_progress()).await;

    let mut summary = ValidationSummary::default();
    for outcome in &outcomes {
        summary.record(outcome);
        match args.output_format {
            OutputFormat::Human => print_human_report(outcome, args.quiet),
            OutputFormat::Json => print_json_report(outcome)?,
        }
    }
    summary.processing_time = start_time.elapsed();

    if args.output_format == OutputFormat::Human {
        print_summary(&summary);
    }

    info!(
        "Validation completed in {:.2}s: {} files, {} failed",
        summary.processing_time.as_secs_f64(),
        summary.files_checked,
        summary.files_failed
    );

    Ok(summary)
}

/// Set up structured logging for the validate command
pub fn setup_logging(args: &ValidateArgs) -> Result<()> {
    use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    let log_level = args.get_log_level();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("vehicle_csv_import={}", log_level)));

    let result = if args.quiet {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_level(true)
                    .with_writer(std::io::stderr)
                    .compact(),
            )
            .try_init()
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_level(true)
                    .with_timer(fmt::time::uptime())
                    .with_writer(std::io::stderr),
            )
            .try_init()
    };

    result.map_err(|e| ImportError::configuration(format!("Failed to initialize logging: {}", e)))?;

    debug!("Logging initialized at level: {}", log_level);
    Ok(())
}

/// Load configuration using layered approach (file -> env -> args)
pub fn load_configuration(args: &ValidateArgs) -> Result<ImportConfig> {
    build_configuration(args, |key| std::env::var(key).ok())
}

/// Layer file, environment and CLI settings, validating only the final values
fn build_configuration<F>(args: &ValidateArgs, env_lookup: F) -> Result<ImportConfig>
where
    F: Fn(&str) -> Option<String>,
{
    let mut config = ImportConfig::load_layered_with(args.config_file.as_deref(), env_lookup)?;

    args.apply_overrides(&mut config);
    config.validate()?;

    debug!("Import configuration: {:?}", config);
    Ok(config)
}

async fn parse_files(
    parser: &VehicleCsvParser,
    files: &[PathBuf],
    show_progress: bool,
) -> Vec<FileOutcome> {
    let progress_bar = if show_progress && files.len() > 1 {
        let pb = ProgressBar::new(files.len() as u64);
        if let Ok(style) = ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} {msg}")
        {
            pb.set_style(style.progress_chars("#>-"));
        }
        Some(pb)
    } else {
        None
    };

    let mut outcomes = Vec::with_capacity(files.len());
    for path in files {
        if let Some(pb) = &progress_bar {
            pb.set_message(display_name(path));
        }

        let result = parser.parse_file(path).await;
        if let Err(e) = &result {
            warn!("Could not validate {}: {}", path.display(), e);
        }
        outcomes.push(FileOutcome {
            path: path.clone(),
            result,
        });

        if let Some(pb) = &progress_bar {
            pb.inc(1);
        }
    }

    if let Some(pb) = &progress_bar {
        pb.finish_and_clear();
    }

    outcomes
}

fn print_human_report(outcome: &FileOutcome, quiet: bool) {
    let name = outcome.path.display();

    let result = match &outcome.result {
        Ok(result) => result,
        Err(e) => {
            println!("{} {}: {}", "✗".red().bold(), name, e);
            return;
        }
    };

    let status = if result.success {
        "✓".green().bold()
    } else {
        "✗".red().bold()
    };
    println!(
        "{} {}: {} vehicles, {} errors, {} warnings",
        status,
        name,
        result.vehicles.len(),
        result.errors.len(),
        result.warnings.len()
    );

    for (row, issues) in result.issues_by_row() {
        if quiet && issues.errors.is_empty() {
            continue;
        }

        let label = if row == 0 {
            "File".to_string()
        } else {
            format!("Row {}", row)
        };
        println!("  {}", label.bold());

        for error in &issues.errors {
            println!("    {} {}: {}", "error".red(), error.field, error.message);
        }
        if !quiet {
            for warning in &issues.warnings {
                println!(
                    "    {} {}: {}",
                    "warning".yellow(),
                    warning.field,
                    warning.message
                );
            }
        }
    }
}

fn print_json_report(outcome: &FileOutcome) -> Result<()> {
    let file = outcome.path.display().to_string();

    let json = match &outcome.result {
        Ok(result) => serde_json::to_string_pretty(&JsonReport { file, result })?,
        Err(e) => serde_json::to_string_pretty(&serde_json::json!({
            "file": file,
            "success": false,
            "failure": e.to_string(),
        }))?,
    };

    println!("{}", json);
    Ok(())
}

fn print_summary(summary: &ValidationSummary) {
    println!();
    println!(
        "{} files checked in {:.2}s: {} passed, {} failed ({} vehicles, {} errors, {} warnings)",
        summary.files_checked,
        summary.processing_time.as_secs_f64(),
        (summary.files_checked - summary.files_failed).to_string().green(),
        summary.files_failed.to_string().red(),
        summary.vehicles,
        summary.errors,
        summary.warnings
    );
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
