//! Command-line argument definitions for the vehicle CSV importer
//!
//! This module defines the CLI interface using the clap derive API.

use crate::config::ImportConfig;
use crate::{ImportError, Result};
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use tracing::warn;

/// CLI arguments for the vehicle CSV importer
///
/// Checks vendor inventory files against the marketplace import layout
/// before they are uploaded.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "vehicle-csv-import",
    version,
    about = "Validate EV marketplace bulk vehicle CSV files",
    long_about = "Parses vendor inventory CSV files with the same rules the marketplace \
                  upload uses and reports every error and warning by row and column, so \
                  files can be fixed before they are uploaded."
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands
#[derive(Debug, Clone, Subcommand)]
pub enum Commands {
    /// Parse one or more CSV files and report errors and warnings
    Validate(ValidateArgs),
}

/// Output format for reports
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Colored, grouped by row
    Human,
    /// Full parse result as JSON
    Json,
}

/// Arguments for the validate command
#[derive(Debug, Clone, Parser)]
pub struct ValidateArgs {
    /// Files or glob patterns to validate (e.g. `inventario/*.csv`)
    #[arg(value_name = "PATTERN", required = true)]
    pub patterns: Vec<String>,

    #[arg(
        short = 'f',
        long = "format",
        value_enum,
        default_value = "human",
        help = "Report format"
    )]
    pub output_format: OutputFormat,

    /// JSON config file; defaults to the user config directory if present
    #[arg(short = 'c', long = "config", value_name = "FILE")]
    pub config_file: Option<PathBuf>,

    #[arg(long = "max-rows", value_name = "N", help = "Reject files with more data rows than this")]
    pub max_rows: Option<usize>,

    #[arg(long = "delivery-time", value_name = "TEXT", help = "Delivery time stamped on vehicles")]
    pub delivery_time: Option<String>,

    #[arg(
        long = "passenger-capacity",
        value_name = "N",
        help = "Passenger capacity stamped on vehicles"
    )]
    pub passenger_capacity: Option<u32>,

    /// Increase logging verbosity (-v debug, -vv trace)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Only print errors
    #[arg(short = 'q', long = "quiet", conflicts_with = "verbose")]
    pub quiet: bool,
}

impl ValidateArgs {
    /// Get log level from verbosity flags
    pub fn get_log_level(&self) -> &'static str {
        if self.quiet {
            return "error";
        }
        match self.verbose {
            0 => "info",
            1 => "debug",
            _ => "trace",
        }
    }

    pub fn show_progress(&self) -> bool {
        !self.quiet && self.output_format == OutputFormat::Human
    }

    /// Apply CLI overrides on top of a loaded configuration
    pub fn apply_overrides(&self, config: &mut ImportConfig) {
        if let Some(max_rows) = self.max_rows {
            config.max_rows = Some(max_rows);
        }
        if let Some(delivery_time) = &self.delivery_time {
            config.delivery_time = delivery_time.clone();
        }
        if let Some(capacity) = self.passenger_capacity {
            config.passenger_capacity = capacity;
        }
    }

    /// Expand glob patterns into a sorted, de-duplicated file list
    ///
    /// A pattern that matches no file is kept as a literal path so the
    /// missing input is reported alongside the others. Only malformed
    /// patterns are an error.
    pub fn resolve_files(&self) -> Result<Vec<PathBuf>> {
        let mut files = Vec::new();

        for pattern in &self.patterns {
            let matches = glob::glob(pattern)
                .map_err(|e| ImportError::invalid_pattern(pattern, e.to_string()))?;

            let mut matched_any = false;
            for entry in matches {
                let path = match entry {
                    Ok(path) if path.is_file() => path,
                    Ok(_) => continue,
                    Err(e) => {
                        warn!("Cannot read {}: {}", e.path().display(), e.error());
                        e.path().to_path_buf()
                    }
                };
                files.push(path);
                matched_any = true;
            }

            if !matched_any {
                warn!("No files match '{}'", pattern);
                files.push(PathBuf::from(pattern));
            }
        }

        files.sort();
        files.dedup();
        Ok(files)
    }
}
