//! Core vehicle CSV parser implementation
//!
//! This module provides the top-level orchestration: tokenizing the document,
//! validating the header, running every data row through the record parser
//! and aggregating the outcome into a single [`ParseResult`].

use std::path::Path;
use tracing::{debug, info, warn};

use super::csv_row::CsvRow;
use super::header::CsvHeader;
use super::record_parser::parse_vehicle_record;
use super::stats::{ParseContext, ParseResult};
use super::tokenizer::{parse_line, split_lines};
use crate::app::models::Vehicle;
use crate::config::ImportConfig;
use crate::constants::{HEADER_ROW, messages};
use crate::error::{ImportError, Result};

/// Vehicle CSV parser for bulk marketplace imports
///
/// Parsing is a pure function of the input text and the configuration: each
/// call builds its own [`ParseContext`], so one parser can be shared freely
/// between callers and threads.
#[derive(Debug, Clone, Default)]
pub struct VehicleCsvParser {
    config: ImportConfig,
}

impl VehicleCsvParser {
    pub fn new(config: ImportConfig) -> Self {
        Self { config }
    }

    /// Parse a complete CSV document
    ///
    /// Never fails: every problem, including whole-file ones, is reported in
    /// the returned result.
    pub fn parse(&self, content: &str) -> ParseResult {
        let lines = split_lines(content);
        if lines.is_empty() {
            warn!("Import file is empty");
            return ParseResult::file_failure(messages::EMPTY_FILE);
        }

        let mut ctx = ParseContext::new();
        let total_rows = lines.len() - 1;

        match self.parse_lines(&lines, &mut ctx) {
            Ok(vehicles) => {
                let result = ctx.into_result(vehicles, total_rows);
                info!(
                    "Parsed {} vehicles from {} rows ({} errors, {} warnings)",
                    result.vehicles.len(),
                    total_rows,
                    result.errors.len(),
                    result.warnings.len()
                );
                result
            }
            Err(e) => {
                warn!("Import file rejected: {}", e);
                ParseResult::file_failure(e.to_string())
            }
        }
    }

    /// Read and parse a CSV file
    pub async fn parse_file(&self, file_path: &Path) -> Result<ParseResult> {
        info!("Parsing vehicle import file: {}", file_path.display());

        if !file_path.exists() {
            return Err(ImportError::file_not_found(file_path));
        }

        let content = tokio::fs::read_to_string(file_path).await.map_err(|e| {
            ImportError::io(format!("Failed to read file {}", file_path.display()), e)
        })?;

        Ok(self.parse(&content))
    }

    /// Validate the header, then map every data row independently
    fn parse_lines(&self, lines: &[&str], ctx: &mut ParseContext) -> Result<Vec<Vehicle>> {
        let (header_line, data_lines) = match lines.split_first() {
            Some(split) => split,
            None => return Ok(Vec::new()),
        };

        if let Some(limit) = self.config.max_rows {
            if data_lines.len() > limit {
                return Err(ImportError::too_many_rows(data_lines.len(), limit));
            }
        }

        let header = CsvHeader::parse(header_line);
        header.validate(ctx);
        debug!(
            "Header has {} columns, {} header errors",
            header.columns.len(),
            ctx.error_count()
        );

        // Header problems do not stop row processing
        let mut vehicles = Vec::with_capacity(data_lines.len());
        for (index, line) in data_lines.iter().enumerate() {
            let row_number = HEADER_ROW + index + 1;
            let row = CsvRow::from_fields(&header.columns, parse_line(line));

            if let Some(vehicle) = parse_vehicle_record(&row, row_number, &self.config, ctx) {
                vehicles.push(vehicle);
            }
        }

        Ok(vehicles)
    }
}

/// Parse a CSV document with the default configuration
pub fn parse_vehicle_csv(content: &str) -> ParseResult {
    VehicleCsvParser::default().parse(content)
}
