//! Parse issues, the per-call accumulator and result structures
//!
//! This module provides the error and warning records surfaced to the upload
//! UI, the context that collects them during one parse call, and the final
//! result with its summary statistics.

use crate::app::models::Vehicle;
use crate::constants::{FILE_FIELD, FILE_ROW};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

/// A problem tied to a row and column of the import file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParseIssue {
    /// 1-based row among non-blank lines (header = 1, file-level = 0)
    pub row: usize,

    /// Localized column name, or `file` / `general`
    pub field: String,

    pub message: String,

    /// Offending raw value, when there is one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
}

impl ParseIssue {
    pub fn new(
        row: usize,
        field: impl Into<String>,
        message: impl Into<String>,
        value: Option<String>,
    ) -> Self {
        Self {
            row,
            field: field.into(),
            message: message.into(),
            value,
        }
    }
}

/// Blocks the row (or file) it belongs to
pub type ParseError = ParseIssue;

/// Recorded, but the row still produces a vehicle
pub type ParseWarning = ParseIssue;

/// Accumulator for one parse call
///
/// Created fresh by every call to the parser and threaded by reference
/// through header and row processing.
#[derive(Debug, Default)]
pub struct ParseContext {
    errors: Vec<ParseError>,
    warnings: Vec<ParseWarning>,
}

impl ParseContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn error(
        &mut self,
        row: usize,
        field: impl Into<String>,
        message: impl Into<String>,
        value: Option<String>,
    ) {
        self.errors.push(ParseIssue::new(row, field, message, value));
    }

    pub fn warning(
        &mut self,
        row: usize,
        field: impl Into<String>,
        message: impl Into<String>,
        value: Option<String>,
    ) {
        self.warnings
            .push(ParseIssue::new(row, field, message, value));
    }

    pub fn error_count(&self) -> usize {
        self.errors.len()
    }

    pub fn errors(&self) -> &[ParseError] {
        &self.errors
    }

    pub fn warnings(&self) -> &[ParseWarning] {
        &self.warnings
    }

    /// Finish the call, deriving `success` from the collected errors
    pub fn into_result(self, vehicles: Vec<Vehicle>, total_rows: usize) -> ParseResult {
        let stats = ParseStats::compute(total_rows, vehicles.len(), &self.errors, &self.warnings);

        ParseResult {
            success: self.errors.is_empty(),
            vehicles,
            errors: self.errors,
            warnings: self.warnings,
            stats,
        }
    }
}

/// Outcome of parsing one import file
///
/// `stats` is not part of the serialized form; deserializing rebuilds it from
/// the vehicles and issues.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "SerializedParseResult")]
pub struct ParseResult {
    /// True exactly when `errors` is empty
    pub success: bool,

    /// One vehicle per data row that produced no errors
    pub vehicles: Vec<Vehicle>,

    pub errors: Vec<ParseError>,

    pub warnings: Vec<ParseWarning>,

    #[serde(skip)]
    stats: ParseStats,
}

impl ParseResult {
    /// Result for a whole-file failure: a single `file` error and nothing else
    pub fn file_failure(message: impl Into<String>) -> Self {
        let errors = vec![ParseIssue::new(FILE_ROW, FILE_FIELD, message, None)];
        let stats = ParseStats::compute(0, 0, &errors, &[]);

        Self {
            success: false,
            vehicles: Vec::new(),
            errors,
            warnings: Vec::new(),
            stats,
        }
    }

    /// Summary statistics for this result
    pub fn stats(&self) -> &ParseStats {
        &self.stats
    }

    /// Errors and warnings grouped by row, in row order
    pub fn issues_by_row(&self) -> BTreeMap<usize, RowIssues<'_>> {
        let mut grouped: BTreeMap<usize, RowIssues<'_>> = BTreeMap::new();

        for error in &self.errors {
            grouped.entry(error.row).or_default().errors.push(error);
        }
        for warning in &self.warnings {
            grouped.entry(warning.row).or_default().warnings.push(warning);
        }

        grouped
    }

    /// Errors reported against a given column
    pub fn errors_for_field<'a>(&'a self, field: &'a str) -> impl Iterator<Item = &'a ParseError> {
        self.errors.iter().filter(move |e| e.field == field)
    }

    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }
}

#[derive(Deserialize)]
struct SerializedParseResult {
    success: bool,
    vehicles: Vec<Vehicle>,
    errors: Vec<ParseError>,
    warnings: Vec<ParseWarning>,
}

impl From<SerializedParseResult> for ParseResult {
    fn from(raw: SerializedParseResult) -> Self {
        // Every data row yields either a vehicle or at least one error on its row
        let rows_rejected = ParseStats::compute(0, 0, &raw.errors, &[]).rows_rejected;
        let total_rows = raw.vehicles.len() + rows_rejected;
        let stats = ParseStats::compute(total_rows, raw.vehicles.len(), &raw.errors, &raw.warnings);

        Self {
            success: raw.success,
            vehicles: raw.vehicles,
            errors: raw.errors,
            warnings: raw.warnings,
            stats,
        }
    }
}

/// Issues attached to one row
#[derive(Debug, Default, PartialEq)]
pub struct RowIssues<'a> {
    pub errors: Vec<&'a ParseError>,
    pub warnings: Vec<&'a ParseWarning>,
}

/// Summary statistics for one parse call
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ParseStats {
    /// Number of data rows encountered (header excluded)
    pub total_rows: usize,

    /// Number of vehicles produced
    pub vehicles_parsed: usize,

    /// Number of data rows with at least one error
    pub rows_rejected: usize,

    /// Number of data rows with at least one warning
    pub rows_with_warnings: usize,
}

impl ParseStats {
    fn compute(
        total_rows: usize,
        vehicles_parsed: usize,
        errors: &[ParseError],
        warnings: &[ParseWarning],
    ) -> Self {
        // Data rows start at 2; header and file-level issues are not row rejections
        let distinct_data_rows = |issues: &[ParseIssue]| {
            issues
                .iter()
                .map(|issue| issue.row)
                .filter(|&row| row > 1)
                .collect::<BTreeSet<_>>()
                .len()
        };

        Self {
            total_rows,
            vehicles_parsed,
            rows_rejected: distinct_data_rows(errors),
            rows_with_warnings: distinct_data_rows(warnings),
        }
    }

    /// Calculate success rate as a percentage of data rows
    pub fn success_rate(&self) -> f64 {
        if self.total_rows == 0 {
            0.0
        } else {
            (self.vehicles_parsed as f64 / self.total_rows as f64) * 100.0
        }
    }

    /// Check if every data row produced a vehicle
    pub fn is_complete(&self) -> bool {
        self.total_rows > 0 && self.vehicles_parsed == self.total_rows
    }
}
