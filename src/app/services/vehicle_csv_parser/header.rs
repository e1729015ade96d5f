//! Header row validation
//!
//! The first non-blank line names the columns. Missing required columns are
//! errors, unknown columns are warnings. Neither stops data rows from being
//! processed.

use super::stats::ParseContext;
use super::tokenizer::parse_line;
use crate::constants::{HEADER_ROW, columns, messages};
use tracing::warn;

/// Column names taken from the file's first line
#[derive(Debug, Clone, PartialEq)]
pub struct CsvHeader {
    pub columns: Vec<String>,
}

impl CsvHeader {
    /// Parse the header line with the same tokenizer used for data rows
    pub fn parse(line: &str) -> Self {
        Self {
            columns: parse_line(line),
        }
    }

    pub fn has_column(&self, column: &str) -> bool {
        self.columns.iter().any(|c| c == column)
    }

    /// Required columns the header does not contain, in layout order
    pub fn missing_required(&self) -> Vec<&'static str> {
        columns::REQUIRED
            .iter()
            .copied()
            .filter(|column| !self.has_column(column))
            .collect()
    }

    /// Columns that are not part of the import layout, in file order
    pub fn unexpected_columns(&self) -> Vec<&str> {
        self.columns
            .iter()
            .map(String::as_str)
            .filter(|column| !columns::is_known(column))
            .collect()
    }

    /// Record header problems against row 1
    pub fn validate(&self, ctx: &mut ParseContext) {
        for column in self.missing_required() {
            warn!("Import file is missing required column '{}'", column);
            ctx.error(
                HEADER_ROW,
                column,
                format!("{}: {}", messages::MISSING_HEADER, column),
                None,
            );
        }

        for column in self.unexpected_columns() {
            warn!("Import file has unexpected column '{}'", column);
            ctx.warning(
                HEADER_ROW,
                column,
                format!("{}: {}", messages::UNEXPECTED_COLUMN, column),
                Some(column.to_string()),
            );
        }
    }
}
