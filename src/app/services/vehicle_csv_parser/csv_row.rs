//! Column name to cell value mapping for one CSV line

/// One tokenized line keyed by header column name
///
/// Keys keep insertion order. A line shorter than the header leaves the
/// trailing columns absent (not empty); extra cells beyond the header are
/// dropped.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CsvRow {
    values: Vec<(String, String)>,
}

impl CsvRow {
    /// Pair fields with header columns by position
    pub fn from_fields(columns: &[String], fields: Vec<String>) -> Self {
        let mut row = Self::default();
        for (column, value) in columns.iter().zip(fields) {
            row.insert(column.clone(), value);
        }
        row
    }

    /// Set a column value; a repeated column keeps its first position and the latest value
    pub fn insert(&mut self, column: String, value: String) {
        match self.values.iter_mut().find(|(name, _)| *name == column) {
            Some((_, existing)) => *existing = value,
            None => self.values.push((column, value)),
        }
    }

    /// Raw cell value for a column, if the line reached it
    pub fn get(&self, column: &str) -> Option<&str> {
        self.values
            .iter()
            .find(|(name, _)| name == column)
            .map(|(_, value)| value.as_str())
    }

    /// Trimmed cell value, treating blank cells as absent
    pub fn get_non_empty(&self, column: &str) -> Option<&str> {
        self.get(column).map(str::trim).filter(|v| !v.is_empty())
    }
}
