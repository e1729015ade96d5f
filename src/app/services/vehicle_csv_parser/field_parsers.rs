//! Field parsing utilities for vehicle import rows
//!
//! Every validator returns a [`FieldResult`]; the row mapper stops at the
//! first `Err`. Messages keep the literal wording the upload UI matches on.

use super::csv_row::CsvRow;
use crate::app::models::{Availability, VehicleType, WarrantyUnit};
use crate::constants::{
    AVAILABILITY_TOKENS, FEATURE_SEPARATOR, VEHICLE_TYPE_TOKENS, WARRANTY_UNIT_TOKENS, columns,
    messages,
};
use regex::Regex;
use std::sync::LazyLock;

/// Leading decimal literal, read the way the web front end reads numbers
static NUMBER_PREFIX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[+-]?(?:[0-9]+(?:\.[0-9]*)?|\.[0-9]+)(?:[eE][+-]?[0-9]+)?")
        .expect("number prefix pattern is valid")
});

/// Fatal validation failure for one column of a row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: String,
    pub message: String,
    pub value: Option<String>,
}

impl FieldError {
    pub fn new(field: &str, message: impl Into<String>, value: Option<&str>) -> Self {
        Self {
            field: field.to_string(),
            message: message.into(),
            value: value.map(str::to_string),
        }
    }
}

pub type FieldResult<T> = std::result::Result<T, FieldError>;

/// Required columns whose cell is absent or blank, in layout order
pub fn missing_required_fields(row: &CsvRow) -> Vec<&'static str> {
    columns::REQUIRED
        .iter()
        .copied()
        .filter(|column| row.get_non_empty(column).is_none())
        .collect()
}

/// Get a required text field, trimmed
pub fn parse_required_string(row: &CsvRow, column: &str) -> FieldResult<String> {
    row.get_non_empty(column)
        .map(str::to_string)
        .ok_or_else(|| FieldError::new(column, messages::REQUIRED_FIELD_EMPTY, row.get(column)))
}

/// Get an optional text field, empty when absent
pub fn parse_optional_string(row: &CsvRow, column: &str) -> String {
    row.get(column).map(str::trim).unwrap_or_default().to_string()
}

/// Parse a numeric cell
///
/// Leading whitespace is skipped and the longest leading decimal literal is
/// used, so `"500 km"` reads as 500. No numeric prefix, or a value that
/// overflows to infinity, is an error.
pub fn parse_number(column: &str, raw: &str) -> FieldResult<f64> {
    NUMBER_PREFIX
        .find(raw.trim_start())
        .and_then(|m| m.as_str().parse::<f64>().ok())
        .filter(|value| value.is_finite())
        .ok_or_else(|| {
            FieldError::new(
                column,
                format!("{} for {}: {}", messages::INVALID_NUMBER, column, raw),
                Some(raw),
            )
        })
}

/// Parse the price; unlike other numbers a negative price is fatal
pub fn parse_price(raw: &str) -> FieldResult<f64> {
    let price = parse_number(columns::PRICE, raw)?;
    if price < 0.0 {
        return Err(FieldError::new(
            columns::PRICE,
            format!("{}: {}", messages::NEGATIVE_PRICE, raw),
            Some(raw),
        ));
    }
    Ok(price)
}

pub fn parse_vehicle_type(raw: &str) -> FieldResult<VehicleType> {
    raw.parse::<VehicleType>().map_err(|_| {
        FieldError::new(
            columns::TYPE,
            format!(
                "{}: {}. Must be one of: {}",
                messages::INVALID_TYPE,
                raw,
                VEHICLE_TYPE_TOKENS.join(", ")
            ),
            Some(raw),
        )
    })
}

/// Parse the localized availability token into its canonical value
pub fn parse_availability(raw: &str) -> FieldResult<Availability> {
    raw.parse::<Availability>().map_err(|_| {
        FieldError::new(
            columns::AVAILABILITY,
            format!(
                "{}: {}. Debe ser: {}",
                messages::INVALID_AVAILABILITY,
                raw,
                AVAILABILITY_TOKENS.join(", ")
            ),
            Some(raw),
        )
    })
}

pub fn parse_warranty_unit(raw: &str) -> FieldResult<WarrantyUnit> {
    raw.parse::<WarrantyUnit>().map_err(|_| {
        FieldError::new(
            columns::WARRANTY_UNIT,
            format!(
                "{}: {}. Debe ser: {}",
                messages::INVALID_WARRANTY_UNIT,
                raw,
                WARRANTY_UNIT_TOKENS.join(", ")
            ),
            Some(raw),
        )
    })
}

/// Split the features cell into trimmed, non-empty entries
pub fn parse_features(raw: Option<&str>) -> Vec<String> {
    raw.map(|cell| {
        cell.split(FEATURE_SEPARATOR)
            .map(str::trim)
            .filter(|feature| !feature.is_empty())
            .map(str::to_string)
            .collect()
    })
    .unwrap_or_default()
}
