//! Individual row validation and mapping for vehicle imports
//!
//! A data row yields exactly one vehicle or at least one error, never both.
//! Blank required cells are all reported together; after that, validation is
//! first-failure-wins in layout order.

use tracing::debug;

use super::csv_row::CsvRow;
use super::field_parsers::{
    FieldResult, missing_required_fields, parse_availability, parse_features, parse_number,
    parse_optional_string, parse_price, parse_required_string, parse_vehicle_type,
    parse_warranty_unit,
};
use super::stats::ParseContext;
use crate::app::models::{Vehicle, VehicleDraft};
use crate::config::ImportConfig;
use crate::constants::{GENERAL_FIELD, columns, messages};

/// Validate one data row and build its vehicle
///
/// Errors and warnings go to `ctx`. Returns `None` when the row is rejected.
pub fn parse_vehicle_record(
    row: &CsvRow,
    row_number: usize,
    config: &ImportConfig,
    ctx: &mut ParseContext,
) -> Option<Vehicle> {
    let missing = missing_required_fields(row);
    if !missing.is_empty() {
        for column in &missing {
            ctx.error(
                row_number,
                *column,
                messages::REQUIRED_FIELD_EMPTY,
                row.get(column).map(str::to_string),
            );
        }
        debug!(
            "Row {} rejected: {} required field(s) empty",
            row_number,
            missing.len()
        );
        return None;
    }

    let draft = match map_vehicle_draft(row, row_number, ctx) {
        Ok(draft) => draft,
        Err(error) => {
            debug!("Row {} rejected at '{}': {}", row_number, error.field, error.message);
            ctx.error(row_number, error.field, error.message, error.value);
            return None;
        }
    };

    match Vehicle::new(draft, config) {
        Ok(vehicle) => Some(vehicle),
        Err(e) => {
            debug!("Row {} rejected building vehicle: {}", row_number, e);
            ctx.error(row_number, GENERAL_FIELD, e.to_string(), None);
            None
        }
    }
}

/// Run the semantic field checks in layout order
///
/// Negative measurements are recorded as warnings as they are met, so a row
/// that fails on a later column keeps the warnings of earlier ones.
pub fn map_vehicle_draft(
    row: &CsvRow,
    row_number: usize,
    ctx: &mut ParseContext,
) -> FieldResult<VehicleDraft> {
    let name = parse_required_string(row, columns::NAME)?;
    let brand = parse_required_string(row, columns::BRAND)?;
    let vehicle_type = parse_vehicle_type(&parse_required_string(row, columns::TYPE)?)?;
    let price = parse_price(&parse_required_string(row, columns::PRICE)?)?;
    let location = parse_required_string(row, columns::LOCATION)?;
    let availability =
        parse_availability(&parse_required_string(row, columns::AVAILABILITY)?)?;

    let range = parse_measurement(row, columns::RANGE, row_number, ctx)?;
    let max_speed = parse_measurement(row, columns::MAX_SPEED, row_number, ctx)?;
    let power = parse_measurement(row, columns::POWER, row_number, ctx)?;
    let warranty_value = parse_measurement(row, columns::WARRANTY_VALUE, row_number, ctx)?;

    let charge_time = parse_required_string(row, columns::CHARGE_TIME)?;
    let battery = parse_required_string(row, columns::BATTERY)?;
    let warranty_unit =
        parse_warranty_unit(&parse_required_string(row, columns::WARRANTY_UNIT)?)?;

    let description = parse_optional_string(row, columns::DESCRIPTION);
    let features = parse_features(row.get(columns::FEATURES));

    Ok(VehicleDraft {
        name,
        brand,
        vehicle_type,
        price,
        location,
        availability,
        range,
        charge_time,
        battery,
        warranty_unit,
        warranty_value,
        max_speed,
        power,
        description,
        features,
    })
}

/// Parse a numeric column where a negative value is suspicious but allowed
fn parse_measurement(
    row: &CsvRow,
    column: &str,
    row_number: usize,
    ctx: &mut ParseContext,
) -> FieldResult<f64> {
    let raw = parse_required_string(row, column)?;
    let value = parse_number(column, &raw)?;

    if value < 0.0 {
        ctx.warning(
            row_number,
            column,
            format!("{} for {}: {}", messages::NEGATIVE_VALUE, column, raw),
            Some(raw),
        );
    }

    Ok(value)
}
