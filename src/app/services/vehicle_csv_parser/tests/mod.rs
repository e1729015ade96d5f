//! Test utilities for vehicle CSV parser testing
//!
//! This module provides fixture builders shared across the parser test modules.

use crate::constants::columns;

mod parser_tests;

/// Header line in the import template order
pub fn canonical_header() -> String {
    columns::ALL.join(",")
}

/// A valid data line, as exported by the vendor dashboard
pub fn tesla_row() -> String {
    "Tesla Model 3,Tesla,carro,50000000,Bogotá,disponible,500,8 horas,75 kWh,años,8,225,283,\"Vehículo eléctrico, con comas\",\"GPS,Bluetooth,Autopilot,Pantalla táctil\"".to_string()
}

/// A second valid data line with different enum tokens
pub fn scooter_row() -> String {
    "Xiaomi Pro 2,Xiaomi,patineta,2500000,Medellín,pre-orden,45,5 horas,474 Wh,año,1,25,0.3,Patineta urbana,Plegable".to_string()
}

/// Build a document from a header and data lines
pub fn csv_document(header: &str, rows: &[String]) -> String {
    let mut lines = vec![header.to_string()];
    lines.extend(rows.iter().cloned());
    lines.join("\n")
}

/// Build a data line from the template, overriding selected columns
pub fn row_with(overrides: &[(&str, &str)]) -> String {
    let defaults = [
        (columns::NAME, "Nissan Leaf"),
        (columns::BRAND, "Nissan"),
        (columns::TYPE, "carro"),
        (columns::PRICE, "120000000"),
        (columns::LOCATION, "Cali"),
        (columns::AVAILABILITY, "disponible"),
        (columns::RANGE, "270"),
        (columns::CHARGE_TIME, "7.5 horas"),
        (columns::BATTERY, "40 kWh"),
        (columns::WARRANTY_UNIT, "años"),
        (columns::WARRANTY_VALUE, "5"),
        (columns::MAX_SPEED, "144"),
        (columns::POWER, "110"),
        (columns::DESCRIPTION, "Hatchback"),
        (columns::FEATURES, "\"Cámara, Sensores\""),
    ];

    defaults
        .iter()
        .map(|(column, value)| {
            overrides
                .iter()
                .find(|(c, _)| c == column)
                .map(|(_, v)| *v)
                .unwrap_or(*value)
        })
        .collect::<Vec<_>>()
        .join(",")
}
