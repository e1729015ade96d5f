//! Tests for the top-level vehicle CSV parser

use super::{canonical_header, csv_document, row_with, scooter_row, tesla_row};
use crate::app::models::{Availability, VehicleType};
use crate::app::services::vehicle_csv_parser::{ParseResult, VehicleCsvParser, parse_vehicle_csv};
use crate::config::ImportConfig;
use std::io::Write;
use tempfile::NamedTempFile;

#[test]
fn test_empty_input() {
    let result = parse_vehicle_csv("");

    assert!(!result.success);
    assert!(result.vehicles.is_empty());
    assert!(result.warnings.is_empty());
    assert_eq!(result.errors.len(), 1);
    assert_eq!(result.errors[0].row, 0);
    assert_eq!(result.errors[0].field, "file");
    assert_eq!(result.errors[0].message, "CSV file is empty");
    assert_eq!(result.errors[0].value, None);
}

#[test]
fn test_blank_only_input_is_empty() {
    let result = parse_vehicle_csv("\n  \n\n");

    assert!(!result.success);
    assert_eq!(result.errors[0].message, "CSV file is empty");
}

#[test]
fn test_happy_path_two_rows() {
    let csv = csv_document(&canonical_header(), &[tesla_row(), scooter_row()]);
    let result = parse_vehicle_csv(&csv);

    assert!(result.success);
    assert_eq!(result.vehicles.len(), 2);
    assert!(result.errors.is_empty());
    assert!(result.warnings.is_empty());

    let tesla = &result.vehicles[0];
    assert_eq!(tesla.name, "Tesla Model 3");
    assert_eq!(tesla.price, 50_000_000.0);
    assert_eq!(tesla.availability, Availability::InStock);
    assert_eq!(
        tesla.features,
        vec!["GPS", "Bluetooth", "Autopilot", "Pantalla táctil"]
    );

    let scooter = &result.vehicles[1];
    assert_eq!(scooter.vehicle_type, VehicleType::Patineta);
    assert_eq!(scooter.availability, Availability::PreOrder);
    assert_eq!(scooter.specifications.warranty, "1 años");
    assert_eq!(scooter.specifications.performance.power, "0.3");
}

#[test]
fn test_quoted_field_keeps_embedded_comma() {
    let csv = csv_document(&canonical_header(), &[tesla_row()]);
    let result = parse_vehicle_csv(&csv);

    assert!(result.success);
    assert_eq!(
        result.vehicles[0].description,
        "Vehículo eléctrico, con comas"
    );
}

#[test]
fn test_invalid_type_rejects_row() {
    let csv = csv_document(&canonical_header(), &[row_with(&[("tipo", "invalid-type")])]);
    let result = parse_vehicle_csv(&csv);

    assert!(!result.success);
    assert!(result.vehicles.is_empty());
    let error = result.errors_for_field("tipo").next().unwrap();
    assert!(error.message.contains("Invalid type"));
    assert_eq!(error.row, 2);
}

#[test]
fn test_missing_required_field_in_second_row() {
    let csv = csv_document(
        &canonical_header(),
        &[row_with(&[]), row_with(&[("nombre", "")])],
    );
    let result = parse_vehicle_csv(&csv);

    assert!(!result.success);
    assert_eq!(result.vehicles.len(), 1);
    assert_eq!(result.errors.len(), 1);
    assert_eq!(result.errors[0].field, "nombre");
    assert_eq!(result.errors[0].row, 3);
    assert!(result.errors[0].message.contains("Campo requerido está vacío"));
}

#[test]
fn test_invalid_price() {
    let csv = csv_document(&canonical_header(), &[row_with(&[("precio", "invalid-price")])]);
    let result = parse_vehicle_csv(&csv);

    assert!(!result.success);
    assert!(result.vehicles.is_empty());
    assert_eq!(result.errors.len(), 1);
    assert_eq!(result.errors[0].field, "precio");
    assert!(result.errors[0].message.contains("Invalid number"));
}

#[test]
fn test_negative_range_is_warning_only() {
    let csv = csv_document(&canonical_header(), &[row_with(&[("autonomia", "-100")])]);
    let result = parse_vehicle_csv(&csv);

    assert!(result.success);
    assert_eq!(result.vehicles.len(), 1);
    assert!(result.has_warnings());
    let warning = &result.warnings[0];
    assert_eq!(warning.field, "autonomia");
    assert!(warning.message.contains("Negative value"));
}

#[test]
fn test_invalid_warranty_unit() {
    let csv = csv_document(
        &canonical_header(),
        &[row_with(&[("unidad_garantia", "invalid-unit")])],
    );
    let result = parse_vehicle_csv(&csv);

    assert!(!result.success);
    assert!(result.vehicles.is_empty());
    assert_eq!(result.errors[0].field, "unidad_garantia");
    assert!(result.errors[0].message.contains("Unidad de garantía inválida"));
}

#[test]
fn test_invalid_availability() {
    let csv = csv_document(
        &canonical_header(),
        &[row_with(&[("disponibilidad", "agotado")])],
    );
    let result = parse_vehicle_csv(&csv);

    assert!(!result.success);
    assert_eq!(result.errors[0].field, "disponibilidad");
    assert!(result.errors[0].message.contains("Disponibilidad inválida"));
}

#[test]
fn test_parsing_is_repeatable() {
    let csv = csv_document(
        &canonical_header(),
        &[tesla_row(), row_with(&[("tipo", "avion")]), row_with(&[("potencia", "-1")])],
    );
    let parser = VehicleCsvParser::default();

    let mut first = parser.parse(&csv);
    let mut second = parser.parse(&csv);

    // Timestamps are wall-clock; everything else must match
    let epoch = chrono::DateTime::<chrono::Utc>::default();
    for vehicle in first.vehicles.iter_mut().chain(second.vehicles.iter_mut()) {
        vehicle.created_at = epoch;
        vehicle.updated_at = epoch;
    }
    assert_eq!(first, second);
}

#[test]
fn test_missing_header_cascades_into_rows() {
    // Header errors do not stop row processing; every row then lacks the column
    let header = canonical_header().replace("marca", "marka");
    let csv = csv_document(&header, &[row_with(&[]), tesla_row()]);
    let result = parse_vehicle_csv(&csv);

    assert!(!result.success);
    assert!(result.vehicles.is_empty());

    let brand_errors: Vec<_> = result.errors_for_field("marca").collect();
    assert_eq!(brand_errors.len(), 3);
    assert_eq!(brand_errors[0].row, 1);
    assert!(brand_errors[0].message.contains("Missing required header"));
    assert_eq!(brand_errors[1].row, 2);
    assert!(brand_errors[1].message.contains("Campo requerido está vacío"));
    assert_eq!(brand_errors[2].row, 3);

    assert_eq!(result.warnings.len(), 1);
    assert_eq!(result.warnings[0].field, "marka");
}

#[test]
fn test_unexpected_header_does_not_block_success() {
    let header = format!("{},color", canonical_header());
    let csv = csv_document(&header, &[format!("{},rojo", row_with(&[]))]);
    let result = parse_vehicle_csv(&csv);

    assert!(result.success);
    assert_eq!(result.vehicles.len(), 1);
    assert_eq!(result.warnings.len(), 1);
    assert_eq!(result.warnings[0].row, 1);
}

#[test]
fn test_blank_lines_do_not_advance_row_numbers() {
    let csv = format!(
        "{}\n\n{}\n\n\n{}\n",
        canonical_header(),
        row_with(&[]),
        row_with(&[("tipo", "avion")])
    );
    let result = parse_vehicle_csv(&csv);

    assert_eq!(result.vehicles.len(), 1);
    assert_eq!(result.errors.len(), 1);
    // Third non-blank line, even though it is the sixth physical line
    assert_eq!(result.errors[0].row, 3);
}

#[test]
fn test_header_only_file() {
    let result = parse_vehicle_csv(&canonical_header());

    assert!(result.success);
    assert!(result.vehicles.is_empty());
    assert_eq!(result.stats().total_rows, 0);
}

#[test]
fn test_vehicles_and_errors_mixed() {
    let csv = csv_document(
        &canonical_header(),
        &[
            row_with(&[]),
            row_with(&[("precio", "abc")]),
            row_with(&[("velocidad_maxima", "-1")]),
            row_with(&[("nombre", ""), ("marca", "")]),
        ],
    );
    let result = parse_vehicle_csv(&csv);

    assert!(!result.success);
    assert_eq!(result.vehicles.len(), 2);
    assert_eq!(result.errors.len(), 3);
    assert_eq!(result.warnings.len(), 1);

    let stats = result.stats();
    assert_eq!(stats.total_rows, 4);
    assert_eq!(stats.vehicles_parsed, 2);
    assert_eq!(stats.rows_rejected, 2);
    assert_eq!(stats.rows_with_warnings, 1);
    assert_eq!(stats.success_rate(), 50.0);

    let grouped = result.issues_by_row();
    assert_eq!(grouped.keys().copied().collect::<Vec<_>>(), vec![3, 4, 5]);
    assert_eq!(grouped[&5].errors.len(), 2);
    assert_eq!(grouped[&4].warnings.len(), 1);
}

#[test]
fn test_deserialized_result_keeps_stats() {
    let csv = csv_document(
        &canonical_header(),
        &[
            row_with(&[]),
            row_with(&[("precio", "abc")]),
            row_with(&[("autonomia", "-5")]),
        ],
    );
    let result = parse_vehicle_csv(&csv);

    let json = serde_json::to_string(&result).unwrap();
    let restored: ParseResult = serde_json::from_str(&json).unwrap();

    assert_eq!(restored, result);
    assert_eq!(restored.stats().total_rows, 3);
    assert_eq!(restored.stats().rows_rejected, 1);
    assert!((restored.stats().success_rate() - 200.0 / 3.0).abs() < 1e-9);

    let file_failure: ParseResult =
        serde_json::from_str(&serde_json::to_string(&parse_vehicle_csv("")).unwrap()).unwrap();
    assert_eq!(file_failure.stats().total_rows, 0);
}

#[test]
fn test_row_limit_is_file_level_error() {
    let parser = VehicleCsvParser::new(ImportConfig::default().with_max_rows(1));
    let csv = csv_document(&canonical_header(), &[row_with(&[]), row_with(&[])]);

    let result = parser.parse(&csv);

    assert!(!result.success);
    assert!(result.vehicles.is_empty());
    assert!(result.warnings.is_empty());
    assert_eq!(result.errors.len(), 1);
    assert_eq!(result.errors[0].row, 0);
    assert_eq!(result.errors[0].field, "file");
    assert!(result.errors[0].message.contains("Too many rows"));
}

#[test]
fn test_row_limit_allows_exact_count() {
    let parser = VehicleCsvParser::new(ImportConfig::default().with_max_rows(2));
    let csv = csv_document(&canonical_header(), &[row_with(&[]), row_with(&[])]);

    assert!(parser.parse(&csv).success);
}

#[tokio::test]
async fn test_parse_file() {
    let mut temp_file = NamedTempFile::new().unwrap();
    writeln!(
        temp_file,
        "{}",
        csv_document(&canonical_header(), &[tesla_row()])
    )
    .unwrap();

    let result = VehicleCsvParser::default()
        .parse_file(temp_file.path())
        .await
        .unwrap();

    assert!(result.success);
    assert_eq!(result.vehicles.len(), 1);
}

#[tokio::test]
async fn test_parse_file_not_found() {
    let result = VehicleCsvParser::default()
        .parse_file(std::path::Path::new("/nonexistent/inventario.csv"))
        .await;

    assert!(matches!(
        result,
        Err(crate::error::ImportError::FileNotFound { .. })
    ));
}
