//! Vehicle CSV parser for bulk marketplace imports
//!
//! This module turns the text of a vendor's inventory CSV into validated
//! [`Vehicle`](crate::app::models::Vehicle) records, reporting every problem
//! with the row and column it came from so the upload UI can offer a partial
//! import and a correction workflow.
//!
//! ## Architecture
//!
//! The parser is organized into logical components:
//! - [`tokenizer`] - quote-aware line and field splitting
//! - [`csv_row`] - column name to cell value mapping for one line
//! - [`header`] - header row validation against the import layout
//! - [`field_parsers`] - per-field validators returning tagged results
//! - [`record_parser`] - row validation and mapping to a vehicle
//! - [`stats`] - errors, warnings, the per-call accumulator and the result
//! - [`parser`] - top-level orchestration and result aggregation
//!
//! ## Usage
//!
//! ```rust
//! use vehicle_csv_import::app::services::vehicle_csv_parser::VehicleCsvParser;
//!
//! let csv = "nombre,marca,tipo,precio,ubicacion,disponibilidad,autonomia,tiempo_carga,bateria,unidad_garantia,valor_garantia,velocidad_maxima,potencia,descripcion,caracteristicas\n\
//!            Model 3,Tesla,carro,50000000,Bogotá,disponible,500,8 horas,75 kWh,años,8,225,283,,GPS";
//!
//! let result = VehicleCsvParser::default().parse(csv);
//! assert!(result.success);
//! assert_eq!(result.vehicles.len(), 1);
//! ```

pub mod csv_row;
pub mod field_parsers;
pub mod header;
pub mod parser;
pub mod record_parser;
pub mod stats;
pub mod tokenizer;

#[cfg(test)]
pub mod tests;

// Re-export main types for easy access
pub use csv_row::CsvRow;
pub use header::CsvHeader;
pub use parser::{VehicleCsvParser, parse_vehicle_csv};
pub use stats::{ParseContext, ParseError, ParseIssue, ParseResult, ParseStats, ParseWarning};
