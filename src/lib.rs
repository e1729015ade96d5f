//! Vehicle CSV Import Library
//!
//! A Rust library for turning a vendor's bulk inventory CSV into validated
//! vehicle listings for the EV marketplace.
//!
//! This library provides tools for:
//! - Quote-aware tokenizing of the localized import layout
//! - Header validation against the required and optional columns
//! - Per-row validation of enumerations, numbers and required fields
//! - Row-level errors and warnings that drive partial-import workflows
//! - Layered configuration of the defaults stamped on imported vehicles

pub mod config;
pub mod constants;
pub mod error;

// Core application modules
pub mod app {
    pub mod models;
    pub mod services {
        pub mod vehicle_csv_parser;
    }
}

// CLI modules
pub mod cli {
    pub mod args;
    pub mod commands;
}

// Re-export commonly used types
pub use app::models::{Availability, Vehicle, VehicleType, WarrantyUnit};
pub use app::services::vehicle_csv_parser::{
    ParseError, ParseResult, ParseWarning, VehicleCsvParser, parse_vehicle_csv,
};
pub use config::ImportConfig;
pub use error::{ImportError, Result};
