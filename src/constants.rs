//! Application constants for the vehicle CSV importer
//!
//! This module contains the fixed import layout: localized column names,
//! enumeration tokens, default values and the literal message fragments
//! surfaced to the upload UI.

// =============================================================================
// Column Layout
// =============================================================================

/// Localized column names used in the import file
pub mod columns {
    pub const NAME: &str = "nombre";
    pub const BRAND: &str = "marca";
    pub const TYPE: &str = "tipo";
    pub const PRICE: &str = "precio";
    pub const LOCATION: &str = "ubicacion";
    pub const AVAILABILITY: &str = "disponibilidad";
    pub const RANGE: &str = "autonomia";
    pub const CHARGE_TIME: &str = "tiempo_carga";
    pub const BATTERY: &str = "bateria";
    pub const WARRANTY_UNIT: &str = "unidad_garantia";
    pub const WARRANTY_VALUE: &str = "valor_garantia";
    pub const MAX_SPEED: &str = "velocidad_maxima";
    pub const POWER: &str = "potencia";
    pub const DESCRIPTION: &str = "descripcion";
    pub const FEATURES: &str = "caracteristicas";

    /// Columns that must be present in the header and non-empty in every row
    pub const REQUIRED: &[&str] = &[
        NAME,
        BRAND,
        TYPE,
        PRICE,
        LOCATION,
        AVAILABILITY,
        RANGE,
        CHARGE_TIME,
        BATTERY,
        WARRANTY_UNIT,
        WARRANTY_VALUE,
        MAX_SPEED,
        POWER,
    ];

    pub const OPTIONAL: &[&str] = &[DESCRIPTION, FEATURES];

    /// Full header in the order the import template uses
    pub const ALL: &[&str] = &[
        NAME,
        BRAND,
        TYPE,
        PRICE,
        LOCATION,
        AVAILABILITY,
        RANGE,
        CHARGE_TIME,
        BATTERY,
        WARRANTY_UNIT,
        WARRANTY_VALUE,
        MAX_SPEED,
        POWER,
        DESCRIPTION,
        FEATURES,
    ];

    /// Check if a column name belongs to the import layout
    pub fn is_known(name: &str) -> bool {
        ALL.contains(&name)
    }
}

/// Pseudo-field used for whole-file errors
pub const FILE_FIELD: &str = "file";

/// Pseudo-field used for row errors not attributable to a single column
pub const GENERAL_FIELD: &str = "general";

/// Row number of the header line (rows are 1-based)
pub const HEADER_ROW: usize = 1;

/// Row number reported for whole-file errors
pub const FILE_ROW: usize = 0;

// =============================================================================
// Enumeration Tokens
// =============================================================================

/// Accepted `tipo` tokens
pub const VEHICLE_TYPE_TOKENS: &[&str] = &["motocicleta", "patineta", "bicicleta", "carro", "camion"];

/// Accepted `disponibilidad` tokens
pub const AVAILABILITY_TOKENS: &[&str] = &["disponible", "pre-orden", "proximamente"];

/// Accepted `unidad_garantia` tokens
pub const WARRANTY_UNIT_TOKENS: &[&str] = &["años", "año", "km"];

// =============================================================================
// Defaults
// =============================================================================

/// Delivery time stamped on imported vehicles
pub const DEFAULT_DELIVERY_TIME: &str = "2-4 semanas";

/// Passenger capacity stamped on imported vehicles
pub const DEFAULT_PASSENGER_CAPACITY: u32 = 1;

/// Separator used inside the `caracteristicas` cell
pub const FEATURE_SEPARATOR: char = ',';

/// Config file name looked up under the user config directory
pub const CONFIG_DIR_NAME: &str = "vehicle-csv-import";
pub const CONFIG_FILE_NAME: &str = "config.json";

/// Environment variable overrides
pub mod env_vars {
    pub const DELIVERY_TIME: &str = "VEHICLE_IMPORT_DELIVERY_TIME";
    pub const PASSENGER_CAPACITY: &str = "VEHICLE_IMPORT_PASSENGER_CAPACITY";
    pub const MAX_ROWS: &str = "VEHICLE_IMPORT_MAX_ROWS";
}

// =============================================================================
// Messages
// =============================================================================

/// Message fragments asserted on by the upload UI. The mix of English and
/// Spanish is part of the contract; keep them byte-for-byte.
pub mod messages {
    pub const EMPTY_FILE: &str = "CSV file is empty";
    pub const MISSING_HEADER: &str = "Missing required header";
    pub const UNEXPECTED_COLUMN: &str = "Unexpected column";
    pub const REQUIRED_FIELD_EMPTY: &str = "Campo requerido está vacío";
    pub const INVALID_TYPE: &str = "Invalid type";
    pub const INVALID_NUMBER: &str = "Invalid number";
    pub const NEGATIVE_PRICE: &str = "Price cannot be negative";
    pub const INVALID_AVAILABILITY: &str = "Disponibilidad inválida";
    pub const INVALID_WARRANTY_UNIT: &str = "Unidad de garantía inválida";
    pub const NEGATIVE_VALUE: &str = "Negative value";
}
