//! Data models for vehicle imports
//!
//! This module contains the canonical in-memory representation of a vehicle
//! listing produced by the CSV importer, together with the enumerations the
//! import layout accepts. Identity and relationship fields (`id`, `vendorId`,
//! `images`, `vendor`, `reviews`) are placeholders here: the persistence layer
//! fills them in before storage.

use crate::config::ImportConfig;
use crate::constants::{AVAILABILITY_TOKENS, VEHICLE_TYPE_TOKENS, WARRANTY_UNIT_TOKENS};
use crate::error::{ImportError, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// =============================================================================
// Enumerations
// =============================================================================

/// Vehicle category, serialized with the localized token
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VehicleType {
    Motocicleta,
    Patineta,
    Bicicleta,
    Carro,
    Camion,
}

impl VehicleType {
    pub fn as_str(&self) -> &'static str {
        match self {
            VehicleType::Motocicleta => "motocicleta",
            VehicleType::Patineta => "patineta",
            VehicleType::Bicicleta => "bicicleta",
            VehicleType::Carro => "carro",
            VehicleType::Camion => "camion",
        }
    }
}

impl FromStr for VehicleType {
    type Err = ImportError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "motocicleta" => Ok(VehicleType::Motocicleta),
            "patineta" => Ok(VehicleType::Patineta),
            "bicicleta" => Ok(VehicleType::Bicicleta),
            "carro" => Ok(VehicleType::Carro),
            "camion" => Ok(VehicleType::Camion),
            _ => Err(ImportError::data_validation(format!(
                "Invalid vehicle type '{}': must be one of {}",
                s,
                VEHICLE_TYPE_TOKENS.join(", ")
            ))),
        }
    }
}

impl fmt::Display for VehicleType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Stock status; parsed from the localized token, serialized in English
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Availability {
    InStock,
    PreOrder,
    ComingSoon,
}

impl Availability {
    pub fn as_str(&self) -> &'static str {
        match self {
            Availability::InStock => "in-stock",
            Availability::PreOrder => "pre-order",
            Availability::ComingSoon => "coming-soon",
        }
    }
}

impl FromStr for Availability {
    type Err = ImportError;

    /// Parse a localized availability token (`disponible`, `pre-orden`, `proximamente`)
    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "disponible" => Ok(Availability::InStock),
            "pre-orden" => Ok(Availability::PreOrder),
            "proximamente" => Ok(Availability::ComingSoon),
            _ => Err(ImportError::data_validation(format!(
                "Invalid availability '{}': must be one of {}",
                s,
                AVAILABILITY_TOKENS.join(", ")
            ))),
        }
    }
}

impl fmt::Display for Availability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Unit the warranty value is expressed in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WarrantyUnit {
    #[serde(rename = "años")]
    Years,
    #[serde(rename = "km")]
    Kilometers,
}

impl WarrantyUnit {
    pub fn as_str(&self) -> &'static str {
        match self {
            WarrantyUnit::Years => "años",
            WarrantyUnit::Kilometers => "km",
        }
    }
}

impl FromStr for WarrantyUnit {
    type Err = ImportError;

    /// `año` and `años` both map to years
    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "años" | "año" => Ok(WarrantyUnit::Years),
            "km" => Ok(WarrantyUnit::Kilometers),
            _ => Err(ImportError::data_validation(format!(
                "Invalid warranty unit '{}': must be one of {}",
                s,
                WARRANTY_UNIT_TOKENS.join(", ")
            ))),
        }
    }
}

impl fmt::Display for WarrantyUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// =============================================================================
// Vehicle Structure
// =============================================================================

/// Validated field values of one import row, before defaults are applied
#[derive(Debug, Clone, PartialEq)]
pub struct VehicleDraft {
    pub name: String,
    pub brand: String,
    pub vehicle_type: VehicleType,
    pub price: f64,
    pub location: String,
    pub availability: Availability,
    pub range: f64,
    pub charge_time: String,
    pub battery: String,
    pub warranty_unit: WarrantyUnit,
    pub warranty_value: f64,
    pub max_speed: f64,
    pub power: f64,
    pub description: String,
    pub features: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Performance {
    pub max_speed: String,
    pub power: String,
}

/// Technical specifications, stored as display strings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Specifications {
    pub range: String,
    pub charge_time: String,
    /// `"<value> <unit>"`, e.g. `"8 años"`
    pub warranty: String,
    pub battery: String,
    pub performance: Performance,
}

/// Vendor summary; filled in by the persistence layer
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VendorInfo {
    pub name: String,
    pub location: String,
    pub rating: f64,
    pub verified: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewSummary {
    pub average: f64,
    pub count: u32,
}

/// Canonical vehicle listing produced by a successful import row
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Vehicle {
    pub id: String,
    pub vendor_id: String,
    pub name: String,
    pub brand: String,
    #[serde(rename = "type")]
    pub vehicle_type: VehicleType,
    pub price: f64,
    pub location: String,
    pub availability: Availability,
    pub description: String,
    pub images: Vec<String>,
    pub specifications: Specifications,
    pub features: Vec<String>,
    pub vendor: VendorInfo,
    pub reviews: ReviewSummary,
    pub delivery_time: String,
    pub passenger_capacity: u32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Vehicle {
    /// Build a vehicle from validated row values, stamped with the current time
    pub fn new(draft: VehicleDraft, config: &ImportConfig) -> Result<Self> {
        Self::new_at(draft, config, Utc::now())
    }

    /// Build a vehicle with an explicit creation timestamp
    pub fn new_at(
        draft: VehicleDraft,
        config: &ImportConfig,
        timestamp: DateTime<Utc>,
    ) -> Result<Self> {
        let specifications = Specifications {
            range: display_number(draft.range),
            charge_time: draft.charge_time,
            warranty: format!(
                "{} {}",
                display_number(draft.warranty_value),
                draft.warranty_unit
            ),
            battery: draft.battery,
            performance: Performance {
                max_speed: display_number(draft.max_speed),
                power: display_number(draft.power),
            },
        };

        let vehicle = Self {
            id: String::new(),
            vendor_id: String::new(),
            name: draft.name,
            brand: draft.brand,
            vehicle_type: draft.vehicle_type,
            price: draft.price,
            location: draft.location,
            availability: draft.availability,
            description: draft.description,
            images: Vec::new(),
            specifications,
            features: draft.features,
            vendor: VendorInfo::default(),
            reviews: ReviewSummary::default(),
            delivery_time: config.delivery_time.clone(),
            passenger_capacity: config.passenger_capacity,
            created_at: timestamp,
            updated_at: timestamp,
        };

        vehicle.validate()?;
        Ok(vehicle)
    }

    /// Validate vehicle data for consistency
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(ImportError::data_validation("Vehicle name cannot be empty"));
        }

        if self.brand.trim().is_empty() {
            return Err(ImportError::data_validation("Vehicle brand cannot be empty"));
        }

        if self.location.trim().is_empty() {
            return Err(ImportError::data_validation(
                "Vehicle location cannot be empty",
            ));
        }

        if !self.price.is_finite() || self.price < 0.0 {
            return Err(ImportError::data_validation(format!(
                "Invalid price {}: must be a non-negative number",
                self.price
            )));
        }

        if self.delivery_time.trim().is_empty() {
            return Err(ImportError::data_validation("Delivery time cannot be empty"));
        }

        Ok(())
    }

    /// Whether the persistence layer has assigned an identity yet
    pub fn is_persisted(&self) -> bool {
        !self.id.is_empty()
    }
}

/// Render a validated number the way listings display it (`500`, `2.5`, `-100`)
pub fn display_number(value: f64) -> String {
    if value == 0.0 {
        // Avoid "-0"
        return "0".to_string();
    }
    value.to_string()
}
