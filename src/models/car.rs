//! Modelo de Car
//!
//! Este módulo contiene el struct Car y sus variantes para CRUD
//! operations. Mapea a la tabla cars con primary key 'id'; los campos
//! de dirección y el string de precio son transitorios (enriquecidos
//! en cada lectura, nunca persistidos).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Estado del vehículo
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "UPPERCASE")]
pub enum Condition {
    Used,
    New,
}

impl Condition {
    pub fn as_str(&self) -> &'static str {
        match self {
            Condition::Used => "USED",
            Condition::New => "NEW",
        }
    }

    pub fn from_db(value: &str) -> Self {
        match value {
            "NEW" => Condition::New,
            _ => Condition::Used,
        }
    }
}

/// Atributos descriptivos del vehículo - persistidos como JSONB
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Details {
    pub body: Option<String>,
    pub model: Option<String>,
    pub manufacturer: Option<String>,
    pub number_of_doors: Option<i32>,
    pub fuel_type: Option<String>,
    pub engine: Option<String>,
    pub mileage: Option<i32>,
    pub model_year: Option<i32>,
    pub production_year: Option<i32>,
    pub external_color: Option<String>,
}

/// Ubicación del vehículo. Solo lat/lon se persisten; address, city,
/// state y zip los rellena el servicio de mapas en cada lectura.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, PartialEq)]
pub struct Location {
    #[validate(range(min = -90.0, max = 90.0))]
    pub lat: f64,

    #[validate(range(min = -180.0, max = 180.0))]
    pub lon: f64,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub zip: Option<String>,
}

impl Location {
    pub fn new(lat: f64, lon: f64) -> Self {
        Self {
            lat,
            lon,
            address: None,
            city: None,
            state: None,
            zip: None,
        }
    }
}

/// Car principal - registro almacenado más los campos transitorios
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Car {
    pub id: i64,
    pub condition: Condition,
    pub details: Details,
    pub location: Location,
    /// String de precio calculado en la lectura, ej. "3500 USD"
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<String>,
    pub created_at: DateTime<Utc>,
    pub modified_at: DateTime<Utc>,
}

/// Request para crear o actualizar un vehículo.
///
/// En actualizaciones solo details y location se copian al registro
/// almacenado; condition se ignora (se preserva la almacenada).
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct SaveCarRequest {
    pub condition: Condition,

    #[serde(default)]
    pub details: Details,

    #[validate]
    pub location: Location,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_condition_round_trip_db() {
        assert_eq!(Condition::from_db("NEW"), Condition::New);
        assert_eq!(Condition::from_db("USED"), Condition::Used);
        // valores desconocidos degradan a USED
        assert_eq!(Condition::from_db("???"), Condition::Used);
        assert_eq!(Condition::from_db(Condition::New.as_str()), Condition::New);
    }

    #[test]
    fn test_location_validation_rejects_bad_latitude() {
        let location = Location::new(123.0, 2.0);
        assert!(location.validate().is_err());
        assert!(Location::new(40.73, -73.93).validate().is_ok());
    }

    #[test]
    fn test_details_wire_names_are_camel_case() {
        let details = Details {
            number_of_doors: Some(4),
            ..Details::default()
        };
        let value = serde_json::to_value(&details).unwrap();
        assert_eq!(value["numberOfDoors"], 4);
    }
}
