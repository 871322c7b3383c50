//! Modelo de Address
//!
//! Dirección transitoria devuelta por el servicio de mapas.
//! Nunca se persiste: se mezcla en la location del vehículo al leer.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Address {
    pub address: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub zip: Option<String>,
}
