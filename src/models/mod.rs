//! Modelos del sistema
//!
//! Este módulo contiene los modelos de datos de ambos servicios:
//! vehículos (cars), precios (prices) y direcciones transitorias.

pub mod address;
pub mod car;
pub mod price;
