//! Vehicle Pricing - backend de catálogo de vehículos y precios
//!
//! Dos microservicios sobre una misma librería:
//! - vehicles-api: registros de vehículos enriquecidos al leer con
//!   precio (vía service discovery) y dirección (servicio de mapas).
//! - pricing-service: CRUD plano de un precio por vehículo.

pub mod clients;
pub mod config;
pub mod middleware;
pub mod models;
pub mod repositories;
pub mod routes;
pub mod services;
pub mod state;
pub mod utils;
