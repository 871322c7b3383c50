//! Services module
//!
//! Este módulo contiene la lógica de negocio de vehicles-api:
//! el servicio de orquestación de vehículos.

pub mod car_service;

pub use car_service::*;
