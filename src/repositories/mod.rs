//! Repositorios de persistencia
//!
//! Cada store expone un trait explícito de CRUD con una implementación
//! PostgreSQL y una en memoria (usada en tests).

pub mod car_repository;
pub mod price_repository;

pub use car_repository::{CarStore, InMemoryCarRepository, PgCarRepository};
pub use price_repository::{InMemoryPriceRepository, PgPriceRepository, PriceStore};
