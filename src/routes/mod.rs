//! Routers REST de ambos servicios

pub mod car_routes;
pub mod price_routes;
