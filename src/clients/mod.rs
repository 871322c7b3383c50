//! Clients - HTTP Clients for External APIs
//!
//! Este módulo contiene los clientes HTTP hacia el registro de
//! discovery, el pricing-service y el servicio de mapas.

pub mod discovery_client;
pub mod maps_client;
pub mod pricing_client;

pub use discovery_client::{DiscoveryClient, ServiceInstance};
pub use maps_client::{AddressLookup, MapsClient};
pub use pricing_client::{PriceLookup, PricingClient};
