//! Shared application state
//!
//! Este módulo define el estado compartido que se pasa a través de
//! los routers de Axum, uno por servicio.

use std::sync::Arc;

use crate::clients::{DiscoveryClient, MapsClient, PricingClient};
use crate::config::EnvironmentConfig;
use crate::repositories::{CarStore, PriceStore};
use crate::services::CarService;

/// Estado de vehicles-api
#[derive(Clone)]
pub struct AppState {
    pub config: EnvironmentConfig,
    pub car_service: Arc<CarService>,
}

impl AppState {
    pub fn new(config: EnvironmentConfig, cars: Arc<dyn CarStore>) -> Self {
        let discovery = DiscoveryClient::new(config.discovery_url.clone());
        let car_service = Arc::new(CarService::new(
            cars,
            discovery,
            PricingClient::new(),
            MapsClient::new(),
            config.maps_endpoint.clone(),
        ));

        Self {
            config,
            car_service,
        }
    }
}

/// Estado de pricing-service
#[derive(Clone)]
pub struct PricingState {
    pub prices: Arc<dyn PriceStore>,
}

impl PricingState {
    pub fn new(prices: Arc<dyn PriceStore>) -> Self {
        Self { prices }
    }
}
