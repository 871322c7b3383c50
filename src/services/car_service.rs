//! Servicio de orquestación de vehículos
//!
//! Compone el store de vehículos, el registro de discovery y los
//! clientes de pricing y mapas para list/get/save/delete. Las lecturas
//! se enriquecen con precio y dirección en vivo; el enriquecimiento
//! nunca se persiste.

use std::sync::Arc;

use tracing::warn;

use crate::clients::{DiscoveryClient, MapsClient, PricingClient};
use crate::models::car::{Car, Condition, Details, Location};
use crate::repositories::CarStore;
use crate::utils::errors::{not_found_error, AppError};

/// Nombre lógico del pricing-service en el registro de discovery
pub const PRICING_SERVICE: &str = "pricing-service";

pub struct CarService {
    store: Arc<dyn CarStore>,
    discovery: DiscoveryClient,
    pricing: PricingClient,
    maps: MapsClient,
    maps_endpoint: String,
}

impl CarService {
    pub fn new(
        store: Arc<dyn CarStore>,
        discovery: DiscoveryClient,
        pricing: PricingClient,
        maps: MapsClient,
        maps_endpoint: String,
    ) -> Self {
        Self {
            store,
            discovery,
            pricing,
            maps,
            maps_endpoint,
        }
    }

    /// Lista todos los vehículos tal como están almacenados, sin enriquecer
    pub async fn list(&self) -> Result<Vec<Car>, AppError> {
        self.store.find_all().await
    }

    /// Busca un vehículo por id y lo enriquece con precio y dirección.
    ///
    /// Las fallas de los downstreams de enriquecimiento se enmascaran
    /// con placeholders ("null null" / dirección vacía) y nunca se
    /// propagan al caller. Un registro de discovery sin instancias sí
    /// es un error que se propaga.
    pub async fn find_by_id(&self, id: i64) -> Result<Car, AppError> {
        let mut car = self
            .store
            .find_by_id(id)
            .await?
            .ok_or_else(|| not_found_error("Car", id))?;

        let pricing_uri = self.discovery.resolve(PRICING_SERVICE).await?;

        let price_lookup = self.pricing.price_for_vehicle(&pricing_uri, id).await;
        if price_lookup.degraded {
            warn!("Respuesta de pricing degradada para vehículo {}", id);
        }
        car.price = Some(price_lookup.quote.display());

        let address_lookup = self
            .maps
            .address_for(&self.maps_endpoint, car.location.lat, car.location.lon)
            .await;
        if address_lookup.degraded {
            warn!("Respuesta de mapas degradada para vehículo {}", id);
        }
        car.location.address = address_lookup.address.address;
        car.location.city = address_lookup.address.city;
        car.location.state = address_lookup.address.state;
        car.location.zip = address_lookup.address.zip;

        Ok(car)
    }

    /// Upsert por chequeo de existencia.
    ///
    /// Si el id existe, solo details y location se copian al registro
    /// almacenado. Si no existe (o el id es null), se inserta un
    /// registro nuevo con id asignado por el store. El chequeo y la
    /// escritura no son atómicos: dos saves concurrentes del mismo id
    /// nuevo pueden tomar ambos la rama de insert.
    pub async fn save(
        &self,
        id: Option<i64>,
        condition: Condition,
        details: Details,
        location: Location,
    ) -> Result<Car, AppError> {
        if let Some(id) = id {
            if self.store.exists_by_id(id).await? {
                return self.store.update_details(id, details, location).await;
            }
        }

        self.store.insert(condition, details, location).await
    }

    /// Elimina un vehículo por id; NotFound si no existe
    pub async fn delete(&self, id: i64) -> Result<(), AppError> {
        if !self.store.delete_by_id(id).await? {
            return Err(not_found_error("Car", id));
        }

        Ok(())
    }
}
