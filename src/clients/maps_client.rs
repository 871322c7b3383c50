//! Cliente HTTP del servicio de mapas
//!
//! GET {maps_endpoint}/maps?lat=..&lon=.. — igual que el pricing,
//! cualquier falla se enmascara con una Address vacía.

use std::time::Duration;

use tracing::warn;

use crate::models::address::Address;

/// Resultado de la consulta de dirección
#[derive(Debug, Clone)]
pub struct AddressLookup {
    pub address: Address,
    /// true si la respuesta es el placeholder de una falla enmascarada
    pub degraded: bool,
}

#[derive(Clone)]
pub struct MapsClient {
    client: reqwest::Client,
}

impl MapsClient {
    pub fn new() -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(10))
            .build()
            .expect("Failed to create HTTP client");

        Self { client }
    }

    /// Consulta la dirección para unas coordenadas. Nunca falla.
    pub async fn address_for(&self, maps_endpoint: &str, lat: f64, lon: f64) -> AddressLookup {
        let url = format!("{}/maps", maps_endpoint.trim_end_matches('/'));

        match self.try_fetch(&url, lat, lon).await {
            Ok(address) => AddressLookup {
                address,
                degraded: false,
            },
            Err(e) => {
                warn!("❌ Dirección no disponible para ({}, {}): {}", lat, lon, e);
                AddressLookup {
                    address: Address::default(),
                    degraded: true,
                }
            }
        }
    }

    async fn try_fetch(&self, url: &str, lat: f64, lon: f64) -> Result<Address, reqwest::Error> {
        let response = self
            .client
            .get(url)
            .query(&[("lat", lat), ("lon", lon)])
            .send()
            .await?
            .error_for_status()?;

        response.json::<Address>().await
    }
}

impl Default for MapsClient {
    fn default() -> Self {
        Self::new()
    }
}
