//! Cliente HTTP del pricing-service
//!
//! Cualquier falla de transporte o deserialización se enmascara con
//! un PriceQuote default; el flag degraded distingue el dato real del
//! placeholder para quien quiera saberlo.

use std::time::Duration;

use tracing::warn;

use crate::models::price::PriceQuote;

/// Resultado de la consulta de precio
#[derive(Debug, Clone)]
pub struct PriceLookup {
    pub quote: PriceQuote,
    /// true si la respuesta es el placeholder de una falla enmascarada
    pub degraded: bool,
}

#[derive(Clone)]
pub struct PricingClient {
    client: reqwest::Client,
}

impl PricingClient {
    pub fn new() -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(10))
            .build()
            .expect("Failed to create HTTP client");

        Self { client }
    }

    /// GET {base_uri}/prices/{vehicle_id}. Nunca falla: las fallas del
    /// downstream degradan a un quote vacío.
    pub async fn price_for_vehicle(&self, base_uri: &str, vehicle_id: i64) -> PriceLookup {
        let url = format!(
            "{}/prices/{}",
            base_uri.trim_end_matches('/'),
            vehicle_id
        );

        match self.try_fetch(&url).await {
            Ok(quote) => PriceLookup {
                quote,
                degraded: false,
            },
            Err(e) => {
                warn!("❌ Precio no disponible para vehículo {}: {}", vehicle_id, e);
                PriceLookup {
                    quote: PriceQuote::default(),
                    degraded: true,
                }
            }
        }
    }

    async fn try_fetch(&self, url: &str) -> Result<PriceQuote, reqwest::Error> {
        let response = self.client.get(url).send().await?.error_for_status()?;
        response.json::<PriceQuote>().await
    }
}

impl Default for PricingClient {
    fn default() -> Self {
        Self::new()
    }
}
