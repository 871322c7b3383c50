//! Cliente del registro de service discovery
//!
//! Resuelve un nombre lógico de servicio a la URI de la primera
//! instancia registrada. Una lista vacía es un error explícito de
//! ServiceUnavailable, nunca un index silencioso.

use std::time::Duration;

use serde::Deserialize;
use tracing::debug;

use crate::utils::errors::AppError;

/// Instancia registrada tal como la devuelve el registro
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceInstance {
    pub instance_id: String,
    pub uri: String,
}

#[derive(Clone)]
pub struct DiscoveryClient {
    registry_url: String,
    client: reqwest::Client,
}

impl DiscoveryClient {
    pub fn new(registry_url: String) -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(10))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            registry_url,
            client,
        }
    }

    /// Consulta todas las instancias registradas para un servicio
    pub async fn instances(&self, service_name: &str) -> Result<Vec<ServiceInstance>, AppError> {
        let url = format!(
            "{}/services/{}",
            self.registry_url.trim_end_matches('/'),
            service_name
        );
        debug!("Consultando registro de discovery: {}", url);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| AppError::ExternalApi(format!("discovery registry unreachable: {}", e)))?
            .error_for_status()
            .map_err(|e| AppError::ExternalApi(format!("discovery registry error: {}", e)))?;

        response
            .json::<Vec<ServiceInstance>>()
            .await
            .map_err(|e| AppError::ExternalApi(format!("invalid discovery response: {}", e)))
    }

    /// Resuelve un nombre de servicio a la URI de la primera instancia
    pub async fn resolve(&self, service_name: &str) -> Result<String, AppError> {
        let instances = self.instances(service_name).await?;

        instances.into_iter().next().map(|i| i.uri).ok_or_else(|| {
            AppError::ServiceUnavailable(format!(
                "no instances registered for '{}'",
                service_name
            ))
        })
    }
}
