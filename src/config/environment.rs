//! Configuración de variables de entorno
//!
//! Este módulo maneja la configuración del entorno para los dos
//! binarios: vehicles-api (puerto 8080) y pricing-service (puerto 8082).

use std::env;

/// Configuración del entorno
#[derive(Debug, Clone)]
pub struct EnvironmentConfig {
    pub environment: String,
    pub host: String,
    pub port: u16,
    /// Endpoint base del servicio de mapas (boogle-maps)
    pub maps_endpoint: String,
    /// URL del registro de service discovery
    pub discovery_url: String,
}

impl EnvironmentConfig {
    /// Carga la configuración desde variables de entorno.
    /// `default_port` lo fija cada binario (8080 vehicles, 8082 pricing).
    pub fn load(default_port: u16) -> Self {
        Self {
            environment: env::var("ENVIRONMENT").unwrap_or_else(|_| "development".to_string()),
            host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(default_port),
            maps_endpoint: env::var("MAPS_ENDPOINT")
                .unwrap_or_else(|_| "http://localhost:9191".to_string()),
            discovery_url: env::var("DISCOVERY_URL")
                .unwrap_or_else(|_| "http://localhost:8761".to_string()),
        }
    }

    /// Verificar si estamos en modo desarrollo
    pub fn is_development(&self) -> bool {
        self.environment == "development"
    }

    /// Obtener la dirección de bind del servidor
    pub fn server_url(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_port_is_used() {
        // PORT no suele estar definido en el entorno de tests
        if env::var("PORT").is_err() {
            let config = EnvironmentConfig::load(8082);
            assert_eq!(config.port, 8082);
        }
    }

    #[test]
    fn test_server_url_format() {
        let config = EnvironmentConfig {
            environment: "development".to_string(),
            host: "0.0.0.0".to_string(),
            port: 8080,
            maps_endpoint: "http://localhost:9191".to_string(),
            discovery_url: "http://localhost:8761".to_string(),
        };
        assert_eq!(config.server_url(), "0.0.0.0:8080");
        assert!(config.is_development());
    }
}
