//! Binario de vehicles-api (puerto 8080 por defecto)

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use axum::{response::Json, routing::get, Router};
use dotenvy::dotenv;
use serde_json::json;
use tower_http::trace::TraceLayer;
use tracing::{error, info};

use vehicle_pricing::config::database::{create_pool, ensure_vehicle_schema};
use vehicle_pricing::config::EnvironmentConfig;
use vehicle_pricing::middleware::cors::cors_middleware;
use vehicle_pricing::repositories::PgCarRepository;
use vehicle_pricing::routes::car_routes::create_car_router;
use vehicle_pricing::state::AppState;
use vehicle_pricing::utils::shutdown::shutdown_signal;

#[tokio::main]
async fn main() -> Result<()> {
    // Cargar variables de entorno
    dotenv().ok();

    let config = EnvironmentConfig::load(8080);

    // Configurar logging
    let level = if config.is_development() {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };
    tracing_subscriber::fmt().with_max_level(level).init();

    info!("🚗 Vehicles API");
    info!("===============");

    // Inicializar base de datos
    let pool = match create_pool(None).await {
        Ok(pool) => pool,
        Err(e) => {
            error!("❌ Error conectando a la base de datos: {}", e);
            return Err(anyhow::anyhow!("Error de base de datos: {}", e));
        }
    };
    ensure_vehicle_schema(&pool).await?;

    let store = Arc::new(PgCarRepository::new(pool));
    let app_state = AppState::new(config.clone(), store);

    let app = Router::new()
        .route("/health", get(health_endpoint))
        .nest("/cars", create_car_router())
        .layer(TraceLayer::new_for_http())
        .layer(cors_middleware())
        .with_state(app_state);

    let addr: SocketAddr = config.server_url().parse()?;

    info!("🌐 Servidor iniciando en http://{}", addr);
    info!("🔍 Endpoints disponibles:");
    info!("   GET    /health - Health check");
    info!("   GET    /cars - Listar vehículos");
    info!("   GET    /cars/:id - Obtener vehículo enriquecido");
    info!("   POST   /cars - Crear vehículo");
    info!("   PUT    /cars/:id - Actualizar vehículo");
    info!("   DELETE /cars/:id - Eliminar vehículo");
    info!("🗺️ Maps endpoint: {}", config.maps_endpoint);
    info!("🔭 Discovery registry: {}", config.discovery_url);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| {
            error!("❌ Error del servidor: {}", e);
            e
        })?;

    info!("👋 Servidor terminado");
    Ok(())
}

/// Health check simple
async fn health_endpoint() -> Json<serde_json::Value> {
    Json(json!({
        "service": "vehicles-api",
        "status": "healthy",
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}
