//! Binario de pricing-service (puerto 8082 por defecto)

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use axum::{response::Json, routing::get, Router};
use dotenvy::dotenv;
use serde_json::json;
use tower_http::trace::TraceLayer;
use tracing::{error, info};

use vehicle_pricing::config::database::{create_pool, ensure_pricing_schema};
use vehicle_pricing::config::EnvironmentConfig;
use vehicle_pricing::middleware::cors::cors_middleware;
use vehicle_pricing::repositories::PgPriceRepository;
use vehicle_pricing::routes::price_routes::create_price_router;
use vehicle_pricing::state::PricingState;
use vehicle_pricing::utils::shutdown::shutdown_signal;

#[tokio::main]
async fn main() -> Result<()> {
    // Cargar variables de entorno
    dotenv().ok();

    let config = EnvironmentConfig::load(8082);

    // Configurar logging
    let level = if config.is_development() {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };
    tracing_subscriber::fmt().with_max_level(level).init();

    info!("💰 Pricing Service");
    info!("==================");

    // Inicializar base de datos
    let pool = match create_pool(None).await {
        Ok(pool) => pool,
        Err(e) => {
            error!("❌ Error conectando a la base de datos: {}", e);
            return Err(anyhow::anyhow!("Error de base de datos: {}", e));
        }
    };
    ensure_pricing_schema(&pool).await?;

    let state = PricingState::new(Arc::new(PgPriceRepository::new(pool)));

    let app = Router::new()
        .route("/health", get(health_endpoint))
        .nest("/prices", create_price_router())
        .layer(TraceLayer::new_for_http())
        .layer(cors_middleware())
        .with_state(state);

    let addr: SocketAddr = config.server_url().parse()?;

    info!("🌐 Servidor iniciando en http://{}", addr);
    info!("🔍 Endpoints disponibles:");
    info!("   GET    /health - Health check");
    info!("   GET    /prices - Listar precios");
    info!("   GET    /prices/:vehicleId - Obtener precio");
    info!("   PUT    /prices/:vehicleId - Crear/reemplazar precio");
    info!("   DELETE /prices/:vehicleId - Eliminar precio");
    info!("   DELETE /prices - Vaciar el store");

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
        "service": "pricing-service",
        "status": "healthy",
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}
