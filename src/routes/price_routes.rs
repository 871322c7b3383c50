//! Rutas REST de precios (pricing-service)

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use validator::Validate;

use crate::models::price::{Price, SavePriceRequest};
use crate::state::PricingState;
use crate::utils::errors::{not_found_error, AppResult};

pub fn create_price_router() -> Router<PricingState> {
    Router::new()
        .route("/", get(list_prices).delete(delete_all_prices))
        .route(
            "/:vehicle_id",
            get(get_price).put(put_price).delete(delete_price),
        )
}

/// Listar todos los precios almacenados
async fn list_prices(State(state): State<PricingState>) -> AppResult<Json<Vec<Price>>> {
    let prices = state.prices.find_all().await?;
    Ok(Json(prices))
}

/// Obtener el precio de un vehículo
async fn get_price(
    State(state): State<PricingState>,
    Path(vehicle_id): Path<i64>,
) -> AppResult<Json<Price>> {
    let price = state
        .prices
        .find_by_id(vehicle_id)
        .await?
        .ok_or_else(|| not_found_error("Price", vehicle_id))?;

    Ok(Json(price))
}

/// Crear o reemplazar el precio de un vehículo (reemplazo completo)
async fn put_price(
    State(state): State<PricingState>,
    Path(vehicle_id): Path<i64>,
    Json(request): Json<SavePriceRequest>,
) -> AppResult<Json<Price>> {
    request.validate()?;

    let price = state
        .prices
        .save(Price {
            vehicle_id,
            currency: request.currency,
            price: request.price,
        })
        .await?;

    Ok(Json(price))
}

/// Eliminar el precio de un vehículo
async fn delete_price(
    State(state): State<PricingState>,
    Path(vehicle_id): Path<i64>,
) -> AppResult<StatusCode> {
    if !state.prices.delete_by_id(vehicle_id).await? {
        return Err(not_found_error("Price", vehicle_id));
    }

    Ok(StatusCode::NO_CONTENT)
}

/// Vaciar el store de precios
async fn delete_all_prices(State(state): State<PricingState>) -> AppResult<StatusCode> {
    state.prices.delete_all().await?;
    Ok(StatusCode::NO_CONTENT)
}
