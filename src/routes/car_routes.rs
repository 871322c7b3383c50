//! Rutas REST de vehículos (vehicles-api)

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use validator::Validate;

use crate::models::car::{Car, SaveCarRequest};
use crate::state::AppState;
use crate::utils::errors::AppResult;

pub fn create_car_router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_cars).post(create_car))
        .route("/:id", get(get_car).put(update_car).delete(delete_car))
}

/// Listar todos los vehículos sin enriquecer
async fn list_cars(State(state): State<AppState>) -> AppResult<Json<Vec<Car>>> {
    let cars = state.car_service.list().await?;
    Ok(Json(cars))
}

/// Obtener un vehículo enriquecido con precio y dirección
async fn get_car(State(state): State<AppState>, Path(id): Path<i64>) -> AppResult<Json<Car>> {
    let car = state.car_service.find_by_id(id).await?;
    Ok(Json(car))
}

/// Crear un vehículo nuevo; el store asigna el id
async fn create_car(
    State(state): State<AppState>,
    Json(request): Json<SaveCarRequest>,
) -> AppResult<(StatusCode, Json<Car>)> {
    request.validate()?;

    let car = state
        .car_service
        .save(None, request.condition, request.details, request.location)
        .await?;

    Ok((StatusCode::CREATED, Json(car)))
}

/// Upsert sobre el id de la ruta: actualiza details/location si existe,
/// inserta un registro nuevo si no
async fn update_car(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(request): Json<SaveCarRequest>,
) -> AppResult<Json<Car>> {
    request.validate()?;

    let car = state
        .car_service
        .save(Some(id), request.condition, request.details, request.location)
        .await?;

    Ok(Json(car))
}

/// Eliminar un vehículo por id
async fn delete_car(State(state): State<AppState>, Path(id): Path<i64>) -> AppResult<StatusCode> {
    state.car_service.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
