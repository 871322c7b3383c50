//! Repositorio de vehículos
//!
//! El store asigna el id en el insert. En el update solo se copian
//! details y location sobre el registro almacenado; id, condition y
//! created_at se preservan y modified_at se refresca.

use std::collections::HashMap;
use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use sqlx::types::Json;
use sqlx::PgPool;
use tokio::sync::RwLock;

use crate::models::car::{Car, Condition, Details, Location};
use crate::utils::errors::{not_found_error, AppError};

/// Interfaz CRUD explícita del store de vehículos
#[async_trait]
pub trait CarStore: Send + Sync {
    /// Inserta un vehículo nuevo; el store asigna id y timestamps
    async fn insert(
        &self,
        condition: Condition,
        details: Details,
        location: Location,
    ) -> Result<Car, AppError>;

    async fn find_by_id(&self, id: i64) -> Result<Option<Car>, AppError>;
    async fn find_all(&self) -> Result<Vec<Car>, AppError>;
    async fn exists_by_id(&self, id: i64) -> Result<bool, AppError>;

    /// Copia details y location sobre el registro existente.
    /// Falla con NotFound si el id no existe.
    async fn update_details(
        &self,
        id: i64,
        details: Details,
        location: Location,
    ) -> Result<Car, AppError>;

    /// Devuelve false si no había registro con ese id
    async fn delete_by_id(&self, id: i64) -> Result<bool, AppError>;
}

/// Row de la tabla cars; details viaja como JSONB
#[derive(sqlx::FromRow)]
struct CarRow {
    id: i64,
    condition: String,
    details: Json<Details>,
    lat: f64,
    lon: f64,
    created_at: chrono::DateTime<Utc>,
    modified_at: chrono::DateTime<Utc>,
}

impl From<CarRow> for Car {
    fn from(row: CarRow) -> Self {
        Car {
            id: row.id,
            condition: Condition::from_db(&row.condition),
            details: row.details.0,
            location: Location::new(row.lat, row.lon),
            price: None,
            created_at: row.created_at,
            modified_at: row.modified_at,
        }
    }
}

/// Implementación PostgreSQL
pub struct PgCarRepository {
    pool: PgPool,
}

impl PgCarRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CarStore for PgCarRepository {
    async fn insert(
        &self,
        condition: Condition,
        details: Details,
        location: Location,
    ) -> Result<Car, AppError> {
        let now = Utc::now();
        let row = sqlx::query_as::<_, CarRow>(
            r#"
            INSERT INTO cars (condition, details, lat, lon, created_at, modified_at)
            VALUES ($1, $2, $3, $4, $5, $5)
            RETURNING *
            "#,
        )
        .bind(condition.as_str())
        .bind(Json(details))
        .bind(location.lat)
        .bind(location.lon)
        .bind(now)
        .fetch_one(&self.pool)
        .await?;

        Ok(row.into())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Car>, AppError> {
        let row = sqlx::query_as::<_, CarRow>("SELECT * FROM cars WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(row.map(Car::from))
    }

    async fn find_all(&self) -> Result<Vec<Car>, AppError> {
        let rows = sqlx::query_as::<_, CarRow>("SELECT * FROM cars ORDER BY id")
            .fetch_all(&self.pool)
            .await?;

        Ok(rows.into_iter().map(Car::from).collect())
    }

    async fn exists_by_id(&self, id: i64) -> Result<bool, AppError> {
        let result: (bool,) = sqlx::query_as("SELECT EXISTS(SELECT 1 FROM cars WHERE id = $1)")
            .bind(id)
            .fetch_one(&self.pool)
            .await?;

        Ok(result.0)
    }

    async fn update_details(
        &self,
        id: i64,
        details: Details,
        location: Location,
    ) -> Result<Car, AppError> {
        let row = sqlx::query_as::<_, CarRow>(
            r#"
            UPDATE cars
            SET details = $2, lat = $3, lon = $4, modified_at = $5
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(Json(details))
        .bind(location.lat)
        .bind(location.lon)
        .bind(Utc::now())
        .fetch_optional(&self.pool)
        .await?;

        row.map(Car::from).ok_or_else(|| not_found_error("Car", id))
    }

    async fn delete_by_id(&self, id: i64) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM cars WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}

/// Implementación en memoria; el contador asigna ids secuenciales
pub struct InMemoryCarRepository {
    records: Arc<RwLock<HashMap<i64, Car>>>,
    next_id: AtomicI64,
}

impl InMemoryCarRepository {
    pub fn new() -> Self {
        Self {
            records: Arc::new(RwLock::new(HashMap::new())),
            next_id: AtomicI64::new(1),
        }
    }
}

impl Default for InMemoryCarRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CarStore for InMemoryCarRepository {
    async fn insert(
        &self,
        condition: Condition,
        details: Details,
        location: Location,
    ) -> Result<Car, AppError> {
        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        let now = Utc::now();
        let car = Car {
            id,
            condition,
            details,
            location,
            price: None,
            created_at: now,
            modified_at: now,
        };

        let mut records = self.records.write().await;
        records.insert(id, car.clone());
        Ok(car)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Car>, AppError> {
        let records = self.records.read().await;
        Ok(records.get(&id).cloned())
    }

    async fn find_all(&self) -> Result<Vec<Car>, AppError> {
        let records = self.records.read().await;
        let mut cars: Vec<Car> = records.values().cloned().collect();
        cars.sort_by_key(|c| c.id);
        Ok(cars)
    }

    async fn exists_by_id(&self, id: i64) -> Result<bool, AppError> {
        let records = self.records.read().await;
        Ok(records.contains_key(&id))
    }

    async fn update_details(
        &self,
        id: i64,
        details: Details,
        location: Location,
    ) -> Result<Car, AppError> {
        let mut records = self.records.write().await;
        let car = records.get_mut(&id).ok_or_else(|| not_found_error("Car", id))?;
        car.details = details;
        car.location = location;
        car.modified_at = Utc::now();
        Ok(car.clone())
    }

    async fn delete_by_id(&self, id: i64) -> Result<bool, AppError> {
        let mut records = self.records.write().await;
        Ok(records.remove(&id).is_some())
    }
}
