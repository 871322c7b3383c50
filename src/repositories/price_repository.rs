//! Repositorio de precios
//!
//! Store de registros Price con clave primaria vehicle_id.
//! Un save reemplaza el registro completo (sin merge por campo).

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use sqlx::PgPool;
use tokio::sync::RwLock;

use crate::models::price::Price;
use crate::utils::errors::AppError;

/// Interfaz CRUD explícita del store de precios
#[async_trait]
pub trait PriceStore: Send + Sync {
    /// Crea o reemplaza el registro completo para su vehicle_id
    async fn save(&self, price: Price) -> Result<Price, AppError>;
    async fn find_by_id(&self, vehicle_id: i64) -> Result<Option<Price>, AppError>;
    async fn find_all(&self) -> Result<Vec<Price>, AppError>;
    async fn exists_by_id(&self, vehicle_id: i64) -> Result<bool, AppError>;
    /// Devuelve false si no había registro con ese vehicle_id
    async fn delete_by_id(&self, vehicle_id: i64) -> Result<bool, AppError>;
    async fn delete_all(&self) -> Result<(), AppError>;
    async fn count(&self) -> Result<i64, AppError>;
}

/// Implementación PostgreSQL
pub struct PgPriceRepository {
    pool: PgPool,
}

impl PgPriceRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PriceStore for PgPriceRepository {
    async fn save(&self, price: Price) -> Result<Price, AppError> {
        let saved = sqlx::query_as::<_, Price>(
            r#"
            INSERT INTO prices (vehicle_id, currency, price)
            VALUES ($1, $2, $3)
            ON CONFLICT (vehicle_id)
            DO UPDATE SET currency = EXCLUDED.currency, price = EXCLUDED.price
            RETURNING *
            "#,
        )
        .bind(price.vehicle_id)
        .bind(price.currency)
        .bind(price.price)
        .fetch_one(&self.pool)
        .await?;

        Ok(saved)
    }

    async fn find_by_id(&self, vehicle_id: i64) -> Result<Option<Price>, AppError> {
        let price = sqlx::query_as::<_, Price>("SELECT * FROM prices WHERE vehicle_id = $1")
            .bind(vehicle_id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(price)
    }

    async fn find_all(&self) -> Result<Vec<Price>, AppError> {
        let prices = sqlx::query_as::<_, Price>("SELECT * FROM prices ORDER BY vehicle_id")
            .fetch_all(&self.pool)
            .await?;

        Ok(prices)
    }

    async fn exists_by_id(&self, vehicle_id: i64) -> Result<bool, AppError> {
        let result: (bool,) =
            sqlx::query_as("SELECT EXISTS(SELECT 1 FROM prices WHERE vehicle_id = $1)")
                .bind(vehicle_id)
                .fetch_one(&self.pool)
                .await?;

        Ok(result.0)
    }

    async fn delete_by_id(&self, vehicle_id: i64) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM prices WHERE vehicle_id = $1")
            .bind(vehicle_id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn delete_all(&self) -> Result<(), AppError> {
        sqlx::query("DELETE FROM prices").execute(&self.pool).await?;

        Ok(())
    }

    async fn count(&self) -> Result<i64, AppError> {
        let result: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM prices")
            .fetch_one(&self.pool)
            .await?;

        Ok(result.0)
    }
}

/// Implementación en memoria sobre un HashMap compartido
#[derive(Default)]
pub struct InMemoryPriceRepository {
    records: Arc<RwLock<HashMap<i64, Price>>>,
}

impl InMemoryPriceRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl PriceStore for InMemoryPriceRepository {
    async fn save(&self, price: Price) -> Result<Price, AppError> {
        let mut records = self.records.write().await;
        records.insert(price.vehicle_id, price.clone());
        Ok(price)
    }

    async fn find_by_id(&self, vehicle_id: i64) -> Result<Option<Price>, AppError> {
        let records = self.records.read().await;
        Ok(records.get(&vehicle_id).cloned())
    }

    async fn find_all(&self) -> Result<Vec<Price>, AppError> {
        let records = self.records.read().await;
        let mut prices: Vec<Price> = records.values().cloned().collect();
        prices.sort_by_key(|p| p.vehicle_id);
        Ok(prices)
    }

    async fn exists_by_id(&self, vehicle_id: i64) -> Result<bool, AppError> {
        let records = self.records.read().await;
        Ok(records.contains_key(&vehicle_id))
    }

    async fn delete_by_id(&self, vehicle_id: i64) -> Result<bool, AppError> {
        let mut records = self.records.write().await;
        Ok(records.remove(&vehicle_id).is_some())
    }

    async fn delete_all(&self) -> Result<(), AppError> {
        let mut records = self.records.write().await;
        records.clear();
        Ok(())
    }

    async fn count(&self) -> Result<i64, AppError> {
        let records = self.records.read().await;
        Ok(records.len() as i64)
    }
}
