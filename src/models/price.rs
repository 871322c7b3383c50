//! Modelo de Price
//!
//! Precio persistido de un vehículo (pricing-service) y la
//! representación wire que consume vehicles-api al enriquecer.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// Precio persistido - mapea a la tabla prices con primary key 'vehicle_id'
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Price {
    pub vehicle_id: i64,
    pub currency: String,
    pub price: Decimal,
}

/// Request para crear o reemplazar el precio de un vehículo
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct SavePriceRequest {
    /// Código de moneda corto, ej. "USD"
    #[validate(length(min = 3, max = 3))]
    pub currency: String,

    pub price: Decimal,
}

/// Respuesta wire del pricing-service tal como la ve vehicles-api.
///
/// Todos los campos son opcionales: una falla enmascarada del downstream
/// produce el objeto default y por tanto el string literal "null null".
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PriceQuote {
    pub vehicle_id: Option<i64>,
    pub currency: Option<String>,
    pub price: Option<Decimal>,
}

impl PriceQuote {
    /// Formatea el precio para mostrar: "{monto} {moneda}"
    pub fn display(&self) -> String {
        let amount = self
            .price
            .map(|p| p.to_string())
            .unwrap_or_else(|| "null".to_string());
        let currency = self.currency.as_deref().unwrap_or("null");
        format!("{} {}", amount, currency)
    }
}

impl From<Price> for PriceQuote {
    fn from(price: Price) -> Self {
        Self {
            vehicle_id: Some(price.vehicle_id),
            currency: Some(price.currency),
            price: Some(price.price),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_with_values() {
        let quote = PriceQuote {
            vehicle_id: Some(100),
            currency: Some("USD".to_string()),
            price: Some(Decimal::from(3500)),
        };
        assert_eq!(quote.display(), "3500 USD");
    }

    #[test]
    fn test_display_default_is_null_null() {
        // El objeto default reproduce el placeholder del flujo enmascarado
        assert_eq!(PriceQuote::default().display(), "null null");
    }

    #[test]
    fn test_quote_from_stored_price() {
        let price = Price {
            vehicle_id: 7,
            currency: "EUR".to_string(),
            price: Decimal::new(129999, 2),
        };
        let quote = PriceQuote::from(price);
        assert_eq!(quote.display(), "1299.99 EUR");
    }
}
