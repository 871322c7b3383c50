//! Tests de la superficie REST de vehicles-api

use std::net::SocketAddr;
use std::sync::Arc;

use axum::extract::Path;
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use serde_json::json;

use vehicle_pricing::config::EnvironmentConfig;
use vehicle_pricing::repositories::InMemoryCarRepository;
use vehicle_pricing::routes::car_routes::create_car_router;
use vehicle_pricing::state::AppState;

async fn spawn_app(app: Router) -> SocketAddr {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    addr
}

/// Levanta registry + pricing + maps mocks y la app de vehicles encima
async fn spawn_vehicles_app() -> String {
    let pricing = Router::new().route(
        "/prices/:id",
        get(|Path(id): Path<i64>| async move {
            Json(json!({ "vehicleId": id, "currency": "USD", "price": 21600 }))
        }),
    );
    let pricing_uri = format!("http://{}", spawn_app(pricing).await);

    let registry_body = json!([{ "instanceId": "pricing-1", "uri": pricing_uri }]);
    let registry = Router::new().route(
        "/services/pricing-service",
        get(move || {
            let body = registry_body.clone();
            async move { Json(body) }
        }),
    );
    let registry_uri = format!("http://{}", spawn_app(registry).await);

    let maps = Router::new().route(
        "/maps",
        get(|| async {
            Json(json!({
                "address": "1 Backend Road",
                "city": "Valencia",
                "state": "VC",
                "zip": "46001"
            }))
        }),
    );
    let maps_uri = format!("http://{}", spawn_app(maps).await);

    let config = EnvironmentConfig {
        environment: "test".to_string(),
        host: "127.0.0.1".to_string(),
        port: 0,
        maps_endpoint: maps_uri,
        discovery_url: registry_uri,
    };
    let state = AppState::new(config, Arc::new(InMemoryCarRepository::new()));
    let app = Router::new()
        .nest("/cars", create_car_router())
        .with_state(state);

    format!("http://{}", spawn_app(app).await)
}

fn sample_car_body() -> serde_json::Value {
    json!({
        "condition": "USED",
        "details": {
            "body": "sedan",
            "model": "Impala",
            "manufacturer": "Chevrolet",
            "numberOfDoors": 4,
            "fuelType": "Gasoline",
            "mileage": 32280,
            "modelYear": 2018,
            "productionYear": 2018,
            "externalColor": "white"
        },
        "location": { "lat": 40.73061, "lon": -73.935242 }
    })
}

#[tokio::test]
async fn test_create_then_get_enriched_car() {
    let base = spawn_vehicles_app().await;
    let client = reqwest::Client::new();

    let response = client
        .post(format!("{}/cars", base))
        .json(&sample_car_body())
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED.as_u16());
    let created: serde_json::Value = response.json().await.unwrap();
    let id = created["id"].as_i64().unwrap();
    assert!(created.get("price").is_none());

    let car: serde_json::Value = client
        .get(format!("{}/cars/{}", base, id))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    assert_eq!(car["price"], "21600 USD");
    assert_eq!(car["location"]["address"], "1 Backend Road");
    assert_eq!(car["location"]["city"], "Valencia");
    assert_eq!(car["details"]["numberOfDoors"], 4);
    assert_eq!(car["condition"], "USED");
}

#[tokio::test]
async fn test_get_missing_car_is_404() {
    let base = spawn_vehicles_app().await;

    let response = reqwest::get(format!("{}/cars/12345", base)).await.unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND.as_u16());
}

#[tokio::test]
async fn test_put_updates_details_and_preserves_condition() {
    let base = spawn_vehicles_app().await;
    let client = reqwest::Client::new();

    let created: serde_json::Value = client
        .post(format!("{}/cars", base))
        .json(&sample_car_body())
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    let id = created["id"].as_i64().unwrap();

    let mut update = sample_car_body();
    update["condition"] = json!("NEW"); // se ignora en el update
    update["details"]["model"] = json!("Malibu");

    let updated: serde_json::Value = client
        .put(format!("{}/cars/{}", base, id))
        .json(&update)
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    assert_eq!(updated["id"], id);
    assert_eq!(updated["details"]["model"], "Malibu");
    assert_eq!(updated["condition"], "USED");
}

#[tokio::test]
async fn test_invalid_latitude_is_rejected() {
    let base = spawn_vehicles_app().await;
    let client = reqwest::Client::new();

    let mut body = sample_car_body();
    body["location"]["lat"] = json!(999.0);

    let response = client
        .post(format!("{}/cars", base))
        .json(&body)
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST.as_u16());
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["code"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_delete_car_lifecycle() {
    let base = spawn_vehicles_app().await;
    let client = reqwest::Client::new();

    let created: serde_json::Value = client
        .post(format!("{}/cars", base))
        .json(&sample_car_body())
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    let id = created["id"].as_i64().unwrap();

    let response = client
        .delete(format!("{}/cars/{}", base, id))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NO_CONTENT.as_u16());

    let response = client
        .delete(format!("{}/cars/{}", base, id))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND.as_u16());

    let cars: serde_json::Value = client
        .get(format!("{}/cars", base))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(cars.as_array().unwrap().len(), 0);
}
