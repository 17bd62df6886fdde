//! AirWise Cloud Server
//!
//! HTTP front-end for the AirWise risk engine.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                      AIRWISE CLOUD                          │
//! ├─────────────────────────────────────────────────────────────┤
//! │  ┌───────────┐  ┌────────────────┐  ┌────────────────────┐  │
//! │  │  API      │  │  Assessor      │  │  Health model      │  │
//! │  │  (Axum)   │──│  (risk engine) │──│  (ONNX, optional)  │  │
//! │  └───────────┘  └───────┬────────┘  └────────────────────┘  │
//! │                         ▼                                   │
//! │                ┌─────────────────┐                          │
//! │                │  OpenWeather    │                          │
//! │                │  weather + air  │                          │
//! │                └─────────────────┘                          │
//! └─────────────────────────────────────────────────────────────┘
//! ```

mod config;
mod models;
mod handlers;
mod error;

use std::net::SocketAddr;
use std::sync::Arc;

use axum::{
    Router,
    routing::{get, post},
};
use tower_http::{
    cors::{CorsLayer, Any},
    trace::TraceLayer,
    compression::CompressionLayer,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use airwise_core::logic::feeds::{ConditionsSource, FeedError, NotConfiguredSource, OpenWeatherClient};
use airwise_core::logic::model::load_health_model;
use airwise_core::Assessor;

pub use error::{AppError, AppResult};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration
    dotenvy::dotenv().ok();
    let config = config::Config::from_env();

    // Initialize logging
    let production = config.is_production();
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| "airwise_cloud=debug,tower_http=debug".into()))
        .with(production.then(|| tracing_subscriber::fmt::layer().json()))
        .with((!production).then(|| tracing_subscriber::fmt::layer()))
        .init();

    tracing::info!("AirWise Cloud Server starting...");

    // Health model
    let model = load_health_model(config.model_path.as_deref())?;
    match &model {
        Some(m) => tracing::info!("Health model loaded: {}", m.name()),
        None => tracing::warn!("No health model configured, ML prediction disabled"),
    }

    // Live feeds
    let source: Arc<dyn ConditionsSource> = match OpenWeatherClient::new(config.feed.clone()) {
        Ok(client) => {
            tracing::info!("OpenWeather feeds: {}", client.base_url());
            Arc::new(client)
        }
        Err(FeedError::NotConfigured) => {
            tracing::warn!("OPENWEATHER_API_KEY not set, /api/v1/assess will be unavailable");
            Arc::new(NotConfiguredSource)
        }
        Err(e) => return Err(e.into()),
    };

    // Build application state
    let state = AppState {
        config: config.clone(),
        assessor: Assessor::new(source, model),
    };

    // Build router
    let app = create_router(state);

    // Start server
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    tracing::info!("Server listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub config: config::Config,
    pub assessor: Assessor,
}

/// Create the main router with all routes
fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health::check))
        .route("/api/v1/assess", post(handlers::assess::assess))
        .route("/api/v1/evaluate", post(handlers::assess::evaluate))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any)
        )
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use serde_json::Value;
    use tower::ServiceExt;

    use airwise_core::logic::feeds::{AirObservation, Conditions, FeedConfig, WeatherObservation};
    use airwise_core::logic::location::Coordinates;

    struct StubSource(Result<Conditions, FeedError>);

    #[async_trait]
    impl ConditionsSource for StubSource {
        async fn fetch(&self, _coords: Coordinates) -> Result<Conditions, FeedError> {
            self.0.clone()
        }
    }

    fn smoggy() -> Conditions {
        Conditions {
            weather: WeatherObservation { temperature: 31.0, humidity: 40.0, wind_speed: 0.8 },
            air: AirObservation { pm10: 150.0, pm2_5: 120.0, no2: 40.0, so2: 5.0, o3: 70.0, aqi: 5 },
        }
    }

    fn app(source: Arc<dyn ConditionsSource>) -> Router {
        let config = config::Config {
            port: 0,
            environment: "test".to_string(),
            feed: FeedConfig::default(),
            model_path: None,
        };
        create_router(AppState {
            config,
            assessor: Assessor::new(source, None),
        })
    }

    async fn post_json(app: Router, uri: &str, body: Value) -> (StatusCode, Value) {
        let request = Request::builder()
            .method("POST")
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap();

        let response = tokio_test::assert_ok!(app.oneshot(request).await);
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_health() {
        let request = Request::builder().uri("/health").body(Body::empty()).unwrap();
        let response = app(Arc::new(NotConfiguredSource)).oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body: Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["status"], "healthy");
        assert_eq!(body["model_loaded"], false);
    }

    #[tokio::test]
    async fn test_assess_live_conditions() {
        let app = app(Arc::new(StubSource(Ok(smoggy()))));
        let (status, body) = post_json(
            app,
            "/api/v1/assess",
            serde_json::json!({
                "latitude": 28.61,
                "longitude": 77.21,
                "profile": {"age": 45, "has_asthma": true},
                "local_health": {"respiratory_cases": 9, "cardiovascular_cases": 2}
            }),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert!(body["assessment_id"].is_string());
        assert_eq!(body["assessment"]["verdict"], "high_risk_asthma");
        assert_eq!(body["summary"]["risk"], "High Risk for Asthma");
        assert_eq!(body["summary"]["personalized_risk"], "Asthma Risk");
        assert_eq!(body["assessment"]["reading"]["respiratory_cases"], 9);
    }

    #[tokio::test]
    async fn test_assess_feed_failure() {
        let failing = StubSource(Err(FeedError::Status { feed: "weather", status: 401 }));
        let (status, body) = post_json(
            app(Arc::new(failing)),
            "/api/v1/assess",
            serde_json::json!({"latitude": 1.0, "longitude": 2.0, "profile": {"age": 30}}),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_GATEWAY);
        assert_eq!(body["status"], 502);
    }

    #[tokio::test]
    async fn test_assess_without_api_key() {
        let (status, _) = post_json(
            app(Arc::new(NotConfiguredSource)),
            "/api/v1/assess",
            serde_json::json!({"latitude": 1.0, "longitude": 2.0, "profile": {"age": 30}}),
        )
        .await;

        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    }

    #[tokio::test]
    async fn test_assess_rejects_invalid_profile() {
        let (status, body) = post_json(
            app(Arc::new(StubSource(Ok(smoggy())))),
            "/api/v1/assess",
            serde_json::json!({"latitude": 1.0, "longitude": 2.0, "profile": {"age": 0}}),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["status"], 400);
    }

    #[tokio::test]
    async fn test_evaluate_offline_reading() {
        let (status, body) = post_json(
            app(Arc::new(NotConfiguredSource)),
            "/api/v1/evaluate",
            serde_json::json!({
                "reading": {
                    "pm10": 40.0, "pm2_5": 20.0, "no2": 95.0, "so2": 4.0, "o3": 30.0,
                    "temperature": 18.0, "humidity": 60.0, "wind_speed": 3.0, "aqi": 170,
                    "respiratory_cases": 2, "cardiovascular_cases": 6
                },
                "profile": {"age": 72, "has_heart_disease": true}
            }),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert!(body.get("location").is_none());
        assert_eq!(body["assessment"]["verdict"], "high_risk_heart");
        assert_eq!(body["assessment"]["ml_prediction"], Value::Null);
        assert_eq!(body["summary"]["personalized_risk"], "Heart Risk, Senior Risk");
    }
}
