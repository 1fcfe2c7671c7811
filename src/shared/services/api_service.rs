#[cfg(target_arch = "wasm32")]
use reqwasm::http::Request;

use serde::de::DeserializeOwned;

use crate::config::ApiConfig;
use crate::domain::models::OrderCollection;
use crate::shared::errors::{AppError, Result};
use crate::shared::logging;

const UPCOMING_ENDPOINT: &str = "upcoming";
const ALL_ENDPOINT: &str = "";

// Orders API client. Requests use library defaults: no headers, retries or timeouts.
#[derive(Debug, Clone, Default)]
pub struct OrdersApi {
    config: ApiConfig,
    #[cfg(not(target_arch = "wasm32"))]
    client: reqwest::Client,
}

impl OrdersApi {
    pub fn new(config: ApiConfig) -> Self {
        Self {
            config,
            #[cfg(not(target_arch = "wasm32"))]
            client: reqwest::Client::new(),
        }
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    // Generic GET request
    pub async fn get<T: DeserializeOwned>(&self, endpoint: &str) -> Result<T> {
        let url = self.config.endpoint_url(endpoint);
        logging::log_fetch_start(endpoint, &url);

        match self.send_get(&url).await {
            Ok(data) => {
                logging::log_fetch_success(endpoint, &url);
                Ok(data)
            }
            Err(e) => {
                logging::log_fetch_error(endpoint, &url, &e.to_string());
                Err(e)
            }
        }
    }

    #[cfg(target_arch = "wasm32")]
    async fn send_get<T: DeserializeOwned>(&self, url: &str) -> Result<T> {
        let response = Request::get(url)
            .send()
            .await
            .map_err(|e| AppError::Network(e.to_string()))?;

        if !response.ok() {
            return Err(AppError::HttpStatus {
                status: response.status(),
                message: response.status_text(),
            });
        }

        response
            .json::<T>()
            .await
            .map_err(|e| AppError::Decode(e.to_string()))
    }

    #[cfg(not(target_arch = "wasm32"))]
    async fn send_get<T: DeserializeOwned>(&self, url: &str) -> Result<T> {
        let response = self.client.get(url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(AppError::HttpStatus {
                status: status.as_u16(),
                message: status.canonical_reason().unwrap_or("Unknown").to_string(),
            });
        }

        let data = response.json::<T>().await?;
        Ok(data)
    }

    /// GET `{base}/upcoming`. Every failure reaches the caller unchanged.
    pub async fn get_upcoming_orders(&self) -> Result<OrderCollection> {
        self.get(UPCOMING_ENDPOINT).await
    }

    /// GET `{base}`. Failures are logged and discarded: the caller gets
    /// `None` and cannot tell a failed request from a missing body.
    ///
    /// Use [`OrdersApi::try_get_all_orders`] to observe the failure.
    pub async fn get_all_orders(&self) -> Option<OrderCollection> {
        match self.try_get_all_orders().await {
            Ok(orders) => Some(orders),
            Err(e) => {
                let url = self.config.endpoint_url(ALL_ENDPOINT);
                logging::log_fetch_error_discarded("all", &url, &e.to_string());
                None
            }
        }
    }

    /// GET `{base}`, propagating failures like [`OrdersApi::get_upcoming_orders`]
    pub async fn try_get_all_orders(&self) -> Result<OrderCollection> {
        self.get(ALL_ENDPOINT).await
    }
}

/// [`OrdersApi::get_upcoming_orders`] against the default configuration
pub async fn get_upcoming_orders() -> Result<OrderCollection> {
    OrdersApi::default().get_upcoming_orders().await
}

/// [`OrdersApi::get_all_orders`] against the default configuration
pub async fn get_all_orders() -> Option<OrderCollection> {
    OrdersApi::default().get_all_orders().await
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;
    use axum::{Json, Router, http::StatusCode, routing::get};
    use pretty_assertions::assert_eq;
    use serde_json::json;

    // Serve `router` on an ephemeral port, returning the `/orders` base URL
    async fn spawn_mock(router: Router) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });
        format!("http://{}/orders", addr)
    }

    // A base URL nothing is listening on
    async fn unreachable_base() -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);
        format!("http://{}/orders", addr)
    }

    fn api(base: &str) -> OrdersApi {
        OrdersApi::new(ApiConfig::new(base).unwrap())
    }

    fn failing_router() -> Router {
        let fail = || async { (StatusCode::INTERNAL_SERVER_ERROR, "boom") };
        Router::new()
            .route("/orders", get(fail))
            .route("/orders/upcoming", get(fail))
    }

    #[tokio::test]
    async fn test_get_upcoming_orders_returns_body() {
        let router = Router::new().route(
            "/orders/upcoming",
            get(|| async { Json(json!({ "items": [] })) }),
        );
        let base = spawn_mock(router).await;

        let orders = api(&base).get_upcoming_orders().await.unwrap();
        assert_eq!(orders, json!({ "items": [] }));
    }

    #[tokio::test]
    async fn test_get_upcoming_orders_propagates_server_error() {
        let base = spawn_mock(failing_router()).await;

        let err = api(&base).get_upcoming_orders().await.unwrap_err();
        assert_eq!(err.status(), Some(500));
    }

    #[tokio::test]
    async fn test_get_upcoming_orders_propagates_network_error() {
        let base = unreachable_base().await;

        let err = api(&base).get_upcoming_orders().await.unwrap_err();
        assert!(matches!(err, AppError::Network(_)), "got {err:?}");
    }

    #[tokio::test]
    async fn test_get_upcoming_orders_rejects_malformed_json() {
        let router = Router::new().route("/orders/upcoming", get(|| async { "not json" }));
        let base = spawn_mock(router).await;

        let err = api(&base).get_upcoming_orders().await.unwrap_err();
        assert!(matches!(err, AppError::Decode(_)), "got {err:?}");
    }

    #[tokio::test]
    async fn test_get_all_orders_returns_body() {
        let router = Router::new().route("/orders", get(|| async { Json(json!([{ "id": 1 }])) }));
        let base = spawn_mock(router).await;

        let orders = api(&base).get_all_orders().await;
        assert_eq!(orders, Some(json!([{ "id": 1 }])));
    }

    #[tokio::test]
    async fn test_get_all_orders_swallows_network_error() {
        let base = unreachable_base().await;

        assert_eq!(api(&base).get_all_orders().await, None);
    }

    #[tokio::test]
    async fn test_get_all_orders_swallows_server_error() {
        let base = spawn_mock(failing_router()).await;

        assert_eq!(api(&base).get_all_orders().await, None);
    }

    #[tokio::test]
    async fn test_try_get_all_orders_propagates_errors() {
        let base = spawn_mock(failing_router()).await;
        let err = api(&base).try_get_all_orders().await.unwrap_err();
        assert_eq!(err.status(), Some(500));

        let base = unreachable_base().await;
        let err = api(&base).try_get_all_orders().await.unwrap_err();
        assert!(matches!(err, AppError::Network(_)), "got {err:?}");
    }

    #[tokio::test]
    async fn test_generic_get_deserializes_typed_body() {
        #[derive(Debug, PartialEq, serde::Deserialize)]
        struct Order {
            id: u32,
        }

        let router = Router::new().route(
            "/orders/upcoming",
            get(|| async { Json(json!([{ "id": 4 }, { "id": 5 }])) }),
        );
        let base = spawn_mock(router).await;

        let orders: Vec<Order> = api(&base).get("upcoming").await.unwrap();
        assert_eq!(orders, vec![Order { id: 4 }, Order { id: 5 }]);
    }
}
