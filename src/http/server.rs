//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create the Axum Router with all handlers
//! - Wire up middleware (request ID, tracing, timeout, body limit, metrics)
//! - Serve on a bound listener until shutdown is signalled

use std::time::Duration;

use axum::{
    extract::DefaultBodyLimit,
    middleware,
    routing::get,
    Router,
};
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower_http::{limit::RequestBodyLimitLayer, timeout::TimeoutLayer, trace::TraceLayer};

use crate::config::RegistryConfig;
use crate::http::handlers::{
    create_customer, delete_customer, get_customer, health, index, list_customers,
    update_customer,
};
use crate::http::request::{make_request_span, propagate_request_id_layer, set_request_id_layer};
use crate::lifecycle::shutdown::wait_for;
use crate::observability::metrics;
use crate::store::CustomerStore;

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    pub store: CustomerStore,
}

/// HTTP server for the customer registry.
pub struct HttpServer {
    router: Router,
    store: CustomerStore,
}

impl HttpServer {
    /// Create a new HTTP server, seeding the store if configured to.
    pub fn new(config: RegistryConfig) -> Self {
        let store = if config.store.seed {
            CustomerStore::seeded()
        } else {
            CustomerStore::new()
        };
        Self::with_store(config, store)
    }

    /// Create a server around an existing store.
    pub fn with_store(config: RegistryConfig, store: CustomerStore) -> Self {
        let router = build_app(&config, store.clone());
        Self { router, store }
    }

    /// Run the server on `listener` until `shutdown` fires, then drain
    /// in-flight requests.
    pub async fn run(
        self,
        listener: TcpListener,
        shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        let customers = self.store.len().await;
        tracing::info!(
            address = %addr,
            customers,
            "HTTP server starting"
        );

        axum::serve(listener, self.router)
            .with_graceful_shutdown(wait_for(shutdown))
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }

    /// Get a handle to the record store.
    pub fn store(&self) -> &CustomerStore {
        &self.store
    }
}

/// Build the Axum router with all middleware layers.
pub fn build_app(config: &RegistryConfig, store: CustomerStore) -> Router {
    let state = AppState { store };

    let router = Router::new()
        .route("/", get(index))
        .route("/health", get(health))
        .route("/customers", get(list_customers).post(create_customer))
        .route(
            "/customers/{id}",
            get(get_customer).put(update_customer).delete(delete_customer),
        )
        .route_layer(middleware::from_fn(metrics::track_requests))
        .with_state(state);

    with_middleware(router, config)
}

/// Wrap `router` in the request-level layers: body limit, timeout,
/// request id and tracing. A request running past `timeouts.request_secs`
/// is answered with 408.
#[allow(deprecated)]
fn with_middleware(router: Router, config: &RegistryConfig) -> Router {
    router
        .layer(DefaultBodyLimit::disable())
        .layer(RequestBodyLimitLayer::new(config.limits.max_body_size))
        .layer(TimeoutLayer::new(Duration::from_secs(config.timeouts.request_secs)))
        .layer(propagate_request_id_layer())
        .layer(TraceLayer::new_for_http().make_span_with(make_request_span))
        .layer(set_request_id_layer())
}

#[cfg(test)]
mod tests {
    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use tower::ServiceExt;

    use super::*;

    fn slow_router() -> Router {
        Router::new().route(
            "/slow",
            get(|| async {
                tokio::time::sleep(Duration::from_secs(10)).await;
                "late"
            }),
        )
    }

    #[tokio::test]
    async fn test_request_past_timeout_is_408() {
        let mut config = RegistryConfig::default();
        config.timeouts.request_secs = 1;

        let response = with_middleware(slow_router(), &config)
            .oneshot(Request::builder().uri("/slow").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::REQUEST_TIMEOUT);
        assert!(response.headers().contains_key("x-request-id"));
    }

    #[tokio::test]
    async fn test_server_exposes_its_store() {
        let store = CustomerStore::seeded();
        let server = HttpServer::with_store(RegistryConfig::default(), store.clone());

        server.store().delete("1").await.unwrap();
        assert_eq!(store.len().await, 3);
    }
}
