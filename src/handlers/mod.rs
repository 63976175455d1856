//! HTTP handlers module
//!
//! Thin request/response mapping over the services. Every route except the
//! health check lives under `/api/v1`.

pub mod accesses;
pub mod groups;
pub mod health;
pub mod lessons;
pub mod products;
pub mod stats;
pub mod users;

use std::sync::Arc;
use axum::routing::{get, post};
use axum::Router;
use tower_http::trace::{DefaultMakeSpan, DefaultOnRequest, DefaultOnResponse, TraceLayer};
use tracing::Level;
use crate::services::ServiceFactory;

/// Shared state handed to every handler
#[derive(Clone)]
pub struct AppState {
    pub services: Arc<ServiceFactory>,
}

impl AppState {
    pub fn new(services: ServiceFactory) -> Self {
        Self {
            services: Arc::new(services),
        }
    }
}

/// Build the application router
pub fn router(state: AppState) -> Router {
    let api = Router::new()
        .route("/users", post(users::register_user))
        .route("/users/{id}", get(users::get_user))
        .route("/products", get(products::list_products).post(products::create_product))
        .route(
            "/products/{id}",
            get(products::get_product)
                .patch(products::update_product)
                .delete(products::delete_product),
        )
        .route("/products/{id}/lessons", get(lessons::product_lessons))
        .route("/lessons", get(lessons::list_lessons).post(lessons::create_lesson))
        .route("/lessons/{id}", get(lessons::get_lesson))
        .route("/groups", get(groups::list_groups))
        .route("/groups/{id}", get(groups::get_group))
        .route("/accesses", post(accesses::grant_access))
        .route("/product-stats", get(stats::list_product_stats))
        .route("/product-stats/{id}", get(stats::get_product_stats));

    Router::new()
        .route("/health", get(health::health))
        .nest("/api/v1", api)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;
    use axum_test::TestServer;
    use crate::config::CatalogConfig;
    use crate::database::MemoryStore;

    fn server() -> TestServer {
        let services = ServiceFactory::new(Arc::new(MemoryStore::new()), CatalogConfig::default());
        TestServer::new(router(AppState::new(services))).unwrap()
    }

    #[tokio::test]
    async fn test_router_serves_health_and_api_prefix() {
        let server = server();

        server.get("/health").await.assert_status_ok();
        server.get("/api/v1/products").await.assert_status_ok();
        server.get("/products").await.assert_status(StatusCode::NOT_FOUND);
    }
}
