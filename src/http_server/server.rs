//! # HTTP Server
//!
//! Main HTTP server combining the book, documentation, and liveness routers
//! behind the CORS, security header, and request tracing layers.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::http::{header, HeaderName, HeaderValue};
use axum::Router;
use tokio::net::TcpListener;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::set_header::SetResponseHeaderLayer;
use tower_http::trace::TraceLayer;

use crate::store::BookStore;

use super::book_routes::{book_routes, BookState};
use super::config::HttpServerConfig;
use super::docs_routes::{docs_routes, DOCS_PATH};
use super::errors::HttpServerError;
use super::observability_routes::health_routes;

/// Response headers applied to every response unless a handler set them
const SECURITY_HEADERS: [(&str, &str); 4] = [
    ("x-content-type-options", "nosniff"),
    ("x-frame-options", "SAMEORIGIN"),
    ("referrer-policy", "no-referrer"),
    ("x-dns-prefetch-control", "off"),
];

/// HTTP server for the books API
pub struct HttpServer {
    config: HttpServerConfig,
    router: Router,
}

impl HttpServer {
    /// Create a server over an already loaded store
    pub fn new(config: HttpServerConfig, store: BookStore) -> Self {
        let state = Arc::new(BookState::new(store));
        let router = Self::build_router(&config, state);
        Self { config, router }
    }

    /// Build the combined router with all endpoints
    fn build_router(config: &HttpServerConfig, state: Arc<BookState>) -> Router {
        let cors = if config.cors_origins.is_empty() {
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any)
        } else {
            let origins: Vec<HeaderValue> = config
                .cors_origins
                .iter()
                .filter_map(|s| s.parse().ok())
                .collect();

            CorsLayer::new()
                .allow_origin(AllowOrigin::list(origins))
                .allow_methods(Any)
                .allow_headers([header::CONTENT_TYPE])
        };

        let mut router = Router::new()
            .merge(health_routes())
            .merge(docs_routes())
            .merge(book_routes(state));

        for (name, value) in SECURITY_HEADERS {
            router = router.layer(SetResponseHeaderLayer::if_not_present(
                HeaderName::from_static(name),
                HeaderValue::from_static(value),
            ));
        }

        router.layer(cors).layer(TraceLayer::new_for_http())
    }

    /// Get the socket address
    pub fn socket_addr(&self) -> String {
        self.config.socket_addr()
    }

    /// Get the router (for testing)
    pub fn router(self) -> Router {
        self.router
    }

    /// Start the HTTP server
    pub async fn start(self) -> Result<(), HttpServerError> {
        let addr: SocketAddr = self.config.socket_addr().parse().map_err(|_| {
            HttpServerError::Config(format!("Invalid socket address: {}", self.config.socket_addr()))
        })?;

        let listener = TcpListener::bind(addr).await?;

        tracing::info!(%addr, db = %self.config.db_path.display(), "library API listening");
        tracing::info!("  GET    /           - liveness");
        tracing::info!("  GET    /health     - health check");
        tracing::info!("  GET    {}   - OpenAPI document", DOCS_PATH);
        tracing::info!("  GET    /books      - list books");
        tracing::info!("  POST   /books      - create book");
        tracing::info!("  GET    /books/:id  - get book");
        tracing::info!("  PUT    /books/:id  - update book");
        tracing::info!("  DELETE /books/:id  - delete book");

        axum::serve(listener, self.router).await?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use tower::util::ServiceExt;

    fn server(port: u16) -> HttpServer {
        HttpServer::new(
            HttpServerConfig::with_port(port),
            BookStore::empty("unused-db.json"),
        )
    }

    #[test]
    fn test_server_with_custom_port() {
        assert_eq!(server(8080).socket_addr(), "0.0.0.0:8080");
    }

    #[tokio::test]
    async fn test_security_headers_applied() {
        let response = server(4000)
            .router()
            .oneshot(Request::builder().uri("/books").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response.headers()["x-content-type-options"], "nosniff");
        assert_eq!(response.headers()["x-frame-options"], "SAMEORIGIN");
    }

    #[tokio::test]
    async fn test_cors_allows_any_origin_by_default() {
        let response = server(4000)
            .router()
            .oneshot(
                Request::builder()
                    .uri("/")
                    .header("origin", "http://example.com")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.headers()["access-control-allow-origin"], "*");
    }

    #[tokio::test]
    async fn test_docs_endpoint() {
        let response = server(4000)
            .router()
            .oneshot(Request::builder().uri(DOCS_PATH).body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }
}
