//! HTTP API application wiring (Axum router + middleware stack).
//!
//! If you're new to Rust, this folder is structured like:
//! - `routes/`: HTTP routes + handlers (one file per resource)
//! - `dto.rs`: response DTOs and JSON mapping helpers
//! - `errors.rs`: consistent error responses + the panic hook

use axum::http::{header, HeaderValue};
use axum::{routing::get, Router};
use tower::ServiceBuilder;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::compression::CompressionLayer;
use tower_http::set_header::SetResponseHeaderLayer;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

use crate::middleware;

pub mod dto;
pub mod errors;
pub mod routes;

/// Build the full HTTP router (public entrypoint used by `main.rs` and the
/// black-box tests).
///
/// The middleware chain runs in a fixed order for every request, matched
/// routes and 404 fallback alike: JSON content-type enforcement, request
/// logging, response compression, trailing-slash redirect, panic recovery.
pub fn build_app() -> Router {
    Router::new()
        .route("/health", get(routes::system::health))
        .nest("/v1", routes::router())
        .layer(
            ServiceBuilder::new()
                .layer(SetResponseHeaderLayer::if_not_present(
                    header::CONTENT_TYPE,
                    HeaderValue::from_static("application/json"),
                ))
                .layer(
                    TraceLayer::new_for_http()
                        .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                        .on_response(DefaultOnResponse::new().level(Level::INFO)),
                )
                .layer(CompressionLayer::new())
                .layer(axum::middleware::from_fn(middleware::redirect_slashes))
                .layer(CatchPanicLayer::custom(errors::panic_response)),
        )
}
