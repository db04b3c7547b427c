use axum::Router;

pub mod system;
pub mod todo;

/// Router for everything under the versioned `/v1` prefix.
pub fn router() -> Router {
    Router::new().nest("/api/todo", todo::router())
}

/// The resolved route table. Axum routers cannot be walked after
/// construction, so the table is declared next to the routers it mirrors
/// and logged at startup before serving.
pub const ROUTE_TABLE: &[(&str, &str)] = &[
    ("GET", "/health"),
    ("GET", "/v1/api/todo"),
    ("POST", "/v1/api/todo"),
    ("GET", "/v1/api/todo/{todo_id}"),
    ("DELETE", "/v1/api/todo/{todo_id}"),
];

pub fn log_route_table() {
    for (method, path) in ROUTE_TABLE {
        tracing::info!(%method, %path, "route registered");
    }
}
