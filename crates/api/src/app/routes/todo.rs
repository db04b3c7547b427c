use axum::{
    extract::Path,
    http::StatusCode,
    response::IntoResponse,
    routing::get,
    Json, Router,
};

use crate::app::dto::Todo;

pub fn router() -> Router {
    Router::new()
        .route("/", get(list_todos).post(create_todo))
        .route("/:todo_id", get(get_todo).delete(delete_todo))
}

/// Returns the demo todo for any id; existence is never consulted.
pub async fn get_todo(Path(todo_id): Path<String>) -> axum::response::Response {
    (StatusCode::OK, Json(Todo::placeholder(todo_id))).into_response()
}

/// Acknowledges the delete without touching anything; the id is ignored.
pub async fn delete_todo(Path(_todo_id): Path<String>) -> axum::response::Response {
    (
        StatusCode::OK,
        Json(serde_json::json!({ "message": "Deleted TODO successfully" })),
    )
        .into_response()
}

/// Acknowledges the create; the request body is accepted but never read.
pub async fn create_todo() -> axum::response::Response {
    (
        StatusCode::OK,
        Json(serde_json::json!({ "message": "Created TODO successfully" })),
    )
        .into_response()
}

pub async fn list_todos() -> axum::response::Response {
    (StatusCode::OK, Json(vec![Todo::placeholder("slug")])).into_response()
}
