use axum::{
    body::Body,
    http::{header, Request, StatusCode, Uri},
    middleware::Next,
    response::{IntoResponse, Response},
};

/// Redirect trailing-slash path variants to the canonical non-slash form
/// before dispatch, so every resource has exactly one routable path.
///
/// `301 Moved Permanently` with a `Location` header, query string preserved.
/// The bare root path `/` is already canonical and passes through.
pub async fn redirect_slashes(req: Request<Body>, next: Next) -> Response {
    let path = req.uri().path();
    if path.len() > 1 && path.ends_with('/') {
        return (
            StatusCode::MOVED_PERMANENTLY,
            [(header::LOCATION, canonical_form(req.uri()))],
        )
            .into_response();
    }

    next.run(req).await
}

fn canonical_form(uri: &Uri) -> String {
    let trimmed = uri.path().trim_end_matches('/');
    let path = if trimmed.is_empty() { "/" } else { trimmed };
    match uri.query() {
        Some(query) => format!("{path}?{query}"),
        None => path.to_string(),
    }
}
