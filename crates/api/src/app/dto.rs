use serde::Serialize;

// -------------------------
// Response DTOs
// -------------------------

/// A named note. Purely a response shape: no instance is ever stored,
/// mutated, or deleted — handlers fabricate one per request and discard
/// it after serialization.
#[derive(Debug, Clone, Serialize)]
pub struct Todo {
    pub slug: String,
    pub title: String,
    pub body: String,
}

/// Title carried by every fabricated todo.
pub const PLACEHOLDER_TITLE: &str = "Hello world";

/// Body carried by every fabricated todo.
pub const PLACEHOLDER_BODY: &str = "Heloo world from planet earth";

impl Todo {
    /// Fabricate the demo todo for the given slug.
    pub fn placeholder(slug: impl Into<String>) -> Self {
        Self {
            slug: slug.into(),
            title: PLACEHOLDER_TITLE.to_string(),
            body: PLACEHOLDER_BODY.to_string(),
        }
    }
}
