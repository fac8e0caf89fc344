//! Capability document served at the root path

use axum::Json;
use serde_json::{json, Value};

/// Describe the available endpoints and recognized query parameters
#[utoipa::path(
    get,
    path = "/",
    tag = "index",
    responses(
        (status = 200, description = "Capability document")
    )
)]
pub async fn index() -> Json<Value> {
    Json(json!({
        "message": "Welcome to the Book Management API! 📚",
        "version": env!("CARGO_PKG_VERSION"),
        "endpoints": {
            "GET /books": "Get all books (supports filtering)",
            "GET /books/:id": "Get a specific book by ID",
            "POST /books": "Add a new book",
            "PUT /books/:id": "Update a book by ID",
            "DELETE /books/:id": "Delete a book by ID",
            "GET /books/stats": "Get book statistics"
        },
        "queryParameters": {
            "author": "Filter by author name",
            "genre": "Filter by genre",
            "available": "Filter by availability (true/false)",
            "search": "Search in title and author"
        }
    }))
}
