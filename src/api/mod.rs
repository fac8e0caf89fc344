//! API handlers for Bookshelf REST endpoints

pub mod books;
pub mod health;
pub mod index;
pub mod openapi;

use axum::{
    routing::{delete, get, post, put},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::{error::AppError, AppState};

/// Create the application router with all routes
pub fn create_router(state: AppState) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        // Capability document
        .route("/", get(index::index))
        // Health check
        .route("/health", get(health::health_check))
        // Books
        .route("/books", get(books::list_books))
        .route("/books", post(books::create_book))
        // Static segment must be declared alongside the capture; axum
        // prefers it over /books/:id
        .route("/books/stats", get(books::book_stats))
        .route("/books/:id", get(books::get_book))
        .route("/books/:id", put(books::update_book))
        .route("/books/:id", delete(books::delete_book))
        // OpenAPI documentation
        .route("/api-docs/openapi.json", get(openapi::openapi_json))
        .fallback(route_not_found)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// Catch-all for unmatched routes
async fn route_not_found() -> AppError {
    AppError::NotFound("Route not found. Visit / for available endpoints.".to_string())
}
