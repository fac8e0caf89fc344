//! Book endpoints

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::Serialize;
use utoipa::ToSchema;

use crate::{
    error::{AppError, AppResult},
    models::{Book, BookPayload, BookQuery},
    services::stats::BookStats,
    AppState,
};

/// Listing envelope: `{success, count, data}`
#[derive(Serialize, ToSchema)]
pub struct BookListResponse {
    pub success: bool,
    /// Number of books after filtering
    pub count: usize,
    pub data: Vec<Book>,
}

/// Single-record envelope: `{success, data}`
#[derive(Serialize, ToSchema)]
pub struct BookResponse {
    pub success: bool,
    pub data: Book,
}

/// Mutation envelope: `{success, message, data}`
#[derive(Serialize, ToSchema)]
pub struct BookMessageResponse {
    pub success: bool,
    pub message: String,
    pub data: Book,
}

/// Statistics envelope: `{success, data}`
#[derive(Serialize, ToSchema)]
pub struct StatsResponse {
    pub success: bool,
    pub data: BookStats,
}

/// Path ids are parsed explicitly; anything that is not a valid id is
/// treated as a book that does not exist, echoing the raw value.
fn parse_id(raw: &str) -> AppResult<u64> {
    raw.parse::<u64>()
        .map_err(|_| AppError::NotFound(format!("Book with ID {} not found", raw)))
}

/// List books with optional filters
#[utoipa::path(
    get,
    path = "/books",
    tag = "books",
    params(BookQuery),
    responses(
        (status = 200, description = "Filtered list of books", body = BookListResponse)
    )
)]
pub async fn list_books(
    State(state): State<AppState>,
    Query(criteria): Query<BookQuery>,
) -> AppResult<Json<BookListResponse>> {
    let data = state.services.books.list(&criteria)?;
    Ok(Json(BookListResponse {
        success: true,
        count: data.len(),
        data,
    }))
}

/// Get a book by ID
#[utoipa::path(
    get,
    path = "/books/{id}",
    tag = "books",
    params(
        ("id" = u64, Path, description = "Book ID")
    ),
    responses(
        (status = 200, description = "Book details", body = BookResponse),
        (status = 404, description = "Book not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn get_book(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<BookResponse>> {
    let book = state.services.books.get(parse_id(&id)?)?;
    Ok(Json(BookResponse {
        success: true,
        data: book,
    }))
}

/// Add a new book
#[utoipa::path(
    post,
    path = "/books",
    tag = "books",
    request_body = BookPayload,
    responses(
        (status = 201, description = "Book created", body = BookMessageResponse),
        (status = 400, description = "Validation failed", body = crate::error::ErrorResponse),
        (status = 409, description = "Duplicate ISBN", body = crate::error::ErrorResponse)
    )
)]
pub async fn create_book(
    State(state): State<AppState>,
    Json(payload): Json<BookPayload>,
) -> AppResult<(StatusCode, Json<BookMessageResponse>)> {
    let book = state.services.books.create(payload)?;
    Ok((
        StatusCode::CREATED,
        Json(BookMessageResponse {
            success: true,
            message: "Book created successfully".to_string(),
            data: book,
        }),
    ))
}

/// Update a book by ID
#[utoipa::path(
    put,
    path = "/books/{id}",
    tag = "books",
    params(
        ("id" = u64, Path, description = "Book ID")
    ),
    request_body = BookPayload,
    responses(
        (status = 200, description = "Book updated", body = BookMessageResponse),
        (status = 400, description = "Validation failed", body = crate::error::ErrorResponse),
        (status = 404, description = "Book not found", body = crate::error::ErrorResponse),
        (status = 409, description = "Duplicate ISBN", body = crate::error::ErrorResponse)
    )
)]
pub async fn update_book(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(payload): Json<BookPayload>,
) -> AppResult<Json<BookMessageResponse>> {
    let book = state.services.books.update(parse_id(&id)?, payload)?;
    Ok(Json(BookMessageResponse {
        success: true,
        message: "Book updated successfully".to_string(),
        data: book,
    }))
}

/// Delete a book by ID
#[utoipa::path(
    delete,
    path = "/books/{id}",
    tag = "books",
    params(
        ("id" = u64, Path, description = "Book ID")
    ),
    responses(
        (status = 200, description = "Book deleted", body = BookMessageResponse),
        (status = 404, description = "Book not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn delete_book(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<BookMessageResponse>> {
    let book = state.services.books.delete(parse_id(&id)?)?;
    Ok(Json(BookMessageResponse {
        success: true,
        message: "Book deleted successfully".to_string(),
        data: book,
    }))
}

/// Get book statistics
#[utoipa::path(
    get,
    path = "/books/stats",
    tag = "books",
    responses(
        (status = 200, description = "Collection statistics", body = StatsResponse)
    )
)]
pub async fn book_stats(State(state): State<AppState>) -> AppResult<Json<StatsResponse>> {
    let stats = state.services.books.stats()?;
    Ok(Json(StatsResponse {
        success: true,
        data: stats,
    }))
}
