//! Book management service.
//!
//! Orchestrates validation, conflict checks and store access for the book
//! endpoints. Holds no state of its own beyond the store handle.

use std::sync::Arc;

use crate::{
    error::{AppError, AppResult},
    models::{Book, BookChanges, BookDraft, BookPayload, BookQuery},
    services::{filter, stats, validation},
    store::BookStore,
};

pub struct BookService {
    store: Arc<BookStore>,
}

impl BookService {
    pub fn new(store: Arc<BookStore>) -> Self {
        Self { store }
    }

    /// List books matching the given criteria, in insertion order.
    pub fn list(&self, criteria: &BookQuery) -> AppResult<Vec<Book>> {
        Ok(filter::apply_filters(self.store.list()?, criteria))
    }

    /// Get a book by id.
    pub fn get(&self, id: u64) -> AppResult<Book> {
        self.store.get(id)
    }

    /// Validate and create a new book. Duplicate isbn is a conflict.
    pub fn create(&self, payload: BookPayload) -> AppResult<Book> {
        let errors = validation::validate(&payload);
        if !errors.is_empty() {
            return Err(AppError::Validation(errors));
        }

        let draft = BookDraft {
            // Validation guarantees title and author are present and non-blank
            title: trimmed_or_empty(&payload.title),
            author: trimmed_or_empty(&payload.author),
            year: resolved_year(&payload),
            genre: payload.genre.flatten().and_then(non_blank_trimmed),
            isbn: payload.isbn.flatten().and_then(non_blank_trimmed),
            available: payload.available.unwrap_or(true),
        };

        let book = self.store.insert(draft)?;
        tracing::info!(id = book.id, title = %book.title, "book created");
        Ok(book)
    }

    /// Validate and apply a partial update to an existing book.
    ///
    /// The payload is validated merged over the stored record, so a body
    /// that only touches some fields passes while an explicitly blank title
    /// or a malformed year still fails. An isbn held by another book is a
    /// conflict.
    pub fn update(&self, id: u64, payload: BookPayload) -> AppResult<Book> {
        let existing = self.store.get(id)?;

        let errors = validation::validate(&payload.merged_over(&existing));
        if !errors.is_empty() {
            return Err(AppError::Validation(errors));
        }

        let changes = BookChanges {
            title: payload.title.as_deref().map(|t| t.trim().to_string()),
            author: payload.author.as_deref().map(|a| a.trim().to_string()),
            year: resolved_year(&payload),
            // Explicit null or blank clears genre/isbn
            genre: payload
                .genre
                .map(|inner| inner.and_then(non_blank_trimmed)),
            isbn: payload.isbn.map(|inner| inner.and_then(non_blank_trimmed)),
            available: payload.available,
        };

        let book = self.store.update(id, changes)?;
        tracing::info!(id, "book updated");
        Ok(book)
    }

    /// Delete a book by id, returning the removed record.
    pub fn delete(&self, id: u64) -> AppResult<Book> {
        let book = self.store.delete(id)?;
        tracing::info!(id, "book deleted");
        Ok(book)
    }

    /// Compute collection statistics.
    pub fn stats(&self) -> AppResult<stats::BookStats> {
        Ok(stats::compute_stats(&self.store.list()?))
    }
}

fn trimmed_or_empty(value: &Option<String>) -> String {
    value.as_deref().map(str::trim).unwrap_or_default().to_string()
}

fn non_blank_trimmed(value: String) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Year resolved to a number after validation has passed. A supplied year
/// that failed to parse never reaches this point.
fn resolved_year(payload: &BookPayload) -> Option<i32> {
    match &payload.year {
        Some(Some(value)) => validation::parse_year(value),
        _ => None,
    }
}
