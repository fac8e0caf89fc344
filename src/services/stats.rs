//! Aggregate statistics over the book collection.

use indexmap::IndexMap;
use serde::Serialize;
use utoipa::ToSchema;

use crate::models::Book;

/// Collection statistics
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BookStats {
    /// Total number of books
    pub total_books: u64,
    /// Books currently available
    pub available_books: u64,
    /// Books currently unavailable
    pub unavailable_books: u64,
    /// Count per genre, in first-seen order; books without a genre are
    /// excluded here but counted in the totals
    pub genre_distribution: IndexMap<String, u64>,
}

/// Compute totals and the genre histogram for a snapshot of books.
pub fn compute_stats(books: &[Book]) -> BookStats {
    let available = books.iter().filter(|b| b.available).count() as u64;

    let mut genre_distribution: IndexMap<String, u64> = IndexMap::new();
    for book in books {
        if let Some(genre) = book.genre.as_deref().filter(|g| !g.is_empty()) {
            *genre_distribution.entry(genre.to_string()).or_insert(0) += 1;
        }
    }

    BookStats {
        total_books: books.len() as u64,
        available_books: available,
        unavailable_books: books.len() as u64 - available,
        genre_distribution,
    }
}
