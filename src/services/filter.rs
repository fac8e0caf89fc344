//! Listing filters.
//!
//! Pure predicate application over a snapshot of the collection. Criteria
//! AND-combine, omitted or blank criteria impose no constraint, and the
//! original relative order is preserved.

use crate::models::{Book, BookQuery};

/// Apply the listing criteria to a snapshot of books.
pub fn apply_filters(mut books: Vec<Book>, criteria: &BookQuery) -> Vec<Book> {
    if let Some(author) = non_blank(&criteria.author) {
        let needle = author.to_lowercase();
        books.retain(|b| b.author.to_lowercase().contains(&needle));
    }

    if let Some(genre) = non_blank(&criteria.genre) {
        let needle = genre.to_lowercase();
        // Books without a genre never match a genre filter
        books.retain(|b| {
            b.genre
                .as_ref()
                .is_some_and(|g| g.to_lowercase().contains(&needle))
        });
    }

    // Presence of the parameter applies the filter; only "true" (in any
    // case) parses to true, everything else to false
    if let Some(raw) = &criteria.available {
        let wanted = raw.eq_ignore_ascii_case("true");
        books.retain(|b| b.available == wanted);
    }

    if let Some(search) = non_blank(&criteria.search) {
        let needle = search.to_lowercase();
        books.retain(|b| {
            b.title.to_lowercase().contains(&needle) || b.author.to_lowercase().contains(&needle)
        });
    }

    books
}

fn non_blank(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::BookStore;

    fn seed() -> Vec<Book> {
        BookStore::seeded().list().unwrap()
    }

    #[test]
    fn no_criteria_is_identity() {
        let books = seed();
        let filtered = apply_filters(books.clone(), &BookQuery::default());
        assert_eq!(filtered.len(), books.len());
        let ids: Vec<u64> = filtered.iter().map(|b| b.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn author_filter_is_case_insensitive_substring() {
        let criteria = BookQuery {
            author: Some("orwell".to_string()),
            ..Default::default()
        };
        let filtered = apply_filters(seed(), &criteria);
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].id, 3);
    }

    #[test]
    fn genre_filter_skips_books_without_genre() {
        let mut books = seed();
        books[0].genre = None;
        let criteria = BookQuery {
            genre: Some("fiction".to_string()),
            ..Default::default()
        };
        let filtered = apply_filters(books, &criteria);
        let ids: Vec<u64> = filtered.iter().map(|b| b.id).collect();
        assert_eq!(ids, vec![2, 3]);
    }

    #[test]
    fn available_partitions_the_collection() {
        let on = apply_filters(
            seed(),
            &BookQuery {
                available: Some("true".to_string()),
                ..Default::default()
            },
        );
        let off = apply_filters(
            seed(),
            &BookQuery {
                available: Some("false".to_string()),
                ..Default::default()
            },
        );
        assert!(on.iter().all(|b| b.available));
        assert!(off.iter().all(|b| !b.available));
        assert_eq!(on.len() + off.len(), seed().len());
    }

    #[test]
    fn available_parses_only_true_as_true() {
        let criteria = BookQuery {
            available: Some("yes".to_string()),
            ..Default::default()
        };
        let filtered = apply_filters(seed(), &criteria);
        assert!(filtered.iter().all(|b| !b.available));
    }

    #[test]
    fn search_matches_title_or_author() {
        let by_title = apply_filters(
            seed(),
            &BookQuery {
                search: Some("gatsby".to_string()),
                ..Default::default()
            },
        );
        assert_eq!(by_title.len(), 1);
        assert_eq!(by_title[0].id, 1);

        let by_author = apply_filters(
            seed(),
            &BookQuery {
                search: Some("harper".to_string()),
                ..Default::default()
            },
        );
        assert_eq!(by_author.len(), 1);
        assert_eq!(by_author[0].id, 2);
    }

    #[test]
    fn criteria_combine_with_and() {
        let criteria = BookQuery {
            genre: Some("fiction".to_string()),
            available: Some("false".to_string()),
            ..Default::default()
        };
        let filtered = apply_filters(seed(), &criteria);
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].id, 3);
    }

    #[test]
    fn blank_criteria_impose_no_constraint() {
        let criteria = BookQuery {
            author: Some(String::new()),
            genre: Some(String::new()),
            search: Some(String::new()),
            ..Default::default()
        };
        assert_eq!(apply_filters(seed(), &criteria).len(), 3);
    }
}
