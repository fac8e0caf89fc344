//! Business logic services

pub mod books;
pub mod filter;
pub mod stats;
pub mod validation;

use std::sync::Arc;

use crate::store::BookStore;

/// Container for all services
pub struct Services {
    pub books: books::BookService,
}

impl Services {
    /// Create all services over the given store
    pub fn new(store: Arc<BookStore>) -> Self {
        Self {
            books: books::BookService::new(store),
        }
    }
}
