//! In-memory book store.
//!
//! Owns the mutable collection and the id counter behind a single lock, so
//! that isbn uniqueness and monotonic id assignment hold even though axum
//! serves requests concurrently. Every public operation takes the lock at
//! most once; conflict checks and the mutation they guard share the same
//! write-lock acquisition.

use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::{
    error::{AppError, AppResult},
    models::{Book, BookChanges, BookDraft},
};

struct StoreInner {
    books: Vec<Book>,
    next_id: u64,
}

/// Lock-guarded book collection and id counter
pub struct BookStore {
    inner: RwLock<StoreInner>,
}

impl Default for BookStore {
    fn default() -> Self {
        Self::new()
    }
}

impl BookStore {
    /// Create an empty store; ids start at 1
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(StoreInner {
                books: Vec::new(),
                next_id: 1,
            }),
        }
    }

    /// Create a store pre-populated with the initial catalog
    pub fn seeded() -> Self {
        Self {
            inner: RwLock::new(StoreInner {
                books: vec![
                    Book {
                        id: 1,
                        title: "The Great Gatsby".to_string(),
                        author: "F. Scott Fitzgerald".to_string(),
                        year: Some(1925),
                        genre: Some("Classic Literature".to_string()),
                        isbn: Some("978-0-7432-7356-5".to_string()),
                        available: true,
                    },
                    Book {
                        id: 2,
                        title: "To Kill a Mockingbird".to_string(),
                        author: "Harper Lee".to_string(),
                        year: Some(1960),
                        genre: Some("Fiction".to_string()),
                        isbn: Some("978-0-06-112008-4".to_string()),
                        available: true,
                    },
                    Book {
                        id: 3,
                        title: "1984".to_string(),
                        author: "George Orwell".to_string(),
                        year: Some(1949),
                        genre: Some("Dystopian Fiction".to_string()),
                        isbn: Some("978-0-452-28423-4".to_string()),
                        available: false,
                    },
                ],
                next_id: 4,
            }),
        }
    }

    fn read(&self) -> AppResult<RwLockReadGuard<'_, StoreInner>> {
        self.inner
            .read()
            .map_err(|_| AppError::Internal("book store lock poisoned".to_string()))
    }

    fn write(&self) -> AppResult<RwLockWriteGuard<'_, StoreInner>> {
        self.inner
            .write()
            .map_err(|_| AppError::Internal("book store lock poisoned".to_string()))
    }

    /// Get a book by id
    pub fn get(&self, id: u64) -> AppResult<Book> {
        let inner = self.read()?;
        inner
            .books
            .iter()
            .find(|b| b.id == id)
            .cloned()
            .ok_or_else(|| AppError::NotFound(format!("Book with ID {} not found", id)))
    }

    /// Snapshot of the whole collection, in insertion order
    pub fn list(&self) -> AppResult<Vec<Book>> {
        Ok(self.read()?.books.clone())
    }

    /// Insert a new book, assigning the next free id.
    /// Fails with a conflict when the draft's isbn is already in use.
    pub fn insert(&self, draft: BookDraft) -> AppResult<Book> {
        let mut inner = self.write()?;

        if let Some(ref isbn) = draft.isbn {
            if inner.books.iter().any(|b| b.isbn.as_deref() == Some(isbn)) {
                return Err(AppError::Conflict(
                    "A book with this ISBN already exists".to_string(),
                ));
            }
        }

        let book = Book {
            id: inner.next_id,
            title: draft.title,
            author: draft.author,
            year: draft.year,
            genre: draft.genre,
            isbn: draft.isbn,
            available: draft.available,
        };
        inner.next_id += 1;
        inner.books.push(book.clone());

        tracing::debug!(id = book.id, "book inserted");
        Ok(book)
    }

    /// Apply field changes to an existing book. Only fields present in
    /// `changes` are touched; setting an isbn held by another book fails
    /// with a conflict.
    pub fn update(&self, id: u64, changes: BookChanges) -> AppResult<Book> {
        let mut inner = self.write()?;

        let index = inner
            .books
            .iter()
            .position(|b| b.id == id)
            .ok_or_else(|| AppError::NotFound(format!("Book with ID {} not found", id)))?;

        if let Some(Some(ref isbn)) = changes.isbn {
            if inner
                .books
                .iter()
                .any(|b| b.id != id && b.isbn.as_deref() == Some(isbn))
            {
                return Err(AppError::Conflict(
                    "A book with this ISBN already exists".to_string(),
                ));
            }
        }

        let book = &mut inner.books[index];
        if let Some(title) = changes.title {
            book.title = title;
        }
        if let Some(author) = changes.author {
            book.author = author;
        }
        if let Some(year) = changes.year {
            book.year = Some(year);
        }
        if let Some(genre) = changes.genre {
            book.genre = genre;
        }
        if let Some(isbn) = changes.isbn {
            book.isbn = isbn;
        }
        if let Some(available) = changes.available {
            book.available = available;
        }

        tracing::debug!(id, "book updated");
        Ok(book.clone())
    }

    /// Remove a book and return it. The id is never reassigned.
    pub fn delete(&self, id: u64) -> AppResult<Book> {
        let mut inner = self.write()?;

        let index = inner
            .books
            .iter()
            .position(|b| b.id == id)
            .ok_or_else(|| AppError::NotFound(format!("Book with ID {} not found", id)))?;

        let book = inner.books.remove(index);
        tracing::debug!(id, "book deleted");
        Ok(book)
    }
}
