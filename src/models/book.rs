//! Book model and related request/query types.
//!
//! `Book` is the stored record. `BookPayload` is the raw client candidate for
//! create and update; its `year`/`genre`/`isbn` fields are double options so
//! an explicit JSON `null` can be told apart from an absent field. `BookDraft`
//! and `BookChanges` are the validated shapes handed to the store.

use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

/// A catalogued book
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Book {
    /// Unique identifier, assigned by the store and never reused
    pub id: u64,
    pub title: String,
    pub author: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub year: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub genre: Option<String>,
    /// Unique across the collection when present
    #[serde(skip_serializing_if = "Option::is_none")]
    pub isbn: Option<String>,
    pub available: bool,
}

/// Unvalidated book fields submitted by a client.
///
/// `year` is kept as a raw JSON value: the original API accepts both a number
/// and a numeric string, and the coercion must be explicit (a failed parse is
/// a validation error, never a silent default). Unknown body fields are
/// ignored.
#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct BookPayload {
    pub title: Option<String>,
    pub author: Option<String>,
    #[serde(default, with = "serde_with::rust::double_option")]
    #[schema(value_type = Option<i32>)]
    pub year: Option<Option<serde_json::Value>>,
    #[serde(default, with = "serde_with::rust::double_option")]
    #[schema(value_type = Option<String>)]
    pub genre: Option<Option<String>>,
    #[serde(default, with = "serde_with::rust::double_option")]
    #[schema(value_type = Option<String>)]
    pub isbn: Option<Option<String>>,
    pub available: Option<bool>,
}

impl BookPayload {
    /// Overlay this payload on an existing record, producing the candidate
    /// that would result from applying it. Used by the update path so that a
    /// partial body is validated against the merged record: absent fields
    /// inherit the stored values, explicitly supplied ones (blank titles
    /// included) are judged as sent.
    pub fn merged_over(&self, existing: &Book) -> BookPayload {
        BookPayload {
            title: self
                .title
                .clone()
                .or_else(|| Some(existing.title.clone())),
            author: self
                .author
                .clone()
                .or_else(|| Some(existing.author.clone())),
            year: match &self.year {
                None => existing.year.map(|y| Some(serde_json::Value::from(y))),
                supplied => supplied.clone(),
            },
            genre: self.genre.clone(),
            isbn: self.isbn.clone(),
            available: self.available,
        }
    }
}

/// Validated input for creating a book
#[derive(Debug, Clone)]
pub struct BookDraft {
    pub title: String,
    pub author: String,
    pub year: Option<i32>,
    pub genre: Option<String>,
    pub isbn: Option<String>,
    pub available: bool,
}

/// Validated field updates for an existing book.
///
/// `None` leaves a field untouched. For `genre` and `isbn`, `Some(None)`
/// clears the field (the API treats an explicit null or blank string as a
/// clear). `year` cannot be cleared: a supplied non-numeric year is rejected
/// during validation and never reaches the store.
#[derive(Debug, Clone, Default)]
pub struct BookChanges {
    pub title: Option<String>,
    pub author: Option<String>,
    pub year: Option<i32>,
    pub genre: Option<Option<String>>,
    pub isbn: Option<Option<String>>,
    pub available: Option<bool>,
}

/// Listing filter criteria (API query parameters)
#[derive(Debug, Default, Deserialize, IntoParams, ToSchema)]
pub struct BookQuery {
    /// Case-insensitive substring match on author
    pub author: Option<String>,
    /// Case-insensitive substring match on genre
    pub genre: Option<String>,
    /// Availability flag, "true"/"false"
    pub available: Option<String>,
    /// Case-insensitive substring match on title or author
    pub search: Option<String>,
}
