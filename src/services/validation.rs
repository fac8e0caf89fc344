//! Book candidate validation.
//!
//! Pure rule checking over a raw [`BookPayload`]. All violations are
//! collected, never short-circuited, so a single response can report every
//! failing field. The same function serves create and update (the update
//! path validates the payload merged over the stored record).

use chrono::{Datelike, Utc};
use serde_json::Value;

use crate::models::BookPayload;

/// Check a candidate against the field rules, returning every violation.
/// An empty vec means the candidate is valid.
pub fn validate(candidate: &BookPayload) -> Vec<String> {
    let mut errors = Vec::new();

    if candidate
        .title
        .as_deref()
        .map_or(true, |t| t.trim().is_empty())
    {
        errors.push("Title is required".to_string());
    }

    if candidate
        .author
        .as_deref()
        .map_or(true, |a| a.trim().is_empty())
    {
        errors.push("Author is required".to_string());
    }

    // Field supplied at all, including an explicit null
    if let Some(supplied) = &candidate.year {
        let current_year = Utc::now().year();
        let valid = supplied
            .as_ref()
            .and_then(parse_year)
            .is_some_and(|y| (1000..=current_year).contains(&y));
        if !valid {
            errors.push("Year must be a valid year between 1000 and current year".to_string());
        }
    }

    errors
}

/// Explicit, total year coercion: a JSON number or a numeric string parses
/// to an `i32`, anything else is `None`. Never defaults.
pub fn parse_year(value: &Value) -> Option<i32> {
    match value {
        Value::Number(n) => n.as_i64().and_then(|v| i32::try_from(v).ok()),
        Value::String(s) => s.trim().parse::<i32>().ok(),
        _ => None,
    }
}
