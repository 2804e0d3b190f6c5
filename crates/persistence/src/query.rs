// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Query model shared by every store.
//!
//! Rows are JSON objects keyed by the `camelCase` field names the
//! marketplace records serialize to. Queries are limited to what the
//! gateway needs: equality filters, one ordering field and an optional
//! limit.

use serde_json::Value;

use crate::collection::Collection;
use crate::error::PersistenceError;

/// A stored record.
pub type Row = serde_json::Map<String, Value>;

/// Equality filter on one top-level field.
#[derive(Debug, Clone, PartialEq)]
pub struct Filter {
    pub field: String,
    pub value: Value,
}

impl Filter {
    /// Matches rows whose `field` equals `value`.
    #[must_use]
    pub fn eq(field: impl Into<String>, value: impl Into<Value>) -> Self {
        Self {
            field: field.into(),
            value: value.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Ascending,
    Descending,
}

impl Direction {
    #[must_use]
    pub const fn as_sql(self) -> &'static str {
        match self {
            Self::Ascending => "ASC",
            Self::Descending => "DESC",
        }
    }
}

/// Ordering on one top-level field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Order {
    pub field: String,
    pub direction: Direction,
}

impl Order {
    /// Oldest first.
    #[must_use]
    pub fn ascending(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            direction: Direction::Ascending,
        }
    }

    /// Newest first.
    #[must_use]
    pub fn descending(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            direction: Direction::Descending,
        }
    }
}

/// A read against one collection.
#[derive(Debug, Clone, PartialEq)]
pub struct Select {
    pub collection: Collection,
    pub filters: Vec<Filter>,
    pub order: Option<Order>,
    pub limit: Option<usize>,
}

impl Select {
    /// Selects every row of `collection`.
    #[must_use]
    pub const fn all(collection: Collection) -> Self {
        Self {
            collection,
            filters: Vec::new(),
            order: None,
            limit: None,
        }
    }

    /// Adds an equality filter.
    #[must_use]
    pub fn eq(mut self, field: impl Into<String>, value: impl Into<Value>) -> Self {
        self.filters.push(Filter::eq(field, value));
        self
    }

    #[must_use]
    pub fn order_by(mut self, order: Order) -> Self {
        self.order = Some(order);
        self
    }

    #[must_use]
    pub fn limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }
}

/// Enforces the "exactly one row" result shape.
///
/// # Errors
///
/// Returns `PersistenceError::NotFound` for zero rows and
/// `PersistenceError::MultipleRows` for more than one.
pub fn single(collection: Collection, mut rows: Vec<Row>) -> Result<Row, PersistenceError> {
    match rows.len() {
        0 => Err(PersistenceError::NotFound(format!(
            "No matching row in {collection}"
        ))),
        1 => rows.pop().ok_or_else(|| {
            PersistenceError::NotFound(format!("No matching row in {collection}"))
        }),
        count => Err(PersistenceError::MultipleRows {
            collection: collection.to_string(),
            count,
        }),
    }
}

/// Checks that a field name is a plain identifier.
///
/// Field names end up inside JSON paths, so anything other than ASCII
/// letters, digits and underscores is rejected.
///
/// # Errors
///
/// Returns `PersistenceError::InvalidField` otherwise.
pub fn validate_field(field: &str) -> Result<(), PersistenceError> {
    if !field.is_empty()
        && field
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_')
    {
        Ok(())
    } else {
        Err(PersistenceError::InvalidField(field.to_string()))
    }
}
