// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The generic record store the gateway talks to.

use crate::collection::Collection;
use crate::error::PersistenceError;
use crate::query::{Filter, Row, Select};

/// A record store organised into named collections.
///
/// Implementations must be shareable across threads; the gateway keeps
/// one behind an `Arc` for the life of the process.
pub trait Store: Send + Sync {
    /// Returns the rows matching `query`, in the requested order.
    ///
    /// # Errors
    ///
    /// Returns an error if a field name is invalid or the backend fails.
    fn select(&self, query: &Select) -> Result<Vec<Row>, PersistenceError>;

    /// Inserts `row` into `collection` and returns it as stored.
    ///
    /// A missing or empty `id` is replaced with a generated one.
    ///
    /// # Errors
    ///
    /// Returns `PersistenceError::DuplicateId` if the id is taken, or
    /// another error if the backend fails.
    fn insert(&self, collection: Collection, row: Row) -> Result<Row, PersistenceError>;

    /// Shallow-merges `patch` into every row matching `filters` and
    /// returns the updated rows.
    ///
    /// # Errors
    ///
    /// Returns `PersistenceError::UnfilteredWrite` if `filters` is empty,
    /// or another error if the backend fails.
    fn update(
        &self,
        collection: Collection,
        filters: &[Filter],
        patch: Row,
    ) -> Result<Vec<Row>, PersistenceError>;

    /// Deletes every row matching `filters` and returns how many went.
    ///
    /// # Errors
    ///
    /// Returns `PersistenceError::UnfilteredWrite` if `filters` is empty,
    /// or another error if the backend fails.
    fn delete(&self, collection: Collection, filters: &[Filter]) -> Result<usize, PersistenceError>;
}
