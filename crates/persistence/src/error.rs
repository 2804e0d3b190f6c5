// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use diesel::result::DatabaseErrorKind;

/// Errors reported by a store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PersistenceError {
    /// A database error occurred.
    DatabaseError(String),
    /// Database connection failed.
    DatabaseConnectionFailed(String),
    /// Database migration failed.
    MigrationFailed(String),
    /// Query execution failed.
    QueryFailed(String),
    /// A record with the same id already exists.
    DuplicateId(String),
    /// A result-shape constraint expected exactly one row and got none.
    NotFound(String),
    /// A result-shape constraint expected exactly one row and got several.
    MultipleRows {
        /// The collection queried.
        collection: String,
        /// How many rows came back.
        count: usize,
    },
    /// A filter or ordering names something that is not a plain field.
    InvalidField(String),
    /// A stored document is not a JSON object.
    InvalidDocument(String),
    /// An update or delete was issued without any filter.
    UnfilteredWrite(String),
    /// Serialization/deserialization error.
    SerializationError(String),
    /// Initialization error.
    InitializationError(String),
    /// The connection lock was poisoned by a panicking holder.
    LockPoisoned,
}

impl std::fmt::Display for PersistenceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DatabaseError(msg) => write!(f, "Database error: {msg}"),
            Self::DatabaseConnectionFailed(msg) => {
                write!(f, "Database connection failed: {msg}")
            }
            Self::MigrationFailed(msg) => write!(f, "Migration failed: {msg}"),
            Self::QueryFailed(msg) => write!(f, "Query failed: {msg}"),
            Self::DuplicateId(msg) => write!(f, "Duplicate id: {msg}"),
            Self::NotFound(msg) => write!(f, "Not found: {msg}"),
            Self::MultipleRows { collection, count } => {
                write!(f, "Expected one row from {collection}, found {count}")
            }
            Self::InvalidField(field) => write!(f, "Invalid field name: '{field}'"),
            Self::InvalidDocument(msg) => write!(f, "Invalid document: {msg}"),
            Self::UnfilteredWrite(collection) => {
                write!(f, "Refusing to write to every row of {collection}")
            }
            Self::SerializationError(msg) => write!(f, "Serialization error: {msg}"),
            Self::InitializationError(msg) => write!(f, "Initialization error: {msg}"),
            Self::LockPoisoned => write!(f, "Connection lock poisoned"),
        }
    }
}

impl std::error::Error for PersistenceError {}

impl From<diesel::result::Error> for PersistenceError {
    fn from(err: diesel::result::Error) -> Self {
        match err {
            diesel::result::Error::NotFound => Self::NotFound("Record not found".to_string()),
            diesel::result::Error::DatabaseError(DatabaseErrorKind::UniqueViolation, info) => {
                Self::DuplicateId(info.message().to_string())
            }
            _ => Self::DatabaseError(err.to_string()),
        }
    }
}

impl From<diesel::ConnectionError> for PersistenceError {
    fn from(err: diesel::ConnectionError) -> Self {
        Self::DatabaseConnectionFailed(err.to_string())
    }
}

impl From<serde_json::Error> for PersistenceError {
    fn from(err: serde_json::Error) -> Self {
        Self::SerializationError(err.to_string())
    }
}
