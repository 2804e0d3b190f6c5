// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! `SQLite` document store.
//!
//! Every collection is a table of `(id, doc)` pairs where `doc` is the
//! record's JSON text. Filters and ordering go through `json_extract`,
//! so the tables need no per-field columns.

use std::path::Path;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Mutex, MutexGuard};

use diesel::prelude::*;
use diesel::sql_types::Text;
use diesel::sqlite::Sqlite;
use diesel::{RunQueryDsl, SqliteConnection};
use serde_json::Value;
use tracing::debug;
use uuid::Uuid;

use crate::backend::sqlite;
use crate::collection::Collection;
use crate::error::PersistenceError;
use crate::query::{Filter, Row, Select, validate_field};
use crate::store::Store;

/// Atomic counter for generating unique in-memory database names.
///
/// Each call to `new_in_memory()` receives a unique sequential ID.
static DB_COUNTER: AtomicU64 = AtomicU64::new(0);

/// One stored document as read back from a collection table.
#[derive(QueryableByName)]
struct DocumentRow {
    #[diesel(sql_type = Text)]
    id: String,
    #[diesel(sql_type = Text)]
    doc: String,
}

/// A [`Store`] backed by a single `SQLite` connection.
pub struct SqliteStore {
    conn: Mutex<SqliteConnection>,
}

impl SqliteStore {
    /// Creates a store over a fresh in-memory database.
    ///
    /// Each call receives its own database, so stores never share rows.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be initialized.
    pub fn new_in_memory() -> Result<Self, PersistenceError> {
        let db_id = DB_COUNTER.fetch_add(1, Ordering::SeqCst);
        let shared_memory_url = format!("file:memdb_kisan_{db_id}?mode=memory&cache=shared");

        let conn = sqlite::initialize_database(&shared_memory_url)?;
        Ok(Self::from_connection(conn))
    }

    /// Creates a store over a database file, with WAL enabled.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be opened or initialized.
    pub fn new_with_file<P: AsRef<Path>>(path: P) -> Result<Self, PersistenceError> {
        let path_str = path.as_ref().to_str().ok_or_else(|| {
            PersistenceError::InitializationError("Invalid database path".to_string())
        })?;

        let mut conn = sqlite::initialize_database(path_str)?;
        sqlite::enable_wal_mode(&mut conn)?;
        Ok(Self::from_connection(conn))
    }

    /// Creates a store over any `SQLite` database URL, leaving the
    /// journal mode alone.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be opened or initialized.
    pub fn open(database_url: &str) -> Result<Self, PersistenceError> {
        let conn = sqlite::initialize_database(database_url)?;
        Ok(Self::from_connection(conn))
    }

    const fn from_connection(conn: SqliteConnection) -> Self {
        Self {
            conn: Mutex::new(conn),
        }
    }

    fn lock(&self) -> Result<MutexGuard<'_, SqliteConnection>, PersistenceError> {
        self.conn.lock().map_err(|_| PersistenceError::LockPoisoned)
    }
}

impl Store for SqliteStore {
    fn select(&self, query: &Select) -> Result<Vec<Row>, PersistenceError> {
        let (where_sql, binds) = where_clause(&query.filters)?;
        let mut sql = format!("SELECT id, doc FROM {}{where_sql}", query.collection);

        if let Some(order) = &query.order {
            validate_field(&order.field)?;
            let direction = order.direction.as_sql();
            sql.push_str(&format!(
                " ORDER BY json_extract(doc, '$.{}') {direction}, rowid {direction}",
                order.field
            ));
        }
        if let Some(limit) = query.limit {
            sql.push_str(&format!(" LIMIT {limit}"));
        }

        debug!(collection = %query.collection, %sql, "Selecting documents");

        let mut conn = self.lock()?;
        load_documents(&mut conn, sql, binds)?
            .iter()
            .map(|row| parse_document(query.collection, &row.doc))
            .collect()
    }

    fn insert(&self, collection: Collection, mut row: Row) -> Result<Row, PersistenceError> {
        let id = document_id(&row)?.unwrap_or_else(|| Uuid::new_v4().to_string());
        row.insert(String::from("id"), Value::String(id.clone()));
        let doc = serde_json::to_string(&row)?;

        debug!(%collection, %id, "Inserting document");

        let mut conn = self.lock()?;
        diesel::sql_query(format!("INSERT INTO {collection} (id, doc) VALUES (?, ?)"))
            .bind::<Text, _>(&id)
            .bind::<Text, _>(&doc)
            .execute(&mut *conn)?;

        Ok(row)
    }

    fn update(
        &self,
        collection: Collection,
        filters: &[Filter],
        patch: Row,
    ) -> Result<Vec<Row>, PersistenceError> {
        if filters.is_empty() {
            return Err(PersistenceError::UnfilteredWrite(collection.to_string()));
        }
        let (where_sql, binds) = where_clause(filters)?;
        let select_sql = format!("SELECT id, doc FROM {collection}{where_sql}");

        debug!(%collection, fields = patch.len(), "Updating documents");

        let mut conn = self.lock()?;
        conn.transaction::<_, PersistenceError, _>(|conn| {
            let matched = load_documents(conn, select_sql, binds)?;
            let mut updated = Vec::with_capacity(matched.len());

            for current in matched {
                let mut row = parse_document(collection, &current.doc)?;
                for (field, value) in &patch {
                    row.insert(field.clone(), value.clone());
                }
                let id = document_id(&row)?.unwrap_or_else(|| current.id.clone());
                row.insert(String::from("id"), Value::String(id.clone()));
                let doc = serde_json::to_string(&row)?;

                diesel::sql_query(format!(
                    "UPDATE {collection} SET id = ?, doc = ? WHERE id = ?"
                ))
                .bind::<Text, _>(&id)
                .bind::<Text, _>(&doc)
                .bind::<Text, _>(&current.id)
                .execute(conn)?;

                updated.push(row);
            }

            Ok(updated)
        })
    }

    fn delete(
        &self,
        collection: Collection,
        filters: &[Filter],
    ) -> Result<usize, PersistenceError> {
        if filters.is_empty() {
            return Err(PersistenceError::UnfilteredWrite(collection.to_string()));
        }
        let (where_sql, binds) = where_clause(filters)?;
        let sql = format!("DELETE FROM {collection}{where_sql}");

        debug!(%collection, %sql, "Deleting documents");

        let mut conn = self.lock()?;
        conn.transaction::<_, PersistenceError, _>(|conn| {
            let mut query = diesel::sql_query(sql).into_boxed::<Sqlite>();
            for value in binds {
                query = query.bind::<Text, _>(value);
            }
            Ok(query.execute(conn)?)
        })
    }
}

/// Builds a ` WHERE ...` clause for `filters` and the JSON text bound to
/// each placeholder. No filters yields an empty clause.
fn where_clause(filters: &[Filter]) -> Result<(String, Vec<String>), PersistenceError> {
    let mut conditions = Vec::with_capacity(filters.len());
    let mut binds = Vec::with_capacity(filters.len());

    for filter in filters {
        validate_field(&filter.field)?;
        conditions.push(format!(
            "json_extract(doc, '$.{}') = json_extract(?, '$')",
            filter.field
        ));
        binds.push(serde_json::to_string(&filter.value)?);
    }

    if conditions.is_empty() {
        Ok((String::new(), binds))
    } else {
        Ok((format!(" WHERE {}", conditions.join(" AND ")), binds))
    }
}

fn load_documents(
    conn: &mut SqliteConnection,
    sql: String,
    binds: Vec<String>,
) -> Result<Vec<DocumentRow>, PersistenceError> {
    let mut query = diesel::sql_query(sql).into_boxed::<Sqlite>();
    for value in binds {
        query = query.bind::<Text, _>(value);
    }
    Ok(query.load::<DocumentRow>(conn)?)
}

fn parse_document(collection: Collection, doc: &str) -> Result<Row, PersistenceError> {
    match serde_json::from_str::<Value>(doc)? {
        Value::Object(row) => Ok(row),
        other => Err(PersistenceError::InvalidDocument(format!(
            "{collection} holds a non-object document: {other}"
        ))),
    }
}

/// Reads the row's `id`. Missing, null and empty ids read as `None`.
fn document_id(row: &Row) -> Result<Option<String>, PersistenceError> {
    match row.get("id") {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(id)) if id.is_empty() => Ok(None),
        Some(Value::String(id)) => Ok(Some(id.clone())),
        Some(_) => Err(PersistenceError::InvalidField(String::from("id"))),
    }
}
