// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The marketplace gateway: one function per entity per operation over a
//! [`Store`].
//!
//! Two failure contracts apply:
//!
//! - **Soft** (getters, auxiliary writes): a missing store or a store
//!   error is logged and absorbed. Callers get an empty `Vec` or `None`.
//! - **Hard** (listings, offers, orders, messages, disputes, profiles): the
//!   failure is logged and returned as a [`GatewayError`].
//!
//! Getters live in `queries`, writes in `mutations`.

use std::sync::{Arc, OnceLock};

use kisan_domain::DomainError;
use serde::Serialize;
use serde_json::Value;
use thiserror::Error;
use tracing::{error, info, warn};

use crate::collection::Record;
use crate::config::StoreConfig;
use crate::error::PersistenceError;
use crate::query::{Filter, Row, Select, single};
use crate::store::Store;

static GLOBAL_GATEWAY: OnceLock<MarketplaceGateway> = OnceLock::new();

/// Errors raised by hard-contract operations.
#[derive(Debug, Error)]
pub enum GatewayError {
    /// No store is configured.
    #[error("Marketplace store is not configured")]
    NotConfigured,

    /// The store rejected the request.
    #[error(transparent)]
    Store(#[from] PersistenceError),

    /// The write would break a domain invariant. Nothing was stored.
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// The store returned a row that is not a valid record.
    #[error("Could not decode {collection} record: {error}")]
    Decode {
        collection: &'static str,
        error: String,
    },
}

/// Entry point for all marketplace reads and writes.
///
/// A gateway without a store is valid: it models the misconfigured
/// deployment, where soft operations return defaults and hard operations
/// fail with [`GatewayError::NotConfigured`].
#[derive(Clone)]
pub struct MarketplaceGateway {
    store: Option<Arc<dyn Store>>,
}

impl std::fmt::Debug for MarketplaceGateway {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MarketplaceGateway")
            .field("configured", &self.is_configured())
            .finish()
    }
}

impl MarketplaceGateway {
    #[must_use]
    pub const fn new(store: Arc<dyn Store>) -> Self {
        Self { store: Some(store) }
    }

    #[must_use]
    pub fn with_store<S: Store + 'static>(store: S) -> Self {
        Self::new(Arc::new(store))
    }

    /// A gateway with no store behind it.
    #[must_use]
    pub const fn unconfigured() -> Self {
        Self { store: None }
    }

    /// Builds a gateway from `config`.
    ///
    /// A missing database or a store that fails to open is logged and
    /// yields an unconfigured gateway.
    #[must_use]
    pub fn from_config(config: &StoreConfig) -> Self {
        match config.open_store() {
            Ok(Some(store)) => {
                info!("Marketplace store ready");
                Self::with_store(store)
            }
            Ok(None) => {
                warn!("No marketplace database configured");
                Self::unconfigured()
            }
            Err(e) => {
                error!(error = %e, "Failed to open marketplace store");
                Self::unconfigured()
            }
        }
    }

    /// The process-wide gateway, built from the environment on first use.
    #[must_use]
    pub fn global() -> &'static Self {
        GLOBAL_GATEWAY.get_or_init(|| Self::from_config(&StoreConfig::from_env()))
    }

    #[must_use]
    pub const fn is_configured(&self) -> bool {
        self.store.is_some()
    }

    fn require_store(&self) -> Result<&dyn Store, GatewayError> {
        self.store.as_deref().ok_or(GatewayError::NotConfigured)
    }

    /// Runs a hard-contract operation, logging any failure before
    /// returning it.
    pub(crate) fn hard<T, F>(&self, operation: &'static str, f: F) -> Result<T, GatewayError>
    where
        F: FnOnce(&dyn Store) -> Result<T, GatewayError>,
    {
        let result = self.require_store().and_then(f);
        if let Err(e) = &result {
            error!(operation, error = %e, "Marketplace operation failed");
        }
        result
    }

    /// Runs a soft-contract operation, logging and absorbing any failure.
    pub(crate) fn soft<T, F>(&self, operation: &'static str, f: F) -> Option<T>
    where
        F: FnOnce(&dyn Store) -> Result<T, GatewayError>,
    {
        match self.require_store().and_then(f) {
            Ok(value) => Some(value),
            Err(e) => {
                error!(operation, error = %e, "Marketplace operation failed");
                None
            }
        }
    }

    /// Lists a whole collection in its listing order.
    pub(crate) fn list<T: Record>(&self, operation: &'static str) -> Vec<T> {
        let query = Select::all(T::COLLECTION).order_by(T::COLLECTION.list_order());
        self.soft(operation, |store| Ok(store.select(&query)?))
            .map(|rows| decode_rows(operation, rows))
            .unwrap_or_default()
    }
}

/// Decodes rows, skipping the ones that are not valid records.
fn decode_rows<T: Record>(operation: &'static str, rows: Vec<Row>) -> Vec<T> {
    rows.into_iter()
        .filter_map(|row| match decode::<T>(row) {
            Ok(record) => Some(record),
            Err(e) => {
                warn!(operation, error = %e, "Skipping undecodable row");
                None
            }
        })
        .collect()
}

pub(crate) fn decode<T: Record>(row: Row) -> Result<T, GatewayError> {
    serde_json::from_value(Value::Object(row)).map_err(|e| GatewayError::Decode {
        collection: T::COLLECTION.as_str(),
        error: e.to_string(),
    })
}

/// Serializes `value` into a row. Only JSON objects are rows.
pub(crate) fn to_row<S: Serialize>(value: &S) -> Result<Row, GatewayError> {
    match serde_json::to_value(value).map_err(PersistenceError::from)? {
        Value::Object(row) => Ok(row),
        other => Err(PersistenceError::InvalidDocument(format!(
            "expected a JSON object, got {other}"
        ))
        .into()),
    }
}

/// A one-field patch.
pub(crate) fn field_patch<V: Serialize>(field: &str, value: &V) -> Result<Row, GatewayError> {
    let mut patch = Row::new();
    patch.insert(
        field.to_string(),
        serde_json::to_value(value).map_err(PersistenceError::from)?,
    );
    Ok(patch)
}

/// Inserts a record under its collection's write projection and decodes
/// the stored row.
pub(crate) fn insert_record<T: Record>(store: &dyn Store, record: &T) -> Result<T, GatewayError> {
    insert_row(store, to_row(record)?)
}

/// Inserts `row` into `T`'s collection under its write projection.
pub(crate) fn insert_row<T: Record>(store: &dyn Store, row: Row) -> Result<T, GatewayError> {
    let row = T::COLLECTION.write_projection().apply(row);
    decode(store.insert(T::COLLECTION, row)?)
}

/// Patches the record with `id` and decodes it. Exactly one row must
/// match.
pub(crate) fn update_record<T: Record>(
    store: &dyn Store,
    id: &str,
    patch: Row,
) -> Result<T, GatewayError> {
    let patch = T::COLLECTION.patch_projection().apply(patch);
    let rows = store.update(T::COLLECTION, &[Filter::eq("id", id)], patch)?;
    decode(single(T::COLLECTION, rows)?)
}
