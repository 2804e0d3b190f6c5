// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Store configuration read from the environment.

use tracing::info;

use crate::backend::SqliteStore;
use crate::error::PersistenceError;

/// Environment variable naming the `SQLite` database to open.
pub const DATABASE_URL_VAR: &str = "KISAN_DATABASE_URL";

/// Environment variable toggling WAL mode for file databases.
pub const DATABASE_WAL_VAR: &str = "KISAN_DATABASE_WAL";

/// URL that selects a private in-memory database.
pub const IN_MEMORY_URL: &str = ":memory:";

/// Where the marketplace store lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    /// `SQLite` path or URL. `None` leaves the gateway unconfigured.
    pub database_url: Option<String>,
    /// Enable WAL on file databases.
    pub wal: bool,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            database_url: None,
            wal: true,
        }
    }
}

impl StoreConfig {
    /// Configuration for a fresh in-memory store.
    #[must_use]
    pub fn in_memory() -> Self {
        Self {
            database_url: Some(IN_MEMORY_URL.to_string()),
            ..Self::default()
        }
    }

    /// Reads `KISAN_DATABASE_URL` and `KISAN_DATABASE_WAL`.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Reads configuration through `lookup`, which maps a variable name to
    /// its value.
    ///
    /// Blank URLs count as unset. WAL stays on unless the variable holds
    /// something other than `1`, `true`, `yes` or `on`.
    #[must_use]
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url = lookup(DATABASE_URL_VAR)
            .map(|url| url.trim().to_string())
            .filter(|url| !url.is_empty());
        let wal = lookup(DATABASE_WAL_VAR).is_none_or(|value| {
            matches!(
                value.trim().to_ascii_lowercase().as_str(),
                "1" | "true" | "yes" | "on"
            )
        });

        Self { database_url, wal }
    }

    /// Returns true if a database has been named.
    #[must_use]
    pub const fn is_configured(&self) -> bool {
        self.database_url.is_some()
    }

    /// Opens the configured store, or returns `None` if no database is
    /// named.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be opened or migrated.
    pub fn open_store(&self) -> Result<Option<SqliteStore>, PersistenceError> {
        let Some(url) = self.database_url.as_deref() else {
            return Ok(None);
        };

        let store = if url == IN_MEMORY_URL {
            info!("Using in-memory database");
            SqliteStore::new_in_memory()?
        } else if self.wal {
            info!(database_url = url, "Using file-based database");
            SqliteStore::new_with_file(url)?
        } else {
            info!(database_url = url, "Using database without WAL");
            SqliteStore::open(url)?
        };

        Ok(Some(store))
    }
}
