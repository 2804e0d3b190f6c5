// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Database backends.
//!
//! - `sqlite` — connection initialization, migrations and PRAGMA setup
//! - `document` — the [`Store`](crate::Store) implementation over those
//!   connections

pub mod document;
pub mod sqlite;

pub use document::SqliteStore;
