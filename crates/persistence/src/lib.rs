// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Data gateway for the Kisan agricultural marketplace.
//!
//! This crate is the only place the marketplace touches its record store.
//! It exposes one operation per entity per action on
//! [`MarketplaceGateway`] and keeps the store itself behind the [`Store`]
//! trait.
//!
//! ## Store
//!
//! The bundled backend is [`SqliteStore`], a Diesel `SQLite` connection
//! holding one JSON document table per [`Collection`]. Migrations are
//! embedded and run when the store opens.
//!
//! ## Failure contracts
//!
//! - Getters and auxiliary writes (inventory, payouts, RFQs, route plans,
//!   transport) are *soft*: failures are logged and the caller gets an
//!   empty `Vec` or `None`.
//! - Core writes (listings, offers, orders, messages, disputes, profiles)
//!   are *hard*: failures are logged and returned as [`GatewayError`].
//!
//! ## Write projections
//!
//! Every insert passes through its collection's [`Projection`]. Sign-up
//! credentials are dropped from users, and listings, offers, orders and
//! payouts keep only their allow-listed fields.
//!
//! ## Configuration
//!
//! [`MarketplaceGateway::global`] reads [`StoreConfig::from_env`]
//! (`KISAN_DATABASE_URL`, `KISAN_DATABASE_WAL`) once per process.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(clippy::multiple_crate_versions)]

mod backend;
mod collection;
mod config;
mod error;
mod gateway;
mod mutations;
mod projection;
mod queries;
mod query;
mod store;

#[cfg(test)]
mod tests;

pub use backend::SqliteStore;
pub use collection::{
    Collection, LISTING_FIELDS, OFFER_FIELDS, ORDER_FIELDS, PAYOUT_FIELDS, Record,
    USER_SECRET_FIELDS,
};
pub use config::{DATABASE_URL_VAR, DATABASE_WAL_VAR, IN_MEMORY_URL, StoreConfig};
pub use error::PersistenceError;
pub use gateway::{GatewayError, MarketplaceGateway};
pub use projection::Projection;
pub use query::{Direction, Filter, Order, Row, Select, single, validate_field};
pub use store::Store;
