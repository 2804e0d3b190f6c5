// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Read-only gateway operations.
//!
//! Every getter follows the soft contract: with no store, or when the
//! store fails, it logs and returns an empty `Vec` (or `None`). Rows that
//! do not decode into the record type are logged and skipped.
//!
//! ## Module Organization
//!
//! - `users` — user listing and phone lookup
//! - `trade` — listings, offers, orders, disputes and messages
//! - `records` — inventory, payouts, RFQs and route plans
//! - `logistics` — transport requests and bids

mod logistics;
mod records;
mod trade;
mod users;
