// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! State-changing gateway operations.
//!
//! Inserts pass through the collection's write projection before they
//! reach the store. Updates target one record by id and expect exactly
//! that record back. Status setters overwrite the status field as given;
//! transition rules are left to callers.
//!
//! ## Module Organization
//!
//! - `users` — sign-up and profile updates
//! - `listings` — crop listings
//! - `offers` — offers and negotiation state
//! - `orders` — orders and transporter assignment
//! - `messaging` — messages and disputes
//! - `records` — inventory, payouts, RFQs and route plans (soft)
//! - `logistics` — transport requests and bids (soft)

mod listings;
mod logistics;
mod messaging;
mod offers;
mod orders;
mod records;
mod users;
