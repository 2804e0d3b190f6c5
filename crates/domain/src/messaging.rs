// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Messages between users and disputes raised against orders.

use serde::{Deserialize, Serialize};

use crate::user::UserRole;

/// Directed text from one user to another, optionally scoped to a listing
/// or an order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    pub id: String,
    pub from_user_id: String,
    pub to_user_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub listing_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order_id: Option<String>,
    pub text: String,
    pub timestamp: String,
    #[serde(default)]
    pub read: bool,
}

literal_enum! {
    /// State of a dispute.
    pub enum DisputeStatus: "dispute status" {
        Open => "open",
        Resolved => "resolved",
    }
}

transition_table!(DisputeStatus: "dispute status" {
    Open => Resolved,
});

/// A complaint raised against an order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Dispute {
    pub id: String,
    pub order_id: String,
    /// Display name of the person who raised it.
    pub raised_by: String,
    #[serde(default)]
    pub role: Option<UserRole>,
    pub issue: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amount: Option<f64>,
    pub status: DisputeStatus,
    pub created_at: String,
}
