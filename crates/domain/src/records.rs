// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Auxiliary records: inventory, payouts, requests for quotation and
//! transporter route plans. None of these carry cross-record invariants.

use serde::{Deserialize, Serialize};

use crate::listing::Grade;

/// A graded batch of a listing held in storage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InventoryItem {
    pub id: String,
    pub listing_id: String,
    pub batch_id: String,
    pub grade: Grade,
    pub quantity_kg: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub storage_location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expiry_date: Option<String>,
    pub created_at: String,
}

literal_enum! {
    /// Settlement state of a payout.
    pub enum PayoutStatus: "payout status" {
        Pending => "pending",
        Processing => "processing",
        Paid => "paid",
        Failed => "failed",
    }
}

/// Money owed to a user for a sale or a delivery.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Payout {
    pub id: String,
    pub user_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub listing_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order_id: Option<String>,
    pub amount: f64,
    pub status: PayoutStatus,
    pub created_at: String,
}

literal_enum! {
    /// Whether an RFQ still accepts quotes.
    pub enum RfqStatus: "rfq status" {
        Open => "open",
        Closed => "closed",
    }
}

/// A buyer's request for quotation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Rfq {
    pub id: String,
    pub buyer_id: String,
    pub crop_name: String,
    pub quantity_kg: f64,
    pub target_price_per_kg: f64,
    pub status: RfqStatus,
    pub created_at: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteStop {
    pub name: String,
    pub eta: String,
}

/// A transporter's planned stops for an order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoutePlan {
    pub id: String,
    pub transporter_id: String,
    pub order_id: String,
    #[serde(default)]
    pub stops: Vec<RouteStop>,
    pub created_at: String,
}
