// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Orders created from accepted offers.

use serde::{Deserialize, Serialize};

literal_enum! {
    /// Delivery progress of an order.
    pub enum OrderStatus: "order status" {
        Confirmed => "confirmed",
        PickedUp => "picked_up",
        InTransit => "in_transit",
        Delivered => "delivered",
        Cancelled => "cancelled",
    }
}

// Cancellation is possible from every state before delivery.
transition_table!(OrderStatus: "order status" {
    Confirmed => PickedUp,
    PickedUp => InTransit,
    InTransit => Delivered,
    Confirmed => Cancelled,
    PickedUp => Cancelled,
    InTransit => Cancelled,
});

/// A confirmed transaction, tracked through delivery.
///
/// Farmer and buyer names and locations are copied in at creation so the
/// order can be displayed without joining other records.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: String,
    pub listing_id: String,
    pub crop_name: String,
    pub quantity: f64,
    pub total_amount: f64,
    pub status: OrderStatus,
    pub date: String,
    pub farmer_name: String,
    pub farmer_location: String,
    pub buyer_name: String,
    pub buyer_location: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transporter_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub distance_km: Option<f64>,
}
