// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Transport sub-marketplace: requests for delivery and transporter bids.

use serde::{Deserialize, Serialize};

literal_enum! {
    /// Who arranges transport for an order.
    pub enum TransportMode: "transport mode" {
        FarmerArranged => "farmer_arranged",
        Marketplace => "marketplace",
        BuyerOwn => "buyer_own",
    }
}

literal_enum! {
    /// Lifecycle of a transport request.
    pub enum TransportRequestStatus: "transport request status" {
        Draft => "draft",
        Open => "open",
        AwaitingFarmer => "awaiting_farmer",
        Assigned => "assigned",
        PickedUp => "picked_up",
        InTransit => "in_transit",
        Delivered => "delivered",
        Cancelled => "cancelled",
    }
}

transition_table!(TransportRequestStatus: "transport request status" {
    Draft => Open,
    Open => AwaitingFarmer,
    AwaitingFarmer => Assigned,
    Assigned => PickedUp,
    PickedUp => InTransit,
    InTransit => Delivered,
    Draft => Cancelled,
    Open => Cancelled,
    AwaitingFarmer => Cancelled,
    Assigned => Cancelled,
    PickedUp => Cancelled,
    InTransit => Cancelled,
});

literal_enum! {
    /// Outcome of a transporter's bid.
    pub enum TransportBidStatus: "transport bid status" {
        Pending => "pending",
        Accepted => "accepted",
        Rejected => "rejected",
        Withdrawn => "withdrawn",
    }
}

transition_table!(TransportBidStatus: "transport bid status" {
    Pending => Accepted,
    Pending => Rejected,
    Pending => Withdrawn,
});

literal_enum! {
    /// Vehicle class requested for a delivery.
    pub enum TransportVehicle: "vehicle type" {
        Bike => "Bike",
        Auto => "Auto",
        MiniTruck => "Mini Truck",
        Pickup => "Pickup",
        Truck => "Truck",
    }
}

/// Delivery logistics attached to an order.
///
/// `delivery_otp` is shown to the parties for pickup and drop
/// confirmation. Nothing in this workspace checks it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransportRequest {
    pub id: String,
    pub order_id: String,
    pub buyer_id: String,
    pub farmer_id: String,
    pub pickup_location: String,
    pub drop_location: String,
    pub weight_kg: f64,
    pub vehicle_type: TransportVehicle,
    pub mode: TransportMode,
    pub status: TransportRequestStatus,
    pub estimated_fare: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub final_fare: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transporter_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub delivery_otp: Option<String>,
    pub created_at: String,
}

/// Partial update of a transport request. Only `Some` fields are written.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransportRequestPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<TransportRequestStatus>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mode: Option<TransportMode>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub estimated_fare: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub final_fare: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transporter_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub delivery_otp: Option<String>,
}

/// A transporter's bid against a transport request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransportBid {
    pub id: String,
    pub request_id: String,
    pub transporter_id: String,
    pub amount: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    pub status: TransportBidStatus,
    pub created_at: String,
}
