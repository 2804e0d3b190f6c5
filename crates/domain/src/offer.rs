// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Offers and their negotiation history.

use serde::{Deserialize, Serialize};

use crate::error::DomainError;
use crate::timestamp::{now_rfc3339, parse_rfc3339};

literal_enum! {
    /// Outcome of a buyer's offer.
    pub enum OfferStatus: "offer status" {
        Pending => "pending",
        Accepted => "accepted",
        Rejected => "rejected",
        Cancelled => "cancelled",
    }
}

transition_table!(OfferStatus: "offer status" {
    Pending => Accepted,
    Pending => Rejected,
    Pending => Cancelled,
});

literal_enum! {
    /// Party acting in a negotiation.
    pub enum NegotiationRole: "negotiation role" {
        Buyer => "buyer",
        Farmer => "farmer",
    }
}

literal_enum! {
    /// What a negotiation entry records.
    pub enum NegotiationAction: "negotiation action" {
        Offer => "offer",
        Counter => "counter",
        Reject => "reject",
        Accept => "accept",
        Cancel => "cancel",
    }
}

/// One step of the back-and-forth on an offer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NegotiationEntry {
    pub role: NegotiationRole,
    pub price: f64,
    pub quantity: f64,
    pub action: NegotiationAction,
    pub timestamp: String,
}

impl NegotiationEntry {
    /// Creates an entry stamped with the current UTC time.
    ///
    /// # Errors
    ///
    /// Returns an error if the current time cannot be formatted.
    pub fn now(
        role: NegotiationRole,
        price: f64,
        quantity: f64,
        action: NegotiationAction,
    ) -> Result<Self, DomainError> {
        Ok(Self {
            role,
            price,
            quantity,
            action,
            timestamp: now_rfc3339()?,
        })
    }
}

/// A buyer's negotiation proposal against a listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Offer {
    pub id: String,
    pub listing_id: String,
    pub crop_name: String,
    pub buyer_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub buyer_business: Option<String>,
    pub buyer_location: String,
    pub offered_price: f64,
    pub quantity_requested: f64,
    pub status: OfferStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub counter_price: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub counter_quantity: Option<f64>,
    /// Whose move produced the current state; the other party acts next.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_action_by: Option<NegotiationRole>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub history: Option<Vec<NegotiationEntry>>,
    /// Listing price at the time the offer was placed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price_per_kg: Option<f64>,
    /// Listing quantity at the time the offer was placed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quantity: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_amount: Option<f64>,
    pub created_at: String,
}

impl Offer {
    /// Appends a negotiation entry and records its role as the last actor.
    ///
    /// History is append-only and strictly increasing in time.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidTimestamp` if either timestamp is not
    /// RFC 3339, or `DomainError::NonMonotonicHistory` if the entry is not
    /// later than the current last entry.
    pub fn append_history(&mut self, entry: NegotiationEntry) -> Result<(), DomainError> {
        let next = parse_rfc3339(&entry.timestamp)?;
        let history = self.history.get_or_insert_with(Vec::new);

        if let Some(last) = history.last() {
            let previous = parse_rfc3339(&last.timestamp)?;
            if next <= previous {
                return Err(DomainError::NonMonotonicHistory {
                    previous: last.timestamp.clone(),
                    next: entry.timestamp,
                });
            }
        }

        self.last_action_by = Some(entry.role);
        history.push(entry);
        Ok(())
    }
}

/// Partial update of an offer. Only `Some` fields are written.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OfferUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<OfferStatus>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub offered_price: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quantity_requested: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub counter_price: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub counter_quantity: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_action_by: Option<NegotiationRole>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub history: Option<Vec<NegotiationEntry>>,
}

impl OfferUpdate {
    /// Builds the update that persists an offer's negotiation state:
    /// status, counter terms, last actor and full history.
    #[must_use]
    pub fn negotiation(offer: &Offer) -> Self {
        Self {
            status: Some(offer.status),
            counter_price: offer.counter_price,
            counter_quantity: offer.counter_quantity,
            last_action_by: offer.last_action_by,
            history: offer.history.clone(),
            ..Self::default()
        }
    }
}
