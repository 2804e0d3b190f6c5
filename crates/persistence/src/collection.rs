// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The marketplace collections and what the gateway knows about each:
//! its stored name, the order getters list it in, and the projection
//! applied before a record is written to it.

use kisan_domain::{
    CropListing, Dispute, InventoryItem, Message, Offer, Order as MarketOrder, Payout, Rfq,
    RoutePlan, TransportBid, TransportRequest, User,
};
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::projection::Projection;
use crate::query::Order;

/// Fields a listing is written with. Anything else on the record
/// (variety, video metadata, storage details) is not persisted.
pub const LISTING_FIELDS: &[&str] = &[
    "id",
    "farmerId",
    "farmerName",
    "cropName",
    "grade",
    "quantity",
    "availableQuantity",
    "pricePerKg",
    "description",
    "imageUrls",
    "location",
    "status",
    "harvestDate",
    "createdAt",
];

/// Fields an offer is placed with. Negotiation state is added later
/// through offer updates.
pub const OFFER_FIELDS: &[&str] = &[
    "id",
    "listingId",
    "cropName",
    "buyerName",
    "buyerLocation",
    "pricePerKg",
    "quantity",
    "quantityRequested",
    "offeredPrice",
    "totalAmount",
    "status",
    "createdAt",
];

pub const ORDER_FIELDS: &[&str] = &[
    "id",
    "listingId",
    "cropName",
    "quantity",
    "totalAmount",
    "status",
    "date",
    "farmerName",
    "farmerLocation",
    "buyerName",
    "buyerLocation",
    "distanceKm",
    "transporterId",
];

pub const PAYOUT_FIELDS: &[&str] = &[
    "id",
    "userId",
    "listingId",
    "orderId",
    "amount",
    "status",
    "createdAt",
];

/// Sign-up form fields that must never reach the store.
pub const USER_SECRET_FIELDS: &[&str] = &["password", "confirmPassword"];

/// A named collection of records in the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Collection {
    Users,
    Listings,
    Offers,
    Orders,
    Disputes,
    Messages,
    InventoryItems,
    Payouts,
    Rfqs,
    RoutePlans,
    TransportRequests,
    TransportBids,
}

impl Collection {
    pub const ALL: &'static [Self] = &[
        Self::Users,
        Self::Listings,
        Self::Offers,
        Self::Orders,
        Self::Disputes,
        Self::Messages,
        Self::InventoryItems,
        Self::Payouts,
        Self::Rfqs,
        Self::RoutePlans,
        Self::TransportRequests,
        Self::TransportBids,
    ];

    /// Returns the stored name of the collection.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Users => "users",
            Self::Listings => "listings",
            Self::Offers => "offers",
            Self::Orders => "orders",
            Self::Disputes => "disputes",
            Self::Messages => "messages",
            Self::InventoryItems => "inventory_items",
            Self::Payouts => "payouts",
            Self::Rfqs => "rfqs",
            Self::RoutePlans => "route_plans",
            Self::TransportRequests => "transport_requests",
            Self::TransportBids => "transport_bids",
        }
    }

    /// Returns the order list getters use.
    ///
    /// Messages read oldest first, as a conversation. Orders sort on
    /// their `date`. Everything else is newest `createdAt` first.
    #[must_use]
    pub fn list_order(self) -> Order {
        match self {
            Self::Messages => Order::ascending("timestamp"),
            Self::Orders => Order::descending("date"),
            _ => Order::descending("createdAt"),
        }
    }

    /// Returns the projection applied to full records before they are
    /// inserted (or, for listings, rewritten).
    #[must_use]
    pub const fn write_projection(self) -> Projection {
        match self {
            Self::Users => Projection::DenyList(USER_SECRET_FIELDS),
            Self::Listings => Projection::AllowList(LISTING_FIELDS),
            Self::Offers => Projection::AllowList(OFFER_FIELDS),
            Self::Orders => Projection::AllowList(ORDER_FIELDS),
            Self::Payouts => Projection::AllowList(PAYOUT_FIELDS),
            Self::Disputes
            | Self::Messages
            | Self::InventoryItems
            | Self::Rfqs
            | Self::RoutePlans
            | Self::TransportRequests
            | Self::TransportBids => Projection::Passthrough,
        }
    }

    /// Returns the projection applied to partial updates.
    ///
    /// Patches name their own fields, so only the deny-lists apply.
    #[must_use]
    pub const fn patch_projection(self) -> Projection {
        match self.write_projection() {
            Projection::DenyList(fields) => Projection::DenyList(fields),
            Projection::AllowList(_) | Projection::Passthrough => Projection::Passthrough,
        }
    }
}

impl std::fmt::Display for Collection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A domain record stored in exactly one collection.
pub trait Record: Serialize + DeserializeOwned {
    const COLLECTION: Collection;
}

macro_rules! impl_record {
    ($($ty:ty => $collection:ident),+ $(,)?) => {
        $(
            impl Record for $ty {
                const COLLECTION: Collection = Collection::$collection;
            }
        )+
    };
}

impl_record! {
    User => Users,
    CropListing => Listings,
    Offer => Offers,
    MarketOrder => Orders,
    Dispute => Disputes,
    Message => Messages,
    InventoryItem => InventoryItems,
    Payout => Payouts,
    Rfq => Rfqs,
    RoutePlan => RoutePlans,
    TransportRequest => TransportRequests,
    TransportBid => TransportBids,
}
