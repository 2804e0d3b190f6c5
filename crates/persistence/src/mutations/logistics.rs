// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use kisan_domain::{TransportBid, TransportBidStatus, TransportRequest, TransportRequestPatch};

use crate::gateway::{MarketplaceGateway, field_patch, insert_record, to_row, update_record};

impl MarketplaceGateway {
    /// Posts a transport request. Returns `None` if it could not be stored.
    #[must_use]
    pub fn add_transport_request(&self, request: &TransportRequest) -> Option<TransportRequest> {
        self.soft("add_transport_request", |store| {
            insert_record(store, request)
        })
    }

    /// Applies the fields set in `patch` to transport request `id`.
    ///
    /// Returns `None` if the request does not exist or the update fails.
    #[must_use]
    pub fn update_transport_request(
        &self,
        id: &str,
        patch: &TransportRequestPatch,
    ) -> Option<TransportRequest> {
        self.soft("update_transport_request", |store| {
            update_record(store, id, to_row(patch)?)
        })
    }

    /// Places a transporter's bid. Returns `None` if it could not be stored.
    #[must_use]
    pub fn add_transport_bid(&self, bid: &TransportBid) -> Option<TransportBid> {
        self.soft("add_transport_bid", |store| insert_record(store, bid))
    }

    /// Moves bid `id` to `status`.
    ///
    /// Returns `None` if the bid does not exist or the update fails.
    #[must_use]
    pub fn set_transport_bid_status(
        &self,
        id: &str,
        status: TransportBidStatus,
    ) -> Option<TransportBid> {
        self.soft("set_transport_bid_status", |store| {
            update_record(store, id, field_patch("status", &status)?)
        })
    }
}
