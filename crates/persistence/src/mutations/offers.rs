// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use kisan_domain::{Offer, OfferStatus, OfferUpdate};
use tracing::debug;

use crate::collection::Collection;
use crate::gateway::{GatewayError, MarketplaceGateway, decode, field_patch, to_row, update_record};

impl MarketplaceGateway {
    /// Places a buyer's offer. Negotiation state is not part of the
    /// initial record.
    ///
    /// # Errors
    ///
    /// Returns an error if no store is configured or the insert fails.
    pub fn place_offer(&self, offer: &Offer) -> Result<Offer, GatewayError> {
        self.hard("place_offer", |store| {
            let row = Collection::Offers.write_projection().apply(to_row(offer)?);
            debug!(payload = ?row, "Placing offer");
            decode(store.insert(Collection::Offers, row)?)
        })
    }

    /// # Errors
    ///
    /// Returns an error if no store is configured, the offer does not
    /// exist, or the update fails.
    pub fn set_offer_status(&self, id: &str, status: OfferStatus) -> Result<Offer, GatewayError> {
        self.hard("set_offer_status", |store| {
            update_record(store, id, field_patch("status", &status)?)
        })
    }

    /// Applies the fields set in `update` to offer `id`.
    ///
    /// # Errors
    ///
    /// Returns an error if no store is configured, the offer does not
    /// exist, or the update fails.
    pub fn update_offer(&self, id: &str, update: &OfferUpdate) -> Result<Offer, GatewayError> {
        self.hard("update_offer", |store| update_record(store, id, to_row(update)?))
    }
}
