// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use kisan_domain::{CropListing, Dispute, Message, Offer, Order};

use crate::gateway::MarketplaceGateway;

impl MarketplaceGateway {
    /// All listings, newest first.
    #[must_use]
    pub fn get_listings(&self) -> Vec<CropListing> {
        self.list("get_listings")
    }

    #[must_use]
    pub fn get_offers(&self) -> Vec<Offer> {
        self.list("get_offers")
    }

    /// All orders, most recent `date` first.
    #[must_use]
    pub fn get_orders(&self) -> Vec<Order> {
        self.list("get_orders")
    }

    #[must_use]
    pub fn get_disputes(&self) -> Vec<Dispute> {
        self.list("get_disputes")
    }

    /// All messages, oldest first.
    #[must_use]
    pub fn get_messages(&self) -> Vec<Message> {
        self.list("get_messages")
    }
}
