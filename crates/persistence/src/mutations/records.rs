// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use kisan_domain::{InventoryItem, Payout, Rfq, RoutePlan};

use crate::gateway::{MarketplaceGateway, insert_record};

impl MarketplaceGateway {
    /// Records an inventory lot. Returns `None` if it could not be stored.
    #[must_use]
    pub fn add_inventory_item(&self, item: &InventoryItem) -> Option<InventoryItem> {
        self.soft("add_inventory_item", |store| insert_record(store, item))
    }

    /// Records a payout. Only the settlement fields are stored.
    ///
    /// Returns `None` if the payout could not be stored.
    #[must_use]
    pub fn add_payout(&self, payout: &Payout) -> Option<Payout> {
        self.soft("add_payout", |store| insert_record(store, payout))
    }

    /// Records a buyer's request for quotation. Returns `None` on failure.
    #[must_use]
    pub fn add_rfq(&self, rfq: &Rfq) -> Option<Rfq> {
        self.soft("add_rfq", |store| insert_record(store, rfq))
    }

    /// Records a transporter's route plan. Returns `None` on failure.
    #[must_use]
    pub fn add_route_plan(&self, plan: &RoutePlan) -> Option<RoutePlan> {
        self.soft("add_route_plan", |store| insert_record(store, plan))
    }
}
