// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use kisan_domain::{InventoryItem, Payout, Rfq, RoutePlan};

use crate::gateway::MarketplaceGateway;

impl MarketplaceGateway {
    #[must_use]
    pub fn get_inventory_items(&self) -> Vec<InventoryItem> {
        self.list("get_inventory_items")
    }

    #[must_use]
    pub fn get_payouts(&self) -> Vec<Payout> {
        self.list("get_payouts")
    }

    #[must_use]
    pub fn get_rfqs(&self) -> Vec<Rfq> {
        self.list("get_rfqs")
    }

    #[must_use]
    pub fn get_route_plans(&self) -> Vec<RoutePlan> {
        self.list("get_route_plans")
    }
}
