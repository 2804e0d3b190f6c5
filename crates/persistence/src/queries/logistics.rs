// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use kisan_domain::{TransportBid, TransportRequest};

use crate::gateway::MarketplaceGateway;

impl MarketplaceGateway {
    /// All transport requests, newest first.
    #[must_use]
    pub fn get_transport_requests(&self) -> Vec<TransportRequest> {
        self.list("get_transport_requests")
    }

    #[must_use]
    pub fn get_transport_bids(&self) -> Vec<TransportBid> {
        self.list("get_transport_bids")
    }
}
