// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use kisan_domain::{Order, OrderStatus};
use tracing::debug;

use crate::collection::Collection;
use crate::gateway::{GatewayError, MarketplaceGateway, decode, field_patch, to_row, update_record};

impl MarketplaceGateway {
    /// Records a confirmed order.
    ///
    /// # Errors
    ///
    /// Returns an error if no store is configured or the insert fails.
    pub fn create_order(&self, order: &Order) -> Result<Order, GatewayError> {
        self.hard("create_order", |store| {
            let row = Collection::Orders.write_projection().apply(to_row(order)?);
            debug!(payload = ?row, "Creating order");
            decode(store.insert(Collection::Orders, row)?)
        })
    }

    /// # Errors
    ///
    /// Returns an error if no store is configured, the order does not
    /// exist, or the update fails.
    pub fn set_order_status(&self, id: &str, status: OrderStatus) -> Result<Order, GatewayError> {
        self.hard("set_order_status", |store| {
            update_record(store, id, field_patch("status", &status)?)
        })
    }

    /// Assigns a transporter to order `id`.
    ///
    /// # Errors
    ///
    /// Returns an error if no store is configured, the order does not
    /// exist, or the update fails.
    pub fn set_order_transporter(
        &self,
        id: &str,
        transporter_id: &str,
    ) -> Result<Order, GatewayError> {
        self.hard("set_order_transporter", |store| {
            update_record(store, id, field_patch("transporterId", &transporter_id)?)
        })
    }
}
