// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use kisan_domain::{Dispute, DisputeStatus, Message};

use crate::gateway::{GatewayError, MarketplaceGateway, field_patch, insert_record, update_record};

impl MarketplaceGateway {
    /// # Errors
    ///
    /// Returns an error if no store is configured or the insert fails.
    pub fn add_message(&self, message: &Message) -> Result<Message, GatewayError> {
        self.hard("add_message", |store| insert_record(store, message))
    }

    /// # Errors
    ///
    /// Returns an error if no store is configured or the insert fails.
    pub fn raise_dispute(&self, dispute: &Dispute) -> Result<Dispute, GatewayError> {
        self.hard("raise_dispute", |store| insert_record(store, dispute))
    }

    /// Sets the status of dispute `id`, normally to
    /// [`DisputeStatus::Resolved`].
    ///
    /// # Errors
    ///
    /// Returns an error if no store is configured, the dispute does not
    /// exist, or the update fails.
    pub fn resolve_dispute(
        &self,
        id: &str,
        status: DisputeStatus,
    ) -> Result<Dispute, GatewayError> {
        self.hard("resolve_dispute", |store| {
            update_record(store, id, field_patch("status", &status)?)
        })
    }
}
