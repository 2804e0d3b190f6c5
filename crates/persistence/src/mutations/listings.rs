// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use kisan_domain::{CropListing, ListingStatus};
use tracing::debug;

use crate::collection::Collection;
use crate::gateway::{
    GatewayError, MarketplaceGateway, field_patch, insert_record, to_row, update_record,
};
use crate::query::Filter;

impl MarketplaceGateway {
    /// Publishes a listing. Only the listing's core fields are stored.
    ///
    /// # Errors
    ///
    /// Returns an error if no store is configured or the insert fails.
    pub fn add_listing(&self, listing: &CropListing) -> Result<CropListing, GatewayError> {
        self.hard("add_listing", |store| insert_record(store, listing))
    }

    /// Rewrites the core fields of the listing with `listing.id`.
    ///
    /// # Errors
    ///
    /// Returns an error if no store is configured, the listing does not
    /// exist, or the update fails.
    pub fn update_listing(&self, listing: &CropListing) -> Result<CropListing, GatewayError> {
        self.hard("update_listing", |store| {
            let patch = Collection::Listings
                .write_projection()
                .apply(to_row(listing)?);
            update_record(store, &listing.id, patch)
        })
    }

    /// # Errors
    ///
    /// Returns an error if no store is configured, the listing does not
    /// exist, or the update fails.
    pub fn update_listing_status(
        &self,
        id: &str,
        status: ListingStatus,
    ) -> Result<CropListing, GatewayError> {
        self.hard("update_listing_status", |store| {
            update_record(store, id, field_patch("status", &status)?)
        })
    }

    /// Deletes the listing with `id`. Deleting a missing listing succeeds.
    ///
    /// # Errors
    ///
    /// Returns an error if no store is configured or the delete fails.
    pub fn delete_listing(&self, id: &str) -> Result<(), GatewayError> {
        self.hard("delete_listing", |store| {
            let deleted = store.delete(Collection::Listings, &[Filter::eq("id", id)])?;
            debug!(id, deleted, "Listing deleted");
            Ok(())
        })
    }
}
