// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Crop listings.

use serde::{Deserialize, Serialize};

literal_enum! {
    /// Lifecycle of a listing on the marketplace.
    pub enum ListingStatus: "listing status" {
        /// Visible and accepting offers.
        Active => "active",
        /// Hidden by the farmer; can be resumed.
        Paused => "paused",
        /// No quantity left to sell.
        SoldOut => "sold_out",
    }
}

transition_table!(ListingStatus: "listing status" {
    Active => Paused,
    Active => SoldOut,
    Paused => Active,
    Paused => SoldOut,
    SoldOut => Active,
});

literal_enum! {
    /// Quality grade of a crop lot.
    pub enum Grade: "grade" {
        A => "A",
        B => "B",
        C => "C",
    }
}

literal_enum! {
    /// Unit a quantity is expressed in.
    pub enum QuantityUnit: "quantity unit" {
        Kg => "kg",
        Quintal => "quintal",
        Ton => "ton",
        Gram => "gram",
    }
}

literal_enum! {
    /// Unit a price is quoted per.
    pub enum PriceUnit: "price unit" {
        PerKg => "per_kg",
        PerQuintal => "per_quintal",
        PerTon => "per_ton",
        PerGram => "per_gram",
    }
}

literal_enum! {
    /// Container format of a listing video.
    pub enum VideoType: "video type" {
        Mp4 => "video/mp4",
        Webm => "video/webm",
    }
}

literal_enum! {
    /// How the produce is being stored.
    pub enum StorageType: "storage type" {
        Ambient => "Ambient",
        ColdStorage => "Cold Storage",
        HermeticBag => "Hermetic Bag",
        OpenSacks => "Open Sacks",
    }
}

/// A farmer's crop lot offered for sale.
///
/// `available_quantity` starts equal to `quantity` and decreases as offers
/// are accepted. The store does not enforce this; see
/// [`CropListing::has_consistent_quantity`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CropListing {
    pub id: String,
    pub farmer_id: String,
    pub farmer_name: String,
    pub crop_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub variety: Option<String>,
    pub grade: Grade,
    pub quantity: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quantity_unit: Option<QuantityUnit>,
    pub available_quantity: f64,
    pub price_per_kg: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price_unit: Option<PriceUnit>,
    pub description: String,
    #[serde(default)]
    pub image_urls: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub video_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub video_duration_sec: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub video_size_bytes: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub video_type: Option<VideoType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub video_thumbnail: Option<String>,
    pub location: String,
    pub status: ListingStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub harvest_date: Option<String>,
    pub created_at: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub storage_type: Option<StorageType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub certification: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_order_quantity: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_order_quantity_unit: Option<QuantityUnit>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub available_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub packaging_details: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub moisture_content: Option<f64>,
}

impl CropListing {
    /// Returns true if both quantities are non-negative and the available
    /// quantity does not exceed the total.
    #[must_use]
    pub fn has_consistent_quantity(&self) -> bool {
        self.available_quantity >= 0.0
            && self.quantity >= 0.0
            && self.available_quantity <= self.quantity
    }
}
