// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Domain model for the Kisan agricultural marketplace.
//!
//! This crate defines the records shuttled by the persistence gateway:
//! users and their role-specific profiles, crop listings, offers with
//! negotiation history, orders, the transport sub-marketplace, messages,
//! disputes, and the auxiliary inventory/payout/RFQ/route records.
//!
//! Records serialize with `camelCase` field names and string-literal
//! enumerations, which is the shape the marketplace store keeps them in.
//!
//! Status enumerations carry explicit transition tables. Nothing in the
//! persistence layer consults them; they exist for callers that want to
//! check a lifecycle move before asking the gateway to overwrite a status.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(clippy::multiple_crate_versions)]

/// Macro to generate a closed string-literal enumeration.
///
/// Each variant is paired with the literal it is stored as. The macro
/// generates:
/// - the enum itself, with serde renames matching the literals
/// - `ALL`, every variant in declaration order
/// - `as_str()` returning the stored literal
/// - `FromStr`, rejecting unknown literals with `DomainError::InvalidValue`
/// - `Display`, writing the stored literal
///
/// # Usage
///
/// ```ignore
/// literal_enum! {
///     /// Grade of a crop lot.
///     pub enum Grade: "grade" {
///         A => "A",
///         B => "B",
///     }
/// }
/// ```
macro_rules! literal_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident : $kind:literal {
            $(
                $(#[$vmeta:meta])*
                $variant:ident => $text:literal
            ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
        $vis enum $name {
            $(
                $(#[$vmeta])*
                #[serde(rename = $text)]
                $variant,
            )+
        }

        impl $name {
            /// Every variant, in declaration order.
            pub const ALL: &'static [Self] = &[$(Self::$variant),+];

            /// Returns the literal this value is stored as.
            #[must_use]
            pub const fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => $text,)+
                }
            }
        }

        impl std::str::FromStr for $name {
            type Err = $crate::DomainError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($text => Ok(Self::$variant),)+
                    _ => Err($crate::DomainError::InvalidValue {
                        kind: $kind,
                        value: s.to_string(),
                    }),
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

/// Macro to attach an explicit adjacency table to a status enumeration.
///
/// Generates `TRANSITIONS`, `can_transition_to`, `is_terminal` and
/// `validate_transition`. A status is terminal when it has no outgoing
/// edge in the table.
macro_rules! transition_table {
    ($name:ident : $kind:literal { $($from:ident => $to:ident),+ $(,)? }) => {
        impl $name {
            /// Legal `(from, to)` moves for this lifecycle.
            pub const TRANSITIONS: &'static [(Self, Self)] = &[$((Self::$from, Self::$to)),+];

            /// Returns true if the table contains the move `self -> target`.
            #[must_use]
            pub fn can_transition_to(self, target: Self) -> bool {
                Self::TRANSITIONS.contains(&(self, target))
            }

            /// Returns true if no move leaves this status.
            #[must_use]
            pub fn is_terminal(self) -> bool {
                !Self::TRANSITIONS.iter().any(|(from, _)| *from == self)
            }

            /// Checks the move `self -> target` against the table.
            ///
            /// # Errors
            ///
            /// Returns `DomainError::InvalidStatusTransition` if the move is not listed.
            pub fn validate_transition(self, target: Self) -> Result<(), $crate::DomainError> {
                if self.can_transition_to(target) {
                    Ok(())
                } else {
                    Err($crate::DomainError::InvalidStatusTransition {
                        kind: $kind,
                        from: self.as_str().to_string(),
                        to: target.as_str().to_string(),
                    })
                }
            }
        }
    };
}

mod error;
mod listing;
mod logistics;
mod messaging;
mod offer;
mod order;
mod records;
mod timestamp;
mod user;

#[cfg(test)]
mod tests;

pub use error::DomainError;
pub use listing::{
    CropListing, Grade, ListingStatus, PriceUnit, QuantityUnit, StorageType, VideoType,
};
pub use logistics::{
    TransportBid, TransportBidStatus, TransportMode, TransportRequest, TransportRequestPatch,
    TransportRequestStatus, TransportVehicle,
};
pub use messaging::{Dispute, DisputeStatus, Message};
pub use offer::{
    NegotiationAction, NegotiationEntry, NegotiationRole, Offer, OfferStatus, OfferUpdate,
};
pub use order::{Order, OrderStatus};
pub use records::{InventoryItem, Payout, PayoutStatus, Rfq, RfqStatus, RoutePlan, RouteStop};
pub use timestamp::{now_rfc3339, parse_rfc3339};
pub use user::{
    Address, ApprovalStatus, BankDetails, BuyerProfile, BuyerType, DocumentStatus, FarmerProfile,
    IrrigationSource, JobAvailability, LandType, LandUnit, NewUser, PackagingPreference,
    PreferredJobType, PurchaseCapacity, PurchaseFrequency, QualityPreference, RouteType,
    SeasonalCrops, TransporterDocument, TransporterDocuments, TransporterProfile, User,
    UserProfile, UserRole, UserStatus,
};
