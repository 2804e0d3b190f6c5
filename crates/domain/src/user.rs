// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Users and their role-specific profiles.
//!
//! The store keeps a user's `role` and `profile` side by side, with the
//! profile as a plain object. Here the profile is a tagged union whose
//! variant is selected by the role when a record is decoded.

use serde::ser::SerializeStruct;
use serde::{Deserialize, Serialize, Serializer};

use crate::error::DomainError;

literal_enum! {
    /// Marketplace role of a user.
    ///
    /// A user who has not picked a role yet has no `UserRole` at all.
    pub enum UserRole: "user role" {
        Farmer => "farmer",
        Buyer => "buyer",
        Transporter => "transporter",
        Admin => "admin",
    }
}

literal_enum! {
    /// Whether a user may act on the marketplace.
    pub enum UserStatus: "user status" {
        Active => "active",
        Suspended => "suspended",
    }
}

literal_enum! {
    pub enum LandUnit: "land unit" {
        Acres => "Acres",
        Hectares => "Hectares",
    }
}

literal_enum! {
    pub enum LandType: "land type" {
        Owned => "Owned",
        Leased => "Leased",
        Mixed => "Mixed",
    }
}

literal_enum! {
    pub enum IrrigationSource: "irrigation source" {
        RainFed => "Rain-fed",
        Borewell => "Borewell",
        Canal => "Canal",
        Drip => "Drip",
    }
}

literal_enum! {
    pub enum BuyerType: "buyer type" {
        Wholesaler => "Wholesaler",
        Retailer => "Retailer",
        Exporter => "Exporter",
        Processor => "Processor",
        IndividualTrader => "Individual Trader",
    }
}

literal_enum! {
    pub enum QualityPreference: "quality preference" {
        Standard => "Standard",
        Premium => "Premium",
        Organic => "Organic",
    }
}

literal_enum! {
    pub enum PackagingPreference: "packaging preference" {
        Loose => "Loose",
        Bags => "Bags",
        Boxes => "Boxes",
    }
}

literal_enum! {
    pub enum PurchaseCapacity: "purchase capacity" {
        Small => "Small (≤ 1 ton)",
        Medium => "Medium (1–5 tons)",
        Large => "Large (5+ tons)",
    }
}

literal_enum! {
    pub enum PurchaseFrequency: "purchase frequency" {
        Daily => "Daily",
        Weekly => "Weekly",
        Seasonal => "Seasonal",
    }
}

literal_enum! {
    /// Admin review state of a transporter.
    pub enum ApprovalStatus: "approval status" {
        Pending => "pending",
        Approved => "approved",
        Rejected => "rejected",
    }
}

literal_enum! {
    pub enum RouteType: "route type" {
        Local => "Local",
        InterDistrict => "Inter-district",
        InterState => "Inter-state",
    }
}

literal_enum! {
    /// Verification state of an uploaded transporter document.
    pub enum DocumentStatus: "document status" {
        Verified => "verified",
        Pending => "pending",
        Rejected => "rejected",
    }
}

literal_enum! {
    pub enum JobAvailability: "availability" {
        FullTime => "Full-time",
        PartTime => "Part-time",
    }
}

literal_enum! {
    pub enum PreferredJobType: "preferred job type" {
        ShortDistance => "Short distance",
        LongHaul => "Long haul",
    }
}

/// A postal address attached to a profile.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Address {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    pub line1: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub district: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pincode: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contact_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}

/// Crops grown per Indian cropping season.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeasonalCrops {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kharif: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rabi: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub zaid: Option<Vec<String>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FarmerProfile {
    pub full_name: String,
    pub village: String,
    pub district: String,
    pub state: String,
    pub language: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pincode: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_land_area: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub land_unit: Option<LandUnit>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub land_type: Option<LandType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub irrigation_source: Option<IrrigationSource>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub soil_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current_crops: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seasonal_crops: Option<SeasonalCrops>,
    /// e.g. "Organic", "Natural".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub farming_practices: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub addresses: Option<Vec<Address>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_sales: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub member_since: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BuyerProfile {
    pub full_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub business_name: Option<String>,
    pub city: String,
    pub state: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pincode: Option<String>,
    pub language: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub addresses: Option<Vec<Address>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub buyer_type: Option<BuyerType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gst_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub years_in_business: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub procurement_regions: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preferred_crops: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quality_preference: Option<QualityPreference>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub packaging_preference: Option<PackagingPreference>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub purchase_capacity: Option<PurchaseCapacity>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub purchase_frequency: Option<PurchaseFrequency>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed_deals: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub member_since: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BankDetails {
    pub account_number: String,
    pub ifsc: String,
    pub holder_name: String,
    pub bank_name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransporterDocument {
    pub number: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    pub status: DocumentStatus,
}

/// Driving license, registration certificate and insurance.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransporterDocuments {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub license: Option<TransporterDocument>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rc: Option<TransporterDocument>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub insurance: Option<TransporterDocument>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransporterProfile {
    pub full_name: String,
    /// Free-form, e.g. "Mini Truck", "Pickup", "Tractor".
    pub vehicle_type: String,
    /// Capacity in kg, as entered.
    pub max_capacity: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vehicle_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vehicle_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub number_plate_photo: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vehicle_photo: Option<String>,
    pub approval_status: ApprovalStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    /// Base location.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub operating_regions: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub route_type: Option<RouteType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub can_handle_perishables: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub can_handle_bulk: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_covered_vehicle: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub business_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gstin: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pan: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bank_details: Option<BankDetails>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub documents: Option<TransporterDocuments>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub availability: Option<JobAvailability>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preferred_job_type: Option<PreferredJobType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_deliveries: Option<u32>,
    /// Percentage.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub on_time_delivery_rate: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub member_since: Option<String>,
}

/// Role-specific profile of a user.
///
/// Serializes as the bare profile object; the variant is recovered from
/// the owning user's role (see [`UserProfile::decode`]).
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum UserProfile {
    Farmer(FarmerProfile),
    Buyer(BuyerProfile),
    Transporter(TransporterProfile),
}

impl UserProfile {
    /// Returns the role this profile belongs to.
    #[must_use]
    pub const fn role(&self) -> UserRole {
        match self {
            Self::Farmer(_) => UserRole::Farmer,
            Self::Buyer(_) => UserRole::Buyer,
            Self::Transporter(_) => UserRole::Transporter,
        }
    }

    /// Decodes a stored profile object as the variant `role` selects.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::ProfileRoleMismatch` for the admin role, or
    /// `DomainError::InvalidProfile` if the object does not decode.
    pub fn decode(role: UserRole, value: serde_json::Value) -> Result<Self, DomainError> {
        let invalid = |e: serde_json::Error| DomainError::InvalidProfile {
            role: role.as_str().to_string(),
            error: e.to_string(),
        };

        match role {
            UserRole::Farmer => serde_json::from_value(value).map(Self::Farmer).map_err(invalid),
            UserRole::Buyer => serde_json::from_value(value).map(Self::Buyer).map_err(invalid),
            UserRole::Transporter => serde_json::from_value(value)
                .map(Self::Transporter)
                .map_err(invalid),
            UserRole::Admin => Err(DomainError::ProfileRoleMismatch {
                role: role.as_str().to_string(),
            }),
        }
    }
}

/// A phone-keyed marketplace identity.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(try_from = "UserRecord")]
pub struct User {
    pub id: String,
    pub phone: String,
    pub email: Option<String>,
    pub role: Option<UserRole>,
    pub status: UserStatus,
    profile: Option<UserProfile>,
    pub created_at: String,
}

impl User {
    /// Creates an active user with no role and no profile.
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        phone: impl Into<String>,
        created_at: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            phone: phone.into(),
            email: None,
            role: None,
            status: UserStatus::Active,
            profile: None,
            created_at: created_at.into(),
        }
    }

    /// Returns the user's profile, if any.
    #[must_use]
    pub const fn profile(&self) -> Option<&UserProfile> {
        self.profile.as_ref()
    }

    /// Attaches a profile, taking its role as the user's role.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::ProfileRoleMismatch` if the user already holds
    /// a different role.
    pub fn set_profile(&mut self, profile: UserProfile) -> Result<(), DomainError> {
        match self.role {
            Some(role) if role != profile.role() => Err(DomainError::ProfileRoleMismatch {
                role: role.as_str().to_string(),
            }),
            _ => {
                self.role = Some(profile.role());
                self.profile = Some(profile);
                Ok(())
            }
        }
    }
}

impl Serialize for User {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("User", 7)?;
        state.serialize_field("id", &self.id)?;
        state.serialize_field("phone", &self.phone)?;
        if let Some(email) = &self.email {
            state.serialize_field("email", email)?;
        } else {
            state.skip_field("email")?;
        }
        state.serialize_field("role", &self.role)?;
        state.serialize_field("status", &self.status)?;
        if let Some(profile) = &self.profile {
            state.serialize_field("profile", profile)?;
        } else {
            state.skip_field("profile")?;
        }
        state.serialize_field("createdAt", &self.created_at)?;
        state.end()
    }
}

/// Stored shape of a user: the profile is an untyped object until the
/// role is known.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct UserRecord {
    id: String,
    phone: String,
    #[serde(default)]
    email: Option<String>,
    #[serde(default)]
    role: Option<UserRole>,
    status: UserStatus,
    #[serde(default)]
    profile: Option<serde_json::Value>,
    created_at: String,
}

impl TryFrom<UserRecord> for User {
    type Error = DomainError;

    fn try_from(record: UserRecord) -> Result<Self, Self::Error> {
        let profile = match (record.role, record.profile) {
            (_, None) => None,
            (Some(role), Some(value)) => Some(UserProfile::decode(role, value)?),
            (None, Some(_)) => {
                return Err(DomainError::ProfileRoleMismatch {
                    role: String::from("none"),
                });
            }
        };

        Ok(Self {
            id: record.id,
            phone: record.phone,
            email: record.email,
            role: record.role,
            status: record.status,
            profile,
            created_at: record.created_at,
        })
    }
}

/// Sign-up input: a user plus the credentials typed into the form.
///
/// The credentials never leave this value; the gateway strips them before
/// anything reaches the store.
#[derive(Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewUser {
    #[serde(flatten)]
    pub user: User,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub confirm_password: Option<String>,
}

impl std::fmt::Debug for NewUser {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NewUser")
            .field("user", &self.user)
            .field("password", &self.password.as_ref().map(|_| "<redacted>"))
            .field(
                "confirm_password",
                &self.confirm_password.as_ref().map(|_| "<redacted>"),
            )
            .finish()
    }
}
