// api/models.rs
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Uniform wrapper every API response shares.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Envelope<T> {
    pub success: bool,
    pub data: T,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub count: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Body shape of a failed request. Everything optional, servers are sloppy here.
#[derive(Debug, Default, Deserialize)]
pub struct ErrorBody {
    pub success: Option<bool>,
    pub error: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct HealthStatus {
    pub ok: bool,
    pub status: String,
    pub timestamp: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DeleteAck {
    #[serde(default)]
    pub message: String,
}

// ---------------------------------------------------------------------------
// Closed enumerations
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RoomType {
    Master,
    Double,
    Single,
    #[serde(other)]
    Other,
}

impl RoomType {
    pub const ALL: [RoomType; 3] = [RoomType::Single, RoomType::Double, RoomType::Master];

    pub fn as_str(&self) -> &'static str {
        match self {
            RoomType::Master => "master",
            RoomType::Double => "double",
            RoomType::Single => "single",
            RoomType::Other => "other",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            RoomType::Master => "👑",
            RoomType::Double => "🛏️",
            RoomType::Single => "🛌",
            RoomType::Other => "🏠",
        }
    }

    /// Translation key for the human label.
    pub fn label_key(&self) -> &'static str {
        match self {
            RoomType::Master => "room.master",
            RoomType::Double => "room.double",
            RoomType::Single => "room.single",
            RoomType::Other => "room.other",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    Es,
    En,
    #[serde(other)]
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LeadStatus {
    New,
    Contacted,
    Converted,
    Discarded,
    #[serde(other)]
    Unknown,
}

impl LeadStatus {
    pub const ALL: [LeadStatus; 4] = [
        LeadStatus::New,
        LeadStatus::Contacted,
        LeadStatus::Converted,
        LeadStatus::Discarded,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            LeadStatus::New => "new",
            LeadStatus::Contacted => "contacted",
            LeadStatus::Converted => "converted",
            LeadStatus::Discarded => "discarded",
            LeadStatus::Unknown => "unknown",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PartnerStatus {
    Pending,
    Active,
    Inactive,
    #[serde(other)]
    Unknown,
}

impl PartnerStatus {
    pub const ALL: [PartnerStatus; 3] = [
        PartnerStatus::Pending,
        PartnerStatus::Active,
        PartnerStatus::Inactive,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PartnerStatus::Pending => "pending",
            PartnerStatus::Active => "active",
            PartnerStatus::Inactive => "inactive",
            PartnerStatus::Unknown => "unknown",
        }
    }
}

/// Returned when a status string names no known value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownVariant(pub String);

impl fmt::Display for UnknownVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unrecognized value: {}", self.0)
    }
}

impl std::error::Error for UnknownVariant {}

// `Unknown` is only ever produced by deserialization, never parsed from input.
impl FromStr for LeadStatus {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        LeadStatus::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| UnknownVariant(s.to_string()))
    }
}

impl FromStr for PartnerStatus {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PartnerStatus::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| UnknownVariant(s.to_string()))
    }
}

impl FromStr for RoomType {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        RoomType::ALL
            .into_iter()
            .find(|room| room.as_str() == s)
            .ok_or_else(|| UnknownVariant(s.to_string()))
    }
}

// ---------------------------------------------------------------------------
// Entities
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GeoPoint {
    #[serde(rename = "type")]
    pub kind: String,
    pub coordinates: [f64; 2],
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct OwnerSummary {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub email: String,
}

/// `owner_id` is either a bare reference or the populated owner document.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(untagged)]
pub enum OwnerRef {
    Id(String),
    Populated(OwnerSummary),
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AvailableContract {
    pub weekly_rent: f64,
    #[serde(default)]
    pub bond: f64,
    pub start_date: Option<DateTime<Utc>>,
    pub end_date: Option<DateTime<Utc>>,
    pub payment_frequency: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Listing {
    #[serde(rename = "_id")]
    pub id: String,
    pub title: String,
    pub slug: String,
    pub price_per_week: f64,
    #[serde(default)]
    pub bond: f64,
    #[serde(default)]
    pub bills_included: bool,
    pub address: String,
    pub suburb: Option<String>,
    pub location: Option<GeoPoint>,
    pub room_type: RoomType,
    pub available_from: Option<DateTime<Utc>>,
    pub min_term_weeks: u32,
    #[serde(default)]
    pub preferred_tenants: Vec<String>,
    #[serde(default)]
    pub house_features: Vec<String>,
    #[serde(default)]
    pub rules: Vec<String>,
    #[serde(default)]
    pub images: Vec<String>,
    pub owner_id: Option<OwnerRef>,
    pub locale: Locale,
    pub available_contract: Option<AvailableContract>,
    #[serde(rename = "createdAt", default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(rename = "updatedAt", default)]
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Lead {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub message: Option<String>,
    pub listing_id: Option<String>,
    pub status: LeadStatus,
    #[serde(rename = "createdAt", default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(rename = "updatedAt", default)]
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Partner {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub company_name: Option<String>,
    pub status: PartnerStatus,
    #[serde(rename = "createdAt", default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(rename = "updatedAt", default)]
    pub updated_at: Option<DateTime<Utc>>,
}

// ---------------------------------------------------------------------------
// Drafts: partial bodies for POST / PUT. Unset fields never hit the wire.
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct LeadDraft {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub listing_id: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PartnerDraft {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company_name: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ListingDraft {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price_per_week: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bond: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bills_included: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suburb: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub room_type: Option<RoomType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_term_weeks: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub images: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub house_features: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rules: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preferred_tenants: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub locale: Option<Locale>,
}

/// Query parameters accepted by `GET /listings/public`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListingQuery {
    pub suburb: Option<String>,
    pub room_type: Option<String>,
    pub min_price: Option<i64>,
    pub max_price: Option<i64>,
    pub limit: Option<u32>,
}

impl ListingQuery {
    /// Encoded query string without the leading `?`; empty when nothing is set.
    pub fn to_query_string(&self) -> String {
        let mut ser = url::form_urlencoded::Serializer::new(String::new());

        if let Some(suburb) = &self.suburb {
            ser.append_pair("suburb", suburb);
        }
        if let Some(room_type) = &self.room_type {
            ser.append_pair("room_type", room_type);
        }
        if let Some(min) = self.min_price {
            ser.append_pair("min_price", &min.to_string());
        }
        if let Some(max) = self.max_price {
            ser.append_pair("max_price", &max.to_string());
        }
        if let Some(limit) = self.limit {
            ser.append_pair("limit", &limit.to_string());
        }

        ser.finish()
    }
}
