// domain/listing_form.rs
use crate::api::models::{Listing, ListingDraft, Locale, RoomType};
use std::collections::{HashMap, HashSet};

/// Optional fields an update clears when they are submitted empty.
const CLEARABLE: [&str; 5] = ["suburb", "images", "house_features", "rules", "preferred_tenants"];

/// Admin create/edit form, as strings the operator typed.
/// List fields hold one entry per line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListingForm {
    pub title: String,
    pub slug: String,
    pub price_per_week: String,
    pub bond: String,
    pub bills_included: bool,
    pub address: String,
    pub suburb: String,
    pub room_type: String,
    pub min_term_weeks: String,
    pub images: String,
    pub house_features: String,
    pub rules: String,
    pub preferred_tenants: String,
    pub locale: String,
    /// Clearable keys present in the submitted body, blank or not.
    pub submitted: HashSet<String>,
}

impl ListingForm {
    pub fn from_fields(fields: &HashMap<String, String>) -> Self {
        let get = |key: &str| fields.get(key).cloned().unwrap_or_default();

        Self {
            title: get("title"),
            slug: get("slug"),
            price_per_week: get("price_per_week"),
            bond: get("bond"),
            // Unchecked boxes are simply absent from the body.
            bills_included: fields.contains_key("bills_included"),
            address: get("address"),
            suburb: get("suburb"),
            room_type: get("room_type"),
            min_term_weeks: get("min_term_weeks"),
            images: get("images"),
            house_features: get("house_features"),
            rules: get("rules"),
            preferred_tenants: get("preferred_tenants"),
            locale: get("locale"),
            submitted: CLEARABLE
                .iter()
                .filter(|key| fields.contains_key(**key))
                .map(|key| key.to_string())
                .collect(),
        }
    }

    pub fn from_listing(listing: &Listing) -> Self {
        Self {
            title: listing.title.clone(),
            slug: listing.slug.clone(),
            price_per_week: listing.price_per_week.to_string(),
            bond: listing.bond.to_string(),
            bills_included: listing.bills_included,
            address: listing.address.clone(),
            suburb: listing.suburb.clone().unwrap_or_default(),
            room_type: listing.room_type.as_str().to_string(),
            min_term_weeks: listing.min_term_weeks.to_string(),
            images: listing.images.join("\n"),
            house_features: listing.house_features.join("\n"),
            rules: listing.rules.join("\n"),
            preferred_tenants: listing.preferred_tenants.join("\n"),
            locale: match listing.locale {
                Locale::En => "en".to_string(),
                Locale::Es => "es".to_string(),
                // Blank is submitted as blank and leaves the stored locale alone.
                Locale::Other => String::new(),
            },
            submitted: HashSet::new(),
        }
    }

    /// Body for an update. Like [`Self::to_draft`], except that a clearable
    /// field submitted empty is sent empty so the stored value is removed.
    pub fn to_update_draft(&self) -> Result<ListingDraft, String> {
        let mut draft = self.to_draft()?;
        let cleared = |key: &str| self.submitted.contains(key);

        if draft.suburb.is_none() && cleared("suburb") {
            draft.suburb = Some(String::new());
        }
        for (key, list) in [
            ("images", &mut draft.images),
            ("house_features", &mut draft.house_features),
            ("rules", &mut draft.rules),
            ("preferred_tenants", &mut draft.preferred_tenants),
        ] {
            if list.is_none() && cleared(key) {
                *list = Some(Vec::new());
            }
        }

        Ok(draft)
    }

    /// Build the API body. Blank fields are left out.
    pub fn to_draft(&self) -> Result<ListingDraft, String> {
        let min_term_weeks = match parse_number::<u32>(&self.min_term_weeks, "min_term_weeks")? {
            Some(0) => return Err("min_term_weeks must be a positive integer".to_string()),
            other => other,
        };

        let room_type = match self.room_type.trim() {
            "" => None,
            raw => Some(
                raw.parse::<RoomType>()
                    .map_err(|e| format!("room_type: {e}"))?,
            ),
        };

        let locale = match self.locale.trim() {
            "" => None,
            "en" => Some(Locale::En),
            "es" => Some(Locale::Es),
            other => return Err(format!("locale: unrecognized value: {other}")),
        };

        Ok(ListingDraft {
            title: text(&self.title),
            slug: text(&self.slug),
            price_per_week: parse_number(&self.price_per_week, "price_per_week")?,
            bond: parse_number(&self.bond, "bond")?,
            bills_included: Some(self.bills_included),
            address: text(&self.address),
            suburb: text(&self.suburb),
            room_type,
            min_term_weeks,
            images: lines(&self.images),
            house_features: lines(&self.house_features),
            rules: lines(&self.rules),
            preferred_tenants: lines(&self.preferred_tenants),
            locale,
        })
    }
}

fn text(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

fn lines(value: &str) -> Option<Vec<String>> {
    let items: Vec<String> = value
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect();

    if items.is_empty() {
        None
    } else {
        Some(items)
    }
}

fn parse_number<T: std::str::FromStr>(value: &str, field: &str) -> Result<Option<T>, String> {
    match value.trim() {
        "" => Ok(None),
        raw => raw
            .parse()
            .map(Some)
            .map_err(|_| format!("{field}: not a number: {raw}")),
    }
}
