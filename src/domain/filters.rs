// domain/filters.rs
use crate::api::models::ListingQuery;

pub const LISTINGS_PATH: &str = "/listings";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterField {
    Suburb,
    RoomType,
    MinPrice,
    MaxPrice,
}

impl FilterField {
    pub const ALL: [FilterField; 4] = [
        FilterField::Suburb,
        FilterField::RoomType,
        FilterField::MinPrice,
        FilterField::MaxPrice,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            FilterField::Suburb => "suburb",
            FilterField::RoomType => "room_type",
            FilterField::MinPrice => "min_price",
            FilterField::MaxPrice => "max_price",
        }
    }

    pub fn from_key(key: &str) -> Option<FilterField> {
        FilterField::ALL.into_iter().find(|f| f.key() == key)
    }
}

/// The listing search form. Empty string means "not filtering on this".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListingFilters {
    pub suburb: String,
    pub room_type: String,
    pub min_price: String,
    pub max_price: String,
}

impl ListingFilters {
    /// Rebuild the form from a raw (still encoded) query string.
    pub fn from_query(query: Option<&str>) -> Self {
        let mut filters = Self::default();

        if let Some(q) = query {
            for (key, value) in url::form_urlencoded::parse(q.as_bytes()) {
                if let Some(field) = FilterField::from_key(&key) {
                    filters.set(field, value.into_owned());
                }
            }
        }

        filters
    }

    pub fn get(&self, field: FilterField) -> &str {
        match field {
            FilterField::Suburb => &self.suburb,
            FilterField::RoomType => &self.room_type,
            FilterField::MinPrice => &self.min_price,
            FilterField::MaxPrice => &self.max_price,
        }
    }

    pub fn set(&mut self, field: FilterField, value: impl Into<String>) {
        let slot = match field {
            FilterField::Suburb => &mut self.suburb,
            FilterField::RoomType => &mut self.room_type,
            FilterField::MinPrice => &mut self.min_price,
            FilterField::MaxPrice => &mut self.max_price,
        };
        *slot = value.into();
    }

    pub fn has_active_filters(&self) -> bool {
        self.active_count() > 0
    }

    pub fn active_count(&self) -> usize {
        FilterField::ALL
            .iter()
            .filter(|f| !self.get(**f).is_empty())
            .count()
    }

    /// Only non-empty fields are emitted; never `field=`.
    pub fn to_query_string(&self) -> String {
        let mut ser = url::form_urlencoded::Serializer::new(String::new());

        for field in FilterField::ALL {
            let value = self.get(field);
            if !value.is_empty() {
                ser.append_pair(field.key(), value);
            }
        }

        ser.finish()
    }

    /// Where "apply" navigates to.
    pub fn apply_target(&self) -> String {
        let qs = self.to_query_string();
        if qs.is_empty() {
            LISTINGS_PATH.to_string()
        } else {
            format!("{LISTINGS_PATH}?{qs}")
        }
    }

    /// Reset everything and return where "clear" navigates to.
    pub fn clear(&mut self) -> &'static str {
        *self = Self::default();
        LISTINGS_PATH
    }

    /// Translate the form into API parameters.
    ///
    /// Prices keep their leading integer ("150.5" is 150). A price with no
    /// leading digits is dropped. Ranges are not checked.
    pub fn to_api_query(&self, limit: Option<u32>) -> ListingQuery {
        ListingQuery {
            suburb: non_empty(&self.suburb),
            room_type: non_empty(&self.room_type),
            min_price: leading_int(&self.min_price),
            max_price: leading_int(&self.max_price),
            limit,
        }
    }
}

/// Optional sign then digits, ignoring whatever follows them.
pub fn leading_int(raw: &str) -> Option<i64> {
    let s = raw.trim_start();
    let sign_len = usize::from(s.starts_with(['+', '-']));
    let digits = s[sign_len..]
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(s.len() - sign_len);
    if digits == 0 {
        return None;
    }
    s[..sign_len + digits].parse().ok()
}

fn non_empty(value: &str) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}
