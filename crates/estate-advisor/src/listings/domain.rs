use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Identifier wrapper for listed properties.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PropertyId(pub String);

impl fmt::Display for PropertyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Identifier wrapper for the account that owns a favorites list.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UserId(pub String);

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PropertyType {
    House,
    Apartment,
    Commercial,
    Plot,
}

impl PropertyType {
    pub const fn ordered() -> [Self; 4] {
        [Self::House, Self::Apartment, Self::Commercial, Self::Plot]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::House => "House",
            Self::Apartment => "Apartment",
            Self::Commercial => "Commercial",
            Self::Plot => "Plot",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        let value = value.trim();
        Self::ordered()
            .into_iter()
            .find(|kind| kind.label().eq_ignore_ascii_case(value))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ListingStatus {
    Sale,
    Rent,
}

impl ListingStatus {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Sale => "For Sale",
            Self::Rent => "For Rent",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "sale" => Some(Self::Sale),
            "rent" => Some(Self::Rent),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Location {
    pub city: String,
    /// Neighborhood or sector, e.g. `F-7` or `DHA Phase 2`.
    pub area: String,
    pub address: String,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PropertyFeatures {
    pub bedrooms: u8,
    pub bathrooms: u8,
    /// Covered area in square feet.
    pub covered_area: u32,
    pub furnished: bool,
    pub parking: bool,
}

/// A listing as held by the property repository.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Property {
    pub id: PropertyId,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(rename = "type")]
    pub property_type: PropertyType,
    pub status: ListingStatus,
    pub price: f64,
    pub location: Location,
    pub features: PropertyFeatures,
    pub listed_at: DateTime<Utc>,
}

impl Property {
    pub fn validate(&self) -> Result<(), PropertyValidationError> {
        if self.id.0.trim().is_empty() {
            return Err(PropertyValidationError::MissingId);
        }
        if !self.price.is_finite() || self.price < 0.0 {
            return Err(PropertyValidationError::InvalidPrice(self.price));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum PropertyValidationError {
    #[error("property id must not be empty")]
    MissingId,
    #[error("price must be a non-negative number (got {0})")]
    InvalidPrice(f64),
}

/// Listing query used by search endpoints; absent fields do not constrain results.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PropertyFilter {
    #[serde(default, rename = "type")]
    pub property_type: Option<PropertyType>,
    #[serde(default)]
    pub status: Option<ListingStatus>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub min_price: Option<f64>,
    #[serde(default)]
    pub max_price: Option<f64>,
}

impl PropertyFilter {
    pub fn matches(&self, property: &Property) -> bool {
        if self
            .property_type
            .is_some_and(|kind| kind != property.property_type)
        {
            return false;
        }
        if self.status.is_some_and(|status| status != property.status) {
            return false;
        }
        if let Some(city) = &self.city {
            if city != &property.location.city {
                return false;
            }
        }
        if self.min_price.is_some_and(|min| property.price < min) {
            return false;
        }
        if self.max_price.is_some_and(|max| property.price > max) {
            return false;
        }
        true
    }
}
