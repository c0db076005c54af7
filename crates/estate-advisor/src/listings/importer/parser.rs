use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Deserializer};
use std::io::Read;

use crate::listings::domain::{
    ListingStatus, Location, Property, PropertyFeatures, PropertyId, PropertyType,
};

pub(crate) fn read_rows<R: Read>(reader: R) -> Result<Vec<ListingRow>, csv::Error> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    csv_reader.deserialize::<ListingRow>().collect()
}

#[derive(Debug, Deserialize)]
pub(crate) struct ListingRow {
    id: String,
    title: String,
    #[serde(default)]
    description: String,
    #[serde(rename = "type")]
    property_type: String,
    status: String,
    price: f64,
    city: String,
    area: String,
    #[serde(default)]
    address: String,
    #[serde(default)]
    bedrooms: Option<u8>,
    #[serde(default)]
    bathrooms: Option<u8>,
    #[serde(default)]
    covered_area: Option<u32>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    furnished: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    parking: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    listed_at: Option<String>,
}

impl ListingRow {
    /// Convert into a [`Property`], falling back to `imported_at` when no listing date is given.
    pub(crate) fn into_property(self, imported_at: DateTime<Utc>) -> Result<Property, String> {
        let property_type = PropertyType::parse(&self.property_type)
            .ok_or_else(|| format!("unknown property type '{}'", self.property_type))?;
        let status = ListingStatus::parse(&self.status)
            .ok_or_else(|| format!("unknown listing status '{}'", self.status))?;
        let furnished = parse_flag("furnished", self.furnished.as_deref())?;
        let parking = parse_flag("parking", self.parking.as_deref())?;
        let listed_at = match self.listed_at.as_deref() {
            Some(raw) => {
                parse_datetime(raw).ok_or_else(|| format!("invalid listed_at '{raw}'"))?
            }
            None => imported_at,
        };

        let property = Property {
            id: PropertyId(self.id),
            title: self.title,
            description: self.description,
            property_type,
            status,
            price: self.price,
            location: Location {
                city: self.city,
                area: self.area,
                address: self.address,
            },
            features: PropertyFeatures {
                bedrooms: self.bedrooms.unwrap_or_default(),
                bathrooms: self.bathrooms.unwrap_or_default(),
                covered_area: self.covered_area.unwrap_or_default(),
                furnished,
                parking,
            },
            listed_at,
        };
        property.validate().map_err(|err| err.to_string())?;
        Ok(property)
    }
}

fn empty_string_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    Ok(opt.filter(|value| !value.trim().is_empty()))
}

fn parse_flag(field: &str, value: Option<&str>) -> Result<bool, String> {
    match value.map(|raw| raw.trim().to_ascii_lowercase()) {
        None => Ok(false),
        Some(raw) => match raw.as_str() {
            "true" | "yes" | "y" | "1" => Ok(true),
            "false" | "no" | "n" | "0" => Ok(false),
            _ => Err(format!("{field} must be yes/no (got '{raw}')")),
        },
    }
}

fn parse_datetime(value: &str) -> Option<DateTime<Utc>> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(trimmed) {
        return Some(dt.with_timezone(&Utc));
    }

    if let Ok(date) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
        return date.and_hms_opt(0, 0, 0).map(|dt| dt.and_utc());
    }

    None
}

#[cfg(test)]
pub(crate) fn parse_datetime_for_tests(value: &str) -> Option<DateTime<Utc>> {
    parse_datetime(value)
}
