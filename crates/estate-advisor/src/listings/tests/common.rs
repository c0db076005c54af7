use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use axum::response::Response;
use chrono::{TimeZone, Utc};
use serde_json::Value;

use crate::listings::domain::{
    ListingStatus, Location, Property, PropertyFeatures, PropertyFilter, PropertyId,
    PropertyType, UserId,
};
use crate::listings::repository::{FavoritesStore, PropertyRepository, RepositoryError};
use crate::listings::{listing_router, ListingService};

pub(super) fn property(
    id: &str,
    kind: PropertyType,
    area: &str,
    price: f64,
    listed_day: u32,
) -> Property {
    Property {
        id: PropertyId(id.to_string()),
        title: format!("{} in {area}", kind.label()),
        description: "Well maintained, close to markets.".to_string(),
        property_type: kind,
        status: ListingStatus::Sale,
        price,
        location: Location {
            city: "Islamabad".to_string(),
            area: area.to_string(),
            address: format!("House {id}"),
        },
        features: PropertyFeatures {
            bedrooms: 3,
            bathrooms: 3,
            covered_area: 2250,
            furnished: false,
            parking: true,
        },
        listed_at: Utc
            .with_ymd_and_hms(2025, 4, listed_day, 10, 0, 0)
            .unwrap(),
    }
}

pub(super) fn catalog() -> Vec<Property> {
    vec![
        property("f7-house", PropertyType::House, "F-7", 10_000_000.0, 1),
        property("g11-house", PropertyType::House, "G-11", 9_000_000.0, 2),
        property("f7-flat", PropertyType::Apartment, "F-7", 50_000_000.0, 3),
        property("blue-office", PropertyType::Commercial, "Blue Area", 90_000_000.0, 4),
        property("b17-plot", PropertyType::Plot, "B-17", 3_500_000.0, 5),
    ]
}

pub(super) fn user() -> UserId {
    UserId("user-42".to_string())
}

pub(super) type TestService = ListingService<MemoryProperties, MemoryFavorites>;

pub(super) fn build_service() -> (
    TestService,
    Arc<MemoryProperties>,
    Arc<MemoryFavorites>,
) {
    let properties = Arc::new(MemoryProperties::with(catalog()));
    let favorites = Arc::new(MemoryFavorites::default());
    let service = ListingService::new(properties.clone(), favorites.clone());
    (service, properties, favorites)
}

pub(super) fn router_with_service(service: TestService) -> axum::Router {
    listing_router(Arc::new(service))
}

#[derive(Default, Clone)]
pub(super) struct MemoryProperties {
    records: Arc<Mutex<HashMap<PropertyId, Property>>>,
}

impl MemoryProperties {
    pub(super) fn with(properties: Vec<Property>) -> Self {
        let store = Self::default();
        for property in properties {
            store.insert(property).expect("unique fixture ids");
        }
        store
    }

    pub(super) fn delete(&self, id: &PropertyId) {
        self.records
            .lock()
            .expect("repository mutex poisoned")
            .remove(id);
    }
}

impl PropertyRepository for MemoryProperties {
    fn insert(&self, property: Property) -> Result<Property, RepositoryError> {
        let mut guard = self.records.lock().expect("repository mutex poisoned");
        if guard.contains_key(&property.id) {
            return Err(RepositoryError::Conflict);
        }
        guard.insert(property.id.clone(), property.clone());
        Ok(property)
    }

    fn fetch(&self, id: &PropertyId) -> Result<Option<Property>, RepositoryError> {
        let guard = self.records.lock().expect("repository mutex poisoned");
        Ok(guard.get(id).cloned())
    }

    fn list(&self, filter: &PropertyFilter) -> Result<Vec<Property>, RepositoryError> {
        let guard = self.records.lock().expect("repository mutex poisoned");
        let mut matches: Vec<Property> = guard
            .values()
            .filter(|property| filter.matches(property))
            .cloned()
            .collect();
        matches.sort_by(|a, b| b.listed_at.cmp(&a.listed_at));
        Ok(matches)
    }
}

#[derive(Default, Clone)]
pub(super) struct MemoryFavorites {
    lists: Arc<Mutex<HashMap<UserId, Vec<PropertyId>>>>,
}

impl FavoritesStore for MemoryFavorites {
    fn favorite_ids(&self, user: &UserId) -> Result<Vec<PropertyId>, RepositoryError> {
        let guard = self.lists.lock().expect("favorites mutex poisoned");
        Ok(guard.get(user).cloned().unwrap_or_default())
    }

    fn add(&self, user: &UserId, property: PropertyId) -> Result<(), RepositoryError> {
        let mut guard = self.lists.lock().expect("favorites mutex poisoned");
        let list = guard.entry(user.clone()).or_default();
        if list.contains(&property) {
            return Err(RepositoryError::Conflict);
        }
        list.push(property);
        Ok(())
    }

    fn remove(&self, user: &UserId, property: &PropertyId) -> Result<(), RepositoryError> {
        let mut guard = self.lists.lock().expect("favorites mutex poisoned");
        let list = guard.get_mut(user).ok_or(RepositoryError::NotFound)?;
        let position = list
            .iter()
            .position(|id| id == property)
            .ok_or(RepositoryError::NotFound)?;
        list.remove(position);
        Ok(())
    }
}

pub(super) struct OfflineProperties;

impl PropertyRepository for OfflineProperties {
    fn insert(&self, _property: Property) -> Result<Property, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    fn fetch(&self, _id: &PropertyId) -> Result<Option<Property>, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    fn list(&self, _filter: &PropertyFilter) -> Result<Vec<Property>, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
