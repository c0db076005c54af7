use estate_advisor::listings::{
    FavoritesStore, Property, PropertyFilter, PropertyId, PropertyRepository, RepositoryError,
    UserId,
};
use metrics_exporter_prometheus::PrometheusHandle;
use std::collections::HashMap;
use std::sync::atomic::AtomicBool;
use std::sync::{Arc, Mutex};

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

#[derive(Default, Clone)]
pub(crate) struct InMemoryPropertyRepository {
    records: Arc<Mutex<HashMap<PropertyId, Property>>>,
}

impl PropertyRepository for InMemoryPropertyRepository {
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
        let mut listings: Vec<Property> = guard
            .values()
            .filter(|property| filter.matches(property))
            .cloned()
            .collect();
        // Id breaks ties so equal timestamps list deterministically.
        listings.sort_by(|a, b| b.listed_at.cmp(&a.listed_at).then_with(|| a.id.cmp(&b.id)));
        Ok(listings)
    }
}

#[derive(Default, Clone)]
pub(crate) struct InMemoryFavoritesStore {
    lists: Arc<Mutex<HashMap<UserId, Vec<PropertyId>>>>,
}

impl FavoritesStore for InMemoryFavoritesStore {
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
        let before = list.len();
        list.retain(|id| id != property);
        if list.len() == before {
            return Err(RepositoryError::NotFound);
        }
        Ok(())
    }
}
