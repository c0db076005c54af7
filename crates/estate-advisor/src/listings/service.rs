use std::collections::HashSet;
use std::sync::Arc;

use tracing::{debug, warn};

use super::domain::{Property, PropertyFilter, PropertyId, UserId};
use super::repository::{FavoritesStore, PropertyRepository, RepositoryError};
use crate::recommendations::{self, ScoredProperty};

/// Service composing the property repository, favorites store, and recommender.
pub struct ListingService<P, F> {
    properties: Arc<P>,
    favorites: Arc<F>,
}

impl<P, F> ListingService<P, F>
where
    P: PropertyRepository + 'static,
    F: FavoritesStore + 'static,
{
    pub fn new(properties: Arc<P>, favorites: Arc<F>) -> Self {
        Self {
            properties,
            favorites,
        }
    }

    pub fn search(&self, filter: &PropertyFilter) -> Result<Vec<Property>, ListingServiceError> {
        Ok(self.properties.list(filter)?)
    }

    pub fn get(&self, id: &PropertyId) -> Result<Property, ListingServiceError> {
        let property = self
            .properties
            .fetch(id)?
            .ok_or(RepositoryError::NotFound)?;
        Ok(property)
    }

    /// Favorited listings that still resolve, in the order they were favorited.
    pub fn favorites(&self, user: &UserId) -> Result<Vec<Property>, ListingServiceError> {
        let ids = self.favorites.favorite_ids(user)?;
        Ok(self.resolve(user, &ids))
    }

    pub fn is_favorite(
        &self,
        user: &UserId,
        property: &PropertyId,
    ) -> Result<bool, ListingServiceError> {
        let ids = self.favorites.favorite_ids(user)?;
        Ok(ids.contains(property))
    }

    /// Favorite an existing listing; unknown listings are `NotFound`, repeats are `Conflict`.
    pub fn add_favorite(
        &self,
        user: &UserId,
        property: &PropertyId,
    ) -> Result<Property, ListingServiceError> {
        let listing = self.get(property)?;
        self.favorites.add(user, listing.id.clone())?;
        debug!(user = %user, property = %listing.id, "favorite added");
        Ok(listing)
    }

    pub fn remove_favorite(
        &self,
        user: &UserId,
        property: &PropertyId,
    ) -> Result<(), ListingServiceError> {
        self.favorites.remove(user, property)?;
        debug!(user = %user, property = %property, "favorite removed");
        Ok(())
    }

    /// Rank the full catalog against the user's favorites.
    pub fn recommendations(
        &self,
        user: &UserId,
    ) -> Result<Vec<ScoredProperty>, ListingServiceError> {
        let favorite_ids = self.favorites.favorite_ids(user)?;
        let favorites = self.resolve(user, &favorite_ids);
        let candidates = self.properties.list(&PropertyFilter::default())?;
        let excluded: HashSet<PropertyId> = favorite_ids.into_iter().collect();

        let ranked = recommendations::rank(&favorites, &candidates, &excluded);
        debug!(
            user = %user,
            favorites = favorites.len(),
            candidates = candidates.len(),
            recommended = ranked.len(),
            "recommendations ranked"
        );
        Ok(ranked)
    }

    fn resolve(&self, user: &UserId, ids: &[PropertyId]) -> Vec<Property> {
        ids.iter()
            .filter_map(|id| match self.properties.fetch(id) {
                Ok(Some(property)) => Some(property),
                Ok(None) => {
                    debug!(user = %user, property = %id, "favorite no longer listed; skipping");
                    None
                }
                Err(error) => {
                    warn!(user = %user, property = %id, %error, "favorite lookup failed; skipping");
                    None
                }
            })
            .collect()
    }
}

/// Error raised by the listing service.
#[derive(Debug, thiserror::Error)]
pub enum ListingServiceError {
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}
