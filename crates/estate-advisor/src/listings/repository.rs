use super::domain::{Property, PropertyFilter, PropertyId, UserId};

/// Storage abstraction over listed properties.
pub trait PropertyRepository: Send + Sync {
    fn insert(&self, property: Property) -> Result<Property, RepositoryError>;
    fn fetch(&self, id: &PropertyId) -> Result<Option<Property>, RepositoryError>;
    /// Listings matching `filter`, newest first.
    fn list(&self, filter: &PropertyFilter) -> Result<Vec<Property>, RepositoryError>;
}

/// Per-user favorite lists. Ids are returned in the order they were added.
pub trait FavoritesStore: Send + Sync {
    fn favorite_ids(&self, user: &UserId) -> Result<Vec<PropertyId>, RepositoryError>;
    fn add(&self, user: &UserId, property: PropertyId) -> Result<(), RepositoryError>;
    fn remove(&self, user: &UserId, property: &PropertyId) -> Result<(), RepositoryError>;
}

/// Error enumeration for repository failures.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("record already exists")]
    Conflict,
    #[error("record not found")]
    NotFound,
    #[error("repository unavailable: {0}")]
    Unavailable(String),
}
