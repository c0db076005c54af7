//! Listing data model, storage contracts, and the service that feeds the recommender.

pub mod domain;
pub mod importer;
pub mod repository;
pub mod router;
pub mod service;

#[cfg(test)]
mod tests;

pub use domain::{
    ListingStatus, Location, Property, PropertyFeatures, PropertyFilter, PropertyId,
    PropertyType, PropertyValidationError, UserId,
};
pub use importer::{ListingImportError, ListingImporter};
pub use repository::{FavoritesStore, PropertyRepository, RepositoryError};
pub use router::{listing_router, FavoriteRequest, RecommendationsView};
pub use service::{ListingService, ListingServiceError};
