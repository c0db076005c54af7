use super::common::*;
use crate::listings::domain::{ListingStatus, PropertyFilter, PropertyId, PropertyType};
use crate::listings::repository::{FavoritesStore, RepositoryError};
use crate::listings::{ListingService, ListingServiceError};
use std::sync::Arc;

#[test]
fn search_returns_newest_first() {
    let (service, _, _) = build_service();

    let listings = service
        .search(&PropertyFilter::default())
        .expect("search succeeds");

    let ids: Vec<&str> = listings.iter().map(|p| p.id.0.as_str()).collect();
    assert_eq!(
        ids,
        vec!["b17-plot", "blue-office", "f7-flat", "g11-house", "f7-house"]
    );
}

#[test]
fn search_applies_type_and_price_filters() {
    let (service, _, _) = build_service();
    let filter = PropertyFilter {
        property_type: Some(PropertyType::House),
        status: Some(ListingStatus::Sale),
        max_price: Some(9_500_000.0),
        ..PropertyFilter::default()
    };

    let listings = service.search(&filter).expect("search succeeds");

    assert_eq!(listings.len(), 1);
    assert_eq!(listings[0].id.0, "g11-house");
}

#[test]
fn get_propagates_not_found() {
    let (service, _, _) = build_service();

    match service.get(&PropertyId("missing".to_string())) {
        Err(ListingServiceError::Repository(RepositoryError::NotFound)) => {}
        other => panic!("expected not found error, got {other:?}"),
    }
}

#[test]
fn add_favorite_requires_an_existing_listing() {
    let (service, _, favorites) = build_service();

    match service.add_favorite(&user(), &PropertyId("ghost".to_string())) {
        Err(ListingServiceError::Repository(RepositoryError::NotFound)) => {}
        other => panic!("expected not found error, got {other:?}"),
    }
    assert!(favorites
        .favorite_ids(&user())
        .expect("store readable")
        .is_empty());
}

#[test]
fn add_favorite_twice_conflicts() {
    let (service, _, _) = build_service();
    let id = PropertyId("f7-house".to_string());

    service.add_favorite(&user(), &id).expect("first add");
    match service.add_favorite(&user(), &id) {
        Err(ListingServiceError::Repository(RepositoryError::Conflict)) => {}
        other => panic!("expected conflict, got {other:?}"),
    }
    assert!(service.is_favorite(&user(), &id).expect("check succeeds"));
}

#[test]
fn favorites_skip_listings_that_were_removed() {
    let (service, properties, _) = build_service();
    service
        .add_favorite(&user(), &PropertyId("f7-house".to_string()))
        .expect("add");
    service
        .add_favorite(&user(), &PropertyId("b17-plot".to_string()))
        .expect("add");
    properties.delete(&PropertyId("f7-house".to_string()));

    let favorites = service.favorites(&user()).expect("favorites resolve");

    assert_eq!(favorites.len(), 1);
    assert_eq!(favorites[0].id.0, "b17-plot");
}

#[test]
fn remove_favorite_reports_missing_entries() {
    let (service, _, _) = build_service();
    let id = PropertyId("f7-house".to_string());
    service.add_favorite(&user(), &id).expect("add");

    service.remove_favorite(&user(), &id).expect("remove");
    assert!(!service.is_favorite(&user(), &id).expect("check"));
    match service.remove_favorite(&user(), &id) {
        Err(ListingServiceError::Repository(RepositoryError::NotFound)) => {}
        other => panic!("expected not found error, got {other:?}"),
    }
}

#[test]
fn recommendations_rank_catalog_against_favorites() {
    let (service, _, _) = build_service();
    service
        .add_favorite(&user(), &PropertyId("f7-house".to_string()))
        .expect("add");

    let ranked = service.recommendations(&user()).expect("recommendations");

    let ids: Vec<&str> = ranked.iter().map(|s| s.property.id.0.as_str()).collect();
    // Both candidates score 3; the catalog lists newer listings first.
    assert_eq!(ids, vec!["f7-flat", "g11-house"]);
    assert!(ranked.iter().all(|s| s.property.id.0 != "f7-house"));
}

#[test]
fn recommendations_ignore_deleted_favorites() {
    let (service, properties, _) = build_service();
    service
        .add_favorite(&user(), &PropertyId("b17-plot".to_string()))
        .expect("add");
    properties.delete(&PropertyId("b17-plot".to_string()));

    let ranked = service.recommendations(&user()).expect("recommendations");

    assert!(ranked.is_empty());
}

#[test]
fn recommendations_for_user_without_favorites_are_empty() {
    let (service, _, _) = build_service();

    assert!(service
        .recommendations(&user())
        .expect("recommendations")
        .is_empty());
}

#[test]
fn recommendations_propagate_unavailable_catalog() {
    let service = ListingService::new(
        Arc::new(OfflineProperties),
        Arc::new(MemoryFavorites::default()),
    );

    match service.recommendations(&user()) {
        Err(ListingServiceError::Repository(RepositoryError::Unavailable(_))) => {}
        other => panic!("expected unavailable error, got {other:?}"),
    }
}
