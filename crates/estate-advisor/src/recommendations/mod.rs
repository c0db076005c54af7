//! Similarity ranking of listings against a user's favorites.
//!
//! Everything here is a pure function of its arguments. Resolving favorite ids into
//! [`Property`] records is the caller's job (see [`crate::listings::ListingService`]);
//! ids that fail to resolve are simply absent from `favorites`.

mod signals;

pub use signals::{FavoriteSignals, PriceBand, SignalMatch};

use std::collections::HashSet;

use serde::Serialize;

use crate::listings::domain::{Property, PropertyId};

pub const MAX_RECOMMENDATIONS: usize = 4;

/// A recommended listing together with the signals that earned its place.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoredProperty {
    pub property: Property,
    pub score: u8,
    pub signals: SignalMatch,
}

/// Rank `candidates` against `favorites`, keeping at most [`MAX_RECOMMENDATIONS`].
///
/// A candidate is eligible when it is not already a favorite and matches at least one
/// signal. Ties keep their input order.
pub fn rank(
    favorites: &[Property],
    candidates: &[Property],
    favorite_ids: &HashSet<PropertyId>,
) -> Vec<ScoredProperty> {
    let signals = FavoriteSignals::from_favorites(favorites);

    let mut ranked: Vec<ScoredProperty> = candidates
        .iter()
        .filter(|candidate| !favorite_ids.contains(&candidate.id))
        .filter_map(|candidate| {
            let matched = signals.evaluate(candidate);
            matched.any().then(|| ScoredProperty {
                property: candidate.clone(),
                score: matched.score(),
                signals: matched,
            })
        })
        .collect();

    // `sort_by` is stable.
    ranked.sort_by(|a, b| b.score.cmp(&a.score));
    ranked.truncate(MAX_RECOMMENDATIONS);
    ranked
}

/// [`rank`] without the scoring detail.
pub fn recommend(
    favorites: &[Property],
    candidates: &[Property],
    favorite_ids: &HashSet<PropertyId>,
) -> Vec<Property> {
    rank(favorites, candidates, favorite_ids)
        .into_iter()
        .map(|scored| scored.property)
        .collect()
}
