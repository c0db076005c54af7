use std::collections::HashSet;

use serde::Serialize;

use crate::listings::domain::{Property, PropertyType};

const PRICE_FLOOR_FACTOR: f64 = 0.8;
const PRICE_CEILING_FACTOR: f64 = 1.2;

pub(crate) const TYPE_MATCH_WEIGHT: u8 = 2;
pub(crate) const AREA_MATCH_WEIGHT: u8 = 3;
pub(crate) const PRICE_MATCH_WEIGHT: u8 = 1;

/// Inclusive price range spanning 80% of the cheapest to 120% of the dearest favorite.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PriceBand {
    pub floor: f64,
    pub ceiling: f64,
}

impl PriceBand {
    /// `None` when there are no prices to anchor on.
    pub fn around<I>(prices: I) -> Option<Self>
    where
        I: IntoIterator<Item = f64>,
    {
        let mut prices = prices.into_iter();
        let first = prices.next()?;
        let (min, max) = prices.fold((first, first), |(min, max), price| {
            (min.min(price), max.max(price))
        });

        Some(Self {
            floor: min * PRICE_FLOOR_FACTOR,
            ceiling: max * PRICE_CEILING_FACTOR,
        })
    }

    pub fn contains(&self, price: f64) -> bool {
        price >= self.floor && price <= self.ceiling
    }
}

/// Similarity signals derived from a user's resolved favorites.
#[derive(Debug, Clone)]
pub struct FavoriteSignals<'a> {
    types: HashSet<PropertyType>,
    areas: HashSet<&'a str>,
    price_band: Option<PriceBand>,
}

impl<'a> FavoriteSignals<'a> {
    pub fn from_favorites(favorites: &'a [Property]) -> Self {
        Self {
            types: favorites.iter().map(|p| p.property_type).collect(),
            areas: favorites.iter().map(|p| p.location.area.as_str()).collect(),
            price_band: PriceBand::around(favorites.iter().map(|p| p.price)),
        }
    }

    pub fn price_band(&self) -> Option<PriceBand> {
        self.price_band
    }

    pub fn evaluate(&self, candidate: &Property) -> SignalMatch {
        SignalMatch {
            type_match: self.types.contains(&candidate.property_type),
            area_match: self.areas.contains(candidate.location.area.as_str()),
            price_match: self
                .price_band
                .is_some_and(|band| band.contains(candidate.price)),
        }
    }
}

/// Which signals a candidate satisfied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct SignalMatch {
    pub type_match: bool,
    pub area_match: bool,
    pub price_match: bool,
}

impl SignalMatch {
    pub fn any(self) -> bool {
        self.type_match || self.area_match || self.price_match
    }

    pub fn score(self) -> u8 {
        let mut score = 0;
        if self.type_match {
            score += TYPE_MATCH_WEIGHT;
        }
        if self.area_match {
            score += AREA_MATCH_WEIGHT;
        }
        if self.price_match {
            score += PRICE_MATCH_WEIGHT;
        }
        score
    }
}
