// crates/post-search/src/domain/query/search_request.rs

use crate::domain::value_objects::{GeoRadius, NoPriceFilter, PriceRange, SearchMode, SortBy};
use std::collections::BTreeSet;

/// Requête de recherche validée. Les contraintes d'entrée (drapeaux
/// `no_price`, bornes de prix, rayon) sont portées par les value objects.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchRequest {
    pub mode: SearchMode,
    pub offset: u32,
    pub limit: u32,
    pub sort_by: SortBy,
    pub term: String,
    pub countries: BTreeSet<i32>,
    pub location: Option<GeoRadius>,
    pub no_price: NoPriceFilter,
    pub price_range: Option<PriceRange>,
}

impl SearchRequest {
    pub const DEFAULT_LIMIT: u32 = 10;

    pub fn basic(term: impl Into<String>) -> Self {
        Self {
            mode: SearchMode::Basic,
            offset: 0,
            limit: Self::DEFAULT_LIMIT,
            sort_by: SortBy::default(),
            term: term.into(),
            countries: BTreeSet::new(),
            location: None,
            no_price: NoPriceFilter::default(),
            price_range: None,
        }
    }

    pub fn advanced(term: impl Into<String>) -> Self {
        Self { mode: SearchMode::Advanced, ..Self::basic(term) }
    }

    pub fn with_page(mut self, offset: u32, limit: u32) -> Self {
        self.offset = offset;
        self.limit = limit;
        self
    }

    pub fn with_sort(mut self, sort_by: SortBy) -> Self {
        self.sort_by = sort_by;
        self
    }

    pub fn with_countries(mut self, countries: impl IntoIterator<Item = i32>) -> Self {
        self.countries = countries.into_iter().collect();
        self
    }

    pub fn with_location(mut self, location: GeoRadius) -> Self {
        self.location = Some(location);
        self
    }

    pub fn with_no_price(mut self, no_price: NoPriceFilter) -> Self {
        self.no_price = no_price;
        self
    }

    pub fn with_price_range(mut self, range: PriceRange) -> Self {
        self.price_range = Some(range);
        self
    }
}
