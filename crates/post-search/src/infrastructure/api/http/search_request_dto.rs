// crates/post-search/src/infrastructure/api/http/search_request_dto.rs

use crate::domain::entities::PostInfo;
use crate::domain::query::SearchRequest;
use crate::domain::value_objects::{GeoRadius, NoPriceFilter, PriceRange, SearchMode, SortBy};
use serde::{Deserialize, Serialize};
use shared_kernel::errors::DomainError;

/// Corps de `POST /search/posts`. Tous les champs sont optionnels.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct SearchRequestDto {
    /// `true` = recherche avancée
    pub full: bool,
    pub offset: u32,
    pub limit: Option<u32>,
    pub sort_by: u8,
    pub term: String,
    pub countries: Option<Vec<i32>>,
    pub location: LocationDto,
    pub no_price: NoPriceDto,
    pub price_range: PriceRangeDto,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct LocationDto {
    pub valid: bool,
    pub latitude: f64,
    pub longitude: f64,
    /// km
    pub radius: f64,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct NoPriceDto {
    pub only: bool,
    pub exclude: bool,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct PriceRangeDto {
    pub valid: bool,
    pub min: f64,
    pub max: f64,
}

#[derive(Debug, Serialize)]
pub struct SearchResponseDto {
    pub found: Vec<PostInfo>,
}

impl TryFrom<SearchRequestDto> for SearchRequest {
    type Error = DomainError;

    fn try_from(dto: SearchRequestDto) -> Result<Self, DomainError> {
        let mode = if dto.full { SearchMode::Advanced } else { SearchMode::Basic };

        let location = match dto.location.valid {
            true => Some(GeoRadius::try_new(dto.location.latitude, dto.location.longitude, dto.location.radius)?),
            false => None,
        };
        let price_range = match dto.price_range.valid {
            true => Some(PriceRange::try_new(dto.price_range.min, dto.price_range.max)?),
            false => None,
        };

        Ok(SearchRequest {
            mode,
            offset: dto.offset,
            limit: dto.limit.unwrap_or(SearchRequest::DEFAULT_LIMIT),
            sort_by: SortBy::try_from_code(dto.sort_by)?,
            term: dto.term,
            countries: dto.countries.unwrap_or_default().into_iter().collect(),
            location,
            no_price: NoPriceFilter::try_from_flags(dto.no_price.only, dto.no_price.exclude)?,
            price_range,
        })
    }
}
