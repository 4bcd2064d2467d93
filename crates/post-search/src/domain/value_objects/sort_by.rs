// crates/post-search/src/domain/value_objects/sort_by.rs

use shared_kernel::errors::{DomainError, Result};

/// Ordre demandé par le client (0 = pertinence, 1..=4 prix / date)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortBy {
    #[default]
    Relevance,
    PriceAsc,
    PriceDesc,
    DateAsc,
    DateDesc,
}

impl SortBy {
    pub fn try_from_code(code: u8) -> Result<Self> {
        match code {
            0 => Ok(SortBy::Relevance),
            1 => Ok(SortBy::PriceAsc),
            2 => Ok(SortBy::PriceDesc),
            3 => Ok(SortBy::DateAsc),
            4 => Ok(SortBy::DateDesc),
            other => Err(DomainError::Validation {
                field: "sort_by",
                reason: format!("Unknown sort order {other}, expected 0..=4"),
            }),
        }
    }
}
