// crates/post-search/src/domain/value_objects/no_price_filter.rs

use shared_kernel::errors::{DomainError, Result};

/// Filtre sur les annonces sans prix (troc, `currency == 0`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NoPriceFilter {
    #[default]
    Any,
    Only,
    Exclude,
}

impl NoPriceFilter {
    /// Les deux drapeaux à la fois n'ont pas de sens : erreur d'entrée.
    pub fn try_from_flags(only: bool, exclude: bool) -> Result<Self> {
        match (only, exclude) {
            (false, false) => Ok(NoPriceFilter::Any),
            (true, false) => Ok(NoPriceFilter::Only),
            (false, true) => Ok(NoPriceFilter::Exclude),
            (true, true) => Err(DomainError::Validation {
                field: "no_price",
                reason: "'only' and 'exclude' are mutually exclusive".to_string(),
            }),
        }
    }

    pub fn is_decided(&self) -> bool {
        !matches!(self, NoPriceFilter::Any)
    }
}
