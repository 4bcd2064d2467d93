// crates/post-search/src/domain/value_objects/price_range.rs

use shared_kernel::domain::value_objects::ValueObject;
use shared_kernel::errors::{DomainError, Result};

/// Bornes inclusives `[min, max]`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PriceRange {
    min: f64,
    max: f64,
}

impl PriceRange {
    pub fn try_new(min: f64, max: f64) -> Result<Self> {
        let range = Self { min, max };
        range.validate()?;
        Ok(range)
    }

    pub fn min(&self) -> f64 { self.min }
    pub fn max(&self) -> f64 { self.max }
}

impl ValueObject for PriceRange {
    fn validate(&self) -> Result<()> {
        if !self.min.is_finite() || !self.max.is_finite() {
            return Err(DomainError::Validation {
                field: "price_range",
                reason: "Bounds must be finite numbers".to_string(),
            });
        }
        if self.min > self.max {
            return Err(DomainError::Validation {
                field: "price_range",
                reason: format!("min ({}) is greater than max ({})", self.min, self.max),
            });
        }
        Ok(())
    }
}
