// crates/shared-kernel/src/domain/value_objects/latitude.rs

use crate::domain::value_objects::ValueObject;
use crate::errors::{DomainError, Result};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct Latitude(f64);

impl Latitude {
    pub fn try_new(val: f64) -> Result<Self> {
        let lat = Self(val);
        lat.validate()?;
        Ok(lat)
    }

    pub fn from_raw(val: f64) -> Self {
        Self(val)
    }

    pub fn value(&self) -> f64 {
        self.0
    }
}

impl ValueObject for Latitude {
    fn validate(&self) -> Result<()> {
        if !(-90.0..=90.0).contains(&self.0) {
            return Err(DomainError::Validation {
                field: "latitude",
                reason: "Range must be between -90 and 90".to_string(),
            });
        }
        Ok(())
    }
}

impl TryFrom<f64> for Latitude {
    type Error = DomainError;
    fn try_from(val: f64) -> Result<Self> {
        Self::try_new(val)
    }
}

impl From<Latitude> for f64 {
    fn from(lat: Latitude) -> f64 {
        lat.0
    }
}
