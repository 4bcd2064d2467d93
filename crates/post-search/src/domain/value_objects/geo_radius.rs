// crates/post-search/src/domain/value_objects/geo_radius.rs

use shared_kernel::domain::value_objects::{GeoPoint, ValueObject};
use shared_kernel::errors::{DomainError, Result};

/// Zone de recherche : cercle de `radius_km` autour de `center`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoRadius {
    center: GeoPoint,
    radius_km: f64,
}

impl GeoRadius {
    pub fn try_new(lat: f64, lon: f64, radius_km: f64) -> Result<Self> {
        let radius = Self {
            center: GeoPoint::try_new(lat, lon)?,
            radius_km,
        };
        radius.validate()?;
        Ok(radius)
    }

    pub fn center(&self) -> GeoPoint { self.center }
    pub fn radius_km(&self) -> f64 { self.radius_km }

    pub fn contains(&self, point: &GeoPoint) -> bool {
        self.center.distance_to(point) <= self.radius_km * 1000.0
    }
}

impl ValueObject for GeoRadius {
    fn validate(&self) -> Result<()> {
        self.center.validate()?;
        if !self.radius_km.is_finite() || self.radius_km <= 0.0 {
            return Err(DomainError::Validation {
                field: "radius",
                reason: "Radius must be a positive number of kilometers".to_string(),
            });
        }
        Ok(())
    }
}
