// crates/shared-kernel/src/domain/value_objects/geo_point.rs
use crate::domain::value_objects::{Latitude, Longitude, ValueObject};
use crate::errors::{DomainError, Result};
use serde::{Deserialize, Serialize};

/// Point géographique, sérialisé au format `geo_point` objet : `{"lat": .., "lon": ..}`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    #[serde(rename = "lat")]
    latitude: Latitude,
    #[serde(rename = "lon")]
    longitude: Longitude,
}

impl GeoPoint {
    pub fn try_new(lat: f64, lon: f64) -> Result<Self> {
        Ok(Self {
            latitude: Latitude::try_new(lat)?,
            longitude: Longitude::try_new(lon)?,
        })
    }

    pub fn from_raw(lat: f64, lon: f64) -> Self {
        Self {
            latitude: Latitude::from_raw(lat),
            longitude: Longitude::from_raw(lon),
        }
    }

    // --- Getters ---
    pub fn lat(&self) -> f64 { self.latitude.value() }
    pub fn lon(&self) -> f64 { self.longitude.value() }

    /// Distance orthodromique (Haversine) en mètres
    pub fn distance_to(&self, other: &GeoPoint) -> f64 {
        let earth_radius_meters = 6_371_000.0;

        let phi1 = self.lat().to_radians();
        let phi2 = other.lat().to_radians();

        let delta_phi = (other.lat() - self.lat()).to_radians();
        let delta_lambda = (other.lon() - self.lon()).to_radians();

        let a = (delta_phi / 2.0).sin().powi(2)
            + phi1.cos() * phi2.cos() * (delta_lambda / 2.0).sin().powi(2);

        let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

        earth_radius_meters * c
    }
}

impl Default for GeoPoint {
    fn default() -> Self {
        Self::from_raw(0.0, 0.0)
    }
}

impl ValueObject for GeoPoint {
    fn validate(&self) -> Result<()> {
        self.latitude.validate()?;
        self.longitude.validate()?;
        Ok(())
    }
}
