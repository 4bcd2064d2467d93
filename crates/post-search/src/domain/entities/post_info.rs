// crates/post-search/src/domain/entities/post_info.rs

use serde::{Deserialize, Serialize};
use shared_kernel::domain::value_objects::GeoPoint;
use shared_kernel::errors::DomainError;

/// Document indexé : une annonce telle qu'elle est cherchée et triée.
/// Le schéma a dérivé au fil des versions des producteurs, la lecture
/// passe donc par `PostInfoWire` (valeurs par défaut, anciens champs).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "PostInfoWire")]
pub struct PostInfo {
    pub uuid: String,
    pub author_id: i64,
    pub title: String,
    pub content: String,
    pub images: Vec<String>,
    pub price: f64,
    /// 0 = pas de prix (troc)
    pub currency: i32,
    pub country: i32,
    pub location: GeoPoint,
    /// Secondes epoch
    pub created_at: i64,
    pub updated_at: i64,
    pub comment_count: i64,
}

impl PostInfo {
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            uuid: String::new(),
            author_id: 0,
            title: title.into(),
            content: content.into(),
            images: Vec::new(),
            price: 0.0,
            currency: 0,
            country: 0,
            location: GeoPoint::default(),
            created_at: 0,
            updated_at: 0,
            comment_count: 0,
        }
    }

    pub fn with_uuid(mut self, uuid: impl Into<String>) -> Self {
        self.uuid = uuid.into();
        self
    }

    pub fn with_price(mut self, price: f64, currency: i32) -> Self {
        self.price = price;
        self.currency = currency;
        self
    }

    pub fn with_country(mut self, country: i32) -> Self {
        self.country = country;
        self
    }

    pub fn with_location(mut self, location: GeoPoint) -> Self {
        self.location = location;
        self
    }

    pub fn with_timestamps(mut self, created_at: i64, updated_at: i64) -> Self {
        self.created_at = created_at;
        self.updated_at = updated_at;
        self
    }

    /// Le prix n'a de sens que si une devise est renseignée
    pub fn has_price(&self) -> bool {
        self.currency != 0
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum CurrencyWire {
    Code(i32),
    Text(String),
}

#[derive(Deserialize)]
struct PostInfoWire {
    #[serde(default)]
    uuid: String,
    #[serde(default)]
    author_id: i64,
    #[serde(default)]
    title: String,
    #[serde(default)]
    content: String,
    #[serde(default)]
    images: Option<Vec<String>>,
    #[serde(default)]
    price: f64,
    #[serde(default)]
    currency: Option<CurrencyWire>,
    #[serde(default)]
    country: i32,
    #[serde(default)]
    location: Option<GeoPoint>,
    // Anciens producteurs : coordonnées à plat
    #[serde(default)]
    latitude: Option<f64>,
    #[serde(default)]
    longitude: Option<f64>,
    #[serde(default)]
    created_at: i64,
    #[serde(default)]
    updated_at: i64,
    #[serde(default)]
    comment_count: i64,
}

impl TryFrom<PostInfoWire> for PostInfo {
    type Error = DomainError;

    fn try_from(wire: PostInfoWire) -> Result<Self, DomainError> {
        let currency = match wire.currency {
            None => 0,
            Some(CurrencyWire::Code(code)) => code,
            Some(CurrencyWire::Text(text)) if text.trim().is_empty() => 0,
            Some(CurrencyWire::Text(text)) => text.trim().parse().map_err(|_| DomainError::Validation {
                field: "currency",
                reason: format!("'{text}' is not a currency code"),
            })?,
        };

        let location = match (wire.location, wire.latitude, wire.longitude) {
            (Some(point), _, _) => point,
            (None, Some(lat), Some(lon)) => GeoPoint::try_new(lat, lon)?,
            _ => GeoPoint::default(),
        };

        Ok(Self {
            uuid: wire.uuid,
            author_id: wire.author_id,
            title: wire.title,
            content: wire.content,
            images: wire.images.unwrap_or_default(),
            price: wire.price,
            currency,
            country: wire.country,
            location,
            created_at: wire.created_at,
            updated_at: wire.updated_at,
            comment_count: wire.comment_count,
        })
    }
}
