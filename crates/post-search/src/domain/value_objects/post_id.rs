// crates/post-search/src/domain/value_objects/post_id.rs

use serde::{Deserialize, Serialize};
use shared_kernel::domain::value_objects::ValueObject;
use shared_kernel::errors::{DomainError, Result};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Clé du document dans l'index. Les producteurs envoient des UUID,
/// mais la clé reste opaque : on ne la parse pas.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct PostId(String);

impl PostId {
    /// Génère un nouvel UUID v7.
    pub fn generate() -> Self {
        Self(Uuid::now_v7().to_string())
    }

    pub fn try_new(id: impl Into<String>) -> Result<Self> {
        let id = Self(id.into());
        id.validate()?;
        Ok(id)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl ValueObject for PostId {
    fn validate(&self) -> Result<()> {
        if self.0.trim().is_empty() {
            return Err(DomainError::Validation {
                field: "uuid",
                reason: "Post id cannot be empty".to_string(),
            });
        }
        // L'id devient un segment d'URL (`/posts/_doc/{id}`)
        if self.0.contains('/') {
            return Err(DomainError::Validation {
                field: "uuid",
                reason: format!("'{}' must not contain '/'", self.0),
            });
        }
        Ok(())
    }
}

impl From<Uuid> for PostId {
    fn from(uuid: Uuid) -> Self {
        Self(uuid.to_string())
    }
}

impl FromStr for PostId {
    type Err = DomainError;
    fn from_str(s: &str) -> Result<Self> {
        Self::try_new(s)
    }
}

impl TryFrom<String> for PostId {
    type Error = DomainError;

    fn try_from(s: String) -> Result<Self> {
        Self::try_new(s)
    }
}

impl From<PostId> for String {
    fn from(id: PostId) -> String {
        id.0
    }
}

impl fmt::Display for PostId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
