// crates/post-search/src/domain/entities/change_message.rs

use crate::domain::entities::PostInfo;
use crate::domain::value_objects::{ChangeAction, PostId};
use serde::{Deserialize, Serialize};
use shared_kernel::errors::{DomainError, Result};

/// Notification "post changed" : une livraison = un changement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "ChangeMessageWire")]
pub struct ChangeMessage {
    pub action: ChangeAction,
    #[serde(rename = "uuid")]
    pub id: PostId,
    pub info: Option<PostInfo>,
}

#[derive(Deserialize)]
struct ChangeMessageWire {
    action: ChangeAction,
    #[serde(default)]
    uuid: String,
    #[serde(default)]
    info: Option<serde_json::Value>,
}

impl TryFrom<ChangeMessageWire> for ChangeMessage {
    type Error = DomainError;

    fn try_from(wire: ChangeMessageWire) -> Result<Self> {
        // Les "hello" des pairs arrivent souvent sans clé
        let id = match wire.action {
            ChangeAction::Hello if wire.uuid.trim().is_empty() => PostId::generate(),
            _ => PostId::try_new(wire.uuid)?,
        };
        // Le document n'est lu que pour Create / Update, ignoré sinon
        let info = match wire.info {
            Some(raw) if wire.action.writes_document() && !raw.is_null() => Some(
                serde_json::from_value::<PostInfo>(raw).map_err(|e| DomainError::Decode(e.to_string()))?,
            ),
            _ => None,
        };
        Ok(Self { action: wire.action, id, info })
    }
}

impl ChangeMessage {
    pub fn hello() -> Self {
        Self { action: ChangeAction::Hello, id: PostId::generate(), info: None }
    }

    pub fn create(id: PostId, info: PostInfo) -> Self {
        Self::with_document(ChangeAction::Create, id, info)
    }

    pub fn update(id: PostId, info: PostInfo) -> Self {
        Self::with_document(ChangeAction::Update, id, info)
    }

    pub fn remove(id: PostId) -> Self {
        Self { action: ChangeAction::Delete, id, info: None }
    }

    fn with_document(action: ChangeAction, id: PostId, info: PostInfo) -> Self {
        let info = info.with_uuid(id.as_str());
        Self { action, id, info: Some(info) }
    }

    pub fn decode(payload: &[u8]) -> Result<Self> {
        serde_json::from_slice(payload).map_err(|e| DomainError::Decode(e.to_string()))
    }

    pub fn encode(&self) -> Result<Vec<u8>> {
        serde_json::to_vec(self).map_err(|e| DomainError::Internal(e.to_string()))
    }
}
