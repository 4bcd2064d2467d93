// crates/post-search/src/application/dispatch_change/dispatch_change_use_case.rs

use crate::domain::entities::ChangeMessage;
use crate::domain::repositories::PostIndex;
use crate::domain::value_objects::ChangeAction;
use shared_kernel::errors::{DomainError, Result};
use std::sync::Arc;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DispatchOutcome {
    Greeted,
    Upserted,
    Deleted,
}

/// Route un changement vers l'index : un message valide = un appel.
pub struct DispatchChangeUseCase {
    index: Arc<dyn PostIndex>,
}

impl DispatchChangeUseCase {
    pub fn new(index: Arc<dyn PostIndex>) -> Self {
        Self { index }
    }

    pub async fn execute(&self, message: &ChangeMessage) -> Result<DispatchOutcome> {
        match message.action {
            ChangeAction::Hello => {
                tracing::debug!(uuid = %message.id, "👋 Hello received");
                Ok(DispatchOutcome::Greeted)
            }
            ChangeAction::Create | ChangeAction::Update => {
                let info = message.info.as_ref().ok_or_else(|| DomainError::Validation {
                    field: "info",
                    reason: format!("{:?} for '{}' carries no document", message.action, message.id),
                })?;

                // La clé du message fait foi, même si le document en porte une autre
                let document = info.clone().with_uuid(message.id.as_str());
                self.index.upsert(&message.id, &document).await?;
                Ok(DispatchOutcome::Upserted)
            }
            ChangeAction::Delete => {
                self.index.delete(&message.id).await?;
                Ok(DispatchOutcome::Deleted)
            }
            ChangeAction::Unknown(code) => Err(DomainError::UnsupportedAction { code }),
        }
    }
}
