// crates/post-search/src/application/ports/change_source.rs

use crate::domain::entities::ChangeMessage;
use async_trait::async_trait;
use shared_kernel::errors::Result;
use std::net::SocketAddr;

/// Un message décodé et, pour les transports point à point, son expéditeur
#[derive(Debug, Clone, PartialEq)]
pub struct InboundChange {
    pub message: ChangeMessage,
    pub reply_to: Option<SocketAddr>,
}

impl InboundChange {
    pub fn new(message: ChangeMessage) -> Self {
        Self { message, reply_to: None }
    }

    pub fn from_peer(message: ChangeMessage, peer: SocketAddr) -> Self {
        Self { message, reply_to: Some(peer) }
    }
}

/// Source de changements, indépendante du transport (broker ou UDP).
#[async_trait]
pub trait ChangeSource: Send + Sync {
    /// `None` : arrêt demandé. `Some(Err)` : une livraison illisible, la boucle continue.
    async fn next_change(&self) -> Option<Result<InboundChange>>;

    /// Appelé après un dispatch réussi
    async fn acknowledge(&self, _change: &InboundChange) -> Result<()> {
        Ok(())
    }

    fn name(&self) -> &'static str;
}
