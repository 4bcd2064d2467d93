// crates/post-search/src/infrastructure/udp/udp_change_source.rs

use crate::application::ports::{ChangeSource, InboundChange};
use crate::domain::entities::ChangeMessage;
use crate::infrastructure::udp::{SyncMessage, UdpConfig};
use async_trait::async_trait;
use shared_kernel::errors::{AppError, AppResult, DomainError, ErrorCode, Result};
use std::net::SocketAddr;
use tokio::net::UdpSocket;
use tokio_util::sync::CancellationToken;

const DATAGRAM_BUFFER: usize = 4096;

/// Transport pair à pair : un datagramme = un changement. Chaque dispatch
/// réussi est acquitté auprès de l'expéditeur.
pub struct UdpChangeSource {
    socket: UdpSocket,
    shutdown: CancellationToken,
    ack: Vec<u8>,
}

impl UdpChangeSource {
    pub async fn bind(config: &UdpConfig, shutdown: CancellationToken) -> AppResult<Self> {
        let socket = UdpSocket::bind(config.listen_addr).await.map_err(|e| {
            AppError::new(ErrorCode::SetupFailed, format!("Cannot bind UDP {}: {}", config.listen_addr, e))
        })?;
        let ack = SyncMessage::consumer_ack().to_bytes();

        tracing::info!("📡 UDP change source listening on {}", config.listen_addr);

        // Le captain n'est qu'informé : un échec n'empêche pas d'écouter
        if let Some(captain) = config.captain {
            match socket.send_to(&ack, captain).await {
                Ok(_) => tracing::info!("🤝 Hello sent to captain {}", captain),
                Err(e) => tracing::warn!("⚠️ Captain {} unreachable: {}", captain, e),
            }
        }

        Ok(Self { socket, shutdown, ack })
    }

    pub fn local_addr(&self) -> AppResult<SocketAddr> {
        self.socket
            .local_addr()
            .map_err(|e| AppError::new(ErrorCode::InfrastructureFailure, e.to_string()))
    }
}

#[async_trait]
impl ChangeSource for UdpChangeSource {
    async fn next_change(&self) -> Option<Result<InboundChange>> {
        let mut buffer = vec![0u8; DATAGRAM_BUFFER];

        loop {
            let (len, peer) = tokio::select! {
                _ = self.shutdown.cancelled() => {
                    tracing::info!("🛑 UDP change source stopped.");
                    return None;
                }
                received = self.socket.recv_from(&mut buffer) => match received {
                    Ok(datagram) => datagram,
                    Err(e) => return Some(Err(DomainError::Infrastructure(e.to_string()))),
                },
            };

            let payload = &buffer[..len];

            // Messages de contrôle entre pairs : rien à indexer
            if let Ok(sync) = serde_json::from_slice::<SyncMessage>(payload) {
                tracing::debug!(%peer, meaning = ?sync.meaning, "Sync message ignored");
                continue;
            }

            return Some(ChangeMessage::decode(payload).map(|message| InboundChange::from_peer(message, peer)));
        }
    }

    async fn acknowledge(&self, change: &InboundChange) -> Result<()> {
        let Some(peer) = change.reply_to else { return Ok(()) };

        self.socket
            .send_to(&self.ack, peer)
            .await
            .map_err(|e| DomainError::Infrastructure(format!("Ack to {peer} failed: {e}")))?;
        Ok(())
    }

    fn name(&self) -> &'static str {
        "udp"
    }
}
