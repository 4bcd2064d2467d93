// crates/post-search/src/application/workers/change_listener.rs

use crate::application::dispatch_change::DispatchChangeUseCase;
use crate::application::ports::ChangeSource;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;

/// Compteurs de fin de boucle
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ListenerReport {
    pub received: u64,
    pub applied: u64,
    pub skipped: u64,
}

/// Boucle d'ingestion : une erreur ne concerne qu'un message, jamais la boucle.
pub struct ChangeListener {
    source: Arc<dyn ChangeSource>,
    dispatcher: Arc<DispatchChangeUseCase>,
}

impl ChangeListener {
    pub fn new(source: Arc<dyn ChangeSource>, dispatcher: Arc<DispatchChangeUseCase>) -> Self {
        Self { source, dispatcher }
    }

    pub async fn run(&self, shutdown: CancellationToken) -> ListenerReport {
        let mut report = ListenerReport::default();
        tracing::info!("🎧 Change listener started on {}", self.source.name());

        loop {
            // L'arrêt n'interrompt que l'attente, jamais un dispatch en cours
            let next = tokio::select! {
                biased;
                _ = shutdown.cancelled() => None,
                next = self.source.next_change() => next,
            };

            let Some(delivery) = next else { break };
            report.received += 1;

            let change = match delivery {
                Ok(change) => change,
                Err(e) => {
                    tracing::warn!(source = self.source.name(), "⚠️ Skipping undecodable delivery: {}", e);
                    report.skipped += 1;
                    continue;
                }
            };

            match self.dispatcher.execute(&change.message).await {
                Ok(outcome) => {
                    report.applied += 1;
                    tracing::debug!(uuid = %change.message.id, ?outcome, "Change applied");

                    if let Err(e) = self.source.acknowledge(&change).await {
                        tracing::warn!(uuid = %change.message.id, "⚠️ Ack failed: {}", e);
                    }
                }
                Err(e) if e.is_message_scoped() => {
                    tracing::warn!(uuid = %change.message.id, "⚠️ Skipping change: {}", e);
                    report.skipped += 1;
                }
                Err(e) => {
                    tracing::error!(uuid = %change.message.id, "❌ Index operation failed: {}", e);
                    report.skipped += 1;
                }
            }
        }

        tracing::info!(
            "👋 Change listener on {} exited clean (received={}, applied={}, skipped={})",
            self.source.name(),
            report.received,
            report.applied,
            report.skipped
        );
        report
    }
}
