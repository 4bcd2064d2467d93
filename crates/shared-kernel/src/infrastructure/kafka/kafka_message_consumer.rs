// crates/shared-kernel/src/infrastructure/kafka/kafka_message_consumer.rs

use crate::errors::{AppError, AppResult, ErrorCode};
use crate::infrastructure::kafka::KafkaConfig;
use rdkafka::consumer::{Consumer, StreamConsumer};
use rdkafka::message::Message;
use tokio_util::sync::CancellationToken;

/// Consommateur brut : livre les payloads un par un, dans l'ordre de réception.
/// Le décodage reste à la charge de l'appelant.
pub struct KafkaMessageConsumer {
    consumer: StreamConsumer,
    shutdown_token: CancellationToken,
}

impl KafkaMessageConsumer {
    pub fn new(config: &KafkaConfig, shutdown_token: CancellationToken) -> AppResult<Self> {
        let consumer: StreamConsumer = config.consumer_config().create()?;
        consumer
            .subscribe(&[config.topic.as_str()])
            .map_err(|e| AppError::new(ErrorCode::InfrastructureFailure, e.to_string()))?;

        tracing::info!(
            "📥 Kafka consumer subscribed to '{}' (group '{}')",
            config.topic,
            config.group_id
        );

        Ok(Self {
            consumer,
            shutdown_token,
        })
    }

    /// `None` une fois l'arrêt demandé. Les messages sans payload sont sautés.
    pub async fn next_payload(&self) -> Option<AppResult<Vec<u8>>> {
        loop {
            tokio::select! {
                _ = self.shutdown_token.cancelled() => {
                    tracing::info!("🛑 Kafka consumer loop stopped.");
                    return None;
                }
                result = self.consumer.recv() => {
                    match result {
                        Ok(message) => match message.payload() {
                            Some(p) => return Some(Ok(p.to_vec())),
                            None => {
                                tracing::debug!(offset = message.offset(), "Skipping empty Kafka message");
                                continue;
                            }
                        },
                        Err(e) => return Some(Err(AppError::from(e))),
                    }
                }
            }
        }
    }
}
