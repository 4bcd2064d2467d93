// crates/post-search/src/infrastructure/kafka/kafka_change_source.rs

use crate::application::ports::{ChangeSource, InboundChange};
use crate::domain::entities::ChangeMessage;
use async_trait::async_trait;
use shared_kernel::errors::{AppResult, DomainError, Result};
use shared_kernel::infrastructure::kafka::{KafkaConfig, KafkaMessageConsumer};
use tokio_util::sync::CancellationToken;

pub const POST_CHANGED_TOPIC: &str = "post-changed";
pub const SEARCH_INGEST_GROUP: &str = "search-ingest";

/// Abonnement au topic `post-changed`. L'offset est commité à la réception,
/// pas d'ack applicatif.
pub struct KafkaChangeSource {
    consumer: KafkaMessageConsumer,
}

impl KafkaChangeSource {
    pub fn new(config: &KafkaConfig, shutdown: CancellationToken) -> AppResult<Self> {
        Ok(Self { consumer: KafkaMessageConsumer::new(config, shutdown)? })
    }

    pub fn from_env(shutdown: CancellationToken) -> AppResult<Self> {
        let config = KafkaConfig::from_env(POST_CHANGED_TOPIC, SEARCH_INGEST_GROUP)?;
        Self::new(&config, shutdown)
    }
}

#[async_trait]
impl ChangeSource for KafkaChangeSource {
    async fn next_change(&self) -> Option<Result<InboundChange>> {
        let delivery = self.consumer.next_payload().await?;

        Some(match delivery {
            Ok(payload) => ChangeMessage::decode(&payload).map(InboundChange::new),
            Err(e) => Err(DomainError::Infrastructure(e.to_string())),
        })
    }

    fn name(&self) -> &'static str {
        "kafka"
    }
}
