// crates/shared-kernel/src/infrastructure/kafka/kafka_config.rs

use crate::errors::AppResult;
use crate::infrastructure::env;
use rdkafka::config::ClientConfig;

#[derive(Debug, Clone, PartialEq)]
pub struct KafkaConfig {
    pub brokers: String,
    pub topic: String,
    pub group_id: String,
}

impl KafkaConfig {
    /// `topic_default` / `group_default` : valeurs propres à chaque service
    pub fn from_env(topic_default: &str, group_default: &str) -> AppResult<Self> {
        Ok(Self {
            brokers: env::or_default("KAFKA_BROKERS", "localhost:9092"),
            topic: env::or_default("POST_CHANGED_TOPIC", topic_default),
            group_id: env::or_default("SEARCH_INGEST_GROUP", group_default),
        })
    }

    /// Consommateur "auto-ack" : l'offset est stocké dès la réception du message
    /// et commité périodiquement, avant la fin du traitement.
    pub fn consumer_config(&self) -> ClientConfig {
        let mut config = ClientConfig::new();
        config
            .set("bootstrap.servers", &self.brokers)
            .set("group.id", &self.group_id)
            .set("enable.auto.commit", "true")
            .set("enable.auto.offset.store", "true")
            .set("auto.commit.interval.ms", "5000")
            .set("auto.offset.reset", "earliest")
            .set("session.timeout.ms", "45000")
            .set("max.poll.interval.ms", "300000");
        config
    }
}
