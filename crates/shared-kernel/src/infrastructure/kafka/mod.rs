// crates/shared-kernel/src/infrastructure/kafka/mod.rs

mod kafka_config;
mod kafka_message_consumer;

pub use kafka_config::KafkaConfig;
pub use kafka_message_consumer::KafkaMessageConsumer;
