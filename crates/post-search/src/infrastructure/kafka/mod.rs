mod kafka_change_source;

pub use kafka_change_source::KafkaChangeSource;
