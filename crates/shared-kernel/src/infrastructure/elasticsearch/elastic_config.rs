// crates/shared-kernel/src/infrastructure/elasticsearch/elastic_config.rs

/// Réglages d'un index, transmis aux adaptateurs qui écrivent/lisent dedans
#[derive(Debug, Clone, PartialEq)]
pub struct ElasticConfig {
    pub index_name: String,
    /// `refresh=wait_for` sur chaque écriture : lecture immédiate après ingestion
    pub refresh_on_write: bool,
}

impl Default for ElasticConfig {
    fn default() -> Self {
        Self {
            index_name: "posts".to_string(),
            refresh_on_write: false,
        }
    }
}
