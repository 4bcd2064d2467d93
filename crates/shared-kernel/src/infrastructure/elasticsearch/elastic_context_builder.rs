// crates/shared-kernel/src/infrastructure/elasticsearch/elastic_context_builder.rs

use crate::errors::AppResult;
use crate::infrastructure::elasticsearch::ElasticContext;
use crate::infrastructure::env;
use std::time::Duration;

pub struct ElasticContextBuilder {
    pub(crate) url: String,
    pub(crate) index_name: String,
    pub(crate) timeout: Duration,
    pub(crate) refresh_on_write: bool,
}

impl Default for ElasticContextBuilder {
    fn default() -> Self {
        Self {
            url: "http://localhost:9200".to_string(),
            index_name: "posts".to_string(),
            timeout: Duration::from_secs(10),
            refresh_on_write: false,
        }
    }
}

impl ElasticContextBuilder {
    pub fn new() -> AppResult<Self> {
        let defaults = Self::default();

        Ok(Self {
            url: env::required("ELASTICSEARCH_URL")?,
            index_name: env::or_default("ELASTICSEARCH_INDEX", &defaults.index_name),
            timeout: Duration::from_millis(env::parsed_or(
                "ELASTICSEARCH_TIMEOUT_MS",
                defaults.timeout.as_millis() as u64,
            )?),
            refresh_on_write: env::parsed_or("ELASTICSEARCH_REFRESH_ON_WRITE", defaults.refresh_on_write)?,
        })
    }

    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = url.into();
        self
    }

    pub fn with_index(mut self, index_name: impl Into<String>) -> Self {
        self.index_name = index_name.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_refresh_on_write(mut self, refresh: bool) -> Self {
        self.refresh_on_write = refresh;
        self
    }

    pub fn build(self) -> AppResult<ElasticContext> {
        ElasticContext::restore(self)
    }
}
