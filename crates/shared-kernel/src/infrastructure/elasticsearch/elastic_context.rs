// crates/shared-kernel/src/infrastructure/elasticsearch/elastic_context.rs

use crate::errors::{AppError, AppResult, ErrorCode};
use crate::infrastructure::elasticsearch::{ElasticConfig, ElasticContextBuilder};
use elasticsearch::Elasticsearch;
use elasticsearch::http::Url;
use elasticsearch::http::transport::{SingleNodeConnectionPool, TransportBuilder};

/// Client Elasticsearch partagé. `Elasticsearch` est clonable et thread-safe
/// (pool de connexions interne), on le distribue tel quel aux adaptateurs.
pub struct ElasticContext {
    client: Elasticsearch,
    url: String,
    config: ElasticConfig,
}

impl ElasticContext {
    pub fn builder() -> AppResult<ElasticContextBuilder> {
        ElasticContextBuilder::new()
    }

    pub fn builder_raw() -> ElasticContextBuilder {
        ElasticContextBuilder::default()
    }

    pub fn client(&self) -> Elasticsearch {
        self.client.clone()
    }

    pub fn url(&self) -> String {
        self.url.clone()
    }

    pub fn config(&self) -> ElasticConfig {
        self.config.clone()
    }

    pub(crate) fn restore(builder: ElasticContextBuilder) -> AppResult<Self> {
        let url = Url::parse(&builder.url).map_err(|e| {
            AppError::new(
                ErrorCode::SetupFailed,
                format!("Invalid Elasticsearch url '{}': {}", builder.url, e),
            )
        })?;

        let transport = TransportBuilder::new(SingleNodeConnectionPool::new(url))
            .timeout(builder.timeout)
            .disable_proxy()
            .build()
            .map_err(|e| {
                AppError::new(
                    ErrorCode::SetupFailed,
                    format!("Failed to build Elasticsearch transport for {}: {}", builder.url, e),
                )
            })?;

        tracing::debug!(url = %builder.url, index = %builder.index_name, "Elasticsearch client ready");

        Ok(Self {
            client: Elasticsearch::new(transport),
            url: builder.url,
            config: ElasticConfig {
                index_name: builder.index_name,
                refresh_on_write: builder.refresh_on_write,
            },
        })
    }
}
