// crates/post-search/src/infrastructure/elasticsearch/elasticsearch_post_index.rs

use crate::domain::entities::PostInfo;
use crate::domain::query::EngineQuery;
use crate::domain::repositories::PostIndex;
use crate::domain::value_objects::PostId;
use crate::infrastructure::elasticsearch::{ElasticQueryMapper, PostGetResponse, PostSearchResponse, post_index_mapping};
use async_trait::async_trait;
use elasticsearch::http::response::Response;
use elasticsearch::indices::{IndicesCreateParts, IndicesExistsParts};
use elasticsearch::params::Refresh;
use elasticsearch::{DeleteParts, Elasticsearch, GetParts, IndexParts, SearchParts};
use shared_kernel::errors::{DomainError, Result};
use shared_kernel::infrastructure::elasticsearch::ElasticContext;

const ALREADY_EXISTS: &str = "resource_already_exists_exception";

pub struct ElasticsearchPostIndex {
    client: Elasticsearch,
    index_name: String,
    refresh_on_write: bool,
}

impl ElasticsearchPostIndex {
    pub fn new(ctx: &ElasticContext) -> Self {
        let config = ctx.config();
        Self {
            client: ctx.client(),
            index_name: config.index_name,
            refresh_on_write: config.refresh_on_write,
        }
    }

    fn refresh(&self) -> Refresh {
        if self.refresh_on_write { Refresh::WaitFor } else { Refresh::False }
    }

    async fn create_index(&self) -> Result<()> {
        let response = self
            .client
            .indices()
            .create(IndicesCreateParts::Index(&self.index_name))
            .body(post_index_mapping())
            .send()
            .await
            .map_err(|e| DomainError::SetupFatal(format!("Index creation unreachable: {e}")))?;

        let status = response.status_code();
        if status.is_success() {
            tracing::info!("🗂️ Elasticsearch index '{}' created", self.index_name);
            return Ok(());
        }

        let body = response.text().await.unwrap_or_default();
        // Une autre instance l'a créé entre-temps
        if body.contains(ALREADY_EXISTS) {
            tracing::info!("Elasticsearch index '{}' already created by a peer", self.index_name);
            return Ok(());
        }

        Err(DomainError::SetupFatal(format!(
            "Index '{}' creation failed with status {}: {}",
            self.index_name,
            status.as_u16(),
            body
        )))
    }
}

fn unavailable(e: elasticsearch::Error) -> DomainError {
    DomainError::Unavailable(e.to_string())
}

/// Statut non-succès -> `Rejected`, avec le corps pour le diagnostic
async fn expect_success(response: Response) -> Result<Response> {
    let status = response.status_code();
    if status.is_success() {
        return Ok(response);
    }
    let body = response.text().await.unwrap_or_default();
    Err(DomainError::Rejected { status: status.as_u16(), body })
}

#[async_trait]
impl PostIndex for ElasticsearchPostIndex {
    async fn ensure_index_ready(&self) -> Result<()> {
        let response = self
            .client
            .indices()
            .exists(IndicesExistsParts::Index(&[self.index_name.as_str()]))
            .send()
            .await
            .map_err(|e| DomainError::SetupFatal(format!("Elasticsearch unreachable: {e}")))?;

        match response.status_code().as_u16() {
            200 => {
                tracing::debug!("Elasticsearch index '{}' already present", self.index_name);
                Ok(())
            }
            404 => self.create_index().await,
            status => Err(DomainError::SetupFatal(format!(
                "Index '{}' existence check returned status {}",
                self.index_name, status
            ))),
        }
    }

    async fn upsert(&self, id: &PostId, info: &PostInfo) -> Result<()> {
        let response = self
            .client
            .index(IndexParts::IndexId(&self.index_name, id.as_str()))
            .refresh(self.refresh())
            .body(info)
            .send()
            .await
            .map_err(unavailable)?;

        expect_success(response).await?;
        tracing::debug!(uuid = %id, "📝 Post indexed");
        Ok(())
    }

    async fn delete(&self, id: &PostId) -> Result<()> {
        let response = self
            .client
            .delete(DeleteParts::IndexId(&self.index_name, id.as_str()))
            .refresh(self.refresh())
            .send()
            .await
            .map_err(unavailable)?;

        // Document déjà absent : rien à faire
        if response.status_code().as_u16() == 404 {
            tracing::debug!(uuid = %id, "Post already absent from index");
            return Ok(());
        }

        expect_success(response).await?;
        tracing::debug!(uuid = %id, "🗑️ Post removed from index");
        Ok(())
    }

    async fn find_by_id(&self, id: &PostId) -> Result<Option<PostInfo>> {
        let response = self
            .client
            .get(GetParts::IndexId(&self.index_name, id.as_str()))
            .send()
            .await
            .map_err(unavailable)?;

        if response.status_code().as_u16() == 404 {
            return Ok(None);
        }

        let document: PostGetResponse = expect_success(response)
            .await?
            .json()
            .await
            .map_err(|e| DomainError::Internal(format!("Unreadable document response: {e}")))?;

        Ok(if document.found { document.source } else { None })
    }

    async fn search(&self, query: &EngineQuery) -> Result<Vec<PostInfo>> {
        let body = ElasticQueryMapper::to_search_body(query);

        let response = self
            .client
            .search(SearchParts::Index(&[self.index_name.as_str()]))
            .body(body)
            .send()
            .await
            .map_err(unavailable)?;

        let result: PostSearchResponse = expect_success(response)
            .await?
            .json()
            .await
            .map_err(|e| DomainError::Internal(format!("Unreadable search response: {e}")))?;

        Ok(result.into_posts())
    }
}
