// crates/post-search/src/infrastructure/elasticsearch/post_search_response.rs

use crate::domain::entities::PostInfo;
use serde::Deserialize;

/// Sous-ensemble utile de la réponse `_search`
#[derive(Debug, Deserialize)]
pub struct PostSearchResponse {
    pub hits: PostSearchHits,
}

#[derive(Debug, Deserialize)]
pub struct PostSearchHits {
    #[serde(default)]
    pub hits: Vec<PostSearchHit>,
}

#[derive(Debug, Deserialize)]
pub struct PostSearchHit {
    #[serde(rename = "_source")]
    pub source: PostInfo,
}

/// Réponse `GET /{index}/_doc/{id}`
#[derive(Debug, Deserialize)]
pub struct PostGetResponse {
    pub found: bool,
    #[serde(rename = "_source")]
    pub source: Option<PostInfo>,
}

impl PostSearchResponse {
    pub fn into_posts(self) -> Vec<PostInfo> {
        self.hits.hits.into_iter().map(|hit| hit.source).collect()
    }
}
