// crates/post-search/src/application/search_posts/search_posts_use_case.rs

use crate::application::compile_query::QueryCompiler;
use crate::domain::entities::PostInfo;
use crate::domain::query::SearchRequest;
use crate::domain::repositories::PostIndex;
use shared_kernel::errors::Result;
use std::sync::Arc;

pub struct SearchPostsUseCase {
    index: Arc<dyn PostIndex>,
}

impl SearchPostsUseCase {
    pub fn new(index: Arc<dyn PostIndex>) -> Self {
        Self { index }
    }

    /// Résultats rendus tels quels : ni re-tri ni post-filtrage
    pub async fn execute(&self, request: SearchRequest) -> Result<Vec<PostInfo>> {
        let query = QueryCompiler::compile(&request);
        self.index.search(&query).await
    }
}
