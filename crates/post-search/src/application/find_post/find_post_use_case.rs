// crates/post-search/src/application/find_post/find_post_use_case.rs

use crate::domain::entities::PostInfo;
use crate::domain::repositories::PostIndex;
use crate::domain::value_objects::PostId;
use shared_kernel::errors::{DomainError, Result};
use std::sync::Arc;

pub struct FindPostUseCase {
    index: Arc<dyn PostIndex>,
}

impl FindPostUseCase {
    pub fn new(index: Arc<dyn PostIndex>) -> Self {
        Self { index }
    }

    pub async fn execute(&self, id: &PostId) -> Result<PostInfo> {
        self.index.find_by_id(id).await?.ok_or_else(|| DomainError::NotFound {
            entity: "Post",
            id: id.to_string(),
        })
    }
}
