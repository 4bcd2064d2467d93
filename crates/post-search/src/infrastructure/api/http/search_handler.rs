// crates/post-search/src/infrastructure/api/http/search_handler.rs

use crate::application::find_post::FindPostUseCase;
use crate::application::search_posts::SearchPostsUseCase;
use crate::domain::entities::PostInfo;
use crate::domain::query::SearchRequest;
use crate::domain::value_objects::PostId;
use crate::infrastructure::api::http::{ApiError, SearchRequestDto, SearchResponseDto};
use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use std::sync::Arc;

#[derive(Clone)]
pub struct SearchState {
    pub search: Arc<SearchPostsUseCase>,
    pub find: Arc<FindPostUseCase>,
}

/// `POST /search/posts`
pub async fn search_posts(
    State(state): State<SearchState>,
    payload: Result<Json<SearchRequestDto>, JsonRejection>,
) -> Result<Json<SearchResponseDto>, ApiError> {
    let Json(dto) = payload?;
    let request = SearchRequest::try_from(dto)?;
    tracing::debug!(mode = ?request.mode, term = %request.term, "🔎 Search request");

    let found = state.search.execute(request).await?;
    Ok(Json(SearchResponseDto { found }))
}

/// `GET /search/posts/{uuid}`
pub async fn find_post(State(state): State<SearchState>, Path(uuid): Path<String>) -> Result<Json<PostInfo>, ApiError> {
    let id = PostId::try_new(uuid)?;
    Ok(Json(state.find.execute(&id).await?))
}

/// `GET /hello`
pub async fn hello() -> &'static str {
    "hello, world"
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::dispatch_change::DispatchChangeUseCase;
    use crate::domain::entities::ChangeMessage;
    use crate::utils::PostIndexStub;
    use axum::http::StatusCode;
    use axum::response::IntoResponse;
    use serde_json::json;
    use shared_kernel::errors::{DomainError, ErrorCode};

    fn state(index: Arc<PostIndexStub>) -> SearchState {
        SearchState {
            search: Arc::new(SearchPostsUseCase::new(index.clone())),
            find: Arc::new(FindPostUseCase::new(index)),
        }
    }

    fn dto(value: serde_json::Value) -> Result<Json<SearchRequestDto>, JsonRejection> {
        Ok(Json(serde_json::from_value(value).unwrap()))
    }

    #[tokio::test]
    async fn test_search_returns_found_documents() {
        // Arrange
        let index = Arc::new(PostIndexStub::default());
        let id = PostId::try_new("a1").unwrap();
        DispatchChangeUseCase::new(index.clone())
            .execute(&ChangeMessage::create(id, PostInfo::new("red bike", "")))
            .await
            .unwrap();

        // Act
        let Json(response) = search_posts(State(state(index)), dto(json!({ "term": "red" }))).await.unwrap();

        // Assert
        let body = serde_json::to_value(&response).unwrap();
        assert_eq!(body["found"][0]["uuid"], "a1");
    }

    #[tokio::test]
    async fn test_both_no_price_flags_is_bad_request() {
        let index = Arc::new(PostIndexStub::default());

        let err = search_posts(State(state(index.clone())), dto(json!({ "no_price": { "only": true, "exclude": true } })))
            .await
            .unwrap_err();

        assert_eq!(err.0.code, ErrorCode::ValidationFailed);
        assert_eq!(err.into_response().status(), StatusCode::BAD_REQUEST);
        assert_eq!(index.total_calls(), 0);
    }

    #[tokio::test]
    async fn test_malformed_body_is_structured_bad_request() {
        let index = Arc::new(PostIndexStub::default());
        let payload = Json::<SearchRequestDto>::from_bytes(br#"{ "term": "red""#);
        assert!(payload.is_err());

        let err = search_posts(State(state(index.clone())), payload).await.unwrap_err();

        assert_eq!(err.0.code, ErrorCode::ValidationFailed);
        assert!(!err.0.message.is_empty());
        assert_eq!(index.total_calls(), 0);

        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(body["code"], serde_json::to_value(ErrorCode::ValidationFailed).unwrap());
    }

    #[tokio::test]
    async fn test_engine_failure_is_server_error() {
        let index = Arc::new(PostIndexStub::default());
        index.fail_with(DomainError::Rejected { status: 500, body: "shard failure".into() });

        let err = search_posts(State(state(index)), dto(json!({ "term": "red" }))).await.unwrap_err();

        assert_eq!(err.into_response().status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[tokio::test]
    async fn test_unknown_post_is_not_found() {
        let index = Arc::new(PostIndexStub::default());

        let err = find_post(State(state(index)), Path("missing".to_string())).await.unwrap_err();

        assert_eq!(err.into_response().status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_hello() {
        assert_eq!(hello().await, "hello, world");
    }
}
