// crates/post-search/src/infrastructure/api/http/search_router.rs

use crate::infrastructure::api::http::{SearchState, find_post, hello, search_posts};
use axum::Router;
use axum::routing::{get, post};

pub fn search_router(state: SearchState) -> Router {
    Router::new()
        .route("/search/posts", post(search_posts))
        .route("/search/posts/{uuid}", get(find_post))
        .route("/hello", get(hello))
        .with_state(state)
}
