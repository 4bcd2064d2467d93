// backend/services/post-search/search-server/src/main.rs

use post_search::infrastructure::bootstrap::run_search_server;
use shared_kernel::errors::AppResult;

#[tokio::main]
async fn main() -> AppResult<()> {
    run_search_server().await
}
