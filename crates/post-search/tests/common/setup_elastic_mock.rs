// crates/post-search/tests/common/setup_elastic_mock.rs

use post_search::infrastructure::elasticsearch::ElasticsearchPostIndex;
use serde_json::Value;
use shared_kernel::infrastructure::elasticsearch::ElasticContext;
use wiremock::{MockServer, ResponseTemplate};

pub const TEST_INDEX: &str = "posts";

/// Faux Elasticsearch (wiremock) + adaptateur branché dessus
pub struct ElasticMock {
    pub server: MockServer,
    pub index: ElasticsearchPostIndex,
}

pub async fn setup_elastic_mock(refresh_on_write: bool) -> ElasticMock {
    let server = MockServer::start().await;

    let ctx = ElasticContext::builder_raw()
        .with_url(server.uri())
        .with_index(TEST_INDEX)
        .with_refresh_on_write(refresh_on_write)
        .build()
        .expect("Failed to build Elasticsearch context");

    ElasticMock { index: ElasticsearchPostIndex::new(&ctx), server }
}

pub fn elastic_response(status: u16, body: Value) -> ResponseTemplate {
    ResponseTemplate::new(status)
        .insert_header("X-Elastic-Product", "Elasticsearch")
        .set_body_json(body)
}
