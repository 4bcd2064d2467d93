// crates/post-search/tests/infrastructure/elasticsearch_post_index_it.rs

use post_search::application::compile_query::QueryCompiler;
use post_search::domain::entities::PostInfo;
use post_search::domain::query::SearchRequest;
use post_search::domain::repositories::PostIndex;
use post_search::domain::value_objects::{PostId, PriceRange};
use post_search::infrastructure::elasticsearch::ElasticsearchPostIndex;
use serde_json::{Value, json};
use shared_kernel::errors::DomainError;
use shared_kernel::infrastructure::elasticsearch::ElasticContext;
use wiremock::matchers::{body_partial_json, method, path, query_param};
use wiremock::{Mock, ResponseTemplate};

use crate::common::{elastic_response, setup_elastic_mock};

fn a1() -> PostId {
    PostId::try_new("a1").unwrap()
}

#[tokio::test]
async fn test_ensure_index_creates_missing_index_with_mapping() {
    // Arrange
    let es = setup_elastic_mock(false).await;
    Mock::given(method("HEAD")).and(path("/posts"))
        .respond_with(ResponseTemplate::new(404))
        .expect(1)
        .mount(&es.server)
        .await;
    Mock::given(method("PUT")).and(path("/posts"))
        .respond_with(elastic_response(200, json!({ "acknowledged": true, "index": "posts" })))
        .expect(1)
        .mount(&es.server)
        .await;

    // Act
    let result = es.index.ensure_index_ready().await;

    // Assert
    assert!(result.is_ok(), "{:?}", result);
    let requests = es.server.received_requests().await.unwrap();
    let create = requests.iter().find(|r| r.method.as_str() == "PUT").unwrap();
    let body: Value = serde_json::from_slice(&create.body).unwrap();
    let properties = &body["mappings"]["properties"];
    assert_eq!(properties["location"]["type"], "geo_point");
    assert_eq!(properties["images"]["index"], false);
    assert_eq!(properties["updated_at"]["format"], "epoch_second");
}

#[tokio::test]
async fn test_ensure_index_skips_creation_when_present() {
    let es = setup_elastic_mock(false).await;
    Mock::given(method("HEAD")).and(path("/posts"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&es.server)
        .await;
    Mock::given(method("PUT")).and(path("/posts"))
        .respond_with(elastic_response(200, json!({ "acknowledged": true })))
        .expect(0)
        .mount(&es.server)
        .await;

    assert!(es.index.ensure_index_ready().await.is_ok());
}

#[tokio::test]
async fn test_ensure_index_tolerates_racing_creation() {
    // Arrange : une autre instance a créé l'index entre HEAD et PUT
    let es = setup_elastic_mock(false).await;
    Mock::given(method("HEAD")).and(path("/posts"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&es.server)
        .await;
    Mock::given(method("PUT")).and(path("/posts"))
        .respond_with(elastic_response(400, json!({
            "error": { "type": "resource_already_exists_exception", "reason": "index [posts] already exists" },
            "status": 400
        })))
        .mount(&es.server)
        .await;

    // Act + Assert
    assert!(es.index.ensure_index_ready().await.is_ok());
}

#[tokio::test]
async fn test_ensure_index_other_failure_is_fatal() {
    let es = setup_elastic_mock(false).await;
    Mock::given(method("HEAD")).and(path("/posts"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&es.server)
        .await;
    Mock::given(method("PUT")).and(path("/posts"))
        .respond_with(elastic_response(500, json!({ "error": { "type": "cluster_block_exception" } })))
        .mount(&es.server)
        .await;

    let result = es.index.ensure_index_ready().await;

    assert!(matches!(result, Err(DomainError::SetupFatal(ref msg)) if msg.contains("cluster_block_exception")));
}

#[tokio::test]
async fn test_upsert_puts_whole_document_under_its_key() {
    // Arrange
    let es = setup_elastic_mock(true).await;
    Mock::given(method("PUT"))
        .and(path("/posts/_doc/a1"))
        .and(query_param("refresh", "wait_for"))
        .and(body_partial_json(json!({ "title": "red bike", "currency": 1, "location": { "lat": 0.0, "lon": 0.0 } })))
        .respond_with(elastic_response(201, json!({ "_id": "a1", "result": "created" })))
        .expect(1)
        .mount(&es.server)
        .await;
    let info = PostInfo::new("red bike", "").with_price(50.0, 1).with_uuid("a1");

    // Act
    let result = es.index.upsert(&a1(), &info).await;

    // Assert
    assert!(result.is_ok(), "{:?}", result);
}

#[tokio::test]
async fn test_upsert_accepts_any_success_status() {
    let es = setup_elastic_mock(false).await;
    Mock::given(method("PUT")).and(path("/posts/_doc/a1"))
        .respond_with(elastic_response(200, json!({ "_id": "a1", "result": "updated" })))
        .mount(&es.server)
        .await;

    assert!(es.index.upsert(&a1(), &PostInfo::new("red bike", "")).await.is_ok());
}

#[tokio::test]
async fn test_upsert_rejection_keeps_status_and_body() {
    let es = setup_elastic_mock(false).await;
    Mock::given(method("PUT")).and(path("/posts/_doc/a1"))
        .respond_with(elastic_response(400, json!({ "error": { "type": "mapper_parsing_exception" } })))
        .mount(&es.server)
        .await;

    let result = es.index.upsert(&a1(), &PostInfo::new("red bike", "")).await;

    match result {
        Err(DomainError::Rejected { status, body }) => {
            assert_eq!(status, 400);
            assert!(body.contains("mapper_parsing_exception"));
        }
        other => panic!("expected a rejection, got {:?}", other),
    }
}

#[tokio::test]
async fn test_delete_of_absent_document_succeeds() {
    let es = setup_elastic_mock(false).await;
    Mock::given(method("DELETE")).and(path("/posts/_doc/a1"))
        .respond_with(elastic_response(404, json!({ "_id": "a1", "result": "not_found" })))
        .expect(1)
        .mount(&es.server)
        .await;

    assert!(es.index.delete(&a1()).await.is_ok());
}

#[tokio::test]
async fn test_delete_server_error_is_rejected() {
    let es = setup_elastic_mock(false).await;
    Mock::given(method("DELETE")).and(path("/posts/_doc/a1"))
        .respond_with(elastic_response(503, json!({ "error": "unavailable_shards_exception" })))
        .mount(&es.server)
        .await;

    let result = es.index.delete(&a1()).await;

    assert!(matches!(result, Err(DomainError::Rejected { status: 503, .. })));
}

#[tokio::test]
async fn test_find_by_id() {
    let es = setup_elastic_mock(false).await;
    Mock::given(method("GET")).and(path("/posts/_doc/a1"))
        .respond_with(elastic_response(200, json!({
            "_index": "posts",
            "_id": "a1",
            "found": true,
            "_source": { "uuid": "a1", "title": "red bike", "content": "", "currency": "1", "price": 50.0 }
        })))
        .mount(&es.server)
        .await;
    Mock::given(method("GET")).and(path("/posts/_doc/zz"))
        .respond_with(elastic_response(404, json!({ "_index": "posts", "_id": "zz", "found": false })))
        .mount(&es.server)
        .await;

    let found = es.index.find_by_id(&a1()).await.unwrap().expect("a1 should exist");
    let missing = es.index.find_by_id(&PostId::try_new("zz").unwrap()).await.unwrap();

    assert_eq!(found.title, "red bike");
    assert_eq!(found.currency, 1);
    assert!(missing.is_none());
}

#[tokio::test]
async fn test_search_sends_compiled_query_and_keeps_engine_order() {
    // Arrange
    let es = setup_elastic_mock(false).await;
    let request = SearchRequest::advanced("bike").with_price_range(PriceRange::try_new(10.0, 100.0).unwrap());
    Mock::given(method("POST"))
        .and(path("/posts/_search"))
        .and(body_partial_json(json!({
            "from": 0,
            "size": 10,
            "query": { "bool": { "minimum_should_match": 1 } }
        })))
        .respond_with(elastic_response(200, json!({
            "took": 3,
            "hits": {
                "total": { "value": 2, "relation": "eq" },
                "hits": [
                    { "_id": "b2", "_score": 2.0, "_source": { "uuid": "b2", "title": "bike", "currency": 0 } },
                    { "_id": "a1", "_score": 1.0, "_source": { "uuid": "a1", "title": "red bike", "price": 50.0, "currency": 1 } }
                ]
            }
        })))
        .expect(1)
        .mount(&es.server)
        .await;

    // Act
    let found = es.index.search(&QueryCompiler::compile(&request)).await.unwrap();

    // Assert
    let uuids: Vec<&str> = found.iter().map(|p| p.uuid.as_str()).collect();
    assert_eq!(uuids, vec!["b2", "a1"]);
}

#[tokio::test]
async fn test_unreachable_engine_is_unavailable() {
    // Arrange : rien n'écoute sur ce port
    let ctx = ElasticContext::builder_raw().with_url("http://127.0.0.1:1").build().unwrap();
    let index = ElasticsearchPostIndex::new(&ctx);

    // Act
    let search = index.search(&QueryCompiler::compile(&SearchRequest::basic("red"))).await;
    let upsert = index.upsert(&a1(), &PostInfo::new("red bike", "")).await;
    let setup = index.ensure_index_ready().await;

    // Assert
    assert!(matches!(search, Err(DomainError::Unavailable(_))));
    assert!(matches!(upsert, Err(DomainError::Unavailable(_))));
    assert!(matches!(setup, Err(DomainError::SetupFatal(_))));
}
