mod elastic_query_mapper;
mod elasticsearch_post_index;
mod post_index_mapping;
mod post_search_response;

pub use elastic_query_mapper::ElasticQueryMapper;
pub use elasticsearch_post_index::ElasticsearchPostIndex;
pub use post_index_mapping::post_index_mapping;
pub use post_search_response::{PostGetResponse, PostSearchHit, PostSearchHits, PostSearchResponse};
