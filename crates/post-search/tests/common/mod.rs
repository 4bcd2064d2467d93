// crates/post-search/tests/common/mod.rs

mod setup_elastic_mock;

pub use setup_elastic_mock::{ElasticMock, elastic_response, setup_elastic_mock};
