mod elastic_config;
mod elastic_context;
mod elastic_context_builder;

pub use elastic_config::ElasticConfig;
pub use elastic_context::ElasticContext;
pub use elastic_context_builder::ElasticContextBuilder;
