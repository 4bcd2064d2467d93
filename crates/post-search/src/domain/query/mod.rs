mod engine_query;
mod post_field;
mod query_expr;
mod search_request;

pub use engine_query::{EngineQuery, SortClause, SortDirection, SortKey};
pub use post_field::PostField;
pub use query_expr::{BoolQuery, QueryExpr, TextOperator};
pub use search_request::SearchRequest;
