pub mod compile_query;
pub mod dispatch_change;
pub mod find_post;
pub mod ports;
pub mod search_posts;
pub mod workers;
