mod search_server;

pub use search_server::{build_change_source, run_search_server};
