// crates/post-search/tests/infrastructure/mod.rs

mod elasticsearch_post_index_it;
mod udp_change_source_it;
