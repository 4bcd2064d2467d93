mod post_index;

pub use post_index::PostIndex;
