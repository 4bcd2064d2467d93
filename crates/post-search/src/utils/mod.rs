pub mod change_source_stub;
pub mod post_index_stub;

pub use change_source_stub::ChangeSourceStub;
pub use post_index_stub::PostIndexStub;
