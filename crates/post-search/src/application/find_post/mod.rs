mod find_post_use_case;

pub use find_post_use_case::FindPostUseCase;
