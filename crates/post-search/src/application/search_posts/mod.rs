mod search_posts_use_case;

pub use search_posts_use_case::SearchPostsUseCase;

#[cfg(test)]
mod search_posts_use_case_test;
