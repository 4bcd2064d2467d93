mod api_error;
mod search_handler;
mod search_request_dto;
mod search_router;

pub use api_error::ApiError;
pub use search_handler::{SearchState, find_post, hello, search_posts};
pub use search_request_dto::{LocationDto, NoPriceDto, PriceRangeDto, SearchRequestDto, SearchResponseDto};
pub use search_router::search_router;
