// crates/post-search/src/domain/value_objects/mod.rs

mod change_action;
mod geo_radius;
mod no_price_filter;
mod post_id;
mod price_range;
mod search_mode;
mod sort_by;

pub use change_action::ChangeAction;
pub use geo_radius::GeoRadius;
pub use no_price_filter::NoPriceFilter;
pub use post_id::PostId;
pub use price_range::PriceRange;
pub use search_mode::SearchMode;
pub use sort_by::SortBy;
