pub mod entities;
pub mod query;
pub mod repositories;
pub mod value_objects;
