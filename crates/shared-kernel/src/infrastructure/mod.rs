// crates/shared-kernel/src/infrastructure/mod.rs

#[cfg(feature = "kafka")]
pub mod kafka;

#[cfg(feature = "elasticsearch")]
pub mod elasticsearch;

pub mod env;
