pub mod api;
pub mod bootstrap;
pub mod elasticsearch;
#[cfg(feature = "kafka")]
pub mod kafka;
pub mod udp;
