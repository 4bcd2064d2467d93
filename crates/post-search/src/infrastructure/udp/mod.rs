mod sync_message;
mod udp_change_source;
mod udp_config;

pub use sync_message::{SyncMeaning, SyncMessage};
pub use udp_change_source::UdpChangeSource;
pub use udp_config::UdpConfig;
