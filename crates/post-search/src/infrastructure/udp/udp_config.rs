// crates/post-search/src/infrastructure/udp/udp_config.rs

use shared_kernel::errors::{AppError, AppResult, ErrorCode};
use shared_kernel::infrastructure::env;
use std::net::SocketAddr;

#[derive(Debug, Clone, PartialEq)]
pub struct UdpConfig {
    pub listen_addr: SocketAddr,
    /// Pair contacté au démarrage (ack "hello")
    pub captain: Option<SocketAddr>,
}

impl UdpConfig {
    pub fn from_env() -> AppResult<Self> {
        let listen_addr = parse_addr("P2P_LISTEN_ADDR", &env::or_default("P2P_LISTEN_ADDR", "0.0.0.0:7000"))?;
        let captain = match env::or_default("BOOTSTRAP_P2P_CAPTAIN", "") {
            raw if raw.trim().is_empty() => None,
            raw => Some(parse_addr("BOOTSTRAP_P2P_CAPTAIN", &raw)?),
        };
        Ok(Self { listen_addr, captain })
    }
}

fn parse_addr(key: &str, raw: &str) -> AppResult<SocketAddr> {
    raw.trim().parse().map_err(|e| {
        AppError::new(ErrorCode::SetupFailed, format!("{key}='{raw}' is not a socket address: {e}"))
    })
}
