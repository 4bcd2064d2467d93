// crates/post-search/src/infrastructure/udp/sync_message.rs

use serde::{Deserialize, Serialize};

/// Rôle d'un message de synchronisation entre pairs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "i32", into = "i32")]
pub enum SyncMeaning {
    Sync,
    CaptainAck,
    ConsumerAck,
    Other(i32),
}

impl From<i32> for SyncMeaning {
    fn from(code: i32) -> Self {
        match code {
            1 => SyncMeaning::Sync,
            2 => SyncMeaning::CaptainAck,
            3 => SyncMeaning::ConsumerAck,
            other => SyncMeaning::Other(other),
        }
    }
}

impl From<SyncMeaning> for i32 {
    fn from(meaning: SyncMeaning) -> Self {
        match meaning {
            SyncMeaning::Sync => 1,
            SyncMeaning::CaptainAck => 2,
            SyncMeaning::ConsumerAck => 3,
            SyncMeaning::Other(code) => code,
        }
    }
}

/// Enveloppe de contrôle du protocole pair à pair
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SyncMessage {
    pub meaning: SyncMeaning,
    #[serde(default)]
    pub captains: Vec<String>,
    #[serde(default)]
    pub consumers: Vec<String>,
}

impl SyncMessage {
    pub fn consumer_ack() -> Self {
        Self { meaning: SyncMeaning::ConsumerAck, captains: Vec::new(), consumers: Vec::new() }
    }

    pub fn to_bytes(&self) -> Vec<u8> {
        serde_json::to_vec(self).unwrap_or_default()
    }
}
