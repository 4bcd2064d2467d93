// crates/post-search/src/utils/change_source_stub.rs

use std::collections::VecDeque;
use std::sync::Mutex;
use async_trait::async_trait;
use shared_kernel::errors::Result;

use crate::application::ports::{ChangeSource, InboundChange};

/// Livre une liste scriptée puis signale l'arrêt (`None`). Garde les acks.
#[derive(Default)]
pub struct ChangeSourceStub {
    pub deliveries: Mutex<VecDeque<Result<InboundChange>>>,
    pub acks: Mutex<Vec<InboundChange>>,
}

impl ChangeSourceStub {
    pub fn new(deliveries: Vec<Result<InboundChange>>) -> Self {
        Self { deliveries: Mutex::new(deliveries.into()), acks: Mutex::new(Vec::new()) }
    }

    pub fn acknowledged(&self) -> Vec<InboundChange> {
        self.acks.lock().unwrap().clone()
    }

    pub fn remaining(&self) -> usize {
        self.deliveries.lock().unwrap().len()
    }
}

#[async_trait]
impl ChangeSource for ChangeSourceStub {
    async fn next_change(&self) -> Option<Result<InboundChange>> {
        self.deliveries.lock().unwrap().pop_front()
    }

    async fn acknowledge(&self, change: &InboundChange) -> Result<()> {
        self.acks.lock().unwrap().push(change.clone());
        Ok(())
    }

    fn name(&self) -> &'static str {
        "stub"
    }
}
