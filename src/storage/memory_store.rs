use dashmap::DashMap;
use std::sync::Arc;

use crate::models::TransactionReceipt;
use crate::storage::{ReceiptStore, StoreError};
use crate::types::TransactionId;

/// In-memory store keyed by transaction ID, used by the batch pipeline and
/// by tests.
pub struct MemoryStore {
    cache: Arc<DashMap<TransactionId, TransactionReceipt>>
}

impl MemoryStore {
    pub fn new() -> Self {
        Self {
            cache: Arc::new(DashMap::new())
        }
    }

    pub fn len(&self) -> usize {
        self.cache.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cache.is_empty()
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ReceiptStore for MemoryStore {
    fn append(&self, receipt: TransactionReceipt) -> Result<(), StoreError> {
        self.cache.insert(receipt.transaction_id.clone(), receipt);

        Ok(())
    }

    fn load_all(&self) -> Result<Vec<TransactionReceipt>, StoreError> {
        let mut receipts: Vec<_> = self.cache.iter().map(|item| item.value().clone()).collect();
        receipts.sort_by(|a, b| {
            a.timestamp
                .cmp(&b.timestamp)
                .then_with(|| a.transaction_id.cmp(&b.transaction_id))
        });

        Ok(receipts)
    }
}
