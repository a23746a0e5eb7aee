mod json_store;
mod memory_store;
#[cfg(test)]
mod tests;

use thiserror::Error;

use crate::models::TransactionReceipt;

pub use json_store::JsonFileStore;
pub use memory_store::MemoryStore;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Store error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Store error: {0}")]
    Serialization(#[from] serde_json::Error)
}

/// Append-only receipt persistence. Receipts are never updated or deleted.
pub trait ReceiptStore: Send + Sync + 'static {
    fn append(&self, receipt: TransactionReceipt) -> Result<(), StoreError>;
    fn load_all(&self) -> Result<Vec<TransactionReceipt>, StoreError>;
}
