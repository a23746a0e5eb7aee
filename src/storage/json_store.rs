use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;
use std::sync::Mutex;

use tracing::warn;

use crate::models::TransactionReceipt;
use crate::storage::{ReceiptStore, StoreError};

/// File-backed store: a single JSON array of receipts at a fixed path.
///
/// Reads parse-or-default to an empty list (a missing or corrupt file is
/// not fatal); writes serialize the whole list and overwrite. The mutex
/// serializes read-modify-write appends within this process; there is no
/// cross-process guarantee and no schema versioning.
pub struct JsonFileStore {
    path: PathBuf,
    write_lock: Mutex<()>
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Mutex::new(())
        }
    }

    fn read_list(&self) -> Result<Vec<TransactionReceipt>, StoreError> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(error) if error.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(error) => return Err(error.into())
        };

        match serde_json::from_str(&raw) {
            Ok(receipts) => Ok(receipts),
            Err(error) => {
                warn!("Receipt list at {} is unreadable, starting empty: {error}", self.path.display());
                Ok(Vec::new())
            }
        }
    }
}

impl ReceiptStore for JsonFileStore {
    fn append(&self, receipt: TransactionReceipt) -> Result<(), StoreError> {
        let guard = self.write_lock.lock();
        let _guard = guard.unwrap_or_else(|poisoned| poisoned.into_inner());

        let mut receipts = self.read_list()?;
        receipts.push(receipt);

        fs::write(&self.path, serde_json::to_vec_pretty(&receipts)?)?;

        Ok(())
    }

    fn load_all(&self) -> Result<Vec<TransactionReceipt>, StoreError> {
        self.read_list()
    }
}
