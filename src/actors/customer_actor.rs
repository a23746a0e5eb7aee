use std::sync::Arc;

use tokio::spawn;
use tokio::sync::mpsc;
use tokio::task::{JoinError, JoinHandle};
use tracing::{debug, error, warn};

use crate::generator::ReceiptGenerator;
use crate::models::{Purchase, ReceiptError};
use crate::storage::ReceiptStore;

/// Owns receipt generation for one customer's purchases.
///
/// Purchases are processed strictly in arrival order per customer. Business
/// errors (invalid phone, empty item list) are logged and skipped so one
/// bad purchase never stalls the rest of the stream.
pub struct CustomerActor {
    sender: mpsc::UnboundedSender<Purchase>,
    handle: JoinHandle<()>
}

impl CustomerActor {
    pub fn new<S: ReceiptStore>(phone: String, store: Arc<S>, generator: Arc<ReceiptGenerator>) -> Self {
        let (sender, mut receiver) = mpsc::unbounded_channel::<Purchase>();

        let handle = spawn(async move {
            while let Some(purchase) = receiver.recv().await {
                match generator.generate(&purchase) {
                    Ok(receipt) => {
                        let transaction_id = receipt.transaction_id.clone();

                        match store.append(receipt) {
                            Ok(()) => {
                                debug!("Receipt [{transaction_id}] for customer [{phone}] persisted");
                            }
                            Err(store_error) => {
                                error!("{}", ReceiptError::persistence(&transaction_id, store_error));
                            }
                        }
                    }
                    Err(generation_error) => {
                        warn!("{generation_error}");
                    }
                }
            }
        });

        Self { sender, handle }
    }

    /// Queues a purchase; returns false once the actor has shut down.
    pub fn accept(&self, purchase: Purchase) -> bool {
        self.sender.send(purchase).is_ok()
    }

    /// Closes the input channel and waits for the queue to drain.
    pub async fn despawn(self) -> Result<(), JoinError> {
        drop(self.sender);
        self.handle.await
    }
}
