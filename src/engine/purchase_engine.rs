use csv::{ReaderBuilder, Trim};
use futures::future::join_all;
use std::collections::HashMap;
use std::fs::File;
use std::io::BufReader;
use std::sync::Arc;
use tokio::sync::mpsc;
use tokio::task::{spawn_blocking, JoinHandle};
use tracing::error;

use crate::actors::CustomerActor;
use crate::generator::ReceiptGenerator;
use crate::models::{Purchase, PurchaseRecord};
use crate::storage::ReceiptStore;

/// Batch receipt pipeline: streams purchase rows out of a CSV file and
/// fans them out to one actor per customer, so receipts for a given
/// customer are generated in file order.
pub struct PurchaseEngine<S: ReceiptStore> {
    store: Arc<S>,
    generator: Arc<ReceiptGenerator>,
    backpressure: usize
}

impl<S: ReceiptStore> PurchaseEngine<S> {
    pub fn new(store: Arc<S>, generator: ReceiptGenerator) -> Self {
        Self {
            store,
            generator: Arc::new(generator),
            backpressure: 256
        }
    }

    /// Orchestrates the end-to-end pipeline for one input file.
    pub async fn run(&self, path: &str) -> anyhow::Result<()> {
        let (sender, receiver) = mpsc::channel::<Purchase>(self.backpressure);
        let csv_handle = self.spawn_csv_reader(path.to_string(), sender);
        let processing_result = self.process_purchases(receiver).await;

        if let Err(error) = csv_handle.await {
            error!("CSV ingestion failed: {error}");
        }

        processing_result
    }

    fn spawn_csv_reader(&self, path: String, sender: mpsc::Sender<Purchase>) -> JoinHandle<()> {
        spawn_blocking(move || {
            let file = match File::open(&path) {
                Ok(file) => file,
                Err(error) => {
                    error!("Error opening CSV at path: {path} | {error}");
                    return;
                }
            };

            let mut reader = ReaderBuilder::new()
                .trim(Trim::All)
                .flexible(true)
                .from_reader(BufReader::new(file));

            for result in reader.deserialize::<PurchaseRecord>() {
                match result {
                    Ok(record) => {
                        if sender.blocking_send(Purchase::from(record)).is_err() {
                            break;
                        }
                    }
                    Err(error) => {
                        error!("CSV deserialization error: {error}");
                    }
                }
            }
        })
    }

    async fn process_purchases(&self, mut receiver: mpsc::Receiver<Purchase>) -> anyhow::Result<()> {
        let mut actors = HashMap::<String, CustomerActor>::new();

        // Partitioning by customer phone keeps strict per-customer ordering.
        while let Some(purchase) = receiver.recv().await {
            let actor = actors.entry(purchase.customer_phone.clone()).or_insert_with(|| {
                CustomerActor::new(purchase.customer_phone.clone(), self.store.clone(), self.generator.clone())
            });

            if !actor.accept(purchase) {
                error!("A customer actor could not accept a purchase");
            }
        }

        // Graceful shutdown: wait for every actor to drain its queue.
        let despawns = actors.into_values().map(CustomerActor::despawn);

        for result in join_all(despawns).await {
            if let Err(error) = result {
                error!("A customer actor did not despawn gracefully: {error:?}");
            }
        }

        Ok(())
    }
}
