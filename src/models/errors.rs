use crate::models::Purchase;
use crate::storage::StoreError;
use crate::types::MsisdnError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ReceiptError {
    #[error("Purchase for customer [{phone}] has no items")]
    EmptyItems {
        phone: String
    },
    #[error("Invalid customer phone [{phone}]: {source}")]
    InvalidPhone {
        phone: String,
        source: MsisdnError
    },
    #[error("Failed to persist receipt [{transaction_id}]: {source}")]
    Persistence {
        transaction_id: String,
        source: StoreError
    }
}

impl ReceiptError {
    pub fn empty_items(purchase: &Purchase) -> Self {
        Self::EmptyItems {
            phone: purchase.customer_phone.clone()
        }
    }

    pub fn invalid_phone(purchase: &Purchase, source: MsisdnError) -> Self {
        Self::InvalidPhone {
            phone: purchase.customer_phone.clone(),
            source
        }
    }

    pub fn persistence(transaction_id: &str, source: StoreError) -> Self {
        Self::Persistence {
            transaction_id: transaction_id.to_string(),
            source
        }
    }
}
