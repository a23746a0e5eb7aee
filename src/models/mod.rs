mod errors;
mod line_item;
mod purchase;
mod receipt;

use serde::{Deserialize, Serialize};

pub use errors::ReceiptError;
pub use line_item::LineItem;
pub use purchase::{Purchase, PurchaseRecord};
pub use receipt::TransactionReceipt;

#[derive(Debug, Clone, Copy, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CustomerKind {
    #[default]
    Regular,
    Vendor
}
