use rust_decimal::Decimal;
use serde::Deserialize;

use crate::models::line_item::{coerce_price, coerce_quantity, default_quantity};
use crate::models::{CustomerKind, LineItem};

/// A completed purchase flow, ready for receipt generation.
#[derive(Debug, Clone)]
pub struct Purchase {
    /// Customer number as captured; normalized during generation.
    pub customer_phone: String,
    pub customer_kind: CustomerKind,
    pub payment_method: String,
    pub items: Vec<LineItem>,
    /// Caller-supplied personalized offer; used verbatim when present.
    pub offer: Option<String>
}

/// Represents a single row from the input CSV file.
///
/// Each row is one purchase carrying one line item; multi-item purchases
/// come in through the library API. `price` and `quantity` go through the
/// same defensive coercion as [`LineItem`].
#[derive(Debug, Clone, Deserialize)]
pub struct PurchaseRecord {
    pub phone: String,
    #[serde(rename = "kind", default)]
    pub customer_kind: CustomerKind,
    #[serde(rename = "payment")]
    pub payment_method: String,
    pub network: String,
    #[serde(rename = "type")]
    pub item_type: String,
    #[serde(default)]
    pub amount: String,
    #[serde(default, deserialize_with = "coerce_price")]
    pub price: Decimal,
    #[serde(default = "default_quantity", deserialize_with = "coerce_quantity")]
    pub quantity: u32,
    #[serde(default)]
    pub offer: Option<String>
}

impl From<PurchaseRecord> for Purchase {
    fn from(record: PurchaseRecord) -> Self {
        Purchase {
            customer_phone: record.phone,
            customer_kind: record.customer_kind,
            payment_method: record.payment_method,
            items: vec![LineItem {
                network: record.network,
                item_type: record.item_type,
                amount: record.amount,
                price: record.price,
                quantity: record.quantity
            }],
            offer: record.offer.filter(|offer| !offer.trim().is_empty())
        }
    }
}
