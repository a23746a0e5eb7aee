use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::LineItem;
use crate::types::{AuthorizationId, Msisdn, TransactionId};

/// The structured receipt record produced once per completed purchase.
///
/// Immutable after creation; persisted by appending to the receipt store,
/// never updated or deleted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransactionReceipt {
    pub transaction_id: TransactionId,
    /// Total charge across all items.
    pub amount: Decimal,
    pub customer_phone: Msisdn,
    pub items: Vec<LineItem>,
    /// Creation instant, serialized as ISO-8601.
    pub timestamp: DateTime<Utc>,
    pub payment_method: String,
    pub cashback_earned: Decimal,
    pub loyalty_points: u64,
    pub authorization_id: AuthorizationId,
    pub offer: Option<String>
}
