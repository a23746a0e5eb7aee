mod ids;
mod message;
mod offers;
#[cfg(test)]
mod tests;

use std::str::FromStr;

use chrono::{DateTime, Utc};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use tracing::debug;

use crate::models::{LineItem, Purchase, ReceiptError, TransactionReceipt};
use crate::types::Msisdn;

/// Tunable rates and contact details for receipt generation.
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    /// Cashback as a fraction of the purchase total.
    pub cashback_rate: Decimal,
    /// OneCard points earned per rand spent.
    pub points_multiplier: Decimal,
    /// Totals above this qualify for the high-value offer.
    pub high_value_threshold: Decimal,
    pub support_phone: String,
    pub support_email: String
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            cashback_rate: Decimal::new(15, 3),
            points_multiplier: Decimal::from(2),
            high_value_threshold: Decimal::from(500),
            support_phone: "27100200300".to_string(),
            support_email: "support@divinemobile.co.za".to_string()
        }
    }
}

/// Assembles [`TransactionReceipt`] records and their delivery artifacts.
///
/// Generation is synchronous, single-attempt and best-effort: nothing here
/// is retried, and apart from the random ID suffixes and offer pick the
/// output is fully determined by the input purchase.
pub struct ReceiptGenerator {
    config: GeneratorConfig
}

impl ReceiptGenerator {
    pub fn new(config: GeneratorConfig) -> Self {
        Self { config }
    }

    pub fn with_defaults() -> Self {
        Self::new(GeneratorConfig::default())
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Builds the structured receipt record for a completed purchase.
    ///
    /// # Errors
    /// Returns `ReceiptError` if the purchase has no items or the customer
    /// phone is not a valid SA mobile number. Malformed item prices never
    /// fail generation; they were already coerced to zero on the way in.
    pub fn generate(&self, purchase: &Purchase) -> Result<TransactionReceipt, ReceiptError> {
        self.generate_at(purchase, Utc::now())
    }

    /// Timestamp-parameterized variant of [`ReceiptGenerator::generate`].
    pub fn generate_at(&self, purchase: &Purchase, now: DateTime<Utc>) -> Result<TransactionReceipt, ReceiptError> {
        if purchase.items.is_empty() {
            return Err(ReceiptError::empty_items(purchase));
        }

        let customer_phone = Msisdn::from_str(&purchase.customer_phone)
            .map_err(|source| ReceiptError::invalid_phone(purchase, source))?;

        let total = compute_total(&purchase.items);
        let cashback_earned = (total * self.config.cashback_rate).round_dp(2);
        let loyalty_points = (total * self.config.points_multiplier)
            .round()
            .to_u64()
            .unwrap_or(0);

        let transaction_id = ids::transaction_id(now);
        let authorization_id = ids::authorization_id(now);
        let offer = offers::select(purchase, total, &self.config);

        debug!("Generated receipt [{transaction_id}] for customer [{customer_phone}]");

        Ok(TransactionReceipt {
            transaction_id,
            amount: total,
            customer_phone,
            items: purchase.items.clone(),
            timestamp: now,
            payment_method: purchase.payment_method.clone(),
            cashback_earned,
            loyalty_points,
            authorization_id,
            offer: Some(offer)
        })
    }

    /// Renders the WhatsApp-style text artifact for a receipt.
    pub fn render_message(&self, receipt: &TransactionReceipt) -> String {
        message::render(receipt, &self.config)
    }
}

/// Sums `price x quantity` across all items. Malformed prices and
/// quantities were coerced at deserialization, so this is a plain fold.
pub fn compute_total(items: &[LineItem]) -> Decimal {
    items.iter().map(LineItem::line_total).sum()
}
