use super::{compute_total, offers, GeneratorConfig, ReceiptGenerator};

use anyhow::Result;
use chrono::{TimeZone, Utc};
use rust_decimal::Decimal;
use std::str::FromStr;

use crate::models::{CustomerKind, LineItem, Purchase, ReceiptError};

fn airtime_item(price: &str, quantity: u32) -> LineItem {
    LineItem {
        network: "MTN".to_string(),
        item_type: "airtime".to_string(),
        amount: price.to_string(),
        price: Decimal::from_str(price).unwrap_or_default(),
        quantity
    }
}

fn purchase(items: Vec<LineItem>) -> Purchase {
    Purchase {
        customer_phone: "832466539".to_string(),
        customer_kind: CustomerKind::Regular,
        payment_method: "Card".to_string(),
        items,
        offer: None
    }
}

#[test]
fn test_compute_total_sums_price_times_quantity() {
    // The "bad" price arrives already coerced to zero by deserialization.
    let items = vec![airtime_item("10", 2), airtime_item("bad", 1)];

    assert_eq!(compute_total(&items), Decimal::from(20));
}

#[test]
fn test_generate_end_to_end_scenario() -> Result<()> {
    let generator = ReceiptGenerator::with_defaults();
    let receipt = generator.generate(&purchase(vec![airtime_item("150", 1)]))?;

    assert_eq!(receipt.customer_phone.as_str(), "27832466539");
    assert_eq!(receipt.amount, Decimal::from(150));
    assert_eq!(receipt.cashback_earned, Decimal::from_str("2.25")?);
    assert_eq!(receipt.loyalty_points, 300);
    assert!(receipt.transaction_id.starts_with("TXN-"));
    assert!(receipt.authorization_id.starts_with("AUTH-"));
    assert!(receipt.offer.is_some());

    Ok(())
}

#[test]
fn test_generate_rejects_empty_item_list() {
    let generator = ReceiptGenerator::with_defaults();
    let result = generator.generate(&purchase(vec![]));

    assert!(matches!(result, Err(ReceiptError::EmptyItems { .. })));
}

#[test]
fn test_generate_rejects_invalid_phone() {
    let generator = ReceiptGenerator::with_defaults();
    let mut invalid = purchase(vec![airtime_item("10", 1)]);
    invalid.customer_phone = "12345".to_string();

    let result = generator.generate(&invalid);

    assert!(matches!(result, Err(ReceiptError::InvalidPhone { .. })));
}

#[test]
fn test_messages_for_identical_input_differ_only_in_ids() -> Result<()> {
    let generator = ReceiptGenerator::with_defaults();
    let input = {
        let mut p = purchase(vec![airtime_item("150", 1)]);
        // Pin the offer so the random fallback cannot differ between runs.
        p.offer = Some("Loyal customer special".to_string());
        p
    };

    let now = Utc.with_ymd_and_hms(2026, 8, 30, 12, 0, 0).single().expect("valid instant");
    let first = generator.generate_at(&input, now)?;
    let second = generator.generate_at(&input, now)?;

    let scrub = |receipt: &crate::models::TransactionReceipt| {
        generator
            .render_message(receipt)
            .replace(&receipt.transaction_id, "<TXN>")
            .replace(&receipt.authorization_id, "<AUTH>")
    };

    assert_ne!(first.transaction_id, second.transaction_id);
    assert_eq!(scrub(&first), scrub(&second));

    Ok(())
}

#[test]
fn test_caller_offer_is_used_verbatim() -> Result<()> {
    let generator = ReceiptGenerator::with_defaults();
    let mut input = purchase(vec![airtime_item("10", 1)]);
    input.offer = Some("Custom deal".to_string());

    let receipt = generator.generate(&input)?;

    assert_eq!(receipt.offer.as_deref(), Some("Custom deal"));

    Ok(())
}

#[test]
fn test_vendor_offer_takes_precedence_over_high_value() -> Result<()> {
    let generator = ReceiptGenerator::with_defaults();
    let mut input = purchase(vec![airtime_item("1000", 1)]);
    input.customer_kind = CustomerKind::Vendor;

    let receipt = generator.generate(&input)?;

    assert_eq!(receipt.offer.as_deref(), Some(offers::VENDOR));

    Ok(())
}

#[test]
fn test_high_value_purchase_gets_high_value_offer() -> Result<()> {
    let generator = ReceiptGenerator::with_defaults();
    let receipt = generator.generate(&purchase(vec![airtime_item("501", 1)]))?;

    assert_eq!(receipt.offer.as_deref(), Some(offers::HIGH_VALUE));

    Ok(())
}

#[test]
fn test_regular_purchase_falls_back_to_template_offer() -> Result<()> {
    let generator = ReceiptGenerator::with_defaults();
    let receipt = generator.generate(&purchase(vec![airtime_item("50", 1)]))?;

    let offer = receipt.offer.as_deref().unwrap_or_default();

    assert!(offers::is_template(offer), "unexpected offer: {offer}");

    Ok(())
}

#[test]
fn test_message_contains_all_sections() -> Result<()> {
    let config = GeneratorConfig::default();
    let generator = ReceiptGenerator::new(config.clone());
    let receipt = generator.generate(&purchase(vec![airtime_item("150", 2)]))?;
    let message = generator.render_message(&receipt);

    assert!(message.contains("DIVINE MOBILE"));
    assert!(message.contains(&receipt.transaction_id));
    assert!(message.contains("MTN airtime 150 x2 - R300.00"));
    assert!(message.contains("Total: R300.00"));
    assert!(message.contains("Cashback earned: R4.50"));
    assert!(message.contains("OneCard points: 600"));
    assert!(message.contains("Customer: +27832466539"));
    assert!(message.contains(&config.support_email));

    Ok(())
}
