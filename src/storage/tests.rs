use super::{JsonFileStore, MemoryStore, ReceiptStore};

use anyhow::Result;
use chrono::{TimeZone, Utc};
use rust_decimal::Decimal;
use std::fs;
use std::str::FromStr;
use tempfile::tempdir;

use crate::models::{LineItem, TransactionReceipt};
use crate::types::Msisdn;

fn receipt(transaction_id: &str, minute: u32) -> Result<TransactionReceipt> {
    Ok(TransactionReceipt {
        transaction_id: transaction_id.to_string(),
        amount: Decimal::from(150),
        customer_phone: Msisdn::from_str("0832466539")?,
        items: vec![LineItem {
            network: "MTN".to_string(),
            item_type: "airtime".to_string(),
            amount: "150".to_string(),
            price: Decimal::from(150),
            quantity: 1
        }],
        timestamp: Utc.with_ymd_and_hms(2026, 8, 30, 12, minute, 0).single().expect("valid instant"),
        payment_method: "Card".to_string(),
        cashback_earned: Decimal::from_str("2.25")?,
        loyalty_points: 300,
        authorization_id: "AUTH-1".to_string(),
        offer: None
    })
}

#[test]
fn test_json_store_appends_and_reloads() -> Result<()> {
    let dir = tempdir()?;
    let store = JsonFileStore::new(dir.path().join("receipts.json"));

    store.append(receipt("TXN-1", 0)?)?;
    store.append(receipt("TXN-2", 1)?)?;

    let receipts = store.load_all()?;

    assert_eq!(receipts.len(), 2);
    assert_eq!(receipts[0].transaction_id, "TXN-1");
    assert_eq!(receipts[1].transaction_id, "TXN-2");

    Ok(())
}

#[test]
fn test_json_store_defaults_to_empty_on_missing_file() -> Result<()> {
    let dir = tempdir()?;
    let store = JsonFileStore::new(dir.path().join("missing.json"));

    assert!(store.load_all()?.is_empty());

    Ok(())
}

#[test]
fn test_json_store_defaults_to_empty_on_corrupt_file() -> Result<()> {
    let dir = tempdir()?;
    let path = dir.path().join("receipts.json");
    fs::write(&path, "{not json")?;

    let store = JsonFileStore::new(&path);

    assert!(store.load_all()?.is_empty());

    // The next append starts a fresh list rather than failing.
    store.append(receipt("TXN-1", 0)?)?;

    assert_eq!(store.load_all()?.len(), 1);

    Ok(())
}

#[test]
fn test_memory_store_orders_by_timestamp() -> Result<()> {
    let store = MemoryStore::new();

    store.append(receipt("TXN-late", 5)?)?;
    store.append(receipt("TXN-early", 1)?)?;

    let receipts = store.load_all()?;

    assert_eq!(receipts[0].transaction_id, "TXN-early");
    assert_eq!(receipts[1].transaction_id, "TXN-late");
    assert_eq!(store.len(), 2);

    Ok(())
}
