use std::collections::HashMap;
use std::fs;
use std::path::Path;
use std::process::Command;

use anyhow::{anyhow, Result};
use tempfile::tempdir;

#[test]
fn test_cli_correctly_processes_sample() -> Result<()> {
    let binary_path = env!("CARGO_BIN_EXE_receipt-engine");
    let sample_path = Path::new("samples").join("sample.csv");

    let output = Command::new(binary_path)
        .arg(sample_path)
        .output()?;

    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout)?;
    let mut lines = stdout.lines();

    assert_eq!(lines.next(), Some("transaction_id,phone,amount,cashback,points"));

    let mut rows = 0;

    for line in lines {
        let fields: Vec<&str> = line.split(',').collect();

        assert_eq!(fields.len(), 5);
        assert!(fields[0].starts_with("TXN-"));

        let _: u64 = fields[1].parse()?;
        let _: f64 = fields[2].parse()?;
        let _: f64 = fields[3].parse()?;
        let _: u64 = fields[4].parse()?;

        rows += 1;
    }

    // Six input rows: the invalid-phone row is dropped, the junk-price row
    // still produces a zero-amount receipt.
    assert_eq!(rows, 5);

    Ok(())
}

#[test]
fn test_cli_outputs_expected_derived_values() -> Result<()> {
    let binary_path = env!("CARGO_BIN_EXE_receipt-engine");
    let fixture_path = Path::new("samples").join("fixed.csv");

    let output = Command::new(binary_path)
        .arg(fixture_path)
        .output()?;

    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout)?;
    let mut results = HashMap::new();

    for line in stdout.lines().skip(1) {
        let fields: Vec<String> = line.split(',').map(str::to_string).collect();
        results.insert(fields[1].clone(), (fields[2].clone(), fields[3].clone(), fields[4].clone()));
    }

    let airtime_customer = results.get("27832466539").ok_or_else(|| anyhow!("airtime customer missing from output"))?;

    assert_eq!(airtime_customer.0, "150.00");
    assert_eq!(airtime_customer.1, "2.25");
    assert_eq!(airtime_customer.2, "300");

    let data_customer = results.get("27712345678").ok_or_else(|| anyhow!("data customer missing from output"))?;

    assert_eq!(data_customer.0, "100.00");
    assert_eq!(data_customer.1, "1.50");
    assert_eq!(data_customer.2, "200");

    Ok(())
}

#[test]
fn test_cli_persists_receipts_to_json_file() -> Result<()> {
    let binary_path = env!("CARGO_BIN_EXE_receipt-engine");
    let fixture_path = Path::new("samples").join("fixed.csv");
    let dir = tempdir()?;
    let receipts_path = dir.path().join("receipts.json");

    let output = Command::new(binary_path)
        .arg(fixture_path)
        .arg("error")
        .arg(&receipts_path)
        .output()?;

    assert!(output.status.success());

    let raw = fs::read_to_string(&receipts_path)?;
    let receipts: serde_json::Value = serde_json::from_str(&raw)?;
    let list = receipts.as_array().ok_or_else(|| anyhow!("receipts file is not a JSON array"))?;

    assert_eq!(list.len(), 2);

    for receipt in list {
        assert!(receipt["transaction_id"].as_str().unwrap_or_default().starts_with("TXN-"));
        assert!(receipt["timestamp"].as_str().unwrap_or_default().contains('T'));
    }

    Ok(())
}
