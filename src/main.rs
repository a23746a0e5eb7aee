use std::io::{stderr, stdout, BufWriter, Write};
use std::process::exit;
use std::sync::Arc;
use std::time::Instant;

use anyhow::Result;
use tracing::info;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, Layer};

use receipt_engine::engine::PurchaseEngine;
use receipt_engine::generator::ReceiptGenerator;
use receipt_engine::models::TransactionReceipt;
use receipt_engine::storage::{JsonFileStore, MemoryStore, ReceiptStore};

#[tokio::main]
async fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        eprintln!("Usage: receipt-engine [purchases].csv [log_level:optional] [receipts.json:optional] > [summary].csv");
        eprintln!("Available log levels: error, warn, info, debug, trace (default: error)");
        exit(1);
    }

    let path = &args[1];
    let log_level = args.get(2)
        .map(|s| parse_log_level(s)).unwrap_or(LevelFilter::ERROR);

    setup_logging(log_level);

    let timer = Instant::now();

    // A receipts.json path switches persistence from in-memory to the
    // file-backed store.
    let receipts = match args.get(3) {
        Some(receipts_path) => {
            let store = Arc::new(JsonFileStore::new(receipts_path.clone()));
            run_pipeline(store, path).await?
        }
        None => {
            let store = Arc::new(MemoryStore::new());
            run_pipeline(store, path).await?
        }
    };

    let duration = timer.elapsed();

    info!("Generated {} receipts in: {duration:?}", receipts.len());

    write_summary_to_stdout(&receipts)?;

    Ok(())
}

async fn run_pipeline<S: ReceiptStore>(store: Arc<S>, path: &str) -> Result<Vec<TransactionReceipt>> {
    let engine = PurchaseEngine::new(store.clone(), ReceiptGenerator::with_defaults());
    engine.run(path).await?;

    Ok(store.load_all()?)
}

fn parse_log_level(level: &str) -> LevelFilter {
    match level.to_lowercase().as_str() {
        "trace" => LevelFilter::TRACE,
        "debug" => LevelFilter::DEBUG,
        "info" => LevelFilter::INFO,
        "warn" => LevelFilter::WARN,
        "error" => LevelFilter::ERROR,
        _ => {
            eprintln!("Invalid log level '{}', defaulting to 'error'", level);
            LevelFilter::ERROR
        }
    }
}

fn setup_logging(level: LevelFilter) {
    // Stdout carries the summary CSV, so logging goes to stderr.
    let terminal_log = fmt::layer()
        .with_target(false)
        .with_writer(stderr)
        .with_filter(level);

    tracing_subscriber::registry()
        .with(terminal_log)
        .init();
}

fn write_summary_to_stdout(receipts: &[TransactionReceipt]) -> Result<()> {
    let mut output = BufWriter::new(stdout().lock());

    writeln!(output, "transaction_id,phone,amount,cashback,points")?;

    for receipt in receipts {
        writeln!(
            output,
            "{},{},{:.2},{:.2},{}",
            receipt.transaction_id,
            receipt.customer_phone,
            receipt.amount,
            receipt.cashback_earned,
            receipt.loyalty_points
        )?;
    }

    output.flush()?;

    Ok(())
}
