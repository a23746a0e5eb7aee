use std::fmt::Write;

use crate::generator::GeneratorConfig;
use crate::models::TransactionReceipt;

const BRAND: &str = "DIVINE MOBILE";
const DATE_FORMAT: &str = "%Y-%m-%d %H:%M";

/// Renders the text-message artifact: a fixed multi-section layout filled
/// in by plain substitution. Deterministic given the receipt.
pub fn render(receipt: &TransactionReceipt, config: &GeneratorConfig) -> String {
    let mut out = String::new();

    // Writing into a String cannot fail; the results are ignored wholesale.
    let _ = writeln!(out, "*{BRAND}* - Official Receipt");
    let _ = writeln!(out, "================================");
    let _ = writeln!(out);
    let _ = writeln!(out, "Transaction: {}", receipt.transaction_id);
    let _ = writeln!(out, "Date: {} UTC", receipt.timestamp.format(DATE_FORMAT));
    let _ = writeln!(out, "Payment: {}", receipt.payment_method);
    let _ = writeln!(out, "Authorization: {}", receipt.authorization_id);
    let _ = writeln!(out);
    let _ = writeln!(out, "Items:");

    for item in &receipt.items {
        let _ = writeln!(
            out,
            "  {} {} {} x{} - R{:.2}",
            item.network,
            item.item_type,
            item.amount,
            item.quantity,
            item.line_total()
        );
    }

    let _ = writeln!(out);
    let _ = writeln!(out, "Total: R{:.2}", receipt.amount);
    let _ = writeln!(out, "Cashback earned: R{:.2}", receipt.cashback_earned);
    let _ = writeln!(out, "OneCard points: {}", receipt.loyalty_points);
    let _ = writeln!(out);
    let _ = writeln!(out, "Customer: +{}", receipt.customer_phone);

    if let Some(offer) = &receipt.offer {
        let _ = writeln!(out);
        let _ = writeln!(out, "* {offer}");
    }

    let _ = writeln!(out);
    let _ = writeln!(out, "Need help? WhatsApp +{}", config.support_phone);
    let _ = writeln!(out, "{}", config.support_email);
    let _ = writeln!(out, "Thank you for choosing {BRAND}!");

    out
}
