use rand::Rng;
use rust_decimal::Decimal;

use crate::generator::GeneratorConfig;
use crate::models::{CustomerKind, Purchase};

const VENDOR_OFFER: &str =
    "Vendor exclusive: earn double commission on all airtime sales this week!";

const HIGH_VALUE_OFFER: &str =
    "Big spender bonus: R50 OFF your next purchase over R500. Auto-applied at checkout!";

const OFFER_TEMPLATES: [&str; 4] = [
    "Get 10% extra airtime on your next MTN recharge!",
    "Double OneCard points on all data bundles this weekend!",
    "Refer a friend and you both get R20 free airtime!",
    "Buy 3 bundles this month and the 4th is on us!",
];

/// Picks the personalized offer for a purchase.
///
/// Ordered checks, first match wins: a caller-supplied offer is used
/// verbatim, then the vendor special case, then the high-value threshold,
/// then a pseudo-random pick from the fixed template set.
pub fn select(purchase: &Purchase, total: Decimal, config: &GeneratorConfig) -> String {
    if let Some(offer) = &purchase.offer {
        return offer.clone();
    }

    if purchase.customer_kind == CustomerKind::Vendor {
        return VENDOR_OFFER.to_string();
    }

    if total > config.high_value_threshold {
        return HIGH_VALUE_OFFER.to_string();
    }

    let index = rand::rng().random_range(0..OFFER_TEMPLATES.len());

    OFFER_TEMPLATES[index].to_string()
}

#[cfg(test)]
pub(crate) fn is_template(offer: &str) -> bool {
    OFFER_TEMPLATES.contains(&offer)
}

#[cfg(test)]
pub(crate) const VENDOR: &str = VENDOR_OFFER;

#[cfg(test)]
pub(crate) const HIGH_VALUE: &str = HIGH_VALUE_OFFER;
