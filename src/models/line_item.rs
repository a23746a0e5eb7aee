use rust_decimal::prelude::FromPrimitive;
use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize};
use std::str::FromStr;

/// A single purchased product line.
///
/// Upstream item data is not trusted: a missing or non-numeric `price`
/// contributes zero and a missing or non-numeric `quantity` counts as one.
/// The coercion happens here, once, at deserialization time, so the rest of
/// the crate only ever sees well-formed values.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LineItem {
    /// Mobile network the product belongs to (MTN, Vodacom, ...).
    pub network: String,
    /// Product category (airtime, data, ...).
    #[serde(rename = "type")]
    pub item_type: String,
    /// Denomination label as captured upstream, kept verbatim for display.
    #[serde(default)]
    pub amount: String,
    #[serde(default, deserialize_with = "coerce_price")]
    pub price: Decimal,
    #[serde(default = "default_quantity", deserialize_with = "coerce_quantity")]
    pub quantity: u32
}

impl LineItem {
    pub fn line_total(&self) -> Decimal {
        self.price * Decimal::from(self.quantity)
    }
}

pub(crate) fn default_quantity() -> u32 {
    1
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawNumber {
    Number(f64),
    Text(String)
}

pub(crate) fn coerce_price<'de, D>(deserializer: D) -> Result<Decimal, D::Error>
where
    D: Deserializer<'de>,
{
    let coerced = match Option::<RawNumber>::deserialize(deserializer)? {
        Some(RawNumber::Number(value)) => Decimal::from_f64(value).unwrap_or_default(),
        Some(RawNumber::Text(value)) => Decimal::from_str(value.trim()).unwrap_or_default(),
        None => Decimal::ZERO
    };

    Ok(coerced)
}

pub(crate) fn coerce_quantity<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    let coerced = match Option::<RawNumber>::deserialize(deserializer)? {
        Some(RawNumber::Number(value)) if value >= 0.0 => value as u32,
        Some(RawNumber::Text(value)) => value.trim().parse().unwrap_or(default_quantity()),
        _ => default_quantity()
    };

    Ok(coerced)
}
