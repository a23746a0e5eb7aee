use chrono::{DateTime, Utc};
use rand::Rng;

const TRANSACTION_PREFIX: &str = "TXN";
const AUTHORIZATION_PREFIX: &str = "AUTH";
const SUFFIX_DIGITS: u32 = 6;

/// Generates a `TXN-<base36 millis>-<base36 suffix>` identifier.
///
/// IDs are locally unique with high probability but not guaranteed unique:
/// there is no central allocator and no collision check, which is acceptable
/// for a client-side record rather than a ledger of record.
pub fn transaction_id(now: DateTime<Utc>) -> String {
    tagged_id(TRANSACTION_PREFIX, now)
}

pub fn authorization_id(now: DateTime<Utc>) -> String {
    tagged_id(AUTHORIZATION_PREFIX, now)
}

fn tagged_id(prefix: &str, now: DateTime<Utc>) -> String {
    let millis = now.timestamp_millis().max(0) as u64;
    let suffix = rand::rng().random_range(0..36u64.pow(SUFFIX_DIGITS));

    format!("{}-{}-{}", prefix, base36(millis), base36(suffix))
}

fn base36(mut value: u64) -> String {
    const ALPHABET: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";

    if value == 0 {
        return "0".to_string();
    }

    let mut digits = Vec::new();

    while value > 0 {
        digits.push(ALPHABET[(value % 36) as usize]);
        value /= 36;
    }

    digits.reverse();

    // Safe: the alphabet is pure ASCII.
    String::from_utf8(digits).unwrap_or_default()
}
