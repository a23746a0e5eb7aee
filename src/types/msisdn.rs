use crate::types::errors::MsisdnError;
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

const COUNTRY_CODE: &str = "27";
const TRUNK_PREFIX: char = '0';
const SUBSCRIBER_DIGITS: usize = 9;

/// First digit of the subscriber number for the acceptable SA mobile ranges
/// (06x, 07x and 08x).
const MOBILE_PREFIXES: [char; 3] = ['6', '7', '8'];

/// A normalized South African mobile number: `27` followed by exactly nine
/// subscriber digits.
///
/// Construction always goes through normalization, so a held `Msisdn` is
/// valid by definition. Use [`Msisdn::validate`] for the non-raising form
/// check that form components need on every keystroke.
#[derive(Debug, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Msisdn(String);

/// Result of a best-effort phone check. `normalized` is always populated so
/// callers can echo the cleaned-up value back to the user, even when it is
/// not a valid mobile number.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct PhoneValidation {
    pub is_valid: bool,
    pub normalized: String
}

impl Msisdn {
    /// Non-raising validation: strips formatting, applies the trunk/country
    /// prefix rules and reports whether the result is a valid SA mobile
    /// number.
    pub fn validate(input: &str) -> PhoneValidation {
        let normalized = normalize(input);

        PhoneValidation {
            is_valid: check(&normalized).is_ok(),
            normalized
        }
    }

    /// The nine subscriber digits after the country code.
    pub fn subscriber(&self) -> &str {
        &self.0[COUNTRY_CODE.len()..]
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

fn normalize(input: &str) -> String {
    let digits: String = input.chars().filter(char::is_ascii_digit).collect();

    if let Some(rest) = digits.strip_prefix(TRUNK_PREFIX) {
        format!("{COUNTRY_CODE}{rest}")
    } else if digits.starts_with(COUNTRY_CODE) {
        digits
    } else {
        format!("{COUNTRY_CODE}{digits}")
    }
}

fn check(normalized: &str) -> Result<(), MsisdnError> {
    let subscriber = &normalized[COUNTRY_CODE.len()..];

    if subscriber.is_empty() {
        return Err(MsisdnError::Empty);
    }

    if subscriber.len() != SUBSCRIBER_DIGITS {
        return Err(MsisdnError::InvalidLength(subscriber.len()));
    }

    // Safe: the subscriber part is non-empty at this point.
    let first = subscriber.chars().next().unwrap_or_default();

    if !MOBILE_PREFIXES.contains(&first) {
        return Err(MsisdnError::InvalidPrefix(first));
    }

    Ok(())
}

impl Display for Msisdn {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        write!(formatter, "{}", self.0)
    }
}

impl FromStr for Msisdn {
    type Err = MsisdnError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let normalized = normalize(value);
        check(&normalized)?;

        Ok(Msisdn(normalized))
    }
}

impl Serialize for Msisdn {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for Msisdn {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = String::deserialize(deserializer)?;
        Msisdn::from_str(&value).map_err(de::Error::custom)
    }
}
