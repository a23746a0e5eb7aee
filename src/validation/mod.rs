mod banking;
mod card;

use std::collections::BTreeMap;
use std::fmt;
use std::fmt::{Display, Formatter};

pub use banking::{is_banking_complete, validate_banking, BankingDetails};
pub use card::{is_card_complete, validate_card, validate_card_at, CardDetails};

/// Form fields that carry their own validation predicate.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Ord, PartialOrd)]
pub enum Field {
    CardNumber,
    ExpiryMonth,
    ExpiryYear,
    Cvv,
    HolderName,
    BankName,
    AccountNumber,
    BranchCode
}

impl Display for Field {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        let name = match self {
            Field::CardNumber => "cardNumber",
            Field::ExpiryMonth => "expiryMonth",
            Field::ExpiryYear => "expiryYear",
            Field::Cvv => "cvv",
            Field::HolderName => "holderName",
            Field::BankName => "bankName",
            Field::AccountNumber => "accountNumber",
            Field::BranchCode => "branchCode"
        };

        write!(formatter, "{name}")
    }
}

/// Per-field error messages. A field absent from the map passed its
/// predicate; validators never raise.
pub type FieldErrors = BTreeMap<Field, String>;

pub(crate) fn digits_only(value: &str) -> bool {
    !value.is_empty() && value.chars().all(|c| c.is_ascii_digit())
}
