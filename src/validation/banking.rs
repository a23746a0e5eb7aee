use crate::validation::{digits_only, Field, FieldErrors};
use serde::{Deserialize, Serialize};

const ACCOUNT_NUMBER_MIN: usize = 8;

/// Raw banking form fields. The branch code is normally filled in by the
/// bank-selection step rather than typed, but it is validated the same way.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BankingDetails {
    pub bank_name: String,
    pub account_number: String,
    pub branch_code: String,
    #[serde(default)]
    pub is_primary: bool
}

pub fn validate_banking(details: &BankingDetails) -> FieldErrors {
    let mut errors = FieldErrors::new();

    if details.bank_name.trim().is_empty() {
        errors.insert(Field::BankName, "Bank name is required".to_string());
    }

    let account = details.account_number.trim();

    if !digits_only(account) {
        errors.insert(Field::AccountNumber, "Account number must contain digits only".to_string());
    } else if account.len() < ACCOUNT_NUMBER_MIN {
        errors.insert(
            Field::AccountNumber,
            format!("Account number must be at least {ACCOUNT_NUMBER_MIN} digits")
        );
    }

    if details.branch_code.trim().is_empty() {
        errors.insert(Field::BranchCode, "Branch code is required".to_string());
    }

    errors
}

/// AND-reduction over every banking field predicate.
pub fn is_banking_complete(details: &BankingDetails) -> bool {
    validate_banking(details).is_empty()
}
