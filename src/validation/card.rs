use crate::validation::{digits_only, Field, FieldErrors};
use chrono::{Datelike, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

const CARD_NUMBER_MIN: usize = 13;
const CARD_NUMBER_MAX: usize = 19;
const CVV_MIN: usize = 3;
const CVV_MAX: usize = 4;

/// Raw card form fields as captured from the user, before any cleanup.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CardDetails {
    pub card_number: String,
    pub expiry_month: String,
    pub expiry_year: String,
    pub cvv: String,
    pub holder_name: String,
    #[serde(default)]
    pub is_primary: bool
}

impl CardDetails {
    /// Card number with spaces stripped, as it would be stored.
    pub fn sanitized_number(&self) -> String {
        self.card_number.chars().filter(|c| !c.is_whitespace()).collect()
    }

    /// Holder name trimmed and upper-cased for display and storage.
    pub fn normalized_holder_name(&self) -> String {
        self.holder_name.trim().to_uppercase()
    }
}

/// Validates every card field against the current wall-clock date.
///
/// The expiry check deliberately uses "now" rather than a snapshot taken
/// when the form opened, so a card sitting in an open form can transition
/// from valid to expired across a month boundary.
pub fn validate_card(details: &CardDetails) -> FieldErrors {
    validate_card_at(details, Utc::now().date_naive())
}

/// Date-parameterized variant of [`validate_card`].
pub fn validate_card_at(details: &CardDetails, today: NaiveDate) -> FieldErrors {
    let mut errors = FieldErrors::new();

    check_card_number(details, &mut errors);
    check_expiry(details, today, &mut errors);
    check_cvv(details, &mut errors);
    check_holder_name(details, &mut errors);

    errors
}

/// A card record is complete iff every field predicate passes simultaneously.
/// Recomputed on every call; nothing is cached.
pub fn is_card_complete(details: &CardDetails) -> bool {
    validate_card(details).is_empty()
}

fn check_card_number(details: &CardDetails, errors: &mut FieldErrors) {
    let number = details.sanitized_number();

    if !digits_only(&number) {
        errors.insert(Field::CardNumber, "Card number must contain digits only".to_string());
    } else if number.len() < CARD_NUMBER_MIN || number.len() > CARD_NUMBER_MAX {
        errors.insert(
            Field::CardNumber,
            format!("Card number must be {CARD_NUMBER_MIN} to {CARD_NUMBER_MAX} digits")
        );
    }
}

fn check_expiry(details: &CardDetails, today: NaiveDate, errors: &mut FieldErrors) {
    let month = details.expiry_month.trim();
    let year = details.expiry_year.trim();

    if month.is_empty() {
        errors.insert(Field::ExpiryMonth, "Expiry month is required".to_string());
    }

    if year.is_empty() {
        errors.insert(Field::ExpiryYear, "Expiry year is required".to_string());
    }

    if month.is_empty() || year.is_empty() {
        return;
    }

    let Ok(month_value) = month.parse::<u32>() else {
        errors.insert(Field::ExpiryMonth, "Expiry month is not a number".to_string());
        return;
    };

    if !(1..=12).contains(&month_value) {
        errors.insert(Field::ExpiryMonth, "Expiry month must be between 1 and 12".to_string());
        return;
    }

    let Ok(mut year_value) = year.parse::<i32>() else {
        errors.insert(Field::ExpiryYear, "Expiry year is not a number".to_string());
        return;
    };

    // Two-digit years are shorthand for the current century.
    if year_value < 100 {
        year_value += 2000;
    }

    // A card is valid through the last day of its expiry month.
    if (year_value, month_value) < (today.year(), today.month()) {
        errors.insert(Field::ExpiryMonth, "Card has expired".to_string());
    }
}

fn check_cvv(details: &CardDetails, errors: &mut FieldErrors) {
    let cvv = details.cvv.trim();

    if !digits_only(cvv) || cvv.len() < CVV_MIN || cvv.len() > CVV_MAX {
        errors.insert(Field::Cvv, format!("CVV must be {CVV_MIN} or {CVV_MAX} digits"));
    }
}

fn check_holder_name(details: &CardDetails, errors: &mut FieldErrors) {
    if details.holder_name.trim().is_empty() {
        errors.insert(Field::HolderName, "Cardholder name is required".to_string());
    }
}
