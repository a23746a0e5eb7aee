mod errors;
mod msisdn;
#[cfg(test)]
mod tests;

pub use errors::MsisdnError;
pub use msisdn::{Msisdn, PhoneValidation};

pub type TransactionId = String;
pub type AuthorizationId = String;
