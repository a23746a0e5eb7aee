use thiserror::Error;

#[derive(Debug, Error)]
pub enum MsisdnError {
    #[error("Msisdn error: Input contains no digits")]
    Empty,
    #[error("Msisdn error: Subscriber number must be 9 digits, got {0}")]
    InvalidLength(usize),
    #[error("Msisdn error: '{0}' is not a valid SA mobile prefix")]
    InvalidPrefix(char)
}
