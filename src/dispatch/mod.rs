
use thiserror::Error;
use tracing::warn;

use crate::types::Msisdn;

const MESSAGING_HOST: &str = "wa.me";

#[derive(Debug, Error)]
pub enum DispatchError {
    #[error("Messaging link could not be opened: {0}")]
    OpenFailed(String),
    #[error("Clipboard unavailable: {0}")]
    ClipboardFailed(String)
}

/// How the receipt text actually reached the user.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum DeliveryOutcome {
    /// The messaging deep-link was opened.
    Opened,
    /// Opening was blocked; the text was copied to the clipboard instead
    /// and the caller should surface a notification.
    CopiedToClipboard
}

/// Opens messaging deep-links. The real implementation is the surrounding
/// shell (a browser tab, `xdg-open`, ...); injected so the dispatch flow
/// stays testable.
pub trait LinkOpener {
    fn open(&self, uri: &str) -> Result<(), DispatchError>;
}

pub trait Clipboard {
    fn copy(&self, text: &str) -> Result<(), DispatchError>;
}

/// Builds the fire-and-forget messaging URI:
/// `https://wa.me/<normalized-phone>?text=<url-encoded-message>`.
pub fn whatsapp_link(phone: &Msisdn, message: &str) -> String {
    format!("https://{}/{}?text={}", MESSAGING_HOST, phone, percent_encode(message))
}

/// Single-attempt delivery: try the deep-link, and on failure fall back to
/// copying the message text to the clipboard. No retries.
///
/// # Errors
/// Returns `DispatchError` only when both the link open and the clipboard
/// fallback fail.
pub fn dispatch_message(
    opener: &dyn LinkOpener,
    clipboard: &dyn Clipboard,
    phone: &Msisdn,
    message: &str
) -> Result<DeliveryOutcome, DispatchError> {
    let uri = whatsapp_link(phone, message);

    match opener.open(&uri) {
        Ok(()) => Ok(DeliveryOutcome::Opened),
        Err(error) => {
            warn!("Falling back to clipboard for [{phone}]: {error}");
            clipboard.copy(message)?;

            Ok(DeliveryOutcome::CopiedToClipboard)
        }
    }
}

/// RFC 3986 percent-encoding keeping only the unreserved set.
fn percent_encode(input: &str) -> String {
    let mut encoded = String::with_capacity(input.len() * 3);

    for byte in input.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => {
                encoded.push(byte as char);
            }
            _ => {
                encoded.push_str(&format!("%{byte:02X}"));
            }
        }
    }

    encoded
}
