//! # Printer Bridge Payload
//!
//! The encoded bytes leave the application through a platform intent
//! handled by an installed RawBT-class Bluetooth printing app. This
//! module only formats that payload; dispatching the intent and
//! observing whether the print succeeded is the caller's concern.

use base64::{Engine as _, engine::general_purpose::STANDARD};
use tracing::debug;

/// URI scheme prefix RawBT-class apps register for raw base64 jobs.
pub const RAWBT_SCHEME: &str = "rawbt:base64,";

/// Wrap encoded receipt bytes in a `rawbt:` intent URI.
///
/// ## Example
///
/// ```
/// use resibo::bridge::rawbt_url;
///
/// let url = rawbt_url(&[0x1B, 0x40]);
/// assert_eq!(url, "rawbt:base64,G0A=");
/// ```
pub fn rawbt_url(bytes: &[u8]) -> String {
    let url = format!("{}{}", RAWBT_SCHEME, STANDARD.encode(bytes));
    debug!(payload = bytes.len(), url = url.len(), "bridge payload built");
    url
}
