//! Display-name encoding for author email headers

use base64::engine::general_purpose::STANDARD;
use base64::Engine;

/// Encodes a person's name for use in a `Name <address>` mailbox
pub trait MailFormatter {
    fn encode_display_name(&self, name: &str) -> String;
}

/// RFC 5322 specials that force a display name to be quoted
const SPECIALS: &[char] = &['(', ')', '<', '>', '[', ']', ':', ';', '@', '\\', ',', '.', '"'];

/// Default formatter.
///
/// Non-ASCII names become RFC 2047 base64 encoded-words; ASCII names with
/// specials are quoted with `"` and `\` escaped; anything else passes through.
#[derive(Clone, Copy, Debug, Default)]
pub struct Rfc2047Formatter;

impl MailFormatter for Rfc2047Formatter {
    fn encode_display_name(&self, name: &str) -> String {
        if !name.is_ascii() {
            return format!("=?UTF-8?B?{}?=", STANDARD.encode(name.as_bytes()));
        }
        if name.contains(SPECIALS) {
            let escaped = name.replace('\\', "\\\\").replace('"', "\\\"");
            return format!("\"{}\"", escaped);
        }
        name.to_string()
    }
}

/// Format a full mailbox string
pub fn mailbox(formatter: &dyn MailFormatter, name: &str, email: &str) -> String {
    format!("{} <{}>", formatter.encode_display_name(name), email)
}
