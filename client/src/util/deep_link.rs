//! WhatsApp deep-link construction for quotation requests.
//!
//! The message uses WhatsApp `*bold*` markup and `%0a` line breaks. Field
//! values are percent-encoded except for spaces, which the browser
//! normalizes when it follows the link. Values are trimmed the same way
//! validation trims them.

#[cfg(test)]
#[path = "deep_link_test.rs"]
mod deep_link_test;

use crate::state::contact::ContactSubmission;

/// Messaging service host.
pub const MESSAGING_HOST: &str = "https://wa.me";
/// Dispatch desk number the lead is sent to.
pub const DESTINATION_ID: &str = "62882005779991";

const LINE_BREAK: &str = "%0a";
const TITLE: &str = "*New Quotation Request - Menara Merah Putih Website*";
const SEPARATOR: &str = "---------------------------";

/// Percent-encode a free-text value, leaving spaces literal.
#[must_use]
pub fn encode_value(raw: &str) -> String {
    raw.split(' ')
        .map(|word| urlencoding::encode(word).into_owned())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Build the message body for a submission.
#[must_use]
pub fn compose_message(submission: &ContactSubmission) -> String {
    let line = |label: &str, value: &str| format!("*{label}:*{}{LINE_BREAK}", encode_value(value.trim()));

    let mut message = String::new();
    message.push_str(TITLE);
    message.push_str(LINE_BREAK);
    message.push_str(LINE_BREAK);
    message.push_str(&line("Service", submission.service.label()));
    message.push_str(&line("Name", &submission.name));
    message.push_str(&line("Company", &submission.company));
    message.push_str(&line("Email", &submission.email));
    message.push_str(&line("Phone", &submission.phone));
    message.push_str(SEPARATOR);
    message.push_str(LINE_BREAK);
    message.push_str("Details:");
    message.push_str(LINE_BREAK);
    message.push_str(&encode_value(submission.details.trim()));
    message
}

/// Full deep link for an already-composed message.
#[must_use]
pub fn whatsapp_url(message: &str) -> String {
    format!("{MESSAGING_HOST}/{DESTINATION_ID}?text={message}")
}
