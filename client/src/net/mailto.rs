//! Pre-filled e-mail draft used when no lead endpoint is configured.

#[cfg(test)]
#[path = "mailto_test.rs"]
mod mailto_test;

use super::types::ContactMessage;

pub const MAIL_SUBJECT: &str = "Contato pelo site - Gregório Paisagista";

/// Plain-text dump of every contact field.
pub fn mail_body(msg: &ContactMessage) -> String {
    format!(
        "Nome: {}\nE-mail: {}\nTelefone: {}\n\nMensagem:\n{}",
        msg.name,
        msg.email,
        msg.phone_or_empty(),
        msg.message
    )
}

/// `mailto:<recipient>?subject=...&body=...` with percent-encoded values.
pub fn build_mailto(recipient: &str, msg: &ContactMessage) -> String {
    format!(
        "mailto:{recipient}?subject={}&body={}",
        urlencoding::encode(MAIL_SUBJECT),
        urlencoding::encode(&mail_body(msg))
    )
}
