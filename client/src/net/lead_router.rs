//! Lead routing: form endpoint POST or mail-client hand-off.
//!
//! DESIGN
//! ======
//! `LeadRouter::submit` is the single entry point for a contact submission.
//! It always validates first, then picks one of two exits depending on
//! whether a form endpoint is configured. Transport and navigation are trait
//! seams so the routing runs without a browser.
//!
//! ERROR HANDLING
//! ==============
//! Nothing here is fatal. Validation failures and transport failures are
//! returned as outcomes; a missing endpoint is not an error and deliberately
//! selects the mail draft.

#[cfg(test)]
#[path = "lead_router_test.rs"]
mod lead_router_test;

use std::future::Future;

use super::mailto::build_mailto;
use super::types::{ContactMessage, LeadPayload, TransportError, ValidationError};
use crate::config::SiteConfig;

/// Sends a lead payload to a remote endpoint.
pub trait LeadTransport {
    /// POST `payload` as JSON. Any non-success status is an error.
    fn post_json(&self, endpoint: &str, payload: &LeadPayload) -> impl Future<Output = Result<(), TransportError>>;
}

/// Navigates the current browsing context.
pub trait Navigator {
    fn navigate(&self, url: &str);
}

/// Result of one submission attempt.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// A required field was empty; nothing was sent.
    Rejected(ValidationError),
    /// The endpoint accepted the lead.
    Sent,
    /// A mail draft was opened. Not a delivery confirmation.
    HandedOff,
    /// The endpoint was unreachable or answered with a non-success status.
    Failed(TransportError),
}

/// Routes validated contact messages to the endpoint or the mail client.
pub struct LeadRouter<T, N> {
    endpoint: Option<String>,
    recipient: String,
    transport: T,
    navigator: N,
}

impl<T: LeadTransport, N: Navigator> LeadRouter<T, N> {
    pub fn new(config: &SiteConfig, transport: T, navigator: N) -> Self {
        Self {
            endpoint: config.form_endpoint.clone(),
            recipient: config.public_email.clone(),
            transport,
            navigator,
        }
    }

    /// Validate `msg`, then POST it or hand it to the mail client.
    pub async fn submit(&self, msg: &ContactMessage) -> SubmitOutcome {
        if let Err(err) = msg.validate() {
            return SubmitOutcome::Rejected(err);
        }

        let Some(endpoint) = self.endpoint.as_deref() else {
            self.navigator.navigate(&build_mailto(&self.recipient, msg));
            return SubmitOutcome::HandedOff;
        };

        match self.transport.post_json(endpoint, &msg.to_payload()).await {
            Ok(()) => SubmitOutcome::Sent,
            Err(err) => {
                leptos::logging::warn!("lead submission failed: {err}");
                SubmitOutcome::Failed(err)
            }
        }
    }
}
