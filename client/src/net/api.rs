//! HTTP transport for lead submissions.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning an error since leads are only ever
//! submitted from the browser.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Result` outputs instead of panics; the contact form turns any
//! error into a generic retry message and keeps the user's input.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use std::future::Future;

use super::lead_router::LeadTransport;
use super::types::{LeadPayload, TransportError};

/// POST `payload` as JSON to `endpoint`.
///
/// # Errors
///
/// Returns [`TransportError::Network`] if the request cannot be sent and
/// [`TransportError::Status`] for any non-success response.
pub async fn post_lead(endpoint: &str, payload: &LeadPayload) -> Result<(), TransportError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post(endpoint)
            .json(payload)
            .map_err(|e| TransportError::Encode(e.to_string()))?
            .send()
            .await
            .map_err(|e| TransportError::Network(e.to_string()))?;
        check_status(resp.ok(), resp.status())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (endpoint, payload);
        Err(TransportError::Network("not available on server".to_owned()))
    }
}

#[cfg(any(test, feature = "hydrate"))]
fn check_status(ok: bool, status: u16) -> Result<(), TransportError> {
    if ok { Ok(()) } else { Err(TransportError::Status(status)) }
}

/// [`LeadTransport`] backed by the browser `fetch` API.
#[derive(Clone, Copy, Debug, Default)]
pub struct FetchTransport;

impl LeadTransport for FetchTransport {
    fn post_json(&self, endpoint: &str, payload: &LeadPayload) -> impl Future<Output = Result<(), TransportError>> {
        post_lead(endpoint, payload)
    }
}
