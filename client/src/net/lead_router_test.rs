use std::cell::RefCell;
use std::future::{Future, ready};

use futures::executor::block_on;

use super::*;

// =============================================================
// Helpers
// =============================================================

struct FakeTransport {
    response: Result<(), TransportError>,
    calls: RefCell<Vec<(String, LeadPayload)>>,
}

impl FakeTransport {
    fn responding(response: Result<(), TransportError>) -> Self {
        Self { response, calls: RefCell::new(Vec::new()) }
    }
}

impl LeadTransport for FakeTransport {
    fn post_json(&self, endpoint: &str, payload: &LeadPayload) -> impl Future<Output = Result<(), TransportError>> {
        self.calls.borrow_mut().push((endpoint.to_owned(), payload.clone()));
        ready(self.response.clone())
    }
}

#[derive(Default)]
struct FakeNavigator {
    visits: RefCell<Vec<String>>,
}

impl Navigator for FakeNavigator {
    fn navigate(&self, url: &str) {
        self.visits.borrow_mut().push(url.to_owned());
    }
}

fn config(endpoint: Option<&str>) -> SiteConfig {
    SiteConfig { form_endpoint: endpoint.map(str::to_owned), ..SiteConfig::default() }
}

fn valid_message() -> ContactMessage {
    ContactMessage::from_input("Ana", "ana@x.com", "", "Quero um orçamento", "https://site/?utm_source=ads")
}

// =============================================================
// Endpoint configured
// =============================================================

#[test]
fn endpoint_success_reports_sent() {
    let router = LeadRouter::new(&config(Some("https://forms.test/f/1")), FakeTransport::responding(Ok(())), FakeNavigator::default());

    let outcome = block_on(router.submit(&valid_message()));

    assert_eq!(outcome, SubmitOutcome::Sent);
    let calls = router.transport.calls.borrow();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].0, "https://forms.test/f/1");
    assert_eq!(calls[0].1, valid_message().to_payload());
    assert!(router.navigator.visits.borrow().is_empty());
}

#[test]
fn endpoint_non_success_status_reports_failure() {
    let router = LeadRouter::new(
        &config(Some("https://forms.test/f/1")),
        FakeTransport::responding(Err(TransportError::Status(500))),
        FakeNavigator::default(),
    );

    let outcome = block_on(router.submit(&valid_message()));

    assert_eq!(outcome, SubmitOutcome::Failed(TransportError::Status(500)));
    assert!(router.navigator.visits.borrow().is_empty());
}

#[test]
fn endpoint_network_error_reports_failure() {
    let router = LeadRouter::new(
        &config(Some("https://forms.test/f/1")),
        FakeTransport::responding(Err(TransportError::Network("offline".to_owned()))),
        FakeNavigator::default(),
    );

    let outcome = block_on(router.submit(&valid_message()));

    assert!(matches!(outcome, SubmitOutcome::Failed(TransportError::Network(_))));
}

// =============================================================
// No endpoint: mail hand-off
// =============================================================

#[test]
fn no_endpoint_navigates_to_mailto_exactly_once() {
    let router = LeadRouter::new(&config(None), FakeTransport::responding(Ok(())), FakeNavigator::default());

    let msg = ContactMessage::from_input("Ana", "ana@x.com", "31 9999-0000", "Quero um orçamento", "https://site/");
    let outcome = block_on(router.submit(&msg));

    assert_eq!(outcome, SubmitOutcome::HandedOff);
    assert!(router.transport.calls.borrow().is_empty());

    let visits = router.navigator.visits.borrow();
    assert_eq!(visits.len(), 1);
    let url = &visits[0];
    assert!(url.starts_with("mailto:contato@gregoriopaisagista.com.br?subject=Contato%20pelo%20site"));
    let (_, body) = url.split_once("&body=").unwrap();
    let body = urlencoding::decode(body).unwrap();
    for value in ["Ana", "ana@x.com", "31 9999-0000", "Quero um orçamento"] {
        assert!(body.contains(value), "mail body missing {value}");
    }
}

// =============================================================
// Validation short-circuit
// =============================================================

#[test]
fn invalid_message_is_rejected_before_any_side_effect() {
    for endpoint in [None, Some("https://forms.test/f/1")] {
        let router = LeadRouter::new(&config(endpoint), FakeTransport::responding(Ok(())), FakeNavigator::default());
        let msg = ContactMessage::from_input("", "a@b.com", "", "hi", "");

        let outcome = block_on(router.submit(&msg));

        assert_eq!(outcome, SubmitOutcome::Rejected(ValidationError::MissingName));
        assert!(router.transport.calls.borrow().is_empty());
        assert!(router.navigator.visits.borrow().is_empty());
    }
}
