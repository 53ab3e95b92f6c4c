use super::*;

fn message(name: &str, email: &str, body: &str) -> ContactMessage {
    ContactMessage::from_input(name, email, "", body, "https://example.com/")
}

// =============================================================
// ContactMessage::validate
// =============================================================

#[test]
fn validate_rejects_empty_name() {
    assert_eq!(message("", "a@b.com", "hi").validate(), Err(ValidationError::MissingName));
}

#[test]
fn validate_accepts_without_phone() {
    let msg = message("A", "a@b.com", "hi");
    assert!(msg.phone.is_none());
    assert_eq!(msg.validate(), Ok(()));
}

#[test]
fn validate_treats_whitespace_as_empty() {
    let msg = ContactMessage {
        name: "Ana".to_owned(),
        email: "   ".to_owned(),
        phone: None,
        message: "oi".to_owned(),
        source_page: String::new(),
    };
    assert_eq!(msg.validate(), Err(ValidationError::MissingEmail));
}

#[test]
fn validate_rejects_empty_message() {
    assert_eq!(message("A", "a@b.com", " \n ").validate(), Err(ValidationError::MissingMessage));
}

#[test]
fn validate_does_not_check_email_syntax() {
    assert_eq!(message("A", "not-an-email", "hi").validate(), Ok(()));
}

#[test]
fn validation_errors_share_user_message() {
    for err in [ValidationError::MissingName, ValidationError::MissingEmail, ValidationError::MissingMessage] {
        assert_eq!(err.user_message(), REQUIRED_FIELDS_MESSAGE);
    }
}

// =============================================================
// from_input / payload
// =============================================================

#[test]
fn from_input_trims_and_drops_blank_phone() {
    let msg = ContactMessage::from_input("  Ana ", " ana@x.com ", "   ", " Olá ", "https://site/");
    assert_eq!(msg.name, "Ana");
    assert_eq!(msg.email, "ana@x.com");
    assert_eq!(msg.phone, None);
    assert_eq!(msg.message, "Olá");
    assert_eq!(msg.source_page, "https://site/");
}

#[test]
fn payload_uses_localized_field_names() {
    let msg = ContactMessage::from_input("Ana", "ana@x.com", "31 9999", "Quero um jardim", "https://site/?utm_source=ads");
    let json = serde_json::to_value(msg.to_payload()).unwrap();
    assert_eq!(
        json,
        serde_json::json!({
            "nome": "Ana",
            "email": "ana@x.com",
            "telefone": "31 9999",
            "mensagem": "Quero um jardim",
            "page": "https://site/?utm_source=ads",
        })
    );
}

#[test]
fn payload_renders_absent_phone_as_empty_string() {
    let payload = message("A", "a@b.com", "hi").to_payload();
    assert_eq!(payload.telefone, "");
}

#[test]
fn transport_error_display_includes_status() {
    assert_eq!(TransportError::Status(502).to_string(), "lead endpoint responded with status 502");
}
