#[cfg(test)]
#[path = "contact_test.rs"]
mod contact_test;

use crate::net::lead_router::SubmitOutcome;
use crate::net::types::ContactMessage;

pub const SENT_MESSAGE: &str = "Mensagem enviada com sucesso! Em breve entraremos em contato.";
pub const HANDED_OFF_MESSAGE: &str = "Abrimos seu cliente de e-mail para finalizar o envio.";
pub const FAILED_MESSAGE: &str = "Não foi possível enviar agora. Tente pelo WhatsApp ou mais tarde.";

/// Where the current submission attempt stands.
///
/// `Idle -> Sending -> {Succeeded | Failed | HandedOff}`, or straight to
/// `Rejected` when validation fails. Every terminal phase accepts a new
/// attempt; nothing retries automatically.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SubmissionPhase {
    #[default]
    Idle,
    Sending,
    Succeeded,
    Failed,
    HandedOff,
    Rejected,
}

/// Contact form draft plus submission status.
///
/// In the Leptos tree this lives in an `RwSignal` owned by the contact
/// section.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub message: String,
    pub phase: SubmissionPhase,
    pub feedback: Option<String>,
}

impl ContactForm {
    /// Submit control is disabled while this is true.
    pub fn is_busy(&self) -> bool {
        self.phase == SubmissionPhase::Sending
    }

    pub fn feedback_is_error(&self) -> bool {
        matches!(self.phase, SubmissionPhase::Failed | SubmissionPhase::Rejected)
    }

    /// Start an attempt from the current draft.
    ///
    /// Returns `None` while another attempt is in flight, or when validation
    /// fails (the inline message is set and the control stays enabled).
    pub fn begin_submit(&mut self, source_page: &str) -> Option<ContactMessage> {
        if self.is_busy() {
            return None;
        }
        self.feedback = None;

        let msg = ContactMessage::from_input(&self.name, &self.email, &self.phone, &self.message, source_page);
        if let Err(err) = msg.validate() {
            self.finish(&SubmitOutcome::Rejected(err));
            return None;
        }
        self.phase = SubmissionPhase::Sending;
        Some(msg)
    }

    /// Record the outcome. Re-enables the control unconditionally and clears
    /// the draft only when the endpoint accepted the lead.
    pub fn finish(&mut self, outcome: &SubmitOutcome) {
        let (phase, feedback) = match outcome {
            SubmitOutcome::Sent => {
                self.clear_fields();
                (SubmissionPhase::Succeeded, SENT_MESSAGE)
            }
            SubmitOutcome::HandedOff => (SubmissionPhase::HandedOff, HANDED_OFF_MESSAGE),
            SubmitOutcome::Failed(_) => (SubmissionPhase::Failed, FAILED_MESSAGE),
            SubmitOutcome::Rejected(err) => (SubmissionPhase::Rejected, err.user_message()),
        };
        self.phase = phase;
        self.feedback = Some(feedback.to_owned());
    }

    fn clear_fields(&mut self) {
        self.name.clear();
        self.email.clear();
        self.phone.clear();
        self.message.clear();
    }
}
