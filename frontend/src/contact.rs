use log::info;
use serde::Serialize;

/// What a visitor typed into the quote form.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct QuoteRequest {
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,
    pub inquiry: String,
}

impl QuoteRequest {
    /// Blank input clears the subject, it's optional.
    pub fn set_subject(&mut self, raw: &str) {
        let trimmed = raw.trim();
        self.subject = (!trimmed.is_empty()).then(|| trimmed.to_string());
    }
}

#[derive(Debug, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// No contact service is hooked up, nothing left the browser.
    Unwired,
}

pub trait QuoteSubmitter {
    fn submit(&self, request: &QuoteRequest) -> SubmitOutcome;
}

/// Stand-in until the form is connected to a mail or CRM service.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct UnwiredSubmitter;

impl QuoteSubmitter for UnwiredSubmitter {
    fn submit(&self, request: &QuoteRequest) -> SubmitOutcome {
        let payload = serde_json::to_string(request).unwrap_or_default();
        info!("quote request not sent, no contact service configured: {}", payload);
        SubmitOutcome::Unwired
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_subject_is_dropped() {
        let mut request = QuoteRequest::default();
        request.set_subject("   ");
        assert_eq!(request.subject, None);

        request.set_subject("  Landing page ");
        assert_eq!(request.subject.as_deref(), Some("Landing page"));
    }

    #[test]
    fn payload_omits_missing_subject() {
        let request = QuoteRequest {
            email: "ada@example.com".to_string(),
            subject: None,
            inquiry: "A shop for my bakery".to_string(),
        };
        let payload = serde_json::to_value(&request).unwrap();
        assert_eq!(
            payload,
            serde_json::json!({
                "email": "ada@example.com",
                "inquiry": "A shop for my bakery",
            })
        );
    }

    #[test]
    fn sending_does_nothing_yet() {
        let request = QuoteRequest {
            email: "ada@example.com".to_string(),
            subject: Some("Shop".to_string()),
            inquiry: "Need a store".to_string(),
        };
        assert_eq!(UnwiredSubmitter.submit(&request), SubmitOutcome::Unwired);
    }
}
