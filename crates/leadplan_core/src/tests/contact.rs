//! Contact form tests

use std::time::{Duration, Instant};

use crate::contact::{
    ACKNOWLEDGEMENT, ContactForm, SUBMISSION_DELAY, SubmissionStatus, is_valid_email,
};
use crate::error::ContactError;
use crate::model::{FormField, Industry};

fn filled_form() -> ContactForm {
    ContactForm {
        name: "  Sam Ortiz ".to_string(),
        email: "sam@ortiz-logistics.example".to_string(),
        company: "Ortiz Logistics".to_string(),
        industry: Some(Industry::Logistics),
        phone: String::new(),
        message: "Looking for a Q3 plan".to_string(),
    }
}

#[test]
fn test_email_pattern() {
    assert!(is_valid_email("a@b.co"));
    assert!(is_valid_email("first.last@sub.domain.org"));
    assert!(!is_valid_email("missing-at.example.com"));
    assert!(!is_valid_email("no-dot@example"));
    assert!(!is_valid_email("has space@example.com"));
    assert!(!is_valid_email("two@@example.com"));
}

#[test]
fn test_valid_form() {
    let request = filled_form().validate().unwrap();
    assert_eq!(request.name, "Sam Ortiz");
    assert_eq!(request.industry, Industry::Logistics);
    assert_eq!(request.phone, None);
    assert_eq!(request.message.as_deref(), Some("Looking for a Q3 plan"));
}

#[test]
fn test_required_fields_checked_before_email() {
    let form = ContactForm {
        email: "bad".to_string(),
        company: String::new(),
        ..filled_form()
    };
    assert_eq!(
        form.validate(),
        Err(ContactError::MissingField(FormField::Company))
    );

    let form = ContactForm {
        industry: None,
        ..filled_form()
    };
    assert_eq!(
        form.validate(),
        Err(ContactError::MissingField(FormField::Industry))
    );

    let form = ContactForm {
        email: "sam.example.com".to_string(),
        ..filled_form()
    };
    assert!(matches!(
        form.validate(),
        Err(ContactError::InvalidEmail(_))
    ));
}

#[test]
fn test_whitespace_only_counts_as_empty() {
    let form = ContactForm {
        name: "   ".to_string(),
        ..filled_form()
    };
    assert_eq!(
        form.validate(),
        Err(ContactError::MissingField(FormField::Name))
    );
}

#[test]
fn test_submission_completes_after_delay() {
    let start = Instant::now();
    let submitted_at = jiff::Timestamp::UNIX_EPOCH;
    let pending = filled_form().submit(start, submitted_at).unwrap();

    match pending.poll(start + Duration::from_millis(1_000)) {
        SubmissionStatus::Sending { remaining } => {
            assert_eq!(remaining, Duration::from_millis(500))
        }
        other => panic!("expected sending, got {other:?}"),
    }

    match pending.poll(start + SUBMISSION_DELAY) {
        SubmissionStatus::Delivered(ack) => {
            assert_eq!(ack.message, ACKNOWLEDGEMENT);
            assert_eq!(ack.submitted_at, submitted_at);
            assert_eq!(ack.request.company, "Ortiz Logistics");
        }
        other => panic!("expected delivered, got {other:?}"),
    }
}

#[test]
fn test_invalid_form_is_not_submitted() {
    let form = ContactForm::default();
    let result = form.submit(Instant::now(), jiff::Timestamp::UNIX_EPOCH);
    assert_eq!(
        result.unwrap_err(),
        ContactError::MissingField(FormField::Name)
    );
}
