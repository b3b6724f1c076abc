//! Contact form validation and simulated submission
//!
//! There is no backend: a valid submission is acknowledged once
//! [`SUBMISSION_DELAY`] has elapsed. The delay always succeeds.

use std::sync::LazyLock;
use std::time::{Duration, Instant};

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::ContactError;
use crate::model::{FormField, Industry};

pub const SUBMISSION_DELAY: Duration = Duration::from_millis(1500);

pub const ACKNOWLEDGEMENT: &str = "Thank you for your message! We'll respond within 24 hours.";

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid email pattern"));

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

/// Fail on the first empty field, in the order given
pub fn require_filled(fields: &[(FormField, &str)]) -> Result<(), ContactError> {
    match fields.iter().find(|(_, value)| value.trim().is_empty()) {
        Some((field, _)) => Err(ContactError::MissingField(*field)),
        None => Ok(()),
    }
}

pub fn require_email(email: &str) -> Result<(), ContactError> {
    if is_valid_email(email.trim()) {
        Ok(())
    } else {
        Err(ContactError::InvalidEmail(email.to_string()))
    }
}

/// Raw contact form contents as typed by the user
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub company: String,
    pub industry: Option<Industry>,
    pub phone: String,
    pub message: String,
}

/// A contact form that passed validation
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ContactRequest {
    pub name: String,
    pub email: String,
    pub company: String,
    pub industry: Industry,
    pub phone: Option<String>,
    pub message: Option<String>,
}

fn optional(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

impl ContactForm {
    /// Required fields first, then the email format.
    pub fn validate(&self) -> Result<ContactRequest, ContactError> {
        require_filled(&[
            (FormField::Name, &self.name),
            (FormField::Email, &self.email),
            (FormField::Company, &self.company),
        ])?;
        let industry = self
            .industry
            .ok_or(ContactError::MissingField(FormField::Industry))?;
        require_email(&self.email)?;

        Ok(ContactRequest {
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            company: self.company.trim().to_string(),
            industry,
            phone: optional(&self.phone),
            message: optional(&self.message),
        })
    }

    /// Validate and start a simulated submission.
    pub fn submit(
        &self,
        started: Instant,
        submitted_at: jiff::Timestamp,
    ) -> Result<PendingSubmission, ContactError> {
        let request = self.validate()?;
        Ok(PendingSubmission {
            request,
            started,
            submitted_at,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Acknowledgement {
    pub request: ContactRequest,
    pub submitted_at: jiff::Timestamp,
    pub message: &'static str,
}

#[derive(Debug, Clone, PartialEq)]
pub enum SubmissionStatus {
    Sending { remaining: Duration },
    Delivered(Acknowledgement),
}

/// A submission waiting out the simulated network delay
#[derive(Debug, Clone, PartialEq)]
pub struct PendingSubmission {
    request: ContactRequest,
    started: Instant,
    submitted_at: jiff::Timestamp,
}

impl PendingSubmission {
    pub fn request(&self) -> &ContactRequest {
        &self.request
    }

    pub fn poll(&self, now: Instant) -> SubmissionStatus {
        let elapsed = now.saturating_duration_since(self.started);
        if elapsed >= SUBMISSION_DELAY {
            SubmissionStatus::Delivered(Acknowledgement {
                request: self.request.clone(),
                submitted_at: self.submitted_at,
                message: ACKNOWLEDGEMENT,
            })
        } else {
            SubmissionStatus::Sending {
                remaining: SUBMISSION_DELAY - elapsed,
            }
        }
    }
}
