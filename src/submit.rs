use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::forms::{ContactForm, DonationForm, NewsletterForm};

/// What the submission endpoint hands back when it accepts a payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Receipt {
    pub reference: String,
    pub received_at: DateTime<Utc>,
}

impl Receipt {
    pub fn new(kind: SubmissionKind, received_at: DateTime<Utc>) -> Self {
        Self {
            reference: format!("{}-{}", kind.as_str(), received_at.timestamp_millis()),
            received_at,
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum SubmitFailure {
    #[error("Submission rejected: {0}")]
    Rejected(String),
    #[error("The server took too long to answer")]
    Timeout,
    #[error("Submission service unavailable")]
    Unavailable,
    #[error("Network error: {0}")]
    Network(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum SubmitOutcome {
    Accepted(Receipt),
    Failed(SubmitFailure),
}

impl From<SubmitOutcome> for Result<Receipt, SubmitFailure> {
    fn from(value: SubmitOutcome) -> Self {
        match value {
            SubmitOutcome::Accepted(r) => Ok(r),
            SubmitOutcome::Failed(f) => Err(f),
        }
    }
}

impl From<Result<Receipt, SubmitFailure>> for SubmitOutcome {
    fn from(value: Result<Receipt, SubmitFailure>) -> Self {
        match value {
            Ok(r) => SubmitOutcome::Accepted(r),
            Err(f) => SubmitOutcome::Failed(f),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmissionKind {
    Contact,
    Donation,
    Newsletter,
}

impl SubmissionKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            SubmissionKind::Contact => "contact",
            SubmissionKind::Donation => "don",
            SubmissionKind::Newsletter => "newsletter",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Submission {
    Contact(ContactForm),
    Donation(DonationForm),
    Newsletter(NewsletterForm),
}

impl Submission {
    pub fn kind(&self) -> SubmissionKind {
        match self {
            Submission::Contact(_) => SubmissionKind::Contact,
            Submission::Donation(_) => SubmissionKind::Donation,
            Submission::Newsletter(_) => SubmissionKind::Newsletter,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_receipt_reference() {
        let at = Utc.with_ymd_and_hms(2024, 3, 10, 9, 30, 0).unwrap();
        let receipt = Receipt::new(SubmissionKind::Donation, at);
        assert_eq!(
            receipt.reference,
            format!("don-{}", at.timestamp_millis())
        );
        assert_eq!(receipt.received_at, at);
    }

    #[test]
    fn test_outcome_conversion() {
        let failed = SubmitOutcome::Failed(SubmitFailure::Timeout);
        let res: Result<Receipt, SubmitFailure> = failed.clone().into();
        assert_eq!(res, Err(SubmitFailure::Timeout));
        assert_eq!(SubmitOutcome::from(res), failed);
    }
}
