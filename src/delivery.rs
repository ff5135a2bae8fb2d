use chrono::Utc;
use std::{future::Future, time::Duration};

use crate::forms::FormFields;
use crate::submit::{Receipt, Submission, SubmitFailure, SubmitOutcome};

/// Whatever ultimately receives validated form payloads.
pub trait SubmissionSink: Send + Sync {
    fn accept(
        &self,
        submission: Submission,
    ) -> impl Future<Output = Result<Receipt, SubmitFailure>> + Send;
}

/// Records each submission as a structured log event.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl SubmissionSink for TracingSink {
    fn accept(
        &self,
        submission: Submission,
    ) -> impl Future<Output = Result<Receipt, SubmitFailure>> + Send {
        async move {
            let receipt = Receipt::new(submission.kind(), Utc::now());
            match &submission {
                Submission::Contact(c) => tracing::info!(
                    reference = %receipt.reference,
                    name = %c.name,
                    email = %c.email,
                    phone = %c.phone,
                    message_len = c.message.len(),
                    "contact message received"
                ),
                Submission::Donation(d) => tracing::info!(
                    reference = %receipt.reference,
                    name = %d.name,
                    email = %d.email,
                    phone = %d.phone,
                    amount = d.amount().unwrap_or_default(),
                    method = %d.method,
                    "donation pledge received"
                ),
                Submission::Newsletter(n) => tracing::info!(
                    reference = %receipt.reference,
                    email = %n.email,
                    "newsletter subscription received"
                ),
            }
            Ok(receipt)
        }
    }
}

/// Re-validates `form`, then hands it to `sink`, giving up after `timeout`.
pub async fn deliver<T, S>(
    sink: &S,
    form: T,
    wrap: impl FnOnce(T) -> Submission,
    timeout: Duration,
) -> SubmitOutcome
where
    T: FormFields,
    S: SubmissionSink,
{
    let errors = form.validate();
    if !errors.is_valid() {
        let fields = errors
            .iter()
            .map(|(f, _)| f.id())
            .collect::<Vec<_>>()
            .join(", ");
        tracing::debug!(fields = %fields, "rejected invalid submission");
        return SubmitOutcome::Failed(SubmitFailure::Rejected(format!(
            "Champs invalides : {fields}"
        )));
    }

    let submission = wrap(form);
    let kind = submission.kind();
    match tokio::time::timeout(timeout, sink.accept(submission)).await {
        Ok(res) => {
            if let Err(e) = &res {
                tracing::error!(kind = kind.as_str(), "submission failed: {e}");
            }
            res.into()
        }
        Err(_) => {
            tracing::warn!(
                kind = kind.as_str(),
                timeout_ms = timeout.as_millis() as u64,
                "submission timed out"
            );
            SubmitOutcome::Failed(SubmitFailure::Timeout)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::forms::{ContactForm, NewsletterForm};
    use crate::submit::SubmissionKind;

    struct SlowSink(Duration);

    impl SubmissionSink for SlowSink {
        fn accept(
            &self,
            submission: Submission,
        ) -> impl Future<Output = Result<Receipt, SubmitFailure>> + Send {
            let delay = self.0;
            async move {
                tokio::time::sleep(delay).await;
                Ok(Receipt::new(submission.kind(), Utc::now()))
            }
        }
    }

    struct DownSink;

    impl SubmissionSink for DownSink {
        fn accept(
            &self,
            _submission: Submission,
        ) -> impl Future<Output = Result<Receipt, SubmitFailure>> + Send {
            async { Err(SubmitFailure::Unavailable) }
        }
    }

    fn valid_contact() -> ContactForm {
        ContactForm {
            name: "Jean".to_string(),
            email: "jean@example.com".to_string(),
            phone: "0341234567".to_string(),
            message: "Bonjour".to_string(),
        }
    }

    #[tokio::test]
    async fn test_valid_contact_accepted() {
        let outcome = deliver(
            &TracingSink,
            valid_contact(),
            Submission::Contact,
            Duration::from_secs(1),
        )
        .await;
        match outcome {
            SubmitOutcome::Accepted(r) => assert!(r.reference.starts_with("contact-")),
            SubmitOutcome::Failed(f) => panic!("expected acceptance, got {f}"),
        }
    }

    #[tokio::test]
    async fn test_invalid_payload_rejected() {
        let outcome = deliver(
            &TracingSink,
            NewsletterForm {
                email: "not-an-email".to_string(),
            },
            Submission::Newsletter,
            Duration::from_secs(1),
        )
        .await;
        assert_eq!(
            outcome,
            SubmitOutcome::Failed(SubmitFailure::Rejected(
                "Champs invalides : email".to_string()
            ))
        );
    }

    #[tokio::test]
    async fn test_slow_sink_times_out() {
        let outcome = deliver(
            &SlowSink(Duration::from_secs(5)),
            valid_contact(),
            Submission::Contact,
            Duration::from_millis(20),
        )
        .await;
        assert_eq!(outcome, SubmitOutcome::Failed(SubmitFailure::Timeout));
    }

    #[tokio::test]
    async fn test_sink_failure_passed_through() {
        let outcome = deliver(
            &DownSink,
            valid_contact(),
            Submission::Contact,
            Duration::from_secs(1),
        )
        .await;
        assert_eq!(outcome, SubmitOutcome::Failed(SubmitFailure::Unavailable));
    }

    #[test]
    fn test_kind_of_submission() {
        assert_eq!(
            Submission::Contact(valid_contact()).kind(),
            SubmissionKind::Contact
        );
    }
}
