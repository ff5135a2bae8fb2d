use leptos::prelude::*;
use leptos::server_fn::codec::Json;

use crate::forms::{ContactForm, DonationForm, NewsletterForm};
use crate::submit::{Receipt, SubmitFailure, SubmitOutcome};
#[cfg(feature = "ssr")]
use crate::{
    config::SUBMIT_CONFIG,
    delivery::{deliver, TracingSink},
    submit::Submission,
};

#[server(input = Json)]
pub async fn submit_contact(form: ContactForm) -> Result<SubmitOutcome, ServerFnError> {
    Ok(deliver(&TracingSink, form, Submission::Contact, SUBMIT_CONFIG.timeout).await)
}

#[server(input = Json)]
pub async fn submit_donation(form: DonationForm) -> Result<SubmitOutcome, ServerFnError> {
    Ok(deliver(&TracingSink, form, Submission::Donation, SUBMIT_CONFIG.timeout).await)
}

#[server(input = Json)]
pub async fn subscribe_newsletter(form: NewsletterForm) -> Result<SubmitOutcome, ServerFnError> {
    Ok(deliver(&TracingSink, form, Submission::Newsletter, SUBMIT_CONFIG.timeout).await)
}

/// Folds transport errors into the same failure type the server reports.
pub fn settle(res: Result<SubmitOutcome, ServerFnError>) -> Result<Receipt, SubmitFailure> {
    match res {
        Ok(outcome) => outcome.into(),
        Err(e) => {
            log::warn!("submission request failed: {e}");
            Err(SubmitFailure::Network(e.to_string()))
        }
    }
}
