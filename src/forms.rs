use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt::Display;
use std::sync::LazyLock;
use std::time::Duration;
use thiserror::Error;

use crate::notice::Notice;
use crate::submit::{Receipt, SubmitFailure};

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid"));
// +261 country code or 0 trunk prefix, then nine digits
static PHONE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\+261|0)\d{9}$").expect("phone pattern is valid"));

pub const PRESET_AMOUNTS: [u32; 5] = [10, 25, 50, 100, 250];
pub const MIN_CUSTOM_AMOUNT: u32 = 5;

/// How long a successful form stays in its "sent" state before clearing.
pub const SUCCESS_RESET_DELAY: Duration = Duration::from_millis(2000);
pub const NEWSLETTER_RESET_DELAY: Duration = Duration::from_millis(3000);

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Field {
    Name,
    Email,
    Phone,
    Message,
    Amount,
}

impl Field {
    pub fn id(&self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Phone => "phone",
            Field::Message => "message",
            Field::Amount => "amount",
        }
    }

    /// Element id of the inline error, for `aria-describedby`.
    pub fn error_id(&self, form: &str) -> String {
        format!("{form}-{}-error", self.id())
    }
}

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldError {
    #[error("required")]
    Required,
    #[error("invalid format")]
    InvalidFormat,
    #[error("below minimum of {0}")]
    BelowMinimum(u32),
}

impl FieldError {
    pub fn message(&self, field: Field) -> String {
        match (field, self) {
            (Field::Name, FieldError::Required) => "Le nom est requis".to_string(),
            (Field::Email, FieldError::Required) => "L'email est requis".to_string(),
            (Field::Email, _) => "Format d'email invalide".to_string(),
            (Field::Phone, FieldError::Required) => "Le téléphone est requis".to_string(),
            (Field::Phone, _) => "Numéro invalide (ex. 034 00 000 00)".to_string(),
            (Field::Message, FieldError::Required) => "Le message est requis".to_string(),
            (Field::Amount, FieldError::Required) => "Choisissez un montant".to_string(),
            (Field::Amount, FieldError::BelowMinimum(min)) => {
                format!("Le montant minimum est de {min} €")
            }
            (Field::Amount, _) => "Montant invalide".to_string(),
            (_, e) => e.to_string(),
        }
    }
}

/// Field → error map. An absent key means the field is valid.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors(BTreeMap<Field, FieldError>);

impl ValidationErrors {
    pub fn is_valid(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, field: Field) -> Option<FieldError> {
        self.0.get(&field).copied()
    }

    pub fn message(&self, field: Field) -> Option<String> {
        self.get(field).map(|e| e.message(field))
    }

    pub fn check(&mut self, field: Field, res: Option<FieldError>) {
        if let Some(e) = res {
            self.0.insert(field, e);
        }
    }

    pub fn clear(&mut self, field: Field) {
        self.0.remove(&field);
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Field, &FieldError)> {
        self.0.iter()
    }
}

impl<const N: usize> From<[(Field, FieldError); N]> for ValidationErrors {
    fn from(value: [(Field, FieldError); N]) -> Self {
        Self(BTreeMap::from(value))
    }
}

pub fn validate_name(value: &str) -> Option<FieldError> {
    value.trim().is_empty().then_some(FieldError::Required)
}

pub fn validate_email(value: &str) -> Option<FieldError> {
    if value.trim().is_empty() {
        Some(FieldError::Required)
    } else if !EMAIL_RE.is_match(value) {
        Some(FieldError::InvalidFormat)
    } else {
        None
    }
}

/// Optional phones accept an empty value but still reject a malformed one.
pub fn validate_phone(value: &str, required: bool) -> Option<FieldError> {
    let compact = value.split_whitespace().collect::<String>();
    if compact.is_empty() {
        required.then_some(FieldError::Required)
    } else if !PHONE_RE.is_match(&compact) {
        Some(FieldError::InvalidFormat)
    } else {
        None
    }
}

pub fn validate_message(value: &str) -> Option<FieldError> {
    value.trim().is_empty().then_some(FieldError::Required)
}

pub fn validate_amount(preset: Option<u32>, custom: &str) -> Option<FieldError> {
    if preset.is_some() {
        return None;
    }
    let custom = custom.trim();
    if custom.is_empty() {
        return Some(FieldError::Required);
    }
    match custom.parse::<u32>() {
        Ok(a) if a < MIN_CUSTOM_AMOUNT => Some(FieldError::BelowMinimum(MIN_CUSTOM_AMOUNT)),
        Ok(_) => None,
        Err(_) => Some(FieldError::InvalidFormat),
    }
}

/// A form payload with its own validation and toast wording.
pub trait FormFields: Clone + Default {
    fn validate(&self) -> ValidationErrors;

    fn success_notice(&self, receipt: &Receipt) -> Notice;

    fn failure_notice(&self, failure: &SubmitFailure) -> Notice {
        let description = match failure {
            SubmitFailure::Rejected(reason) => reason.clone(),
            SubmitFailure::Timeout => {
                "Le serveur met trop de temps à répondre. Veuillez réessayer plus tard.".to_string()
            }
            SubmitFailure::Unavailable | SubmitFailure::Network(_) => {
                "Veuillez réessayer plus tard.".to_string()
            }
        };
        Notice::error("Erreur lors de l'envoi", description)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub message: String,
}

impl FormFields for ContactForm {
    fn validate(&self) -> ValidationErrors {
        let mut errors = ValidationErrors::default();
        errors.check(Field::Name, validate_name(&self.name));
        errors.check(Field::Email, validate_email(&self.email));
        errors.check(Field::Phone, validate_phone(&self.phone, false));
        errors.check(Field::Message, validate_message(&self.message));
        errors
    }

    fn success_notice(&self, _receipt: &Receipt) -> Notice {
        Notice::success(
            "Message envoyé avec succès!",
            "Nous vous répondrons dans les plus brefs délais.",
        )
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum PaymentMethod {
    #[default]
    MVola,
    OrangeMoney,
    AirtelMoney,
    BankTransfer,
}

impl PaymentMethod {
    pub const ALL: [PaymentMethod; 4] = [
        PaymentMethod::MVola,
        PaymentMethod::OrangeMoney,
        PaymentMethod::AirtelMoney,
        PaymentMethod::BankTransfer,
    ];

    pub fn id(&self) -> &'static str {
        match self {
            PaymentMethod::MVola => "mvola",
            PaymentMethod::OrangeMoney => "orange-money",
            PaymentMethod::AirtelMoney => "airtel-money",
            PaymentMethod::BankTransfer => "virement",
        }
    }

    /// Element id of this method's radio input within `form`.
    pub fn input_id(&self, form: &str) -> String {
        format!("{form}-method-{}", self.id())
    }
}

impl Display for PaymentMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            PaymentMethod::MVola => "MVola",
            PaymentMethod::OrangeMoney => "Orange Money",
            PaymentMethod::AirtelMoney => "Airtel Money",
            PaymentMethod::BankTransfer => "Virement bancaire",
        };
        write!(f, "{label}")
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DonationForm {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub message: String,
    pub preset: Option<u32>,
    pub custom_amount: String,
    pub method: PaymentMethod,
}

impl DonationForm {
    pub fn select_preset(&mut self, amount: u32) {
        self.preset = Some(amount);
        self.custom_amount.clear();
    }

    pub fn set_custom_amount(&mut self, value: String) {
        self.preset = None;
        self.custom_amount = value;
    }

    pub fn amount(&self) -> Option<u32> {
        self.preset.or_else(|| self.custom_amount.trim().parse().ok())
    }
}

impl FormFields for DonationForm {
    fn validate(&self) -> ValidationErrors {
        let mut errors = ValidationErrors::default();
        errors.check(Field::Name, validate_name(&self.name));
        errors.check(Field::Email, validate_email(&self.email));
        errors.check(Field::Phone, validate_phone(&self.phone, true));
        errors.check(
            Field::Amount,
            validate_amount(self.preset, &self.custom_amount),
        );
        errors
    }

    fn success_notice(&self, receipt: &Receipt) -> Notice {
        let amount = self.amount().unwrap_or_default();
        Notice::success(
            "Merci pour votre don !",
            format!(
                "Votre promesse de {amount} € via {} est enregistrée (réf. {}).",
                self.method, receipt.reference
            ),
        )
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewsletterForm {
    pub email: String,
}

impl FormFields for NewsletterForm {
    fn validate(&self) -> ValidationErrors {
        let mut errors = ValidationErrors::default();
        errors.check(Field::Email, validate_email(&self.email));
        errors
    }

    fn success_notice(&self, _receipt: &Receipt) -> Notice {
        Notice::success(
            "Inscription confirmée",
            "Vous recevrez nos prochaines nouvelles.",
        )
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SubmitPhase {
    #[default]
    Idle,
    Submitting,
    Success,
}

/// Field values, inline errors and submission phase of one form instance.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormState<T> {
    pub data: T,
    pub errors: ValidationErrors,
    pub phase: SubmitPhase,
}

impl<T: FormFields> FormState<T> {
    /// Applies an edit and drops the stale error for that field.
    pub fn edit(&mut self, field: Field, f: impl FnOnce(&mut T)) {
        f(&mut self.data);
        self.errors.clear(field);
    }

    /// Idle → Submitting when the data validates; returns the payload to send.
    pub fn submit(&mut self) -> Option<T> {
        if self.phase != SubmitPhase::Idle {
            return None;
        }
        self.errors = self.data.validate();
        if !self.errors.is_valid() {
            return None;
        }
        self.phase = SubmitPhase::Submitting;
        Some(self.data.clone())
    }

    pub fn complete(&mut self, result: Result<Receipt, SubmitFailure>) -> Notice {
        match result {
            Ok(receipt) => {
                self.phase = SubmitPhase::Success;
                self.data.success_notice(&receipt)
            }
            Err(failure) => {
                self.phase = SubmitPhase::Idle;
                self.data.failure_notice(&failure)
            }
        }
    }

    /// Success → Idle with cleared fields. No-op in any other phase.
    pub fn reset(&mut self) {
        if self.phase == SubmitPhase::Success {
            self.data = T::default();
            self.errors = ValidationErrors::default();
            self.phase = SubmitPhase::Idle;
        }
    }

    pub fn is_busy(&self) -> bool {
        self.phase != SubmitPhase::Idle
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notice::Severity;
    use crate::submit::SubmissionKind;
    use chrono::Utc;

    fn contact(name: &str, email: &str, phone: &str, message: &str) -> ContactForm {
        ContactForm {
            name: name.to_string(),
            email: email.to_string(),
            phone: phone.to_string(),
            message: message.to_string(),
        }
    }

    fn receipt() -> Receipt {
        Receipt::new(SubmissionKind::Contact, Utc::now())
    }

    #[test]
    fn test_invalid_contact_scenario() {
        let errors = contact("", "a@b", "123", "hi").validate();
        assert_eq!(
            errors,
            ValidationErrors::from([
                (Field::Name, FieldError::Required),
                (Field::Email, FieldError::InvalidFormat),
                (Field::Phone, FieldError::InvalidFormat),
            ])
        );

        let mut state = FormState {
            data: contact("", "a@b", "123", "hi"),
            ..Default::default()
        };
        assert_eq!(state.submit(), None);
        assert_eq!(state.phase, SubmitPhase::Idle);
        assert_eq!(state.errors.len(), 3);
    }

    #[test]
    fn test_valid_contact_scenario() {
        let errors = contact("Jean", "jean@example.com", "0341234567", "Bonjour").validate();
        assert!(errors.is_valid());
    }

    #[test]
    fn test_email_without_at_sign() {
        for email in ["jean", "jean.example.com", "jean example.com", "x.y.z"] {
            assert_eq!(validate_email(email), Some(FieldError::InvalidFormat), "{email}");
        }
        assert_eq!(validate_email(""), Some(FieldError::Required));
        assert_eq!(validate_email("   "), Some(FieldError::Required));
        assert_eq!(validate_email("a b@c.d"), Some(FieldError::InvalidFormat));
        assert_eq!(validate_email("a@b.c"), None);
    }

    #[test]
    fn test_blank_names() {
        for name in ["", " ", "\t", "   \n"] {
            assert_eq!(validate_name(name), Some(FieldError::Required));
        }
        assert_eq!(validate_name(" Jean "), None);
    }

    #[test]
    fn test_phone_formats() {
        for phone in ["0341234567", "034 12 345 67", "+261341234567", "+261 34 12 345 67"] {
            assert_eq!(validate_phone(phone, true), None, "{phone}");
        }
        for phone in ["123", "034123456", "03412345678", "261341234567", "+33612345678", "034-12-345-67"] {
            assert_eq!(
                validate_phone(phone, true),
                Some(FieldError::InvalidFormat),
                "{phone}"
            );
        }
        assert_eq!(validate_phone("  ", true), Some(FieldError::Required));
        assert_eq!(validate_phone("", false), None);
        assert_eq!(validate_phone("12", false), Some(FieldError::InvalidFormat));
    }

    #[test]
    fn test_amount_rules() {
        assert_eq!(validate_amount(Some(25), ""), None);
        assert_eq!(validate_amount(None, ""), Some(FieldError::Required));
        assert_eq!(validate_amount(None, "abc"), Some(FieldError::InvalidFormat));
        assert_eq!(validate_amount(None, "-5"), Some(FieldError::InvalidFormat));
        assert_eq!(
            validate_amount(None, "4"),
            Some(FieldError::BelowMinimum(MIN_CUSTOM_AMOUNT))
        );
        assert_eq!(validate_amount(None, " 5 "), None);
    }

    #[test]
    fn test_donation_amount_selection() {
        let mut form = DonationForm::default();
        form.set_custom_amount("40".to_string());
        assert_eq!(form.amount(), Some(40));
        form.select_preset(100);
        assert_eq!(form.amount(), Some(100));
        assert!(form.custom_amount.is_empty());
        form.set_custom_amount("7".to_string());
        assert_eq!(form.preset, None);
        assert_eq!(form.amount(), Some(7));
    }

    #[test]
    fn test_donation_requires_phone() {
        let form = DonationForm {
            name: "Jean".to_string(),
            email: "jean@example.com".to_string(),
            preset: Some(50),
            ..Default::default()
        };
        let errors = form.validate();
        assert_eq!(errors.get(Field::Phone), Some(FieldError::Required));
        assert_eq!(errors.get(Field::Message), None);
        assert_eq!(errors.len(), 1);
    }

    #[test]
    fn test_submission_lifecycle() {
        let mut state = FormState {
            data: contact("Jean", "jean@example.com", "0341234567", "Bonjour"),
            ..Default::default()
        };
        assert_eq!(state.phase, SubmitPhase::Idle);

        let payload = state.submit().expect("valid form should submit");
        assert_eq!(payload.name, "Jean");
        assert_eq!(state.phase, SubmitPhase::Submitting);
        assert!(state.errors.is_valid());
        // a second submit while in flight is ignored
        assert_eq!(state.submit(), None);

        let notice = state.complete(Ok(receipt()));
        assert_eq!(notice.severity, Severity::Success);
        assert_eq!(state.phase, SubmitPhase::Success);
        assert!(state.is_busy());

        state.reset();
        assert_eq!(state.phase, SubmitPhase::Idle);
        assert_eq!(state.data, ContactForm::default());
        assert!(state.errors.is_valid());
    }

    #[test]
    fn test_failed_submission_returns_to_idle() {
        let mut state = FormState {
            data: contact("Jean", "jean@example.com", "", "Bonjour"),
            ..Default::default()
        };
        state.submit().expect("valid form should submit");
        let notice = state.complete(Err(SubmitFailure::Timeout));
        assert_eq!(notice.severity, Severity::Error);
        assert_eq!(state.phase, SubmitPhase::Idle);
        // data kept so the user can resubmit
        assert_eq!(state.data.name, "Jean");

        // reset only applies after a success
        state.reset();
        assert_eq!(state.data.name, "Jean");
    }

    #[test]
    fn test_edit_clears_only_that_field() {
        let mut state = FormState::<ContactForm>::default();
        assert_eq!(state.submit(), None);
        assert!(state.errors.get(Field::Name).is_some());
        assert!(state.errors.get(Field::Email).is_some());

        state.edit(Field::Name, |d| d.name = "J".to_string());
        assert_eq!(state.errors.get(Field::Name), None);
        assert_eq!(state.errors.get(Field::Email), Some(FieldError::Required));
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            FieldError::Required.message(Field::Name),
            "Le nom est requis"
        );
        assert_eq!(
            FieldError::InvalidFormat.message(Field::Email),
            "Format d'email invalide"
        );
        assert_eq!(
            FieldError::BelowMinimum(5).message(Field::Amount),
            "Le montant minimum est de 5 €"
        );
        assert_eq!(Field::Email.error_id("contact"), "contact-email-error");
    }

    #[test]
    fn test_donation_notice_mentions_amount_and_method() {
        let mut form = DonationForm {
            method: PaymentMethod::OrangeMoney,
            ..Default::default()
        };
        form.select_preset(50);
        let notice = form.success_notice(&receipt());
        let description = notice.description.expect("should describe the pledge");
        assert!(description.contains("50 €"));
        assert!(description.contains("Orange Money"));
    }

    #[test]
    fn test_payment_method_input_ids_are_distinct() {
        let ids: std::collections::HashSet<String> =
            PaymentMethod::ALL.iter().map(|m| m.input_id("don")).collect();
        assert_eq!(ids.len(), PaymentMethod::ALL.len());
        assert_eq!(PaymentMethod::OrangeMoney.input_id("don"), "don-method-orange-money");
    }

    #[test]
    fn test_typed_custom_amount_reports_format_error() {
        let mut form = DonationForm::default();
        form.set_custom_amount("12,50".to_string());
        assert_eq!(form.validate().get(Field::Amount), Some(FieldError::InvalidFormat));
        form.set_custom_amount("dix".to_string());
        assert_eq!(form.validate().get(Field::Amount), Some(FieldError::InvalidFormat));
        form.set_custom_amount("20".to_string());
        assert_eq!(form.validate().get(Field::Amount), None);
    }
}
