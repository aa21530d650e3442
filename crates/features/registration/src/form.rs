use crate::error::RegistrationError;
use crate::field::Field;
use crate::input::RegistrationInput;
use crate::messages::Messages;
use crate::navigation::{Destination, Navigator, Notice};
use crate::rules::{FieldErrors, validate_all, validate_field};
use crate::service::RegistrationService;
use crate::submit::{SubmissionPhase, SubmitLatch, SubmitOutcome, SubmitRejected, SubmitTicket};
use std::collections::BTreeSet;
use tracing::{debug, info, warn};

/// State of one registration form: values, per-field touched and error state,
/// and the submission lifecycle.
///
/// Errors are always computed but only shown for touched fields
/// (see [`RegistrationForm::visible_error`]).
#[derive(Debug)]
pub struct RegistrationForm {
    messages: &'static Messages,
    values: RegistrationInput,
    touched: BTreeSet<Field>,
    errors: FieldErrors,
    phase: SubmissionPhase,
    top_error: Option<String>,
    latch: SubmitLatch,
}

impl RegistrationForm {
    #[must_use]
    pub fn new(messages: &'static Messages) -> Self {
        let values = RegistrationInput::default();
        let errors = validate_all(&values, messages);
        Self {
            messages,
            values,
            touched: BTreeSet::new(),
            errors,
            phase: SubmissionPhase::Idle,
            top_error: None,
            latch: SubmitLatch::default(),
        }
    }

    /// Stores the text of `field` and marks it touched.
    ///
    /// Changing the password re-checks the confirmation too. The terms checkbox
    /// has no text and is left alone; use [`RegistrationForm::set_terms`].
    pub fn change_text(&mut self, field: Field, value: impl Into<String>) {
        let Some(slot) = self.values.text_mut(field) else {
            warn!(%field, "Ignoring text for a non-text field");
            return;
        };
        *slot = value.into();

        self.revalidate(field);
        if field == Field::Password {
            self.revalidate(Field::ConfirmPassword);
        }
        self.touched.insert(field);
    }

    pub fn set_terms(&mut self, accepted: bool) {
        self.values.terms_accepted = accepted;
        self.revalidate(Field::Terms);
        self.touched.insert(Field::Terms);
    }

    /// The user left `field`.
    pub fn blur(&mut self, field: Field) {
        self.touched.insert(field);
        self.revalidate(field);
    }

    #[must_use]
    pub const fn values(&self) -> &RegistrationInput {
        &self.values
    }

    #[must_use]
    pub const fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    #[must_use]
    pub fn error(&self, field: Field) -> Option<&'static str> {
        self.errors.get(field).map(|error| error.message)
    }

    /// The error message to render: only touched fields show theirs.
    #[must_use]
    pub fn visible_error(&self, field: Field) -> Option<&'static str> {
        self.is_touched(field).then(|| self.error(field)).flatten()
    }

    #[must_use]
    pub fn is_touched(&self, field: Field) -> bool {
        self.touched.contains(&field)
    }

    /// Re-checks every field against the current values without changing any state.
    #[must_use]
    pub fn validate(&self) -> FieldErrors {
        validate_all(&self.values, self.messages)
    }

    /// Starts a submission.
    ///
    /// Every field is re-checked and marked touched. On success the submitting flag
    /// is held by the returned ticket and the previous top-level error is cleared.
    ///
    /// # Errors
    /// * [`SubmitRejected::Busy`] while another submission holds the flag.
    /// * [`SubmitRejected::Invalid`] when any field fails; nothing is sent.
    pub fn begin_submit(&mut self) -> Result<SubmitTicket, SubmitRejected> {
        if self.latch.is_held() {
            debug!("Submit ignored while a registration is in flight");
            return Err(SubmitRejected::Busy);
        }

        self.errors = self.validate();
        self.touched.extend(Field::all());

        if !self.errors.is_empty() {
            let invalid: Vec<&str> = self.errors.fields().map(Field::key).collect();
            warn!(?invalid, "Registration form has invalid fields");
            return Err(SubmitRejected::Invalid(self.errors.clone()));
        }

        let guard = self.latch.try_acquire().ok_or(SubmitRejected::Busy)?;
        self.phase = SubmissionPhase::Submitting;
        self.top_error = None;

        info!(email = %self.values.email, "Submitting registration");
        Ok(SubmitTicket::new(self.values.to_payload(), guard))
    }

    /// Records the service's answer for `ticket` and releases the submitting flag.
    pub fn finish_submit(
        &mut self,
        ticket: SubmitTicket,
        result: Result<(), RegistrationError>,
    ) -> SubmitOutcome {
        ticket.release();

        match result {
            Ok(()) => {
                info!("Registration accepted");
                self.phase = SubmissionPhase::Registered;
                self.top_error = None;
                self.values = RegistrationInput::default();
                SubmitOutcome::Registered(Notice::new(self.messages.registered_notice))
            },
            Err(err) => {
                warn!(error = %err, "Registration failed");
                let message = err
                    .server_message()
                    .map_or_else(|| self.messages.submit_fallback.to_owned(), str::to_owned);
                self.phase = SubmissionPhase::Failed;
                self.top_error = Some(message.clone());
                SubmitOutcome::Failed(message)
            },
        }
    }

    /// Validates, calls `service` once, records the outcome and, on success, sends the
    /// user to the login page with the success notice.
    ///
    /// # Errors
    /// See [`RegistrationForm::begin_submit`]; service failures are an `Ok` outcome.
    pub async fn submit(
        &mut self,
        service: &dyn RegistrationService,
        navigator: &dyn Navigator,
    ) -> Result<SubmitOutcome, SubmitRejected> {
        let ticket = self.begin_submit()?;
        let result = service.register(ticket.payload()).await;
        let outcome = self.finish_submit(ticket, result);

        if let SubmitOutcome::Registered(notice) = &outcome {
            navigator.navigate(Destination::Login, Some(notice.clone()));
        }
        Ok(outcome)
    }

    /// Phase set by the last lifecycle transition.
    #[must_use]
    pub const fn phase(&self) -> SubmissionPhase {
        self.phase
    }

    #[must_use]
    pub fn is_submitting(&self) -> bool {
        self.latch.is_held()
    }

    #[must_use]
    pub fn top_error(&self) -> Option<&str> {
        self.top_error.as_deref()
    }

    #[must_use]
    pub fn submit_label(&self) -> &'static str {
        if self.is_submitting() { self.messages.busy_label } else { self.messages.submit_label }
    }

    #[must_use]
    pub const fn messages(&self) -> &'static Messages {
        self.messages
    }

    fn revalidate(&mut self, field: Field) {
        let error = validate_field(&self.values, field, self.messages);
        debug!(%field, valid = error.is_none(), "Field validated");
        self.errors.set(field, error);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mfit_domain::config::Locale;

    fn form() -> RegistrationForm {
        RegistrationForm::new(Messages::for_locale(Locale::Tr))
    }

    #[test]
    fn fresh_form_hides_its_errors() {
        let form = form();
        assert_eq!(form.errors().len(), 6);
        assert!(Field::all().all(|field| form.visible_error(field).is_none()));
        assert_eq!(form.phase(), SubmissionPhase::Idle);
        assert_eq!(form.submit_label(), "Hesap Oluştur");
    }

    #[test]
    fn typing_touches_and_revalidates() {
        let mut form = form();
        form.change_text(Field::Name, "A");
        assert!(form.is_touched(Field::Name));
        assert_eq!(form.visible_error(Field::Name), Some("İsim en az 2 karakter olmalıdır"));

        form.change_text(Field::Name, "Al");
        assert_eq!(form.visible_error(Field::Name), None);
    }

    #[test]
    fn blur_shows_required_error() {
        let mut form = form();
        form.blur(Field::Email);
        assert_eq!(form.visible_error(Field::Email), Some("E-posta adresi gerekli"));
        assert_eq!(form.visible_error(Field::Phone), None);
    }

    #[test]
    fn password_change_rechecks_confirmation() {
        let mut form = form();
        form.change_text(Field::Password, "secret");
        form.change_text(Field::ConfirmPassword, "secret");
        assert_eq!(form.error(Field::ConfirmPassword), None);

        form.change_text(Field::Password, "secret2");
        assert_eq!(form.error(Field::ConfirmPassword), Some("Şifreler eşleşmiyor"));
        assert!(!form.is_touched(Field::Phone));
    }

    #[test]
    fn terms_text_is_ignored() {
        let mut form = form();
        form.change_text(Field::Terms, "true");
        assert!(!form.values().terms_accepted);
        assert!(!form.is_touched(Field::Terms));

        form.set_terms(true);
        assert!(form.values().terms_accepted);
        assert_eq!(form.visible_error(Field::Terms), None);
    }

    #[test]
    fn invalid_submit_touches_everything() {
        let mut form = form();
        let Err(SubmitRejected::Invalid(errors)) = form.begin_submit() else {
            panic!("empty form must not submit");
        };
        assert_eq!(errors.len(), 6);
        assert!(Field::all().all(|field| form.visible_error(field).is_some()));
        assert!(!form.is_submitting());
        assert_eq!(form.phase(), SubmissionPhase::Idle);
    }
}
