//! Registration feature slice.
//!
//! The form itself is UI-agnostic: [`RegistrationForm`] owns values, per-field
//! touched/error state and the submission lifecycle, and talks to the outside world
//! through [`RegistrationService`] and [`Navigator`].
//!
//! * `http` adds [`HttpRegistrationService`], a `reqwest` client for the backend.
//! * `client` adds the Dioxus [`RegistrationFormView`] component.
//!
//! ```rust
//! use mfit_registration::{Field, Locale, Messages, RegistrationForm, SubmitRejected};
//!
//! let mut form = RegistrationForm::new(Messages::for_locale(Locale::En));
//! form.change_text(Field::Name, "A");
//! assert_eq!(form.visible_error(Field::Name), Some("Name must be at least 2 characters"));
//! assert!(matches!(form.begin_submit(), Err(SubmitRejected::Invalid(_))));
//! ```

#[cfg(feature = "client")]
mod client;
mod error;
mod field;
mod form;
#[cfg(feature = "http")]
mod http;
mod input;
mod messages;
mod navigation;
pub mod rules;
mod service;
mod submit;

pub use crate::error::{RegistrationError, RegistrationErrorExt};
pub use crate::field::Field;
pub use crate::form::RegistrationForm;
pub use crate::input::{RegistrationInput, RegistrationPayload};
pub use crate::messages::Messages;
pub use crate::navigation::{Destination, Navigator, Notice, NoticeSlot};
pub use crate::rules::{FieldError, FieldErrors, Violation};
pub use crate::service::RegistrationService;
pub use crate::submit::{SubmissionPhase, SubmitGuard, SubmitOutcome, SubmitRejected, SubmitTicket};
pub use mfit_domain::config::Locale;

#[cfg(feature = "client")]
pub use crate::client::RegistrationFormView;
#[cfg(feature = "http")]
pub use crate::http::HttpRegistrationService;

#[cfg(feature = "http")]
use mfit_domain::config::ClientConfig;
use std::sync::Arc;

/// Registration feature state shared by the screens of an application.
#[mfit_derive::mfit_slice]
pub struct Registration {
    pub service: Arc<dyn RegistrationService>,
    pub messages: &'static Messages,
    pub terms_url: String,
}

impl Registration {
    /// Wires the slice around any service implementation.
    pub fn with_service(
        service: Arc<dyn RegistrationService>,
        locale: Locale,
        terms_url: impl Into<String>,
    ) -> Self {
        Self::new(RegistrationInner {
            service,
            messages: Messages::for_locale(locale),
            terms_url: terms_url.into(),
        })
    }

    /// A fresh, empty form using this slice's catalog.
    #[must_use]
    pub fn form(&self) -> RegistrationForm {
        RegistrationForm::new(self.messages)
    }
}

/// Builds the slice against the HTTP backend named in `config`.
///
/// # Errors
/// [`RegistrationError::Transport`] if the HTTP client cannot be built.
#[cfg(feature = "http")]
pub fn init(config: &ClientConfig) -> Result<Registration, RegistrationError> {
    let service = HttpRegistrationService::new(&config.api)?;
    tracing::info!(endpoint = service.endpoint(), locale = %config.ui.locale, "Registration slice initialized");

    Ok(Registration::with_service(Arc::new(service), config.ui.locale, config.ui.terms_url.clone()))
}
