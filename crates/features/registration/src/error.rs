use std::borrow::Cow;

/// Failures reported by a [`RegistrationService`](crate::RegistrationService).
#[mfit_derive::mfit_error]
pub enum RegistrationError {
    /// The backend answered with a non-success status.
    #[error("Registration rejected with status {status}{}: {}", format_context(.context), describe(.message))]
    Rejected { status: u16, message: Option<String>, context: Option<Cow<'static, str>> },

    /// The request never produced a response (DNS, connect, TLS, body decoding).
    #[cfg(feature = "http")]
    #[error("Registration request failed{}: {source}", format_context(.context))]
    Transport { source: reqwest::Error, context: Option<Cow<'static, str>> },

    #[error("Internal registration error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

impl RegistrationError {
    /// A rejection carrying whatever message the backend supplied.
    #[must_use]
    pub const fn rejected(status: u16, message: Option<String>) -> Self {
        Self::Rejected { status, message, context: None }
    }

    /// The human readable message supplied by the backend, if it sent a non-blank one.
    #[must_use]
    pub fn server_message(&self) -> Option<&str> {
        match self {
            Self::Rejected { message: Some(message), .. } if !message.trim().is_empty() => {
                Some(message.as_str())
            },
            _ => None,
        }
    }
}

fn describe(message: &Option<String>) -> &str {
    message.as_deref().unwrap_or("no message")
}
