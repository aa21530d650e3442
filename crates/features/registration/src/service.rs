use crate::error::RegistrationError;
use crate::input::RegistrationPayload;
use async_trait::async_trait;
use std::fmt::Debug;

/// Backend that creates the account.
///
/// The form calls it at most once per accepted submit and never retries.
#[async_trait]
pub trait RegistrationService: Debug + Send + Sync {
    /// # Errors
    /// [`RegistrationError::Rejected`] when the backend refused the registration;
    /// any other variant when no answer was obtained.
    async fn register(&self, payload: &RegistrationPayload) -> Result<(), RegistrationError>;
}
