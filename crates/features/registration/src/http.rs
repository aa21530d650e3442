use crate::error::{RegistrationError, RegistrationErrorExt};
use crate::input::RegistrationPayload;
use crate::service::RegistrationService;
use async_trait::async_trait;
use mfit_domain::config::ApiConfig;
use tracing::{debug, instrument};

/// Error body the backend sends with a failed registration.
#[mfit_derive::api_model(deny_unknown_fields = false)]
struct ErrorBody {
    #[serde(default)]
    message: Option<String>,
}

/// Posts the payload as JSON to the configured registration endpoint.
#[derive(Debug, Clone)]
pub struct HttpRegistrationService {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpRegistrationService {
    /// # Errors
    /// [`RegistrationError::Transport`] if the HTTP client cannot be built.
    pub fn new(api: &ApiConfig) -> Result<Self, RegistrationError> {
        let client = reqwest::Client::builder()
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self::with_client(client, api.register_url()))
    }

    #[must_use]
    pub fn with_client(client: reqwest::Client, endpoint: impl Into<String>) -> Self {
        Self { client, endpoint: endpoint.into() }
    }

    #[must_use]
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl RegistrationService for HttpRegistrationService {
    #[instrument(skip_all, fields(endpoint = %self.endpoint))]
    async fn register(&self, payload: &RegistrationPayload) -> Result<(), RegistrationError> {
        let response = self
            .client
            .post(&self.endpoint)
            .json(payload)
            .send()
            .await
            .context("Failed to reach the registration endpoint")?;

        let status = response.status();
        debug!(%status, "Registration endpoint answered");
        if status.is_success() {
            return Ok(());
        }

        // A body that is missing or not JSON still counts as a rejection, just without a message.
        let message = response
            .json::<ErrorBody>()
            .await
            .ok()
            .and_then(|body| body.message)
            .filter(|message| !message.trim().is_empty());

        Err(RegistrationError::rejected(status.as_u16(), message))
    }
}
