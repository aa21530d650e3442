use mfit_registration::{Locale, Registration, RegistrationService};
use std::sync::Arc;

#[derive(Debug)]
struct Offline;

#[async_trait::async_trait]
impl RegistrationService for Offline {
    async fn register(
        &self,
        _payload: &mfit_registration::RegistrationPayload,
    ) -> Result<(), mfit_registration::RegistrationError> {
        Err("offline".into())
    }
}

#[test]
fn slice_handles_share_one_state() {
    let registration = Registration::with_service(Arc::new(Offline), Locale::En, "/terms");
    let copy = registration.clone();

    assert_eq!(registration, copy);
    assert_eq!(copy.messages.locale, Locale::En);
    assert_eq!(copy.terms_url, "/terms");
    assert_eq!(copy.form().submit_label(), "Create Account");
}

#[cfg(feature = "http")]
#[test]
fn init_builds_http_slice_from_config() {
    let mut config = mfit_domain::config::ClientConfig::default();
    config.ui.terms_url = "https://matfit.example/terms".to_owned();

    let registration = mfit_registration::init(&config).expect("init should succeed");
    assert_eq!(registration.messages.locale, Locale::Tr);
    assert_eq!(registration.terms_url, "https://matfit.example/terms");
}
