#![allow(dead_code)]

use async_trait::async_trait;
use mfit_registration::{
    Destination, Field, Navigator, Notice, RegistrationError, RegistrationForm, RegistrationInput,
    RegistrationPayload, RegistrationService,
};
use parking_lot::Mutex;

#[derive(Debug, Clone)]
pub enum Reply {
    Accept,
    Reject { status: u16, message: Option<String> },
}

/// Records every payload and answers with a fixed reply.
#[derive(Debug)]
pub struct RecordingService {
    reply: Reply,
    calls: Mutex<Vec<RegistrationPayload>>,
}

impl RecordingService {
    pub fn new(reply: Reply) -> Self {
        Self { reply, calls: Mutex::new(Vec::new()) }
    }

    pub fn calls(&self) -> Vec<RegistrationPayload> {
        self.calls.lock().clone()
    }
}

#[async_trait]
impl RegistrationService for RecordingService {
    async fn register(&self, payload: &RegistrationPayload) -> Result<(), RegistrationError> {
        self.calls.lock().push(payload.clone());
        match &self.reply {
            Reply::Accept => Ok(()),
            Reply::Reject { status, message } => {
                Err(RegistrationError::rejected(*status, message.clone()))
            },
        }
    }
}

#[derive(Debug, Default)]
pub struct RecordingNavigator {
    visits: Mutex<Vec<(Destination, Option<Notice>)>>,
}

impl RecordingNavigator {
    pub fn visits(&self) -> Vec<(Destination, Option<Notice>)> {
        self.visits.lock().clone()
    }
}

impl Navigator for RecordingNavigator {
    fn navigate(&self, destination: Destination, notice: Option<Notice>) {
        self.visits.lock().push((destination, notice));
    }
}

/// The valid input of scenario A.
pub fn scenario_a() -> RegistrationInput {
    RegistrationInput {
        name: "Al".to_owned(),
        email: "a@b.com".to_owned(),
        password: "secret".to_owned(),
        confirm_password: "secret".to_owned(),
        phone: "5551234567".to_owned(),
        terms_accepted: true,
    }
}

/// Types `input` into `form` field by field.
pub fn fill(form: &mut RegistrationForm, input: &RegistrationInput) {
    for field in Field::all().filter(|field| field.is_text()) {
        form.change_text(field, input.text(field).unwrap_or_default());
    }
    form.set_terms(input.terms_accepted);
}
