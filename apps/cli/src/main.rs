#![allow(clippy::print_stderr, clippy::print_stdout)]

mod args;

use crate::args::Args;
use anyhow::Result;
use clap::Parser;
use mfit_domain::config::ClientConfig;
use mfit_kernel::config::load_client_config;
use mfit_logger::Logger;
use mfit_registration::{
    Destination, Field, FieldErrors, HttpRegistrationService, Messages, Navigator, Notice,
    RegistrationForm, SubmitOutcome, SubmitRejected,
};
use std::process::ExitCode;
use tracing::warn;

const EXIT_SUBMIT_FAILED: u8 = 1;
const EXIT_INVALID: u8 = 2;

/// Prints where the user should continue.
#[derive(Debug)]
struct ConsoleNavigator;

impl Navigator for ConsoleNavigator {
    fn navigate(&self, destination: Destination, notice: Option<Notice>) {
        if let Some(notice) = notice {
            println!("{notice}");
        }
        println!("Continue at {}", destination.route());
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<ExitCode> {
    let args = Args::parse();

    let (mut config, load_error) = match load_client_config(args.config.as_deref()) {
        Ok(config) => (config, None),
        Err(err) => (ClientConfig::default(), Some(err)),
    };
    if let Some(locale) = args.locale {
        config.ui.locale = locale.into();
    }
    if let Some(api) = &args.api {
        config.api.base_url.clone_from(api);
    }
    config.log.console = args.verbose;

    let _logger = (config.log.console || config.log.directory.is_some())
        .then(|| Logger::from_config(env!("CARGO_BIN_NAME"), &config.log))
        .transpose()?;
    if let Some(err) = load_error {
        warn!(error = %err, "Falling back to the default configuration");
    }

    let mut form = RegistrationForm::new(Messages::for_locale(config.ui.locale));
    form.change_text(Field::Name, args.name);
    form.change_text(Field::Email, args.email);
    form.change_text(Field::Password, args.password);
    form.change_text(Field::ConfirmPassword, args.confirm_password);
    form.change_text(Field::Phone, args.phone);
    form.set_terms(args.accept_terms);

    let service = HttpRegistrationService::new(&config.api)?;

    let code = match form.submit(&service, &ConsoleNavigator).await {
        Ok(SubmitOutcome::Registered(_)) => ExitCode::SUCCESS,
        Ok(SubmitOutcome::Failed(message)) => {
            eprintln!("{message}");
            ExitCode::from(EXIT_SUBMIT_FAILED)
        },
        Err(SubmitRejected::Invalid(errors)) => {
            report(&errors);
            ExitCode::from(EXIT_INVALID)
        },
        Err(SubmitRejected::Busy) => ExitCode::from(EXIT_SUBMIT_FAILED),
    };

    Ok(code)
}

fn report(errors: &FieldErrors) {
    for (field, error) in errors.iter() {
        eprintln!("{field}: {error}");
    }
}
