#![windows_subsystem = "windows"]

use mfit_desktop::DesktopApp;
use mfit_domain::config::ClientConfig;
use mfit_kernel::config::load_client_config;
use mfit_logger::Logger;

fn main() -> anyhow::Result<()> {
    let (config, load_error) = match load_client_config(std::env::var_os("MFIT_CONFIG")) {
        Ok(config) => (config, None),
        Err(err) => (ClientConfig::default(), Some(err)),
    };

    let _logger = Logger::from_config(env!("CARGO_PKG_NAME"), &config.log)?;
    if let Some(err) = load_error {
        tracing::warn!(error = %err, "Falling back to the default configuration");
    }

    let registration = mfit_registration::init(&config)?;
    DesktopApp::from_config(&config.ui, registration).launch();

    Ok(())
}
