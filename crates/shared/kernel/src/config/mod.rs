use config::{Config, Environment, File};
use mfit_domain::config::ClientConfig;
use mfit_domain::constants::{CONFIG_FILE, ENV_PREFIX};
use serde::de::DeserializeOwned;
use std::borrow::Cow;
use std::path::{Path, PathBuf};
use tracing::info;

#[mfit_derive::mfit_error]
pub enum ConfigError {
    #[error("Config error{}: {source}", format_context(.context))]
    Config { source: config::ConfigError, context: Option<Cow<'static, str>> },
}

/// Loads `T` from a required file overlaid with `MFIT__`-prefixed environment variables.
///
/// Nested keys use double underscores: `MFIT__API__BASE_URL` maps to `api.base_url`.
/// Without a `path` the `client` file in the working directory is used; the extension is
/// resolved by the `config` crate (`client.toml`, `client.json`, ...).
///
/// # Errors
/// * The file cannot be found or parsed.
/// * The merged values do not deserialize into `T`.
///
/// # Example
/// ```rust
/// use mfit_kernel::config::load_config;
///
/// #[derive(Default, serde::Deserialize)]
/// struct Settings {
///     retries: u8,
/// }
///
/// let cfg: Settings = load_config(Some("config/missing")).unwrap_or_default();
/// assert_eq!(cfg.retries, 0);
/// ```
pub fn load_config<T>(path: Option<impl AsRef<Path>>) -> Result<T, ConfigError>
where
    T: DeserializeOwned,
{
    load_layered(path, env_source())
}

/// [`load_config`] specialised to the client configuration.
///
/// # Errors
/// See [`load_config`].
pub fn load_client_config(path: Option<impl AsRef<Path>>) -> Result<ClientConfig, ConfigError> {
    load_config(path)
}

fn env_source() -> Environment {
    Environment::with_prefix(ENV_PREFIX).separator("__").convert_case(config::Case::Snake)
}

fn load_layered<T>(
    path: Option<impl AsRef<Path>>,
    env: Environment,
) -> Result<T, ConfigError>
where
    T: DeserializeOwned,
{
    let effective_path =
        path.map_or_else(|| PathBuf::from(CONFIG_FILE), |p| p.as_ref().to_path_buf());

    info!("Loading config from {}", effective_path.display());

    Config::builder()
        .add_source(File::from(effective_path.as_path()).required(true))
        .add_source(env)
        .build()
        .context("Failed to build config")?
        .try_deserialize::<T>()
        .context("Failed to deserialize config")
}
