//! Command-line arguments of `mfit-register`.

use clap::{Parser, ValueEnum};
use mfit_domain::config::Locale;
use std::path::PathBuf;

/// Every form field is a flag; omitted ones stay empty and fail validation like an
/// untouched input would.
#[derive(Debug, Parser)]
#[command(name = "mfit-register")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Create a MatFit account from the command line")]
pub(crate) struct Args {
    #[arg(long, default_value_t)]
    pub name: String,
    #[arg(long, default_value_t)]
    pub email: String,
    #[arg(long, default_value_t)]
    pub password: String,
    #[arg(long, default_value_t)]
    pub confirm_password: String,
    #[arg(long, default_value_t)]
    pub phone: String,
    /// Accept the terms and conditions
    #[arg(long)]
    pub accept_terms: bool,

    /// Config file (any format the `config` crate understands); defaults to `./client.*`
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,
    /// Language of messages, overriding `ui.locale`
    #[arg(long, value_enum)]
    pub locale: Option<LocaleArg>,
    /// Backend base URL, overriding `api.base_url`
    #[arg(long, value_name = "URL")]
    pub api: Option<String>,
    /// Log to the console
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub(crate) enum LocaleArg {
    Tr,
    En,
}

impl From<LocaleArg> for Locale {
    fn from(arg: LocaleArg) -> Self {
        match arg {
            LocaleArg::Tr => Self::Tr,
            LocaleArg::En => Self::En,
        }
    }
}
