//! `MatFit` desktop client: a Dioxus window with the registration and login pages.

mod pages;
mod routes;

pub use crate::routes::Route;

use dioxus::desktop::{Config, WindowBuilder};
use dioxus::prelude::*;
use mfit_domain::config::UiConfig;
use mfit_registration::{NoticeSlot, Registration};

const STYLE: &str = include_str!("../assets/main.css");

#[derive(Debug)]
pub struct DesktopApp {
    title: String,
    width: f64,
    height: f64,
    registration: Registration,
}

impl DesktopApp {
    #[must_use]
    pub fn new(registration: Registration) -> Self {
        let ui = UiConfig::default();
        Self { title: ui.title, width: ui.width, height: ui.height, registration }
    }

    /// Window settings from the `ui` config section.
    #[must_use]
    pub fn from_config(ui: &UiConfig, registration: Registration) -> Self {
        Self::new(registration).with_title(ui.title.clone()).with_size(ui.width, ui.height)
    }

    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    #[must_use = "This function does nothing unless you call `launch()` on it"]
    pub const fn with_size(mut self, width: f64, height: f64) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Opens the window and blocks until it is closed.
    pub fn launch(self) {
        tracing::info!(title = %self.title, "Launching desktop client");

        let window = WindowBuilder::new().with_title(&self.title).with_inner_size(
            dioxus::desktop::LogicalSize { width: self.width, height: self.height },
        );

        let cfg = Config::default().with_window(window).with_custom_head(format!(
            r#"<meta name="viewport" content="width=device-width, initial-scale=1.0"><style>{STYLE}</style>"#
        ));

        LaunchBuilder::desktop()
            .with_cfg(cfg)
            .with_context(self.registration)
            .with_context(NoticeSlot::default())
            .launch(App);
    }
}

#[component]
fn App() -> Element {
    rsx! { Router::<Route> {} }
}
