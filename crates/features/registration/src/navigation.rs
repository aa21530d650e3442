use mfit_domain::constants::{LOGIN_ROUTE, REGISTER_ROUTE};
use parking_lot::Mutex;
use std::fmt;
use std::sync::Arc;
use strum_macros::Display;

/// Pages the registration flow can send the user to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum Destination {
    Register,
    Login,
}

impl Destination {
    #[must_use]
    pub const fn route(self) -> &'static str {
        match self {
            Self::Register => REGISTER_ROUTE,
            Self::Login => LOGIN_ROUTE,
        }
    }
}

/// One-time message for the destination page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice(String);

impl Notice {
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    #[must_use]
    pub fn text(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Moves the user between pages.
pub trait Navigator: fmt::Debug {
    fn navigate(&self, destination: Destination, notice: Option<Notice>);
}

/// Hands a notice to the next page; whoever takes it first consumes it.
#[derive(Debug, Clone, Default)]
pub struct NoticeSlot(Arc<Mutex<Option<Notice>>>);

impl NoticeSlot {
    /// Stores `notice`, replacing one that was never taken.
    pub fn put(&self, notice: Notice) {
        *self.0.lock() = Some(notice);
    }

    #[must_use]
    pub fn take(&self) -> Option<Notice> {
        self.0.lock().take()
    }
}

impl PartialEq for NoticeSlot {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}
