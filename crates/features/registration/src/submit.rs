use crate::input::RegistrationPayload;
use crate::navigation::Notice;
use crate::rules::FieldErrors;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use strum_macros::Display;

/// Where the form is in its submission lifecycle.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Display)]
pub enum SubmissionPhase {
    #[default]
    Idle,
    Submitting,
    Registered,
    /// Editable again, with the top-level error set.
    Failed,
}

/// Single-flight flag shared by a form and the guard of its in-flight submission.
#[derive(Debug, Default)]
pub(crate) struct SubmitLatch(Arc<AtomicBool>);

impl SubmitLatch {
    pub(crate) fn try_acquire(&self) -> Option<SubmitGuard> {
        self.0
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| SubmitGuard { flag: Arc::clone(&self.0) })
    }

    pub(crate) fn is_held(&self) -> bool {
        self.0.load(Ordering::Acquire)
    }
}

/// Holds the submitting flag; released when dropped.
#[derive(Debug)]
pub struct SubmitGuard {
    flag: Arc<AtomicBool>,
}

impl Drop for SubmitGuard {
    fn drop(&mut self) {
        self.flag.store(false, Ordering::Release);
    }
}

/// Permission to make exactly one registration call.
///
/// Returned by [`RegistrationForm::begin_submit`](crate::RegistrationForm::begin_submit)
/// and handed back to
/// [`RegistrationForm::finish_submit`](crate::RegistrationForm::finish_submit).
#[derive(Debug)]
#[must_use = "Dropping the ticket releases the form without recording an outcome"]
pub struct SubmitTicket {
    payload: RegistrationPayload,
    guard: SubmitGuard,
}

impl SubmitTicket {
    pub(crate) const fn new(payload: RegistrationPayload, guard: SubmitGuard) -> Self {
        Self { payload, guard }
    }

    #[must_use]
    pub const fn payload(&self) -> &RegistrationPayload {
        &self.payload
    }

    pub(crate) fn release(self) {
        drop(self.guard);
    }
}

/// Why a submit attempt did not reach the registration service.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SubmitRejected {
    #[error("Form has invalid fields")]
    Invalid(FieldErrors),
    #[error("A submission is already in flight")]
    Busy,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    Registered(Notice),
    /// Carries the message now shown as the top-level error.
    Failed(String),
}
