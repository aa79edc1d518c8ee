//! Cleanup policy evaluation

use scopedir_config::Cleanup;

/// How the owning scope ended, as seen when cleanup runs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Success,
    Failure,
}

impl Outcome {
    /// Outcome of the current scope.
    ///
    /// Failure when the handle was explicitly marked failed or when the
    /// thread is unwinding from a panic.
    #[must_use]
    pub fn observe(marked_failed: bool) -> Self {
        if marked_failed || std::thread::panicking() {
            Self::Failure
        } else {
            Self::Success
        }
    }
}

/// What cleanup does with an existing directory
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    Remove,
    Keep,
}

#[must_use]
pub fn decide(cleanup: Cleanup, outcome: Outcome) -> Decision {
    match (cleanup, outcome) {
        (Cleanup::Always, _) | (Cleanup::OnSuccess, Outcome::Success) => Decision::Remove,
        (Cleanup::OnSuccess, Outcome::Failure) | (Cleanup::Never, _) => Decision::Keep,
    }
}
