#[cfg(test)]
#[path = "form_test.rs"]
mod form_test;

/// Lifecycle of a single form submission.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SubmitStatus {
    #[default]
    Idle,
    Submitting,
    Succeeded,
    Failed,
}

/// Submission state shared by the signin, signup, settings, and profile
/// forms: the current [`SubmitStatus`] plus the error strings from the
/// most recent attempt.
///
/// Errors are overwritten per attempt, never merged: `begin` clears them
/// before the request goes out, and `fail` replaces them wholesale.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FormSubmission {
    pub status: SubmitStatus,
    pub errors: Vec<String>,
}

impl FormSubmission {
    /// Enter `Submitting` and discard errors from any prior attempt.
    pub fn begin(&mut self) {
        self.status = SubmitStatus::Submitting;
        self.errors.clear();
    }

    /// Terminal success transition.
    pub fn succeed(&mut self) {
        self.status = SubmitStatus::Succeeded;
        self.errors.clear();
    }

    /// Terminal failure transition carrying the display strings to render.
    pub fn fail(&mut self, errors: Vec<String>) {
        self.status = SubmitStatus::Failed;
        self.errors = errors;
    }

    pub fn is_submitting(&self) -> bool {
        self.status == SubmitStatus::Submitting
    }
}

/// The one server error string that renders with an inline signin link
/// instead of plain text.
pub fn is_existing_account_error(message: &str) -> bool {
    message == "user already exist"
}
