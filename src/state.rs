use crate::models::RegisterResponse;
use crate::services::registration::RegisterError;

/// Login and password as currently entered
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Credentials {
    pub login: String,
    pub password: String,
}

impl Credentials {
    pub fn new(login: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            login: login.into(),
            password: password.into(),
        }
    }

    pub fn clear(&mut self) {
        self.login.clear();
        self.password.clear();
    }
}

/// Where the form is in its submission lifecycle
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SubmissionState {
    #[default]
    Idle,
    Submitting,
    Succeeded(String),
    Failed(String),
}

impl SubmissionState {
    pub fn is_submitting(&self) -> bool {
        matches!(self, SubmissionState::Submitting)
    }

    pub fn message(&self) -> Option<&str> {
        match self {
            SubmissionState::Succeeded(message) => Some(message.as_str()),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            SubmissionState::Failed(text) => Some(text.as_str()),
            _ => None,
        }
    }
}

/// Form contents plus lifecycle state.
///
/// A submission is `begin` followed by `finish` with the client's outcome.
/// Nothing else changes `state`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegistrationForm {
    credentials: Credentials,
    state: SubmissionState,
}

impl RegistrationForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    pub fn state(&self) -> &SubmissionState {
        &self.state
    }

    pub fn is_submitting(&self) -> bool {
        self.state.is_submitting()
    }

    pub fn set_login(&mut self, login: impl Into<String>) {
        self.credentials.login = login.into();
    }

    pub fn set_password(&mut self, password: impl Into<String>) {
        self.credentials.password = password.into();
    }

    /// Drops the previous outcome and marks a submission in flight.
    ///
    /// Returns the credentials to send, or `None` if one is already in flight.
    pub fn begin(&mut self) -> Option<Credentials> {
        if self.is_submitting() {
            return None;
        }
        self.state = SubmissionState::Submitting;
        Some(self.credentials.clone())
    }

    /// Records the outcome of the in-flight submission.
    pub fn finish(&mut self, outcome: Result<RegisterResponse, RegisterError>) {
        self.state = match outcome {
            Ok(res) => {
                self.credentials.clear();
                SubmissionState::Succeeded(res.message)
            }
            Err(e) => SubmissionState::Failed(e.to_string()),
        };
    }
}
