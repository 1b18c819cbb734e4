use crate::services::registration::Registrar;
use crate::state::{Credentials, RegistrationForm, SubmissionState};

/// Drives one registration form against a backend.
pub struct SubmissionController<R> {
    registrar: R,
    form: RegistrationForm,
}

impl<R: Registrar> SubmissionController<R> {
    pub fn new(registrar: R) -> Self {
        Self {
            registrar,
            form: RegistrationForm::new(),
        }
    }

    pub fn state(&self) -> &SubmissionState {
        self.form.state()
    }

    pub fn credentials(&self) -> &Credentials {
        self.form.credentials()
    }

    pub fn set_login(&mut self, login: impl Into<String>) {
        self.form.set_login(login);
    }

    pub fn set_password(&mut self, password: impl Into<String>) {
        self.form.set_password(password);
    }

    /// Submits the current credentials and records the outcome.
    ///
    /// Does nothing while a submission is already in flight.
    pub async fn submit(&mut self) {
        let Some(credentials) = self.form.begin() else {
            tracing::debug!("Submission already in flight, ignoring");
            return;
        };
        let outcome = self
            .registrar
            .register(&credentials.login, &credentials.password)
            .await;
        self.form.finish(outcome);
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::collections::VecDeque;
    use std::future::Future;

    use super::*;
    use crate::models::RegisterResponse;
    use crate::services::registration::RegisterError;

    /// Replays canned outcomes and remembers what it was sent.
    #[derive(Default)]
    struct Scripted {
        outcomes: RefCell<VecDeque<Result<RegisterResponse, RegisterError>>>,
        sent: RefCell<Vec<Credentials>>,
    }

    impl Scripted {
        fn then(self, outcome: Result<RegisterResponse, RegisterError>) -> Self {
            self.outcomes.borrow_mut().push_back(outcome);
            self
        }
    }

    impl Registrar for &Scripted {
        fn register(
            &self,
            login: &str,
            password: &str,
        ) -> impl Future<Output = Result<RegisterResponse, RegisterError>> {
            self.sent.borrow_mut().push(Credentials::new(login, password));
            let outcome = self
                .outcomes
                .borrow_mut()
                .pop_front()
                .unwrap_or(Err(RegisterError::Network));
            async move { outcome }
        }
    }

    fn ok(message: &str) -> Result<RegisterResponse, RegisterError> {
        Ok(RegisterResponse {
            message: message.into(),
        })
    }

    #[tokio::test]
    async fn success_then_failure_shows_latest() {
        let backend = Scripted::default()
            .then(ok("user created"))
            .then(Err(RegisterError::Rejected("Login already exists".into())));
        let mut controller = SubmissionController::new(&backend);

        controller.set_login("alice");
        controller.set_password("Secret123!");
        controller.submit().await;
        assert_eq!(
            controller.state(),
            &SubmissionState::Succeeded("user created".into())
        );
        assert_eq!(controller.credentials(), &Credentials::default());

        controller.set_login("alice");
        controller.set_password("Secret123!");
        controller.submit().await;
        assert_eq!(
            controller.state(),
            &SubmissionState::Failed("Login already exists".into())
        );
        assert_eq!(controller.state().message(), None);
        assert_eq!(backend.sent.borrow().len(), 2);
    }

    #[tokio::test]
    async fn failure_then_success_shows_latest() {
        let backend = Scripted::default()
            .then(Err(RegisterError::Unrecognized))
            .then(ok("welcome"));
        let mut controller = SubmissionController::new(&backend);
        controller.set_login("bob");
        controller.set_password("hunter22");

        controller.submit().await;
        assert_eq!(controller.state().error(), Some("Registration failed"));
        assert_eq!(controller.credentials(), &Credentials::new("bob", "hunter22"));

        controller.submit().await;
        assert_eq!(controller.state(), &SubmissionState::Succeeded("welcome".into()));
        assert_eq!(controller.state().error(), None);
    }

    #[tokio::test]
    async fn sends_current_field_values() {
        let backend = Scripted::default().then(ok("ok"));
        let mut controller = SubmissionController::new(&backend);
        controller.set_login("carol");
        controller.set_password("first-pass");
        controller.set_password("second-pass");
        controller.submit().await;
        assert_eq!(
            backend.sent.borrow().as_slice(),
            &[Credentials::new("carol", "second-pass")]
        );
    }
}
