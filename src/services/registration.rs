use std::future::Future;

use reqwest::{Client, StatusCode};

use crate::config::ApiConfig;
use crate::models::{ErrorResponse, RegisterRequest, RegisterResponse};

/// Where the register endpoint lives, relative to the base URL.
pub const REGISTER_PATH: &str = "/api/register";

/// A failed registration, already reduced to what the user should see.
///
/// `Display` yields the exact text for the error banner.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RegisterError {
    /// The backend answered with a recognizable `detail`.
    #[error("{0}")]
    Rejected(String),
    /// The backend answered, but not in a shape we understand.
    #[error("Registration failed")]
    Unrecognized,
    /// No response was received.
    #[error("Network error. Please try again.")]
    Network,
}

/// Anything that can perform one registration exchange.
pub trait Registrar {
    fn register(
        &self,
        login: &str,
        password: &str,
    ) -> impl Future<Output = Result<RegisterResponse, RegisterError>>;
}

/// HTTP client for the registration backend.
#[derive(Debug, Clone)]
pub struct RegistrationClient {
    http: Client,
    config: ApiConfig,
}

impl RegistrationClient {
    pub fn new(config: ApiConfig) -> Self {
        Self::with_client(Client::new(), config)
    }

    pub fn with_client(http: Client, config: ApiConfig) -> Self {
        Self { http, config }
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    pub async fn register(
        &self,
        login: &str,
        password: &str,
    ) -> Result<RegisterResponse, RegisterError> {
        let url = self.config.endpoint(REGISTER_PATH);
        tracing::debug!(%url, login, "Sending registration request");

        let res = self
            .http
            .post(&url)
            .json(&RegisterRequest {
                login: login.to_owned(),
                password: password.to_owned(),
            })
            .send()
            .await
            .map_err(|e| {
                tracing::error!("Registration request to {url} failed: {e}");
                RegisterError::Network
            })?;

        let status = res.status();
        let body = res.bytes().await.map_err(|e| {
            tracing::error!("Failed to read registration response body: {e}");
            RegisterError::Network
        })?;

        let outcome = interpret_response(status, &body);
        match &outcome {
            Ok(_) => tracing::info!(login, "Registration accepted"),
            Err(e) => tracing::warn!(%status, login, "Registration rejected: {e}"),
        }
        outcome
    }
}

impl Registrar for RegistrationClient {
    fn register(
        &self,
        login: &str,
        password: &str,
    ) -> impl Future<Output = Result<RegisterResponse, RegisterError>> {
        RegistrationClient::register(self, login, password)
    }
}

/// Maps a received response onto the registration outcome.
pub fn interpret_response(
    status: StatusCode,
    body: &[u8],
) -> Result<RegisterResponse, RegisterError> {
    if status.is_success() {
        return serde_json::from_slice::<RegisterResponse>(body)
            .map_err(|_| RegisterError::Unrecognized);
    }

    serde_json::from_slice::<ErrorResponse>(body)
        .ok()
        .and_then(|e| e.detail)
        .and_then(|detail| detail.text())
        .map_or(Err(RegisterError::Unrecognized), |text| {
            Err(RegisterError::Rejected(text))
        })
}
