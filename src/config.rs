/// Base URL used when none is configured
pub const DEFAULT_API_URL: &str = "http://localhost:8000";

/// Where the registration backend lives
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    pub base_url: String,
}

impl ApiConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    /// Uses `API_URL` as set when the crate was compiled.
    ///
    /// The browser build has no process environment, so the value is baked in.
    pub fn from_build_env() -> Self {
        Self::from_optional(option_env!("API_URL"))
    }

    pub fn from_optional(base_url: Option<&str>) -> Self {
        match base_url.map(str::trim).filter(|url| !url.is_empty()) {
            Some(url) => Self::new(url),
            None => Self::default(),
        }
    }

    /// Full URL of an API path, without doubling the separator.
    pub fn endpoint(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::new(DEFAULT_API_URL)
    }
}
