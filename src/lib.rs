pub mod app;
pub mod components;
pub mod config;
pub mod controller;
pub mod models;
pub mod services;
pub mod state;
pub mod validation;

// Re-export for convenience
pub use app::App;
pub use controller::SubmissionController;
pub use services::registration::{RegisterError, Registrar, RegistrationClient};
