mod registration;

pub use registration::{Detail, ErrorResponse, FieldError, RegisterRequest, RegisterResponse};
