//! Advisory field constraints.
//!
//! The browser enforces these through native input attributes; the terminal
//! front end checks them here. The backend remains the authority and may
//! still reject input that passes.

use thiserror::Error;

pub const LOGIN_MIN_LEN: usize = 3;
pub const LOGIN_MAX_LEN: usize = 32;
pub const PASSWORD_MIN_LEN: usize = 8;

/// HTML `pattern` attribute for the login input
pub const LOGIN_PATTERN: &str = "[a-zA-Z0-9._-]+";

pub const LOGIN_HINT: &str = "3-32 chars, letters/numbers/._-";
pub const PASSWORD_HINT: &str = "Min 8 chars, uppercase, lowercase, digit, special";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConstraintViolation {
    #[error("Login must be at least 3 characters")]
    LoginTooShort,
    #[error("Login must be at most 32 characters")]
    LoginTooLong,
    #[error("Login may only contain letters, numbers, dots, underscores, or hyphens")]
    LoginCharacters,
    #[error("Password must be at least 8 characters")]
    PasswordTooShort,
}

/// Length in UTF-16 code units, as `minlength`/`maxlength` measure it
fn input_len(value: &str) -> usize {
    value.encode_utf16().count()
}

fn is_login_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-')
}

pub fn check_login(login: &str) -> Result<(), ConstraintViolation> {
    let len = input_len(login);
    if len < LOGIN_MIN_LEN {
        return Err(ConstraintViolation::LoginTooShort);
    }
    if len > LOGIN_MAX_LEN {
        return Err(ConstraintViolation::LoginTooLong);
    }
    if !login.chars().all(is_login_char) {
        return Err(ConstraintViolation::LoginCharacters);
    }
    Ok(())
}

pub fn check_password(password: &str) -> Result<(), ConstraintViolation> {
    if input_len(password) < PASSWORD_MIN_LEN {
        return Err(ConstraintViolation::PasswordTooShort);
    }
    Ok(())
}

/// First violated constraint, login checked before password.
pub fn check(login: &str, password: &str) -> Result<(), ConstraintViolation> {
    check_login(login)?;
    check_password(password)
}
