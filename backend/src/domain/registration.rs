//! Registration input.
//!
//! Keeps inbound payload parsing outside the domain: handlers turn raw request
//! fields into a [`UserRegistration`] before talking to a port.

use std::fmt;

use zeroize::Zeroizing;

/// Error returned when a registration lacks a field the record schema
/// requires.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum RegistrationValidationError {
    /// `name` was absent or empty.
    #[error("name is required")]
    MissingName,
    /// `email` was absent or empty.
    #[error("email is required")]
    MissingEmail,
    /// `password` was absent or empty.
    #[error("password is required")]
    MissingPassword,
}

/// Validated registration request.
///
/// ## Invariants
/// - `name`, `email`, and `password` are present and non-empty. Values are
///   otherwise kept exactly as submitted: no trimming, case folding, or format
///   checks.
/// - The password is held in a zeroising buffer and never printed by `Debug`.
///
/// # Examples
/// ```
/// use ecoscholar_backend::domain::UserRegistration;
///
/// let registration =
///     UserRegistration::try_from_parts(Some("Ada"), Some("ada@example.com"), Some("secret"))
///         .expect("complete registration");
/// assert_eq!(registration.email(), "ada@example.com");
/// assert!(!format!("{registration:?}").contains("secret"));
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct UserRegistration {
    name: String,
    email: String,
    password: Zeroizing<String>,
}

fn required(
    value: Option<&str>,
    missing: RegistrationValidationError,
) -> Result<&str, RegistrationValidationError> {
    match value {
        Some(value) if !value.is_empty() => Ok(value),
        _ => Err(missing),
    }
}

impl UserRegistration {
    /// Construct a registration from optional raw inputs.
    pub fn try_from_parts(
        name: Option<&str>,
        email: Option<&str>,
        password: Option<&str>,
    ) -> Result<Self, RegistrationValidationError> {
        let name = required(name, RegistrationValidationError::MissingName)?;
        let email = required(email, RegistrationValidationError::MissingEmail)?;
        let password = required(password, RegistrationValidationError::MissingPassword)?;

        Ok(Self {
            name: name.to_owned(),
            email: email.to_owned(),
            password: Zeroizing::new(password.to_owned()),
        })
    }

    /// Display name to store.
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// E-mail address to store; uniqueness is checked against this value.
    pub fn email(&self) -> &str {
        self.email.as_str()
    }

    /// Password value exactly as the client submitted it.
    pub fn password(&self) -> &str {
        self.password.as_str()
    }
}

impl fmt::Debug for UserRegistration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UserRegistration")
            .field("name", &self.name)
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}
