//! Environment-driven application settings.
//!
//! Values are read through [`mockable::Env`] so parsing can be tested without
//! touching the process environment.

use mockable::Env;
use tracing::warn;

use crate::outbound::persistence::{StoreConfig, sanitize_url};

const DATABASE_URL_ENV: &str = "DATABASE_URL";
const DATABASE_USER_ENV: &str = "DATABASE_USER";
const DATABASE_PASSWORD_ENV: &str = "DATABASE_PASSWORD";
const PORT_ENV: &str = "PORT";

/// Store URL used when `DATABASE_URL` is unset.
pub const DEFAULT_DATABASE_URL: &str = "ws://127.0.0.1:8000";
/// Listening port used when `PORT` is unset.
pub const DEFAULT_PORT: u16 = 5000;

/// Errors raised while reading settings.
#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// A variable is present but contains an invalid value.
    #[error("invalid value for {name}='{value}'; expected {expected}")]
    InvalidEnv {
        name: &'static str,
        value: String,
        expected: &'static str,
    },
    /// Only one half of the store credentials was supplied.
    #[error("{present} is set but {missing} is not; set both or neither")]
    IncompleteCredentials {
        present: &'static str,
        missing: &'static str,
    },
}

/// Validated process settings.
#[derive(Debug, Clone)]
pub struct AppSettings {
    /// Document store connection settings.
    pub store: StoreConfig,
    /// TCP port bound on all interfaces.
    pub port: u16,
}

fn non_empty(env: &impl Env, name: &str) -> Option<String> {
    env.string(name).filter(|value| !value.trim().is_empty())
}

fn parse_port(env: &impl Env) -> Result<u16, ConfigError> {
    match non_empty(env, PORT_ENV) {
        None => Ok(DEFAULT_PORT),
        Some(raw) => raw
            .trim()
            .parse::<u16>()
            .map_err(|_| ConfigError::InvalidEnv {
                name: PORT_ENV,
                value: raw,
                expected: "an integer between 0 and 65535",
            }),
    }
}

fn parse_store(env: &impl Env) -> Result<StoreConfig, ConfigError> {
    let url = non_empty(env, DATABASE_URL_ENV).unwrap_or_else(|| {
        warn!(default = DEFAULT_DATABASE_URL, "DATABASE_URL unset; using default");
        DEFAULT_DATABASE_URL.to_owned()
    });
    if !url.contains("://") {
        return Err(ConfigError::InvalidEnv {
            name: DATABASE_URL_ENV,
            value: sanitize_url(&url),
            expected: "a URL such as ws://host:8000 or mem://",
        });
    }

    let config = StoreConfig::new(url);
    match (
        non_empty(env, DATABASE_USER_ENV),
        env.string(DATABASE_PASSWORD_ENV),
    ) {
        (Some(user), Some(password)) => Ok(config.with_credentials(user, password)),
        (None, None) => Ok(config),
        (Some(_), None) => Err(ConfigError::IncompleteCredentials {
            present: DATABASE_USER_ENV,
            missing: DATABASE_PASSWORD_ENV,
        }),
        (None, Some(_)) => Err(ConfigError::IncompleteCredentials {
            present: DATABASE_PASSWORD_ENV,
            missing: DATABASE_USER_ENV,
        }),
    }
}

/// Read settings from `env`.
///
/// # Errors
/// Returns [`ConfigError`] for unparsable values or half-supplied
/// credentials.
///
/// # Examples
/// ```
/// use ecoscholar_backend::config::{DEFAULT_PORT, settings_from_env};
/// use mockable::MockEnv;
///
/// let mut env = MockEnv::new();
/// env.expect_string().returning(|_| None);
/// let settings = settings_from_env(&env).expect("defaults are valid");
/// assert_eq!(settings.port, DEFAULT_PORT);
/// ```
pub fn settings_from_env(env: &impl Env) -> Result<AppSettings, ConfigError> {
    Ok(AppSettings {
        store: parse_store(env)?,
        port: parse_port(env)?,
    })
}

#[cfg(test)]
mod tests;
