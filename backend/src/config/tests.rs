//! Unit tests for settings parsing.

use super::*;
use crate::outbound::persistence::{STORE_DATABASE, STORE_NAMESPACE};
use mockable::MockEnv;
use rstest::rstest;
use std::collections::HashMap;

fn mock_env(vars: &[(&str, &str)]) -> MockEnv {
    let vars: HashMap<String, String> = vars
        .iter()
        .map(|(key, value)| ((*key).to_owned(), (*value).to_owned()))
        .collect();
    let mut env = MockEnv::new();
    env.expect_string()
        .times(0..)
        .returning(move |key| vars.get(key).cloned());
    env
}

#[rstest]
fn defaults_apply_when_unset() {
    let settings = settings_from_env(&mock_env(&[])).expect("defaults are valid");

    assert_eq!(settings.port, DEFAULT_PORT);
    assert_eq!(settings.store.url(), DEFAULT_DATABASE_URL);
    assert_eq!(settings.store.namespace(), STORE_NAMESPACE);
    assert_eq!(settings.store.database(), STORE_DATABASE);
    assert!(!settings.store.has_credentials());
}

#[rstest]
fn explicit_values_are_used() {
    let env = mock_env(&[
        (DATABASE_URL_ENV, "wss://db.example.com"),
        (DATABASE_USER_ENV, "root"),
        (DATABASE_PASSWORD_ENV, "hunter2"),
        (PORT_ENV, "8080"),
    ]);

    let settings = settings_from_env(&env).expect("valid settings");

    assert_eq!(settings.port, 8080);
    assert_eq!(settings.store.url(), "wss://db.example.com");
    assert!(settings.store.has_credentials());
}

#[rstest]
#[case("")]
#[case("   ")]
fn blank_values_fall_back_to_defaults(#[case] blank: &str) {
    let env = mock_env(&[(DATABASE_URL_ENV, blank), (PORT_ENV, blank)]);

    let settings = settings_from_env(&env).expect("blank values fall back");

    assert_eq!(settings.port, DEFAULT_PORT);
    assert_eq!(settings.store.url(), DEFAULT_DATABASE_URL);
}

#[rstest]
#[case("abc")]
#[case("70000")]
#[case("-1")]
fn invalid_port_is_rejected(#[case] raw: &str) {
    let err = settings_from_env(&mock_env(&[(PORT_ENV, raw)])).expect_err("port must be rejected");

    assert!(matches!(err, ConfigError::InvalidEnv { name: PORT_ENV, .. }));
}

#[rstest]
fn url_without_scheme_is_rejected() {
    let err = settings_from_env(&mock_env(&[(DATABASE_URL_ENV, "localhost:8000")]))
        .expect_err("scheme is required");

    assert!(matches!(err, ConfigError::InvalidEnv { name: DATABASE_URL_ENV, .. }));
}

#[rstest]
#[case(&[(DATABASE_USER_ENV, "root")], DATABASE_USER_ENV, DATABASE_PASSWORD_ENV)]
#[case(&[(DATABASE_PASSWORD_ENV, "hunter2")], DATABASE_PASSWORD_ENV, DATABASE_USER_ENV)]
fn half_credentials_are_rejected(
    #[case] vars: &[(&str, &str)],
    #[case] present: &'static str,
    #[case] missing: &'static str,
) {
    let err = settings_from_env(&mock_env(vars)).expect_err("credentials must pair");

    assert_eq!(err, ConfigError::IncompleteCredentials { present, missing });
}

#[rstest]
fn invalid_url_error_hides_credentials() {
    let err = settings_from_env(&mock_env(&[(DATABASE_URL_ENV, "root:hunter2@db")]))
        .expect_err("scheme is required");

    assert!(!err.to_string().contains("hunter2"));
}
