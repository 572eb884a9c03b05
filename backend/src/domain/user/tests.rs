//! Tests for user identifiers and the listing projection.

use super::*;
use chrono::TimeZone;
use rstest::rstest;
use serde_json::{Value, json};

fn sample_user() -> User {
    let created = Utc
        .with_ymd_and_hms(2024, 5, 1, 9, 30, 0)
        .single()
        .expect("valid timestamp");
    User::new(
        UserId::new("3fa85f64-5717-4562-b3fc-2c963f66afa6").expect("valid id"),
        "Ada",
        "ada@example.com",
        created,
        created,
    )
}

#[rstest]
#[case("")]
#[case("   ")]
fn user_id_rejects_blank_values(#[case] raw: &str) {
    assert_eq!(UserId::new(raw), Err(UserValidationError::EmptyId));
}

#[rstest]
fn random_ids_are_distinct() {
    assert_ne!(UserId::random(), UserId::random());
}

#[rstest]
fn user_id_deserialisation_validates() {
    let result: Result<UserId, _> = serde_json::from_value(json!(""));
    assert!(result.is_err());
}

#[rstest]
fn user_serialises_with_camel_case_fields_and_no_password() {
    let value = serde_json::to_value(sample_user()).expect("serialise user");
    let object = value.as_object().expect("object payload");

    let mut keys: Vec<&str> = object.keys().map(String::as_str).collect();
    keys.sort_unstable();
    assert_eq!(keys, ["createdAt", "email", "id", "name", "updatedAt"]);
    assert_eq!(
        object.get("createdAt").and_then(Value::as_str),
        Some("2024-05-01T09:30:00.000Z")
    );
}

#[rstest]
fn user_round_trips_through_json() {
    let user = sample_user();
    let encoded = serde_json::to_string(&user).expect("serialise");
    let decoded: User = serde_json::from_str(&encoded).expect("deserialise");
    assert_eq!(decoded, user);
}
