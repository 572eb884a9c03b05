//! Classification of document store failures into user persistence errors.

use surrealdb::error::{Api, Db};
use tracing::debug;

use super::schema::EMAIL_UNIQUE_INDEX;
use crate::domain::ports::UserPersistenceError;

/// Broad category of a store failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum StoreFailureKind {
    UniqueEmail,
    Connection,
    Query,
}

/// Categorise a store error by its variant.
///
/// Only transport variants count as connection failures. Statement errors
/// from a remote server arrive as [`Api::Query`] text, which is inspected
/// solely for the email index violation.
pub(super) fn classify_store_failure(error: &surrealdb::Error) -> StoreFailureKind {
    match error {
        surrealdb::Error::Db(Db::IndexExists { index, .. }) if index == EMAIL_UNIQUE_INDEX => {
            StoreFailureKind::UniqueEmail
        }
        surrealdb::Error::Api(Api::Query(message)) => classify_remote_statement(message),
        surrealdb::Error::Api(Api::Ws(_) | Api::Http(_) | Api::ConnectionUninitialised) => {
            StoreFailureKind::Connection
        }
        _ => StoreFailureKind::Query,
    }
}

fn classify_remote_statement(message: &str) -> StoreFailureKind {
    let violation = format!("index `{EMAIL_UNIQUE_INDEX}` already contains");
    if message.contains(&violation) {
        StoreFailureKind::UniqueEmail
    } else {
        StoreFailureKind::Query
    }
}

/// Map a store error raised while operating on `email` (when known).
pub(super) fn map_store_error(
    error: &surrealdb::Error,
    email: Option<&str>,
) -> UserPersistenceError {
    debug!(?error, "document store operation failed");
    match (classify_store_failure(error), email) {
        (StoreFailureKind::UniqueEmail, Some(email)) => UserPersistenceError::duplicate_email(email),
        (StoreFailureKind::Connection, _) => UserPersistenceError::connection(error.to_string()),
        _ => UserPersistenceError::query(error.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use surrealdb::sql::Thing;

    fn index_exists(index: &str, value: &str) -> surrealdb::Error {
        surrealdb::Error::Db(Db::IndexExists {
            thing: Thing::from(("users", "abc")),
            index: index.to_owned(),
            value: value.to_owned(),
        })
    }

    #[rstest]
    #[case(index_exists(EMAIL_UNIQUE_INDEX, "'ada@example.com'"), StoreFailureKind::UniqueEmail)]
    #[case(index_exists("other_index", "'x'"), StoreFailureKind::Query)]
    #[case(
        surrealdb::Error::Api(Api::Query(
            "Database index `users_email_unique` already contains 'ada@example.com', with record `users:abc`".to_owned()
        )),
        StoreFailureKind::UniqueEmail
    )]
    #[case(surrealdb::Error::Api(Api::Ws("Connection refused".to_owned())), StoreFailureKind::Connection)]
    #[case(surrealdb::Error::Api(Api::Http("timed out".to_owned())), StoreFailureKind::Connection)]
    #[case(surrealdb::Error::Api(Api::ConnectionUninitialised), StoreFailureKind::Connection)]
    fn classifies_by_variant(#[case] error: surrealdb::Error, #[case] expected: StoreFailureKind) {
        assert_eq!(classify_store_failure(&error), expected);
    }

    #[rstest]
    #[case(surrealdb::Error::Db(Db::Thrown("connection closed by 'x'".to_owned())))]
    #[case(index_exists("other_index", "'network timeout closed'"))]
    #[case(surrealdb::Error::Api(Api::Query(
        "Found 'connect refused' for field `name`, but expected a string".to_owned()
    )))]
    fn echoed_values_never_look_like_connection_failures(#[case] error: surrealdb::Error) {
        assert_eq!(classify_store_failure(&error), StoreFailureKind::Query);
    }

    #[rstest]
    fn email_conflicts_need_the_email_being_written() {
        let error = index_exists(EMAIL_UNIQUE_INDEX, "'ada@example.com'");

        assert!(matches!(
            map_store_error(&error, Some("ada@example.com")),
            UserPersistenceError::DuplicateEmail { .. }
        ));
        assert!(matches!(
            map_store_error(&error, None),
            UserPersistenceError::Query { .. }
        ));
    }
}
