//! Tests for domain error construction and trace capture.

use super::*;
use rstest::rstest;

const TRACE_ID: &str = "00000000-0000-0000-0000-000000000000";

#[rstest]
#[case(Error::invalid_request("bad"), ErrorCode::InvalidRequest)]
#[case(Error::internal("boom"), ErrorCode::InternalError)]
fn constructors_set_code(#[case] error: Error, #[case] expected: ErrorCode) {
    assert_eq!(error.code(), expected);
}

#[rstest]
fn trace_id_is_none_out_of_scope() {
    let error = Error::internal("boom");
    assert!(error.trace_id().is_none());
}

#[tokio::test]
async fn captures_trace_id_in_scope() {
    let trace_id: TraceId = TRACE_ID.parse().expect("valid uuid");
    let error = trace_id.in_scope(async { Error::internal("boom") }).await;
    assert_eq!(error.trace_id(), Some(TRACE_ID));
}

#[rstest]
fn with_trace_id_overrides_captured_value() {
    let error = Error::invalid_request("bad").with_trace_id("abc");
    assert_eq!(error.trace_id(), Some("abc"));
}

#[rstest]
fn display_uses_message() {
    assert_eq!(Error::internal("store offline").to_string(), "store offline");
}
