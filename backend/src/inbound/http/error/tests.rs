//! Tests for HTTP error mapping.

use super::*;
use actix_web::body::to_bytes;
use actix_web::{App, HttpResponse, test as actix_test, web};
use rstest::{fixture, rstest};

const TRACE_ID: &str = "00000000-0000-0000-0000-000000000000";

#[fixture]
fn expected_trace_id() -> String {
    TRACE_ID.to_owned()
}

async fn body_of(error: &Error) -> ErrorResponse {
    let response = ResponseError::error_response(error);
    let bytes = to_bytes(response.into_body())
        .await
        .expect("reading response body succeeds");
    serde_json::from_slice(&bytes).expect("error JSON deserialisation succeeds")
}

#[rstest]
#[case(Error::invalid_request("bad"), StatusCode::BAD_REQUEST)]
#[case(Error::internal("boom"), StatusCode::INTERNAL_SERVER_ERROR)]
fn status_code_matches_error_code(#[case] err: Error, #[case] status: StatusCode) {
    assert_eq!(ResponseError::status_code(&err), status);
}

#[rstest]
#[actix_web::test]
async fn invalid_request_message_reaches_client() {
    let body = body_of(&Error::invalid_request("Email already exists")).await;
    assert_eq!(body, ErrorResponse::new("Email already exists"));
}

#[rstest]
#[actix_web::test]
async fn internal_details_are_redacted() {
    let body = body_of(&Error::internal("connection refused by ws://db:8000")).await;
    assert_eq!(body, ErrorResponse::new(SERVER_ERROR_MESSAGE));
}

#[rstest]
#[actix_web::test]
async fn trace_id_is_echoed_as_header(expected_trace_id: String) {
    let err = Error::internal("boom").with_trace_id(expected_trace_id.clone());
    let response = ResponseError::error_response(&err);

    let header = response
        .headers()
        .get(TRACE_ID_HEADER)
        .expect("trace-id header is set by error_response")
        .to_str()
        .expect("trace-id is valid UTF-8");
    assert_eq!(header, expected_trace_id);
}

#[rstest]
fn missing_trace_id_omits_header() {
    let err = Error::invalid_request("bad");
    let response = ResponseError::error_response(&err);
    assert!(response.headers().get(TRACE_ID_HEADER).is_none());
}

#[derive(serde::Deserialize)]
struct Payload {
    #[expect(dead_code, reason = "only deserialised")]
    name: String,
}

async fn accept(_payload: web::Json<Payload>) -> HttpResponse {
    HttpResponse::Ok().finish()
}

#[rstest]
#[case::not_json("{not json", "application/json")]
#[case::wrong_shape("[1, 2, 3]", "application/json")]
#[case::wrong_content_type("name=Ada", "text/plain")]
#[actix_web::test]
async fn unreadable_json_bodies_are_bad_requests(#[case] body: &str, #[case] content_type: &str) {
    let app = actix_test::init_service(
        App::new()
            .app_data(web::JsonConfig::default().error_handler(json_error_handler))
            .route("/echo", web::post().to(accept)),
    )
    .await;

    let request = actix_test::TestRequest::post()
        .uri("/echo")
        .insert_header(("content-type", content_type))
        .set_payload(body.to_owned())
        .to_request();
    let response = actix_test::call_service(&app, request).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let payload: ErrorResponse = actix_test::read_body_json(response).await;
    assert_eq!(payload, ErrorResponse::new(INVALID_BODY_MESSAGE));
}
