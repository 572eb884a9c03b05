//! Cross-origin policy for the public API.
//!
//! Browsers on any origin may call every route. The policy is built on
//! `actix-cors`, which answers preflight requests before they reach a handler.

use actix_cors::Cors;

/// Methods advertised in preflight responses.
pub const ALLOWED_METHODS: [&str; 6] = ["GET", "HEAD", "PUT", "PATCH", "POST", "DELETE"];

const PREFLIGHT_MAX_AGE_SECS: usize = 3600;

/// Any origin, any request header, wildcard `Access-Control-Allow-Origin`.
/// Credentials are not supported.
///
/// # Examples
/// ```
/// use actix_web::App;
/// use ecoscholar_backend::middleware::permissive_cors;
///
/// let app = App::new().wrap(permissive_cors());
/// ```
#[must_use]
pub fn permissive_cors() -> Cors {
    Cors::default()
        .allow_any_origin()
        .send_wildcard()
        .allowed_methods(ALLOWED_METHODS)
        .allow_any_header()
        .max_age(PREFLIGHT_MAX_AGE_SECS)
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::http::{Method, StatusCode};
    use actix_web::{App, HttpResponse, test, web};
    use rstest::rstest;

    const ORIGIN: &str = "http://localhost:5173";

    fn header<B>(res: &actix_web::dev::ServiceResponse<B>, name: &str) -> Option<String> {
        res.headers()
            .get(name)
            .and_then(|value| value.to_str().ok())
            .map(str::to_owned)
    }

    #[rstest]
    #[case::success(StatusCode::OK)]
    #[case::client_error(StatusCode::BAD_REQUEST)]
    #[actix_web::test]
    async fn cross_origin_responses_allow_any_origin(#[case] status: StatusCode) {
        let app = test::init_service(App::new().wrap(permissive_cors()).route(
            "/",
            web::get().to(move || async move { HttpResponse::build(status).finish() }),
        ))
        .await;

        let req = test::TestRequest::get()
            .uri("/")
            .insert_header(("origin", ORIGIN))
            .to_request();
        let res = test::call_service(&app, req).await;

        assert_eq!(res.status(), status);
        assert_eq!(header(&res, "access-control-allow-origin").as_deref(), Some("*"));
    }

    #[rstest]
    #[actix_web::test]
    async fn preflight_is_answered_without_reaching_handler() {
        let app = test::init_service(App::new().wrap(permissive_cors()).route(
            "/api/users",
            web::post().to(|| async { HttpResponse::InternalServerError().finish() }),
        ))
        .await;

        let req = test::TestRequest::default()
            .method(Method::OPTIONS)
            .uri("/api/users")
            .insert_header(("origin", ORIGIN))
            .insert_header(("access-control-request-method", "POST"))
            .insert_header(("access-control-request-headers", "content-type"))
            .to_request();
        let res = test::call_service(&app, req).await;

        assert!(res.status().is_success(), "preflight status {}", res.status());
        assert!(header(&res, "access-control-allow-origin").is_some());
        let methods = header(&res, "access-control-allow-methods").unwrap_or_default();
        for method in ["GET", "POST", "DELETE"] {
            assert!(methods.contains(method), "{method} missing from {methods}");
        }
        let allowed_headers = header(&res, "access-control-allow-headers").unwrap_or_default();
        assert!(allowed_headers.to_lowercase().contains("content-type"));
    }
}
