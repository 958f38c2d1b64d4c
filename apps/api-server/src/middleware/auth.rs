//! Caller identity extractor.
//!
//! The server sits behind an authenticating gateway which validates the
//! caller's credentials and asserts their identity in a trusted header.
//! Authentication itself happens upstream; this extractor only surfaces the
//! asserted identity to handlers that need it.

use std::future::{Ready, ready};

use actix_web::{FromRequest, HttpRequest, dev::Payload};
use helpboard_shared::ErrorResponse;

/// Header carrying the gateway-asserted caller identity.
pub const CALLER_ID_HEADER: &str = "x-caller-id";

/// Authenticated caller identity.
///
/// Use this in handlers to require an authenticated caller:
/// ```ignore
/// async fn protected_route(identity: Identity) -> impl Responder {
///     format!("Hello, {}!", identity.caller_id)
/// }
/// ```
#[derive(Debug, Clone)]
pub struct Identity {
    pub caller_id: String,
}

/// Error type for missing or unusable identity assertions.
#[derive(Debug)]
pub struct AuthenticationError;

impl std::fmt::Display for AuthenticationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Missing caller identity")
    }
}

impl actix_web::ResponseError for AuthenticationError {
    fn status_code(&self) -> actix_web::http::StatusCode {
        actix_web::http::StatusCode::UNAUTHORIZED
    }

    fn error_response(&self) -> actix_web::HttpResponse {
        let error = ErrorResponse::unauthorized()
            .with_detail("No caller identity was asserted for this request.");
        actix_web::HttpResponse::build(self.status_code()).json(error)
    }
}

impl FromRequest for Identity {
    type Error = AuthenticationError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let caller_id = req
            .headers()
            .get(CALLER_ID_HEADER)
            .and_then(|value| value.to_str().ok())
            .filter(|value| !value.is_empty())
            .map(str::to_owned);

        match caller_id {
            Some(caller_id) => ready(Ok(Identity { caller_id })),
            None => ready(Err(AuthenticationError)),
        }
    }
}
