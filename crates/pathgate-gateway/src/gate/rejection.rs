//! Responses produced when the gate stops a request.
//!
//! Bodies are short fixed strings; collaborator error details never reach the
//! client.

use axum::{
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};

use pathgate_core::PathGateError;

pub const UNAUTHORIZED_BODY: &str = "401 - Unauthorized";
pub const BAD_REQUEST_BODY: &str = "400 - Bad Request";
pub const INTERNAL_BODY: &str = "internal server error";

fn text(status: StatusCode, body: String) -> Response {
    (
        status,
        [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
        body,
    )
        .into_response()
}

/// Response for a deny decision.
pub fn unauthorized() -> Response {
    text(StatusCode::UNAUTHORIZED, UNAUTHORIZED_BODY.to_string())
}

pub fn internal_error() -> Response {
    text(StatusCode::INTERNAL_SERVER_ERROR, INTERNAL_BODY.to_string())
}

/// Status a collaborator failure maps to. Only 4xx/5xx classifications are
/// honored; anything else would make a failed request look successful.
pub fn status_for(err: &PathGateError) -> StatusCode {
    err.status()
        .and_then(|code| StatusCode::from_u16(code).ok())
        .filter(|s| s.is_client_error() || s.is_server_error())
        .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
}

/// Response for a failed grant or path lookup.
pub fn collaborator_error(err: &PathGateError) -> Response {
    let status = status_for(err);
    let body = match status {
        StatusCode::UNAUTHORIZED => UNAUTHORIZED_BODY.to_string(),
        StatusCode::BAD_REQUEST => BAD_REQUEST_BODY.to_string(),
        StatusCode::INTERNAL_SERVER_ERROR => return internal_error(),
        other => format!(
            "{} - {}",
            other.as_u16(),
            other.canonical_reason().unwrap_or("Error")
        ),
    };
    text(status, body)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classified_statuses() {
        let e = PathGateError::BadRequest("bad path".into());
        assert_eq!(status_for(&e), StatusCode::BAD_REQUEST);

        let e = PathGateError::Status { code: 403, msg: "x".into() };
        assert_eq!(status_for(&e), StatusCode::FORBIDDEN);

        let e = PathGateError::Status { code: 503, msg: "x".into() };
        assert_eq!(status_for(&e), StatusCode::SERVICE_UNAVAILABLE);
    }

    #[test]
    fn unusable_statuses_become_internal() {
        for code in [0, 42, 200, 302, 1000] {
            let e = PathGateError::Status { code, msg: "x".into() };
            assert_eq!(status_for(&e), StatusCode::INTERNAL_SERVER_ERROR, "{code}");
        }
        let e = PathGateError::Internal("boom".into());
        assert_eq!(status_for(&e), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
