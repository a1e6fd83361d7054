//! Response shaping.
//!
//! # Responsibilities
//! - Define the static API payloads
//! - Map upstream failures to the uniform `{error}` body

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

use crate::upstream::UpstreamError;

/// Body of the API root response.
pub const WELCOME_MESSAGE: &str = "Welcome to PortFlow API";

/// Static message payload.
#[derive(Debug, Serialize)]
pub struct MessageBody {
    pub message: &'static str,
}

/// Uniform error payload relayed to API callers.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
}

/// Map an upstream failure to an API response.
///
/// Transport and status failures are reported in-band with HTTP 200 and
/// the `{error}` body; callers distinguish outcomes by the presence of
/// the `error` field, not the status code. Everything else is a
/// gateway-side failure and surfaces as HTTP 500.
pub fn upstream_error_response(err: &UpstreamError) -> Response {
    let status = match err {
        UpstreamError::Transport { .. } | UpstreamError::Status { .. } => StatusCode::OK,
        UpstreamError::Decode { .. } | UpstreamError::Build(_) => {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    };

    (
        status,
        Json(ErrorBody {
            error: err.to_string(),
        }),
    )
        .into_response()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_failures_answer_http_200() {
        let err = UpstreamError::Status {
            status: 503,
            url: "http://127.0.0.1:8001/predictions/traffic?days_ahead=7".into(),
        };
        let response = upstream_error_response(&err);
        assert_eq!(response.status(), StatusCode::OK);
    }
}
