//! Maps HTTP transport failures and error statuses to `AppError`.

use reqwest::StatusCode;

use bookdesk_core::error::{AppError, ErrorKind};

use crate::dto::response::ApiErrorResponse;

/// Convert a transport-level `reqwest` error.
pub fn from_reqwest(err: reqwest::Error) -> AppError {
    if err.is_timeout() {
        AppError::with_source(ErrorKind::Timeout, "Request timed out", err)
    } else if let Some(status) = err.status() {
        let kind = kind_for_status(status);
        AppError::with_source(kind, format!("Request failed with status {status}"), err)
    } else if err.is_decode() {
        AppError::with_source(
            ErrorKind::Serialization,
            format!("Failed to decode response: {err}"),
            err,
        )
    } else {
        AppError::with_source(ErrorKind::Network, format!("Network error: {err}"), err)
    }
}

/// Build an error from a non-success status and the raw response body.
pub fn from_status(status: StatusCode, body: &str) -> AppError {
    let parsed = serde_json::from_str::<ApiErrorResponse>(body).ok();
    let message = parsed
        .and_then(|b| b.message.or(b.error))
        .filter(|m| !m.trim().is_empty())
        .unwrap_or_else(|| default_message(status));

    AppError::new(kind_for_status(status), message)
}

/// Map an HTTP status code to an error category.
pub fn kind_for_status(status: StatusCode) -> ErrorKind {
    match status {
        StatusCode::BAD_REQUEST | StatusCode::UNPROCESSABLE_ENTITY => ErrorKind::Validation,
        StatusCode::UNAUTHORIZED => ErrorKind::Authentication,
        StatusCode::FORBIDDEN => ErrorKind::Authorization,
        StatusCode::NOT_FOUND => ErrorKind::NotFound,
        StatusCode::CONFLICT => ErrorKind::Conflict,
        StatusCode::TOO_MANY_REQUESTS => ErrorKind::RateLimit,
        StatusCode::REQUEST_TIMEOUT | StatusCode::GATEWAY_TIMEOUT => ErrorKind::Timeout,
        StatusCode::SERVICE_UNAVAILABLE => ErrorKind::ServiceUnavailable,
        _ => ErrorKind::ExternalService,
    }
}

fn default_message(status: StatusCode) -> String {
    match status.canonical_reason() {
        Some(reason) => format!("{} {reason}", status.as_u16()),
        None => format!("HTTP {}", status.as_u16()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        assert_eq!(kind_for_status(StatusCode::UNAUTHORIZED), ErrorKind::Authentication);
        assert_eq!(kind_for_status(StatusCode::FORBIDDEN), ErrorKind::Authorization);
        assert_eq!(kind_for_status(StatusCode::UNPROCESSABLE_ENTITY), ErrorKind::Validation);
        assert_eq!(kind_for_status(StatusCode::GATEWAY_TIMEOUT), ErrorKind::Timeout);
        assert_eq!(kind_for_status(StatusCode::BAD_GATEWAY), ErrorKind::ExternalService);
    }

    #[test]
    fn test_body_message_wins() {
        let err = from_status(
            StatusCode::CONFLICT,
            r#"{"error":"CONFLICT","message":"Book is referenced by a quotation"}"#,
        );
        assert_eq!(err.kind, ErrorKind::Conflict);
        assert_eq!(err.message, "Book is referenced by a quotation");
    }

    #[test]
    fn test_non_json_body_falls_back_to_reason() {
        let err = from_status(StatusCode::NOT_FOUND, "<html>nope</html>");
        assert_eq!(err.kind, ErrorKind::NotFound);
        assert_eq!(err.message, "404 Not Found");
    }
}
