use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::models::ErrorResponse;

#[derive(Debug, thiserror::Error)]
pub enum LeadError {
    #[error("Method not allowed")]
    MethodNotAllowed,
    #[error("{reason}")]
    InvalidBody {
        reason: &'static str,
        details: Option<String>,
    },
    #[error("Missing required fields: {0}")]
    MissingFields(&'static str),
    #[error("Invalid phone number format")]
    InvalidPhoneFormat,
    #[error("Failed to send message to Telegram")]
    RelayUnreachable(String),
    #[error("Telegram API error")]
    RelayRejected(String),
    #[error("Internal server error")]
    InternalError(String),
}

impl LeadError {
    pub fn invalid_body(reason: &'static str) -> Self {
        LeadError::InvalidBody {
            reason,
            details: None,
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            LeadError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            LeadError::InvalidBody { .. }
            | LeadError::MissingFields(_)
            | LeadError::InvalidPhoneFormat => StatusCode::BAD_REQUEST,
            LeadError::RelayUnreachable(_)
            | LeadError::RelayRejected(_)
            | LeadError::InternalError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Stable name used in logs.
    pub fn kind(&self) -> &'static str {
        match self {
            LeadError::MethodNotAllowed => "method_not_allowed",
            LeadError::InvalidBody { .. } => "invalid_body",
            LeadError::MissingFields(_) => "missing_fields",
            LeadError::InvalidPhoneFormat => "invalid_phone_format",
            LeadError::RelayUnreachable(_) => "relay_unreachable",
            LeadError::RelayRejected(_) => "relay_rejected",
            LeadError::InternalError(_) => "internal_error",
        }
    }

    pub fn details(&self) -> Option<&str> {
        match self {
            LeadError::InvalidBody { details, .. } => details.as_deref(),
            LeadError::RelayUnreachable(details)
            | LeadError::RelayRejected(details)
            | LeadError::InternalError(details) => Some(details.as_str()),
            _ => None,
        }
    }
}

impl IntoResponse for LeadError {
    fn into_response(self) -> Response {
        let body = ErrorResponse {
            success: false,
            error: self.to_string(),
            details: self.details().map(str::to_string),
        };
        (self.status(), Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_errors_are_client_errors() {
        assert_eq!(LeadError::MethodNotAllowed.status(), StatusCode::METHOD_NOT_ALLOWED);
        assert_eq!(
            LeadError::invalid_body("Invalid request body").status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            LeadError::MissingFields("name or phone").status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(LeadError::InvalidPhoneFormat.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn relay_errors_carry_details() {
        let err = LeadError::RelayRejected("Bad Request: chat not found".to_string());
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.to_string(), "Telegram API error");
        assert_eq!(err.details(), Some("Bad Request: chat not found"));
        assert_eq!(err.kind(), "relay_rejected");
    }

    #[test]
    fn missing_fields_message_names_fields() {
        let err = LeadError::MissingFields("type or formData");
        assert_eq!(err.to_string(), "Missing required fields: type or formData");
        assert!(err.details().is_none());
    }
}
