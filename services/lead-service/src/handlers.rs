use axum::{
    body::to_bytes,
    extract::{Request, State},
    http::{Method, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use chrono::Utc;
use std::sync::Arc;

use crate::error::LeadError;
use crate::lead;
use crate::models::LeadResponse;
use crate::state::AppState;

const MAX_BODY_BYTES: usize = 64 * 1024;
const PREFLIGHT_MESSAGE: &str = "Preflight request successful";
pub const SUCCESS_MESSAGE: &str = "So'rovingiz muvaffaqiyatli yuborildi!";

pub async fn healthz() -> StatusCode {
    StatusCode::OK
}

pub async fn readyz() -> StatusCode {
    StatusCode::OK
}

pub async fn send_lead(State(state): State<AppState>, request: Request) -> Response {
    match submit(&state, request).await {
        Ok(response) => response,
        Err(err) => {
            if err.status().is_server_error() {
                tracing::error!(
                    kind = err.kind(),
                    details = err.details().unwrap_or_default(),
                    "lead submission failed"
                );
            } else {
                tracing::warn!(kind = err.kind(), "lead submission rejected");
            }
            err.into_response()
        }
    }
}

async fn submit(state: &AppState, request: Request) -> Result<Response, LeadError> {
    // Method checks come first; the body is never read for them.
    if request.method() == Method::OPTIONS {
        return Ok(success(PREFLIGHT_MESSAGE));
    }
    if request.method() != Method::POST {
        return Err(LeadError::MethodNotAllowed);
    }

    let body = to_bytes(request.into_body(), MAX_BODY_BYTES)
        .await
        .map_err(|err| LeadError::InvalidBody {
            reason: "Invalid request body",
            details: Some(err.to_string()),
        })?;
    let submission = lead::parse_request(&body)?;
    let message = lead::process(submission, Utc::now())?;
    let kind = message.kind.as_str();
    tracing::info!(kind, "lead accepted");

    // Detached so a dropped client connection does not cancel delivery.
    let relay = Arc::clone(&state.relay);
    let delivery = tokio::spawn(async move { relay.send(&message.text).await });
    delivery
        .await
        .map_err(|err| LeadError::InternalError(err.to_string()))??;

    tracing::info!(kind, "lead relayed");
    Ok(success(SUCCESS_MESSAGE))
}

fn success(message: &'static str) -> Response {
    (
        StatusCode::OK,
        Json(LeadResponse {
            success: true,
            message,
        }),
    )
        .into_response()
}
