use serde::{Deserialize, Serialize};

use crate::config::{ConfigError, RelayConfig};
use crate::error::LeadError;

#[derive(Serialize)]
struct SendMessageRequest<'a> {
    chat_id: &'a str,
    text: &'a str,
    parse_mode: &'static str,
}

#[derive(Deserialize)]
struct SendMessageResponse {
    ok: bool,
    #[serde(default)]
    description: Option<String>,
}

/// Delivers notifications through the Bot API `sendMessage` method.
#[derive(Clone)]
pub struct TelegramRelay {
    client: reqwest::Client,
    url: String,
    chat_id: String,
}

impl TelegramRelay {
    pub fn new(config: &RelayConfig) -> Result<Self, ConfigError> {
        let client = reqwest::Client::builder().timeout(config.timeout).build()?;
        let url = format!(
            "{}/bot{}/sendMessage",
            config.api_base.trim_end_matches('/'),
            config.bot_token
        );
        Ok(Self {
            client,
            url,
            chat_id: config.chat_id.clone(),
        })
    }

    pub async fn send(&self, text: &str) -> Result<(), LeadError> {
        let payload = SendMessageRequest {
            chat_id: &self.chat_id,
            text,
            parse_mode: "HTML",
        };
        // The URL embeds the bot token; strip it from transport errors.
        let response = self
            .client
            .post(&self.url)
            .json(&payload)
            .send()
            .await
            .map_err(|err| LeadError::RelayUnreachable(err.without_url().to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|err| LeadError::RelayUnreachable(err.without_url().to_string()))?;

        match serde_json::from_str::<SendMessageResponse>(&body) {
            Ok(parsed) if status.is_success() && parsed.ok => Ok(()),
            Ok(parsed) => Err(LeadError::RelayRejected(
                parsed
                    .description
                    .unwrap_or_else(|| format!("relay responded with {status}")),
            )),
            Err(_) if body.trim().is_empty() => Err(LeadError::RelayRejected(format!(
                "relay responded with {status}"
            ))),
            Err(_) if status.is_success() => Err(LeadError::RelayRejected(format!(
                "Failed to parse Telegram response: {body}"
            ))),
            Err(_) => Err(LeadError::RelayRejected(body)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{http::StatusCode, routing::post, Router};
    use std::time::Duration;
    use tokio::net::TcpListener;

    async fn serve(router: Router) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
        let addr = listener.local_addr().expect("local addr");
        tokio::spawn(async move {
            let _ = axum::serve(listener, router).await;
        });
        format!("http://{addr}")
    }

    async fn stub_replying(status: StatusCode, body: &'static str) -> String {
        let router = Router::new().route(
            "/:bot/sendMessage",
            post(move || async move { (status, body) }),
        );
        serve(router).await
    }

    fn relay(api_base: String, timeout: Duration) -> TelegramRelay {
        TelegramRelay::new(&RelayConfig {
            api_base,
            bot_token: "test-token".to_string(),
            chat_id: "-100123".to_string(),
            timeout,
        })
        .expect("relay client")
    }

    async fn rejection(status: StatusCode, body: &'static str) -> String {
        let base = stub_replying(status, body).await;
        match relay(base, Duration::from_secs(5)).send("hello").await {
            Err(LeadError::RelayRejected(details)) => details,
            other => panic!("expected relay rejection, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn accepted_message_is_ok() {
        let base = stub_replying(StatusCode::OK, r#"{"ok":true,"result":{}}"#).await;
        assert!(relay(base, Duration::from_secs(5)).send("hello").await.is_ok());
    }

    #[tokio::test]
    async fn plain_text_failure_is_surfaced_verbatim() {
        assert_eq!(
            rejection(StatusCode::BAD_GATEWAY, "upstream down").await,
            "upstream down"
        );
    }

    #[tokio::test]
    async fn empty_failure_body_reports_status() {
        let details = rejection(StatusCode::SERVICE_UNAVAILABLE, "").await;
        assert_eq!(details, "relay responded with 503 Service Unavailable");
    }

    #[tokio::test]
    async fn non_json_success_body_is_rejected() {
        let details = rejection(StatusCode::OK, "<html>maintenance</html>").await;
        assert_eq!(
            details,
            "Failed to parse Telegram response: <html>maintenance</html>"
        );
    }

    #[tokio::test]
    async fn json_failure_without_description_reports_status() {
        let details = rejection(StatusCode::BAD_REQUEST, r#"{"ok":false}"#).await;
        assert_eq!(details, "relay responded with 400 Bad Request");
    }

    #[tokio::test]
    async fn slow_relay_times_out_as_unreachable() {
        let router = Router::new().route(
            "/:bot/sendMessage",
            post(|| async {
                tokio::time::sleep(Duration::from_secs(3)).await;
                (StatusCode::OK, r#"{"ok":true}"#)
            }),
        );
        let base = serve(router).await;

        let result = relay(base, Duration::from_secs(1)).send("hello").await;

        match result {
            Err(LeadError::RelayUnreachable(details)) => {
                assert!(!details.contains("test-token"));
            }
            other => panic!("expected unreachable relay, got {other:?}"),
        }
    }
}
