use std::{fmt, time::Duration};

use lead_common::{env_or, env_required, EnvError};

const DEFAULT_API_BASE: &str = "https://api.telegram.org";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error(transparent)]
    Env(#[from] EnvError),
    #[error("relay client: {0}")]
    Client(#[from] reqwest::Error),
}

/// Where and how lead notifications are delivered.
#[derive(Clone)]
pub struct RelayConfig {
    pub api_base: String,
    pub bot_token: String,
    pub chat_id: String,
    pub timeout: Duration,
}

impl RelayConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        // Credentials have no fallback; startup fails without them.
        let bot_token = env_required("TELEGRAM_BOT_TOKEN")?;
        let chat_id = env_required("TELEGRAM_CHAT_ID")?;
        let api_base = env_or("TELEGRAM_API_BASE", DEFAULT_API_BASE.to_string());
        let timeout = Duration::from_secs(env_or("RELAY_TIMEOUT_SECS", 10u64));

        Ok(Self {
            api_base,
            bot_token,
            chat_id,
            timeout,
        })
    }
}

impl fmt::Debug for RelayConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RelayConfig")
            .field("api_base", &self.api_base)
            .field("bot_token", &"<redacted>")
            .field("chat_id", &self.chat_id)
            .field("timeout", &self.timeout)
            .finish()
    }
}
