use std::sync::Arc;

use crate::relay::TelegramRelay;

#[derive(Clone)]
pub struct AppState {
    pub relay: Arc<TelegramRelay>,
}

impl AppState {
    pub fn new(relay: TelegramRelay) -> Self {
        Self {
            relay: Arc::new(relay),
        }
    }
}
