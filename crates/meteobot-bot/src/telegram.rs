//! Long-polling Telegram transport binding.
//!
//! Everything Telegram-specific lives here: update polling, the minimal
//! wire types, and parsing message text down to `(user id, Event)` pairs
//! handed to the coordinator.

use std::time::Duration;

use anyhow::{Context, Result};
use serde::Deserialize;

use meteobot_core::{Coordinator, Event};

const TELEGRAM_API_URL: &str = "https://api.telegram.org";
const POLL_TIMEOUT_SECS: u64 = 30;
const RETRY_DELAY_SECS: u64 = 5;

#[derive(Debug, Deserialize)]
struct UpdatesResponse {
    ok: bool,
    #[serde(default)]
    result: Vec<Update>,
}

#[derive(Debug, Deserialize)]
struct Update {
    update_id: i64,
    message: Option<Message>,
}

#[derive(Debug, Deserialize)]
struct Message {
    from: Option<User>,
    chat: Chat,
    text: Option<String>,
}

#[derive(Debug, Deserialize)]
struct User {
    id: i64,
}

#[derive(Debug, Deserialize)]
struct Chat {
    id: i64,
}

/// Telegram Bot API transport driving the coordinator.
pub struct BotTransport {
    http: reqwest::Client,
    base_url: String,
}

impl BotTransport {
    pub fn new(token: &str) -> Result<Self> {
        // Long-poll requests stay open for POLL_TIMEOUT_SECS, so the client
        // timeout must sit above it.
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(POLL_TIMEOUT_SECS + 10))
            .build()
            .context("Failed to build Telegram HTTP client")?;

        Ok(Self {
            http,
            base_url: format!("{TELEGRAM_API_URL}/bot{token}"),
        })
    }

    /// Poll for updates forever, dispatching each message to `coordinator`.
    ///
    /// Transient Telegram errors are logged and retried on the next cycle;
    /// this only returns on an unrecoverable error from the coordinator
    /// (history persistence failing).
    pub async fn run(&self, coordinator: &Coordinator) -> Result<()> {
        let mut offset: i64 = 0;
        loop {
            let updates = match self.get_updates(offset).await {
                Ok(updates) => updates,
                Err(e) => {
                    tracing::warn!("getUpdates failed: {e}");
                    tokio::time::sleep(Duration::from_secs(RETRY_DELAY_SECS)).await;
                    continue;
                }
            };

            for update in updates {
                offset = offset.max(update.update_id + 1);
                if let Some(message) = update.message {
                    self.dispatch(coordinator, message).await?;
                }
            }
        }
    }

    async fn dispatch(&self, coordinator: &Coordinator, message: Message) -> Result<()> {
        let (Some(user), Some(text)) = (message.from, message.text) else {
            return Ok(());
        };
        let Some(event) = Event::parse(&text) else {
            tracing::debug!("Ignoring unrecognized message from user {}", user.id);
            return Ok(());
        };

        let user_id = user.id.to_string();
        tracing::info!(user = %user_id, event = ?event, "handling chat event");

        let reply = coordinator.handle(&user_id, event).await?;
        if let Err(e) = self.send_message(message.chat.id, &reply).await {
            // The user misses one reply; the next poll carries on.
            tracing::warn!("Failed to send reply to chat {}: {e}", message.chat.id);
        }
        Ok(())
    }

    async fn get_updates(&self, offset: i64) -> Result<Vec<Update>> {
        let url = format!("{}/getUpdates", self.base_url);
        let response: UpdatesResponse = self
            .http
            .get(&url)
            .query(&[
                ("offset", offset.to_string()),
                ("timeout", POLL_TIMEOUT_SECS.to_string()),
            ])
            .send()
            .await?
            .json()
            .await?;

        if !response.ok {
            anyhow::bail!("Telegram getUpdates returned ok=false");
        }
        Ok(response.result)
    }

    async fn send_message(&self, chat_id: i64, text: &str) -> Result<()> {
        let url = format!("{}/sendMessage", self.base_url);
        self.http
            .post(&url)
            .json(&serde_json::json!({ "chat_id": chat_id, "text": text }))
            .send()
            .await?
            .error_for_status()?;
        Ok(())
    }
}
