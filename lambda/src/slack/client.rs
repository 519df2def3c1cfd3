//! Slack API client module
//!
//! Thin wrapper over the two Web API methods the translator needs:
//! `conversations.replies` and `chat.postMessage`.

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use serde_json::{Value, json};
use slack_morphism::{SlackApiToken, SlackApiTokenValue, SlackHistoryMessage, SlackTs};
use tracing::{debug, info};

use crate::core::config::AppConfig;
use crate::core::models::{PostedReply, SlackMessage};
use crate::core::ports::MessageStore;
use crate::errors::SlackError;

#[derive(Debug, Deserialize)]
struct PostMessageResponse {
    ok: bool,
    ts: Option<SlackTs>,
    error: Option<String>,
}

/// Slack API client
pub struct SlackClient {
    token: SlackApiToken,
    api_url: String,
    http: Client,
    debug: bool,
}

impl SlackClient {
    #[must_use]
    pub fn new(token: String, api_url: impl Into<String>) -> Self {
        Self {
            token: SlackApiToken::new(SlackApiTokenValue::new(token)),
            api_url: api_url.into().trim_end_matches('/').to_string(),
            http: Client::new(),
            debug: false,
        }
    }

    #[must_use]
    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(config.slack_bot_token.clone(), config.slack_api_url.clone())
            .with_debug(config.debug)
    }

    #[must_use]
    pub fn with_debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }

    fn method_url(&self, method: &str) -> String {
        format!("{}/{}", self.api_url, method)
    }

    /// Fetch a message and the replies that follow it via `conversations.replies`.
    ///
    /// # Errors
    ///
    /// Returns `AccessError` carrying the Slack error code (for example
    /// `not_in_channel`) when Slack rejects the lookup, and `HttpError` or
    /// `ParseError` for transport problems.
    pub async fn get_replies(
        &self,
        channel_id: &str,
        ts: &str,
        limit: Option<u16>,
    ) -> Result<Vec<SlackMessage>, SlackError> {
        let mut query: Vec<(&str, String)> = vec![
            ("channel", channel_id.to_string()),
            ("ts", ts.to_string()),
            ("inclusive", "true".to_string()),
        ];
        if let Some(limit) = limit {
            query.push(("limit", limit.to_string()));
        }

        let resp = self
            .http
            .get(self.method_url("conversations.replies"))
            .bearer_auth(&self.token.token_value.0)
            .query(&query)
            .send()
            .await
            .map_err(|e| SlackError::HttpError(format!("conversations.replies HTTP: {e}")))?;

        if !resp.status().is_success() {
            return Err(SlackError::AccessError(format!(
                "conversations.replies HTTP {}",
                resp.status()
            )));
        }

        let body: Value = resp
            .json()
            .await
            .map_err(|e| SlackError::ParseError(format!("conversations.replies parse: {e}")))?;

        if self.debug {
            info!("conversations.replies response: {}", body);
        }

        if !body.get("ok").and_then(Value::as_bool).unwrap_or(false) {
            return Err(SlackError::AccessError(format!(
                "conversations.replies error: {}",
                body.get("error")
                    .and_then(Value::as_str)
                    .unwrap_or("unknown")
            )));
        }

        let history: Vec<SlackHistoryMessage> = match body.get("messages") {
            Some(messages) => serde_json::from_value(messages.clone()).map_err(|e| {
                SlackError::ParseError(format!("conversations.replies messages: {e}"))
            })?,
            None => Vec::new(),
        };

        debug!(
            "Fetched {} message(s) from {} at {}",
            history.len(),
            channel_id,
            ts
        );

        Ok(history.iter().map(SlackMessage::from).collect())
    }

    /// Post a plain-text reply into a specific thread.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request fails or Slack returns an error.
    pub async fn post_message_in_thread(
        &self,
        channel_id: &str,
        thread_ts: &str,
        message: &str,
    ) -> Result<PostedReply, SlackError> {
        let payload = json!({
            "channel": channel_id,
            "text": message,
            "thread_ts": thread_ts,
        });

        let resp = self
            .http
            .post(self.method_url("chat.postMessage"))
            .bearer_auth(&self.token.token_value.0)
            .json(&payload)
            .send()
            .await
            .map_err(|e| SlackError::HttpError(format!("Failed to post thread message: {e}")))?;

        if !resp.status().is_success() {
            return Err(SlackError::ApiError(format!(
                "chat.postMessage HTTP {}",
                resp.status()
            )));
        }

        let body: PostMessageResponse = resp
            .json()
            .await
            .map_err(|e| SlackError::ParseError(format!("chat.postMessage JSON parse error: {e}")))?;

        if !body.ok {
            return Err(SlackError::ApiError(format!(
                "chat.postMessage error: {}",
                body.error.as_deref().unwrap_or("unknown")
            )));
        }

        let ts = body
            .ts
            .ok_or_else(|| SlackError::ParseError("chat.postMessage returned no ts".to_string()))?;

        Ok(PostedReply { ts: ts.0 })
    }
}

#[async_trait]
impl MessageStore for SlackClient {
    async fn get_replies(
        &self,
        channel_id: &str,
        ts: &str,
        limit: Option<u16>,
    ) -> Result<Vec<SlackMessage>, SlackError> {
        SlackClient::get_replies(self, channel_id, ts, limit).await
    }

    async fn post_reply(
        &self,
        channel_id: &str,
        thread_ts: &str,
        text: &str,
    ) -> Result<PostedReply, SlackError> {
        self.post_message_in_thread(channel_id, thread_ts, text).await
    }
}
