//! LLM (`OpenAI`) API client module
//!
//! Encapsulates the single completion call used to translate a message.

use async_trait::async_trait;
use reqwest::Client;
use serde_json::{Value, json};
use tracing::info;

use super::prompt_builder::{
    DIAGNOSTIC_TEXT_CHARS, build_chat_messages, build_translation_prompt, chat_messages_to_json,
    truncate_for_diagnostics,
};
use crate::core::config::{AppConfig, CompletionApi, MISSING_API_KEY_MESSAGE};
use crate::core::models::TranslationResult;
use crate::core::ports::Translator;
use crate::errors::SlackError;

pub const MAX_OUTPUT_TOKENS: u32 = 1024;
pub const TEMPERATURE: f64 = 0.2;

/// LLM API client for translating messages
pub struct LlmClient {
    api_key: Option<String>,
    org_id: Option<String>,
    model_name: String,
    api_base: String,
    api: CompletionApi,
    http: Client,
    debug: bool,
}

impl LlmClient {
    #[must_use]
    pub fn new(
        api_key: Option<String>,
        org_id: Option<String>,
        model_name: String,
        api_base: impl Into<String>,
        api: CompletionApi,
    ) -> Self {
        Self {
            api_key,
            org_id,
            model_name,
            api_base: api_base.into().trim_end_matches('/').to_string(),
            api,
            http: Client::new(),
            debug: false,
        }
    }

    #[must_use]
    pub fn from_config(config: &AppConfig, api: CompletionApi) -> Self {
        let model = config
            .openai_model
            .clone()
            .unwrap_or_else(|| api.default_model().to_string());
        let mut client = Self::new(
            config.openai_api_key.clone(),
            config.openai_org_id.clone(),
            model,
            config.openai_api_base.clone(),
            api,
        );
        client.debug = config.debug;
        client
    }

    #[must_use]
    pub fn model_name(&self) -> &str {
        &self.model_name
    }

    fn build_request_body(&self, prompt: &str) -> Value {
        match self.api {
            CompletionApi::Chat => json!({
                "model": self.model_name,
                "messages": chat_messages_to_json(&build_chat_messages(prompt)),
                "max_tokens": MAX_OUTPUT_TOKENS,
                "temperature": TEMPERATURE,
            }),
            CompletionApi::Legacy => json!({
                "model": self.model_name,
                "prompt": prompt,
                "max_tokens": MAX_OUTPUT_TOKENS,
                "temperature": TEMPERATURE,
            }),
        }
    }

    /// Translate `text` into `target_lang` with a single completion request.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` when no API key is configured, `OpenAIError` for
    /// a non-success status or a response without choices, and `HttpError`
    /// or `ParseError` for transport problems. Nothing is retried.
    pub async fn translate_text(
        &self,
        text: &str,
        target_lang: &str,
    ) -> Result<String, SlackError> {
        let api_key = self
            .api_key
            .as_deref()
            .ok_or_else(|| SlackError::ConfigError(MISSING_API_KEY_MESSAGE.to_string()))?;

        let prompt = build_translation_prompt(text, target_lang);
        let request_body = self.build_request_body(&prompt);

        if self.debug {
            info!("OpenAI request body: {}", request_body);
        } else {
            info!(
                "Requesting {} translation from {} ({} chars)",
                target_lang,
                self.model_name,
                text.chars().count()
            );
        }

        let mut request = self
            .http
            .post(format!("{}{}", self.api_base, self.api.path()))
            .bearer_auth(api_key)
            .json(&request_body);
        if let Some(org) = &self.org_id {
            request = request.header("OpenAI-Organization", org);
        }

        let response = request
            .send()
            .await
            .map_err(|e| SlackError::HttpError(format!("OpenAI API request failed: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_else(|e| {
                format!("Failed to read error response body (status {status}): {e}")
            });
            return Err(SlackError::OpenAIError(format!(
                "translation failed (status: {}, text: {:?}): {}",
                status.as_u16(),
                truncate_for_diagnostics(text, DIAGNOSTIC_TEXT_CHARS),
                error_text
            )));
        }

        let response_json: Value = response
            .json()
            .await
            .map_err(|e| SlackError::ParseError(format!("Failed to parse OpenAI response: {e}")))?;

        if self.debug {
            info!("OpenAI response: {}", response_json);
        }

        extract_completion_text(&response_json, self.api).ok_or_else(|| {
            SlackError::OpenAIError(format!(
                "no translation returned (text: {:?})",
                truncate_for_diagnostics(text, DIAGNOSTIC_TEXT_CHARS)
            ))
        })
    }
}

/// Pull the first choice's text out of a completion response.
pub(crate) fn extract_completion_text(response: &Value, api: CompletionApi) -> Option<String> {
    let first = response
        .get("choices")
        .and_then(Value::as_array)
        .and_then(|choices| choices.first())?;

    let text = match api {
        CompletionApi::Chat => first
            .get("message")
            .and_then(|m| m.get("content"))
            .and_then(Value::as_str),
        CompletionApi::Legacy => first.get("text").and_then(Value::as_str),
    }?;

    Some(text.trim().to_string())
}

#[async_trait]
impl Translator for LlmClient {
    async fn translate(
        &self,
        text: &str,
        target_lang: &str,
    ) -> Result<TranslationResult, SlackError> {
        let text = self.translate_text(text, target_lang).await?;
        Ok(TranslationResult { text })
    }
}
