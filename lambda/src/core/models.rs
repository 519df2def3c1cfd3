use serde::{Deserialize, Serialize};
use slack_morphism::SlackHistoryMessage;

use super::languages::resolve_reaction;

/// Invocation payload shared by both functions.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FunctionInput {
    pub channel_id: String,
    pub message_ts: String,
    #[serde(default)]
    pub lang: Option<String>,
    /// Emoji name of the reaction that triggered the function, if any.
    #[serde(default)]
    pub reaction: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslationRequest {
    pub channel_id: String,
    pub message_ts: String,
    pub lang: Option<String>,
}

impl From<FunctionInput> for TranslationRequest {
    fn from(input: FunctionInput) -> Self {
        let lang = input
            .lang
            .map(|l| l.trim().to_string())
            .filter(|l| !l.is_empty())
            .or_else(|| {
                input
                    .reaction
                    .as_deref()
                    .and_then(resolve_reaction)
                    .map(str::to_string)
            });

        Self {
            channel_id: input.channel_id,
            message_ts: input.message_ts,
            lang,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlackMessage {
    pub ts: String,
    pub text: String,
    pub thread_ts: Option<String>,
}

impl From<&SlackHistoryMessage> for SlackMessage {
    fn from(msg: &SlackHistoryMessage) -> Self {
        Self {
            ts: msg.origin.ts.0.clone(),
            text: msg.content.text.clone().unwrap_or_default(),
            thread_ts: msg.origin.thread_ts.as_ref().map(|ts| ts.0.clone()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslationResult {
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostedReply {
    pub ts: String,
}

/// Why a run finished without posting anything.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    NoLanguage,
    MessageNotFound,
    EmptyMessage,
    AlreadyPosted,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TranslationOutcome {
    Posted(PostedReply),
    Skipped(SkipReason),
}

/// Invocation result: `{ "ts": .. }`, `{}` or `{ "error": .. }`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FunctionOutput {
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub ts: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub error: Option<String>,
}

impl FunctionOutput {
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            ts: None,
            error: Some(message.into()),
        }
    }
}

impl From<TranslationOutcome> for FunctionOutput {
    fn from(outcome: TranslationOutcome) -> Self {
        match outcome {
            TranslationOutcome::Posted(reply) => Self {
                ts: Some(reply.ts),
                error: None,
            },
            TranslationOutcome::Skipped(_) => Self::empty(),
        }
    }
}
