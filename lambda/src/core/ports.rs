//! Seams between the translation flow and the services it talks to.

use async_trait::async_trait;

use super::models::{PostedReply, SlackMessage, TranslationResult};
use crate::errors::SlackError;

/// Read and write access to a channel's message history.
#[async_trait]
pub trait MessageStore: Send + Sync {
    /// Messages of the thread rooted at (or starting from) `ts`, oldest first,
    /// `ts` itself included. `limit` caps the page size.
    async fn get_replies(
        &self,
        channel_id: &str,
        ts: &str,
        limit: Option<u16>,
    ) -> Result<Vec<SlackMessage>, SlackError>;

    /// Post `text` into the thread `thread_ts` and return the new message.
    async fn post_reply(
        &self,
        channel_id: &str,
        thread_ts: &str,
        text: &str,
    ) -> Result<PostedReply, SlackError>;
}

#[async_trait]
pub trait Translator: Send + Sync {
    async fn translate(
        &self,
        text: &str,
        target_lang: &str,
    ) -> Result<TranslationResult, SlackError>;
}
