use tracing::{info, warn};

use crate::core::config::{AppConfig, FlowOptions, MISSING_API_KEY_MESSAGE};
use crate::core::models::{SkipReason, TranslationOutcome, TranslationRequest};
use crate::core::ports::{MessageStore, Translator};
use crate::errors::SlackError;

fn access_error(cause: SlackError) -> SlackError {
    let detail = match cause {
        SlackError::AccessError(detail) => detail,
        other => other.to_string(),
    };
    SlackError::AccessError(format!(
        "{detail}. If the channel is private or the app is not a member, \
         invite this app's bot user to the channel and try again."
    ))
}

/// Fetch a message, translate it and post the translation into its thread.
///
/// Each step is awaited before the next one starts. Benign early exits come
/// back as `Ok(TranslationOutcome::Skipped(..))`.
///
/// # Errors
///
/// Returns an error when the required language or the OpenAI credential is
/// missing, when Slack refuses the lookup, when the completion call fails or
/// when posting the reply fails.
pub async fn translate_message<S, T>(
    store: &S,
    translator: &T,
    config: &AppConfig,
    options: &FlowOptions,
    request: &TranslationRequest,
) -> Result<TranslationOutcome, SlackError>
where
    S: MessageStore + ?Sized,
    T: Translator + ?Sized,
{
    if config.debug {
        info!("Translation request: {:?} (options: {:?})", request, options);
    }

    let Some(lang) = request.lang.as_deref().filter(|l| !l.trim().is_empty()) else {
        if options.require_language {
            return Err(SlackError::InputError(
                "Target language is required. Pass `lang` (for example \"French\").".to_string(),
            ));
        }
        info!("No target language for this trigger, skipping");
        return Ok(TranslationOutcome::Skipped(SkipReason::NoLanguage));
    };

    if config.openai_api_key.is_none() {
        return Err(SlackError::ConfigError(MISSING_API_KEY_MESSAGE.to_string()));
    }

    let messages = store
        .get_replies(&request.channel_id, &request.message_ts, Some(1))
        .await
        .map_err(access_error)?;

    let Some(message) = messages.into_iter().next() else {
        info!(
            "Message {} in {} not found, skipping",
            request.message_ts, request.channel_id
        );
        return Ok(TranslationOutcome::Skipped(SkipReason::MessageNotFound));
    };

    if config.debug {
        info!("Fetched message: {:?}", message);
    }

    if message.text.trim().is_empty() {
        info!("Message {} has no text, skipping", request.message_ts);
        return Ok(TranslationOutcome::Skipped(SkipReason::EmptyMessage));
    }

    let translation = translator.translate(&message.text, lang).await?;

    if config.debug {
        info!("Translation result: {:?}", translation);
    }

    let thread_ts = message
        .thread_ts
        .clone()
        .unwrap_or_else(|| request.message_ts.clone());

    if options.perform_dedup_check {
        // Snapshot taken after the completion call; a concurrent run can still slip past.
        let replies = store
            .get_replies(&request.channel_id, &thread_ts, None)
            .await
            .map_err(access_error)?;

        if replies.iter().any(|reply| reply.text == translation.text) {
            info!(
                "Identical {} translation already posted in thread {}, skipping",
                lang, thread_ts
            );
            return Ok(TranslationOutcome::Skipped(SkipReason::AlreadyPosted));
        }
    }

    let reply = store
        .post_reply(&request.channel_id, &thread_ts, &translation.text)
        .await
        .inspect_err(|e| warn!("Failed to post translation: {}", e))?;

    info!(
        "Posted {} translation as {} in thread {}",
        lang, reply.ts, thread_ts
    );

    Ok(TranslationOutcome::Posted(reply))
}
