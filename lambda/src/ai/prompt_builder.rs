//! Prompt construction for translation requests.

use openai_api_rs::v1::chat_completion::{ChatCompletionMessage, Content, MessageRole};
use serde_json::{Value, json};

/// Characters of source text echoed back in error messages.
pub const DIAGNOSTIC_TEXT_CHARS: usize = 40;

#[must_use]
pub fn build_translation_prompt(text: &str, target_lang: &str) -> String {
    format!(
        "Translate the following Slack message into {target_lang}. \
         Keep Slack formatting such as *bold*, _italic_, `code`, <@U123> mentions, \
         <#C123> channel links and :emoji: codes unchanged. \
         Reply with the translated text only, without quotes or commentary.\n\n{text}"
    )
}

#[must_use]
pub fn build_chat_messages(prompt: &str) -> Vec<ChatCompletionMessage> {
    vec![ChatCompletionMessage {
        role: MessageRole::user,
        content: Content::Text(prompt.to_string()),
        name: None,
        tool_calls: None,
        tool_call_id: None,
    }]
}

/// Render chat messages as `/chat/completions` message objects.
pub(crate) fn chat_messages_to_json(messages: &[ChatCompletionMessage]) -> Vec<Value> {
    messages
        .iter()
        .filter_map(|m| {
            let role = match m.role {
                MessageRole::system => "system",
                MessageRole::user | MessageRole::function | MessageRole::tool => "user",
                MessageRole::assistant => "assistant",
            };

            match &m.content {
                Content::Text(t) => Some(json!({ "role": role, "content": t })),
                Content::ImageUrl(_) => None,
            }
        })
        .collect()
}

/// Shorten `text` to `max_chars` characters, marking the cut with `...`.
#[must_use]
pub fn truncate_for_diagnostics(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let head: String = text.chars().take(max_chars).collect();
    format!("{head}...")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_embeds_language_and_text() {
        let prompt = build_translation_prompt("Hello", "French");
        assert!(prompt.contains("into French"));
        assert!(prompt.ends_with("\n\nHello"));
    }

    #[test]
    fn test_chat_messages_single_user_turn() {
        let messages = build_chat_messages("translate me");
        let json = chat_messages_to_json(&messages);

        assert_eq!(json.len(), 1);
        assert_eq!(json[0]["role"], "user");
        assert_eq!(json[0]["content"], "translate me");
    }

    #[test]
    fn test_truncate_for_diagnostics() {
        assert_eq!(truncate_for_diagnostics("short", 10), "short");
        assert_eq!(truncate_for_diagnostics("abcdefghij", 4), "abcd...");
        // multibyte characters are never split
        assert_eq!(truncate_for_diagnostics("こんにちは世界", 5), "こんにちは...");
    }
}
