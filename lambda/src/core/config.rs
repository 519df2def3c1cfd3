use std::env;

pub const DEFAULT_SLACK_API_URL: &str = "https://slack.com/api";
pub const DEFAULT_OPENAI_API_BASE: &str = "https://api.openai.com/v1";

/// Reported whenever a completion is needed but `OPENAI_API_KEY` is unset.
pub const MISSING_API_KEY_MESSAGE: &str = "OPENAI_API_KEY is not configured. \
    Set it in the function's environment (for example `OPENAI_API_KEY=sk-...`) and try again.";

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub slack_bot_token: String,
    pub slack_api_url: String,
    pub openai_api_key: Option<String>,
    pub openai_org_id: Option<String>,
    pub openai_model: Option<String>,
    pub openai_api_base: String,
    pub debug: bool,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, String> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Builds the configuration from an arbitrary variable source.
    ///
    /// Blank values are treated as unset, so an `OPENAI_API_KEY=""` left in a
    /// deployment template is reported as a missing credential.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, String>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_blank = |name: &str| {
            lookup(name)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        Ok(Self {
            slack_bot_token: non_blank("SLACK_BOT_TOKEN")
                .ok_or_else(|| "SLACK_BOT_TOKEN: environment variable not found".to_string())?,
            slack_api_url: non_blank("SLACK_API_URL")
                .unwrap_or_else(|| DEFAULT_SLACK_API_URL.to_string()),
            openai_api_key: non_blank("OPENAI_API_KEY"),
            openai_org_id: non_blank("OPENAI_ORG_ID"),
            openai_model: non_blank("OPENAI_MODEL"),
            openai_api_base: non_blank("OPENAI_API_BASE")
                .unwrap_or_else(|| DEFAULT_OPENAI_API_BASE.to_string()),
            debug: non_blank("DEBUG_MODE").is_some_and(|v| is_truthy(&v)),
        })
    }
}

fn is_truthy(value: &str) -> bool {
    matches!(value.to_ascii_lowercase().as_str(), "true" | "1" | "yes" | "on")
}

/// Which OpenAI text generation endpoint a function talks to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompletionApi {
    /// `/chat/completions`
    Chat,
    /// `/completions`
    Legacy,
}

impl CompletionApi {
    #[must_use]
    pub fn default_model(self) -> &'static str {
        match self {
            CompletionApi::Chat => "gpt-4o-mini",
            CompletionApi::Legacy => "gpt-3.5-turbo-instruct",
        }
    }

    #[must_use]
    pub fn path(self) -> &'static str {
        match self {
            CompletionApi::Chat => "/chat/completions",
            CompletionApi::Legacy => "/completions",
        }
    }
}

/// Per-function switches for the shared translation flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FlowOptions {
    pub require_language: bool,
    pub perform_dedup_check: bool,
    pub completion_api: CompletionApi,
}

impl FlowOptions {
    /// `translate-message`: always translates, the caller must name a language.
    #[must_use]
    pub fn translate_message() -> Self {
        Self {
            require_language: true,
            perform_dedup_check: false,
            completion_api: CompletionApi::Chat,
        }
    }

    /// `reaction-translate`: driven by emoji reactions, skips quietly when the
    /// reaction is not a language and never posts the same translation twice.
    #[must_use]
    pub fn reaction_translate() -> Self {
        Self {
            require_language: false,
            perform_dedup_check: true,
            completion_api: CompletionApi::Legacy,
        }
    }
}
