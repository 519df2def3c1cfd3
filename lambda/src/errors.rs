use thiserror::Error;

#[derive(Debug, Error)]
pub enum SlackError {
    #[error("Missing configuration: {0}")]
    ConfigError(String),

    #[error("Invalid input: {0}")]
    InputError(String),

    #[error("Failed to fetch the message: {0}")]
    AccessError(String),

    #[error("Failed to access Slack API: {0}")]
    ApiError(String),

    #[error("Failed to access OpenAI API: {0}")]
    OpenAIError(String),

    #[error("Failed to send HTTP request: {0}")]
    HttpError(String),

    #[error("Failed to parse response: {0}")]
    ParseError(String),
}

impl From<reqwest::Error> for SlackError {
    fn from(error: reqwest::Error) -> Self {
        SlackError::HttpError(error.to_string())
    }
}

impl From<serde_json::Error> for SlackError {
    fn from(error: serde_json::Error) -> Self {
        SlackError::ParseError(error.to_string())
    }
}
