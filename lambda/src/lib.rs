//! Translator - Slack functions that translate a message with OpenAI and
//! post the result as a threaded reply.
//!
//! Two Lambda functions share one flow:
//! 1. `translate-message` translates into an explicitly requested language
//!    using the chat completions API
//! 2. `reaction-translate` is driven by emoji reactions, uses the legacy
//!    completions API and skips translations already present in the thread
//!
//! # Architecture
//!
//! The system uses:
//! - AWS Lambda for serverless execution
//! - the Slack Web API (`conversations.replies`, `chat.postMessage`)
//! - the `OpenAI` completion endpoints for translation
//! - Tokio for async runtime
//!
//! # Example
//!
//! ```no_run
//! use translator::core::config::{AppConfig, FlowOptions};
//! use translator::core::models::FunctionInput;
//!
//! #[tokio::main]
//! async fn main() {
//!     translator::setup_logging();
//!
//!     let config = AppConfig {
//!         slack_bot_token: "xoxb-dummy".to_string(),
//!         slack_api_url: "https://slack.com/api".to_string(),
//!         openai_api_key: Some("dummy_openai_key".to_string()),
//!         openai_org_id: None,
//!         openai_model: None,
//!         openai_api_base: "https://api.openai.com/v1".to_string(),
//!         debug: false,
//!     };
//!
//!     let output = translator::worker::run_function(
//!         &config,
//!         &FlowOptions::translate_message(),
//!         FunctionInput {
//!             channel_id: "C12345678".into(),
//!             message_ts: "1700000000.000100".into(),
//!             lang: Some("French".into()),
//!             reaction: None,
//!         },
//!     )
//!     .await;
//!
//!     match (output.ts, output.error) {
//!         (Some(ts), _) => println!("Posted translation {ts}"),
//!         (None, Some(error)) => println!("Failed: {error}"),
//!         (None, None) => println!("Nothing to do"),
//!     }
//! }
//! ```

pub mod ai;
pub mod core;
pub mod errors;
pub mod slack;
pub mod worker;

pub use errors::SlackError;

/// Configure structured logging with JSON format for AWS Lambda environments.
///
/// The level comes from `RUST_LOG` and defaults to `info`. Calling it more
/// than once is harmless.
///
/// # Example
///
/// ```
/// translator::setup_logging();
/// ```
pub fn setup_logging() {
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let fmt_layer = tracing_subscriber::fmt::layer().json().with_target(true);

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init();
}
