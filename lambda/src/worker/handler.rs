use lambda_runtime::{Error, LambdaEvent};
use serde_json::Value;
use tracing::{error, info};

use super::translate::translate_message;
use crate::ai::LlmClient;
use crate::core::config::{AppConfig, FlowOptions};
use crate::core::models::{FunctionInput, FunctionOutput, TranslationRequest};
use crate::slack::SlackClient;

/// Run one translation with the production Slack and OpenAI clients.
///
/// Flow failures are logged and folded into `FunctionOutput::error`.
pub async fn run_function(
    config: &AppConfig,
    options: &FlowOptions,
    input: FunctionInput,
) -> FunctionOutput {
    let request = TranslationRequest::from(input);
    let store = SlackClient::from_config(config);
    let translator = LlmClient::from_config(config, options.completion_api);

    match translate_message(&store, &translator, config, options, &request).await {
        Ok(outcome) => {
            info!("Translation finished: {:?}", outcome);
            outcome.into()
        }
        Err(e) => {
            error!("Translation failed: {}", e);
            FunctionOutput::error(e.to_string())
        }
    }
}

async fn handle(event: LambdaEvent<Value>, options: FlowOptions) -> Result<FunctionOutput, Error> {
    let input: FunctionInput = match serde_json::from_value(event.payload) {
        Ok(input) => input,
        Err(e) => {
            error!("Invalid function input: {}", e);
            return Ok(FunctionOutput::error(format!("Invalid input: {e}")));
        }
    };

    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!("Config error: {}", e);
            return Ok(FunctionOutput::error(format!("Missing configuration: {e}")));
        }
    };

    if config.debug {
        info!("Function input: {:?}", input);
    }

    Ok(run_function(&config, &options, input).await)
}

/// Lambda handler for the `translate-message` function.
pub async fn translate_message_handler(
    event: LambdaEvent<Value>,
) -> Result<FunctionOutput, Error> {
    handle(event, FlowOptions::translate_message()).await
}

/// Lambda handler for the `reaction-translate` function.
pub async fn reaction_translate_handler(
    event: LambdaEvent<Value>,
) -> Result<FunctionOutput, Error> {
    handle(event, FlowOptions::reaction_translate()).await
}
