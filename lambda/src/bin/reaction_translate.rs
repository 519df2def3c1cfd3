pub use translator::worker::reaction_translate_handler as handler;

#[tokio::main]
async fn main() -> Result<(), lambda_runtime::Error> {
    translator::setup_logging();
    lambda_runtime::run(lambda_runtime::service_fn(handler)).await
}
