use lambda_runtime::Error;

use tzbot::api::handler::function_handler;
use tzbot::core::config::AppConfig;

#[tokio::main]
async fn main() -> Result<(), Error> {
    tzbot::setup_logging();

    // Missing configuration is fatal here: no request is ever served
    // without the signing secret, bot token, and bot user id.
    let config = AppConfig::from_env().map_err(Error::from)?;

    lambda_runtime::run(lambda_runtime::service_fn(move |event| {
        let config = config.clone();
        async move { function_handler(&config, event).await }
    }))
    .await
}
