#[cfg(feature = "lambda")]
use generate_content::config::lambda::function_handler;
#[cfg(feature = "lambda")]
use generate_content::utils::{logger, validation::Validate};
#[cfg(feature = "lambda")]
use generate_content::{build_invoker, LambdaConfig};
#[cfg(feature = "lambda")]
use lambda_runtime::{run, service_fn, Error};
#[cfg(feature = "lambda")]
use std::sync::Arc;

#[cfg(feature = "lambda")]
#[tokio::main]
async fn main() -> Result<(), Error> {
    logger::init_lambda_logger();

    // 建立一次，之後每次調用共用
    let lambda_config = LambdaConfig::from_env()?;
    lambda_config.validate()?;

    let invoker = Arc::new(build_invoker(
        lambda_config.invoker_config(),
        &lambda_config.function_source,
    )?);

    tracing::info!(
        function = %lambda_config.function_name,
        routes = ?invoker.router().routes().iter().map(|r| r.to_string()).collect::<Vec<_>>(),
        "Function runtime ready"
    );

    run(service_fn(move |event| function_handler(Arc::clone(&invoker), event))).await
}
