// HTTP functions deployed under the platform's api/ directory.

pub mod generate_content;

use crate::core::invoker::{FunctionInvoker, InvokerConfig};
use crate::core::router::Router;
use crate::utils::error::Result;
use std::sync::Arc;

/// Builds the invoker with every function of this deployment registered.
pub fn build_invoker(config: InvokerConfig, source_path: &str) -> Result<FunctionInvoker> {
    let route = crate::core::route::route_for_path(source_path)?;
    let handler = generate_content::GenerateContentHandler::new(
        config.function_name.clone(),
        route.to_string(),
    );

    let mut router = Router::new();
    router.register(source_path, Arc::new(handler))?;

    Ok(FunctionInvoker::new(router, config))
}
