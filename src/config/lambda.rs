use crate::api::generate_content::{FUNCTION_NAME, SOURCE_PATH};
use crate::core::invoker::InvokerConfig;
#[cfg(feature = "lambda")]
use crate::core::invoker::FunctionInvoker;
#[cfg(feature = "lambda")]
use crate::domain::model::{FunctionRequest, FunctionResponse};
use crate::utils::error::{FunctionError, Result};
#[cfg(feature = "lambda")]
use lambda_runtime::LambdaEvent;
use std::env;
#[cfg(feature = "lambda")]
use std::sync::Arc;

#[derive(Debug, Clone)]
pub struct LambdaConfig {
    pub function_name: String,
    pub function_source: String,
    pub expose_errors: bool,
}

impl LambdaConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the config from any variable source; `from_env` passes the process environment.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let expose_errors = match lookup("EXPOSE_ERRORS") {
            None => false,
            Some(raw) => parse_bool(&raw).ok_or_else(|| FunctionError::InvalidConfigValueError {
                field: "EXPOSE_ERRORS".to_string(),
                value: raw.clone(),
                reason: "expected true/false, 1/0 or yes/no".to_string(),
            })?,
        };

        Ok(Self {
            function_name: lookup("FUNCTION_NAME").unwrap_or_else(|| FUNCTION_NAME.to_string()),
            function_source: lookup("FUNCTION_SOURCE").unwrap_or_else(|| SOURCE_PATH.to_string()),
            expose_errors,
        })
    }

    pub fn invoker_config(&self) -> InvokerConfig {
        InvokerConfig {
            function_name: self.function_name.clone(),
            expose_errors: self.expose_errors,
            ..InvokerConfig::default()
        }
    }
}

/// Serves one runtime event; invocation failures are already HTTP responses.
#[cfg(feature = "lambda")]
pub async fn function_handler(
    invoker: Arc<FunctionInvoker>,
    event: LambdaEvent<FunctionRequest>,
) -> std::result::Result<FunctionResponse, lambda_runtime::Error> {
    tracing::debug!(request_id = %event.context.request_id, "Received HTTP event");
    Ok(invoker.invoke(event.payload).await)
}

fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" | "" => Some(false),
        _ => None,
    }
}

impl crate::utils::validation::Validate for LambdaConfig {
    fn validate(&self) -> Result<()> {
        use crate::utils::validation::*;

        validate_function_name("function_name", &self.function_name)?;
        validate_path("function_source", &self.function_source)?;
        crate::core::route::route_for_path(&self.function_source)?;

        tracing::info!("✅ Lambda configuration validation passed");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::validation::Validate;
    use std::collections::HashMap;

    fn lookup_from(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = LambdaConfig::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config.function_name, "generate-content");
        assert_eq!(config.function_source, "api/generate-content.rs");
        assert!(!config.expose_errors);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_overrides() {
        let config = LambdaConfig::from_lookup(lookup_from(&[
            ("FUNCTION_NAME", "content-v2"),
            ("FUNCTION_SOURCE", "api/v2/generate-content.rs"),
            ("EXPOSE_ERRORS", "yes"),
        ]))
        .unwrap();

        assert!(config.expose_errors);
        assert_eq!(config.invoker_config().function_name, "content-v2");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_invalid_values() {
        assert!(LambdaConfig::from_lookup(lookup_from(&[("EXPOSE_ERRORS", "maybe")])).is_err());

        let config =
            LambdaConfig::from_lookup(lookup_from(&[("FUNCTION_SOURCE", "lib/handler.rs")]))
                .unwrap();
        assert!(config.validate().is_err());
    }
}
