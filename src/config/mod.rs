pub mod lambda;
pub mod toml_config;

#[cfg(feature = "cli")]
use crate::api::generate_content::SOURCE_PATH;
#[cfg(feature = "cli")]
use crate::domain::model::{FunctionRequest, HttpMethod};
#[cfg(feature = "cli")]
use crate::utils::error::{FunctionError, Result};
#[cfg(feature = "cli")]
use clap::Parser;
#[cfg(feature = "cli")]
use serde::{Deserialize, Serialize};

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "generate-content")]
#[command(about = "Invoke the generate-content function locally")]
pub struct CliConfig {
    #[arg(long, default_value = "GET")]
    pub method: String,

    #[arg(long, default_value = "/api/generate-content")]
    pub path: String,

    #[arg(long, help = "Request body")]
    pub body: Option<String>,

    #[arg(long = "header", short = 'H', help = "Request header as 'Name: value'")]
    pub headers: Vec<String>,

    #[arg(long, default_value = SOURCE_PATH, help = "Function source path the route is derived from")]
    pub source: String,

    #[arg(long, help = "Deployment manifest (TOML)")]
    pub config: Option<String>,

    #[arg(long, help = "Include internal error detail in responses")]
    pub expose_errors: bool,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

#[cfg(feature = "cli")]
impl CliConfig {
    pub fn to_request(&self) -> Result<FunctionRequest> {
        let method: HttpMethod = self.method.parse()?;
        let mut request = FunctionRequest::new(method, self.path.clone());

        for raw in &self.headers {
            let (name, value) = raw.split_once(':').ok_or_else(|| {
                FunctionError::InvalidConfigValueError {
                    field: "header".to_string(),
                    value: raw.clone(),
                    reason: "expected 'Name: value'".to_string(),
                }
            })?;
            request = request.with_header(name.trim(), value.trim());
        }

        if let Some(body) = &self.body {
            request = request.with_body(body.clone());
        }

        Ok(request)
    }
}

#[cfg(feature = "cli")]
impl crate::utils::validation::Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        use crate::utils::validation::*;

        validate_path("source", &self.source)?;
        crate::core::route::route_for_path(&self.source)?;

        if !self.path.starts_with('/') {
            return Err(FunctionError::InvalidConfigValueError {
                field: "path".to_string(),
                value: self.path.clone(),
                reason: "Request path must start with '/'".to_string(),
            });
        }

        if let Some(config) = &self.config {
            validate_path("config", config)?;
        }

        // method and headers are only checked by building the request
        self.to_request()?;

        Ok(())
    }
}

#[cfg(all(test, feature = "cli"))]
mod tests {
    use super::*;
    use crate::utils::validation::Validate;

    #[test]
    fn test_cli_builds_request() {
        let config = CliConfig::parse_from([
            "generate-content",
            "--method",
            "post",
            "--body",
            "{}",
            "-H",
            "Content-Type: application/json",
        ]);

        assert!(config.validate().is_ok());
        let request = config.to_request().unwrap();
        assert_eq!(request.method, HttpMethod::Post);
        assert_eq!(request.path, "/api/generate-content");
        assert_eq!(request.header("content-type"), Some("application/json"));
        assert_eq!(request.body.as_deref(), Some("{}"));
    }

    #[test]
    fn test_cli_rejects_malformed_header() {
        let config = CliConfig::parse_from(["generate-content", "-H", "no-colon"]);
        assert!(config.to_request().is_err());
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_cli_rejects_unknown_method() {
        let config = CliConfig::parse_from(["generate-content", "--method", "TRACE"]);
        let err = config.validate().unwrap_err();
        assert_eq!(err.status_code(), 400);
    }

    #[test]
    fn test_cli_rejects_relative_path() {
        let config = CliConfig::parse_from(["generate-content", "--path", "api/x"]);
        assert!(config.validate().is_err());
    }
}
