use crate::core::router::Router;
use crate::domain::model::{FunctionRequest, FunctionResponse};
use crate::utils::error::FunctionError;
use serde_json::json;
use std::time::{Duration, Instant};

#[derive(Debug, Clone)]
pub struct InvokerConfig {
    pub function_name: String,
    /// Include server-side error detail in response bodies.
    pub expose_errors: bool,
    /// Upper bound on a single invocation; `None` leaves it to the platform.
    pub timeout: Option<Duration>,
}

impl Default for InvokerConfig {
    fn default() -> Self {
        Self {
            function_name: crate::api::generate_content::FUNCTION_NAME.to_string(),
            expose_errors: false,
            timeout: None,
        }
    }
}

/// Drives a single platform invocation: route, dispatch, map errors.
pub struct FunctionInvoker {
    router: Router,
    config: InvokerConfig,
}

impl FunctionInvoker {
    pub fn new(router: Router, config: InvokerConfig) -> Self {
        Self { router, config }
    }

    pub fn router(&self) -> &Router {
        &self.router
    }

    pub async fn invoke(&self, request: FunctionRequest) -> FunctionResponse {
        let started = Instant::now();
        let method = request.method;
        let path = request.path.clone();

        tracing::info!(
            function = %self.config.function_name,
            %method,
            %path,
            "Invocation started"
        );

        let outcome = match self.config.timeout {
            Some(limit) => tokio::time::timeout(limit, self.dispatch(request))
                .await
                .unwrap_or_else(|_| {
                    Err(FunctionError::TimeoutError {
                        seconds: limit.as_secs(),
                    })
                }),
            None => self.dispatch(request).await,
        };

        let response = match outcome {
            Ok(response) => response,
            Err(e) => self.error_response(&e),
        };

        tracing::info!(
            function = %self.config.function_name,
            %method,
            %path,
            status = response.status_code,
            elapsed_ms = started.elapsed().as_millis() as u64,
            "Invocation finished"
        );

        response
    }

    async fn dispatch(
        &self,
        request: FunctionRequest,
    ) -> crate::utils::error::Result<FunctionResponse> {
        let (route, handler) =
            self.router
                .resolve(&request.path)
                .ok_or_else(|| FunctionError::NotFoundError {
                    path: request.path.clone(),
                })?;

        tracing::debug!("Dispatching {} to '{}' at {}", request.path, handler.name(), route);

        if !handler.allowed_methods().contains(&request.method) {
            return Err(FunctionError::MethodNotAllowedError {
                method: request.method.to_string(),
                allow: allow_header(handler.allowed_methods()),
            });
        }

        handler.handle(request).await
    }

    fn error_response(&self, error: &FunctionError) -> FunctionResponse {
        let message = if error.is_client_error() || self.config.expose_errors {
            error.to_string()
        } else {
            "Internal server error".to_string()
        };

        if error.is_client_error() {
            tracing::warn!("Request rejected: {}", error);
        } else {
            tracing::error!(
                "Invocation failed: {} (Category: {:?})",
                error,
                error.category()
            );
        }

        let response = FunctionResponse::json(
            error.status_code(),
            &json!({
                "error": message,
                "code": error.category().as_str(),
            }),
        );

        match error {
            FunctionError::MethodNotAllowedError { allow, .. } => {
                response.with_header("allow", allow.clone())
            }
            _ => response,
        }
    }
}

pub fn allow_header(methods: &[crate::domain::model::HttpMethod]) -> String {
    methods
        .iter()
        .map(|m| m.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}
