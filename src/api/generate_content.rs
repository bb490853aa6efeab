use crate::core::invoker::allow_header;
use crate::domain::model::{FunctionRequest, FunctionResponse, HttpMethod};
use crate::domain::ports::Handler;
use crate::utils::error::{FunctionError, Result};
use async_trait::async_trait;
use chrono::Utc;
use serde_json::json;

pub const FUNCTION_NAME: &str = "generate-content";

/// Location of this function relative to the deployment root; the platform
/// route is derived from it.
pub const SOURCE_PATH: &str = "api/generate-content.rs";

const ALLOWED_METHODS: &[HttpMethod] = &[
    HttpMethod::Get,
    HttpMethod::Head,
    HttpMethod::Post,
    HttpMethod::Options,
];

/// Entry point of the `generate-content` function. Acknowledges requests; it
/// does not produce content.
#[derive(Debug, Clone)]
pub struct GenerateContentHandler {
    name: String,
    route: String,
}

impl GenerateContentHandler {
    pub fn new(name: impl Into<String>, route: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            route: route.into(),
        }
    }

    fn acknowledgement(&self, method: HttpMethod) -> serde_json::Value {
        json!({
            "function": self.name,
            "route": self.route,
            "method": method.as_str(),
            "status": "ok",
            "receivedAt": Utc::now().to_rfc3339(),
        })
    }
}

impl Default for GenerateContentHandler {
    fn default() -> Self {
        Self::new(FUNCTION_NAME, "/api/generate-content")
    }
}

#[async_trait]
impl Handler for GenerateContentHandler {
    fn name(&self) -> &str {
        &self.name
    }

    fn allowed_methods(&self) -> &[HttpMethod] {
        ALLOWED_METHODS
    }

    async fn handle(&self, request: FunctionRequest) -> Result<FunctionResponse> {
        if request.is_base64_encoded {
            return Err(FunctionError::UnsupportedMediaTypeError {
                message: "base64-encoded bodies are not accepted".to_string(),
            });
        }

        match request.method {
            HttpMethod::Options => {
                Ok(FunctionResponse::no_content().with_header("allow", allow_header(ALLOWED_METHODS)))
            }
            HttpMethod::Get => Ok(FunctionResponse::json(
                200,
                &self.acknowledgement(request.method),
            )),
            // Same headers as GET; HEAD responses never carry a body.
            HttpMethod::Head => {
                let mut response = FunctionResponse::json(200, &self.acknowledgement(request.method));
                response.body.clear();
                Ok(response)
            }
            HttpMethod::Post => {
                let body = request.body.as_deref().unwrap_or("");
                check_json_body(&request, body)?;

                let mut ack = self.acknowledgement(request.method);
                ack["bodyBytes"] = json!(body.len());
                Ok(FunctionResponse::json(200, &ack))
            }
            other => Err(FunctionError::MethodNotAllowedError {
                method: other.to_string(),
                allow: allow_header(ALLOWED_METHODS),
            }),
        }
    }
}

// A body declared (or defaulted) as JSON must parse; other content types pass through untouched.
fn check_json_body(request: &FunctionRequest, body: &str) -> Result<()> {
    if body.trim().is_empty() {
        return Ok(());
    }

    let is_json = request
        .header("content-type")
        .map(|ct| ct.to_ascii_lowercase().starts_with("application/json"))
        .unwrap_or(true);

    if is_json {
        serde_json::from_str::<serde_json::Value>(body).map_err(|e| {
            FunctionError::BadRequestError {
                message: format!("body is not valid JSON: {}", e),
            }
        })?;
    }

    Ok(())
}
