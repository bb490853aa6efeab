use crate::domain::model::{FunctionRequest, FunctionResponse, HttpMethod};
use crate::utils::error::Result;
use async_trait::async_trait;

/// An HTTP-triggered serverless function.
#[async_trait]
pub trait Handler: Send + Sync {
    fn name(&self) -> &str;

    fn allowed_methods(&self) -> &[HttpMethod];

    async fn handle(&self, request: FunctionRequest) -> Result<FunctionResponse>;
}
