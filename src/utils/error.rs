use thiserror::Error;

#[derive(Error, Debug)]
pub enum FunctionError {
    #[error("Invalid route source '{path}': {reason}")]
    RouteError { path: String, reason: String },

    #[error("Route already registered: {route}")]
    DuplicateRouteError { route: String },

    #[error("No function registered for path: {path}")]
    NotFoundError { path: String },

    #[error("Method {method} not allowed")]
    MethodNotAllowedError { method: String, allow: String },

    #[error("Bad request: {message}")]
    BadRequestError { message: String },

    #[error("Unsupported media type: {message}")]
    UnsupportedMediaTypeError { message: String },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for '{field}' ({value}): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Invocation exceeded the {seconds}s timeout")]
    TimeoutError { seconds: u64 },

    #[error("Internal error: {message}")]
    InternalError { message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Routing,
    Request,
    Configuration,
    System,
}

impl ErrorCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCategory::Routing => "routing",
            ErrorCategory::Request => "request",
            ErrorCategory::Configuration => "configuration",
            ErrorCategory::System => "system",
        }
    }
}

impl FunctionError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            FunctionError::RouteError { .. }
            | FunctionError::DuplicateRouteError { .. }
            | FunctionError::NotFoundError { .. } => ErrorCategory::Routing,
            FunctionError::MethodNotAllowedError { .. }
            | FunctionError::BadRequestError { .. }
            | FunctionError::UnsupportedMediaTypeError { .. } => ErrorCategory::Request,
            FunctionError::ConfigError { .. }
            | FunctionError::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
            FunctionError::IoError(_)
            | FunctionError::TimeoutError { .. }
            | FunctionError::InternalError { .. } => ErrorCategory::System,
        }
    }

    /// HTTP status the invoker answers with when this error escapes a handler.
    pub fn status_code(&self) -> u16 {
        match self {
            FunctionError::NotFoundError { .. } => 404,
            FunctionError::MethodNotAllowedError { .. } => 405,
            FunctionError::BadRequestError { .. } => 400,
            FunctionError::UnsupportedMediaTypeError { .. } => 415,
            FunctionError::TimeoutError { .. } => 504,
            _ => 500,
        }
    }

    /// Client errors carry their message to the caller; everything else is
    /// reported as a generic failure unless detail is explicitly exposed.
    pub fn is_client_error(&self) -> bool {
        (400..500).contains(&self.status_code())
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            FunctionError::RouteError { path, .. } => {
                format!("函式路徑無效: {}", path)
            }
            FunctionError::DuplicateRouteError { route } => {
                format!("路由重複註冊: {}", route)
            }
            FunctionError::NotFoundError { path } => format!("找不到路由: {}", path),
            FunctionError::MethodNotAllowedError { method, .. } => {
                format!("不支援的 HTTP 方法: {}", method)
            }
            FunctionError::BadRequestError { message } => format!("請求格式錯誤: {}", message),
            FunctionError::UnsupportedMediaTypeError { message } => {
                format!("不支援的內容類型: {}", message)
            }
            FunctionError::ConfigError { message } => format!("配置錯誤: {}", message),
            FunctionError::InvalidConfigValueError { field, reason, .. } => {
                format!("配置值無效 ({}): {}", field, reason)
            }
            FunctionError::IoError(e) => format!("檔案讀寫失敗: {}", e),
            FunctionError::TimeoutError { seconds } => format!("函式執行超過 {} 秒", seconds),
            FunctionError::InternalError { message } => format!("內部錯誤: {}", message),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self.category() {
            ErrorCategory::Routing => "確認函式檔案位於 api/ 目錄下，且請求路徑與路由一致",
            ErrorCategory::Request => "檢查 HTTP 方法、Content-Type 與請求內容",
            ErrorCategory::Configuration => "檢查配置檔與環境變數設定",
            ErrorCategory::System => "查看日誌以取得詳細資訊後重試",
        }
    }
}

pub type Result<T> = std::result::Result<T, FunctionError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        let err = FunctionError::NotFoundError {
            path: "/nope".to_string(),
        };
        assert_eq!(err.status_code(), 404);
        assert!(err.is_client_error());

        let err = FunctionError::InternalError {
            message: "boom".to_string(),
        };
        assert_eq!(err.status_code(), 500);
        assert!(!err.is_client_error());
        assert_eq!(err.category(), ErrorCategory::System);
    }

    #[test]
    fn test_config_errors_are_server_side() {
        let err = FunctionError::ConfigError {
            message: "function.name missing".to_string(),
        };
        assert_eq!(err.status_code(), 500);
        assert_eq!(err.category().as_str(), "configuration");
    }

    #[test]
    fn test_timeout_is_gateway_timeout() {
        let err = FunctionError::TimeoutError { seconds: 3 };
        assert_eq!(err.status_code(), 504);
        assert!(!err.is_client_error());
        assert_eq!(err.category(), ErrorCategory::System);
    }
}
