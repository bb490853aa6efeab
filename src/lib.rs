pub mod api;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use api::{build_invoker, generate_content::GenerateContentHandler};
pub use config::{lambda::LambdaConfig, toml_config::TomlConfig};
pub use core::invoker::{FunctionInvoker, InvokerConfig};
pub use core::route::{route_for_path, Route};
pub use core::router::Router;
pub use domain::model::{FunctionRequest, FunctionResponse, HttpMethod};
pub use domain::ports::Handler;
pub use utils::error::{FunctionError, Result};
