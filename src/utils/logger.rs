use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// Human-readable lines on stderr, leaving stdout for the response.
    Compact,
    /// One JSON object per line; the platform stamps its own timestamps.
    Json,
}

/// `RUST_LOG` wins; otherwise the given directive applies.
pub fn env_filter(default_directive: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive))
}

pub fn default_directive(format: LogFormat, verbose: bool) -> &'static str {
    match (format, verbose) {
        (LogFormat::Compact, true) => "generate_content=debug,info",
        (LogFormat::Compact, false) => "generate_content=info",
        (LogFormat::Json, _) => "generate_content=info,lambda=info",
    }
}

pub fn init(format: LogFormat, verbose: bool) {
    let filter = env_filter(default_directive(format, verbose));
    let registry = tracing_subscriber::registry().with(filter);

    match format {
        LogFormat::Compact => registry
            .with(
                tracing_subscriber::fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_target(false)
                    .compact(),
            )
            .init(),
        LogFormat::Json => registry
            .with(
                tracing_subscriber::fmt::layer()
                    .without_time()
                    .json()
                    .with_current_span(false),
            )
            .init(),
    }
}

pub fn init_cli_logger(verbose: bool) {
    init(LogFormat::Compact, verbose);
}

pub fn init_lambda_logger() {
    init(LogFormat::Json, false);
}
