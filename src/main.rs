use clap::Parser;
use generate_content::utils::{logger, validation::Validate};
use generate_content::{
    build_invoker, CliConfig, FunctionInvoker, FunctionRequest, InvokerConfig, Result, TomlConfig,
};

/// 配置或路由錯誤的退出碼，與請求失敗 (1) 區分
const CONFIG_ERROR_EXIT: i32 = 2;

fn prepare(config: &CliConfig) -> Result<(FunctionInvoker, FunctionRequest)> {
    config.validate()?;

    let (invoker_config, source) = match &config.config {
        Some(path) => {
            let manifest = TomlConfig::from_file(path)?;
            manifest.validate()?;
            let mut invoker_config = manifest.invoker_config();
            invoker_config.expose_errors |= config.expose_errors;
            (invoker_config, manifest.source().to_string())
        }
        None => (
            InvokerConfig {
                expose_errors: config.expose_errors,
                ..InvokerConfig::default()
            },
            config.source.clone(),
        ),
    };

    let invoker = build_invoker(invoker_config, &source)?;
    let request = config.to_request()?;
    Ok((invoker, request))
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    // 初始化日誌
    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting generate-content local invocation");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    let (invoker, request) = match prepare(&config) {
        Ok(prepared) => prepared,
        Err(e) => {
            tracing::error!("❌ Configuration failed: {} (Category: {:?})", e, e.category());
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 建議: {}", e.recovery_suggestion());
            std::process::exit(CONFIG_ERROR_EXIT);
        }
    };

    let response = invoker.invoke(request).await;

    println!("{}", serde_json::to_string_pretty(&response)?);

    if !response.is_success() {
        std::process::exit(1);
    }

    Ok(())
}
