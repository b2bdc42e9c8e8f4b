use clap::Parser;
use multi_service_host::utils::logger;
use multi_service_host::{default_services, CliConfig, MultiServiceHost, StaticPage};

#[tokio::main]
async fn main() {
    let config = CliConfig::parse();

    // 初始化日誌
    if config.json_logs {
        logger::init_json_logger(config.verbose);
    } else {
        logger::init_cli_logger(config.verbose);
    }

    tracing::info!("Starting multi-service-host");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    let host = match MultiServiceHost::new(default_services(), StaticPage) {
        Ok(host) => host,
        Err(e) => {
            tracing::error!("❌ Configuration validation failed: {}", e);
            tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
            eprintln!("❌ {}", e.user_friendly_message());
            std::process::exit(1);
        }
    };

    // The primary listener blocks here until the process is killed.
    if let Err(e) = host.run().await {
        tracing::error!("❌ Primary listener failed: {}", e);
        tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 {}", e.recovery_suggestion());
        std::process::exit(1);
    }
}
