use clap::Parser;
use season_metrics::utils::{logger, validation::Validate};
use season_metrics::{CliConfig, LocalStorage, MetricsEngine, SeasonLoader};

fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    // 初始化日誌
    if cli.json_logs {
        logger::init_json_logger(cli.verbose);
    } else {
        logger::init_cli_logger(cli.verbose);
    }

    tracing::info!("Starting season-metrics");
    tracing::debug!("CLI config: {:?}", cli);

    let config = match cli.resolve().and_then(|config| config.validate().map(|_| config)) {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("Configuration validation failed: {}", e);
            tracing::error!("Suggestion: {}", e.recovery_suggestion());
            eprintln!("❌ {}", e.user_friendly_message());
            std::process::exit(e.severity().exit_code());
        }
    };

    let storage = LocalStorage::new(cli.data_dir.clone());
    let engine = MetricsEngine::new(SeasonLoader::new(storage, config));

    match engine.run() {
        Ok(run) => {
            println!("{}", run.report.to_json(true)?);
            if let Some(path) = run.output_path {
                tracing::info!("Report saved to: {}", path);
            }
        }
        Err(e) => {
            tracing::error!(
                "Season load failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
            tracing::error!("Recovery suggestion: {}", e.recovery_suggestion());
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());

            // 依嚴重程度決定退出碼
            std::process::exit(e.severity().exit_code());
        }
    }

    Ok(())
}
