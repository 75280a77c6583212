use clap::Parser;
use flight_genes::utils::error::ErrorSeverity;
use flight_genes::utils::{logger, validation::Validate};
use flight_genes::{CliConfig, DatasetBuilder};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = CliConfig::parse();

    // 初始化日誌
    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting flight-genes");
    tracing::debug!("CLI config: {:?}", config);

    // 驗證配置
    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 建議: {}", e.recovery_suggestion());
        std::process::exit(1);
    }

    let result = match DatasetBuilder::from_config(&config) {
        Ok(builder) => builder.build_and_persist().await,
        Err(e) => Err(e),
    };

    match result {
        Ok((table, output_path)) => {
            tracing::info!(
                "✅ Ortholog table with {} records saved to {}",
                table.len(),
                output_path
            );
        }
        Err(e) => {
            tracing::error!(
                "❌ Analysis failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 建議: {}", e.recovery_suggestion());

            let exit_code = match e.severity() {
                ErrorSeverity::High => 1,
                ErrorSeverity::Medium => 2,
                ErrorSeverity::Critical => 3, // 系統錯誤 (I/O)
            };
            std::process::exit(exit_code);
        }
    }

    Ok(())
}
