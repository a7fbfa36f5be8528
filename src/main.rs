use clap::Parser;
use md_to_html::utils::{logger, validation::Validate};
use md_to_html::{CliConfig, ConvertError, EtlEngine, HttpSource, LocalStorage, PagePipeline};

fn report_failure(stage: &str, e: &ConvertError) -> ! {
    tracing::error!(
        "❌ {} failed: {} (Category: {:?}, Severity: {:?})",
        stage,
        e,
        e.category(),
        e.severity()
    );
    tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 Suggestion: {}", e.recovery_suggestion());

    std::process::exit(e.severity().exit_code());
}

#[tokio::main]
async fn main() {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting md-to-html");
    tracing::debug!("CLI config: {:?}", config);

    if let Err(e) = config.validate() {
        report_failure("Configuration validation", &e);
    }

    let storage = LocalStorage::new(config.output_dir.clone());
    let pipeline = match PagePipeline::new(HttpSource::new(), storage, config) {
        Ok(pipeline) => pipeline,
        Err(e) => report_failure("Rule compilation", &e),
    };

    let engine = EtlEngine::new(pipeline);

    match engine.run().await {
        Ok(output_path) => {
            tracing::info!("✅ Conversion completed successfully!");
            println!("✅ Conversion completed successfully!");
            println!("📁 Output saved to: {}", output_path);
        }
        Err(e) => report_failure("Conversion", &e),
    }
}
