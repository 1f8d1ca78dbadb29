use clap::Parser;
use ndjson_parser::core::filter::filter_by_key;
use ndjson_parser::utils::{logger, validation::Validate};
use ndjson_parser::{
    CliConfig, ExportPipeline, FilterState, IngestionPipeline, LocalFileSink, LocalFileSource,
    ParseOutcome,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting ndjson-parser CLI");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = config.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }

    let ingestion = IngestionPipeline::new(LocalFileSource::new());
    let records = match ingestion.run(&config.input).await {
        ParseOutcome::Success(records) => {
            tracing::info!("Parsed {} records from {}", records.len(), config.input);
            records
        }
        ParseOutcome::Error(message) => {
            tracing::error!("Parse failed: {}", message);
            eprintln!("❌ {}", message);
            std::process::exit(1);
        }
    };

    // The filter always runs over the full parsed sequence.
    let mut filter = FilterState::default();
    if let Some(key) = config.filter_key.clone() {
        filter.apply(key, config.filter_value.clone());
    }
    let display = if filter.active {
        let filtered = filter_by_key(&records, &filter.key, filter.value.as_deref());
        tracing::info!("Filter matched {} of {} records", filtered.len(), records.len());
        filtered
    } else {
        records
    };

    let export = ExportPipeline::new(LocalFileSink::new(config.output_path.clone()));
    match export
        .run(&display, config.format, config.file_name.as_deref())
        .await
    {
        Ok(destination) => {
            tracing::info!("Export completed: {}", destination);
            println!("✅ Exported {} records", display.len());
            println!("📁 Output saved to: {}", destination);
        }
        Err(e) => {
            tracing::error!("Export failed: {}", e);
            eprintln!("❌ {}", e);
            std::process::exit(1);
        }
    }

    Ok(())
}
