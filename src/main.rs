use card_loader::domain::ports::ConfigProvider;
use card_loader::utils::{logger, validation::Validate};
use card_loader::{parse_cards, AnkiClient, CliConfig, HttpTransport, RetryPolicy, Uploader};
use clap::Parser;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting card-loader");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }

    let raw = match std::fs::read_to_string(&config.input) {
        Ok(raw) => raw,
        Err(e) => {
            tracing::error!("❌ Cannot read input file \"{}\": {}", config.input, e);
            eprintln!("❌ Cannot read input file \"{}\": {}", config.input, e);
            std::process::exit(1);
        }
    };

    let parsed = parse_cards(&raw);

    let retry = RetryPolicy {
        max_attempts: config.max_retries(),
        delay: config.retry_delay(),
    };
    let transport = HttpTransport::new(config.endpoint().to_string());
    let client = AnkiClient::new(transport, retry);
    let uploader = Uploader::new(client, config);

    match uploader.run(&parsed).await {
        Ok(summary) => {
            tracing::info!(
                "✅ Upload completed: {}/{} cards added to \"{}\"",
                summary.uploaded,
                summary.attempted,
                summary.deck
            );
            println!(
                "✅ Upload completed: {}/{} cards added to \"{}\"",
                summary.uploaded, summary.attempted, summary.deck
            );
            if summary.failed > 0 {
                println!("⚠️  {} card(s) failed, see the log for details", summary.failed);
            }
        }
        Err(e) => {
            tracing::error!("❌ Upload failed: {}", e);
            eprintln!("❌ {}", e);
            std::process::exit(1);
        }
    }

    Ok(())
}
