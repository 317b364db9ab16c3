use auth_cleanup::utils::{logger, validation::Validate};
use auth_cleanup::{CliConfig, DeletionReactor, FirestoreStore, UserDeletedEvent};
use clap::Parser;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = CliConfig::parse();

    logger::init_cli_logger(cli.verbose);

    tracing::info!("Starting auth-cleanup replay");
    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    let config = match cli.resolve() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("Configuration error: {}", e);
            eprintln!("❌ {}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = config.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }

    let client = reqwest::Client::new();
    let store = FirestoreStore::from_config(client, &config);
    let reactor = DeletionReactor::new(store);

    let outcome = reactor
        .handle(UserDeletedEvent {
            user_id: cli.user_id.clone(),
        })
        .await;

    if outcome.deleted {
        println!("✅ Deleted profile document for user {}", outcome.user_id);
    } else {
        eprintln!(
            "❌ Cleanup failed for user {}: {}",
            outcome.user_id,
            outcome.error.as_deref().unwrap_or("unknown error")
        );
        // The managed runtime swallows this; the replay tool surfaces it.
        std::process::exit(1);
    }

    Ok(())
}
