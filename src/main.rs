use clap::Parser;
use poly_scalper::cli::{Cli, Commands};
use poly_scalper::config::Config;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Load configuration, falling back to built-in defaults
    let config = Config::load(&cli.config).unwrap_or_else(|e| {
        eprintln!("Warning: Could not load config from {}: {}", cli.config, e);
        eprintln!("Using default configuration");
        Config::default()
    });

    poly_scalper::telemetry::init_logging(&config.telemetry.log_level)?;

    match cli.command {
        Commands::Rank(args) => {
            tracing::info!("Starting ranking pass");
            args.execute(&config).await?;
        }
        Commands::Top(args) => {
            tracing::info!("Fetching top markets");
            args.execute(&config).await?;
        }
        Commands::Config => {
            println!("Current configuration:");
            println!("  Gamma API: {}", config.api.gamma_url);
            println!("  CLOB API: {}", config.api.clob_url);
            println!("  Request timeout: {}s", config.api.timeout_secs);
            println!(
                "  Ranking: limit={}, refresh={}s",
                config.ranking.default_limit, config.ranking.refresh_interval_secs
            );
            println!(
                "  Weights: spread={}, churn={}, reversion={}, depth={}, time={}",
                config.weights.spread,
                config.weights.churn,
                config.weights.reversion,
                config.weights.depth,
                config.weights.time
            );
        }
    }

    Ok(())
}
