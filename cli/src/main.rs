//! Quest Boost CLI - Main entry point

mod commands;
mod config;
mod state;

use commands::Command;
use config::CliConfig;
use state::AppState;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Log filter used when `RUST_LOG` is unset
const DEFAULT_LOG_FILTER: &str = "questboost=info,questboost_engine=info,\
questboost_networking=info,questboost_persistence=info";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| DEFAULT_LOG_FILTER.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let command = match Command::parse(std::env::args()) {
        Ok(command) => command,
        Err(e) => {
            eprintln!("{}\n\n{}", e, commands::USAGE);
            std::process::exit(2);
        }
    };

    if command == Command::Help {
        println!("{}", commands::USAGE);
        return Ok(());
    }

    let config = CliConfig::from_env()?;
    tracing::info!(
        "Starting quest boost feed against {} ({})",
        config.api_base,
        config
            .address
            .as_ref()
            .map(|a| a.to_string())
            .unwrap_or_else(|| "signed out".to_string())
    );

    let state = AppState::new(config).await?;
    commands::run(command, &state).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use tracing_subscriber::EnvFilter;

    #[test]
    fn test_default_filter_covers_every_crate() {
        for target in [
            "questboost",
            "questboost_engine",
            "questboost_networking",
            "questboost_persistence",
        ] {
            assert!(
                DEFAULT_LOG_FILTER.split(',').any(|d| d == format!("{}=info", target)),
                "{} missing from default filter",
                target
            );
        }
        assert!(DEFAULT_LOG_FILTER.parse::<EnvFilter>().is_ok());
    }
}
