//! CLI commands

use crate::state::AppState;
use anyhow::{bail, Context};
use questboost_core::{Address, BoostId};
use questboost_engine::{load_feed, spawn_feed_monitor, BoostFeed};
use questboost_networking::api;
use questboost_persistence::sqlite;
use tracing::info;

pub const USAGE: &str = "\
usage: questboost [command]

commands:
  feed [--json]        print the boost feed once (default)
  watch                reprint the feed every QUESTBOOST_POLL_SECS seconds
  claim <boost_id>     record that the configured address claimed a boost
  unclaim <boost_id>   forget a recorded claim
  claims               list recorded claims

environment:
  QUESTBOOST_API_URL, QUESTBOOST_ADDRESS, QUESTBOOST_DATA_DIR, QUESTBOOST_POLL_SECS";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Feed { json: bool },
    Watch,
    Claim(BoostId),
    Unclaim(BoostId),
    Claims,
    Help,
}

impl Command {
    pub fn parse<I, S>(args: I) -> anyhow::Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let args: Vec<String> = args.into_iter().map(|a| a.as_ref().to_string()).collect();
        let rest: Vec<&str> = args.iter().skip(1).map(String::as_str).collect();

        let command = match rest.as_slice() {
            [] | ["feed"] => Command::Feed { json: false },
            ["feed", "--json"] | ["--json"] => Command::Feed { json: true },
            ["watch"] => Command::Watch,
            ["claim", id] => Command::Claim(parse_boost_id(id)?),
            ["unclaim", id] => Command::Unclaim(parse_boost_id(id)?),
            ["claims"] => Command::Claims,
            ["help"] | ["-h"] | ["--help"] => Command::Help,
            other => bail!("unrecognized arguments: {}", other.join(" ")),
        };
        Ok(command)
    }
}

fn parse_boost_id(raw: &str) -> anyhow::Result<BoostId> {
    raw.parse::<BoostId>()
        .with_context(|| format!("invalid boost id: {}", raw))
}

fn require_address(state: &AppState) -> anyhow::Result<&Address> {
    state
        .config
        .address
        .as_ref()
        .context("QUESTBOOST_ADDRESS must be set for this command")
}

fn print_feed(feed: &BoostFeed, json: bool) -> anyhow::Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(feed)?);
    } else {
        print!("{}", feed);
    }
    Ok(())
}

pub async fn run(command: Command, state: &AppState) -> anyhow::Result<()> {
    match command {
        Command::Feed { json } => {
            let feed = load_feed(&state.feed_sources(), state.config.address.as_ref()).await;
            print_feed(&feed, json)
        }
        Command::Watch => watch(state).await,
        Command::Claim(boost_id) => record_claim(state, boost_id).await,
        Command::Unclaim(boost_id) => {
            let address = require_address(state)?;
            sqlite::clear_claim(state.db.pool(), address, boost_id).await?;
            println!("Cleared claim of boost {} for {}", boost_id, address);
            Ok(())
        }
        Command::Claims => {
            let address = require_address(state)?;
            let claims = sqlite::list_claims(state.db.pool(), address).await?;
            if claims.is_empty() {
                println!("No claims recorded for {}", address);
            }
            for claim in claims {
                println!(
                    "boost {}: {} (updated {})",
                    claim.boost_id,
                    if claim.claimed { "claimed" } else { "not claimed" },
                    claim.updated_at
                );
            }
            Ok(())
        }
        Command::Help => {
            println!("{}", USAGE);
            Ok(())
        }
    }
}

async fn record_claim(state: &AppState, boost_id: BoostId) -> anyhow::Result<()> {
    let address = require_address(state)?;
    let boost = api::fetch_boost(&state.client, boost_id)
        .await
        .with_context(|| format!("boost {} could not be loaded", boost_id))?;

    sqlite::set_claim_status(state.db.pool(), address, boost.id, true).await?;
    info!("Recorded claim of boost {} for {}", boost.id, address);
    println!("Recorded claim of \"{}\" for {}", boost.name, address);
    Ok(())
}

async fn watch(state: &AppState) -> anyhow::Result<()> {
    let handle = spawn_feed_monitor(
        state.feed_sources(),
        state.config.address.clone(),
        state.config.poll_secs,
    );
    let mut feeds = handle.subscribe();

    loop {
        tokio::select! {
            changed = feeds.changed() => {
                if changed.is_err() {
                    break;
                }
                let latest = feeds.borrow_and_update().clone();
                if let Some(feed) = latest {
                    println!("--- {} ---", feed.generated_at);
                    print_feed(&feed, false)?;
                }
            }
            _ = tokio::signal::ctrl_c() => {
                info!("Interrupted, stopping feed monitor");
                handle.stop().await;
                break;
            }
        }
    }
    Ok(())
}
