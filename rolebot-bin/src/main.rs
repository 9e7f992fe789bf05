mod adapter;
mod bot;
mod commands;
mod config;
mod logger;
mod signal;

/// Path of the default config.toml file.
const DEFAULT_CONFIG: &str = "./config.toml";

use bot::Handler;
use clap::{Arg, Command};
use rolebot_core::state::State;
use rolebot_core::store::json::JsonStore;
use rolebot_core::store::MainStore;
use serenity::model::gateway::GatewayIntents;
use serenity::Client;

use std::sync::Arc;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let matches = Command::new("rolebot")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Self-service role buttons for Discord")
        .arg(
            Arg::new("config")
                .short('c')
                .long("config")
                .value_name("FILE")
                .help("Provide a path to the config file")
                .takes_value(true),
        )
        .get_matches();

    let path = matches.value_of("config").unwrap_or(DEFAULT_CONFIG);

    // Values in .env only fill variables missing from the environment.
    let _ = dotenv::dotenv();

    let config = match config::load(path, |key| std::env::var(key).ok()) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("Failed to load config {}: {}", path, err);
            std::process::exit(1);
        }
    };

    logger::init(&config);

    // Printed directly, the configured log level may hide it.
    if let Err(err) = config::validate(&config) {
        eprintln!("Invalid config {}: {}", path, err);
        std::process::exit(1);
    }

    let token = config.token.clone();
    let store = MainStore::new(JsonStore::new(config.store_path()));

    log::info!("[CORE] Using store at {}", config.store_path().display());

    let state = Arc::new(State::new(config, store));

    signal::init();

    log::info!("[BOT] Connecting");

    let mut client = match Client::builder(&token, GatewayIntents::GUILDS)
        .event_handler(Handler {
            state: state.clone(),
        })
        .await
    {
        Ok(client) => client,
        Err(err) => {
            log::error!("[BOT] Failed to create client: {}", err);
            std::process::exit(1);
        }
    };

    let shard_manager = client.shard_manager.clone();
    let shutdown = signal::subscribe();
    tokio::spawn(async move {
        shutdown.wait().await;
        log::info!("[BOT] Shutting down shards");
        shard_manager.shutdown_all().await;
    });

    if let Err(err) = client.start().await {
        log::error!("[BOT] Client error: {}", err);
    }

    state.flush().await;
    log::info!("[CORE] Shutdown complete");
}
