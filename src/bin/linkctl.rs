//! CLI front end for the link store.
//!
//! Thin wrapper over the library: shorten a URL, resolve a token, mint a
//! free token, or probe store connectivity. Adds no semantics of its own.
//!
//! # Usage
//!
//! ```bash
//! # Shorten a URL and print the token
//! cargo run --bin linkctl -- shorten https://example.com
//!
//! # Resolve a token (exit code 1 on a miss)
//! cargo run --bin linkctl -- resolve YaMl6
//!
//! # Mint a free token without inserting it
//! cargo run --bin linkctl -- token --length 6
//!
//! # Check store connectivity
//! cargo run --bin linkctl -- db check
//! ```
//!
//! # Environment Variables
//!
//! See [`link_store::config`] for the full list; `DATABASE_URL` (or the
//! `DB_*` components) is required.

use std::process::ExitCode;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use serde_json::json;
use tracing_subscriber::EnvFilter;

use link_store::config::{self, Config};
use link_store::domain::connection::ConnectionProvider;
use link_store::prelude::{
    DEFAULT_ALPHABET, DEFAULT_TOKEN_LENGTH, LinkStore, PgConnectionProvider, PgLinkRepository,
};

/// CLI tool for the link store.
#[derive(Parser)]
#[command(name = "linkctl")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Emit results as JSON instead of colored text
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Shorten a URL and print its token
    Shorten {
        /// The long URL to store (stored verbatim, not validated)
        url: String,
    },

    /// Resolve a token back to its URL
    Resolve {
        /// The short token to look up
        short: String,
    },

    /// Mint a free token without inserting it
    Token {
        /// Characters to draw from
        #[arg(long, default_value = DEFAULT_ALPHABET)]
        alphabet: String,

        /// Token length
        #[arg(long, default_value_t = DEFAULT_TOKEN_LENGTH)]
        length: usize,
    },

    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },
}

/// Database operation subcommands.
#[derive(Subcommand)]
enum DbAction {
    /// Check store connectivity
    Check,
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let config = config::load_from_env().context("Failed to load configuration")?;
    init_tracing(&config);

    let provider =
        PgConnectionProvider::from_config(&config).context("Failed to parse DATABASE_URL")?;

    match cli.command {
        Commands::Shorten { url } => shorten(&config, provider, url, cli.json).await,
        Commands::Resolve { short } => resolve(&config, provider, &short, cli.json).await,
        Commands::Token { alphabet, length } => {
            mint_token(&config, provider, &alphabet, length, cli.json).await
        }
        Commands::Db { action } => match action {
            DbAction::Check => db_check(provider, cli.json).await,
        },
    }
}

fn init_tracing(config: &Config) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_level.clone()));

    let builder = tracing_subscriber::fmt().with_env_filter(filter);

    if config.log_format == "json" {
        builder.json().init();
    } else {
        builder.init();
    }
}

fn store_for(
    config: &Config,
    provider: PgConnectionProvider,
) -> LinkStore<PgLinkRepository<PgConnectionProvider>> {
    let repository = PgLinkRepository::new(provider, config.table.clone());
    LinkStore::new(Arc::new(repository))
}

async fn shorten(
    config: &Config,
    provider: PgConnectionProvider,
    url: String,
    as_json: bool,
) -> Result<ExitCode> {
    let store = store_for(config, provider);

    let short = store
        .create(url.clone())
        .await
        .context("Failed to create short link")?;

    if as_json {
        println!("{}", json!({ "short": short, "long_url": url }));
    } else {
        println!("{} {}", "Created:".green().bold(), short);
    }

    Ok(ExitCode::SUCCESS)
}

async fn resolve(
    config: &Config,
    provider: PgConnectionProvider,
    short: &str,
    as_json: bool,
) -> Result<ExitCode> {
    let store = store_for(config, provider);

    let url = store
        .resolve(short)
        .await
        .context("Failed to resolve short link")?;

    match url {
        Some(url) => {
            if as_json {
                println!("{}", json!({ "short": short, "long_url": url }));
            } else {
                println!("{}", url);
            }
            Ok(ExitCode::SUCCESS)
        }
        None => {
            if as_json {
                println!("{}", json!({ "short": short, "long_url": null }));
            } else {
                eprintln!("{} no link for token '{}'", "Not found:".yellow(), short);
            }
            Ok(ExitCode::FAILURE)
        }
    }
}

async fn mint_token(
    config: &Config,
    provider: PgConnectionProvider,
    alphabet: &str,
    length: usize,
    as_json: bool,
) -> Result<ExitCode> {
    let store = store_for(config, provider);

    let token = store
        .generate_unique_token_with(alphabet, length)
        .await
        .context("Failed to generate a free token")?;

    if as_json {
        println!("{}", json!({ "token": token }));
    } else {
        println!("{}", token);
    }

    Ok(ExitCode::SUCCESS)
}

async fn db_check(provider: PgConnectionProvider, as_json: bool) -> Result<ExitCode> {
    match provider.acquire().await {
        Ok(_) => {
            if as_json {
                println!("{}", json!({ "reachable": true }));
            } else {
                println!("{} store is reachable", "OK:".green().bold());
            }
            Ok(ExitCode::SUCCESS)
        }
        Err(e) => {
            if as_json {
                println!("{}", json!({ "reachable": false, "error": e.to_string() }));
            } else {
                eprintln!("{} {}", "Unreachable:".red().bold(), e);
            }
            Ok(ExitCode::FAILURE)
        }
    }
}
