//! CLI administration tool for tinylink.
//!
//! Talks to the same Redis instance as the server, without going through HTTP.
//!
//! # Usage
//!
//! ```bash
//! # Check the store connection
//! cargo run --bin admin -- ping
//!
//! # Look up where a code points
//! cargo run --bin admin -- resolve MzQ1Njc4OQ
//!
//! # Show the visit count
//! cargo run --bin admin -- count MzQ1Njc4OQ
//!
//! # Write (or overwrite) a mapping directly
//! cargo run --bin admin -- put promo https://example.com/sale --days 30
//! ```
//!
//! # Environment Variables
//!
//! Same as the server: `REDIS_URL` or `REDIS_HOST` and friends.

use tinylink::AppError;
use tinylink::application::services::LinkService;
use tinylink::application::services::link_service::expiration_ttl;
use tinylink::config::{self, StoreBackend};
use tinylink::server::{Repositories, connect_repositories};
use tinylink::utils::clock::{Clock, SystemClock};
use tinylink::utils::code_generator::validate_alias;
use tinylink::utils::url_validator::validate_url;

use anyhow::{Result, bail};
use clap::{Parser, Subcommand};
use colored::*;
use std::sync::Arc;

/// CLI tool for managing tinylink.
#[derive(Parser)]
#[command(name = "admin")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Check the store connection
    Ping,

    /// Print the long URL behind a short code
    Resolve {
        code: String,
    },

    /// Print the visit count of a short code
    Count {
        code: String,
    },

    /// Write a mapping, overwriting any existing one, and reset its counter
    Put {
        code: String,
        url: String,

        /// Lifetime in days
        #[arg(short, long, default_value_t = 7)]
        days: i64,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let config = config::load_from_env()?;
    if config.store_backend == StoreBackend::Memory {
        bail!("STORE_BACKEND=memory has nothing to administer; point the tool at Redis");
    }

    let clock: Arc<dyn Clock> = Arc::new(SystemClock);
    let repositories = connect_repositories(&config, clock.clone()).await?;

    match cli.command {
        Commands::Ping => handle_ping(&repositories).await,
        Commands::Resolve { code } => handle_resolve(&repositories, &code).await,
        Commands::Count { code } => handle_count(&repositories, &code).await,
        Commands::Put { code, url, days } => {
            handle_put(&repositories, clock.as_ref(), &config.base_url, &code, &url, days).await
        }
    }
}

async fn handle_ping(repositories: &Repositories) -> Result<()> {
    if repositories.links.ping().await {
        println!("{}", "✓ Store reachable".green().bold());
        Ok(())
    } else {
        println!("{}", "✗ Store unreachable".red().bold());
        bail!("store did not answer PING")
    }
}

async fn handle_resolve(repositories: &Repositories, code: &str) -> Result<()> {
    match repositories.links.get(code).await {
        Ok(long_url) => {
            println!("  {} → {}", code.cyan(), long_url.bright_white());
            Ok(())
        }
        Err(AppError::NotFound { .. }) => {
            println!("{}", format!("No live mapping for '{}'", code).yellow());
            Ok(())
        }
        Err(e) => Err(anyhow::anyhow!("Failed to resolve '{}': {}", code, e)),
    }
}

async fn handle_count(repositories: &Repositories, code: &str) -> Result<()> {
    let live = repositories
        .links
        .exists(code)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to check '{}': {}", code, e))?;
    let count = repositories
        .metrics
        .get_count(code)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to read counter for '{}': {}", code, e))?;

    let status = if live {
        "LIVE".green()
    } else {
        "EXPIRED".bright_black()
    };
    println!(
        "  {:<20} {:>10} {}",
        code.cyan(),
        count.to_string().bright_white().bold(),
        status
    );

    Ok(())
}

async fn handle_put(
    repositories: &Repositories,
    clock: &dyn Clock,
    base_url: &str,
    code: &str,
    url: &str,
    days: i64,
) -> Result<()> {
    let long_url = validate_url(url).map_err(|e| anyhow::anyhow!("{}", e))?;
    validate_alias(code)?;
    let ttl = expiration_ttl(Some(days))?;

    repositories.metrics.reset(code).await?;
    repositories.links.put(code, long_url, ttl).await?;

    let expires_at = clock.now() + chrono::Duration::days(days);

    println!("{}", "✅ Mapping written".green().bold());
    println!(
        "  Short URL: {}",
        LinkService::short_url(base_url, code).bright_yellow()
    );
    println!("  Target:    {}", long_url);
    println!("  Expires:   {}", expires_at.format("%Y-%m-%d %H:%M UTC"));

    Ok(())
}
