//! Command-line tool for the DNS URL shortener.
//!
//! Runs the same workflow as the web service from a terminal, and looks up
//! published links without going through the browser.
//!
//! # Usage
//!
//! ```bash
//! # Show the short code a URL maps to
//! cargo run --bin dnsurl -- code https://example.com/page
//!
//! # Look up the URL behind a short code
//! cargo run --bin dnsurl -- resolve fb37c0
//!
//! # List provider zones (checks the API token)
//! cargo run --bin dnsurl -- zones
//!
//! # Publish a short link
//! cargo run --bin dnsurl -- shorten https://example.com/page
//! ```
//!
//! # Environment Variables
//!
//! Same as the server: `DOMAIN`, `IONOS_API_TOKEN`, optional `IONOS_API_URL`
//! and `HTTP_TIMEOUT_SECONDS`. A `.env` file is honored.

use dns_url_shortener::config::{self, Config};
use dns_url_shortener::domain::entities::ShortCode;
use dns_url_shortener::domain::ports::DnsProvider;
use dns_url_shortener::infrastructure::IonosClient;
use dns_url_shortener::server::build_shortener;
use dns_url_shortener::utils::url_validator::validate_url;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::Confirm;

/// CLI tool for the DNS URL shortener.
#[derive(Parser)]
#[command(name = "dnsurl")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Top-level commands.
#[derive(Subcommand)]
enum Commands {
    /// Print the short code and record name for a URL
    Code {
        /// URL to hash
        url: String,
    },

    /// Look up the URL published under a short code
    Resolve {
        /// 6-character short code
        code: String,
    },

    /// List zones visible to the API token
    Zones,

    /// Publish a URL as a TXT record
    Shorten {
        /// URL to shorten
        url: String,

        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Commands::Code { url } => show_code(&url)?,
        Commands::Resolve { code } => resolve(&load_config()?, &code).await?,
        Commands::Zones => list_zones(&load_config()?).await?,
        Commands::Shorten { url, yes } => shorten(&load_config()?, &url, yes).await?,
    }

    Ok(())
}

fn load_config() -> Result<Config> {
    config::load_from_env().context("Invalid configuration")
}

/// Prints the short code for a URL. Works without configuration; the record
/// name and short URL are shown when `DOMAIN` is set.
fn show_code(url: &str) -> Result<()> {
    let url = validate_url(url).map_err(|e| anyhow::anyhow!("{}", e))?;
    let code = ShortCode::from_url(url);

    println!("  Code:   {}", code.as_str().bright_yellow().bold());

    if let Ok(domain) = std::env::var("DOMAIN") {
        let domain = domain.trim();
        println!("  Record: {}", code.record_name(domain).cyan());
        println!("  Short:  {}", code.short_url(domain).bright_white());
    }

    Ok(())
}

/// Looks up `{code}.{domain}` and prints the first TXT record.
async fn resolve(config: &Config, code: &str) -> Result<()> {
    let shortener = build_shortener(config)?;

    println!("{}", "🔍 Resolving short code...".bright_blue());

    let url = shortener
        .resolve(code)
        .await
        .map_err(|e| anyhow::anyhow!("{}", e))?;

    match url {
        Some(url) => {
            println!("{} {}", "✅ Redirect target:".green().bold(), url.bright_white());
        }
        None => {
            println!(
                "{}",
                "⚠️  No URL is published under this code (it may still be propagating)"
                    .yellow()
            );
        }
    }

    Ok(())
}

/// Lists provider zones, marking the one matching `DOMAIN`.
async fn list_zones(config: &Config) -> Result<()> {
    let client = IonosClient::builder(&config.provider_api_url, &config.provider_api_token)
        .timeout(config.http_timeout())
        .build()?;

    println!("{}", "📋 Provider Zones".bright_blue().bold());
    println!();

    let listing = client.list_zones().await?;

    match listing.status {
        200 => {}
        401 => anyhow::bail!("Invalid API token."),
        other => anyhow::bail!("Cannot retrieve zones (HTTP {}).", other),
    }

    if listing.zones.is_empty() {
        println!("{}", "  No zones found".yellow());
        return Ok(());
    }

    println!(
        "  {:<40} {:<40}",
        "ID".bright_white().bold(),
        "Name".bright_white().bold()
    );
    println!("  {}", "─".repeat(80).bright_black());

    for zone in &listing.zones {
        let marker = if zone.name == config.domain {
            "← DOMAIN".green().bold()
        } else {
            "".normal()
        };

        println!(
            "  {:<40} {:<40} {}",
            zone.id.bright_black(),
            zone.name.cyan(),
            marker
        );
    }

    println!();
    if listing.find_zone_id(&config.domain).is_none() {
        println!(
            "{}",
            format!("⚠️  No zone matches DOMAIN={}", config.domain).yellow()
        );
    }

    Ok(())
}

/// Runs the shortening workflow after confirmation.
async fn shorten(config: &Config, url: &str, skip_confirm: bool) -> Result<()> {
    let shortener = build_shortener(config)?;

    println!("{}", "🔗 Shorten URL".bright_blue().bold());
    println!();
    println!("  URL:    {}", url.trim().cyan());
    println!("  Domain: {}", config.domain.cyan());
    println!();

    if !skip_confirm {
        let confirmed = Confirm::new()
            .with_prompt("Publish this URL as a TXT record?")
            .default(true)
            .interact()?;

        if !confirmed {
            println!("{}", "❌ Cancelled".red());
            return Ok(());
        }
    }

    match shortener.shorten(url).await {
        Ok(outcome) => {
            println!("{}", format!("✅ {}", outcome.message).green().bold());
            if let Some(short_url) = outcome.short_url {
                println!("  {}", short_url.bright_yellow().bold());
            }
        }
        Err(e) => {
            anyhow::bail!("Status {}: {}", e.status_code().as_u16(), e);
        }
    }

    Ok(())
}
