//! CLI administration tool for link-gateway.
//!
//! Talks to the backing link service directly, using the same client and
//! validation rules as the HTTP gateway.
//!
//! # Usage
//!
//! ```bash
//! # List all links
//! cargo run --bin admin -- links list
//!
//! # Create a link (validated locally first)
//! cargo run --bin admin -- links create https://example.com --code demo
//!
//! # Create a link with a generated code
//! cargo run --bin admin -- links create https://example.com
//!
//! # Delete a link
//! cargo run --bin admin -- links delete demo
//!
//! # Suggest short codes
//! cargo run --bin admin -- generate-code --count 5
//!
//! # Check the backing service
//! cargo run --bin admin -- backend check
//! ```
//!
//! # Environment Variables
//!
//! Same as the server, see [`link_gateway::config`]. Only `LINK_BACKEND_URL`
//! and the backend timeouts matter here.

use link_gateway::config;
use link_gateway::domain::entities::{LinkCreateRequest, LinkRecord, UpstreamResponse};
use link_gateway::domain::repositories::LinkBackend;
use link_gateway::domain::validation::validate;
use link_gateway::infrastructure::backend::HttpLinkBackend;
use link_gateway::utils::code_generator::generate_code;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::Confirm;

/// CLI tool for managing links through the backing service.
#[derive(Parser)]
#[command(name = "admin")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Top-level command groups.
#[derive(Subcommand)]
enum Commands {
    /// Manage links
    Links {
        #[command(subcommand)]
        action: LinkAction,
    },

    /// Suggest random short codes (no backend call)
    GenerateCode {
        /// Number of codes to print
        #[arg(short, long, default_value_t = 1)]
        count: usize,
    },

    /// Backing service operations
    Backend {
        #[command(subcommand)]
        action: BackendAction,
    },
}

/// Link management subcommands.
#[derive(Subcommand)]
enum LinkAction {
    /// List all links
    List,

    /// Create a link
    Create {
        /// Destination URL
        long_url: String,

        /// Short code (generated if not provided)
        #[arg(short, long)]
        code: Option<String>,
    },

    /// Delete a link
    Delete {
        /// Short code to delete
        short_code: String,

        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },
}

/// Backing service subcommands.
#[derive(Subcommand)]
enum BackendAction {
    /// Check that the backing service answers its health endpoint
    Check,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    if let Commands::GenerateCode { count } = cli.command {
        for _ in 0..count {
            println!("{}", generate_code());
        }
        return Ok(());
    }

    let config = config::load_from_env().context("Invalid configuration")?;
    let backend = HttpLinkBackend::from_config(&config)?;

    match cli.command {
        Commands::Links { action } => handle_link_action(action, &backend).await?,
        Commands::Backend { action } => handle_backend_action(action, &backend).await?,
        Commands::GenerateCode { .. } => {}
    }

    Ok(())
}

/// Dispatches link management commands.
async fn handle_link_action(action: LinkAction, backend: &HttpLinkBackend) -> Result<()> {
    match action {
        LinkAction::List => list_links(backend).await?,
        LinkAction::Create { long_url, code } => {
            let short_code = code.unwrap_or_else(generate_code);
            create_link(backend, short_code, long_url).await?;
        }
        LinkAction::Delete { short_code, yes } => delete_link(backend, short_code, yes).await?,
    }

    Ok(())
}

/// Lists all links as a table.
///
/// # Output Format
///
/// ```text
/// 📋 Links
///
///   Code         Clicks  Created           Destination
///   ─────────────────────────────────────────────────────────────────────────
///   demo         3       2024-05-01 10:00  https://example.com
/// ```
async fn list_links(backend: &HttpLinkBackend) -> Result<()> {
    println!("{}", "📋 Links".bright_blue().bold());
    println!();

    let response = backend
        .list_links()
        .await
        .map_err(|e| anyhow::anyhow!("Failed to list links: {}", e))?;
    let response = ensure_success(response, "list links")?;

    let links = LinkRecord::parse_list(&response.body)
        .context("Backend returned an unexpected link list")?;

    if links.is_empty() {
        println!("{}", "  No links found".yellow());
        return Ok(());
    }

    println!(
        "  {:<12} {:<7} {:<17} {}",
        "Code".bright_white().bold(),
        "Clicks".bright_white().bold(),
        "Created".bright_white().bold(),
        "Destination".bright_white().bold()
    );
    println!("  {}", "─".repeat(75).bright_black());

    for link in &links {
        println!(
            "  {:<12} {:<7} {:<17} {}",
            link.short_code.cyan(),
            link.clicks.to_string().bright_white(),
            link.created_at
                .format("%Y-%m-%d %H:%M")
                .to_string()
                .bright_black(),
            link.long_url
        );
    }

    let total_clicks: u64 = links.iter().map(|l| l.clicks).sum();

    println!();
    println!(
        "  Total: {} links, {} clicks",
        links.len().to_string().bright_white().bold(),
        total_clicks.to_string().bright_white().bold()
    );
    println!();

    Ok(())
}

/// Validates and creates a link.
async fn create_link(backend: &HttpLinkBackend, short_code: String, long_url: String) -> Result<()> {
    let request = LinkCreateRequest::new(short_code, long_url);

    if let Err(e) = validate(&request) {
        println!("{} {}", "❌".red(), e.to_string().red());
        anyhow::bail!("Validation failed: {}", e);
    }

    let payload = serde_json::to_value(&request)?;
    let response = backend
        .create_link(&payload)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to create link: {}", e))?;
    ensure_success(response, "create link")?;

    println!("{}", "✅ Link created successfully!".green().bold());
    println!("  Code: {}", request.short_code.bright_yellow().bold());
    println!("  URL:  {}", request.long_url.cyan());

    Ok(())
}

/// Deletes a link with confirmation prompt.
async fn delete_link(backend: &HttpLinkBackend, short_code: String, skip_confirm: bool) -> Result<()> {
    if !skip_confirm {
        let confirmed = Confirm::new()
            .with_prompt(format!("Delete link '{}'?", short_code))
            .default(false)
            .interact()?;

        if !confirmed {
            println!("{}", "❌ Cancelled".red());
            return Ok(());
        }
    }

    let response = backend
        .delete_link(&short_code)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to delete link: {}", e))?;
    ensure_success(response, "delete link")?;

    println!("{}", "✅ Link deleted successfully".green().bold());

    Ok(())
}

/// Dispatches backing service commands.
async fn handle_backend_action(action: BackendAction, backend: &HttpLinkBackend) -> Result<()> {
    match action {
        BackendAction::Check => {
            println!(
                "{} {}",
                "🔍 Checking".bright_blue().bold(),
                backend.base_url().as_str().cyan()
            );

            match backend.health().await {
                Ok(response) if response.is_success() => {
                    println!("{}", "✅ Backend is healthy".green().bold());
                }
                Ok(response) => {
                    println!(
                        "{} {}",
                        "❌ Backend unhealthy:".red().bold(),
                        response.status
                    );
                    anyhow::bail!("Backend health check returned {}", response.status);
                }
                Err(e) => {
                    println!("{} {}", "❌ Backend unreachable:".red().bold(), e);
                    anyhow::bail!("Backend health check failed");
                }
            }
        }
    }

    Ok(())
}

/// Turns a non-2xx backend answer into an error carrying its status and body.
fn ensure_success(response: UpstreamResponse, operation: &str) -> Result<UpstreamResponse> {
    if response.is_success() {
        return Ok(response);
    }

    let body = String::from_utf8_lossy(&response.body);
    anyhow::bail!(
        "Backend refused to {}: {} {}",
        operation,
        response.status,
        body.trim()
    )
}
