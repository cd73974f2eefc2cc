//! League Dashboard CLI
//!
//! Renders the dashboard sections in the terminal:
//! - standings: live Sleeper standings
//! - history: all-time records sheet
//! - drafts / draft: draft archive by year
//! - player: profile link lookup

mod render;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use std::path::PathBuf;
use tracing::info;

use league_data::config::save_config;
use league_data::{initialize_logging, load_config, LeagueDashboard, Section, Table};

#[derive(Parser)]
#[command(name = "league-dashboard")]
#[command(about = "League dashboard: standings, historical records and draft archives")]
#[command(version = "0.1.0")]
struct Cli {
    /// TOML configuration file, layered over the built-in league defaults
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Print sheet tables as Markdown instead of aligned text
    #[arg(long, global = true)]
    markdown: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Live standings ranked by points-for
    Standings,

    /// All-time records sheet
    History,

    /// Available draft years, newest first
    Drafts,

    /// Draft picks for one year, with player profile links
    Draft {
        /// Sheet name of the draft year, e.g. 2024
        year: String,
    },

    /// Look up players by name
    Player {
        /// Full name, or part of one
        name: String,
    },

    /// Show the effective configuration
    Config {
        /// Write it to this TOML file instead of printing it
        #[arg(long)]
        write: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();
    let cli = Cli::parse();

    let config = load_config(cli.config.as_deref()).context("Failed to load configuration")?;
    initialize_logging(&config.logging)?;
    info!("Starting league dashboard v{}", env!("CARGO_PKG_VERSION"));

    if let Commands::Config { write } = &cli.command {
        match write {
            Some(path) => {
                save_config(&config, path)?;
                println!("{} {}", "✅ Configuration written to".green(), path.display());
            }
            None => println!("{}", serde_json::to_string_pretty(&config)?),
        }
        return Ok(());
    }

    let dashboard = LeagueDashboard::from_config(&config)?;

    match cli.command {
        Commands::Standings => {
            print_title("🏈 Live Standings");
            match dashboard.standings().await {
                Section::Ready(standings) if standings.is_empty() => println!("No standings yet"),
                Section::Ready(standings) => print!("{}", render::render_standings(&standings)),
                other => print_missing(&other),
            }
        }
        Commands::History => {
            print_title(&format!("🏆 {}", dashboard.history_sheet()));
            print_section(&dashboard.history().await, cli.markdown);
        }
        Commands::Drafts => {
            print_title("📋 Draft Archive");
            let years = dashboard.draft_years().await;
            if years.is_empty() {
                println!("{}", "No draft sheets available".yellow());
            }
            for year in years {
                println!("  {}", year);
            }
        }
        Commands::Draft { year } => {
            print_title(&format!("📋 {} Draft", year));
            print_section(&dashboard.draft(&year).await, cli.markdown);
        }
        Commands::Player { name } => {
            print_title(&format!("🔍 Players matching \"{}\"", name));
            if let Some(url) = dashboard.player_link(&name).await {
                println!("{} {}", name.bold(), url.blue());
                return Ok(());
            }
            let matches = dashboard.search_players(&name).await;
            if matches.is_empty() {
                println!("{}", "No matching players".yellow());
            }
            for (full_name, url) in matches {
                println!("{} {}", full_name.bold(), url.blue());
            }
        }
        Commands::Config { .. } => {}
    }

    Ok(())
}

fn print_title(title: &str) {
    println!("{}", title.bold());
    println!("{}", "=".repeat(50));
}

fn print_section(section: &Section<Table>, markdown: bool) {
    match section {
        Section::Ready(table) if markdown => print!("{}", table.to_markdown()),
        Section::Ready(table) => print!("{}", render::render_table(table)),
        other => print_missing(other),
    }
}

fn print_missing<T>(section: &Section<T>) {
    match section {
        Section::Ready(_) => {}
        Section::NotFound(name) => println!("{} {}", "❓ Not found:".yellow(), name),
        Section::Unavailable(reason) => println!("{} {}", "⚠️  Unavailable:".red(), reason),
    }
}
