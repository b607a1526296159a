//! Gatehouse CLI - Offline access gate checks.
//!
//! Reads gate settings from the environment (and `.env`) exactly like the
//! storefront service does.
//!
//! # Usage
//!
//! ```bash
//! # Would an anonymous visitor get into store 2?
//! gatehouse-cli check --store 2
//!
//! # Would customer 7, created in store 1 and in group 3, get into store 2?
//! gatehouse-cli check --store 2 --customer 7 --customer-store 1 --group 3
//!
//! # Show the effective settings for store 2
//! gatehouse-cli settings --store 2
//! ```

#![cfg_attr(not(test), forbid(unsafe_code))]

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser)]
#[command(name = "gatehouse-cli")]
#[command(author, version, about = "Gatehouse access gate tools")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Evaluate the access gate for a visitor
    Check {
        /// Store being browsed
        #[arg(short, long)]
        store: i32,

        /// Logged-in customer id (omit for an anonymous visitor)
        #[arg(short, long)]
        customer: Option<i32>,

        /// Store the customer was created in (0 for back-office accounts)
        #[arg(long)]
        customer_store: Option<i32>,

        /// Customer group id
        #[arg(short, long)]
        group: Option<i32>,
    },
    /// Print the effective gate settings for a store
    Settings {
        /// Store to resolve settings for
        #[arg(short, long)]
        store: i32,
    },
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("gatehouse_cli=info,gatehouse_storefront=warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    // Load .env file if present (ignore errors if not found)
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();

    let result: Result<(), Box<dyn std::error::Error>> = run(cli);

    if let Err(e) = result {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let config_store = gatehouse_storefront::config_store::ScopedConfigStore::from_env();

    match cli.command {
        Commands::Check {
            store,
            customer,
            customer_store,
            group,
        } => {
            let visitor = commands::check::visitor_from_args(customer, customer_store, group)?;
            let report = commands::check::evaluate(&config_store, store.into(), visitor);
            print_report(&report);
        }
        Commands::Settings { store } => {
            let report = commands::settings::describe(&config_store, store.into());
            print_report(&report);
        }
    }
    Ok(())
}

/// Write a command report to stdout.
#[allow(clippy::print_stdout)]
fn print_report(report: &impl std::fmt::Display) {
    println!("{}", report.to_string().trim_end());
}
