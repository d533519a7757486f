//! Onboardly CLI - employee onboarding record keeper

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use onboardly::config;
use onboardly::storage::SqliteStore;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

#[derive(Parser)]
#[command(name = "onboardly")]
#[command(version)]
#[command(about = "Employee onboarding record keeper")]
#[command(long_about = r#"
Onboardly keeps employee onboarding records two ways:
  • An HTTP JSON API over a flat file (employees + feedback)
  • A console menu over a SQLite database with onboarding plans,
    feedback ratings, and a terminal bar-chart view

Example usage:
  onboardly serve --port 5000 --data data.json
  onboardly console --database onboarding.db
"#)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to an onboardly.toml config file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the HTTP JSON API over the flat-file store
    Serve {
        /// Port to listen on (default 5000)
        #[arg(short, long)]
        port: Option<u16>,

        /// Path to the JSON data file
        #[arg(short, long)]
        data: Option<PathBuf>,
    },

    /// Run the interactive console over the SQLite store
    Console {
        /// Path to the database file
        #[arg(short, long)]
        database: Option<PathBuf>,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(filter)
        .init();

    let config = config::load_config(cli.config.as_deref())?.unwrap_or_default();

    match cli.command {
        Commands::Serve { port, data } => {
            let data_path = data
                .or_else(|| config.data_file.as_ref().map(PathBuf::from))
                .unwrap_or_else(config::default_data_path);
            let port = port.or(config.port).unwrap_or(5000);
            config::ensure_parent_dir(&data_path)?;

            tracing::info!("Serving {} on port {}", data_path.display(), port);
            let runtime = tokio::runtime::Runtime::new()?;
            runtime.block_on(onboardly::server::start_server(port, data_path))
        }

        Commands::Console { database } => {
            let db_path = database
                .or_else(|| config.database.as_ref().map(PathBuf::from))
                .unwrap_or_else(config::default_database_path);
            config::ensure_parent_dir(&db_path)?;

            tracing::info!("Opening database {:?}", db_path);
            let store = SqliteStore::open(&db_path)?;
            onboardly::console::run(&store)?;
            Ok(())
        }
    }
}
