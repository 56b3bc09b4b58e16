use anyhow::Result;
use clap::{Parser, Subcommand};
use notekeeper_core::{ENV_DATABASE_URL, env_non_empty};
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser)]
#[command(name = "notekeeper")]
#[command(about = "Notes CRUD service over PostgreSQL", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP API server
    Serve {
        #[arg(short, long, default_value = "3000")]
        port: u16,
        #[arg(short = 'H', long, default_value = "127.0.0.1")]
        host: String,
        /// Keep notes in process memory instead of PostgreSQL
        #[arg(long)]
        ephemeral: bool,
    },
    /// Create or update the notes schema in DATABASE_URL
    Migrate,
}

/// Connection string for the notes database.
pub(crate) fn get_database_url() -> Result<String> {
    env_non_empty(ENV_DATABASE_URL)
        .ok_or_else(|| anyhow::anyhow!("{ENV_DATABASE_URL} environment variable must be set"))
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("info".parse()?))
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Serve { port, host, ephemeral } => {
            commands::serve::run(port, host, ephemeral).await?;
        },
        Commands::Migrate => commands::migrate::run().await?,
    }

    Ok(())
}
