use anyhow::Result;
use clap::{Parser, Subcommand};
use smartrecipe::{cli, config::Config, observability};

/// smartrecipe - Recipe discovery and meal planning
#[derive(Parser)]
#[command(name = "smartrecipe")]
#[command(about = "Recipe suggestions, weekly meal plans and shopping lists", long_about = None)]
struct Cli {
    /// Path to configuration file
    #[arg(long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server
    Serve {
        /// Server host address (overrides config file)
        #[arg(long)]
        host: Option<String>,

        /// Server port (overrides config file)
        #[arg(long)]
        port: Option<u16>,
    },
    /// Run database migrations
    Migrate,
    /// Drop database if exists and recreate with migrations
    Reset,
    /// Insert the bundled recipe catalog into an empty database
    Seed,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Cli::parse();

    let config = Config::load(args.config)?;
    config.validate().map_err(|e| anyhow::anyhow!(e))?;

    observability::init_observability("smartrecipe", &config.observability)?;

    match args.command {
        Commands::Serve { host, port } => cli::serve(config, host, port).await,
        Commands::Migrate => cli::migrate(&config).await,
        Commands::Reset => cli::reset(&config).await,
        Commands::Seed => cli::seed(&config).await,
    }
}
