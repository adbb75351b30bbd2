use anyhow::Result;
use clap::{Parser, Subcommand};

/// saema-web - SAEMA marketing website
#[derive(Parser)]
#[command(name = "saema-web")]
#[command(about = "Marketing website for the SAEMA automation consultancy", long_about = None)]
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
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = saema_web::Config::load(cli.config.clone())?;
    config.validate().map_err(|e| anyhow::anyhow!(e))?;

    saema_web::observability::init_observability(&config.logging.level, &config.logging.format)?;

    match cli.command {
        Commands::Serve { host, port } => saema_web::server::serve(config, host, port).await,
    }
}
