//! `eraxchange` binary: `poll` or `serve`. Config from env (and `.env`) plus optional CLI args.

use anyhow::Result;
use clap::Parser;
use eraxchange_bot::{load_config, run_polling_mode, run_server_mode, Cli, Commands};

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Commands::Poll { token } => {
            let config = load_config(token)?;
            run_polling_mode(config).await
        }
        Commands::Serve { token, no_webhook } => {
            let config = load_config(token)?;
            run_server_mode(config, !no_webhook).await
        }
    }
}
