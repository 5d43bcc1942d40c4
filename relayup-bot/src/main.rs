//! Binary for the Relay-Up bot.

use anyhow::Result;
use clap::Parser;
use relayup_bot::{load_config, run_bot, run_once, Cli, Commands};

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Commands::Run { token } => {
            let config = load_config(token)?;
            run_bot(config).await
        }
        Commands::Once { token } => {
            let config = load_config(token)?;
            run_once(config).await
        }
    }
}
