//! Entry points: long-running bot (scheduler + REPL) and a single poll cycle.

use anyhow::Result;
use relayup_core::init_tracing;
use relayup_telegram::run_repl;
use tracing::{info, instrument};

use crate::components::{build_bot_components, build_handler_chain};
use crate::config::BotConfig;
use crate::scheduler::Scheduler;

/// Main entry: init logging, validate config, build components, start the scheduler, then run
/// the REPL until it stops.
#[instrument(skip(config))]
pub async fn run_bot(config: BotConfig) -> Result<()> {
    config.validate()?;
    init_tracing(&config.log_file)?;

    info!(
        api_url = %config.api_url,
        poll_interval_secs = config.poll_interval_secs,
        fingerprints_file = %config.fingerprints_file,
        chat_ids_file = %config.chat_ids_file,
        "Initializing bot"
    );

    let components = build_bot_components(&config).await?;
    let handler_chain = build_handler_chain(&components);

    let scheduler = Scheduler::new(components.watcher.clone(), config.poll_interval()).spawn();

    info!(username = %components.bot_username, "Bot started successfully");
    run_repl(components.teloxide_bot.clone(), handler_chain).await?;

    scheduler.abort();
    info!("Bot stopped");
    Ok(())
}

/// Runs exactly one poll-and-announce cycle and exits.
#[instrument(skip(config))]
pub async fn run_once(config: BotConfig) -> Result<()> {
    config.validate()?;
    init_tracing(&config.log_file)?;

    let components = build_bot_components(&config).await?;
    let outcome = components.watcher.tick().await;
    info!(outcome = ?outcome, "Single cycle finished");
    Ok(())
}
