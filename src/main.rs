use anyhow::Result;
use dotenvy::dotenv;
use std::sync::Arc;
use teloxide::prelude::*;

use combobot::cli::{Cli, Commands};
use combobot::core::{config, init_logger};
use combobot::ocr::TesseractOcr;
use combobot::settings::Settings;
use combobot::telegram::{create_bot, schema, setup_bot_commands, HandlerDeps};
use combobot::verification::LoggingVerificationSink;

/// Main entry point for the Telegram bot
///
/// Parses CLI arguments and dispatches to the appropriate subcommand.
///
/// # Errors
/// Returns an error if initialization fails (logging, bot creation).
#[tokio::main]
async fn main() -> Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse_args();

    // Set up global panic handler to catch panics in dispatcher
    // This allows us to log the panic and continue working instead of terminating
    std::panic::set_hook(Box::new(|panic_info| {
        log::error!("Panic caught: {:?}", panic_info);
        if let Some(location) = panic_info.location() {
            log::error!("Panic at {}:{}:{}", location.file(), location.line(), location.column());
        }
    }));

    // Initialize logger (console + file)
    init_logger(&config::LOG_FILE_PATH)?;

    // Load environment variables from .env if present
    let _ = dotenv();

    match cli.command {
        Some(Commands::CheckConfig) => check_config(),
        Some(Commands::Run) | None => run_bot().await,
    }
}

/// Run the bot with long polling
async fn run_bot() -> Result<()> {
    let settings = Arc::new(Settings::load());
    log::info!(
        "Loaded settings from {} and {} ({} referrals)",
        &*config::UI_STRINGS_PATH,
        &*config::REFERRALS_PATH,
        settings.referrals.len()
    );

    let bot = create_bot()?;
    let me = bot.get_me().await?;
    log::info!("Bot @{} is starting", me.username());

    if let Err(e) = setup_bot_commands(&bot).await {
        log::warn!("Failed to register bot commands: {}", e);
    }

    let deps = HandlerDeps::new(
        settings,
        Arc::new(TesseractOcr::new()),
        Arc::new(LoggingVerificationSink),
    );

    Dispatcher::builder(bot, schema(deps))
        .enable_ctrlc_handler()
        .build()
        .dispatch()
        .await;

    Ok(())
}

/// Validate the configuration files and print a summary
fn check_config() -> Result<()> {
    let settings = Settings::load();

    println!("UI strings file:  {}", &*config::UI_STRINGS_PATH);
    println!("Referrals file:   {}", &*config::REFERRALS_PATH);
    println!("Referral entries: {}", settings.referrals.len());
    for referral in &settings.referrals {
        println!("  - {} -> {}", referral.bot, referral.url);
    }
    println!("Confirmations dir: {}", &*config::CONFIRMATIONS_DIR);
    println!("Tesseract binary:  {}", &*config::TESSERACT_BIN);

    if config::BOT_TOKEN.is_empty() {
        println!("WARNING: BOT_TOKEN is not set");
    }

    Ok(())
}
