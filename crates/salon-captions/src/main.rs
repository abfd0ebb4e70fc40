//! Salon caption bot entry point.
//!
//! Start the bot with:
//! ```bash
//! TELEGRAM_BOT_TOKEN=xxx OPENROUTER_API_KEY=yyy cargo run -p salon-captions
//! ```

use std::time::Duration;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use caption_agent::CaptionClient;
use caption_telegram::TelegramClient;
use salon_captions::{dispatcher, BotConfig};

/// Salon caption bot - AI-generated Instagram captions over Telegram
#[derive(Parser, Debug)]
#[command(name = "salon-captions")]
#[command(about = "Telegram bot generating salon Instagram captions")]
struct Args {
    /// Long-poll window for getUpdates, in seconds
    #[arg(long, default_value = "30")]
    poll_timeout: u64,

    /// Verbose logging (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    // Load .env if present (for tokens during development)
    let _ = dotenvy::dotenv();

    let filter = match args.verbose {
        0 => "salon_captions=info,caption_core=info,caption_telegram=info,caption_agent=info",
        1 => "salon_captions=debug,caption_core=debug,caption_telegram=debug,caption_agent=debug",
        _ => "trace",
    };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_new(filter).unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = BotConfig::from_env(Duration::from_secs(args.poll_timeout))?;

    let telegram = TelegramClient::new(&config.telegram_token, config.poll_timeout);
    let generator = CaptionClient::new(config.generation_api_key.as_str(), config.model.as_str());

    // Verify the token before entering the loop.
    let username = telegram.get_me().await?;
    tracing::info!(username = %username, model = %config.model, "bot initialized");

    println!("\n[bot] Salon caption bot");
    println!("   Bot: @{username}");
    println!("   Model: {}", config.model);
    println!("   Long-poll window: {}s", args.poll_timeout);
    println!("\n   Open Telegram and send /start to begin.");
    println!("   Press Ctrl+C to stop.\n");

    dispatcher::run(telegram, generator).await;

    Ok(())
}
