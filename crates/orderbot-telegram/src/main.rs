//! Orderbot Telegram binary.
//!
//! Start the bot with:
//! ```bash
//! TELEGRAM_BOT_TOKEN=xxx cargo run -p orderbot-telegram
//! ```

use clap::Parser;
use orderbot_core::config;
use orderbot_telegram::OrderBot;
use tracing_subscriber::EnvFilter;

/// Orderbot - collect a group food order in a Telegram chat
#[derive(Parser, Debug)]
#[command(name = "orderbot-telegram")]
#[command(about = "Telegram bot that collects, collates and reads out group food orders")]
struct Args {
    /// Verbose logging (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    // Secrets from the config directory first, then local files
    let env_path = config::env_file();
    if env_path.exists() {
        let _ = dotenvy::from_path(&env_path);
    }
    let _ = dotenvy::from_filename(".env.local").or_else(|_| dotenvy::dotenv());

    let filter = match args.verbose {
        0 => "orderbot_telegram=info,orderbot_core=info,teloxide=warn",
        1 => "orderbot_telegram=debug,orderbot_core=debug,teloxide=info",
        2 => "orderbot_telegram=trace,orderbot_core=trace,teloxide=debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_new(filter).unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    if let Err(e) = config::ensure_all_dirs() {
        tracing::warn!(error = %e, "Failed to create all directories");
    }

    let bot = OrderBot::new()?;

    match bot.get_me().await {
        Ok(username) => {
            tracing::info!(username = %username, "Bot initialized successfully");
            println!("\nOrderbot");
            println!("   Bot: @{}", username);
            println!("   Menus: {}", bot.state().menu_dir().display());
            println!(
                "   Spoken orders: {}",
                if bot.state().has_tts() { "enabled" } else { "disabled (set TTS_USERNAME/TTS_PASSWORD)" }
            );
        }
        Err(e) => {
            tracing::error!(error = %e, "Failed to get bot info");
            return Err(e.into());
        }
    }

    println!("\nOpen Telegram and send /add <item> to begin");
    println!("   Press Ctrl+C to stop\n");

    bot.start_polling().await?;

    Ok(())
}
