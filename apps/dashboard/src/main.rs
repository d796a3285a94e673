use std::time::Duration;

use clap::Parser;
use dotenv::dotenv;
use giza_analytics::KeyRatios;
use log::info;

mod cache;
mod config;
mod provider;
mod report;

use config::Config;
use provider::MetricsProvider;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// CoinGecko id of the token to inspect
    #[arg(long)]
    token: Option<String>,

    /// History window in days
    #[arg(long)]
    days: Option<u32>,

    /// Keep refreshing instead of rendering once
    #[arg(long)]
    watch: bool,

    /// Seconds between refreshes in watch mode
    #[arg(long, default_value = "600")]
    interval: u64,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();
    env_logger::init();

    let args = Args::parse();

    let mut config = Config::from_env();
    if let Some(token) = args.token {
        config.token_id = token;
    }
    if let Some(days) = args.days {
        config.history_days = days;
    }

    let days = config.history_days;
    let mut provider = MetricsProvider::new(&config);

    loop {
        let metrics = provider.token_metrics().await;
        let history = provider.price_history(days).await;
        let key_ratios = KeyRatios::compute(&metrics);
        let warnings = provider.take_warnings();

        report::render(
            &config.token_id,
            &metrics,
            &history,
            &key_ratios,
            days,
            &warnings,
        );

        if !args.watch {
            break;
        }

        info!("next refresh in {}s", args.interval);
        tokio::time::sleep(Duration::from_secs(args.interval)).await;
    }

    Ok(())
}
