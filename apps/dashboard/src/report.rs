use giza_analytics::{KeyRatios, ratios};
use giza_shared_models::{PriceHistory, TokenMetrics, demo};

use crate::provider::FetchWarning;

const HISTORY_TAIL: usize = 14;

/// Renders the full dashboard to stdout.
pub fn render(
    token_id: &str,
    metrics: &TokenMetrics,
    history: &PriceHistory,
    key_ratios: &KeyRatios,
    days: u32,
    warnings: &[FetchWarning],
) {
    render_overview(token_id, metrics, warnings);
    render_ratios(metrics, key_ratios);
    render_tokenomics(metrics, key_ratios);
    render_history(history, days);
    render_protocol();
}

fn render_overview(token_id: &str, metrics: &TokenMetrics, warnings: &[FetchWarning]) {
    println!("\n===== GIZA Token Dashboard =====");
    println!(
        "Token: {} | Last updated: {}",
        token_id,
        metrics.last_updated.format("%Y-%m-%d %H:%M UTC")
    );

    if !warnings.is_empty() {
        println!("Displaying demo data, live fetch unavailable:");
        for warning in warnings {
            println!("  [{:?}] {}", warning.kind, warning.message);
        }
    }

    println!();
    println!(
        "Price:      ${:.4} (24h {:+.2}%, 7d {:+.2}%)",
        metrics.price, metrics.price_change_24h, metrics.price_change_7d
    );
    println!(
        "Market cap: {} (rank #{})",
        usd_millions(metrics.market_cap),
        metrics.market_cap_rank
    );
    println!("24h volume: {}", usd_millions(metrics.volume_24h));
}

fn render_ratios(metrics: &TokenMetrics, key_ratios: &KeyRatios) {
    let aua_ratio = ratios::aua_to_market_cap(&demo::protocol_metrics(), metrics);

    println!("\n===== Key Financial Ratios =====");
    println!("{:<22} {:>8}", "Market Cap / FDV", percent(key_ratios.market_cap_to_fdv));
    println!("{:<22} {:>8}", "Circulating / Total", percent(key_ratios.circulating_ratio));
    println!("{:<22} {:>8}", "Volume / Market Cap", percent(key_ratios.volume_to_market_cap));
    println!("{:<22} {:>8}", "AUA / Market Cap", percent(aua_ratio));
}

fn render_tokenomics(metrics: &TokenMetrics, key_ratios: &KeyRatios) {
    println!("\n===== Tokenomics =====");
    println!("Circulating supply: {}", count_millions(metrics.circulating_supply));
    println!("Total supply:       {}", count_millions(metrics.total_supply));
    println!(
        "Max supply:         {}",
        metrics
            .max_supply
            .map(count_millions)
            .unwrap_or_else(|| "unknown".to_string())
    );
    println!("FDV:                {}", usd_millions(metrics.fdv));
    println!(
        "Price vs ATH:       {:+.1}% (ATH ${:.4})",
        key_ratios.price_vs_ath * 100.0,
        metrics.ath
    );
    println!(
        "Price vs ATL:       {:+.1}% (ATL ${:.4})",
        key_ratios.price_vs_atl * 100.0,
        metrics.atl
    );

    println!("\n===== Token Distribution (millions) =====");
    for slice in demo::token_distribution() {
        println!("{:<20} {:>8.1}", slice.name, slice.millions);
    }
}

fn render_history(history: &PriceHistory, days: u32) {
    println!("\n===== Price History ({days}d) =====");

    if history.is_empty() {
        println!("No history available");
        return;
    }

    if let Some((min, max)) = history.price_range() {
        println!("Range: ${min:.4} - ${max:.4} over {} points", history.len());
    }

    let tail_start = history.len().saturating_sub(HISTORY_TAIL);
    if tail_start > 0 {
        println!("(last {HISTORY_TAIL} points)");
    }

    println!("{:<12} {:>10} {:>14}", "Date", "Price", "Volume");
    for point in &history.points()[tail_start..] {
        println!(
            "{:<12} {:>10.4} {:>14.0}",
            point.at.format("%Y-%m-%d"),
            point.price,
            point.volume
        );
    }
}

fn render_protocol() {
    let protocol = demo::protocol_metrics();

    println!("\n===== Protocol Metrics =====");
    println!("Total volume processed: {}", usd_millions(protocol.total_volume_processed));
    println!("Assets under agents:    {}", usd_millions(protocol.assets_under_agents));
    println!("Active agents:          {}", protocol.active_agents);
    println!("Total transactions:     {}", protocol.total_transactions);
    println!("Average APR:            {:.2}%", protocol.average_apr);
    println!("Yield vs passive:       +{:.0}%", protocol.yield_vs_passive);
    println!("Capital productivity:   {:.3}x", protocol.capital_productivity_index);

    println!("\n===== Protocol Growth =====");
    println!("{:<6} {:>8} {:>12} {:>10}", "Month", "Agents", "Volume", "AUA");
    for point in demo::protocol_growth() {
        println!(
            "{:<6} {:>8} {:>12} {:>10}",
            point.month,
            point.active_agents,
            usd_millions(point.volume_processed),
            usd_millions(point.assets_under_agents)
        );
    }
}

fn usd_millions(value: f64) -> String {
    format!("${:.1}M", value / 1_000_000.0)
}

fn count_millions(value: f64) -> String {
    format!("{:.1}M", value / 1_000_000.0)
}

fn percent(ratio: f64) -> String {
    format!("{:.1}%", ratio * 100.0)
}
