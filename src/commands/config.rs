use anyhow::Result;
use colored::Colorize;
use price_estimator::config::Config;
use std::path::Path;
use tracing::info;

use super::{describe_tiers, format_percentage};

/// Execute the config show command
///
/// Displays the effective configuration as TOML
pub fn show(cfg: &Config) -> Result<()> {
    info!("Displaying configuration");

    println!("Current Configuration:");
    println!();
    println!("{}", toml::to_string_pretty(cfg)?);

    Ok(())
}

/// Execute the config validate command
///
/// Configuration is validated while loading; this prints a summary
pub fn validate(cfg: &Config, path: &Path) -> Result<()> {
    info!(path = %path.display(), "Validating configuration");

    let ok = "✓ Configuration is valid";
    if cfg.display.color {
        println!("{}", ok.green());
    } else {
        println!("{}", ok);
    }
    println!();
    print!("{}", summary(cfg, path));

    info!("Configuration validation successful");
    Ok(())
}

fn summary(cfg: &Config, path: &Path) -> String {
    let source = if path.exists() {
        path.display().to_string()
    } else {
        format!("{} (not found, using defaults)", path.display())
    };

    let mut out = String::new();
    out.push_str("Summary:\n");
    out.push_str(&format!("  File: {}\n", source));
    out.push_str(&format!(
        "  Price Adjustment: {}\n",
        format_percentage(cfg.pricing.adjustment_percentage)
    ));
    out.push_str(&format!("  Currency Symbol: {}\n", cfg.pricing.currency_symbol));
    out.push_str(&format!(
        "  Commission Tiers: {}\n",
        cfg.pricing.commission_tiers.len()
    ));
    for line in describe_tiers(&cfg.pricing.commission_tiers, &cfg.pricing.currency_symbol) {
        out.push_str(&format!("    {}\n", line));
    }
    out.push_str(&format!(
        "  Logging: {} ({})\n",
        cfg.logging.level, cfg.logging.format
    ));
    out
}
