//! Command implementations for the CLI
//!
//! This module contains the implementation of all CLI commands:
//! - estimate: Price a set of selections and print the breakdown
//! - options: List every menu option with its price
//! - details: Print plan details for each menu
//! - config: Show or validate configuration

pub mod config;
pub mod details;
pub mod estimate;
pub mod options;

use price_estimator::pricing::CommissionTier;

/// Format an amount with the configured currency symbol
pub fn format_money(symbol: &str, amount: f64) -> String {
    format!("{}{:.2}", symbol, amount)
}

/// Format a percentage without trailing zeros, e.g. `75%` or `12.5%`
pub fn format_percentage(value: f64) -> String {
    let rendered = format!("{:.2}", value);
    let trimmed = rendered.trim_end_matches('0').trim_end_matches('.');
    format!("{}%", trimmed)
}

/// Describe each tier as a subtotal range, e.g. `$150.00 to $300.00 → 75%`
pub fn describe_tiers(tiers: &[CommissionTier], symbol: &str) -> Vec<String> {
    let mut lower = 0.0;
    tiers
        .iter()
        .map(|tier| {
            let range = match tier.below {
                Some(bound) => format!(
                    "{} to {}",
                    format_money(symbol, lower),
                    format_money(symbol, bound)
                ),
                None => format!("{} and above", format_money(symbol, lower)),
            };
            if let Some(bound) = tier.below {
                lower = bound;
            }
            format!("{} → {}", range, format_percentage(tier.percentage))
        })
        .collect()
}
