use crate::error::{EstimatorError, Result};
use crate::pricing::commission::{default_tiers, validate_tiers, CommissionTier};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;

/// Environment variable prefix, e.g. `PRICE_ESTIMATOR__PRICING__ADJUSTMENT_PERCENTAGE`
pub const ENV_PREFIX: &str = "PRICE_ESTIMATOR";

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub pricing: PricingConfig,
    #[serde(default)]
    pub display: DisplayConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PricingConfig {
    /// Percentage applied to every list price (0 = unchanged, 10 = +10%)
    #[serde(default)]
    pub adjustment_percentage: f64,

    #[serde(default = "default_currency_symbol")]
    pub currency_symbol: String,

    /// Commission tiers in ascending order; the last one has no bound
    #[serde(default = "default_tiers")]
    pub commission_tiers: Vec<CommissionTier>,
}

impl Default for PricingConfig {
    fn default() -> Self {
        Self {
            adjustment_percentage: 0.0,
            currency_symbol: default_currency_symbol(),
            commission_tiers: default_tiers(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DisplayConfig {
    /// Colorize terminal output
    #[serde(default = "default_true")]
    pub color: bool,

    /// Show each item's share of the subtotal
    #[serde(default = "default_true")]
    pub show_distribution: bool,

    #[serde(default = "default_title")]
    pub title: String,

    #[serde(default = "default_footer")]
    pub footer: String,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            color: true,
            show_distribution: true,
            title: default_title(),
            footer: default_footer(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoggingConfig {
    /// Filter used when RUST_LOG is not set
    #[serde(default = "default_log_level")]
    pub level: String,

    /// "text" or "json"
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

fn default_currency_symbol() -> String {
    "$".to_string()
}

fn default_true() -> bool {
    true
}

fn default_title() -> String {
    "DigiHex AI Customer Support Agent Price Estimator (HOSTING)".to_string()
}

fn default_footer() -> String {
    "© 2024 DigiHex. All rights reserved. Annual packages available upon request.".to_string()
}

fn default_log_level() -> String {
    "warn".to_string()
}

fn default_log_format() -> String {
    "text".to_string()
}

/// Load configuration from an optional TOML file layered under environment variables
pub fn load_config(path: &Path) -> Result<Config> {
    load_config_from(path, None)
}

fn load_config_from(path: &Path, env: Option<HashMap<String, String>>) -> Result<Config> {
    let config = config::Config::builder()
        .add_source(
            config::File::new(&path.to_string_lossy(), config::FileFormat::Toml).required(false),
        )
        .add_source(
            config::Environment::with_prefix(ENV_PREFIX)
                .separator("__")
                .source(env),
        )
        .build()?;

    let cfg: Config = config.try_deserialize()?;
    validate_config(&cfg)?;

    Ok(cfg)
}

pub fn validate_config(cfg: &Config) -> Result<()> {
    let adjustment = cfg.pricing.adjustment_percentage;
    if !adjustment.is_finite() || adjustment <= -100.0 {
        return Err(EstimatorError::InvalidConfig(format!(
            "pricing.adjustment_percentage must be greater than -100, got {}",
            adjustment
        )));
    }

    if cfg.pricing.currency_symbol.is_empty() {
        return Err(EstimatorError::InvalidConfig(
            "pricing.currency_symbol cannot be empty".to_string(),
        ));
    }

    validate_tiers(&cfg.pricing.commission_tiers)?;

    match cfg.logging.format.as_str() {
        "text" | "json" => {}
        other => {
            return Err(EstimatorError::InvalidConfig(format!(
                "logging.format must be \"text\" or \"json\", got \"{}\"",
                other
            )))
        }
    }

    Ok(())
}
