use anyhow::Result;
use colored::Colorize;
use price_estimator::config::Config;
use price_estimator::pricing::{AdvancedFeatures, BasePlan, PlanOption, ShopifyIntegration};
use tracing::info;

/// Execute the details command
pub fn execute(cfg: &Config) -> Result<()> {
    info!("Showing plan details");
    print!("{}", render(cfg));
    Ok(())
}

pub fn render(cfg: &Config) -> String {
    let mut out = String::new();
    out.push_str(&section::<BasePlan>(cfg.display.color));
    out.push_str(&section::<ShopifyIntegration>(cfg.display.color));
    out.push_str(&section::<AdvancedFeatures>(cfg.display.color));
    if !cfg.display.footer.is_empty() {
        out.push_str(&format!("{}\n", cfg.display.footer));
    }
    out
}

fn section<T: PlanOption>(color: bool) -> String {
    let heading = if color {
        T::HEADING.bold().to_string()
    } else {
        T::HEADING.to_string()
    };

    let body: String = T::DETAILS
        .lines()
        .map(|line| format!("  {}\n", line))
        .collect();

    format!("{}\n{}\n", heading, body)
}
