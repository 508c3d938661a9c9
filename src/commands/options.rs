use anyhow::Result;
use comfy_table::{presets::UTF8_FULL, Cell, CellAlignment, Color, ContentArrangement, Table};
use price_estimator::config::Config;
use price_estimator::pricing::{
    AdvancedFeatures, BasePlan, CostCalculator, PlanOption, ShopifyIntegration,
};
use tracing::info;

use super::{describe_tiers, format_money};

/// Execute the options command
///
/// Lists every menu with its choices and prices
pub fn execute(cfg: &Config) -> Result<()> {
    info!("Listing menu options");

    let calculator = CostCalculator::from_config(&cfg.pricing)?;
    print!("{}", render(&calculator, cfg));

    Ok(())
}

pub fn render(calculator: &CostCalculator, cfg: &Config) -> String {
    let mut out = String::new();
    out.push_str(&render_menu::<BasePlan>(calculator, cfg));
    out.push_str(&render_menu::<ShopifyIntegration>(calculator, cfg));
    out.push_str(&render_menu::<AdvancedFeatures>(calculator, cfg));

    out.push_str("Commission Tiers:\n");
    for line in describe_tiers(calculator.schedule().tiers(), &cfg.pricing.currency_symbol) {
        out.push_str(&format!("  {}\n", line));
    }
    out
}

fn render_menu<T: PlanOption>(calculator: &CostCalculator, cfg: &Config) -> String {
    let symbol = &cfg.pricing.currency_symbol;
    let adjusted = cfg.pricing.adjustment_percentage != 0.0;

    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);
    if !cfg.display.color {
        table.force_no_tty();
    }

    let mut header = vec![
        Cell::new("OPTION").fg(Color::Cyan),
        Cell::new("DESCRIPTION").fg(Color::Cyan),
        Cell::new("LIST PRICE").fg(Color::Cyan),
    ];
    if adjusted {
        header.push(Cell::new("ADJUSTED").fg(Color::Cyan));
    }
    table.set_header(header);

    for option in T::all() {
        let mut row = vec![
            Cell::new(option.token()),
            Cell::new(option.label()),
            Cell::new(format_money(symbol, option.list_price()))
                .set_alignment(CellAlignment::Right),
        ];
        if adjusted {
            row.push(
                Cell::new(format_money(symbol, calculator.price_of(*option)))
                    .set_alignment(CellAlignment::Right),
            );
        }
        table.add_row(row);
    }

    format!("{}:\n{}\n\n", T::HEADING, table)
}
