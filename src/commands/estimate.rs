use anyhow::Result;
use colored::Colorize;
use comfy_table::{presets::UTF8_FULL, Cell, CellAlignment, Color, ContentArrangement, Table};
use price_estimator::config::Config;
use price_estimator::pricing::{CostCalculator, Estimate, Selections};
use tracing::info;

use super::{format_money, format_percentage};

/// Execute the estimate command
///
/// Prices the selections and prints either a table or JSON
pub fn execute(cfg: &Config, selections: Selections, json: bool) -> Result<()> {
    info!(
        base = %selections.base,
        shopify = %selections.shopify,
        advanced = %selections.advanced,
        "Estimating monthly cost"
    );

    let calculator = CostCalculator::from_config(&cfg.pricing)?;
    let estimate = calculator.estimate(selections);

    if json {
        println!("{}", serde_json::to_string_pretty(&estimate)?);
    } else {
        print!("{}", render(&estimate, cfg));
    }

    info!(total = estimate.breakdown.total, "Estimate complete");
    Ok(())
}

/// Render an estimate as a breakdown table followed by the total
pub fn render(estimate: &Estimate, cfg: &Config) -> String {
    let symbol = &cfg.pricing.currency_symbol;
    let breakdown = &estimate.breakdown;
    let show_share = cfg.display.show_distribution;

    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);
    if !cfg.display.color {
        table.force_no_tty();
    }

    let mut header = vec![
        Cell::new("CATEGORY").fg(Color::Cyan),
        Cell::new("SELECTION").fg(Color::Cyan),
        Cell::new("AMOUNT").fg(Color::Cyan),
    ];
    if show_share {
        header.push(Cell::new("SHARE").fg(Color::Cyan));
    }
    table.set_header(header);

    for item in &breakdown.items {
        let mut row = vec![
            Cell::new(item.category.name()),
            Cell::new(item.label),
            Cell::new(format_money(symbol, item.amount)).set_alignment(CellAlignment::Right),
        ];
        if show_share {
            row.push(
                Cell::new(format!("{:.1}%", breakdown.share_of(item)))
                    .set_alignment(CellAlignment::Right),
            );
        }
        table.add_row(row);
    }

    let mut subtotal_row = vec![
        Cell::new("Subtotal"),
        Cell::new(""),
        Cell::new(format_money(symbol, breakdown.subtotal)).set_alignment(CellAlignment::Right),
    ];
    let mut commission_row = vec![
        Cell::new("Commission"),
        Cell::new(format!(
            "{} of subtotal",
            format_percentage(breakdown.commission_percentage)
        )),
        Cell::new(format_money(symbol, breakdown.commission)).set_alignment(CellAlignment::Right),
    ];
    if show_share {
        subtotal_row.push(Cell::new("100.0%").set_alignment(CellAlignment::Right));
        commission_row.push(Cell::new(""));
    }
    table.add_row(subtotal_row);
    table.add_row(commission_row);

    let total = format!("{}/mo", format_money(symbol, breakdown.total));
    let total = if cfg.display.color {
        total.green().bold().to_string()
    } else {
        total
    };

    let mut out = String::new();
    out.push_str(&format!("{}\n\n", cfg.display.title));
    out.push_str(&format!("{}\n\n", table));
    out.push_str(&format!("Estimated Total Monthly Cost: {}\n", total));
    if !cfg.display.footer.is_empty() {
        out.push_str(&format!("\n{}\n", cfg.display.footer));
    }
    out
}
