use anyhow::Result;
use clap::Parser;

mod cli;
mod commands;

use price_estimator::config;
use price_estimator::init_tracing;
use price_estimator::pricing::Selections;

fn main() -> Result<()> {
    // Parse CLI arguments
    let args = cli::Cli::parse();

    // Configuration drives logging, so it is loaded first
    let cfg = config::load_config(&args.config)?;
    init_tracing(&cfg.logging);
    colored::control::set_override(cfg.display.color);

    // Dispatch to appropriate command handler
    match args.get_command() {
        cli::Commands::Estimate {
            base,
            shopify,
            advanced,
            json,
        } => {
            let selections = Selections {
                base,
                shopify,
                advanced,
            };
            commands::estimate::execute(&cfg, selections, json)?;
        }
        cli::Commands::Options => commands::options::execute(&cfg)?,
        cli::Commands::Details => commands::details::execute(&cfg)?,
        cli::Commands::Config { action } => match action {
            cli::ConfigCommands::Show => commands::config::show(&cfg)?,
            cli::ConfigCommands::Validate => commands::config::validate(&cfg, &args.config)?,
        },
        cli::Commands::Version => {
            println!("Price Estimator v{}", env!("CARGO_PKG_VERSION"));
        }
    }

    Ok(())
}
