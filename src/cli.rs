use clap::{Parser, Subcommand};
use price_estimator::pricing::{AdvancedFeatures, BasePlan, ShopifyIntegration};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "price-estimator", version, about = "Monthly hosting price estimator")]
pub struct Cli {
    /// Configuration file path
    #[arg(short, long, default_value = "estimator.toml", global = true)]
    pub config: PathBuf,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Estimate the monthly cost of a plan (default)
    Estimate {
        /// Base model usage plan: option1 | option2
        #[arg(short, long, default_value = "option1")]
        base: BasePlan,

        /// Shopify integration: none | option1 | option2
        #[arg(short, long, default_value = "none")]
        shopify: ShopifyIntegration,

        /// Advanced features package: none | option1 | option2 | option3
        #[arg(short, long, default_value = "none")]
        advanced: AdvancedFeatures,

        /// Print the breakdown as JSON
        #[arg(long)]
        json: bool,
    },

    /// List every menu option with its price
    Options,

    /// Show plan details for each menu
    Details,

    /// Configuration management
    Config {
        #[command(subcommand)]
        action: ConfigCommands,
    },

    /// Show version information
    Version,
}

#[derive(Subcommand, Debug, Clone)]
pub enum ConfigCommands {
    /// Print the effective configuration
    Show,

    /// Validate the configuration
    Validate,
}

impl Cli {
    /// Get the command to execute, defaulting to Estimate if none provided
    pub fn get_command(&self) -> Commands {
        self.command.clone().unwrap_or(Commands::Estimate {
            base: BasePlan::default(),
            shopify: ShopifyIntegration::default(),
            advanced: AdvancedFeatures::default(),
            json: false,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_command_is_estimate() {
        let cli = Cli {
            config: PathBuf::from("estimator.toml"),
            command: None,
        };

        match cli.get_command() {
            Commands::Estimate {
                base,
                shopify,
                advanced,
                json,
            } => {
                assert_eq!(base, BasePlan::Option1);
                assert_eq!(shopify, ShopifyIntegration::None);
                assert_eq!(advanced, AdvancedFeatures::None);
                assert!(!json);
            }
            _ => panic!("Expected Estimate command"),
        }
    }

    #[test]
    fn test_cli_parsing_estimate() {
        let args = vec![
            "price-estimator",
            "estimate",
            "--base",
            "option2",
            "--shopify",
            "1",
            "-a",
            "Option-2",
            "--json",
        ];
        let cli = Cli::try_parse_from(args).unwrap();

        match cli.get_command() {
            Commands::Estimate {
                base,
                shopify,
                advanced,
                json,
            } => {
                assert_eq!(base, BasePlan::Option2);
                assert_eq!(shopify, ShopifyIntegration::Option1);
                assert_eq!(advanced, AdvancedFeatures::Option2);
                assert!(json);
            }
            _ => panic!("Expected Estimate command"),
        }
    }

    #[test]
    fn test_cli_rejects_unknown_option() {
        let args = vec!["price-estimator", "estimate", "--base", "none"];
        assert!(Cli::try_parse_from(args).is_err());
    }

    #[test]
    fn test_cli_parsing_config_validate() {
        let args = vec!["price-estimator", "--config", "custom.toml", "config", "validate"];
        let cli = Cli::try_parse_from(args).unwrap();

        assert_eq!(cli.config, PathBuf::from("custom.toml"));
        assert!(matches!(
            cli.get_command(),
            Commands::Config {
                action: ConfigCommands::Validate
            }
        ));
    }
}
