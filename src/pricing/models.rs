use crate::error::EstimatorError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// Cost category shown in a breakdown
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    BaseModelUsage,
    ShopifyIntegration,
    AdvancedFeatures,
    Commission,
}

impl Category {
    pub fn name(&self) -> &'static str {
        match self {
            Category::BaseModelUsage => "Base Model Usage",
            Category::ShopifyIntegration => "Shopify Integration",
            Category::AdvancedFeatures => "Advanced Features",
            Category::Commission => "Commission",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One menu of the estimator form
///
/// Each implementor is a closed set of choices with a fixed list price.
pub trait PlanOption: Copy + Sized + 'static {
    /// Short menu name used in error messages
    const MENU: &'static str;
    /// Section heading shown above the menu
    const HEADING: &'static str;
    /// Descriptive notes for the `details` command
    const DETAILS: &'static str;
    /// Breakdown category this menu contributes to
    const CATEGORY: Category;

    /// Every choice, in menu order (first is the form default)
    fn all() -> &'static [Self];

    /// Canonical token, e.g. `option1` or `none`
    fn token(&self) -> &'static str;

    /// Human-readable description of the choice
    fn label(&self) -> &'static str;

    /// Fixed list price before adjustment
    fn list_price(&self) -> f64;
}

/// Parse a menu selection from user text
///
/// Accepts the canonical token plus a few shorthands, ignoring case and
/// separators: `option1`, `option-1`, `Option_1`, `1`, and `none`, `no`, `0`.
pub fn parse_option<T: PlanOption>(input: &str) -> Result<T, EstimatorError> {
    let normalized: String = input
        .trim()
        .chars()
        .filter(|c| !matches!(c, '-' | '_' | ' '))
        .flat_map(char::to_lowercase)
        .collect();

    T::all()
        .iter()
        .copied()
        .find(|option| accepts(option.token(), &normalized))
        .ok_or_else(|| EstimatorError::InvalidSelection {
            menu: T::MENU,
            value: input.to_string(),
            expected: T::all()
                .iter()
                .map(|o| o.token())
                .collect::<Vec<_>>()
                .join(", "),
        })
}

fn accepts(token: &str, normalized: &str) -> bool {
    if token == normalized {
        return true;
    }
    match token {
        "none" => matches!(normalized, "no" | "0"),
        _ => token
            .strip_prefix("option")
            .is_some_and(|number| number == normalized),
    }
}

/// Base model usage plan
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BasePlan {
    #[default]
    Option1,
    Option2,
}

impl PlanOption for BasePlan {
    const MENU: &'static str = "Base Model Plan";
    const HEADING: &'static str = "Base Model Usage Plan";
    const DETAILS: &'static str = "\
Option 1: Suitable for startups and small businesses with moderate customer interaction.
Option 2: Ideal for established businesses handling a high volume of customer queries.";
    const CATEGORY: Category = Category::BaseModelUsage;

    fn all() -> &'static [Self] {
        &[BasePlan::Option1, BasePlan::Option2]
    }

    fn token(&self) -> &'static str {
        match self {
            BasePlan::Option1 => "option1",
            BasePlan::Option2 => "option2",
        }
    }

    fn label(&self) -> &'static str {
        match self {
            BasePlan::Option1 => "4M monthly AI tokens, roughly 40,000 messages",
            BasePlan::Option2 => "20M monthly AI tokens, roughly 90,000 messages",
        }
    }

    fn list_price(&self) -> f64 {
        match self {
            BasePlan::Option1 => 50.0,
            BasePlan::Option2 => 125.0,
        }
    }
}

/// Shopify store integration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShopifyIntegration {
    #[default]
    None,
    Option1,
    Option2,
}

impl PlanOption for ShopifyIntegration {
    const MENU: &'static str = "Shopify Integration";
    const HEADING: &'static str = "Shopify Integration Options";
    const DETAILS: &'static str = "\
Seamlessly integrate your AI agent with your Shopify store to provide real-time product information to customers.";
    const CATEGORY: Category = Category::ShopifyIntegration;

    fn all() -> &'static [Self] {
        &[
            ShopifyIntegration::None,
            ShopifyIntegration::Option1,
            ShopifyIntegration::Option2,
        ]
    }

    fn token(&self) -> &'static str {
        match self {
            ShopifyIntegration::None => "none",
            ShopifyIntegration::Option1 => "option1",
            ShopifyIntegration::Option2 => "option2",
        }
    }

    fn label(&self) -> &'static str {
        match self {
            ShopifyIntegration::None => "No Integration",
            ShopifyIntegration::Option1 => "2,500 Products listed on Shopify",
            ShopifyIntegration::Option2 => "5,000 Products listed on Shopify",
        }
    }

    fn list_price(&self) -> f64 {
        match self {
            ShopifyIntegration::None => 0.0,
            ShopifyIntegration::Option1 => 19.0,
            ShopifyIntegration::Option2 => 29.0,
        }
    }
}

/// Advanced features package (dashboards, custom UI, fine-tuned models)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AdvancedFeatures {
    #[default]
    None,
    Option1,
    Option2,
    Option3,
}

impl PlanOption for AdvancedFeatures {
    const MENU: &'static str = "Advanced Features";
    const HEADING: &'static str =
        "Advanced Features (Custom Dashboards, Custom UI, Advanced GPT models)";
    const DETAILS: &'static str = "\
- Customized Chat UI: Tailor the chat interface to match your brand identity.
- Usage Dashboard: Monitor AI agent performance and customer interactions.
- Advanced Fine-tuned GPT Models: Enhance responses with specialized models for better customer engagement.";
    const CATEGORY: Category = Category::AdvancedFeatures;

    fn all() -> &'static [Self] {
        &[
            AdvancedFeatures::None,
            AdvancedFeatures::Option1,
            AdvancedFeatures::Option2,
            AdvancedFeatures::Option3,
        ]
    }

    fn token(&self) -> &'static str {
        match self {
            AdvancedFeatures::None => "none",
            AdvancedFeatures::Option1 => "option1",
            AdvancedFeatures::Option2 => "option2",
            AdvancedFeatures::Option3 => "option3",
        }
    }

    fn label(&self) -> &'static str {
        match self {
            AdvancedFeatures::None => "No Advanced Features",
            AdvancedFeatures::Option1 => "5,000 credits",
            AdvancedFeatures::Option2 => "15,000 credits",
            AdvancedFeatures::Option3 => "50,000 credits",
        }
    }

    fn list_price(&self) -> f64 {
        match self {
            AdvancedFeatures::None => 0.0,
            AdvancedFeatures::Option1 => 19.0,
            AdvancedFeatures::Option2 => 49.0,
            AdvancedFeatures::Option3 => 149.0,
        }
    }
}

macro_rules! impl_text_conversions {
    ($($ty:ty),*) => {
        $(
            impl fmt::Display for $ty {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    f.write_str(self.token())
                }
            }

            impl FromStr for $ty {
                type Err = EstimatorError;

                fn from_str(s: &str) -> Result<Self, Self::Err> {
                    parse_option(s)
                }
            }
        )*
    };
}

impl_text_conversions!(BasePlan, ShopifyIntegration, AdvancedFeatures);

/// The three menu choices that drive an estimate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Selections {
    pub base: BasePlan,
    pub shopify: ShopifyIntegration,
    pub advanced: AdvancedFeatures,
}

/// A single priced selection
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LineItem {
    pub category: Category,
    pub option: &'static str,
    pub label: &'static str,
    pub amount: f64,
}

impl LineItem {
    pub fn from_option<T: PlanOption>(option: T, amount: f64) -> Self {
        Self {
            category: T::CATEGORY,
            option: option.token(),
            label: option.label(),
            amount,
        }
    }
}

/// Itemized cost for one set of selections
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CostBreakdown {
    pub items: Vec<LineItem>,
    pub subtotal: f64,
    pub commission_percentage: f64,
    pub commission: f64,
    pub total: f64,
}

impl CostBreakdown {
    /// Sum of the line items, commission excluded
    pub fn items_total(&self) -> f64 {
        self.items.iter().map(|item| item.amount).sum()
    }

    /// Share of the subtotal taken by an item, in percent
    pub fn share_of(&self, item: &LineItem) -> f64 {
        if self.subtotal > 0.0 {
            item.amount / self.subtotal * 100.0
        } else {
            0.0
        }
    }

    /// Category name → amount, commission included
    pub fn to_map(&self) -> BTreeMap<&'static str, f64> {
        let mut map: BTreeMap<&'static str, f64> = self
            .items
            .iter()
            .map(|item| (item.category.name(), item.amount))
            .collect();
        map.insert(Category::Commission.name(), self.commission);
        map
    }
}

/// Selections together with their computed breakdown
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Estimate {
    pub selections: Selections,
    pub breakdown: CostBreakdown,
    /// Category name → amount, commission included
    pub categories: BTreeMap<&'static str, f64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_canonical_tokens() {
        assert_eq!("option1".parse::<BasePlan>().unwrap(), BasePlan::Option1);
        assert_eq!("option2".parse::<BasePlan>().unwrap(), BasePlan::Option2);
        assert_eq!(
            "none".parse::<ShopifyIntegration>().unwrap(),
            ShopifyIntegration::None
        );
        assert_eq!(
            "option3".parse::<AdvancedFeatures>().unwrap(),
            AdvancedFeatures::Option3
        );
    }

    #[test]
    fn test_parse_shorthands() {
        assert_eq!("Option-2".parse::<BasePlan>().unwrap(), BasePlan::Option2);
        assert_eq!("OPTION_1".parse::<BasePlan>().unwrap(), BasePlan::Option1);
        assert_eq!("2".parse::<ShopifyIntegration>().unwrap(), ShopifyIntegration::Option2);
        assert_eq!("no".parse::<AdvancedFeatures>().unwrap(), AdvancedFeatures::None);
        assert_eq!("0".parse::<ShopifyIntegration>().unwrap(), ShopifyIntegration::None);
    }

    #[test]
    fn test_parse_rejects_unknown() {
        let err = "option3".parse::<ShopifyIntegration>().unwrap_err();
        assert!(matches!(
            err,
            EstimatorError::InvalidSelection { menu: "Shopify Integration", .. }
        ));
        assert!(err.to_string().contains("none, option1, option2"));

        // Base plan has no "none" choice
        assert!("none".parse::<BasePlan>().is_err());
        assert!("".parse::<BasePlan>().is_err());
    }

    #[test]
    fn test_display_matches_token() {
        for option in AdvancedFeatures::all() {
            let parsed: AdvancedFeatures = option.to_string().parse().unwrap();
            assert_eq!(parsed, *option);
        }
    }

    #[test]
    fn test_list_prices() {
        let base: Vec<f64> = BasePlan::all().iter().map(|o| o.list_price()).collect();
        let shopify: Vec<f64> = ShopifyIntegration::all().iter().map(|o| o.list_price()).collect();
        let advanced: Vec<f64> = AdvancedFeatures::all().iter().map(|o| o.list_price()).collect();

        assert_eq!(base, vec![50.0, 125.0]);
        assert_eq!(shopify, vec![0.0, 19.0, 29.0]);
        assert_eq!(advanced, vec![0.0, 19.0, 49.0, 149.0]);
    }

    #[test]
    fn test_default_selections_are_first_menu_entries() {
        let selections = Selections::default();
        assert_eq!(selections.base, BasePlan::all()[0]);
        assert_eq!(selections.shopify, ShopifyIntegration::all()[0]);
        assert_eq!(selections.advanced, AdvancedFeatures::all()[0]);
    }

    #[test]
    fn test_breakdown_map_includes_commission() {
        let breakdown = CostBreakdown {
            items: vec![
                LineItem::from_option(BasePlan::Option1, 50.0),
                LineItem::from_option(ShopifyIntegration::None, 0.0),
            ],
            subtotal: 50.0,
            commission_percentage: 100.0,
            commission: 50.0,
            total: 100.0,
        };

        let map = breakdown.to_map();
        assert_eq!(map.len(), 3);
        assert_eq!(map["Base Model Usage"], 50.0);
        assert_eq!(map["Commission"], 50.0);
        assert_eq!(breakdown.share_of(&breakdown.items[0]), 100.0);
    }
}
