use crate::config::PricingConfig;
use crate::error::Result;
use crate::pricing::commission::CommissionSchedule;
use crate::pricing::models::{CostBreakdown, Estimate, LineItem, PlanOption, Selections};
use tracing::debug;

/// Round a dollar amount to whole cents, half-cent ties to the even cent
pub fn round_cents(amount: f64) -> f64 {
    (amount * 100.0).round_ties_even() / 100.0
}

/// Calculator for the monthly cost of a set of plan selections
#[derive(Debug, Clone, Default)]
pub struct CostCalculator {
    adjustment_percentage: f64,
    schedule: CommissionSchedule,
}

impl CostCalculator {
    /// Create a new cost calculator
    pub fn new(adjustment_percentage: f64, schedule: CommissionSchedule) -> Self {
        Self {
            adjustment_percentage,
            schedule,
        }
    }

    /// Create a calculator from the pricing section of the configuration
    pub fn from_config(cfg: &PricingConfig) -> Result<Self> {
        let schedule = CommissionSchedule::new(cfg.commission_tiers.clone())?;
        Ok(Self::new(cfg.adjustment_percentage, schedule))
    }

    pub fn schedule(&self) -> &CommissionSchedule {
        &self.schedule
    }

    /// List price with the configured adjustment applied
    pub fn adjust_price(&self, price: f64) -> f64 {
        round_cents(price * (1.0 + self.adjustment_percentage / 100.0))
    }

    /// Price a single menu choice
    pub fn price_of<T: PlanOption>(&self, option: T) -> f64 {
        self.adjust_price(option.list_price())
    }

    /// Calculate the itemized cost of a set of selections
    pub fn calculate(&self, selections: &Selections) -> CostBreakdown {
        let items = vec![
            LineItem::from_option(selections.base, self.price_of(selections.base)),
            LineItem::from_option(selections.shopify, self.price_of(selections.shopify)),
            LineItem::from_option(selections.advanced, self.price_of(selections.advanced)),
        ];

        let subtotal: f64 = items.iter().map(|item| item.amount).sum();
        let commission_percentage = self.schedule.percentage_for(subtotal);
        let commission = subtotal * commission_percentage / 100.0;
        let total = round_cents(subtotal + commission);

        debug!(
            subtotal,
            commission_percentage,
            total,
            "Calculated cost for {}/{}/{}",
            selections.base,
            selections.shopify,
            selections.advanced
        );

        CostBreakdown {
            items,
            subtotal,
            commission_percentage,
            commission: round_cents(commission),
            total,
        }
    }

    pub fn estimate(&self, selections: Selections) -> Estimate {
        let breakdown = self.calculate(&selections);
        Estimate {
            categories: breakdown.to_map(),
            breakdown,
            selections,
        }
    }
}
