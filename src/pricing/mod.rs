pub mod calculator;
pub mod commission;
pub mod models;

pub use calculator::{round_cents, CostCalculator};
pub use commission::{CommissionSchedule, CommissionTier};
pub use models::{
    AdvancedFeatures, BasePlan, Category, CostBreakdown, Estimate, LineItem, PlanOption,
    Selections, ShopifyIntegration,
};
