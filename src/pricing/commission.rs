use crate::error::{EstimatorError, Result};
use serde::{Deserialize, Serialize};

/// One step of the commission schedule
///
/// Applies to subtotals strictly below `below`; a tier without a bound
/// catches everything above the previous tier.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct CommissionTier {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub below: Option<f64>,
    pub percentage: f64,
}

impl CommissionTier {
    pub fn bounded(below: f64, percentage: f64) -> Self {
        Self {
            below: Some(below),
            percentage,
        }
    }

    pub fn unbounded(percentage: f64) -> Self {
        Self {
            below: None,
            percentage,
        }
    }

    fn covers(&self, subtotal: f64) -> bool {
        self.below.map_or(true, |bound| subtotal < bound)
    }
}

/// Default tiers: 100% under 150, 75% under 300, 50% otherwise
pub fn default_tiers() -> Vec<CommissionTier> {
    vec![
        CommissionTier::bounded(150.0, 100.0),
        CommissionTier::bounded(300.0, 75.0),
        CommissionTier::unbounded(50.0),
    ]
}

/// Step function from subtotal to commission percentage
#[derive(Debug, Clone, PartialEq)]
pub struct CommissionSchedule {
    tiers: Vec<CommissionTier>,
}

impl CommissionSchedule {
    /// Build a schedule, rejecting tier lists that leave gaps or overlap
    pub fn new(tiers: Vec<CommissionTier>) -> Result<Self> {
        validate_tiers(&tiers)?;
        Ok(Self { tiers })
    }

    pub fn tiers(&self) -> &[CommissionTier] {
        &self.tiers
    }

    /// Commission percentage for a subtotal
    pub fn percentage_for(&self, subtotal: f64) -> f64 {
        self.tiers
            .iter()
            .find(|tier| tier.covers(subtotal))
            .or_else(|| self.tiers.last())
            .map_or(0.0, |tier| tier.percentage)
    }
}

impl Default for CommissionSchedule {
    fn default() -> Self {
        Self {
            tiers: default_tiers(),
        }
    }
}

pub fn validate_tiers(tiers: &[CommissionTier]) -> Result<()> {
    let Some((last, bounded)) = tiers.split_last() else {
        return Err(EstimatorError::InvalidConfig(
            "at least one commission tier is required".to_string(),
        ));
    };

    if last.below.is_some() {
        return Err(EstimatorError::InvalidConfig(
            "the last commission tier must not have an upper bound".to_string(),
        ));
    }

    let mut previous: Option<f64> = None;
    for (idx, tier) in bounded.iter().enumerate() {
        let Some(bound) = tier.below else {
            return Err(EstimatorError::InvalidConfig(format!(
                "commission tier {} has no upper bound but is not the last tier",
                idx + 1
            )));
        };
        if !bound.is_finite() || bound <= 0.0 {
            return Err(EstimatorError::InvalidConfig(format!(
                "commission tier {}: bound must be a positive number, got {}",
                idx + 1,
                bound
            )));
        }
        if let Some(prev) = previous {
            if bound <= prev {
                return Err(EstimatorError::InvalidConfig(format!(
                    "commission tier bounds must be ascending ({} follows {})",
                    bound, prev
                )));
            }
        }
        previous = Some(bound);
    }

    for (idx, tier) in tiers.iter().enumerate() {
        if !tier.percentage.is_finite() || tier.percentage < 0.0 {
            return Err(EstimatorError::InvalidConfig(format!(
                "commission tier {}: percentage must be >= 0, got {}",
                idx + 1,
                tier.percentage
            )));
        }
    }

    Ok(())
}
