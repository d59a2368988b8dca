//! Budget status classification for a single budget line

use serde::{Deserialize, Serialize};
use std::fmt;

use super::money::Money;

/// How a budget line's actual spend compares to its approved amount
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BudgetStatus {
    /// Spend matches the approved amount exactly
    OnTrack,
    /// Spend is below the approved amount
    UnderBudget,
    /// Spend is above the approved amount
    OverBudget,
    /// Overrun larger than half of a positive approved amount
    CriticalOverrun,
}

impl BudgetStatus {
    /// Classify a line from its approved amount and actual spend
    pub fn classify(modified: Money, cash_expense: Money) -> Self {
        let difference = cash_expense - modified;
        // difference > modified * 0.5, compared exactly in cents
        if modified.is_positive() && difference.exceeds_fraction_of(modified, 1, 2) {
            Self::CriticalOverrun
        } else if difference.is_positive() {
            Self::OverBudget
        } else if difference.is_negative() {
            Self::UnderBudget
        } else {
            Self::OnTrack
        }
    }

    /// Ordinal used when sorting by status
    pub const fn rank(&self) -> u8 {
        match self {
            Self::OnTrack => 0,
            Self::UnderBudget => 1,
            Self::OverBudget => 2,
            Self::CriticalOverrun => 3,
        }
    }

    /// Human-readable label
    pub const fn label(&self) -> &'static str {
        match self {
            Self::OnTrack => "On Track",
            Self::UnderBudget => "Under Budget",
            Self::OverBudget => "Over Budget",
            Self::CriticalOverrun => "Critical Overrun",
        }
    }
}

impl fmt::Display for BudgetStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
