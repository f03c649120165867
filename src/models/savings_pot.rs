//! Savings pot model
//!
//! A savings goal with a target amount and a short contribution history.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::PotId;
use super::money::Money;

/// Icon shown next to a savings pot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum PotIcon {
    Gamepad,
    Bike,
    GraduationCap,
    #[default]
    PiggyBank,
}

impl PotIcon {
    /// Single-glyph rendering for terminal output
    pub fn glyph(&self) -> &'static str {
        match self {
            Self::Gamepad => "🎮",
            Self::Bike => "🚲",
            Self::GraduationCap => "🎓",
            Self::PiggyBank => "🐷",
        }
    }
}

impl fmt::Display for PotIcon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Gamepad => write!(f, "Gamepad"),
            Self::Bike => write!(f, "Bike"),
            Self::GraduationCap => write!(f, "Graduation Cap"),
            Self::PiggyBank => write!(f, "Piggy Bank"),
        }
    }
}

/// One month's contribution to a pot
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contribution {
    /// Short month label (e.g. "Jan")
    pub month: String,
    pub amount: Money,
}

impl Contribution {
    pub fn new(month: impl Into<String>, amount: Money) -> Self {
        Self {
            month: month.into(),
            amount,
        }
    }
}

/// A savings goal
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SavingsPot {
    pub id: PotId,
    pub name: String,
    #[serde(default)]
    pub icon: PotIcon,
    pub current_amount: Money,
    pub target_amount: Money,
    #[serde(default)]
    pub history: Vec<Contribution>,
}

impl SavingsPot {
    /// Create a pot with no contribution history
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        icon: PotIcon,
        current_amount: Money,
        target_amount: Money,
    ) -> Self {
        Self {
            id: PotId::new(id),
            name: name.into(),
            icon,
            current_amount,
            target_amount,
            history: Vec::new(),
        }
    }

    /// Attach contribution history
    pub fn with_history(mut self, history: Vec<Contribution>) -> Self {
        self.history = history;
        self
    }

    /// Progress towards the target, capped at 100 and 0 for a zero target
    pub fn progress_percent(&self) -> f64 {
        self.current_amount
            .percent_of(self.target_amount)
            .clamp(0.0, 100.0)
    }

    /// Amount still needed to reach the target
    pub fn remaining(&self) -> Money {
        if self.current_amount >= self.target_amount {
            Money::zero()
        } else {
            self.target_amount - self.current_amount
        }
    }

    /// Largest single month in the history (used to scale bar charts)
    pub fn peak_contribution(&self) -> Money {
        self.history
            .iter()
            .map(|c| c.amount)
            .max()
            .unwrap_or_default()
    }
}
