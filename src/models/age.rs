//! Age-based account stages
//!
//! The youth dashboard changes shape as the account holder gets older.

use std::fmt;

/// Age at which the dashboard switches from savings pots to financial tools
pub const FINANCIAL_TOOLS_AGE: u8 = 16;

/// Age at which the account graduates to an adult account
pub const GRADUATION_AGE: u8 = 18;

/// Which dashboard variant an account holder sees
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AgeStage {
    /// Under 16: savings pots front and centre
    SavingsPots,
    /// 16 and 17: budgeting and investing previews
    FinancialTools,
    /// 18 and over: graduated
    Graduated,
}

impl AgeStage {
    pub fn from_age(age: u8) -> Self {
        if age >= GRADUATION_AGE {
            Self::Graduated
        } else if age >= FINANCIAL_TOOLS_AGE {
            Self::FinancialTools
        } else {
            Self::SavingsPots
        }
    }

    /// Heading above the evolving dashboard widget
    pub fn heading(&self) -> &'static str {
        match self {
            Self::SavingsPots => "Your Savings Pots",
            Self::FinancialTools | Self::Graduated => "Your Financial Tools",
        }
    }
}

impl fmt::Display for AgeStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SavingsPots => write!(f, "Savings pots"),
            Self::FinancialTools => write!(f, "Financial tools"),
            Self::Graduated => write!(f, "Graduated"),
        }
    }
}
