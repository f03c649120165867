//! Parental control values
//!
//! A control is a switch plus an amount (weekly allowance, card spending limit).

use serde::{Deserialize, Serialize};

use super::money::Money;

/// The state reported whenever a control changes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ControlValue {
    pub enabled: bool,
    pub amount: Money,
}

impl ControlValue {
    pub fn new(enabled: bool, amount: Money) -> Self {
        Self { enabled, amount }
    }
}

/// Static description of a control: its bounds and labelling
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ControlSpec {
    pub label: String,
    pub description: String,
    pub max: Money,
    pub step: Money,
    pub unit: String,
}

impl ControlSpec {
    pub fn new(
        label: impl Into<String>,
        description: impl Into<String>,
        max: Money,
        step: Money,
    ) -> Self {
        Self {
            label: label.into(),
            description: description.into(),
            max,
            step,
            unit: "£".to_string(),
        }
    }

    pub fn with_unit(mut self, unit: impl Into<String>) -> Self {
        self.unit = unit.into();
        self
    }

    /// Clamp into `[0, max]` and snap to the nearest multiple of `step`
    pub fn normalize(&self, amount: Money) -> Money {
        let max = self.max.pence().max(0);
        let clamped = amount.pence().clamp(0, max);
        let step = self.step.pence();
        if step <= 0 {
            return Money::from_pence(clamped);
        }
        let snapped = (clamped + step / 2) / step * step;
        Money::from_pence(snapped.min(max))
    }

    /// Format an amount with this control's unit
    pub fn format(&self, amount: Money) -> String {
        amount.format_with_symbol(&self.unit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spending_limit() -> ControlSpec {
        ControlSpec::new(
            "Card Spending Limit",
            "Set a total weekly spending limit for the card.",
            Money::from_pounds(100),
            Money::from_pounds(5),
        )
    }

    #[test]
    fn test_normalize_snaps_to_step() {
        let spec = spending_limit();
        assert_eq!(spec.normalize(Money::from_pounds(52)), Money::from_pounds(50));
        assert_eq!(spec.normalize(Money::from_pounds(53)), Money::from_pounds(55));
    }

    #[test]
    fn test_normalize_clamps() {
        let spec = spending_limit();
        assert_eq!(spec.normalize(Money::from_pounds(250)), Money::from_pounds(100));
        assert_eq!(spec.normalize(Money::from_pounds(-3)), Money::zero());
    }

    #[test]
    fn test_format_uses_unit() {
        let spec = spending_limit().with_unit("$");
        assert_eq!(spec.format(Money::from_pounds(30)), "$30.00");
    }
}
