//! Parental control module
//!
//! A switch with a stepped amount slider. Every change returns the new
//! [`ControlValue`] so the owner can forward it (to a wizard payload, a log).

use tracing::debug;

use crate::models::{ControlSpec, ControlValue, Money};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParentalControl {
    spec: ControlSpec,
    enabled: bool,
    amount: Money,
}

impl ParentalControl {
    /// `initial` is normalised into the control's range
    pub fn new(spec: ControlSpec, initial: ControlValue) -> Self {
        let amount = spec.normalize(initial.amount);
        Self {
            spec,
            enabled: initial.enabled,
            amount,
        }
    }

    pub fn spec(&self) -> &ControlSpec {
        &self.spec
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn amount(&self) -> Money {
        self.amount
    }

    pub fn value(&self) -> ControlValue {
        ControlValue::new(self.enabled, self.amount)
    }

    /// Amount as a fraction of the maximum, for drawing the slider
    pub fn fill_ratio(&self) -> f64 {
        (self.amount.percent_of(self.spec.max) / 100.0).clamp(0.0, 1.0)
    }

    /// Amount formatted with the control's unit
    pub fn display_amount(&self) -> String {
        self.spec.format(self.amount)
    }

    pub fn toggle(&mut self) -> ControlValue {
        self.set_enabled(!self.enabled)
    }

    pub fn set_enabled(&mut self, enabled: bool) -> ControlValue {
        self.enabled = enabled;
        debug!(control = %self.spec.label, enabled, "Control toggled");
        self.value()
    }

    /// Set the amount. Ignored while the control is disabled, like a
    /// disabled slider.
    pub fn set_amount(&mut self, amount: Money) -> Option<ControlValue> {
        if !self.enabled {
            return None;
        }
        self.amount = self.spec.normalize(amount);
        debug!(control = %self.spec.label, amount = %self.amount, "Control amount changed");
        Some(self.value())
    }

    pub fn increase(&mut self) -> Option<ControlValue> {
        self.set_amount(self.amount + self.spec.step)
    }

    pub fn decrease(&mut self) -> Option<ControlValue> {
        self.set_amount(self.amount - self.spec.step)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn allowance(initial: i64) -> ParentalControl {
        ParentalControl::new(
            ControlSpec::new(
                "Weekly Allowance",
                "Set a fixed weekly pocket money amount.",
                Money::from_pounds(20),
                Money::from_pounds(1),
            ),
            ControlValue::new(true, Money::from_pounds(initial)),
        )
    }

    #[test]
    fn test_initial_value_is_normalised() {
        assert_eq!(allowance(35).amount(), Money::from_pounds(20));
    }

    #[test]
    fn test_step_up_and_down_within_bounds() {
        let mut control = allowance(19);
        assert_eq!(control.increase().unwrap().amount, Money::from_pounds(20));
        assert_eq!(control.increase().unwrap().amount, Money::from_pounds(20));

        let mut control = allowance(0);
        assert_eq!(control.decrease().unwrap().amount, Money::zero());
    }

    #[test]
    fn test_disabled_control_ignores_amount_changes() {
        let mut control = allowance(10);
        let value = control.toggle();
        assert!(!value.enabled);
        assert_eq!(value.amount, Money::from_pounds(10));

        assert!(control.set_amount(Money::from_pounds(5)).is_none());
        assert!(control.increase().is_none());
        assert_eq!(control.amount(), Money::from_pounds(10));

        assert!(control.toggle().enabled);
        assert!(control.set_amount(Money::from_pounds(5)).is_some());
    }

    #[test]
    fn test_fill_ratio_and_display() {
        let control = allowance(5);
        assert!((control.fill_ratio() - 0.25).abs() < 1e-9);
        assert_eq!(control.display_amount(), "£5.00");
    }
}
