//! Parental dashboard
//!
//! One card per child, each with an allowance and a spending-limit control.

use tracing::info;

use crate::data::DataProvider;
use crate::models::{ChildAccount, ControlSpec, ControlValue, Money};
use crate::navigation::{Navigator, Route, RouteState, CHILD_ID_KEY};

use super::control::ParentalControl;

pub fn child_allowance_spec() -> ControlSpec {
    ControlSpec::new(
        "Weekly Allowance",
        "Set a fixed weekly pocket money amount.",
        Money::from_pounds(20),
        Money::from_pounds(1),
    )
}

pub fn spending_limit_spec() -> ControlSpec {
    ControlSpec::new(
        "Card Spending Limit",
        "Set a weekly spending limit for their card.",
        Money::from_pounds(100),
        Money::from_pounds(5),
    )
}

/// Which of a child's controls an action targets
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlKind {
    Allowance,
    SpendingLimit,
}

impl ControlKind {
    pub fn toggle(self) -> Self {
        match self {
            Self::Allowance => Self::SpendingLimit,
            Self::SpendingLimit => Self::Allowance,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ChildCard {
    pub child: ChildAccount,
    pub allowance: ParentalControl,
    pub spending_limit: ParentalControl,
}

impl ChildCard {
    fn new(child: &ChildAccount) -> Self {
        Self {
            allowance: ParentalControl::new(
                child_allowance_spec(),
                ControlValue::new(true, child.allowance),
            ),
            spending_limit: ParentalControl::new(
                spending_limit_spec(),
                ControlValue::new(true, child.spending_limit),
            ),
            child: child.clone(),
        }
    }

    pub fn control(&self, kind: ControlKind) -> &ParentalControl {
        match kind {
            ControlKind::Allowance => &self.allowance,
            ControlKind::SpendingLimit => &self.spending_limit,
        }
    }

    pub fn control_mut(&mut self, kind: ControlKind) -> &mut ParentalControl {
        match kind {
            ControlKind::Allowance => &mut self.allowance,
            ControlKind::SpendingLimit => &mut self.spending_limit,
        }
    }
}

/// Control adjustments the dashboard can apply
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlAction {
    Toggle,
    Increase,
    Decrease,
}

#[derive(Debug, Clone)]
pub struct ParentalDashboard {
    cards: Vec<ChildCard>,
    selected: usize,
    focus: ControlKind,
}

impl ParentalDashboard {
    pub fn new<P: DataProvider + ?Sized>(provider: &P) -> Self {
        let cards: Vec<ChildCard> = provider.children().iter().map(ChildCard::new).collect();
        info!(children = cards.len(), "Parental dashboard loaded");
        Self {
            cards,
            selected: 0,
            focus: ControlKind::Allowance,
        }
    }

    pub fn cards(&self) -> &[ChildCard] {
        &self.cards
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    pub fn focus(&self) -> ControlKind {
        self.focus
    }

    pub fn select_next(&mut self) {
        if self.selected + 1 < self.cards.len() {
            self.selected += 1;
        }
    }

    pub fn select_previous(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    pub fn switch_focus(&mut self) {
        self.focus = self.focus.toggle();
    }

    /// Apply `action` to one child's control. Returns the new value, or
    /// `None` when the child doesn't exist or the change was ignored.
    pub fn adjust(
        &mut self,
        index: usize,
        kind: ControlKind,
        action: ControlAction,
    ) -> Option<ControlValue> {
        let card = self.cards.get_mut(index)?;
        let control = card.control_mut(kind);
        let value = match action {
            ControlAction::Toggle => Some(control.toggle()),
            ControlAction::Increase => control.increase(),
            ControlAction::Decrease => control.decrease(),
        }?;
        info!(
            child = %card.child.id,
            control = ?kind,
            enabled = value.enabled,
            amount = %value.amount,
            "Parental control changed"
        );
        Some(value)
    }

    /// Apply `action` to the focused control of the selected child
    pub fn adjust_selected(&mut self, action: ControlAction) -> Option<ControlValue> {
        self.adjust(self.selected, self.focus, action)
    }

    /// "Add Child" restarts onboarding
    pub fn add_child<N: Navigator + ?Sized>(&self, navigator: &mut N) {
        navigator.navigate_to(Route::Onboarding, None);
    }

    /// Open the transaction history for the child at `index`
    pub fn view_transactions<N: Navigator + ?Sized>(&self, index: usize, navigator: &mut N) -> bool {
        let Some(card) = self.cards.get(index) else {
            return false;
        };
        navigator.navigate_to(
            Route::TransactionHistory,
            Some(RouteState::new().with(CHILD_ID_KEY, card.child.id.as_str())),
        );
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::MockDataProvider;
    use crate::navigation::History;

    fn dashboard() -> ParentalDashboard {
        ParentalDashboard::new(&MockDataProvider::new())
    }

    #[test]
    fn test_cards_start_from_child_settings() {
        let dash = dashboard();
        assert_eq!(dash.cards().len(), 2);
        let alex = &dash.cards()[0];
        assert_eq!(alex.allowance.amount(), Money::from_pounds(10));
        assert_eq!(alex.spending_limit.amount(), Money::from_pounds(50));
        assert!(alex.allowance.is_enabled());
    }

    #[test]
    fn test_spending_limit_moves_in_fives() {
        let mut dash = dashboard();
        let value = dash
            .adjust(1, ControlKind::SpendingLimit, ControlAction::Increase)
            .unwrap();
        assert_eq!(value.amount, Money::from_pounds(35));

        for _ in 0..30 {
            dash.adjust(1, ControlKind::SpendingLimit, ControlAction::Increase);
        }
        assert_eq!(dash.cards()[1].spending_limit.amount(), Money::from_pounds(100));
    }

    #[test]
    fn test_disabled_control_ignores_steps() {
        let mut dash = dashboard();
        dash.switch_focus();
        dash.switch_focus();
        assert_eq!(dash.focus(), ControlKind::Allowance);

        let value = dash.adjust_selected(ControlAction::Toggle).unwrap();
        assert!(!value.enabled);
        assert!(dash.adjust_selected(ControlAction::Increase).is_none());
        assert_eq!(dash.cards()[0].allowance.amount(), Money::from_pounds(10));
        assert!(dash.adjust(5, ControlKind::Allowance, ControlAction::Toggle).is_none());
    }

    #[test]
    fn test_navigation_actions() {
        let mut dash = dashboard();
        dash.select_next();
        dash.select_next();
        assert_eq!(dash.selected(), 1);

        let mut history = History::new(Route::ParentalDashboard);
        assert!(dash.view_transactions(dash.selected(), &mut history));
        assert_eq!(history.current().route, Route::TransactionHistory);
        assert_eq!(history.current().state_value(CHILD_ID_KEY), Some("child2"));

        dash.add_child(&mut history);
        assert_eq!(history.current().route, Route::Onboarding);
        assert!(!dash.view_transactions(9, &mut history));
    }
}
