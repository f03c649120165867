//! Read-only data provider interface
//!
//! Screens only read from the provider. Lookups by identifier return `None`
//! when nothing matches; the `require_*` helpers turn that into a
//! [`GrowBankError::NotFound`] for callers that prefer errors.

use crate::error::{GrowBankError, GrowBankResult};
use crate::flow::Payload;
use crate::models::{ChildAccount, Money, SavingsPot, Transaction};

/// Headline numbers for the youth account
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AccountBalance {
    pub balance: Money,
    pub change_this_week: Money,
}

/// Source of all demo data
pub trait DataProvider {
    /// Initial payload for the onboarding wizard
    fn onboarding_defaults(&self) -> Payload;

    /// Balance card on the youth dashboard
    fn main_balance(&self) -> AccountBalance;

    fn savings_pots(&self) -> &[SavingsPot];

    fn children(&self) -> &[ChildAccount];

    fn transactions(&self) -> &[Transaction];

    fn savings_pot(&self, id: &str) -> Option<&SavingsPot> {
        self.savings_pots().iter().find(|pot| pot.id == *id)
    }

    fn child(&self, id: &str) -> Option<&ChildAccount> {
        self.children().iter().find(|child| child.id == *id)
    }

    fn require_savings_pot(&self, id: &str) -> GrowBankResult<&SavingsPot> {
        self.savings_pot(id)
            .ok_or_else(|| GrowBankError::savings_pot_not_found(id))
    }

    fn require_child(&self, id: &str) -> GrowBankResult<&ChildAccount> {
        self.child(id).ok_or_else(|| GrowBankError::child_not_found(id))
    }
}
