//! Transaction model
//!
//! Entries in the youth account's transaction history.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::TransactionId;
use super::money::Money;

/// Whether money came in or went out
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    Income,
    Expense,
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Income => write!(f, "Income"),
            Self::Expense => write!(f, "Expense"),
        }
    }
}

/// A single transaction
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    pub id: TransactionId,
    pub date: NaiveDate,
    pub description: String,
    /// Signed amount (negative for outflow)
    pub amount: Money,
    pub kind: TransactionKind,
    pub category: String,
}

impl Transaction {
    /// Create a transaction; the kind follows the sign of `amount`
    pub fn new(
        id: impl Into<String>,
        date: NaiveDate,
        description: impl Into<String>,
        amount: Money,
        category: impl Into<String>,
    ) -> Self {
        let kind = if amount.is_negative() {
            TransactionKind::Expense
        } else {
            TransactionKind::Income
        };
        Self {
            id: TransactionId::new(id),
            date,
            description: description.into(),
            amount,
            kind,
            category: category.into(),
        }
    }

    pub fn is_income(&self) -> bool {
        self.kind == TransactionKind::Income
    }

    /// Case-insensitive match against description or category.
    /// An empty term matches everything.
    pub fn matches(&self, term: &str) -> bool {
        let term = term.trim().to_lowercase();
        term.is_empty()
            || self.description.to_lowercase().contains(&term)
            || self.category.to_lowercase().contains(&term)
    }

    /// Amount as shown in the history list; income gets a leading `+`
    pub fn display_amount(&self) -> String {
        if self.is_income() {
            format!("+{}", self.amount)
        } else {
            self.amount.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cinema() -> Transaction {
        Transaction::new(
            "2",
            NaiveDate::from_ymd_opt(2024, 7, 27).unwrap(),
            "Odeon Cinema",
            Money::from_pence(-750),
            "Entertainment",
        )
    }

    #[test]
    fn test_kind_follows_sign() {
        assert_eq!(cinema().kind, TransactionKind::Expense);
        let gift = Transaction::new(
            "4",
            NaiveDate::from_ymd_opt(2024, 7, 25).unwrap(),
            "Gift from Grandma",
            Money::from_pounds(20),
            "Gift",
        );
        assert!(gift.is_income());
        assert_eq!(gift.display_amount(), "+£20.00");
    }

    #[test]
    fn test_matches_description_and_category() {
        let txn = cinema();
        assert!(txn.matches("odeon"));
        assert!(txn.matches("ENTERTAIN"));
        assert!(txn.matches("  "));
        assert!(!txn.matches("tesco"));
        assert_eq!(txn.display_amount(), "-£7.50");
    }
}
