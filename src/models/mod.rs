//! Core data models for GrowBank
//!
//! Savings pots, child accounts, transactions, parental control values and the
//! age stages that drive the youth dashboard.

pub mod age;
pub mod child;
pub mod control;
pub mod ids;
pub mod money;
pub mod savings_pot;
pub mod transaction;

pub use age::{AgeStage, FINANCIAL_TOOLS_AGE, GRADUATION_AGE};
pub use child::ChildAccount;
pub use control::{ControlSpec, ControlValue};
pub use ids::{ChildId, PotId, TransactionId};
pub use money::{Money, MoneyParseError};
pub use savings_pot::{Contribution, PotIcon, SavingsPot};
pub use transaction::{Transaction, TransactionKind};
