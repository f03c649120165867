//! Screen view models
//!
//! Each screen owns its state, reads from a [`crate::data::DataProvider`] and
//! moves between routes through a [`crate::navigation::Navigator`]. The
//! front-ends only draw these models and forward input to them.

pub mod control;
pub mod onboarding;
pub mod parental_dashboard;
pub mod savings_pot_detail;
pub mod transaction_history;
pub mod youth_dashboard;

pub use control::ParentalControl;
pub use onboarding::{OnboardingScreen, OnboardingSummary};
pub use parental_dashboard::{ChildCard, ControlAction, ControlKind, ParentalDashboard};
pub use savings_pot_detail::{ContributionDialog, SavingsPotDetail};
pub use transaction_history::TransactionHistory;
pub use youth_dashboard::{DashboardConfig, DashboardWidget, PotCard, ToolNotice, YouthDashboard};
