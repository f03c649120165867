//! CLI command handlers
//!
//! Bridges clap argument parsing with the screen models. Handlers write to
//! any `Write` so they can be exercised without a terminal.

pub mod browse;
pub mod graduate;
pub mod onboard;
pub mod prompt;

pub use browse::{show_children, show_pot, show_pots, show_transactions};
pub use graduate::run_graduation;
pub use onboard::{run_onboarding, OnboardingOutcome};
pub use prompt::Prompter;
