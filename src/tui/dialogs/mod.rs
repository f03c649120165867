//! Dialog modules for the TUI
//!
//! Modal dialogs drawn over the current screen

pub mod account_created;
pub mod contribution;
