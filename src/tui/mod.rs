//! Terminal User Interface module
//!
//! A ratatui front-end over the screen view models. The event loop draws,
//! waits for a key or tick, and remounts the screen whenever the navigation
//! history changes.

pub mod app;
pub mod event;
pub mod handler;
pub mod terminal;

// Views
pub mod views;

// Widgets
pub mod widgets;

// Dialogs
pub mod dialogs;

// Layout
pub mod layout;

pub use app::App;
pub use terminal::run_tui;
