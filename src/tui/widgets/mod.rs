//! Reusable widgets for the TUI

pub mod control;
pub mod input;

pub use control::ControlWidget;
pub use input::TextInput;
