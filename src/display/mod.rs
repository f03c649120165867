//! Display formatting for terminal output
//!
//! List views are rendered as tables with tabled; detail views are plain
//! aligned text.

pub mod child;
pub mod pot;
pub mod transaction;

pub use child::format_child_list;
pub use pot::{format_pot_details, format_pot_list};
pub use transaction::format_transaction_list;

/// Fixed-width text progress bar, e.g. `[#####-----]`
pub fn progress_bar(percent: f64, width: usize) -> String {
    let filled = ((percent.clamp(0.0, 100.0) / 100.0) * width as f64).round() as usize;
    format!("[{}{}]", "#".repeat(filled), "-".repeat(width - filled))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_progress_bar() {
        assert_eq!(progress_bar(0.0, 10), "[----------]");
        assert_eq!(progress_bar(50.0, 10), "[#####-----]");
        assert_eq!(progress_bar(250.0, 4), "[####]");
    }
}
