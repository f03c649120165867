//! Savings pot display formatting

use tabled::settings::Style;
use tabled::{Table, Tabled};

use super::progress_bar;
use crate::models::SavingsPot;

#[derive(Tabled)]
struct PotRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Pot")]
    name: String,
    #[tabled(rename = "Saved")]
    saved: String,
    #[tabled(rename = "Target")]
    target: String,
    #[tabled(rename = "Progress")]
    progress: String,
}

/// Format savings pots as a table
pub fn format_pot_list(pots: &[SavingsPot]) -> String {
    if pots.is_empty() {
        return "No savings pots found.".to_string();
    }

    let rows = pots.iter().map(|pot| PotRow {
        id: pot.id.to_string(),
        name: format!("{} {}", pot.icon.glyph(), pot.name),
        saved: pot.current_amount.to_string(),
        target: pot.target_amount.to_string(),
        progress: format!(
            "{} {:>3.0}%",
            progress_bar(pot.progress_percent(), 10),
            pot.progress_percent()
        ),
    });

    Table::new(rows).with(Style::rounded()).to_string()
}

/// Format one pot with its monthly contribution history
pub fn format_pot_details(pot: &SavingsPot) -> String {
    let mut output = String::new();

    output.push_str(&format!("{} {}\n", pot.icon.glyph(), pot.name));
    output.push_str(&format!(
        "  Saved:     {} of {}\n",
        pot.current_amount, pot.target_amount
    ));
    output.push_str(&format!(
        "  Progress:  {} {:.0}%\n",
        progress_bar(pot.progress_percent(), 20),
        pot.progress_percent()
    ));
    output.push_str(&format!("  Remaining: {}\n", pot.remaining()));

    if !pot.history.is_empty() {
        output.push('\n');
        output.push_str("Contribution History\n");
        let peak = pot.peak_contribution();
        for contribution in &pot.history {
            let width = (contribution.amount.percent_of(peak) / 100.0 * 20.0).round() as usize;
            output.push_str(&format!(
                "  {:<4} {:<20} {:>10}\n",
                contribution.month,
                "█".repeat(width),
                contribution.amount.to_string()
            ));
        }
    }

    output
}
