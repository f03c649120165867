//! Status bar view
//!
//! Shows the last status message on the left and the key hints for the
//! mounted screen on the right

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::tui::app::{App, Screen};

/// Key hints for the mounted screen
pub fn key_hints(app: &App) -> &'static str {
    match &app.screen {
        Screen::Onboarding(state) if state.screen.is_dialog_open() => " Enter:Continue  Esc:Close ",
        Screen::Onboarding(_) => " Tab:Field  Enter:Next  Esc:Back  Space/←/→:Allowance ",
        Screen::YouthDashboard(dashboard) if dashboard.graduation().is_some() => {
            " Enter:Continue "
        }
        Screen::YouthDashboard(dashboard) if dashboard.shows_demo_controls() => {
            " ↑↓:Select  Enter:Open  s:Turn 18  t:Transactions  q:Quit "
        }
        Screen::YouthDashboard(_) => " ↑↓:Select  Enter:Open  t:Transactions  q:Quit ",
        Screen::SavingsPotDetail(detail) if detail.dialog().is_open() => {
            " Enter:Confirm  Esc:Cancel "
        }
        Screen::SavingsPotDetail(_) => " a:Add Money  Esc:Back  q:Quit ",
        Screen::ParentalDashboard(_) => {
            " ↑↓:Child  Tab:Control  Space:On/Off  ←/→:Amount  t:History  a:Add Child "
        }
        Screen::TransactionHistory { searching: true, .. } => " Enter/Esc:Done ",
        Screen::TransactionHistory { .. } => " /:Search  Esc:Back  q:Quit ",
        Screen::NotFound => " Enter:Home  q:Quit ",
    }
}

/// Render the status bar
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let mut spans = vec![Span::styled(
        " F1:Onboarding  F2:Parent  F3:Youth ",
        Style::default().fg(Color::DarkGray),
    )];

    if let Some(ref message) = app.status_message {
        spans.push(Span::raw(" │ "));
        spans.push(Span::styled(message.as_str(), Style::default().fg(Color::Yellow)));
    }

    let hints = key_hints(app);

    // Right-align the hints
    let left_len: usize = spans.iter().map(|s| s.content.chars().count()).sum();
    let padding_len = (area.width as usize).saturating_sub(left_len + hints.chars().count());
    spans.push(Span::raw(" ".repeat(padding_len.max(1))));
    spans.push(Span::styled(hints, Style::default().fg(Color::White)));

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Settings;
    use crate::data::MockDataProvider;
    use crate::navigation::Route;
    use std::time::Instant;

    #[test]
    fn test_hints_follow_screen_state() {
        let now = Instant::now();
        let mut app = App::new(MockDataProvider::new(), Settings::default(), Route::YouthDashboard, now);
        assert!(key_hints(&app).contains("Turn 18"));

        if let Screen::YouthDashboard(dashboard) = &mut app.screen {
            dashboard.simulate_turning_18();
        }
        assert_eq!(key_hints(&app), " Enter:Continue ");
    }
}
