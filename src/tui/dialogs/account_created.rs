//! Account created dialog
//!
//! Shown after onboarding submits; the only way on is the parental dashboard.

use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::screens::onboarding::{DIALOG_ACTION, DIALOG_BODY, DIALOG_TITLE};
use crate::tui::layout::centered_rect_fixed;

/// Render the account created dialog
pub fn render(frame: &mut Frame) {
    let area = centered_rect_fixed(56, 9, frame.area());

    // Clear the background
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(format!(" {} ", DIALOG_TITLE))
        .title_style(Style::default().fg(Color::Green).add_modifier(Modifier::BOLD))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Green));

    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(DIALOG_BODY, Style::default().fg(Color::White))),
        Line::from(""),
        Line::from(vec![
            Span::styled("[Enter]", Style::default().fg(Color::Green)),
            Span::raw(format!(" {}  ", DIALOG_ACTION)),
            Span::styled("[Esc]", Style::default().fg(Color::Yellow)),
            Span::raw(" Close"),
        ]),
    ];

    let paragraph = Paragraph::new(lines).block(block).wrap(Wrap { trim: false });

    frame.render_widget(paragraph, area);
}
