//! Contribution dialog
//!
//! Amount entry for adding money to a savings pot

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::screens::ContributionDialog;
use crate::tui::layout::centered_rect_fixed;
use crate::tui::widgets::TextInput;

/// Render the contribution dialog for the named pot
pub fn render(frame: &mut Frame, pot_name: &str, dialog: &ContributionDialog) {
    let area = centered_rect_fixed(52, 9, frame.area());

    // Clear the background
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(format!(" Add to \"{}\" ", pot_name))
        .title_style(Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Yellow));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    if inner.height < 5 {
        return;
    }

    let prompt = Paragraph::new(Line::from(Span::styled(
        "How much would you like to add to this savings pot?",
        Style::default().fg(Color::White),
    )));
    frame.render_widget(prompt, Rect::new(inner.x, inner.y + 1, inner.width, 1));

    let input = TextInput::new()
        .label("Amount")
        .placeholder("£0.00")
        .content(dialog.input())
        .focused(true);
    frame.render_widget(input, Rect::new(inner.x, inner.y + 2, inner.width, 1));

    let confirm_style = if dialog.can_confirm() {
        Style::default().fg(Color::Green)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    let actions = Line::from(vec![
        Span::styled("[Enter]", confirm_style),
        Span::styled(" Confirm Contribution  ", confirm_style),
        Span::styled("[Esc]", Style::default().fg(Color::Yellow)),
        Span::raw(" Cancel"),
    ]);
    frame.render_widget(
        Paragraph::new(actions),
        Rect::new(inner.x, inner.y + 4, inner.width, 1),
    );
}
