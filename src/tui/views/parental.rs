//! Parental dashboard view
//!
//! One card per child with their balance and two controls. The selected
//! card has a highlighted border; the focused control is marked.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::screens::{ChildCard, ControlKind, ParentalDashboard};
use crate::tui::widgets::ControlWidget;

const CARD_HEIGHT: u16 = 11;

/// Render the parental dashboard
pub fn render(frame: &mut Frame, dashboard: &ParentalDashboard, area: Rect) {
    let cards = dashboard.cards();
    if cards.is_empty() {
        frame.render_widget(
            Paragraph::new("No children yet. Press 'a' to add a child.")
                .style(Style::default().fg(Color::DarkGray)),
            area,
        );
        return;
    }

    let constraints: Vec<Constraint> = cards
        .iter()
        .map(|_| Constraint::Length(CARD_HEIGHT))
        .chain(std::iter::once(Constraint::Min(0)))
        .collect();
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(area);

    for (index, card) in cards.iter().enumerate() {
        let selected = index == dashboard.selected();
        let focus = selected.then_some(dashboard.focus());
        render_card(frame, card, selected, focus, chunks[index]);
    }
}

fn render_card(
    frame: &mut Frame,
    card: &ChildCard,
    selected: bool,
    focus: Option<ControlKind>,
    area: Rect,
) {
    if area.height < 3 {
        return;
    }

    let border_color = if selected { Color::Cyan } else { Color::DarkGray };
    let block = Block::default()
        .title(format!(" {} {} ", card.child.initials, card.child.name))
        .title_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let balance = Line::from(vec![
        Span::raw("Balance: "),
        Span::styled(
            card.child.balance.to_string(),
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
        ),
    ]);
    frame.render_widget(Paragraph::new(balance), Rect::new(inner.x, inner.y, inner.width, 1));

    let mut y = inner.y + 2;
    for kind in [ControlKind::Allowance, ControlKind::SpendingLimit] {
        if y + 3 > inner.y + inner.height {
            break;
        }
        let widget = ControlWidget::new(card.control(kind)).focused(focus == Some(kind));
        frame.render_widget(widget, Rect::new(inner.x, y, inner.width, 3));
        y += 4;
    }
}
