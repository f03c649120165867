//! Savings pot detail view

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Bar, BarChart, BarGroup, Block, Borders, Paragraph},
    Frame,
};

use crate::screens::SavingsPotDetail;
use crate::tui::dialogs;
use crate::tui::layout::split_top;

use super::progress_gauge;

/// Render the pot detail screen
pub fn render(frame: &mut Frame, detail: &SavingsPotDetail, area: Rect) {
    let pot = detail.pot();
    let (summary_area, history_area) = split_top(area, 7);

    let block = Block::default()
        .title(format!(" {} {} ", pot.icon.glyph(), pot.name))
        .title_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));
    let inner = block.inner(summary_area);
    frame.render_widget(block, summary_area);

    let mut lines = vec![
        Line::from(vec![
            Span::styled(
                pot.current_amount.to_string(),
                Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!(" of {}", pot.target_amount),
                Style::default().fg(Color::DarkGray),
            ),
        ]),
        Line::from(Span::styled(
            format!("{} to go", pot.remaining()),
            Style::default().fg(Color::White),
        )),
    ];
    let added = detail.added_this_visit();
    if added.is_positive() {
        lines.push(Line::from(Span::styled(
            format!("You added {} this visit", added),
            Style::default().fg(Color::Green),
        )));
    }
    frame.render_widget(Paragraph::new(lines), inner);

    if inner.height > 3 {
        let gauge_area = Rect::new(inner.x, inner.y + inner.height - 1, inner.width, 1);
        frame.render_widget(progress_gauge(detail.progress(), Color::Green), gauge_area);
    }

    let history_block = Block::default()
        .title(" Contribution History ")
        .title_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));

    if pot.history.is_empty() {
        frame.render_widget(
            Paragraph::new("No contributions yet.")
                .style(Style::default().fg(Color::DarkGray))
                .block(history_block),
            history_area,
        );
    } else {
        let bars: Vec<Bar> = pot
            .history
            .iter()
            .map(|contribution| {
                Bar::default()
                    .label(Line::from(contribution.month.clone()))
                    .value(contribution.amount.pence().max(0) as u64)
                    .text_value(contribution.amount.to_string())
            })
            .collect();
        let chart = BarChart::default()
            .block(history_block)
            .data(BarGroup::default().bars(&bars))
            .bar_width(9)
            .bar_gap(2)
            .bar_style(Style::default().fg(Color::Green))
            .value_style(Style::default().fg(Color::Black).bg(Color::Green));
        frame.render_widget(chart, history_area);
    }

    if detail.dialog().is_open() {
        dialogs::contribution::render(frame, &pot.name, detail.dialog());
    }
}
