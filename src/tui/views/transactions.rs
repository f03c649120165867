//! Transaction history view

use ratatui::{
    layout::{Constraint, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table},
    Frame,
};

use crate::screens::TransactionHistory;
use crate::tui::layout::split_top;
use crate::tui::widgets::TextInput;

/// Render the transaction history with its search line
pub fn render(frame: &mut Frame, history: &TransactionHistory, searching: bool, area: Rect) {
    let (search_area, list_area) = split_top(area, 3);

    let search_block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(if searching { Color::Yellow } else { Color::DarkGray }));
    let search_inner = search_block.inner(search_area);
    frame.render_widget(search_block, search_area);
    let search = TextInput::new()
        .label("Search")
        .placeholder("Press / to search transactions...")
        .content(history.search())
        .focused(searching);
    frame.render_widget(search, search_inner);

    let block = Block::default()
        .title(format!(" {} ", history.title()))
        .title_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));

    if let Some(message) = history.empty_message() {
        frame.render_widget(
            Paragraph::new(Line::from(Span::styled(
                message,
                Style::default().fg(Color::DarkGray),
            )))
            .block(block),
            list_area,
        );
        return;
    }

    let header = Row::new(vec![
        Cell::from("Date").style(Style::default().add_modifier(Modifier::BOLD)),
        Cell::from("Description").style(Style::default().add_modifier(Modifier::BOLD)),
        Cell::from("Category").style(Style::default().add_modifier(Modifier::BOLD)),
        Cell::from("Amount").style(Style::default().add_modifier(Modifier::BOLD)),
    ])
    .style(Style::default().fg(Color::Yellow))
    .height(1);

    let rows: Vec<Row> = history
        .filtered()
        .into_iter()
        .map(|txn| {
            let amount_color = if txn.is_income() { Color::Green } else { Color::Red };
            Row::new(vec![
                Cell::from(txn.date.format("%d %b %Y").to_string()),
                Cell::from(txn.description.clone()),
                Cell::from(txn.category.clone()).style(Style::default().fg(Color::DarkGray)),
                Cell::from(txn.display_amount()).style(Style::default().fg(amount_color)),
            ])
        })
        .collect();

    let widths = [
        Constraint::Length(12),
        Constraint::Min(20),
        Constraint::Length(15),
        Constraint::Length(10),
    ];

    let table = Table::new(rows, widths).header(header).block(block);
    frame.render_widget(table, list_area);
}
