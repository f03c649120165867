//! Onboarding wizard view
//!
//! Step header with a progress gauge, then the step's fields (or the review
//! summary on the last step) and the available actions.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::flow::FieldKind;
use crate::tui::app::OnboardingState;
use crate::tui::dialogs;
use crate::tui::widgets::{ControlWidget, TextInput};

use super::progress_gauge;

/// Render the onboarding wizard
pub fn render(frame: &mut Frame, state: &OnboardingState, area: Rect) {
    let view = state.screen.wizard().current_view();

    let block = Block::default()
        .title(format!(" Step {} of {} ", view.number, view.total))
        .title_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Progress
            Constraint::Length(1),
            Constraint::Length(1), // Title
            Constraint::Length(2), // Description
            Constraint::Min(3),    // Fields
            Constraint::Length(1), // Actions
        ])
        .split(inner);

    frame.render_widget(progress_gauge(view.progress, Color::Green), chunks[0]);

    frame.render_widget(
        Paragraph::new(Span::styled(
            view.step.title.clone(),
            Style::default().add_modifier(Modifier::BOLD),
        )),
        chunks[2],
    );
    frame.render_widget(
        Paragraph::new(Span::styled(
            view.step.description.clone(),
            Style::default().fg(Color::DarkGray),
        ))
        .wrap(Wrap { trim: true }),
        chunks[3],
    );

    if view.fields.is_empty() {
        render_review(frame, state, chunks[4]);
    } else {
        render_fields(frame, state, chunks[4]);
    }

    let mut actions = Vec::new();
    if view.actions.can_retreat {
        actions.push(Span::styled("[Esc]", Style::default().fg(Color::Yellow)));
        actions.push(Span::raw(" Back  "));
    }
    let next_style = if view.actions.can_submit {
        Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Green)
    };
    actions.push(Span::styled("[Enter]", next_style));
    actions.push(Span::raw(format!(" {}", view.step.next_label)));
    frame.render_widget(Paragraph::new(Line::from(actions)), chunks[5]);

    if state.screen.is_dialog_open() {
        dialogs::account_created::render(frame);
    }
}

fn render_fields(frame: &mut Frame, state: &OnboardingState, area: Rect) {
    let view = state.screen.wizard().current_view();
    let mut y = area.y;
    let bottom = area.y + area.height;

    for (index, field) in view.fields.iter().enumerate() {
        let focused = index == state.focused_field;
        match &field.spec.kind {
            FieldKind::Control(_) => {
                if y + 3 > bottom {
                    break;
                }
                let widget =
                    ControlWidget::new(state.screen.allowance_control()).focused(focused);
                frame.render_widget(widget, Rect::new(area.x, y, area.width, 3));
                y += 4;
            }
            _ => {
                if y + 1 > bottom {
                    break;
                }
                let input = if focused {
                    state.input.clone()
                } else {
                    TextInput::new().content(field.text())
                };
                let input = input
                    .label(field.spec.label.clone())
                    .placeholder(field.spec.placeholder.clone().unwrap_or_default());
                frame.render_widget(input, Rect::new(area.x, y, area.width, 1));
                y += 2;
            }
        }
    }
}

fn render_review(frame: &mut Frame, state: &OnboardingState, area: Rect) {
    let summary = state.screen.summary();
    let rows = summary.rows();
    let label_width = rows.iter().map(|(label, _)| label.len()).max().unwrap_or(0);

    let lines: Vec<Line> = rows
        .into_iter()
        .map(|(label, value)| {
            Line::from(vec![
                Span::styled(
                    format!("{:<width$}  ", label, width = label_width),
                    Style::default().fg(Color::Cyan),
                ),
                Span::styled(value, Style::default().fg(Color::White)),
            ])
        })
        .collect();

    frame.render_widget(Paragraph::new(lines), area);
}
