//! Youth dashboard view
//!
//! Balance card on top, then the age-dependent widget: savings pot cards
//! below 16, financial tool notices from 16. The graduation celebration is
//! drawn as an overlay with falling confetti.

use std::time::Duration;

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::flow::{CelebrationSequencer, ConfettiPiece};
use crate::screens::{DashboardWidget, PotCard, ToolNotice, YouthDashboard};
use crate::tui::app::App;
use crate::tui::layout::{centered_rect, split_top};

use super::progress_gauge;

const CONFETTI_COLORS: [Color; 5] = [
    Color::Yellow,
    Color::Magenta,
    Color::Cyan,
    Color::Green,
    Color::LightRed,
];

/// Render the youth dashboard
pub fn render(frame: &mut Frame, app: &App, dashboard: &YouthDashboard, area: Rect) {
    let (balance_area, widget_area) = split_top(area, 5);

    render_balance(frame, dashboard, balance_area);

    let block = Block::default()
        .title(format!(" {} ", dashboard.heading()))
        .title_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));
    let inner = block.inner(widget_area);
    frame.render_widget(block, widget_area);

    match dashboard.widget() {
        DashboardWidget::SavingsPots(cards) => {
            render_pots(frame, cards, dashboard.selected_pot(), inner)
        }
        DashboardWidget::FinancialTools(notices) => render_tools(frame, notices, inner),
    }

    if let Some(sequencer) = dashboard.graduation() {
        render_celebration(frame, sequencer, app.animation_elapsed(), area);
    }
}

fn render_balance(frame: &mut Frame, dashboard: &YouthDashboard, area: Rect) {
    let balance = dashboard.balance();
    let change_color = if balance.change_this_week.is_negative() {
        Color::Red
    } else {
        Color::Green
    };

    let lines = vec![
        Line::from(vec![
            Span::raw("Hi, "),
            Span::styled(
                dashboard.user_name().to_string(),
                Style::default().add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!("  (age {})", dashboard.user_age()),
                Style::default().fg(Color::DarkGray),
            ),
        ]),
        Line::from(vec![
            Span::styled(
                balance.balance.to_string(),
                Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!("  {} this week", balance.change_this_week),
                Style::default().fg(change_color),
            ),
        ]),
    ];

    let block = Block::default()
        .title(" Main Account ")
        .title_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));
    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn render_pots(frame: &mut Frame, cards: &[PotCard], selected: usize, area: Rect) {
    if cards.is_empty() {
        frame.render_widget(
            Paragraph::new("No savings pots yet.").style(Style::default().fg(Color::DarkGray)),
            area,
        );
        return;
    }

    let mut y = area.y;
    for (index, card) in cards.iter().enumerate() {
        if y + 2 > area.y + area.height {
            break;
        }
        let is_selected = index == selected;
        let name_style = if is_selected {
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::White)
        };
        let marker = if is_selected { "▶ " } else { "  " };
        let line = Line::from(vec![
            Span::styled(marker, Style::default().fg(Color::Cyan)),
            Span::raw(format!("{} ", card.icon.glyph())),
            Span::styled(card.name.clone(), name_style),
            Span::styled(
                format!("  {} / {}", card.current_amount, card.target_amount),
                Style::default().fg(Color::DarkGray),
            ),
        ]);
        frame.render_widget(Paragraph::new(line), Rect::new(area.x, y, area.width, 1));

        let gauge_area = Rect::new(area.x + 2, y + 1, area.width.saturating_sub(2), 1);
        frame.render_widget(progress_gauge(card.progress(), Color::Green), gauge_area);
        y += 3;
    }
}

fn render_tools(frame: &mut Frame, notices: &[ToolNotice], area: Rect) {
    let mut lines = Vec::new();
    for notice in notices {
        lines.push(Line::from(Span::styled(
            notice.title,
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
        )));
        lines.push(Line::from(Span::styled(
            notice.description,
            Style::default().fg(Color::White),
        )));
        lines.push(Line::from(""));
    }
    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: true }), area);
}

fn render_celebration(
    frame: &mut Frame,
    sequencer: &CelebrationSequencer,
    elapsed: Duration,
    area: Rect,
) {
    frame.render_widget(Clear, area);
    draw_confetti(frame.buffer_mut(), sequencer.visible_confetti(), elapsed, area);

    let content = sequencer.content();
    let card = centered_rect(60, 50, area);
    frame.render_widget(Clear, card);

    let block = Block::default()
        .title(format!(" {} ", sequencer.stage()))
        .title_style(Style::default().fg(Color::Magenta).add_modifier(Modifier::BOLD))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Magenta));
    let inner = block.inner(card);
    frame.render_widget(block, card);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(3),    // Text
            Constraint::Length(1), // Action
            Constraint::Length(1), // Progress
        ])
        .split(inner);

    let mut lines = vec![
        Line::from(Span::styled(
            content.title,
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
    ];
    lines.extend(content.body.into_iter().map(Line::from));
    frame.render_widget(
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true }),
        chunks[0],
    );

    let action = Line::from(vec![
        Span::styled("[Enter] ", Style::default().fg(Color::Green)),
        Span::styled(content.action, Style::default().add_modifier(Modifier::BOLD)),
    ]);
    frame.render_widget(
        Paragraph::new(action).alignment(Alignment::Center),
        chunks[1],
    );
    frame.render_widget(progress_gauge(sequencer.progress(), Color::Magenta), chunks[2]);
}

/// Glyph for a piece by its rotation quadrant
fn confetti_glyph(rotation_deg: f64) -> &'static str {
    match (rotation_deg.rem_euclid(360.0) / 90.0) as u8 {
        0 => "*",
        1 => "+",
        2 => "o",
        _ => "~",
    }
}

/// Draw each visible piece at its current position, clipped to `area`
fn draw_confetti(buf: &mut Buffer, pieces: &[ConfettiPiece], elapsed: Duration, area: Rect) {
    if area.width == 0 || area.height == 0 {
        return;
    }

    for piece in pieces {
        let Some(frame) = piece.frame_at(elapsed) else {
            continue;
        };
        if !(0.0..=1.0).contains(&frame.y_fraction) {
            continue;
        }

        let max_x = f64::from(area.width - 1);
        let max_y = f64::from(area.height - 1);
        let x = area.x + (frame.x_percent / 100.0 * max_x).round().clamp(0.0, max_x) as u16;
        let y = area.y + (frame.y_fraction * max_y).round().clamp(0.0, max_y) as u16;

        let mut style = Style::default().fg(CONFETTI_COLORS[piece.id % CONFETTI_COLORS.len()]);
        if frame.opacity < 0.5 {
            style = style.add_modifier(Modifier::DIM);
        }
        buf.set_string(x, y, confetti_glyph(frame.rotation_deg), style);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_glyph_by_quadrant() {
        assert_eq!(confetti_glyph(10.0), "*");
        assert_eq!(confetti_glyph(100.0), "+");
        assert_eq!(confetti_glyph(190.0), "o");
        assert_eq!(confetti_glyph(300.0), "~");
        assert_eq!(confetti_glyph(-10.0), "~");
    }

    #[test]
    fn test_confetti_stays_inside_area() {
        let mut rng = StdRng::seed_from_u64(7);
        let pieces = crate::flow::confetti::generate(30, &mut rng);
        let full = Rect::new(0, 0, 40, 20);
        let area = Rect::new(5, 5, 10, 5);

        for secs in 0..12 {
            let mut buf = Buffer::empty(full);
            draw_confetti(&mut buf, &pieces, Duration::from_millis(secs * 700), area);
            for y in 0..full.height {
                for x in 0..full.width {
                    let inside = x >= area.x
                        && x < area.x + area.width
                        && y >= area.y
                        && y < area.y + area.height;
                    if !inside {
                        assert_eq!(buf[(x, y)].symbol(), " ");
                    }
                }
            }
        }
    }

    #[test]
    fn test_hidden_pieces_are_not_drawn() {
        let piece = ConfettiPiece {
            id: 0,
            x_percent: 50.0,
            delay_secs: 10.0,
            duration_secs: 3.0,
            rotation_deg: 0.0,
        };
        let area = Rect::new(0, 0, 10, 10);
        let mut buf = Buffer::empty(area);
        draw_confetti(&mut buf, &[piece], Duration::from_secs(1), area);
        assert!((0..10u16).all(|y| (0..10u16).all(|x| buf[(x, y)].symbol() == " ")));
    }
}
