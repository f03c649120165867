//! TUI Views module
//!
//! One view per screen, plus the shared header and status bar.

pub mod onboarding;
pub mod parental;
pub mod pot_detail;
pub mod status_bar;
pub mod transactions;
pub mod youth;

use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Paragraph},
    Frame,
};

use super::app::{App, Screen};
use super::layout::AppLayout;

/// Render the entire application
pub fn render(frame: &mut Frame, app: &App) {
    let layout = AppLayout::new(frame.area());

    render_header(frame, app, layout.header);

    match &app.screen {
        Screen::Onboarding(state) => onboarding::render(frame, state, layout.main),
        Screen::YouthDashboard(dashboard) => youth::render(frame, app, dashboard, layout.main),
        Screen::SavingsPotDetail(detail) => pot_detail::render(frame, detail, layout.main),
        Screen::ParentalDashboard(dashboard) => parental::render(frame, dashboard, layout.main),
        Screen::TransactionHistory { screen, searching } => {
            transactions::render(frame, screen, *searching, layout.main)
        }
        Screen::NotFound => render_not_found(frame, layout.main),
    }

    status_bar::render(frame, app, layout.status_bar);
}

fn render_header(frame: &mut Frame, app: &App, area: Rect) {
    let route = app.history.current().route;
    let line = Line::from(vec![
        Span::styled(
            " GrowBank ",
            Style::default()
                .fg(Color::Black)
                .bg(Color::Green)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw("  "),
        Span::styled(route.title(), Style::default().fg(Color::Cyan)),
        Span::styled(format!("  {}", route), Style::default().fg(Color::DarkGray)),
    ]);

    let block = Block::default()
        .borders(Borders::BOTTOM)
        .border_style(Style::default().fg(Color::DarkGray));
    frame.render_widget(Paragraph::new(line).block(block), area);
}

fn render_not_found(frame: &mut Frame, area: Rect) {
    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            "404",
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        )),
        Line::from("Oops! Page not found"),
        Line::from(""),
        Line::from(Span::styled(
            "Press Enter to return home",
            Style::default().fg(Color::DarkGray),
        )),
    ];
    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), area);
}

/// Progress gauge used by pot cards and the wizard header
pub(crate) fn progress_gauge(percent: f64, color: Color) -> Gauge<'static> {
    Gauge::default()
        .gauge_style(Style::default().fg(color).bg(Color::DarkGray))
        .ratio((percent / 100.0).clamp(0.0, 1.0))
        .label(format!("{:.0}%", percent))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Settings;
    use crate::data::MockDataProvider;
    use crate::navigation::Route;
    use ratatui::{backend::TestBackend, Terminal};
    use std::time::Instant;

    fn draw(route: Route) -> String {
        let app = App::new(MockDataProvider::new(), Settings::default(), route, Instant::now());
        let mut terminal = Terminal::new(TestBackend::new(100, 40)).unwrap();
        terminal.draw(|frame| render(frame, &app)).unwrap();
        let buffer = terminal.backend().buffer();
        let mut text = String::new();
        for y in 0..buffer.area.height {
            for x in 0..buffer.area.width {
                text.push_str(buffer[(x, y)].symbol());
            }
            text.push('\n');
        }
        text
    }

    #[test]
    fn test_every_route_renders() {
        assert!(draw(Route::Onboarding).contains("Parent's Information"));
        assert!(draw(Route::YouthDashboard).contains("Your Savings Pots"));
        assert!(draw(Route::ParentalDashboard).contains("Chloe"));
        assert!(draw(Route::TransactionHistory).contains("Odeon Cinema"));
        assert!(draw(Route::NotFound).contains("Page not found"));
    }
}
