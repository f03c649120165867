//! Parental control widget
//!
//! Three lines: label with an on/off switch, the description, and a slider
//! filled in proportion to the amount. Disabled controls are dimmed.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Widget,
};

use crate::screens::ParentalControl;

pub struct ControlWidget<'a> {
    control: &'a ParentalControl,
    focused: bool,
}

impl<'a> ControlWidget<'a> {
    pub fn new(control: &'a ParentalControl) -> Self {
        Self {
            control,
            focused: false,
        }
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    /// Slider track of `width` cells, `fill_ratio` of them filled
    fn slider(&self, width: usize) -> String {
        let filled = (self.control.fill_ratio() * width as f64).round() as usize;
        let filled = filled.min(width);
        format!("{}{}", "━".repeat(filled), "─".repeat(width - filled))
    }
}

impl Widget for ControlWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 || area.width == 0 {
            return;
        }

        let spec = self.control.spec();
        let enabled = self.control.is_enabled();

        let label_style = if self.focused {
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::White)
        };
        let switch = if enabled {
            Span::styled("[ ON]", Style::default().fg(Color::Green))
        } else {
            Span::styled("[OFF]", Style::default().fg(Color::DarkGray))
        };
        let marker = if self.focused { "▶ " } else { "  " };
        let header = Line::from(vec![
            Span::styled(marker, Style::default().fg(Color::Cyan)),
            Span::styled(spec.label.clone(), label_style),
            Span::raw(" "),
            switch,
        ]);
        buf.set_line(area.x, area.y, &header, area.width);

        if area.height > 1 {
            buf.set_string(
                area.x + 2,
                area.y + 1,
                &spec.description,
                Style::default().fg(Color::DarkGray),
            );
        }

        if area.height > 2 {
            let amount = self.control.display_amount();
            let track_width = (area.width as usize).saturating_sub(amount.chars().count() + 4);
            let slider_color = if enabled { Color::Green } else { Color::DarkGray };
            let amount_style = if enabled {
                Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::DarkGray)
            };
            let line = Line::from(vec![
                Span::raw("  "),
                Span::styled(self.slider(track_width), Style::default().fg(slider_color)),
                Span::raw(" "),
                Span::styled(amount, amount_style),
            ]);
            buf.set_line(area.x, area.y + 2, &line, area.width);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ControlSpec, ControlValue, Money};

    fn control(amount: i64) -> ParentalControl {
        let spec = ControlSpec::new(
            "Weekly Allowance",
            "Paid every Monday",
            Money::from_pounds(20),
            Money::from_pounds(1),
        );
        ParentalControl::new(spec, ControlValue::new(true, Money::from_pounds(amount)))
    }

    #[test]
    fn test_slider_fill_follows_amount() {
        let control = control(10);
        let widget = ControlWidget::new(&control);
        assert_eq!(widget.slider(10), "━━━━━─────");

        let full = self::control(20);
        assert_eq!(ControlWidget::new(&full).slider(4), "━━━━");
    }

    #[test]
    fn test_render_shows_label_and_amount() {
        let control = control(5);
        let area = Rect::new(0, 0, 40, 3);
        let mut buf = Buffer::empty(area);
        ControlWidget::new(&control).focused(true).render(area, &mut buf);

        let row = |y: u16| -> String { (0..40u16).map(|x| buf[(x, y)].symbol().to_string()).collect() };
        assert!(row(0).contains("Weekly Allowance"));
        assert!(row(0).contains("ON"));
        assert!(row(2).contains("£5"));
    }
}
